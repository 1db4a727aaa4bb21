//! Three playback buffers rotated between the previous, current and next
//! roles.
//!
//! Buffers are allocated once and never recreated. A page turn only
//! remaps roles, so the clip that was `Next` becomes `Current` without
//! reloading, and the buffer that scrolled out of range is rebound to the
//! newly exposed neighbor.

use lightbox_contracts::media::{MediaError, MediaSurface, SurfaceFactory};
use lightbox_model::{ClipId, Generation, PlayTicket, Sequence, SlotId};
use tracing::trace;

use crate::buffer::{BufferPhase, PlaybackBuffer};
use crate::error::CarouselError;

pub const RING_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Previous,
    Current,
    Next,
}

impl Role {
    pub const ALL: [Role; RING_SIZE] = [Role::Previous, Role::Current, Role::Next];

    /// Offset from the current index this role displays.
    pub fn offset(self) -> isize {
        match self {
            Role::Previous => -1,
            Role::Current => 0,
            Role::Next => 1,
        }
    }

    /// Track panel the role's buffer is mounted in.
    pub fn panel(self) -> usize {
        match self {
            Role::Previous => 0,
            Role::Current => 1,
            Role::Next => 2,
        }
    }

    fn index(self) -> usize {
        self.panel()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Previous => write!(f, "prev"),
            Role::Current => write!(f, "current"),
            Role::Next => write!(f, "next"),
        }
    }
}

/// Direction of a committed page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Forward,
    Backward,
}

#[derive(Debug)]
pub struct BufferRing<S> {
    buffers: [PlaybackBuffer<S>; RING_SIZE],
    /// `roles[role.index()]` is the physical buffer holding that role.
    roles: [usize; RING_SIZE],
}

impl<S: MediaSurface> BufferRing<S> {
    pub fn new<F>(factory: &mut F) -> Self
    where
        F: SurfaceFactory<Surface = S>,
    {
        let buffers = std::array::from_fn(|i| {
            let slot = SlotId(i as u8);
            PlaybackBuffer::new(slot, factory.create(slot))
        });
        Self {
            buffers,
            roles: [0, 1, 2],
        }
    }

    pub fn buffer(&self, role: Role) -> &PlaybackBuffer<S> {
        &self.buffers[self.roles[role.index()]]
    }

    fn buffer_mut(&mut self, role: Role) -> &mut PlaybackBuffer<S> {
        &mut self.buffers[self.roles[role.index()]]
    }

    pub fn slot(&self, role: Role) -> SlotId {
        self.buffer(role).slot()
    }

    pub fn bound_clip(&self, role: Role) -> Option<&ClipId> {
        self.buffer(role).clip_id()
    }

    /// Role currently held by a physical slot.
    pub fn role_of(&self, slot: SlotId) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| self.roles[role.index()] == slot.index())
    }

    /// Remap roles for a committed page turn. Forward: the old current
    /// becomes previous, the old next becomes current, and the old previous
    /// is recycled as the new next. Backward mirrors it.
    pub fn rotate(&mut self, shift: Shift) {
        let [prev, current, next] = self.roles;
        self.roles = match shift {
            Shift::Forward => [current, next, prev],
            Shift::Backward => [next, prev, current],
        };
        trace!(?shift, roles = ?self.roles, "ring rotated");
    }

    /// Bring every role in line with `index`: the current clip is activated
    /// and in-range neighbors are primed, out-of-range neighbors released.
    /// Buffers already holding the right clip are not reloaded.
    pub fn prime(
        &mut self,
        sequence: &Sequence,
        index: usize,
        generation: Generation,
    ) {
        if let Some(clip) = sequence.get(index) {
            let current = self.buffer_mut(Role::Current);
            current.bind(clip);
            current.activate(generation);
        }

        for role in [Role::Previous, Role::Next] {
            let buffer = self.buffer_mut(role);
            let Some(clip) = sequence.offset(index, role.offset()) else {
                buffer.release();
                continue;
            };
            let rebound = buffer.bind(clip);
            if rebound || buffer.phase() == BufferPhase::Loaded {
                buffer.prime_silently(generation);
            } else if buffer.phase().is_live() || buffer.phase() == BufferPhase::Failed {
                buffer.deactivate();
            }
        }
    }

    /// Route a play outcome to the buffer that issued it.
    pub fn settle(
        &mut self,
        ticket: PlayTicket,
        outcome: Result<(), MediaError>,
    ) -> Result<(), CarouselError> {
        let buffer = self
            .buffers
            .get_mut(ticket.slot.index())
            .ok_or(CarouselError::StaleCallback("unknown slot"))?;
        buffer.settle(ticket, outcome)
    }

    /// Stop and detach every buffer. Roles reset so the next session starts
    /// from a known layout.
    pub fn release_all(&mut self) {
        for buffer in &mut self.buffers {
            buffer.deactivate();
            buffer.release();
        }
        self.roles = [0, 1, 2];
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &PlaybackBuffer<S>)> {
        Role::ALL.into_iter().map(|role| (role, self.buffer(role)))
    }
}
