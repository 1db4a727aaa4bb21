//! Tokens handed to hosts when the engine suspends on asynchronous work.
//!
//! Hosts echo a ticket back when the work settles (a play request resolves,
//! a transition ends, a fallback timer fires). The engine compares the
//! ticket against its live session before acting on it, so a callback that
//! outlives its session or its buffer binding is discarded.

/// Session generation. Bumped whenever a session opens, closes, or commits
/// a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Physical buffer index inside the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub u8);

impl SlotId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-buffer binding counter. Bumped on every bind and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferEpoch(pub u64);

impl BufferEpoch {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Why a play request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayIntent {
    /// Forced decode of the first frame; paused again once it resolves.
    Prime,
    /// Visible, audible playback of the current clip.
    Activate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayTicket {
    pub generation: Generation,
    pub slot: SlotId,
    pub epoch: BufferEpoch,
    pub intent: PlayIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationTicket {
    pub generation: Generation,
    pub serial: u64,
}
