//! One physical media element in the ring and its playback lifecycle.

use lightbox_contracts::media::{MediaError, MediaSurface};
use lightbox_model::{
    BufferEpoch, Clip, ClipId, Generation, PlayIntent, PlayTicket, SlotId,
};
use tracing::{debug, trace};

use crate::error::CarouselError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferPhase {
    /// Nothing attached.
    Empty,
    /// Source attached and preloading, no play requested.
    Loaded,
    /// Muted forced-decode play pending.
    Priming,
    /// First frame decoded; paused at zero and muted.
    Primed,
    /// Audible play requested for the current clip.
    Activating,
    Playing,
    /// Activation failed; the poster is showing.
    Failed,
}

impl BufferPhase {
    /// Audible or about to be.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Activating | Self::Playing)
    }
}

#[derive(Debug)]
pub struct PlaybackBuffer<S> {
    slot: SlotId,
    surface: S,
    clip: Option<Clip>,
    epoch: BufferEpoch,
    phase: BufferPhase,
}

impl<S: MediaSurface> PlaybackBuffer<S> {
    pub fn new(slot: SlotId, surface: S) -> Self {
        Self {
            slot,
            surface,
            clip: None,
            epoch: BufferEpoch::default(),
            phase: BufferPhase::Empty,
        }
    }

    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn clip(&self) -> Option<&Clip> {
        self.clip.as_ref()
    }

    pub fn clip_id(&self) -> Option<&ClipId> {
        self.clip.as_ref().map(Clip::id)
    }

    pub fn epoch(&self) -> BufferEpoch {
        self.epoch
    }

    pub fn phase(&self) -> BufferPhase {
        self.phase
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Attach `clip` unless it is already bound. Returns true when the source
    /// changed, which starts a new epoch and invalidates pending tickets.
    pub fn bind(&mut self, clip: &Clip) -> bool {
        if self.phase != BufferPhase::Empty
            && self.clip_id() == Some(clip.id())
        {
            return false;
        }
        self.surface.attach(clip.media_source(), clip.poster());
        self.epoch = self.epoch.next();
        self.clip = Some(clip.clone());
        self.phase = BufferPhase::Loaded;
        trace!(slot = self.slot.0, clip = %clip.id(), "buffer bound");
        true
    }

    /// Muted play-then-pause so the first frame decodes without audio.
    pub fn prime_silently(&mut self, generation: Generation) {
        if self.phase == BufferPhase::Empty {
            return;
        }
        self.surface.set_muted(true);
        self.surface.rewind();
        self.phase = BufferPhase::Priming;
        self.surface.request_play(self.ticket(generation, PlayIntent::Prime));
    }

    pub fn activate(&mut self, generation: Generation) {
        if self.phase == BufferPhase::Empty {
            return;
        }
        self.surface.set_muted(false);
        self.phase = BufferPhase::Activating;
        self.surface
            .request_play(self.ticket(generation, PlayIntent::Activate));
    }

    /// Stop playback but keep the clip loaded and ready at time zero.
    pub fn deactivate(&mut self) {
        if self.phase == BufferPhase::Empty {
            return;
        }
        self.surface.pause();
        self.surface.rewind();
        self.surface.set_muted(true);
        if self.phase != BufferPhase::Failed {
            self.phase = BufferPhase::Primed;
        }
    }

    /// Drop the source entirely.
    pub fn release(&mut self) {
        if self.phase == BufferPhase::Empty {
            return;
        }
        self.surface.pause();
        self.surface.detach();
        self.clip = None;
        self.epoch = self.epoch.next();
        self.phase = BufferPhase::Empty;
    }

    /// Apply the outcome of a play request issued by this buffer.
    ///
    /// Tickets from an earlier binding, or whose intent no longer matches
    /// the buffer's phase, are reported as stale and change nothing.
    pub fn settle(
        &mut self,
        ticket: PlayTicket,
        outcome: Result<(), MediaError>,
    ) -> Result<(), CarouselError> {
        if ticket.slot != self.slot || ticket.epoch != self.epoch {
            return Err(CarouselError::StaleCallback("buffer rebound"));
        }
        match (ticket.intent, self.phase) {
            (PlayIntent::Prime, BufferPhase::Priming) => {
                if let Err(err) = outcome {
                    // Priming is best effort; the clip still plays on arrival.
                    debug!(slot = self.slot.0, error = %err, "prime failed");
                    self.phase = BufferPhase::Loaded;
                    return Ok(());
                }
                self.surface.pause();
                self.surface.rewind();
                self.phase = BufferPhase::Primed;
                Ok(())
            }
            (PlayIntent::Activate, BufferPhase::Activating) => match outcome {
                Ok(()) => {
                    self.phase = BufferPhase::Playing;
                    Ok(())
                }
                Err(source) => {
                    self.surface.show_poster();
                    self.phase = BufferPhase::Failed;
                    let clip = self
                        .clip_id()
                        .cloned()
                        .ok_or(CarouselError::StaleCallback("buffer empty"))?;
                    Err(CarouselError::ActivationFailed { clip, source })
                }
            },
            _ => Err(CarouselError::StaleCallback("intent superseded")),
        }
    }

    fn ticket(&self, generation: Generation, intent: PlayIntent) -> PlayTicket {
        PlayTicket {
            generation,
            slot: self.slot,
            epoch: self.epoch,
            intent,
        }
    }
}
