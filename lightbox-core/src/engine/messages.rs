//! Messages the host feeds into the engine.

use lightbox_contracts::media::MediaError;
use lightbox_model::{AnimationTicket, PlayTicket, Sequence};

use crate::gesture::PointerSample;

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM-style key name (`"ArrowRight"`, `"Escape"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    // Lifecycle
    Open { sequence: Sequence, index: usize },
    Close,

    // Navigation
    Next,
    Prev,
    Key(Key),

    // Touch
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp(PointerSample),
    PointerCancel,

    // Layout
    Resize(f32),

    // Host callbacks
    PlaySettled {
        ticket: PlayTicket,
        outcome: Result<(), MediaError>,
    },
    TransitionEnded(AnimationTicket),
    FallbackElapsed(AnimationTicket),
}
