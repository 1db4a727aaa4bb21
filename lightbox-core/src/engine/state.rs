use lightbox_model::{AnimationTicket, Clip, Sequence};
use uuid::Uuid;

use crate::constants::track;
use crate::gesture::{ReleaseContext, Verdict};

/// Lifecycle of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Closed,
    Opening,
    Idle,
    Dragging,
    Animating,
    Closing,
}

impl ViewState {
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Animating => "animating",
            Self::Closing => "closing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingAnimation {
    pub ticket: AnimationTicket,
    pub target: Verdict,
}

/// Everything that only exists while the overlay is open.
#[derive(Debug)]
pub(crate) struct Session {
    pub id: Uuid,
    pub sequence: Sequence,
    pub index: usize,
    pub saved_scroll: f64,
    pub viewport_width: f32,
    pub animation: Option<PendingAnimation>,
}

impl Session {
    pub fn new(
        sequence: Sequence,
        index: usize,
        saved_scroll: f64,
        viewport_width: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence,
            index,
            saved_scroll,
            viewport_width,
            animation: None,
        }
    }

    pub fn current(&self) -> Option<&Clip> {
        self.sequence.get(self.index)
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.sequence.len()
    }

    pub fn can_page(&self, verdict: Verdict) -> bool {
        match verdict {
            Verdict::Next => self.has_next(),
            Verdict::Prev => self.has_prev(),
            Verdict::SnapBack => true,
        }
    }

    pub fn release_context(&self) -> ReleaseContext {
        ReleaseContext {
            viewport_width: self.viewport_width,
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }

    /// Track offset that puts the current panel in view.
    pub fn centre_offset(&self) -> f32 {
        panel_offset(track::CURRENT_PANEL, self.viewport_width)
    }

    /// Track offset an animation toward `target` ends at.
    pub fn target_offset(&self, target: Verdict) -> f32 {
        let panel = match target {
            Verdict::Next => track::NEXT_PANEL,
            Verdict::Prev => track::PREVIOUS_PANEL,
            Verdict::SnapBack => track::CURRENT_PANEL,
        };
        panel_offset(panel, self.viewport_width)
    }
}

pub fn panel_offset(panel: f32, width: f32) -> f32 {
    -panel * width
}
