//! Simulated page for headless replays.
//!
//! Media always becomes ready and every transition ends; the host only
//! queues those completions so the replayer can feed them back into the
//! engine after each step, the way a browser event loop would.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use lightbox_contracts::prelude::*;
use lightbox_model::{AnimationTicket, PlayTicket, SlotId};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completion {
    Play(PlayTicket),
    Transition(AnimationTicket),
}

pub type CompletionQueue = Rc<RefCell<VecDeque<Completion>>>;

#[derive(Debug)]
pub struct SimSurface {
    slot: SlotId,
    source: Option<Url>,
    muted: bool,
    completions: CompletionQueue,
}

impl SimSurface {
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl MediaSurface for SimSurface {
    fn attach(&mut self, source: &Url, _poster: Option<&Url>) {
        self.source = Some(source.clone());
    }

    fn detach(&mut self) {
        self.source = None;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn rewind(&mut self) {}

    fn pause(&mut self) {}

    fn request_play(&mut self, ticket: PlayTicket) {
        self.completions
            .borrow_mut()
            .push_back(Completion::Play(ticket));
    }

    fn show_poster(&mut self) {}
}

#[derive(Debug, Clone)]
pub struct SimFactory {
    completions: CompletionQueue,
}

impl SimFactory {
    pub fn new(completions: CompletionQueue) -> Self {
        Self { completions }
    }
}

impl SurfaceFactory for SimFactory {
    type Surface = SimSurface;

    fn create(&mut self, slot: SlotId) -> SimSurface {
        SimSurface {
            slot,
            source: None,
            muted: true,
            completions: Rc::clone(&self.completions),
        }
    }
}

#[derive(Debug)]
pub struct SimHost {
    scroll: f64,
    width: f32,
    track_offset: f32,
    overlay_visible: bool,
    completions: CompletionQueue,
}

impl SimHost {
    pub fn new(width: f32, completions: CompletionQueue) -> Self {
        Self {
            scroll: 0.0,
            width,
            track_offset: 0.0,
            overlay_visible: false,
            completions,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }
}

impl OverlayHost for SimHost {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn freeze_page(&mut self, _offset: f64) {}

    fn restore_page(&mut self, offset: f64) {
        self.scroll = offset;
    }

    fn show_overlay(&mut self) {
        self.overlay_visible = true;
    }

    fn hide_overlay(&mut self) {
        self.overlay_visible = false;
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn set_track_offset(&mut self, offset: f32) {
        self.track_offset = offset;
    }

    fn animate_track(
        &mut self,
        offset: f32,
        _transition: TrackTransition,
        ticket: AnimationTicket,
    ) {
        self.track_offset = offset;
        self.completions
            .borrow_mut()
            .push_back(Completion::Transition(ticket));
    }

    // Transitions always end here, so the fallback is never needed.
    fn schedule_fallback(&mut self, _delay: Duration, _ticket: AnimationTicket) {}

    fn capture_scroll(&mut self, _captured: bool) {}
}
