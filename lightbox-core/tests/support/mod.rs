//! Recording fakes for driving the carousel engine without a real page.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use lightbox_contracts::prelude::*;
use lightbox_core::{Carousel, CarouselConfig, CarouselError, PointerSample};
use lightbox_model::{
    AnimationTicket, Clip, ClipId, PlayIntent, PlayTicket, Sequence, SlotId,
};
use url::Url;

pub type PlayQueue = Rc<RefCell<Vec<PlayTicket>>>;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Attach(String),
    Detach,
    Muted(bool),
    Rewind,
    Pause,
    Play(PlayIntent),
    Poster,
}

#[derive(Debug)]
pub struct FakeSurface {
    pub slot: SlotId,
    pub calls: Vec<SurfaceCall>,
    pub source: Option<Url>,
    pub muted: bool,
    pub poster: bool,
    plays: PlayQueue,
}

impl FakeSurface {
    pub fn attach_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Attach(_)))
            .count()
    }
}

impl MediaSurface for FakeSurface {
    fn attach(&mut self, source: &Url, _poster: Option<&Url>) {
        self.calls.push(SurfaceCall::Attach(source.to_string()));
        self.source = Some(source.clone());
        self.poster = false;
    }

    fn detach(&mut self) {
        self.calls.push(SurfaceCall::Detach);
        self.source = None;
    }

    fn set_muted(&mut self, muted: bool) {
        self.calls.push(SurfaceCall::Muted(muted));
        self.muted = muted;
    }

    fn rewind(&mut self) {
        self.calls.push(SurfaceCall::Rewind);
    }

    fn pause(&mut self) {
        self.calls.push(SurfaceCall::Pause);
    }

    fn request_play(&mut self, ticket: PlayTicket) {
        self.calls.push(SurfaceCall::Play(ticket.intent));
        self.plays.borrow_mut().push(ticket);
    }

    fn show_poster(&mut self) {
        self.calls.push(SurfaceCall::Poster);
        self.poster = true;
    }
}

#[derive(Debug, Default)]
pub struct FakeFactory {
    pub plays: PlayQueue,
    pub created: usize,
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn create(&mut self, slot: SlotId) -> FakeSurface {
        self.created += 1;
        FakeSurface {
            slot,
            calls: Vec::new(),
            source: None,
            muted: false,
            poster: false,
            plays: Rc::clone(&self.plays),
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeHost {
    pub scroll: f64,
    pub frozen_at: Option<f64>,
    pub restored_to: Option<f64>,
    pub overlay_visible: bool,
    pub width: f32,
    pub track_offset: f32,
    pub animations: Vec<(f32, AnimationTicket)>,
    pub fallbacks: Vec<(Duration, AnimationTicket)>,
    pub captured: bool,
}

impl OverlayHost for FakeHost {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn freeze_page(&mut self, offset: f64) {
        self.frozen_at = Some(offset);
    }

    fn restore_page(&mut self, offset: f64) {
        self.frozen_at = None;
        self.restored_to = Some(offset);
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
        self.animations.push((offset, ticket));
    }

    fn schedule_fallback(&mut self, delay: Duration, ticket: AnimationTicket) {
        self.fallbacks.push((delay, ticket));
    }

    fn capture_scroll(&mut self, captured: bool) {
        self.captured = captured;
    }
}

/// Observer that records every notification as an optional id string.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub seen: Rc<RefCell<Vec<Option<String>>>>,
}

impl SelectionObserver for RecordingObserver {
    fn current_clip_changed(&mut self, clip: Option<&ClipId>) {
        self.seen
            .borrow_mut()
            .push(clip.map(|id| id.as_str().to_owned()));
    }
}

pub type TestCarousel = Carousel<FakeFactory, FakeHost>;

pub fn clips(ids: &[&str]) -> Sequence {
    ids.iter()
        .map(|id| {
            Clip::parse(
                id,
                &format!("https://cdn.example/{id}.mp4"),
                Some(&format!("https://cdn.example/{id}.jpg")),
            )
            .expect("valid clip")
        })
        .collect()
}

pub struct Harness {
    pub engine: TestCarousel,
    pub plays: PlayQueue,
    pub observed: Rc<RefCell<Vec<Option<String>>>>,
    pub clock: Instant,
}

impl Harness {
    pub fn new(width: f32) -> Self {
        Self::with_config(width, CarouselConfig::default())
    }

    pub fn with_config(width: f32, config: CarouselConfig) -> Self {
        let factory = FakeFactory::default();
        let plays = Rc::clone(&factory.plays);
        let host = FakeHost {
            scroll: 1234.5,
            width,
            ..Default::default()
        };
        let observer = RecordingObserver::default();
        let observed = Rc::clone(&observer.seen);
        let engine =
            Carousel::new(config, factory, host).with_observer(observer);
        Self {
            engine,
            plays,
            observed,
            clock: Instant::now(),
        }
    }

    pub fn host(&self) -> &FakeHost {
        self.engine.host()
    }

    pub fn take_plays(&self) -> Vec<PlayTicket> {
        std::mem::take(&mut *self.plays.borrow_mut())
    }

    /// Resolve every outstanding play request successfully.
    pub fn settle_all(&mut self) -> Vec<Result<(), CarouselError>> {
        self.take_plays()
            .into_iter()
            .map(|ticket| self.engine.settle_play(ticket, Ok(())))
            .collect()
    }

    pub fn last_animation(&self) -> AnimationTicket {
        self.host().animations.last().expect("animation started").1
    }

    /// Fire the transition-end signal for the running animation.
    pub fn end_transition(&mut self) -> Result<(), CarouselError> {
        let ticket = self.last_animation();
        self.engine.finish_animation(ticket)
    }

    pub fn sample(&self, x: f32, y: f32, ms: u64) -> PointerSample {
        PointerSample::new(x, y, self.clock + Duration::from_millis(ms))
    }

    /// Press at `x`, move to `x + dx` in steps, release after `ms`.
    pub fn swipe(&mut self, x: f32, dx: f32, ms: u64) {
        self.engine.pointer_down(self.sample(x, 300.0, 0));
        for step in 1..=4u64 {
            let fraction = step as f32 / 4.0;
            let sample = self.sample(x + dx * fraction, 300.0, ms * step / 4);
            self.engine.pointer_move(sample);
        }
        self.engine.pointer_up(self.sample(x + dx, 300.0, ms));
    }

    pub fn observed(&self) -> Vec<Option<String>> {
        self.observed.borrow().clone()
    }
}

pub fn id(value: &str) -> Option<String> {
    Some(value.to_owned())
}
