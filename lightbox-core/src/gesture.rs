//! Touch gesture classification.
//!
//! A gesture starts undecided. Once it leaves the dead zone it locks to one
//! axis for the rest of its life: horizontal gestures page the carousel,
//! vertical ones are left to the page. On release a horizontal gesture is
//! judged as next, previous, or snap back.

use std::time::{Duration, Instant};

use crate::config::CarouselConfig;

/// One pointer position with its timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub at: Instant,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, at: Instant) -> Self {
        Self { x, y, at }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// No gesture in progress.
    Idle,
    /// Still inside the dead zone.
    Undecided,
    /// Locked horizontal; `dx` is the raw displacement from the start point.
    Paging { dx: f32 },
    /// Locked vertical; the page owns this gesture.
    Scrolling,
}

/// Outcome of a horizontal gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Next,
    Prev,
    SnapBack,
}

/// What the recognizer needs to know about the carousel at release time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseContext {
    pub viewport_width: f32,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    origin: PointerSample,
    axis: Axis,
}

impl DragSession {
    fn displacement(&self, sample: &PointerSample) -> (f32, f32) {
        (sample.x - self.origin.x, sample.y - self.origin.y)
    }
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: CarouselConfig,
    session: Option<DragSession>,
}

impl GestureRecognizer {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Start tracking a new gesture, discarding any previous one.
    pub fn begin(&mut self, sample: PointerSample) {
        self.session = Some(DragSession {
            origin: sample,
            axis: Axis::Undetermined,
        });
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn axis(&self) -> Option<Axis> {
        self.session.map(|s| s.axis)
    }

    /// Feed a move sample. The first sample outside the dead zone fixes the
    /// axis; horizontal wins when both displacements are equal.
    pub fn track(&mut self, sample: PointerSample) -> GestureUpdate {
        let dead_zone = self.config.dead_zone_px;
        let Some(session) = self.session.as_mut() else {
            return GestureUpdate::Idle;
        };
        let (dx, dy) = session.displacement(&sample);

        if session.axis == Axis::Undetermined {
            if dx.abs() < dead_zone && dy.abs() < dead_zone {
                return GestureUpdate::Undecided;
            }
            session.axis = if dx.abs() >= dy.abs() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
        }

        match session.axis {
            Axis::Horizontal => GestureUpdate::Paging { dx },
            Axis::Vertical => GestureUpdate::Scrolling,
            Axis::Undetermined => GestureUpdate::Undecided,
        }
    }

    /// End the gesture. Only a horizontally locked gesture yields a verdict.
    pub fn release(
        &mut self,
        sample: PointerSample,
        ctx: ReleaseContext,
    ) -> Option<Verdict> {
        let session = self.session.take()?;
        if session.axis != Axis::Horizontal {
            return None;
        }
        let (dx, _) = session.displacement(&sample);
        let elapsed = sample.at.saturating_duration_since(session.origin.at);
        Some(decide(dx, elapsed, ctx, &self.config))
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }
}

/// Judge a finished horizontal gesture from its total displacement and
/// duration. A zero duration counts as one millisecond.
pub fn decide(
    dx: f32,
    elapsed: Duration,
    ctx: ReleaseContext,
    config: &CarouselConfig,
) -> Verdict {
    let distance = dx.abs();
    let elapsed_ms = (elapsed.as_secs_f32() * 1000.0).max(1.0);
    let velocity = distance / elapsed_ms;

    let far_enough = ctx.viewport_width > 0.0
        && distance >= ctx.viewport_width * config.commit_fraction;
    let flicked = velocity > config.flick_velocity_px_per_ms
        && distance > config.flick_min_distance_px;

    if !(far_enough || flicked) {
        return Verdict::SnapBack;
    }
    if dx < 0.0 && ctx.has_next {
        Verdict::Next
    } else if dx > 0.0 && ctx.has_prev {
        Verdict::Prev
    } else {
        Verdict::SnapBack
    }
}

/// Live track displacement for a drag. Pulling toward a missing neighbor
/// moves the track at `resistance` of the finger's speed.
pub fn dampen(dx: f32, has_prev: bool, has_next: bool, resistance: f32) -> f32 {
    let past_start = dx > 0.0 && !has_prev;
    let past_end = dx < 0.0 && !has_next;
    if past_start || past_end {
        dx * resistance
    } else {
        dx
    }
}
