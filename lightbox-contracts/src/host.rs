use std::time::Duration;

use lightbox_model::AnimationTicket;

use crate::motion::TrackTransition;

/// The page-side half of the overlay: scroll position, overlay visibility
/// and the sliding three-panel track.
///
/// Track offsets are in pixels; panel `p` is fully in view at `-p * width`.
pub trait OverlayHost {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Pin the page in place behind the overlay at `offset`.
    fn freeze_page(&mut self, offset: f64);

    /// Unpin the page and scroll back to exactly `offset`.
    fn restore_page(&mut self, offset: f64);

    fn show_overlay(&mut self);

    fn hide_overlay(&mut self);

    /// Width of one panel (the overlay's client width).
    fn viewport_width(&self) -> f32;

    /// Move the track immediately, cancelling any running transition.
    fn set_track_offset(&mut self, offset: f32);

    /// Move the track with a transition. The host reports completion with
    /// the ticket when its transition-end signal fires.
    fn animate_track(
        &mut self,
        offset: f32,
        transition: TrackTransition,
        ticket: AnimationTicket,
    );

    /// Arm a one-shot timer that reports the ticket back after `delay`
    /// whether or not the transition-end signal fired.
    fn schedule_fallback(&mut self, delay: Duration, ticket: AnimationTicket);

    /// Block (or release) native page scrolling for the current touch.
    fn capture_scroll(&mut self, captured: bool);
}
