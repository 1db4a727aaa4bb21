//! Carousel constants
//!
//! Defaults for gesture classification and the page-turn animation. Tuning
//! should happen here (or through [`crate::CarouselConfig`]) so every host
//! gets the same feel.

/// Gesture classification defaults.
pub mod gesture {
    /// Movement (px, either axis) before a touch is classified.
    pub const DEAD_ZONE_PX: f32 = 10.0;
    /// Fraction of the drag kept when pulling past the first or last clip.
    pub const EDGE_RESISTANCE: f32 = 0.3;
    /// Fraction of the viewport width that commits a page turn on release.
    pub const COMMIT_FRACTION: f32 = 0.25;
    /// Average velocity (px/ms) over the whole gesture that counts as a flick.
    pub const FLICK_VELOCITY_PX_PER_MS: f32 = 0.3;
    /// Minimum distance (px) for a flick; shorter jitters never commit.
    pub const FLICK_MIN_DISTANCE_PX: f32 = 30.0;
}

/// Page-turn animation defaults.
pub mod snap {
    /// Duration (ms) of the track transition.
    pub const DURATION_MS: u64 = 250;
    /// Fallback timer (ms) that completes a transition whose end signal never
    /// arrives. Kept slightly longer than [`DURATION_MS`].
    pub const FALLBACK_MS: u64 = 300;
}

/// Track geometry: three panels side by side.
pub mod track {
    pub const PREVIOUS_PANEL: f32 = 0.0;
    pub const CURRENT_PANEL: f32 = 1.0;
    pub const NEXT_PANEL: f32 = 2.0;
}
