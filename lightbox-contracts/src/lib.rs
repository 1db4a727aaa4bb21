//! Trait surfaces that describe how the carousel engine talks to the page
//! it is embedded in: the clip list, the media elements, the overlay, and
//! the optional review layer.
#![allow(missing_docs)]

pub mod host;
pub mod media;
pub mod motion;
pub mod observer;
pub mod source;

/// Frequently used traits and types for engine hosts.
pub mod prelude {
    pub use super::host::OverlayHost;
    pub use super::media::{MediaError, MediaSurface, SurfaceFactory};
    pub use super::motion::{Easing, TrackTransition};
    pub use super::observer::SelectionObserver;
    pub use super::source::MediaSequenceSource;
}
