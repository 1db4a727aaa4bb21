//! Carousel engine for the lightbox overlay.
//!
//! The engine owns which clip is showing, turns raw pointer input into
//! page turns, keeps the previous/current/next clips ready in a ring of
//! three playback buffers, and drives the open/close/transition lifecycle.
//! Everything platform specific sits behind the traits in
//! [`lightbox_contracts`].
#![allow(missing_docs)]

pub mod buffer;
pub mod config;
pub mod constants;
pub mod driver;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod ring;

pub use buffer::{BufferPhase, PlaybackBuffer};
pub use config::CarouselConfig;
pub use driver::{CarouselDriver, DriverHandle, DriverInbox};
pub use engine::{Carousel, CarouselMessage, Key, ViewState};
pub use error::CarouselError;
pub use gesture::{
    Axis, GestureRecognizer, GestureUpdate, PointerSample, ReleaseContext,
    Verdict,
};
pub use ring::{BufferRing, Role, Shift};
