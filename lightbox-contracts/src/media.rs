//! Media element abstraction.
//!
//! A [`MediaSurface`] is one renderable video element owned by the host.
//! Every call is fire-and-forget except [`MediaSurface::request_play`],
//! whose outcome the host reports later by handing the ticket back to the
//! engine together with a `Result<(), MediaError>`.

use lightbox_model::{PlayTicket, SlotId};
use thiserror::Error;
use url::Url;

/// Failure reported by a host for a media operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("unsupported media: {0}")]
    Unsupported(String),
    #[error("playback rejected: {0}")]
    Rejected(String),
}

pub trait MediaSurface {
    /// Bind a source (and optional poster) with eager preloading. Replaces
    /// whatever was attached before.
    fn attach(&mut self, source: &Url, poster: Option<&Url>);

    /// Drop the source and stop any network or decode work.
    fn detach(&mut self);

    fn set_muted(&mut self, muted: bool);

    /// Seek to time zero.
    fn rewind(&mut self);

    fn pause(&mut self);

    /// Start playback. The outcome is delivered asynchronously with the
    /// same ticket.
    fn request_play(&mut self, ticket: PlayTicket);

    /// Show the poster frame in place of video until the next attach.
    fn show_poster(&mut self);
}

/// Creates the ring's physical surfaces on first open.
pub trait SurfaceFactory {
    type Surface: MediaSurface;

    fn create(&mut self, slot: SlotId) -> Self::Surface;
}

impl<F, S> SurfaceFactory for F
where
    F: FnMut(SlotId) -> S,
    S: MediaSurface,
{
    type Surface = S;

    fn create(&mut self, slot: SlotId) -> S {
        self(slot)
    }
}
