//! Message dispatch for hosts that drive the engine through a queue.

use lightbox_contracts::host::OverlayHost;
use lightbox_contracts::media::SurfaceFactory;
use tracing::trace;

use super::{Carousel, CarouselMessage};
use crate::error::CarouselError;

impl<F: SurfaceFactory, H: OverlayHost> Carousel<F, H> {
    /// Apply one message. Stale callbacks and handled activation failures
    /// are absorbed here; only caller mistakes come back as errors.
    pub fn update(
        &mut self,
        message: CarouselMessage,
    ) -> Result<(), CarouselError> {
        match message {
            CarouselMessage::Open { sequence, index } => {
                self.open_sequence(sequence, index)
            }
            CarouselMessage::Close => {
                self.close();
                Ok(())
            }
            CarouselMessage::Next => {
                self.next();
                Ok(())
            }
            CarouselMessage::Prev => {
                self.prev();
                Ok(())
            }
            CarouselMessage::Key(key) => {
                self.handle_key(key);
                Ok(())
            }
            CarouselMessage::PointerDown(sample) => {
                self.pointer_down(sample);
                Ok(())
            }
            CarouselMessage::PointerMove(sample) => {
                self.pointer_move(sample);
                Ok(())
            }
            CarouselMessage::PointerUp(sample) => {
                self.pointer_up(sample);
                Ok(())
            }
            CarouselMessage::PointerCancel => {
                self.pointer_cancel();
                Ok(())
            }
            CarouselMessage::Resize(width) => {
                self.resize(width);
                Ok(())
            }
            CarouselMessage::PlaySettled { ticket, outcome } => {
                absorb(self.settle_play(ticket, outcome), "play settled")
            }
            CarouselMessage::TransitionEnded(ticket) => {
                absorb(self.finish_animation(ticket), "transition ended")
            }
            CarouselMessage::FallbackElapsed(ticket) => {
                absorb(self.finish_animation(ticket), "fallback elapsed")
            }
        }
    }
}

fn absorb(
    result: Result<(), CarouselError>,
    source: &'static str,
) -> Result<(), CarouselError> {
    match result {
        Err(err) if err.is_stale() => {
            trace!(source, %err, "callback dropped");
            Ok(())
        }
        Err(CarouselError::ActivationFailed { .. }) => Ok(()),
        other => other,
    }
}
