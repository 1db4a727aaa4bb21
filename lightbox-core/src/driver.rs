//! Tokio front end for the engine.
//!
//! Hosts that live on an async runtime push [`CarouselMessage`]s through a
//! [`DriverHandle`] and let [`CarouselDriver::run`] apply them in order.
//! The handle also arms fallback timers, so an `OverlayHost` implementation
//! can satisfy `schedule_fallback` by holding a clone of it.

use std::time::Duration;

use lightbox_contracts::host::OverlayHost;
use lightbox_contracts::media::SurfaceFactory;
use lightbox_model::AnimationTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::{Carousel, CarouselMessage};
use crate::error::CarouselError;

#[derive(Debug)]
enum DriverEvent {
    Message(CarouselMessage),
    Shutdown,
}

/// Cloneable sender side of a driver.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    tx: mpsc::UnboundedSender<DriverEvent>,
}

/// Receiver side; turned into a [`CarouselDriver`] once the engine exists.
#[derive(Debug)]
pub struct DriverInbox {
    rx: mpsc::UnboundedReceiver<DriverEvent>,
}

/// Create a handle/inbox pair. The handle can be given to the host before
/// the engine that owns the host is built.
pub fn channel() -> (DriverHandle, DriverInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (DriverHandle { tx }, DriverInbox { rx })
}

impl DriverHandle {
    pub fn send(&self, message: CarouselMessage) -> Result<(), CarouselError> {
        self.tx
            .send(DriverEvent::Message(message))
            .map_err(|_| CarouselError::DriverClosed)
    }

    /// Ask the driver loop to stop after the messages already queued.
    pub fn shutdown(&self) -> Result<(), CarouselError> {
        self.tx
            .send(DriverEvent::Shutdown)
            .map_err(|_| CarouselError::DriverClosed)
    }

    /// Deliver `FallbackElapsed(ticket)` after `delay`. Must be called from
    /// within a tokio runtime.
    pub fn arm_fallback(
        &self,
        delay: Duration,
        ticket: AnimationTicket,
    ) -> JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The driver may already be gone; nothing left to complete then.
            let _ = tx.send(DriverEvent::Message(
                CarouselMessage::FallbackElapsed(ticket),
            ));
        })
    }
}

#[derive(Debug)]
pub struct CarouselDriver<F: SurfaceFactory, H: OverlayHost> {
    engine: Carousel<F, H>,
    inbox: DriverInbox,
}

impl<F: SurfaceFactory, H: OverlayHost> CarouselDriver<F, H> {
    pub fn new(engine: Carousel<F, H>, inbox: DriverInbox) -> Self {
        Self { engine, inbox }
    }

    pub fn engine(&self) -> &Carousel<F, H> {
        &self.engine
    }

    /// Apply messages until shutdown is requested or every handle is
    /// dropped, then hand the engine back.
    pub async fn run(mut self) -> Carousel<F, H> {
        while let Some(event) = self.inbox.rx.recv().await {
            match event {
                DriverEvent::Message(message) => {
                    if let Err(err) = self.engine.update(message) {
                        warn!(error = %err, "carousel message rejected");
                    }
                }
                DriverEvent::Shutdown => {
                    debug!("carousel driver shutting down");
                    break;
                }
            }
        }
        self.engine
    }
}
