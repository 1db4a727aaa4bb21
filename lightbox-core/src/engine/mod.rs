//! The carousel engine: one open session at a time, driven by host input
//! and host callbacks.
//!
//! All work is synchronous. Anything the host completes later (a play
//! request, a track transition, a fallback timer) comes back as a ticket,
//! and a ticket minted under an older [`Generation`] is dropped on arrival.

mod messages;
mod state;
mod update;

pub use messages::{CarouselMessage, Key};
pub use state::{ViewState, panel_offset};

use lightbox_contracts::host::OverlayHost;
use lightbox_contracts::media::{MediaError, SurfaceFactory};
use lightbox_contracts::observer::SelectionObserver;
use lightbox_contracts::source::MediaSequenceSource;
use lightbox_model::{
    AnimationTicket, Clip, ClipId, Generation, PlayTicket, Sequence,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::buffer::BufferPhase;
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::gesture::{
    GestureRecognizer, GestureUpdate, PointerSample, Verdict, dampen,
};
use crate::ring::{BufferRing, Role, Shift};
use state::{PendingAnimation, Session};

pub struct Carousel<F: SurfaceFactory, H: OverlayHost> {
    config: CarouselConfig,
    factory: F,
    host: H,
    /// Allocated on first open, reused afterwards.
    ring: Option<BufferRing<F::Surface>>,
    recognizer: GestureRecognizer,
    observer: Option<Box<dyn SelectionObserver>>,
    state: ViewState,
    session: Option<Session>,
    generation: Generation,
    animation_serial: u64,
}

impl<F: SurfaceFactory, H: OverlayHost> std::fmt::Debug for Carousel<F, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("index", &self.current_index())
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl<F: SurfaceFactory, H: OverlayHost> Carousel<F, H> {
    pub fn new(config: CarouselConfig, factory: F, host: H) -> Self {
        Self {
            config,
            factory,
            host,
            ring: None,
            recognizer: GestureRecognizer::new(config),
            observer: None,
            state: ViewState::Closed,
            session: None,
            generation: Generation::default(),
            animation_serial: 0,
        }
    }

    pub fn with_observer(
        mut self,
        observer: impl SelectionObserver + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observer = Some(observer);
    }

    // Accessors

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.index)
    }

    pub fn current_clip(&self) -> Option<&Clip> {
        self.session.as_ref().and_then(Session::current)
    }

    /// The snapshot captured at open.
    pub fn sequence(&self) -> Option<&Sequence> {
        self.session.as_ref().map(|s| &s.sequence)
    }

    pub fn viewport_width(&self) -> Option<f32> {
        self.session.as_ref().map(|s| s.viewport_width)
    }

    /// Ticket of the transition in flight, if any.
    pub fn pending_animation(&self) -> Option<AnimationTicket> {
        self.session
            .as_ref()
            .and_then(|s| s.animation)
            .map(|a| a.ticket)
    }

    pub fn ring(&self) -> Option<&BufferRing<F::Surface>> {
        self.ring.as_ref()
    }

    pub fn bound_clip(&self, role: Role) -> Option<&ClipId> {
        self.ring.as_ref().and_then(|r| r.bound_clip(role))
    }

    pub fn buffer_phase(&self, role: Role) -> Option<BufferPhase> {
        self.ring.as_ref().map(|r| r.buffer(role).phase())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // Lifecycle

    /// Open the overlay on `index` of a snapshot taken from `source`.
    ///
    /// Opening while already open is ignored.
    pub fn open<S>(&mut self, source: &S, index: usize) -> Result<(), CarouselError>
    where
        S: MediaSequenceSource + ?Sized,
    {
        if self.state.is_open() {
            debug!(state = %self.state, index, "open ignored; overlay already open");
            return Ok(());
        }
        self.open_sequence(source.snapshot(), index)
    }

    fn open_sequence(
        &mut self,
        sequence: Sequence,
        index: usize,
    ) -> Result<(), CarouselError> {
        if self.state.is_open() {
            debug!(state = %self.state, index, "open ignored; overlay already open");
            return Ok(());
        }
        sequence.clip_at(index)?;

        self.state = ViewState::Opening;
        self.generation = self.generation.next();

        let saved_scroll = self.host.scroll_offset();
        self.host.freeze_page(saved_scroll);
        self.host.show_overlay();

        let session = Session::new(
            sequence,
            index,
            saved_scroll,
            self.host.viewport_width().max(0.0),
        );
        self.host.set_track_offset(session.centre_offset());

        let factory = &mut self.factory;
        let ring = self.ring.get_or_insert_with(|| BufferRing::new(factory));
        ring.prime(&session.sequence, index, self.generation);

        info!(
            session = %session.id,
            index,
            len = session.sequence.len(),
            generation = %self.generation,
            "lightbox opened"
        );
        self.session = Some(session);
        self.state = ViewState::Idle;
        self.notify_observer();
        Ok(())
    }

    /// Close the overlay and restore the page exactly where it was.
    /// Closing while closed is a no-op.
    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        let was_dragging = self.state == ViewState::Dragging;
        self.state = ViewState::Closing;
        self.generation = self.generation.next();

        self.recognizer.cancel();
        if was_dragging {
            self.host.capture_scroll(false);
        }
        if let Some(ring) = self.ring.as_mut() {
            ring.release_all();
        }
        self.host.hide_overlay();
        if let Some(session) = self.session.take() {
            self.host.restore_page(session.saved_scroll);
            info!(session = %session.id, index = session.index, "lightbox closed");
        }

        self.state = ViewState::Closed;
        self.notify_observer();
    }

    // Navigation

    /// Animate to the next clip. Returns false when ignored: closed, busy,
    /// or already on the last clip.
    pub fn next(&mut self) -> bool {
        self.page(Verdict::Next)
    }

    pub fn prev(&mut self) -> bool {
        self.page(Verdict::Prev)
    }

    fn page(&mut self, target: Verdict) -> bool {
        if self.state != ViewState::Idle {
            debug!(state = %self.state, ?target, "navigation ignored");
            return false;
        }
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if !session.can_page(target) {
            debug!(session = %session.id, ?target, "no clip in that direction");
            return false;
        }
        self.start_animation(target);
        true
    }

    /// Keyboard handling while open. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.state.is_open() {
            return false;
        }
        match key {
            Key::ArrowRight | Key::ArrowDown => {
                self.next();
                true
            }
            Key::ArrowLeft | Key::ArrowUp => {
                self.prev();
                true
            }
            Key::Escape => {
                self.close();
                true
            }
            Key::Other => false,
        }
    }

    /// Viewport width changed. Re-centres immediately unless a transition
    /// is running, in which case its completion uses the new width.
    pub fn resize(&mut self, width: f32) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.viewport_width = width.max(0.0);
        if matches!(self.state, ViewState::Idle | ViewState::Dragging) {
            self.host.set_track_offset(session.centre_offset());
        }
    }

    // Touch

    pub fn pointer_down(&mut self, sample: PointerSample) {
        if self.state != ViewState::Idle {
            return;
        }
        self.recognizer.begin(sample);
    }

    /// Returns true when the move belongs to the carousel and the host should
    /// suppress native scrolling for it.
    pub fn pointer_move(&mut self, sample: PointerSample) -> bool {
        if !self.recognizer.is_tracking() {
            return false;
        }
        if !matches!(self.state, ViewState::Idle | ViewState::Dragging) {
            self.recognizer.cancel();
            return false;
        }
        let GestureUpdate::Paging { dx } = self.recognizer.track(sample) else {
            return false;
        };
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if self.state == ViewState::Idle {
            self.state = ViewState::Dragging;
            self.host.capture_scroll(true);
            debug!(session = %session.id, "horizontal drag locked");
        }
        let live = dampen(
            dx,
            session.has_prev(),
            session.has_next(),
            self.config.edge_resistance,
        );
        self.host.set_track_offset(session.centre_offset() + live);
        true
    }

    pub fn pointer_up(&mut self, sample: PointerSample) {
        if self.state != ViewState::Dragging {
            self.recognizer.cancel();
            return;
        }
        let Some(ctx) = self.session.as_ref().map(Session::release_context)
        else {
            return;
        };
        let verdict = self
            .recognizer
            .release(sample, ctx)
            .unwrap_or(Verdict::SnapBack);
        self.host.capture_scroll(false);
        self.start_animation(verdict);
    }

    /// The platform aborted the touch. A drag in progress springs back.
    pub fn pointer_cancel(&mut self) {
        self.recognizer.cancel();
        if self.state == ViewState::Dragging {
            self.host.capture_scroll(false);
            self.start_animation(Verdict::SnapBack);
        }
    }

    // Host callbacks

    /// Outcome of a play request issued to one of the ring's surfaces.
    ///
    /// Returns [`CarouselError::StaleCallback`] for tickets from an earlier
    /// generation or binding, and [`CarouselError::ActivationFailed`] after
    /// the poster fallback has been applied.
    pub fn settle_play(
        &mut self,
        ticket: PlayTicket,
        outcome: Result<(), MediaError>,
    ) -> Result<(), CarouselError> {
        if !self.state.is_open() || ticket.generation != self.generation {
            return Err(CarouselError::StaleCallback("session superseded"));
        }
        let ring = self
            .ring
            .as_mut()
            .ok_or(CarouselError::StaleCallback("no buffers"))?;
        let result = ring.settle(ticket, outcome);
        if let Err(CarouselError::ActivationFailed { clip, source }) = &result {
            warn!(
                session = ?self.session.as_ref().map(|s| s.id),
                clip = %clip,
                error = %source,
                "activation failed; showing poster"
            );
        }
        result
    }

    /// Complete the transition identified by `ticket`. The first of the
    /// transition-end signal and the fallback timer wins; the other is
    /// reported stale.
    pub fn finish_animation(
        &mut self,
        ticket: AnimationTicket,
    ) -> Result<(), CarouselError> {
        if self.state != ViewState::Animating {
            return Err(CarouselError::StaleCallback("no transition running"));
        }
        let session = self
            .session
            .as_mut()
            .ok_or(CarouselError::StaleCallback("no session"))?;
        let pending = match session.animation {
            Some(pending) if pending.ticket == ticket => pending,
            _ => {
                return Err(CarouselError::StaleCallback(
                    "transition superseded",
                ));
            }
        };
        session.animation = None;

        let committed = match pending.target {
            Verdict::Next => self.commit(Shift::Forward),
            Verdict::Prev => self.commit(Shift::Backward),
            Verdict::SnapBack => false,
        };
        if let Some(session) = self.session.as_ref() {
            self.host.set_track_offset(session.centre_offset());
        }
        self.state = ViewState::Idle;
        if committed {
            self.notify_observer();
        }
        Ok(())
    }

    fn start_animation(&mut self, target: Verdict) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.animation_serial += 1;
        let ticket = AnimationTicket {
            generation: self.generation,
            serial: self.animation_serial,
        };
        session.animation = Some(PendingAnimation { ticket, target });
        self.state = ViewState::Animating;

        self.host.animate_track(
            session.target_offset(target),
            self.config.transition(),
            ticket,
        );
        self.host
            .schedule_fallback(self.config.fallback_delay(), ticket);
        debug!(
            session = %session.id,
            ?target,
            serial = ticket.serial,
            "transition started"
        );
    }

    /// Move the index one step, rotate the ring and re-prime it.
    fn commit(&mut self, shift: Shift) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let index = match shift {
            Shift::Forward => session.index.checked_add(1),
            Shift::Backward => session.index.checked_sub(1),
        };
        let Some(index) = index.filter(|i| *i < session.sequence.len())
        else {
            warn!(session = %session.id, ?shift, "page turn past boundary dropped");
            return false;
        };
        session.index = index;
        self.generation = self.generation.next();

        if let Some(ring) = self.ring.as_mut() {
            ring.rotate(shift);
            ring.prime(&session.sequence, index, self.generation);
        }
        info!(
            session = %session.id,
            index,
            generation = %self.generation,
            "page turned"
        );
        true
    }

    fn notify_observer(&mut self) {
        let clip = self
            .session
            .as_ref()
            .and_then(Session::current)
            .map(|clip| clip.id().clone());
        if let Some(observer) = self.observer.as_mut() {
            observer.current_clip_changed(clip.as_ref());
        }
    }
}
