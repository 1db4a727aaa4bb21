use lightbox_model::ClipId;

/// Receives "current clip changed" notifications from the engine.
///
/// `None` means the overlay closed. Observers never call back into the
/// engine.
pub trait SelectionObserver {
    fn current_clip_changed(&mut self, clip: Option<&ClipId>);
}
