//! Core data model definitions shared across lightbox crates.
#![allow(missing_docs)]

pub mod clip;
pub mod error;
pub mod sequence;
pub mod tickets;

// Intentionally curated re-exports for downstream consumers.
pub use clip::{Clip, ClipId};
pub use error::{ModelError, Result as ModelResult};
pub use sequence::Sequence;
pub use tickets::{
    AnimationTicket, BufferEpoch, Generation, PlayIntent, PlayTicket, SlotId,
};
