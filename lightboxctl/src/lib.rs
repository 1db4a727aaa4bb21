//! Headless replay of lightbox carousel sessions and review-list tooling.
#![allow(missing_docs)]

pub mod replay;
pub mod script;
pub mod sim;

pub use replay::{Replayer, StepReport};
pub use script::{Step, load_manifest, load_script};
