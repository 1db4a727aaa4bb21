//! Configuration for lightbox hosts.
//!
//! [`LightboxConfig`] bundles the carousel tunables and the review store
//! keys. Overrides come from an explicit file, an environment variable, or
//! a default file next to the working directory, in that order.
#![allow(missing_docs)]

mod loader;

pub use loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigSource};

use lightbox_core::CarouselConfig;
use lightbox_review::ReviewConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// Gesture thresholds and transition timing.
    pub carousel: CarouselConfig,
    /// Storage keys for review-mode selection lists.
    pub review: ReviewConfig,
}

impl LightboxConfig {
    /// Check both sections, reporting the first problem found.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.carousel.validate()?;
        self.review.validate()?;
        Ok(())
    }
}
