//! Tunables for gesture classification and the page-turn animation.

use std::time::Duration;

use lightbox_contracts::motion::{Easing, TrackTransition};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::CarouselError;

/// Carousel tuning knobs. Every field has a default so partial config files
/// deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Movement in either axis before a gesture is classified.
    pub dead_zone_px: f32,
    /// Fraction of drag applied when pulling past the first or last clip.
    pub edge_resistance: f32,
    /// Fraction of the viewport width that commits a page turn.
    pub commit_fraction: f32,
    pub flick_velocity_px_per_ms: f32,
    pub flick_min_distance_px: f32,
    pub animation_ms: u64,
    pub fallback_ms: u64,
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            dead_zone_px: constants::gesture::DEAD_ZONE_PX,
            edge_resistance: constants::gesture::EDGE_RESISTANCE,
            commit_fraction: constants::gesture::COMMIT_FRACTION,
            flick_velocity_px_per_ms:
                constants::gesture::FLICK_VELOCITY_PX_PER_MS,
            flick_min_distance_px: constants::gesture::FLICK_MIN_DISTANCE_PX,
            animation_ms: constants::snap::DURATION_MS,
            fallback_ms: constants::snap::FALLBACK_MS,
            easing: Easing::default(),
        }
    }
}

impl CarouselConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }

    pub fn transition(&self) -> TrackTransition {
        TrackTransition {
            duration: self.animation_duration(),
            easing: self.easing,
        }
    }

    /// Reject values that would make gestures or transitions misbehave.
    pub fn validate(&self) -> Result<(), CarouselError> {
        let invalid = |msg: String| Err(CarouselError::InvalidConfig(msg));

        if !self.dead_zone_px.is_finite() || self.dead_zone_px < 0.0 {
            return invalid(format!(
                "dead_zone_px must be non-negative, got {}",
                self.dead_zone_px
            ));
        }
        for (name, value) in [
            ("edge_resistance", self.edge_resistance),
            ("commit_fraction", self.commit_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return invalid(format!("{name} must be in (0, 1], got {value}"));
            }
        }
        for (name, value) in [
            ("flick_velocity_px_per_ms", self.flick_velocity_px_per_ms),
            ("flick_min_distance_px", self.flick_min_distance_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!(
                    "{name} must be non-negative, got {value}"
                ));
            }
        }
        if self.animation_ms == 0 {
            return invalid("animation_ms must be positive".into());
        }
        if self.fallback_ms < self.animation_ms {
            return invalid(format!(
                "fallback_ms ({}) must not be shorter than animation_ms ({})",
                self.fallback_ms, self.animation_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = CarouselConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.transition().duration, Duration::from_millis(250));
        assert_eq!(config.fallback_delay(), Duration::from_millis(300));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"animation_ms": 180, "fallback_ms": 220, "easing": "linear"}"#)
                .unwrap();
        assert_eq!(config.animation_ms, 180);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.dead_zone_px, constants::gesture::DEAD_ZONE_PX);
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let config = CarouselConfig {
            commit_fraction: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("commit_fraction"));
    }

    #[test]
    fn rejects_fallback_shorter_than_animation() {
        let config = CarouselConfig {
            animation_ms: 400,
            fallback_ms: 300,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidConfig(_))
        ));
    }
}
