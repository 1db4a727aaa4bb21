//! Easing curves and timed track transitions.

use std::time::Duration;

/// Easing curve applied to the track animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::EaseIn => write!(f, "ease-in"),
            Self::EaseOut => write!(f, "ease-out"),
            Self::EaseInOut => write!(f, "ease-in-out"),
        }
    }
}

/// A timed move of the track from its current offset to a target offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackTransition {
    pub duration: Duration,
    pub easing: Easing,
}

impl TrackTransition {
    /// Offset at `elapsed` for hosts that tween the track themselves.
    pub fn sample(&self, from: f32, to: f32, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        from + (to - from) * self.easing.apply(t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
