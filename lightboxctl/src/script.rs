//! Replay scripts: a JSON array of steps such as
//! `[{"op": "open", "index": 0}, {"op": "swipe", "dx": -220, "ms": 300}]`.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;
use lightbox_model::{Clip, Sequence};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Open { index: usize },
    Close,
    Next,
    Prev,
    /// DOM key name, e.g. `ArrowRight`.
    Key { key: String },
    /// Horizontal drag of `dx` pixels over `ms` milliseconds.
    Swipe {
        dx: f32,
        #[serde(default = "default_swipe_ms")]
        ms: u64,
    },
    Resize { width: f32 },
    /// Toggle the review mark of the clip on screen.
    Toggle,
}

fn default_swipe_ms() -> u64 {
    250
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Open { index } => write!(f, "open {index}"),
            Step::Close => write!(f, "close"),
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
            Step::Key { key } => write!(f, "key {key}"),
            Step::Swipe { dx, ms } => write!(f, "swipe {dx}px/{ms}ms"),
            Step::Resize { width } => write!(f, "resize {width}"),
            Step::Toggle => write!(f, "toggle"),
        }
    }
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<Step>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid script {}", path.display()))
}

/// Manifest: a JSON array of `{id, media_source, poster?}` objects.
pub fn load_manifest(path: &Path) -> anyhow::Result<Sequence> {
    let raw = fs::read_to_string(path).with_context(|| {
        format!("failed to read manifest {}", path.display())
    })?;
    let clips: Vec<Clip> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid manifest {}", path.display()))?;
    Ok(Sequence::new(clips))
}
