//! Immutable, cheaply shared snapshot of an ordered clip list.

use std::sync::Arc;

use crate::clip::Clip;
use crate::error::ModelError;

/// Ordered clips captured for one open session. Cloning shares the
/// underlying storage; clips are never copied or mutated after capture.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    clips: Arc<[Clip]>,
}

impl Sequence {
    pub fn new(clips: Vec<Clip>) -> Self {
        Self {
            clips: clips.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Clip> {
        self.clips.get(index)
    }

    /// Lookup that reports the sequence bounds on failure.
    pub fn clip_at(&self, index: usize) -> Result<&Clip, ModelError> {
        self.clips.get(index).ok_or(ModelError::OutOfRange {
            index,
            len: self.clips.len(),
        })
    }

    /// Neighbor lookup by signed offset; `None` past either boundary.
    pub fn offset(&self, index: usize, delta: isize) -> Option<&Clip> {
        index.checked_add_signed(delta).and_then(|i| self.clips.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clip> {
        self.clips.iter()
    }

    /// True when both handles point at the same captured storage.
    pub fn shares_storage(&self, other: &Sequence) -> bool {
        Arc::ptr_eq(&self.clips, &other.clips)
    }
}

impl FromIterator<Clip> for Sequence {
    fn from_iter<T: IntoIterator<Item = Clip>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
