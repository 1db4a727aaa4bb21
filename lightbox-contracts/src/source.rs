use lightbox_model::{Clip, ModelError, Sequence};

/// Read-only view over the page's ordered clips.
///
/// The engine calls [`MediaSequenceSource::snapshot`] once per open and
/// works from that snapshot until the session closes, so later changes to
/// the page cannot disturb a running session.
pub trait MediaSequenceSource {
    fn len(&self) -> usize;

    fn clip_at(&self, index: usize) -> Result<&Clip, ModelError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Sequence {
        (0..self.len())
            .filter_map(|index| self.clip_at(index).ok().cloned())
            .collect()
    }
}

impl MediaSequenceSource for Sequence {
    fn len(&self) -> usize {
        Sequence::len(self)
    }

    fn clip_at(&self, index: usize) -> Result<&Clip, ModelError> {
        Sequence::clip_at(self, index)
    }

    fn snapshot(&self) -> Sequence {
        self.clone()
    }
}

impl MediaSequenceSource for [Clip] {
    fn len(&self) -> usize {
        <[Clip]>::len(self)
    }

    fn clip_at(&self, index: usize) -> Result<&Clip, ModelError> {
        self.get(index).ok_or(ModelError::OutOfRange {
            index,
            len: <[Clip]>::len(self),
        })
    }
}

impl MediaSequenceSource for Vec<Clip> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn clip_at(&self, index: usize) -> Result<&Clip, ModelError> {
        self.as_slice().clip_at(index)
    }
}
