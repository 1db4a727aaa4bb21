use crate::store::ReviewList;

/// Which kind of listing page the review controls sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The curated set; marks mean "remove".
    Curated,
    /// Everything else; marks mean "add".
    Archive,
}

impl PageKind {
    pub fn from_path(path: &str) -> Self {
        if path.contains("/clips.html") || path == "/clips" {
            Self::Curated
        } else {
            Self::Archive
        }
    }

    /// List a page-level mark toggles.
    pub fn list(self) -> ReviewList {
        match self {
            Self::Curated => ReviewList::Remove,
            Self::Archive => ReviewList::Add,
        }
    }
}
