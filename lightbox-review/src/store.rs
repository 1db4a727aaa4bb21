use lightbox_contracts::observer::SelectionObserver;
use lightbox_model::ClipId;
use tracing::{debug, warn};

use crate::config::ReviewConfig;
use crate::error::ReviewError;
use crate::kv::KeyValueStore;
use crate::page::PageKind;
use crate::patch::{PatchEntry, ReviewAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewList {
    Add,
    Remove,
}

impl ReviewList {
    pub fn action(self) -> ReviewAction {
        match self {
            Self::Add => ReviewAction::Add,
            Self::Remove => ReviewAction::Remove,
        }
    }
}

/// Pending add/remove marks, persisted on every change.
#[derive(Debug)]
pub struct SelectionStore<K> {
    kv: K,
    config: ReviewConfig,
    /// Clip the overlay is showing, as last reported by the engine.
    current: Option<ClipId>,
}

impl<K: KeyValueStore> SelectionStore<K> {
    pub fn new(kv: K, config: ReviewConfig) -> Self {
        Self {
            kv,
            config,
            current: None,
        }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }

    pub fn into_backend(self) -> K {
        self.kv
    }

    fn key(&self, list: ReviewList) -> &str {
        match list {
            ReviewList::Add => &self.config.add_key,
            ReviewList::Remove => &self.config.remove_key,
        }
    }

    /// Ids in `list`, in insertion order. Missing or corrupt data reads as
    /// an empty list.
    pub fn list(&self, list: ReviewList) -> Result<Vec<ClipId>, ReviewError> {
        let key = self.key(list);
        let Some(raw) = self.kv.get(key)? else {
            return Ok(Vec::new());
        };
        let ids: Vec<String> = match serde_json::from_str::<Option<Vec<String>>>(&raw) {
            Ok(ids) => ids.unwrap_or_default(),
            Err(err) => {
                warn!(key, error = %err, "corrupt review list; treating as empty");
                return Ok(Vec::new());
            }
        };
        Ok(ids.into_iter().filter_map(|id| ClipId::new(id).ok()).collect())
    }

    fn save(
        &mut self,
        list: ReviewList,
        ids: &[ClipId],
    ) -> Result<(), ReviewError> {
        let raw = serde_json::to_string(ids)?;
        let key = self.key(list).to_owned();
        self.kv.set(&key, raw)
    }

    pub fn contains(
        &self,
        list: ReviewList,
        id: &ClipId,
    ) -> Result<bool, ReviewError> {
        Ok(self.list(list)?.contains(id))
    }

    /// Add `id` if absent, remove it if present. Returns true when the id is
    /// now in the list.
    pub fn toggle(
        &mut self,
        list: ReviewList,
        id: &ClipId,
    ) -> Result<bool, ReviewError> {
        let mut ids = self.list(list)?;
        let added = match ids.iter().position(|existing| existing == id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(id.clone());
                true
            }
        };
        self.save(list, &ids)?;
        debug!(?list, clip = %id, added, "review mark toggled");
        Ok(added)
    }

    /// Page-level control: curated pages mark removals, archive pages mark
    /// additions.
    pub fn toggle_on_page(
        &mut self,
        page: PageKind,
        id: &ClipId,
    ) -> Result<bool, ReviewError> {
        self.toggle(page.list(), id)
    }

    pub fn current(&self) -> Option<&ClipId> {
        self.current.as_ref()
    }

    /// Overlay control: toggle the add mark of the clip on screen. `None`
    /// when the overlay is closed.
    pub fn toggle_current(&mut self) -> Result<Option<bool>, ReviewError> {
        let Some(id) = self.current.clone() else {
            return Ok(None);
        };
        self.toggle(ReviewList::Add, &id).map(Some)
    }

    /// Whether the overlay control should show as marked.
    pub fn current_is_marked(&self) -> Result<bool, ReviewError> {
        match &self.current {
            Some(id) => self.contains(ReviewList::Add, id),
            None => Ok(false),
        }
    }

    pub fn clear_all(&mut self) -> Result<(), ReviewError> {
        self.save(ReviewList::Add, &[])?;
        self.save(ReviewList::Remove, &[])
    }

    pub fn counts(&self) -> Result<(usize, usize), ReviewError> {
        Ok((
            self.list(ReviewList::Add)?.len(),
            self.list(ReviewList::Remove)?.len(),
        ))
    }

    /// `"2 to add, 1 to remove"`, empty parts omitted, or `"no changes"`.
    pub fn summary(&self) -> Result<String, ReviewError> {
        let (adds, removes) = self.counts()?;
        let mut parts = Vec::with_capacity(2);
        if adds > 0 {
            parts.push(format!("{adds} to add"));
        }
        if removes > 0 {
            parts.push(format!("{removes} to remove"));
        }
        if parts.is_empty() {
            return Ok("no changes".to_owned());
        }
        Ok(parts.join(", "))
    }

    /// Additions then removals.
    pub fn patch(&self) -> Result<Vec<PatchEntry>, ReviewError> {
        let mut entries = Vec::new();
        for list in [ReviewList::Add, ReviewList::Remove] {
            entries.extend(self.list(list)?.into_iter().map(|id| PatchEntry {
                id,
                action: list.action(),
            }));
        }
        Ok(entries)
    }

    /// Pretty-printed JSON patch.
    pub fn export(&self) -> Result<String, ReviewError> {
        let entries = self.patch()?;
        if entries.is_empty() {
            return Err(ReviewError::NothingToExport);
        }
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}

impl<K: KeyValueStore> SelectionObserver for SelectionStore<K> {
    fn current_clip_changed(&mut self, clip: Option<&ClipId>) {
        self.current = clip.cloned();
    }
}
