use std::cell::RefCell;
use std::rc::Rc;

use lightbox_contracts::observer::SelectionObserver;
use lightbox_model::ClipId;

use crate::kv::KeyValueStore;
use crate::store::SelectionStore;

/// A selection store shared between the engine (as its observer) and the
/// page's review controls.
#[derive(Debug)]
pub struct SharedSelection<K> {
    inner: Rc<RefCell<SelectionStore<K>>>,
}

impl<K> Clone for SharedSelection<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K: KeyValueStore> SharedSelection<K> {
    pub fn new(store: SelectionStore<K>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut SelectionStore<K>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

impl<K: KeyValueStore> SelectionObserver for SharedSelection<K> {
    fn current_clip_changed(&mut self, clip: Option<&ClipId>) {
        self.inner.borrow_mut().current_clip_changed(clip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, ReviewConfig, ReviewList};

    #[test]
    fn clones_observe_the_same_store() {
        let shared = SharedSelection::new(SelectionStore::new(
            MemoryStore::new(),
            ReviewConfig::default(),
        ));
        let mut observer = shared.clone();
        let id = ClipId::new("clip-7").unwrap();
        observer.current_clip_changed(Some(&id));

        let added = shared.with(|store| store.toggle_current()).unwrap();
        assert_eq!(added, Some(true));
        assert!(
            shared
                .with(|store| store.contains(ReviewList::Add, &id))
                .unwrap()
        );
    }
}
