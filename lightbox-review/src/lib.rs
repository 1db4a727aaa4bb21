//! Review mode for the lightbox.
//!
//! A privileged visitor marks clips for addition to (or removal from) the
//! curated set. Marks live in two id lists persisted in a key-value store,
//! and can be summarized or exported as a patch list. The engine only
//! feeds this crate "current clip changed" notifications; nothing here
//! calls back into it.
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod kv;
pub mod page;
pub mod patch;
pub mod shared;
pub mod store;

pub use config::ReviewConfig;
pub use error::ReviewError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use page::PageKind;
pub use patch::{PatchEntry, ReviewAction};
pub use shared::SharedSelection;
pub use store::{ReviewList, SelectionStore};
