use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

pub const DEFAULT_ADD_KEY: &str = "lightbox_add";
pub const DEFAULT_REMOVE_KEY: &str = "lightbox_remove";

/// Where the two selection lists are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Key holding ids marked for addition to the curated set.
    pub add_key: String,
    /// Key holding ids marked for removal from the curated set.
    pub remove_key: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            add_key: DEFAULT_ADD_KEY.to_owned(),
            remove_key: DEFAULT_REMOVE_KEY.to_owned(),
        }
    }
}

impl ReviewConfig {
    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.add_key.trim().is_empty() || self.remove_key.trim().is_empty()
        {
            return Err(ReviewError::InvalidConfig(
                "review list keys must not be blank".into(),
            ));
        }
        if self.add_key == self.remove_key {
            return Err(ReviewError::InvalidConfig(format!(
                "add and remove lists share the key '{}'",
                self.add_key
            )));
        }
        Ok(())
    }
}
