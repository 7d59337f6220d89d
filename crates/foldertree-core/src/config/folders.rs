//! Folder hierarchy configuration.

use serde::{Deserialize, Serialize};

/// Settings for the folder hierarchy itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldersConfig {
    /// Name given to the root folder when it is created automatically.
    #[serde(default = "default_root_name")]
    pub root_name: String,
    /// Maximum folder name length in characters.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            max_name_length: default_max_name_length(),
        }
    }
}

fn default_root_name() -> String {
    "Root Folder".to_string()
}

fn default_max_name_length() -> usize {
    255
}
