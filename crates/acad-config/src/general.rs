//! Presentation defaults for the command-line front end.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "json".to_string()
}

const fn default_sort_by_name() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Order assignment views by course name instead of assignment id.
    #[serde(default = "default_sort_by_name")]
    pub sort_by_name: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            sort_by_name: default_sort_by_name(),
        }
    }
}
