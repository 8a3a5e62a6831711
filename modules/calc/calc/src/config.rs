use serde::{Deserialize, Serialize};

/// Configuration for the calc module (`calc:` section of the server config).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Upper bound on constant name length, in characters. Matches the column width.
    pub max_name_length: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
        }
    }
}
