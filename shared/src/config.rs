use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_OFFSET: i64 = 100;
pub const DEFAULT_DIAGNOSTIC: &str = "Test Success";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SummationConfig {
    /// Constant added to every sum.
    pub offset: i64,
    /// Message logged before each summation. `None` keeps the call silent.
    pub diagnostic: Option<String>,
}

impl Default for SummationConfig {
    fn default() -> Self {
        SummationConfig {
            offset: DEFAULT_OFFSET,
            diagnostic: Some(DEFAULT_DIAGNOSTIC.to_string()),
        }
    }
}

impl SummationConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}

/// Missing fields fall back to their defaults, so `{}` is a valid config.
/// Unknown keys are rejected.
pub fn load_from_json(json_str: &str) -> Result<SummationConfig, ConfigError> {
    let config: SummationConfig = serde_json::from_str(json_str)?;
    Ok(config)
}
