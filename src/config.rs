use serde::Deserialize;

use crate::error::ConfigError;
use crate::format::Format;

/// Where the controller finds its elements, and how it behaves.
///
/// Every field has a default, so a page only needs to pass the fields
/// it wants to change. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub main_tag: String,
    pub input_id: String,
    pub button_id: String,
    pub storage_key: String,
    pub format: Format,
    /// Write successful parser output to the diagnostic log.
    pub log_output: bool,
    /// Filter directives for the log subscriber, e.g. `"debug"`.
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            main_tag: "main".to_owned(),
            input_id: "input".to_owned(),
            button_id: "run".to_owned(),
            storage_key: "textarea".to_owned(),
            format: Format::Yaml,
            log_output: true,
            log_filter: "info".to_owned(),
        }
    }
}

impl PageConfig {
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }
}
