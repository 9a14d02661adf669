use strum_macros::Display;
use thiserror::Error;

/// The page elements the controller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Element {
    Main,
    Input,
    Button,
}

/// Why a page operation did nothing.
///
/// None of these are shown to the user: event handlers log them and
/// carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no {0} element on the page")]
    MissingElement(Element),
    #[error("the parser module is not ready")]
    ModuleNotReady,
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    #[error("persistent storage failed: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed page config: {0}")]
    Malformed(#[from] serde_json::Error),
}
