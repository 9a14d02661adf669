//! The collaborators a [`crate::controller::Controller`] talks to.
//!
//! In the browser these are backed by DOM elements, `localStorage`, the
//! console and the external parser module. Tests substitute recording
//! doubles.

use crate::format::Format;

/// The external parsing module, once its initialization has finished.
pub trait ParseModule {
    /// Render `text` as markup, or return the module's error message.
    fn parse(&self, format: Format, text: &str) -> Result<String, String>;

    /// Format tags the module says it understands. `None` if the module
    /// doesn't say.
    fn available_formats(&self) -> Option<Vec<String>> {
        None
    }
}

/// The container whose markup is replaced on every run.
pub trait MainRegion {
    fn set_markup(&self, markup: &str);
}

pub trait InputField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// A page-scoped key-value store that survives reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Where successful parser output is reported.
pub trait DiagnosticLog {
    fn info(&self, message: &str, detail: &str);
}

/// The elements found on the page. Any of them may be missing.
#[derive(Default)]
pub struct PageElements {
    pub main: Option<Box<dyn MainRegion>>,
    pub input: Option<Box<dyn InputField>>,
}

/// Something a handler can be attached to, like the run button.
pub trait EventSource {
    fn listen(&self, event: &str, handler: Box<dyn FnMut()>);
}
