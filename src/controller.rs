use std::rc::Rc;

use crate::config::PageConfig;
use crate::error::{Element, PageError};
use crate::markup::Rendered;
use crate::page::{
    DiagnosticLog, EventSource, InputField, KeyValueStore, MainRegion, PageElements, ParseModule,
};

/// Reacts to the page's events: running the parser, saving the input
/// and restoring it on load.
///
/// A controller is only built once the parser module has finished
/// initializing. Anything that turned out to be missing at that point
/// is `None`, and the operations that need it do nothing.
pub struct Controller {
    config: PageConfig,
    module: Option<Box<dyn ParseModule>>,
    elements: PageElements,
    store: Option<Box<dyn KeyValueStore>>,
    log: Box<dyn DiagnosticLog>,
}

impl Controller {
    pub fn new(
        config: PageConfig,
        module: Option<Box<dyn ParseModule>>,
        elements: PageElements,
        store: Option<Box<dyn KeyValueStore>>,
        log: Box<dyn DiagnosticLog>,
    ) -> Self {
        let controller = Self {
            config,
            module,
            elements,
            store,
            log,
        };

        if !controller.supports_configured_format() {
            tracing::warn!(
                format = controller.config.format.tag(),
                "the parser module doesn't advertise this format"
            );
        }

        controller
    }

    /// Does the module claim to understand the configured format? A
    /// module that doesn't list its formats is assumed to.
    pub fn supports_configured_format(&self) -> bool {
        let tag = self.config.format.tag();
        match self.module.as_deref().and_then(|m| m.available_formats()) {
            Some(tags) => tags.iter().any(|t| t.eq_ignore_ascii_case(tag)),
            None => true,
        }
    }

    fn main(&self) -> Result<&dyn MainRegion, PageError> {
        self.elements
            .main
            .as_deref()
            .ok_or(PageError::MissingElement(Element::Main))
    }

    fn input(&self) -> Result<&dyn InputField, PageError> {
        self.elements
            .input
            .as_deref()
            .ok_or(PageError::MissingElement(Element::Input))
    }

    fn store(&self) -> Result<&dyn KeyValueStore, PageError> {
        self.store.as_deref().ok_or(PageError::StorageUnavailable)
    }

    /// Parse the current input and replace the main region with the
    /// result, or with the parser's error message.
    ///
    /// Nothing on the page changes if the module, the main region or
    /// the input is missing.
    pub fn run(&self) -> Result<Rendered, PageError> {
        let module = self.module.as_deref().ok_or(PageError::ModuleNotReady)?;
        let main = self.main()?;
        let input = self.input()?;

        let text = input.value();
        let rendered = match module.parse(self.config.format, &text) {
            Ok(out) => {
                if self.config.log_output {
                    self.log.info("Parser produced", &format!("\n{}", out));
                }
                Rendered::Output(out)
            }
            Err(msg) => Rendered::Error(msg),
        };

        main.set_markup(&rendered.markup());
        Ok(rendered)
    }

    /// Save the current input under the storage key, overwriting any
    /// previous value.
    pub fn persist(&self) -> Result<(), PageError> {
        let store = self.store()?;
        let input = self.input()?;

        store
            .set(&self.config.storage_key, &input.value())
            .map_err(PageError::Storage)
    }

    /// Fill the input with the saved value, or with the empty string if
    /// nothing was saved. Returns the value written.
    pub fn restore(&self) -> Result<String, PageError> {
        let store = self.store()?;
        let input = self.input()?;

        let value = store
            .get(&self.config.storage_key)
            .map_err(PageError::Storage)?
            .unwrap_or_default();
        input.set_value(&value);
        Ok(value)
    }

    pub fn on_run(&self) {
        match self.run() {
            Ok(rendered) => tracing::debug!(error = rendered.is_error(), "rendered parser result"),
            Err(e) => tracing::debug!(reason = %e, "skipped run"),
        }
    }

    pub fn on_persist(&self) {
        if let Err(e) = self.persist() {
            tracing::debug!(reason = %e, "skipped saving input");
        }
    }

    pub fn on_restore(&self) {
        if let Err(e) = self.restore() {
            tracing::debug!(reason = %e, "skipped restoring input");
        }
    }
}

/// Attach the controller's handlers: `click` on the button runs the
/// parser, `change` on the input saves it. A missing source gets no
/// handler.
pub fn bind(
    controller: &Rc<Controller>,
    button: Option<&dyn EventSource>,
    input: Option<&dyn EventSource>,
) {
    match button {
        Some(button) => {
            let controller = controller.clone();
            button.listen("click", Box::new(move || controller.on_run()));
        }
        None => {
            let reason = PageError::MissingElement(Element::Button);
            tracing::debug!(reason = %reason, "no run listener");
        }
    }

    if let Some(input) = input {
        let controller = controller.clone();
        input.listen("change", Box::new(move || controller.on_persist()));
    }
}
