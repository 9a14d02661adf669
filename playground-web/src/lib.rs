use std::rc::Rc;

use discord_components_playground::controller::bind;
use discord_components_playground::page::{EventSource, KeyValueStore, ParseModule};
use discord_components_playground::{Controller, PageConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod console;
mod dom;
mod module;

use crate::console::{init_logging, ConsoleLog};
use crate::dom::{describe_js_error, find_elements, local_storage, ListenerTarget};
use crate::module::{init_module, ExternalModule};

// https://rustwasm.github.io/docs/wasm-bindgen/examples/dom.html

/// Wire up the playground page.
///
/// `config_json` optionally overrides fields of [`PageConfig`]. The
/// event listeners are only registered once the parser module has
/// finished initializing.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config_json.as_deref().map(PageConfig::from_json) {
        None => (PageConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (PageConfig::default(), Some(e)),
    };

    init_logging(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using the default page config");
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // A failed init resolves to undefined, so the module is treated as
    // absent.
    let on_failed: Closure<dyn FnMut(JsValue)> = Closure::new(|e: JsValue| {
        tracing::warn!(error = %describe_js_error(&e), "parser module failed to load");
    });
    let on_ready: Closure<dyn FnMut(JsValue)> = Closure::once(move |handle: JsValue| {
        bind_page(config, &window, &document, handle.is_truthy());
    });

    let _ = init_module().catch(&on_failed).then(&on_ready);

    on_failed.forget();
    on_ready.forget();
}

/// Format tags the playground can ask the parser for.
#[wasm_bindgen]
pub fn available_formats() -> js_sys::Array {
    discord_components_playground::available_formats()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

fn bind_page(config: PageConfig, window: &Window, document: &Document, module_ready: bool) {
    let elements = find_elements(document, &config);
    let button = document.get_element_by_id(&config.button_id).map(ListenerTarget);
    let input = document.get_element_by_id(&config.input_id).map(ListenerTarget);

    let module: Option<Box<dyn ParseModule>> = if module_ready {
        Some(Box::new(ExternalModule))
    } else {
        None
    };
    let store = local_storage(window).map(|s| Box::new(s) as Box<dyn KeyValueStore>);

    let controller = Rc::new(Controller::new(
        config,
        module,
        elements,
        store,
        Box::new(ConsoleLog),
    ));
    controller.on_restore();

    bind(
        &controller,
        button.as_ref().map(|b| b as &dyn EventSource),
        input.as_ref().map(|i| i as &dyn EventSource),
    );

    tracing::info!(module_ready, "playground ready");
}
