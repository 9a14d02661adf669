use discord_components_playground::page::ParseModule;
use discord_components_playground::Format;
use wasm_bindgen::prelude::*;

use crate::dom::describe_js_error;

// The parser's wasm-pack output is served next to this crate's.
#[wasm_bindgen(raw_module = "./mdbook_discord_components_wasm.js")]
extern "C" {
    /// The module's default export. Resolves to a truthy handle once
    /// the parser is ready.
    #[wasm_bindgen(js_name = default)]
    pub fn init_module() -> js_sys::Promise;

    #[wasm_bindgen(catch, js_name = parse)]
    fn parse_raw(parser_name: &str, input: &str) -> Result<String, JsValue>;

    #[wasm_bindgen(catch, js_name = available_parsers)]
    fn available_parsers_raw() -> Result<js_sys::Array, JsValue>;
}

/// The external parser, after `init_module` has resolved.
pub struct ExternalModule;

impl ParseModule for ExternalModule {
    fn parse(&self, format: Format, text: &str) -> Result<String, String> {
        parse_raw(format.tag(), text).map_err(|e| describe_js_error(&e))
    }

    fn available_formats(&self) -> Option<Vec<String>> {
        let parsers = available_parsers_raw().ok()?;
        Some(parsers.iter().filter_map(|v| v.as_string()).collect())
    }
}
