use discord_components_playground::page::{EventSource, InputField, KeyValueStore, MainRegion, PageElements};
use discord_components_playground::PageConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement, Storage, Window};

pub struct MainElement(Element);

impl MainRegion for MainElement {
    fn set_markup(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

/// The page's input, usually a textarea.
pub enum InputElement {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl InputElement {
    fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(textarea) => return Some(InputElement::TextArea(textarea)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlInputElement>().ok().map(InputElement::Input)
    }
}

impl InputField for InputElement {
    fn value(&self) -> String {
        match self {
            InputElement::TextArea(el) => el.value(),
            InputElement::Input(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            InputElement::TextArea(el) => el.set_value(value),
            InputElement::Input(el) => el.set_value(value),
        }
    }
}

pub fn find_elements(document: &Document, config: &PageConfig) -> PageElements {
    let main = document
        .get_elements_by_tag_name(&config.main_tag)
        .item(0)
        .map(|el| Box::new(MainElement(el)) as Box<dyn MainRegion>);
    let input = document
        .get_element_by_id(&config.input_id)
        .and_then(InputElement::from_element)
        .map(|el| Box::new(el) as Box<dyn InputField>);

    PageElements { main, input }
}

/// An element that event handlers are attached to.
pub struct ListenerTarget(pub Element);

impl EventSource for ListenerTarget {
    fn listen(&self, event: &str, mut handler: Box<dyn FnMut()>) {
        let closure: Closure<dyn FnMut(Event)> = Closure::new(move |_: Event| handler());
        if let Err(e) = self
            .0
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            tracing::warn!(event, error = %describe_js_error(&e), "couldn't add event listener");
        }
        // Listeners live as long as the page.
        closure.forget();
    }
}

pub struct LocalStorage(Storage);

/// `localStorage` can be missing, or throw when it's disabled.
pub fn local_storage(window: &Window) -> Option<LocalStorage> {
    window.local_storage().ok().flatten().map(LocalStorage)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.0.get_item(key).map_err(|e| describe_js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.0.set_item(key, value).map_err(|e| describe_js_error(&e))
    }
}

/// The text a thrown JS value shows when interpolated into a string.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.to_string());
    }
    format!("{:?}", value)
}
