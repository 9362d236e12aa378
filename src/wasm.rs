//! WASM bindings
//!
//! Exposes the widget to JavaScript as a `UiManager` class mounted on a DOM
//! element:
//!
//! ```js
//! const ui = new UiManager(document.getElementById("payments"), options, "bootstrap");
//! ui.render();
//! // ... later
//! const selection = ui.getStateJson();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DomTokenList, Element, Event, HtmlInputElement};

use crate::config::{Theme, UiConfig};
use crate::error::{UiError, UiResult};
use crate::host::{ChangeEvent, ChangeHandler, ClassList, ClickHandler, ViewHost};
use crate::manager::UiManager;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

/// Raise or lower the console log level ("error", "warn", "info", "debug", "trace", "off")
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("Unknown log level '{level}'")))?;
    log::set_max_level(filter);
    Ok(())
}

/// Forwards `log` records to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

// ========================
// DOM host
// ========================

/// A DOM element as view host
pub struct DomHost {
    root: Element,
    // Keeps listener callbacks alive until the content they were bound to is replaced
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl DomHost {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            listeners: Vec::new(),
        }
    }

    fn query_all(&self, selector: &str) -> UiResult<Vec<Element>> {
        let nodes = self.root.query_selector_all(selector).map_err(js_error)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn listen(
        &mut self,
        selector: &str,
        event_type: &str,
        callback: impl FnMut(Event) + Clone + 'static,
    ) -> UiResult<usize> {
        let elements = self.query_all(selector)?;
        for element in &elements {
            let closure = Closure::<dyn FnMut(Event)>::new(callback.clone());
            element
                .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            self.listeners.push(closure);
        }
        Ok(elements.len())
    }
}

impl ViewHost for DomHost {
    fn set_markup(&mut self, markup: &str) -> UiResult<()> {
        self.root.set_inner_html(markup);
        self.listeners.clear();
        Ok(())
    }

    fn on_change(&mut self, selector: &str, handler: ChangeHandler) -> UiResult<()> {
        let handler = Rc::new(RefCell::new(handler));
        let bound = self.listen(selector, "change", move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let change = ChangeEvent {
                name: input.name(),
                checked: input.checked(),
            };
            (*handler.borrow_mut())(&change);
        })?;
        log::debug!("bound change listener to {bound} elements matching '{selector}'");
        Ok(())
    }

    fn on_click(&mut self, selector: &str, handler: ClickHandler) -> UiResult<()> {
        let handler = Rc::new(RefCell::new(handler));
        let bound = self.listen(selector, "click", move |event: Event| {
            let Some(parent) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.parent_element())
            else {
                return;
            };
            let mut classes = DomClassList(parent.class_list());
            (*handler.borrow_mut())(&mut classes);
        })?;
        log::debug!("bound click listener to {bound} elements matching '{selector}'");
        Ok(())
    }
}

struct DomClassList(DomTokenList);

impl ClassList for DomClassList {
    fn toggle(&mut self, class: &str) -> bool {
        self.0.toggle(class).unwrap_or(false)
    }
}

fn js_error(value: JsValue) -> UiError {
    UiError::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

// ========================
// JS-facing widget
// ========================

/// The widget as seen from JavaScript
#[wasm_bindgen(js_name = UiManager)]
pub struct JsUiManager {
    inner: UiManager<DomHost>,
}

#[wasm_bindgen(js_class = UiManager)]
impl JsUiManager {
    /// `new UiManager(element, config, cssLib = "daisyui")`
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: Element,
        config: JsValue,
        css_lib: Option<String>,
    ) -> Result<JsUiManager, JsError> {
        let theme: Theme = match css_lib {
            Some(name) => name.parse()?,
            None => Theme::default(),
        };
        // Validation runs inside deserialization
        let config: UiConfig =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self {
            inner: UiManager::new(DomHost::new(element), config, theme),
        })
    }

    pub fn render(&mut self) -> Result<(), JsError> {
        self.inner.render()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = getUiState)]
    pub fn get_ui_state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.get_ui_state())
    }

    #[wasm_bindgen(js_name = getStateJson)]
    pub fn get_state_json(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.get_state_json())
    }
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
