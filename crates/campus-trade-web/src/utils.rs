use anyhow::anyhow;
use campus_trade_lib::settings::Settings;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
    static BODY: HtmlElement = DOCUMENT.with(|d| d.body().unwrap_throw());
    static SETTINGS: std::cell::RefCell<Settings> = std::cell::RefCell::new(Settings::default());
}

/// Reads `window.__CAMPUS_TRADE_SETTINGS__` when the page provides it,
/// otherwise talks to the page's own origin.
pub fn initialize_settings() {
    let origin = window()
        .location()
        .origin()
        .unwrap_or_else(|_| "".to_string());

    let settings = match read_page_settings() {
        Ok(Some(mut settings)) => {
            if settings.origin.is_empty() {
                settings.origin = origin;
            }
            settings.origin = settings.origin.trim_end_matches('/').to_string();
            settings
        }
        Ok(None) => Settings::with_origin(&origin),
        Err(e) => {
            warn!("ignoring page settings: {}", e);
            Settings::with_origin(&origin)
        }
    };

    debug!("settings: {:?}", settings);
    SETTINGS.with(|s| *s.borrow_mut() = settings);
}

fn read_page_settings() -> Result<Option<Settings>, anyhow::Error> {
    let value = js_sys::Reflect::get(&window(), &JsValue::from_str("__CAMPUS_TRADE_SETTINGS__"))
        .map_err(|e| anyhow!("error read settings: {:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let json: String = js_sys::JSON::stringify(&value)
        .map_err(|e| anyhow!("error stringify settings: {:?}", e))?
        .into();

    Ok(Some(serde_json::from_str(&json)?))
}

pub fn settings() -> Settings {
    SETTINGS.with(|s| s.borrow().clone())
}

pub fn origin() -> String {
    SETTINGS.with(|s| s.borrow().origin.clone())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn elements(nodes: NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_all(selector: &str) -> Result<Vec<Element>, anyhow::Error> {
    document()
        .query_selector_all(selector)
        .map(elements)
        .map_err(|e| anyhow!("error query {}: {:?}", selector, e))
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}

pub fn body() -> HtmlElement {
    BODY.with(|d| d.clone())
}
