#[macro_use]
extern crate log;

mod alerts;
mod common;
mod confirm;
mod favorite;
mod form;
mod lazy;
mod preview;
mod query;
mod search;
mod utils;

use campus_trade_lib::{
    format::{format_price as price_text, format_price_str, format_relative, parse_datetime},
    models::{ProductId, Severity},
};
use common::toast;
use utils::{body, document};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlInputElement;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    utils::initialize_settings();

    if document().ready_state() == "loading" {
        let on_ready = Closure::once_into_js(init_page);
        document().add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        init_page();
    }

    Ok(())
}

fn init_page() {
    dominator::append_dom(&body(), toast::render());

    if let Err(e) = lazy::observe_images() {
        error!("failed to set up lazy images: {}", e);
    }

    alerts::hide_flash_alerts();
}

fn product_id(value: &JsValue) -> ProductId {
    match value.as_f64() {
        Some(number) if number.fract() == 0.0 => ProductId::from(number as i64),
        Some(number) => ProductId::new(number.to_string()),
        None => ProductId::new(value.as_string().unwrap_or_default()),
    }
}

#[wasm_bindgen(js_name = toggleFavorite)]
pub fn toggle_favorite(product: JsValue) {
    favorite::toggle(product_id(&product));
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, severity: Option<String>) {
    let severity = severity
        .and_then(|s| s.parse::<Severity>().ok())
        .unwrap_or_default();
    toast::show(message, severity);
}

#[wasm_bindgen(js_name = previewImages)]
pub fn preview_images(input: HtmlInputElement) {
    preview::preview(input);
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: String) -> bool {
    form::validate(&form_id)
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: String, callback: js_sys::Function) {
    confirm::confirm(&message, || {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            error!("confirm callback failed: {:?}", e);
        }
    });
}

#[wasm_bindgen(js_name = formatPrice)]
pub fn format_price(price: JsValue) -> String {
    let formatted = match price.as_f64() {
        Some(amount) => price_text(amount),
        None => format_price_str(&price.as_string().unwrap_or_default()),
    };

    formatted.unwrap_or_else(|e| {
        warn!("{}", e);
        String::new()
    })
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: String) -> String {
    // the browser clock knows the offset in effect at each instant
    match parse_datetime(&date, &chrono::Local) {
        Ok(then) => format_relative(then, chrono::Utc::now(), &chrono::Local),
        Err(e) => {
            warn!("{}", e);
            "Invalid Date".to_string()
        }
    }
}

#[wasm_bindgen(js_name = searchSuggestion)]
pub fn search_suggestion(keyword: String) {
    search::suggest(keyword);
}
