use campus_trade_lib::validate::{check_required, INVALID_CLASS, REQUIRED_SELECTOR};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::utils::{element_by_id, elements};

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Marks every blank required field of the form `form_id` with `is-invalid`
/// and clears the mark on filled ones. A missing form counts as valid.
pub fn validate(form_id: &str) -> bool {
    let Some(form) = element_by_id(form_id) else {
        return true;
    };

    let fields = match form.query_selector_all(REQUIRED_SELECTOR) {
        Ok(nodes) => elements(nodes),
        Err(e) => {
            error!("error query required fields of {}: {:?}", form_id, e);
            return true;
        }
    };

    let values: Vec<String> = fields.iter().map(field_value).collect();
    let (valid, filled) = check_required(values.iter().map(String::as_str));

    for (field, filled) in fields.iter().zip(filled) {
        let class_list = field.class_list();
        let result = if filled {
            class_list.remove_1(INVALID_CLASS)
        } else {
            class_list.add_1(INVALID_CLASS)
        };
        if let Err(e) = result {
            error!("error mark field: {:?}", e);
        }
    }

    valid
}
