use crate::utils::window;

/// Asks the user to confirm `message`; `on_confirm` runs only on acceptance.
pub fn confirm<F>(message: &str, on_confirm: F)
where
    F: FnOnce(),
{
    match window().confirm_with_message(message) {
        Ok(true) => on_confirm(),
        Ok(false) => {}
        Err(e) => warn!("confirm dialog unavailable: {:?}", e),
    }
}
