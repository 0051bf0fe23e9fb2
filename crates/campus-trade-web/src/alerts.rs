use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::utils::{select_all, settings};

// toasts carry their own timer
const FLASH_ALERTS: &str = ".alert:not([data-toast])";
const FADE_MS: u32 = 150;

/// Closes the server rendered flash messages once the page has been shown
/// for a while.
pub fn hide_flash_alerts() {
    let delay = settings().alert_hide_delay_ms;

    spawn_local(async move {
        TimeoutFuture::new(delay).await;

        let alerts = match select_all(FLASH_ALERTS) {
            Ok(alerts) => alerts,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        for alert in &alerts {
            if let Err(e) = alert.class_list().remove_1("show") {
                error!("error remove class: {:?}", e);
            }
        }

        TimeoutFuture::new(FADE_MS).await;

        for alert in alerts {
            alert.remove();
        }
    });
}
