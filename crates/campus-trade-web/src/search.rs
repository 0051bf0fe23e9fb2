use campus_trade_lib::search::should_suggest;
use wasm_bindgen_futures::spawn_local;

use crate::{query, utils::settings};

/// Fetches suggestions for `keyword`. The payload is only logged for now.
pub fn suggest(keyword: String) {
    if !should_suggest(&keyword, settings().suggestion_min_chars) {
        return;
    }

    spawn_local(async move {
        match query::fetch_search_suggestion(&keyword).await {
            Ok(suggestions) => info!("suggestions for {:?}: {}", keyword, suggestions),
            Err(e) => error!("failed to fetch suggestions for {:?}: {}", keyword, e),
        }
    });
}
