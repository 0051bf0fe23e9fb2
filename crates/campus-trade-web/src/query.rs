use campus_trade_lib::{
    error::Error,
    models::{favorite_url, FavoriteResult, ProductId},
    search::suggestion_endpoint,
};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::utils::origin;

#[derive(Serialize)]
struct SuggestionQuery<'a> {
    q: &'a str,
}

fn request_error(e: reqwest::Error) -> Error {
    if e.is_decode() {
        Error::Decode(e.to_string())
    } else {
        Error::Request(e.to_string())
    }
}

/// Flips the favorite state of `product_id` for the signed-in user. The
/// session cookie identifies the user; nothing else is sent.
pub async fn toggle_favorite(product_id: &ProductId) -> Result<FavoriteResult, Error> {
    let url = favorite_url(&origin(), product_id);

    let client = reqwest::Client::new();
    let res = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(request_error)?;

    res.json::<FavoriteResult>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

pub async fn fetch_search_suggestion(keyword: &str) -> Result<serde_json::Value, Error> {
    let url = suggestion_endpoint(&origin());

    let client = reqwest::Client::new();
    let res = client
        .get(url)
        .query(&SuggestionQuery { q: keyword })
        .send()
        .await
        .map_err(request_error)?;

    res.json().await.map_err(|e| Error::Decode(e.to_string()))
}
