pub const SUGGESTION_PATH: &str = "/api/search/suggestion";

pub fn should_suggest(keyword: &str, min_chars: usize) -> bool {
    keyword.chars().count() >= min_chars
}

pub fn suggestion_endpoint(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), SUGGESTION_PATH)
}
