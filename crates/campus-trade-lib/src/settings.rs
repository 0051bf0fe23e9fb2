use serde::{Deserialize, Serialize};

/// Runtime knobs of the page script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scheme, host and port requests are sent to, without trailing slash.
    pub origin: String,
    pub toast_lifetime_ms: u32,
    pub alert_hide_delay_ms: u32,
    pub suggestion_min_chars: usize,
    pub allowed_extensions: Vec<String>,
    pub max_upload_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: String::new(),
            toast_lifetime_ms: 3000,
            alert_hide_delay_ms: 5000,
            suggestion_min_chars: 2,
            allowed_extensions: ["png", "jpg", "jpeg", "gif"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Settings {
    pub fn with_origin(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_with_origin() {
        let settings = Settings::with_origin("http://localhost:5001/");

        assert_eq!(settings.origin, "http://localhost:5001");
        assert_eq!(settings.toast_lifetime_ms, 3000);
        assert_eq!(settings.max_upload_bytes, 16777216);
    }
}
