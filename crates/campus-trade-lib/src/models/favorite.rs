use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// Identifier of a product as the page knows it.
///
/// The backend resolves it, so no validation happens here: integers and
/// strings are both kept as their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn list_button_id(&self) -> String {
        format!("favorite-btn-{}", self.0)
    }

    pub fn count_badge_id(&self) -> String {
        format!("favorite-count-{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StringOrInteger;

        impl Visitor<'_> for StringOrInteger {
            type Value = ProductId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string or integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<ProductId, E>
            where
                E: de::Error,
            {
                Ok(ProductId::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<ProductId, E>
            where
                E: de::Error,
            {
                Ok(ProductId::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<ProductId, E>
            where
                E: de::Error,
            {
                Ok(ProductId(value.to_string()))
            }
        }

        deserializer.deserialize_any(StringOrInteger)
    }
}

/// Body returned by `POST /product/{id}/favorite`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteResult {
    pub success: bool,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub favorite_count: u64,
    #[serde(default)]
    pub message: String,
}

pub fn favorite_url(origin: &str, id: &ProductId) -> String {
    format!("{}/product/{}/favorite", origin.trim_end_matches('/'), id)
}
