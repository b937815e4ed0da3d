//! DTOs for link endpoints.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

/// Body of `POST /add`.
///
/// The `url` key is matched case-insensitively, with an exact `url` key
/// taking precedence. A missing or `null` field, and a `null` body, decode
/// as an empty string.
#[derive(Debug, Default)]
pub struct AddUrlRequest {
    pub url: String,
}

impl<'de> Deserialize<'de> for AddUrlRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(fields) = Option::<Map<String, Value>>::deserialize(deserializer)? else {
            return Ok(Self::default());
        };

        let value = fields.get("url").or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("url"))
                .map(|(_, value)| value)
        });

        let url = match value {
            Some(value) => Option::<String>::deserialize(value.clone())
                .map_err(<D::Error as de::Error>::custom)?
                .unwrap_or_default(),
            None => String::new(),
        };

        Ok(Self { url })
    }
}

/// Response of a successful `POST /add`.
#[derive(Debug, Serialize)]
pub struct AddUrlResponse {
    pub shortened_url: String,
    pub long_url: String,
}
