//! Link entity representing a shortened URL mapping.

use crate::domain::short_code::short_code_for;

/// A long URL together with the short code derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
}

impl ShortLink {
    /// Creates a link, deriving the code from `long_url`.
    pub fn from_long_url(long_url: impl Into<String>) -> Self {
        let long_url = long_url.into();
        Self {
            code: short_code_for(&long_url),
            long_url,
        }
    }

    /// Public short URL for this link under `domain`.
    ///
    /// A trailing slash on `domain` is ignored.
    pub fn short_url(&self, domain: &str) -> String {
        format!("{}/{}", domain.trim_end_matches('/'), self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_from_long_url() {
        let link = ShortLink::from_long_url("http://example.com");

        assert_eq!(link.code, "89dce6a446");
        assert_eq!(link.long_url, "http://example.com");
    }

    #[test]
    fn test_short_url() {
        let link = ShortLink::from_long_url("http://example.com");

        assert_eq!(
            link.short_url("http://localhost:8080"),
            "http://localhost:8080/89dce6a446"
        );
        assert_eq!(
            link.short_url("https://s.example.com/"),
            "https://s.example.com/89dce6a446"
        );
    }
}
