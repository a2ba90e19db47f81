use std::fmt;

/// Placeholder credential used by examples and as the fail-soft default.
/// Replace it with a real key from your account dashboard.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_APIKEY";

/// API key authorizing use of the captcha solving service
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    /// create new api key
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// get the raw key value
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// whether this is the documented placeholder, not a real credential
    pub fn is_placeholder(&self) -> bool {
        self.key == PLACEHOLDER_API_KEY || self.key.is_empty()
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

// keep the key out of logs
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(****)")
    }
}
