use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A captcha task that can be submitted to the solving service
pub trait Captcha {
    /// API method name sent in the submit request
    fn method(&self) -> &'static str;

    /// Task-specific form fields, everything except `key`, `method` and `json`
    fn fields(&self) -> Vec<(String, String)>;
}

/// An image captcha, submitted as a base64 body
#[derive(Debug, Clone, PartialEq)]
pub struct NormalCaptcha {
    body: String,
}

impl NormalCaptcha {
    /// Read the image at `path` and encode it for submission
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read captcha image at {}", path.display()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Encode raw image bytes for submission
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            body: STANDARD.encode(bytes.as_ref()),
        }
    }

    /// Use an already base64-encoded image
    pub fn from_base64(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Captcha for NormalCaptcha {
    fn method(&self) -> &'static str {
        "base64"
    }

    fn fields(&self) -> Vec<(String, String)> {
        vec![("body".to_string(), self.body.clone())]
    }
}

/// A plain-text question captcha
#[derive(Debug, Clone, PartialEq)]
pub struct TextCaptcha {
    question: String,
}

impl TextCaptcha {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

impl Captcha for TextCaptcha {
    fn method(&self) -> &'static str {
        "post"
    }

    fn fields(&self) -> Vec<(String, String)> {
        vec![("textcaptcha".to_string(), self.question.clone())]
    }
}

/// Id of a submitted task, used to poll for the answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaId(String);

impl CaptchaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaptchaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Solved value returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution(String);

impl Solution {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normal_captcha_encodes_bytes() {
        let captcha = NormalCaptcha::from_bytes(b"abcdef");
        assert_eq!(captcha.method(), "base64");
        assert_eq!(
            captcha.fields(),
            vec![("body".to_string(), "YWJjZGVm".to_string())]
        );
    }

    #[test]
    fn test_normal_captcha_from_base64() {
        let captcha = NormalCaptcha::from_base64("YWJjZGVm");
        assert_eq!(captcha, NormalCaptcha::from_bytes(b"abcdef"));
    }

    #[test]
    fn test_text_captcha_fields() {
        let captcha = TextCaptcha::new("If tomorrow is Saturday, what day is today?");
        assert_eq!(captcha.method(), "post");
        assert_eq!(
            captcha.fields(),
            vec![(
                "textcaptcha".to_string(),
                "If tomorrow is Saturday, what day is today?".to_string()
            )]
        );
    }

    #[test]
    fn test_solution_displays_inner_value() {
        let solution = Solution::new("abc123");
        assert_eq!(solution.to_string(), "abc123");
    }
}
