use serde::{Deserialize, Serialize};

/// Answer code the service returns while a task is still being worked on
pub const CAPCHA_NOT_READY: &str = "CAPCHA_NOT_READY";

/// Response envelope of the `in.php` / `res.php` JSON API.
///
/// On success `status` is 1 and `request` carries the payload (a task id or
/// the solved value). On failure `status` is 0 and the error code is in
/// `request`, sometimes duplicated into `error_text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub status: u8,
    pub request: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 1
    }

    /// The task is submitted but not solved yet
    pub fn is_not_ready(&self) -> bool {
        self.request == CAPCHA_NOT_READY
            || self.error_text.as_deref() == Some(CAPCHA_NOT_READY)
    }

    /// Error code of a failed call, verbatim from the service
    pub fn error_code(&self) -> Option<&str> {
        if self.is_ok() {
            return None;
        }
        Some(self.error_text.as_deref().unwrap_or(&self.request))
    }
}
