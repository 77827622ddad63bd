use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope returned by most CodeCampass endpoints.
///
/// `code == 0` means the operation succeeded at the domain level. A
/// non-zero `code` still arrives as a normal HTTP 2xx response, so the
/// transport layer does not turn it into an error - callers inspect the
/// envelope and branch.
///
/// The login endpoint places the bearer token in the top-level `token`
/// field; every other endpoint leaves it absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Domain-level success check. Transport success does not imply this.
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// The bearer token, if the server attached one.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
