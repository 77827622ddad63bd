use serde::{Deserialize, Serialize};

/// An account on the CodeCampass server.
///
/// Timestamps are kept as the RFC 3339 strings the server sends; the
/// client never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Parameters for `/user/userLogin`. Sent as URL query parameters.
#[derive(Debug, Clone, Serialize)]
pub struct LoginParams {
    pub name: String,
    pub password: String,
}

/// Parameters for `/user/createUser`. Sent as URL query parameters.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterParams {
    pub name: String,
    pub password: String,
    pub repassword: String,
}
