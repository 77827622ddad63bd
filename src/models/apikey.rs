use serde::{Deserialize, Serialize};

/// Status of the per-account OpenAI API key stored server-side.
///
/// `key` is masked unless `full_key` is set; `is_set` distinguishes an
/// empty masked key from no key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenAiKeyInfo {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub is_set: bool,
    #[serde(default)]
    pub full_key: bool,
}
