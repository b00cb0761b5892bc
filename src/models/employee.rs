use serde::Serialize;

/// A registered employee. Usernames are stored lower-cased and trimmed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub username: String,
    pub display_name: String,
    #[serde(skip)]
    pub password_hash: String,
}

impl Employee {
    pub fn normalize_username(raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}
