use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Premium,
    Free,
}

/// Current user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// Fidelity points
    pub points: i64,
    pub locale: String,
    pub avatar: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Seconds of premium left
    pub premium: i64,
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_premium(&self) -> bool {
        self.account_type == AccountType::Premium && self.premium > 0
    }
}
