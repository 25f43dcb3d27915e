pub mod downloads;
pub mod hosts;
pub mod torrents;
pub mod traffic;
pub mod unrestrict;
pub mod user;

use serde::{Deserialize, Serialize};

/// Body returned alongside a vendor error code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub error_code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}
