use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::Params;

/// Entry of `/downloads`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    pub filesize: u64,
    pub link: String,
    pub host: String,
    #[serde(default)]
    pub chunks: Option<u32>,
    pub download: String,
    #[serde(default)]
    pub generated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub streamable: Option<u8>,
}

/// Paging for `/downloads`; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Starting offset, must be within 0 and the total count
    pub offset: Option<u32>,
    /// Page number, ignored when `offset` is set
    pub page: Option<u32>,
    /// Entries per page, between 0 and 5000
    pub limit: Option<u32>,
}

impl ListQuery {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with_opt("offset", self.offset)
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
    }
}
