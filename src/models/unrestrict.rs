use serde::{Deserialize, Serialize};

/// Result of `/unrestrict/check`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheck {
    pub host: String,
    pub link: String,
    pub filename: String,
    pub filesize: u64,
    /// 1 when the hoster is supported
    pub supported: u8,
}

/// Result of `/unrestrict/link`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnrestrictedLink {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    pub filesize: u64,
    pub link: String,
    pub host: String,
    /// Max chunks allowed
    #[serde(default)]
    pub chunks: Option<u32>,
    #[serde(default)]
    pub crc: Option<u8>,
    /// Generated download link
    pub download: String,
    #[serde(default)]
    pub streamable: Option<u8>,
}
