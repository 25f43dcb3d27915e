use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::Params;

/// Torrent state as reported by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorrentStatus {
    MagnetError,
    MagnetConversion,
    WaitingFilesSelection,
    Queued,
    Downloading,
    Downloaded,
    Error,
    Virus,
    Compressing,
    Uploading,
    Dead,
    #[serde(other)]
    Unknown,
}

/// Entry of `/torrents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Torrent {
    pub id: String,
    pub filename: String,
    pub hash: String,
    pub bytes: u64,
    pub host: String,
    pub split: u32,
    /// 0 to 100
    pub progress: f64,
    pub status: TorrentStatus,
    pub added: DateTime<Utc>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub ended: Option<DateTime<Utc>>,
    #[serde(default)]
    pub speed: Option<u64>,
    #[serde(default)]
    pub seeders: Option<u32>,
}

/// A file inside a torrent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorrentFile {
    pub id: u64,
    pub path: String,
    pub bytes: u64,
    /// 1 when selected for download
    pub selected: u8,
}

/// Result of `/torrents/info/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorrentInfo {
    pub id: String,
    pub filename: String,
    pub original_filename: String,
    pub hash: String,
    pub bytes: u64,
    pub original_bytes: u64,
    pub host: String,
    pub split: u32,
    pub progress: f64,
    pub status: TorrentStatus,
    pub added: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<TorrentFile>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub ended: Option<DateTime<Utc>>,
    #[serde(default)]
    pub speed: Option<u64>,
    #[serde(default)]
    pub seeders: Option<u32>,
}

impl TorrentInfo {
    /// Ids of the files currently selected
    pub fn selected_file_ids(&self) -> Vec<u64> {
        self.files
            .iter()
            .filter(|f| f.selected == 1)
            .map(|f| f.id)
            .collect()
    }
}

/// Result of `/torrents/addTorrent` and `/torrents/addMagnet`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedTorrent {
    pub id: String,
    pub uri: String,
}

/// Result of `/torrents/activeCount`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveCount {
    pub nb: u32,
    pub limit: u32,
}

/// Entry of `/torrents/availableHosts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableHost {
    pub host: String,
    /// In GB
    pub max_file_size: u64,
}

/// Paging and filtering for `/torrents`; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentListQuery {
    pub offset: Option<u32>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// "active" lists only active torrents
    pub filter: Option<String>,
}

impl TorrentListQuery {
    /// Only torrents that are still being processed
    pub fn active() -> Self {
        Self {
            filter: Some("active".to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with_opt("offset", self.offset)
            .with_opt("page", self.page)
            .with_opt("limit", self.limit)
            .with_opt("filter", self.filter.as_deref())
    }
}
