use std::path::Path;

use crate::client::{segment, Client};
use crate::error::ApiResult;
use crate::models::torrents::TorrentListQuery;
use crate::request::{FileSelection, Params};
use crate::response::ApiResponse;

/// Prefix turning an info hash into a magnet link
pub const MAGNET_PREFIX: &str = "magnet:?xt=urn:btih:";

/// Torrent management
#[derive(Debug, Clone, Copy)]
pub struct Torrents<'a> {
    client: &'a Client,
}

impl<'a> Torrents<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List torrents; decode the body as `Vec<models::torrents::Torrent>`
    pub async fn get(&self, query: &TorrentListQuery) -> ApiResult<ApiResponse> {
        self.client.get("/torrents", query.to_params()).await
    }

    /// Torrent details including its files
    pub async fn info(&self, id: &str) -> ApiResult<ApiResponse> {
        self.client
            .get(&format!("/torrents/info/{}", segment(id)), Params::new())
            .await
    }

    /// Cached availability for an info hash
    pub async fn instant_availability(&self, hash: &str) -> ApiResult<ApiResponse> {
        self.client
            .get(
                &format!("/torrents/instantAvailability/{}", segment(hash)),
                Params::new(),
            )
            .await
    }

    /// Number of active torrents and the account limit
    pub async fn active_count(&self) -> ApiResult<ApiResponse> {
        self.client.get("/torrents/activeCount", Params::new()).await
    }

    /// Hosts a torrent can be added to
    pub async fn available_hosts(&self) -> ApiResult<ApiResponse> {
        self.client.get("/torrents/availableHosts", Params::new()).await
    }

    /// Upload a local .torrent file
    pub async fn add_file(&self, path: impl AsRef<Path>, host: Option<&str>) -> ApiResult<ApiResponse> {
        self.client
            .put_file("/torrents/addTorrent", path, Params::new().with_opt("host", host))
            .await
    }

    /// Add a torrent by info hash
    pub async fn add_magnet(&self, hash: &str, host: Option<&str>) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .with("magnet", magnet_link(hash))
            .with_opt("host", host);
        self.client.post("/torrents/addMagnet", params).await
    }

    /// Choose which files of a torrent to download
    pub async fn select_files(&self, id: &str, files: &FileSelection) -> ApiResult<ApiResponse> {
        self.client
            .post(
                &format!("/torrents/selectFiles/{}", segment(id)),
                Params::new().with("files", files),
            )
            .await
    }

    /// Delete a torrent
    pub async fn delete(&self, id: &str) -> ApiResult<ApiResponse> {
        self.client
            .delete(&format!("/torrents/delete/{}", segment(id)))
            .await
    }
}

/// Magnet link for an info hash
pub fn magnet_link(hash: &str) -> String {
    format!("{}{}", MAGNET_PREFIX, hash)
}
