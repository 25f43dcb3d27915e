use serde_json::Value;

use crate::client::{segment, Client};
use crate::error::ApiResult;
use crate::request::Params;

/// Streaming links and media information for a download
#[derive(Debug, Clone, Copy)]
pub struct Streaming<'a> {
    client: &'a Client,
}

impl<'a> Streaming<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Transcoding links for a download id
    pub async fn transcode(&self, id: &str) -> ApiResult<Value> {
        self.client
            .get(&format!("/streaming/transcode/{}", segment(id)), Params::new())
            .await?
            .decode()
    }

    /// Media information (codecs, duration, tracks) for a download id
    pub async fn media_info(&self, id: &str) -> ApiResult<Value> {
        self.client
            .get(&format!("/streaming/mediaInfos/{}", segment(id)), Params::new())
            .await?
            .decode()
    }
}
