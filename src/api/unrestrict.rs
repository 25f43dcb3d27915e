use std::path::Path;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::unrestrict::{LinkCheck, UnrestrictedLink};
use crate::request::Params;
use crate::response::ApiResponse;

/// Hoster link unrestriction
#[derive(Debug, Clone, Copy)]
pub struct Unrestrict<'a> {
    client: &'a Client,
}

impl<'a> Unrestrict<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Check whether a link is supported and available
    pub async fn check(&self, link: &str, password: Option<&str>) -> ApiResult<LinkCheck> {
        let params = Params::new()
            .with("link", link)
            .with_opt("password", password);
        self.client.post("/unrestrict/check", params).await?.decode()
    }

    /// Unrestrict a hoster link
    ///
    /// `remote` uses the account's remote traffic instead of the default
    /// traffic.
    pub async fn link(
        &self,
        link: &str,
        password: Option<&str>,
        remote: Option<bool>,
    ) -> ApiResult<UnrestrictedLink> {
        let params = Params::new()
            .with("link", link)
            .with_opt("password", password)
            .with_opt("remote", remote.map(u8::from));
        self.client.post("/unrestrict/link", params).await?.decode()
    }

    /// Unrestrict a folder link into its file links
    pub async fn folder(&self, link: &str) -> ApiResult<ApiResponse> {
        self.client
            .post("/unrestrict/folder", Params::new().with("link", link))
            .await
    }

    /// Decrypt a local container file (RSDF, CCF, CCF3, DLC)
    pub async fn container_file(&self, path: impl AsRef<Path>) -> ApiResult<ApiResponse> {
        self.client
            .put_file("/unrestrict/containerFile", path, Params::new())
            .await
    }

    /// Decrypt a remote container file
    pub async fn container_link(&self, link: &str) -> ApiResult<ApiResponse> {
        self.client
            .post("/unrestrict/containerLink", Params::new().with("link", link))
            .await
    }
}
