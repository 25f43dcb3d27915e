use crate::client::Client;
use crate::error::ApiResult;
use crate::request::Params;
use crate::response::ApiResponse;

/// Supported hosters
#[derive(Debug, Clone, Copy)]
pub struct Hosts<'a> {
    client: &'a Client,
}

impl<'a> Hosts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Supported hosts, keyed by domain
    pub async fn get(&self) -> ApiResult<ApiResponse> {
        self.client.get("/hosts", Params::new()).await
    }

    pub async fn status(&self) -> ApiResult<ApiResponse> {
        self.client.get("/hosts/status", Params::new()).await
    }

    /// Regexes matching supported links
    pub async fn regex(&self) -> ApiResult<ApiResponse> {
        self.client.get("/hosts/regex", Params::new()).await
    }

    /// Regexes matching supported folder links
    pub async fn regex_folder(&self) -> ApiResult<ApiResponse> {
        self.client.get("/hosts/regexFolder", Params::new()).await
    }

    pub async fn domains(&self) -> ApiResult<ApiResponse> {
        self.client.get("/hosts/domains", Params::new()).await
    }
}
