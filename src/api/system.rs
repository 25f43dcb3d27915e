use crate::client::Client;
use crate::error::ApiResult;
use crate::request::Params;
use crate::response::ApiResponse;

/// Token and server time endpoints
#[derive(Debug, Clone, Copy)]
pub struct System<'a> {
    client: &'a Client,
}

impl<'a> System<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Disable the current access token
    pub async fn disable_token(&self) -> ApiResult<ApiResponse> {
        self.client.get("/disable_access_token", Params::new()).await
    }

    /// Server time as `Y-m-d H:i:s`
    pub async fn time(&self) -> ApiResult<ApiResponse> {
        self.client.get("/time", Params::new()).await
    }

    /// Server time in ISO 8601
    pub async fn iso_time(&self) -> ApiResult<ApiResponse> {
        self.client.get("/time/iso", Params::new()).await
    }
}
