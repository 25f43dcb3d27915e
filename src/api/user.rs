use crate::client::Client;
use crate::error::ApiResult;
use crate::models::user::User as UserInfo;
use crate::request::Params;

/// Current user endpoint
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    client: &'a Client,
}

impl<'a> User<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get current user information
    pub async fn get(&self) -> ApiResult<UserInfo> {
        self.client.get("/user", Params::new()).await?.decode()
    }
}
