use std::path::Path;

use crate::client::Client;
use crate::error::ApiResult;
use crate::request::Params;
use crate::response::ApiResponse;

/// Account settings
#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    client: &'a Client,
}

impl<'a> Settings<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get current settings and their allowed values
    pub async fn get(&self) -> ApiResult<ApiResponse> {
        self.client.get("/settings", Params::new()).await
    }

    /// Update a single setting
    pub async fn update(&self, setting_name: &str, setting_value: &str) -> ApiResult<ApiResponse> {
        let params = Params::new()
            .with("setting_name", setting_name)
            .with("setting_value", setting_value);
        self.client.post("/settings/update", params).await
    }

    /// Convert fidelity points into premium days
    pub async fn convert_points(&self) -> ApiResult<ApiResponse> {
        self.client.post("/settings/convertPoints", Params::new()).await
    }

    /// Send the password change email
    pub async fn change_password(&self) -> ApiResult<ApiResponse> {
        self.client.post("/settings/changePassword", Params::new()).await
    }

    /// Upload a new avatar image
    pub async fn avatar_file(&self, path: impl AsRef<Path>) -> ApiResult<ApiResponse> {
        self.client
            .put_file("/settings/avatarFile", path, Params::new())
            .await
    }

    /// Reset the avatar to the default one
    pub async fn avatar_delete(&self) -> ApiResult<ApiResponse> {
        self.client.delete("/settings/avatarDelete").await
    }
}
