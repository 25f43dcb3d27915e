use crate::client::{segment, Client};
use crate::error::ApiResult;
use crate::models::downloads::ListQuery;
use crate::response::ApiResponse;

/// Download history
#[derive(Debug, Clone, Copy)]
pub struct Downloads<'a> {
    client: &'a Client,
}

impl<'a> Downloads<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List downloads; decode the body as `Vec<models::downloads::Download>`
    pub async fn get(&self, query: &ListQuery) -> ApiResult<ApiResponse> {
        self.client.get("/downloads", query.to_params()).await
    }

    /// Delete a download from the history
    pub async fn delete(&self, id: &str) -> ApiResult<ApiResponse> {
        self.client
            .delete(&format!("/downloads/delete/{}", segment(id)))
            .await
    }
}
