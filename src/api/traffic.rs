use crate::client::Client;
use crate::error::ApiResult;
use crate::models::traffic::{TrafficDetails, TrafficInfo};
use crate::request::Params;

/// Traffic usage endpoints
#[derive(Debug, Clone, Copy)]
pub struct Traffic<'a> {
    client: &'a Client,
}

impl<'a> Traffic<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Traffic left per limited hoster
    pub async fn get(&self) -> ApiResult<TrafficInfo> {
        self.client.get("/traffic", Params::new()).await?.decode()
    }

    /// Traffic per day between `start` and `end` (`YYYY-MM-DD`, at most 31 days)
    pub async fn details(&self, start: Option<&str>, end: Option<&str>) -> ApiResult<TrafficDetails> {
        let params = Params::new()
            .with_opt("start", start)
            .with_opt("end", end);
        self.client.get("/traffic/details", params).await?.decode()
    }
}
