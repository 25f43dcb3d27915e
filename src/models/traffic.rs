use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Traffic state for one hoster, keyed by host in [`TrafficInfo`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostTraffic {
    /// Links or bytes left, depending on `kind`
    #[serde(default)]
    pub left: Option<i64>,
    #[serde(default)]
    pub bytes: Option<i64>,
    #[serde(default)]
    pub links: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub extra: Option<i64>,
    /// "day", "week" or "month"
    #[serde(default)]
    pub reset: Option<String>,
}

pub type TrafficInfo = HashMap<String, HostTraffic>;

/// Traffic for one day, keyed by `YYYY-MM-DD` in [`TrafficDetails`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayTraffic {
    /// Bytes downloaded per host
    #[serde(default)]
    pub host: HashMap<String, u64>,
    pub bytes: u64,
}

pub type TrafficDetails = HashMap<String, DayTraffic>;
