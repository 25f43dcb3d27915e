use serde::{Deserialize, Serialize};

/// Entry of `/hosts`, keyed by domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}
