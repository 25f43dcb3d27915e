use rdapi::{Client, ClientConfig};
use wiremock::MockServer;

pub const TOKEN: &str = "TESTTOKEN123";
pub const BEARER: &str = "Bearer TESTTOKEN123";
pub const PREFIX: &str = "/rest/1.0";

/// Client pointed at `server` with the test token
pub fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::new(TOKEN).with_base_url(format!("{}{}", server.uri(), PREFIX));
    Client::new(config).expect("valid test config")
}

pub fn api_path(path: &str) -> String {
    format!("{}{}", PREFIX, path)
}
