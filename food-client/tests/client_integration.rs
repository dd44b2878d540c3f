// food-client/tests/client_integration.rs
// Construction and configuration tests

use food_client::{ClientConfig, NetworkHttpClient};

#[test]
fn default_config_points_at_local_dev_server() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:3333");
    assert_eq!(config.timeout, 30);
}

#[test]
fn with_timeout_overrides_default() {
    let config = ClientConfig::new("http://api.example.com").with_timeout(5);
    assert_eq!(config.timeout, 5);
}

#[test]
fn network_client_trims_trailing_slash() {
    let client = NetworkHttpClient::new(&ClientConfig::new("http://api.example.com/")).unwrap();
    assert_eq!(client.base_url(), "http://api.example.com");
}

#[test]
fn config_builds_a_network_client() {
    let client = ClientConfig::new("http://api.example.com")
        .build_http_client()
        .unwrap();
    assert_eq!(client.base_url(), "http://api.example.com");
}
