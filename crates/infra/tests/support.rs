use std::time::Duration;

use imagefeed_domain::{ApiConfig, AuthConfig};
use imagefeed_infra::{HttpClient, UnsplashAuthClient, UnsplashClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const ACCESS_KEY: &str = "test-access-key";

/// API client pointed at the mock server.
pub fn api_client(server: &MockServer) -> UnsplashClient {
    let api = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        like_timeout_secs: 5,
        max_attempts: 1,
    };
    let http = HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("http client should build");
    UnsplashClient::new(http, &api, ACCESS_KEY).expect("api client should build")
}

/// Token endpoint client whose token URL is on the mock server.
pub fn auth_client(server: &MockServer) -> UnsplashAuthClient {
    auth_client_with(server, HttpClient::new().expect("http client should build"))
}

pub fn auth_client_with(server: &MockServer, http: HttpClient) -> UnsplashAuthClient {
    let auth = AuthConfig {
        token_url: format!("{}/oauth/token", server.uri()),
        access_key: ACCESS_KEY.to_string(),
        secret_key: "test-secret".to_string(),
        redirect_uri: "urn:ietf:wg:oauth:2.0:oob".to_string(),
        ..AuthConfig::default()
    };
    UnsplashAuthClient::new(http, auth)
}

pub fn photo_json(id: &str, liked: bool) -> Value {
    json!({
        "id": id,
        "created_at": "2024-02-01T10:00:00Z",
        "width": 1200,
        "height": 800,
        "liked_by_user": liked,
        "description": format!("photo {id}"),
        "urls": {
            "raw": format!("https://images.test/{id}/raw"),
            "full": format!("https://images.test/{id}/full"),
            "regular": format!("https://images.test/{id}/regular"),
            "small": format!("https://images.test/{id}/small"),
            "thumb": format!("https://images.test/{id}/thumb")
        }
    })
}
