use imagefeed_app::AppContext;
use imagefeed_common::testing::TempDir;
use imagefeed_domain::{Config, TokenBackend};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Context wired against a mock server with a settings file in a temp dir.
pub struct TestApp {
    pub ctx: AppContext,
    pub dir: TempDir,
}

impl TestApp {
    pub fn new(server: &MockServer) -> Self {
        Self::with(server, |_| {})
    }

    /// Like [`TestApp::new`], letting the caller adjust the config first.
    pub fn with(server: &MockServer, adjust: impl FnOnce(&mut Config)) -> Self {
        let dir = TempDir::new("app-test").expect("temp dir should be created");

        let mut config = Config::default();
        config.auth.access_key = "test-access".to_string();
        config.auth.secret_key = "test-secret".to_string();
        config.auth.token_url = format!("{}/oauth/token", server.uri());
        config.api.base_url = server.uri();
        config.storage.backend = TokenBackend::File;
        config.storage.settings_path = dir.child("settings.json");
        config.feed.per_page = 2;
        adjust(&mut config);

        let ctx = AppContext::with_config(config).expect("context should build");
        Self { ctx, dir }
    }
}

pub fn photo_json(id: &str, liked: bool) -> Value {
    json!({
        "id": id,
        "width": 300,
        "height": 200,
        "liked_by_user": liked,
        "urls": {
            "full": format!("https://images.test/{id}/full"),
            "small": format!("https://images.test/{id}/small")
        }
    })
}
