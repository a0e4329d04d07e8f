//! Domain constants

/// Settings key under which the access token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "OAuthToken";

/// Path the authorization server redirects to after consent.
pub const OAUTH_CALLBACK_PATH: &str = "/oauth/authorize/native";

/// Photos requested per page.
pub const PHOTOS_PER_PAGE: u32 = 10;

/// Sort order requested from the photo listing endpoint.
pub const PHOTOS_ORDER_BY: &str = "latest";

/// Seconds an avatar URL stays fresh in the cache.
pub const AVATAR_CACHE_TTL_SECS: u64 = 300;

/// Timeout applied to like/unlike requests, in seconds.
pub const LIKE_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://unsplash.com/oauth/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://unsplash.com/oauth/token";
pub const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";
/// Space separated; form encoding renders it as `public+read_user+write_likes`.
pub const DEFAULT_ACCESS_SCOPE: &str = "public read_user write_likes";

/// Keychain service name used when tokens are stored in the platform keychain.
pub const KEYCHAIN_SERVICE_NAME: &str = "ImageFeed.auth";
