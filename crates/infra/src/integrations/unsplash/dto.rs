//! Wire formats of the photo API

use chrono::{DateTime, Utc};
use imagefeed_domain::{AccessToken, Photo, PhotoSize, Profile};
use serde::Deserialize;

/// `POST /oauth/token` response body.
#[derive(Debug, Deserialize)]
pub struct TokenResponseBody {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl From<TokenResponseBody> for AccessToken {
    fn from(body: TokenResponseBody) -> Self {
        AccessToken::new(body.access_token)
    }
}

/// One element of `GET /photos`.
#[derive(Debug, Deserialize)]
pub struct PhotoResult {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub liked_by_user: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    pub urls: UrlsResult,
}

#[derive(Debug, Deserialize)]
pub struct UrlsResult {
    #[serde(default)]
    pub raw: Option<String>,
    pub full: String,
    #[serde(default)]
    pub regular: Option<String>,
    pub small: String,
    #[serde(default)]
    pub thumb: Option<String>,
}

impl From<PhotoResult> for Photo {
    fn from(result: PhotoResult) -> Self {
        Photo {
            created_at: result.created_at.as_deref().and_then(parse_timestamp),
            id: result.id,
            size: PhotoSize::new(result.width, result.height),
            thumb_url: result.urls.small,
            large_url: result.urls.full,
            is_liked: result.liked_by_user.unwrap_or(false),
            description: result.description,
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.with_timezone(&Utc))
}

/// `GET /me` response body.
#[derive(Debug, Deserialize)]
pub struct ProfileResult {
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl From<ProfileResult> for Profile {
    fn from(result: ProfileResult) -> Self {
        Profile::new(
            result.username,
            result.first_name.as_deref(),
            result.last_name.as_deref(),
            result.bio,
        )
    }
}

/// `GET /users/{username}` response body (only what we read).
#[derive(Debug, Deserialize)]
pub struct UserResult {
    pub username: String,
    pub profile_image: ProfileImage,
}

#[derive(Debug, Deserialize)]
pub struct ProfileImage {
    #[serde(default)]
    pub small: Option<String>,
    pub medium: String,
    #[serde(default)]
    pub large: Option<String>,
}
