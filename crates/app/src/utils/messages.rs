//! User-facing error messages

use imagefeed_domain::ImageFeedError;

const GENERIC_NETWORK: &str = "Something went wrong while talking to the server. Try again later.";

/// Message shown to the user for `error`.
///
/// HTTP failures are keyed by status; anything without a status that still
/// came from the network reads as the generic network message.
pub fn user_message(error: &ImageFeedError) -> String {
    match error {
        ImageFeedError::HttpStatus(status) => status_message(*status).to_string(),
        ImageFeedError::MissingToken => {
            "You are not signed in. Run `imagefeed auth-url` and then `imagefeed login`.".into()
        }
        ImageFeedError::RequestAlreadyInProgress => {
            "A request is already in progress. Wait for it to finish.".into()
        }
        ImageFeedError::InvalidUsername(name) => format!("{name:?} is not a valid username."),
        ImageFeedError::InvalidRequest(detail) => format!("The request could not be made: {detail}"),
        ImageFeedError::Config(detail) => format!("Configuration problem: {detail}"),
        ImageFeedError::Storage(detail) => format!("Could not access saved credentials: {detail}"),
        ImageFeedError::InvalidResponse(_) | ImageFeedError::Network(_) => {
            GENERIC_NETWORK.to_string()
        }
    }
}

fn status_message(status: u16) -> &'static str {
    match status {
        400 => "The server rejected the request (400 Bad Request).",
        401 => "Your session has expired. Sign in again (401 Unauthorized).",
        403 => "Access denied. The app may have hit its request limit (403 Forbidden).",
        404 => "Nothing was found at that address (404 Not Found).",
        500..=599 => "The server is having trouble. Try again later.",
        _ => GENERIC_NETWORK,
    }
}
