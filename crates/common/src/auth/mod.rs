//! OAuth2 authorization-code helpers
//!
//! Pure functions for the browser half of the flow: building the consent URL
//! the user is sent to and recognising the redirect the authorization server
//! answers with. No I/O happens here; the token exchange lives with the HTTP
//! adapters.
//!
//! ## Usage
//!
//! ```
//! use imagefeed_common::auth::{build_authorization_url, parse_redirect, AuthorizeRequest, RedirectOutcome};
//!
//! let request = AuthorizeRequest::new(
//!     "https://example.com/oauth/authorize",
//!     "client",
//!     "urn:ietf:wg:oauth:2.0:oob",
//!     "public read_user",
//! );
//! let url = build_authorization_url(&request).unwrap();
//! assert!(url.as_str().contains("response_type=code"));
//!
//! let outcome = parse_redirect(
//!     "https://example.com/oauth/authorize/native?code=abc",
//!     "/oauth/authorize/native",
//! );
//! assert_eq!(outcome, RedirectOutcome::Code("abc".to_string()));
//! ```

mod authorize;
mod redirect;
mod types;

pub use authorize::build_authorization_url;
pub use redirect::parse_redirect;
pub use types::{AuthorizeRequest, RedirectOutcome};
