//! Authorization URL construction

use url::Url;

use super::types::AuthorizeRequest;

/// Build the consent page URL the user is sent to.
///
/// Query parameters are appended in a fixed order: `client_id`,
/// `redirect_uri`, `response_type=code`, `scope`. Values are form encoded, so
/// spaces in the scope become `+`.
///
/// Returns `None` only when `endpoint` is not an absolute URL.
pub fn build_authorization_url(request: &AuthorizeRequest) -> Option<Url> {
    let mut url = Url::parse(&request.endpoint).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }

    url.query_pairs_mut()
        .append_pair("client_id", &request.client_id)
        .append_pair("redirect_uri", &request.redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", &request.scope);

    Some(url)
}
