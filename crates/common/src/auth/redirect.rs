//! Redirect URL recognition

use url::Url;

use super::types::RedirectOutcome;

/// Inspect a URL the embedded browser is about to load.
///
/// Only URLs whose path equals `callback_path` are considered. On the
/// callback, a `code` query item wins over an `error` item. Anything else,
/// including unparsable input, is [`RedirectOutcome::None`].
pub fn parse_redirect(raw: &str, callback_path: &str) -> RedirectOutcome {
    let Ok(url) = Url::parse(raw) else {
        return RedirectOutcome::None;
    };
    if url.path() != callback_path {
        return RedirectOutcome::None;
    }

    let mut error = None;
    for (name, value) in url.query_pairs() {
        match name.as_ref() {
            "code" => return RedirectOutcome::Code(value.into_owned()),
            "error" if error.is_none() => error = Some(value.into_owned()),
            _ => {}
        }
    }

    error.map_or(RedirectOutcome::None, RedirectOutcome::Denied)
}
