//! Session cookie handling

/// Cookie holding the session id
pub const SESSION_COOKIE: &str = "gameId";

/// Extract the session id from a `Cookie` header value
///
/// Malformed pairs are skipped. An empty value counts as no session.
///
/// # Examples
/// ```
/// use wordle_server::server::session_id;
///
/// assert_eq!(session_id("theme=dark; gameId=abc123"), Some("abc123"));
/// assert_eq!(session_id("theme=dark"), None);
/// ```
#[must_use]
pub fn session_id(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == SESSION_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value binding a new session to the whole site
#[must_use]
pub fn session_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/")
}
