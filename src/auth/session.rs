// Session cookie handling
// The session is a signed token carried in an HttpOnly cookie; API clients
// may send the same token as a Bearer header instead.

use axum::http::{header, HeaderMap};

pub const SESSION_COOKIE: &str = "teamdraw_session";

/// Builds the `Set-Cookie` value that starts a session
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    );
    push_policy(&mut cookie, secure);
    cookie
}

/// Builds the `Set-Cookie` value that ends a session
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);
    push_policy(&mut cookie, secure);
    cookie
}

fn push_policy(cookie: &mut String, secure: bool) {
    if secure {
        cookie.push_str("; Secure; SameSite=Strict");
    } else {
        cookie.push_str("; SameSite=Lax");
    }
}

/// Finds the session token in the request: session cookie first, then `Authorization: Bearer`
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    cookie_token(headers).or_else(|| bearer_token(headers))
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
