use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

use crate::auth::jwt::SESSION_TTL;

/// Session cookie name, fixed by convention with the web client.
pub const SESSION_COOKIE_NAME: &str = "jwt-agora";

/// Build the `HttpOnly` session cookie carrying the signed token. `secure`
/// is only set in production, where the client is served over HTTPS.
pub fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, anyhow::Error> {
    let max_age = SESSION_TTL.as_secs();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    Ok(HeaderValue::from_str(&cookie)?)
}

/// Build a cookie that overwrites and immediately expires the session
/// cookie. Logout works purely client-side; the token itself stays valid
/// until its own expiry.
pub fn clear_session_cookie(secure: bool) -> Result<HeaderValue, anyhow::Error> {
    let mut cookie =
        format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }
    Ok(HeaderValue::from_str(&cookie)?)
}

/// Pull the session token out of the request's `Cookie` header, if present.
/// Pairs without an `=` are skipped rather than aborting the scan.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(COOKIE)?.to_str().ok()?;
    value.split(';').find_map(|pair| {
        let (key, val) = pair.trim().split_once('=')?;
        (key.trim() == SESSION_COOKIE_NAME).then(|| val.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_carries_the_required_attributes() {
        let cookie = session_cookie("tok123", false).expect("cookie");
        let value = cookie.to_str().unwrap();
        assert!(value.starts_with("jwt-agora=tok123;"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Strict"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Max-Age=259200")); // 3 days
        assert!(!value.contains("Secure"));
    }

    #[test]
    fn secure_attribute_follows_the_environment() {
        let cookie = session_cookie("tok123", true).expect("cookie");
        assert!(cookie.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn clearing_cookie_expires_immediately() {
        let cookie = clear_session_cookie(false).expect("cookie");
        let value = cookie.to_str().unwrap();
        assert!(value.starts_with("jwt-agora=;"));
        assert!(value.contains("Max-Age=0"));
    }

    #[test]
    fn extracts_the_session_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; jwt-agora=abc.def.ghi; lang=en"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn skips_malformed_pairs_without_giving_up() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("flag; jwt-agora=abc.def.ghi"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn ignores_cookies_with_a_similar_name() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("jwt-agora-old=zzz; other=1"),
        );
        assert_eq!(extract_session_token(&headers), None);
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers), None);
    }
}
