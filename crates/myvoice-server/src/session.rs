//! Cookie-carried session ids for settings

use axum::http::{header, HeaderMap, HeaderValue};

use myvoice::SessionId;

pub const SESSION_COOKIE: &str = "myvoice_session";

/// Session resolved for one request
#[derive(Debug, Clone, Copy)]
pub struct RequestSession {
    pub id: SessionId,
    /// Issued on this request; the client must be told via Set-Cookie
    pub issued: bool,
}

impl RequestSession {
    /// Read the session cookie, issuing a new id when it is missing or invalid
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match session_from_cookies(headers) {
            Some(id) => Self { id, issued: false },
            None => {
                let id = SessionId::generate();
                tracing::debug!("Issued new session {}", id);
                Self { id, issued: true }
            }
        }
    }

    /// Set-Cookie value for a newly issued session
    pub fn set_cookie(&self, secure: bool) -> Option<HeaderValue> {
        if !self.issued {
            return None;
        }
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.id
        );
        if secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie).ok()
    }
}

fn session_from_cookies(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == SESSION_COOKIE)
        .find_map(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_existing_cookie() {
        let id = SessionId::generate();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}", SESSION_COOKIE, id)).unwrap(),
        );

        let session = RequestSession::from_headers(&headers);
        assert_eq!(session.id, id);
        assert!(!session.issued);
        assert!(session.set_cookie(false).is_none());
    }

    #[test]
    fn test_skips_malformed_duplicate_cookie() {
        let id = SessionId::generate();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!(
                "{name}=garbage; {name}={id}",
                name = SESSION_COOKIE
            ))
            .unwrap(),
        );

        let session = RequestSession::from_headers(&headers);
        assert_eq!(session.id, id);
        assert!(!session.issued);
    }

    #[test]
    fn test_issues_when_missing_or_invalid() {
        let mut headers = HeaderMap::new();
        assert!(RequestSession::from_headers(&headers).issued);

        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("myvoice_session=garbage"),
        );
        let session = RequestSession::from_headers(&headers);
        assert!(session.issued);

        let cookie = session.set_cookie(true).unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("myvoice_session="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.ends_with("; Secure"));
    }
}
