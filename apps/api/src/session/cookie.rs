//! Session identity carried in a signed cookie.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "coverforge_sid";

/// Opaque per-browser session identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The session carried by the jar, if its signature checked out.
    pub fn current(jar: &SignedCookieJar) -> Option<Self> {
        jar.get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| Uuid::parse_str(value).is_ok())
            .map(Self)
    }

    /// The current session, or a freshly minted one added to the jar.
    pub fn resolve(jar: SignedCookieJar) -> (SignedCookieJar, Self) {
        if let Some(id) = Self::current(&jar) {
            return (jar, id);
        }
        let id = Self::new();
        let cookie = Cookie::build((SESSION_COOKIE, id.0.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (jar.add(cookie), id)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the 64-byte cookie signing key from an arbitrary-length secret.
pub fn session_key_from_secret(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation_is_stable() {
        let a = session_key_from_secret("short secret");
        let b = session_key_from_secret("short secret");
        assert_eq!(a.master(), b.master());
        assert_ne!(a.master(), session_key_from_secret("other").master());
    }

    #[test]
    fn test_resolve_mints_and_then_reuses() {
        let key = session_key_from_secret("test");
        let (jar, first) = SessionId::resolve(SignedCookieJar::new(key));
        let (_, second) = SessionId::resolve(jar);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_jar_has_no_session() {
        let jar = SignedCookieJar::new(session_key_from_secret("test"));
        assert!(SessionId::current(&jar).is_none());
    }
}
