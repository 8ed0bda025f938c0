use std::fmt;

use base64::prelude::*;
use reqwest::header::HeaderValue;
use zeroize::Zeroizing;

use crate::error::Result;

/// Credentials for the IONOS Cloud DNS API.
///
/// Exactly one authentication mode is used per client. Which one is configured, and whether the
/// values are present at all, is up to the caller to validate.
#[derive(Clone)]
pub enum Credentials {
    /// An access token, sent as `Authorization: Bearer <token>`.
    Token(Zeroizing<String>),

    /// Account login, sent as `Authorization: Basic <base64(username:password)>`.
    Basic {
        username: String,
        password: Zeroizing<String>,
    },
}

impl Credentials {
    /// Bearer token credentials.
    pub fn token(token: impl Into<String>) -> Self {
        Credentials::Token(Zeroizing::new(token.into()))
    }

    /// Username and password credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Builds the `Authorization` header value for these credentials.
    ///
    /// The value is marked as sensitive so it never shows up in debug output.
    pub(crate) fn authorization(&self) -> Result<HeaderValue> {
        let value = match self {
            Credentials::Token(token) => Zeroizing::new(format!("Bearer {}", token.as_str())),
            Credentials::Basic { username, password } => {
                let pair = Zeroizing::new(format!("{username}:{}", password.as_str()));
                Zeroizing::new(format!("Basic {}", BASE64_STANDARD.encode(pair.as_bytes())))
            }
        };

        let mut header = HeaderValue::from_str(&value)?;
        header.set_sensitive(true);
        Ok(header)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
