//! Authentication selection
//!
//! A configured password always wins: requests use HTTP Basic auth with the
//! user name and password. Otherwise an API token is sent as
//! `X-DNSimple-Token: <username>:<token>`. With neither, no request is made.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;

/// Header carrying token credentials
pub const TOKEN_HEADER: &str = "X-DNSimple-Token";

/// Credentials attached to a single request
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// HTTP Basic auth
    Basic {
        /// Account user name
        username: String,
        /// Account password
        password: String,
    },
    /// Token header auth
    Token {
        /// Account user name
        username: String,
        /// API token
        token: String,
    },
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Token { username, .. } => f
                .debug_struct("Token")
                .field("username", username)
                .field("token", &"***")
                .finish(),
        }
    }
}

impl Auth {
    /// Pick the auth mode for the given configuration
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let username = config.username.clone().unwrap_or_default();

        if let Some(ref password) = config.password {
            Ok(Self::Basic {
                username,
                password: password.clone(),
            })
        } else if let Some(ref token) = config.api_token {
            Ok(Self::Token {
                username,
                token: token.clone(),
            })
        } else {
            Err(ApiError::config(
                "A password or API token is required for all API requests.",
            ))
        }
    }

    /// Value of the `X-DNSimple-Token` header for token auth
    pub fn token_header(username: &str, token: &str) -> ApiResult<HeaderValue> {
        HeaderValue::from_str(&format!("{username}:{token}")).map_err(|_| {
            ApiError::config("API token contains invalid header characters")
        })
    }

    /// Attach these credentials to a request
    pub fn apply(&self, request: RequestBuilder) -> ApiResult<RequestBuilder> {
        match self {
            Self::Basic { username, password } => Ok(request.basic_auth(username, Some(password))),
            Self::Token { username, token } => {
                Ok(request.header(TOKEN_HEADER, Self::token_header(username, token)?))
            }
        }
    }
}
