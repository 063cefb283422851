//! Credentials file loading
//!
//! The credentials file is a YAML mapping with any of the keys `username`,
//! `password`, `api_token`, `site`, `base_uri`, `proxy_addr` and
//! `proxy_port`:
//!
//! ```yaml
//! username: user@example.com
//! api_token: 0123456789abcdef
//! base_uri: https://api.sandbox.dnsimple.com/v1
//! ```
//!
//! Values already present on the [`ClientConfig`] win for `username`,
//! `password` and `api_token`. `site`, `base_uri` and the proxy keys always
//! replace the configured values when present; `base_uri` beats `site`.

use crate::config::{ClientConfig, HttpProxy};
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Deserializer};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the credentials file location
pub const CONFIG_ENV_VAR: &str = "DNSIMPLE_CONFIG";

/// Credentials file location when `DNSIMPLE_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "~/.dnsimple";

/// Parsed contents of a credentials file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialsFile {
    /// Account user name
    pub username: Option<String>,
    /// Account password
    pub password: Option<String>,
    /// API token
    pub api_token: Option<String>,
    /// Legacy name for `base_uri`
    pub site: Option<String>,
    /// API base URI
    pub base_uri: Option<String>,
    /// Proxy host
    pub proxy_addr: Option<String>,
    /// Proxy port, written either as a number or a quoted string
    #[serde(default, deserialize_with = "port_number_or_string")]
    pub proxy_port: Option<u16>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

fn port_number_or_string<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<PortValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PortValue::Number(port)) => Ok(Some(port)),
        Some(PortValue::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid proxy port: {text:?}"))),
    }
}

impl CredentialsFile {
    /// Read and parse a credentials file
    pub fn load(path: &Path) -> ApiResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::config(format!(
                "Error loading your credentials from {}: {e}",
                path.display()
            ))
        })?;

        Self::parse(&content).map_err(|e| {
            ApiError::config(format!(
                "Error loading your credentials from {}: {e}",
                path.display()
            ))
        })
    }

    /// Parse credentials from YAML text
    ///
    /// An empty document is accepted and yields no values.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Proxy settings, if the file mentions either proxy key
    #[must_use]
    pub fn http_proxy(&self) -> Option<HttpProxy> {
        if self.proxy_addr.is_none() && self.proxy_port.is_none() {
            return None;
        }
        Some(HttpProxy {
            addr: self.proxy_addr.clone(),
            port: self.proxy_port,
        })
    }
}

/// Location of the credentials file, with `~` expanded
#[must_use]
pub fn config_path() -> PathBuf {
    let raw = env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

impl ClientConfig {
    /// Whether credentials are considered loaded
    ///
    /// True once a credentials file was applied, or when a user name is
    /// configured together with a password or an API token.
    #[must_use]
    pub fn credentials_loaded(&self) -> bool {
        self.credentials_loaded
            || (self.username.is_some() && (self.password.is_some() || self.api_token.is_some()))
    }

    /// Load the credentials file unless credentials are already present
    pub fn load_credentials_if_necessary(&mut self) -> ApiResult<()> {
        if self.credentials_loaded() {
            return Ok(());
        }
        self.load_credentials(&config_path())
    }

    /// Load the credentials file at `path` and merge it into this config
    pub fn load_credentials(&mut self, path: &Path) -> ApiResult<()> {
        let credentials = CredentialsFile::load(path)?;
        self.apply_credentials(credentials);
        info!("Credentials loaded from {}", path.display());
        Ok(())
    }

    /// Merge already-parsed credentials into this config
    pub fn apply_credentials(&mut self, credentials: CredentialsFile) {
        let proxy = credentials.http_proxy();

        if self.username.is_none() {
            self.username = credentials.username;
        }
        if self.password.is_none() {
            self.password = credentials.password;
        }
        if self.api_token.is_none() {
            self.api_token = credentials.api_token;
        }

        if let Some(site) = credentials.site {
            self.set_base_uri(site);
        }
        if let Some(base_uri) = credentials.base_uri {
            self.set_base_uri(base_uri);
        }

        if let Some(proxy) = proxy {
            debug!(proxy = ?proxy.url(), "Using HTTP proxy from credentials file");
            self.http_proxy = Some(proxy);
        }

        self.credentials_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn credentials_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_all_keys() {
        let creds = CredentialsFile::parse(
            "username: user@example.com\n\
             password: secret\n\
             api_token: token\n\
             site: https://site.example.com\n\
             base_uri: https://api.example.com/\n\
             proxy_addr: proxy.local\n\
             proxy_port: 8080\n",
        )
        .unwrap();

        assert_eq!(creds.username.as_deref(), Some("user@example.com"));
        assert_eq!(creds.password.as_deref(), Some("secret"));
        assert_eq!(creds.api_token.as_deref(), Some("token"));
        assert_eq!(creds.proxy_port, Some(8080));
        assert_eq!(creds.http_proxy(), Some(HttpProxy::new("proxy.local", 8080)));
    }

    #[test]
    fn test_parse_quoted_proxy_port() {
        let creds = CredentialsFile::parse("proxy_addr: proxy.local\nproxy_port: \"8080\"\n").unwrap();
        assert_eq!(creds.proxy_port, Some(8080));

        let err = CredentialsFile::parse("proxy_port: \"eighty\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid proxy port"));
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(CredentialsFile::parse("").unwrap(), CredentialsFile::default());
    }

    #[test]
    fn test_load_fills_unset_fields() {
        let file = credentials_file("username: user@example.com\napi_token: file-token\n");
        let mut config = ClientConfig::new();

        config.load_credentials(file.path()).unwrap();

        assert_eq!(config.username.as_deref(), Some("user@example.com"));
        assert_eq!(config.api_token.as_deref(), Some("file-token"));
        assert!(config.password.is_none());
        assert!(config.credentials_loaded());
        assert_eq!(config.base_uri(), "https://api.dnsimple.com/v1");
    }

    #[test]
    fn test_explicit_values_win_over_file() {
        let file = credentials_file(
            "username: file-user\npassword: file-pass\napi_token: file-token\n",
        );
        let mut config = ClientConfig::new()
            .with_username("explicit-user")
            .with_password("explicit-pass")
            .with_api_token("explicit-token");

        config.load_credentials(file.path()).unwrap();

        assert_eq!(config.username.as_deref(), Some("explicit-user"));
        assert_eq!(config.password.as_deref(), Some("explicit-pass"));
        assert_eq!(config.api_token.as_deref(), Some("explicit-token"));
    }

    #[test]
    fn test_file_overrides_base_uri_and_proxy() {
        let file = credentials_file(
            "site: https://site.example.com/\nbase_uri: https://sandbox.example.com/v1/\nproxy_port: 3128\n",
        );
        let mut config = ClientConfig::new()
            .with_base_uri("https://explicit.example.com")
            .with_http_proxy(HttpProxy::new("old.proxy", 1080));

        config.load_credentials(file.path()).unwrap();

        assert_eq!(config.base_uri(), "https://sandbox.example.com/v1");
        assert_eq!(
            config.http_proxy,
            Some(HttpProxy {
                addr: None,
                port: Some(3128)
            })
        );
    }

    #[test]
    fn test_site_used_without_base_uri() {
        let file = credentials_file("site: https://site.example.com/\n");
        let mut config = ClientConfig::new();

        config.load_credentials(file.path()).unwrap();

        assert_eq!(config.base_uri(), "https://site.example.com");
        assert!(config.http_proxy.is_none());
    }

    #[test]
    fn test_load_only_once() {
        let file = credentials_file("password: secret\n");
        let path = file.path().to_path_buf();
        let mut config = ClientConfig::new();

        assert!(!config.credentials_loaded());
        config.load_credentials(&path).unwrap();
        assert!(config.credentials_loaded());

        // The file is gone, so any further read would fail.
        drop(file);
        assert!(!path.exists());
        config.load_credentials_if_necessary().unwrap();
        config.load_credentials_if_necessary().unwrap();
        assert_eq!(config.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_explicit_credentials_skip_file() {
        let mut config = ClientConfig::new()
            .with_username("user@example.com")
            .with_api_token("token");

        assert!(config.credentials_loaded());
        assert!(config.load_credentials_if_necessary().is_ok());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ClientConfig::new();

        let err = config
            .load_credentials(&dir.path().join("missing"))
            .unwrap_err();

        assert!(matches!(err, ApiError::Config(_)));
        assert!(!config.credentials_loaded());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = credentials_file("username: [unterminated\n");
        let mut config = ClientConfig::new();

        let err = config.load_credentials(file.path()).unwrap_err();

        assert!(matches!(err, ApiError::Config(msg) if msg.contains("Error loading your credentials")));
    }

    #[test]
    fn test_config_path_and_from_env() {
        let file = credentials_file("username: env-user\npassword: env-pass\n");

        unsafe {
            env::set_var(CONFIG_ENV_VAR, file.path());
        }
        assert_eq!(config_path(), file.path().to_path_buf());

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.username.as_deref(), Some("env-user"));
        assert_eq!(config.password.as_deref(), Some("env-pass"));

        unsafe {
            env::set_var(CONFIG_ENV_VAR, "~/custom-dnsimple");
        }
        assert!(!config_path().to_string_lossy().starts_with('~'));

        unsafe {
            env::remove_var(CONFIG_ENV_VAR);
        }
        assert!(config_path().ends_with(".dnsimple"));
    }
}
