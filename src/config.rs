use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as URL: {source}")]
    ParseUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },
}

/// Where the post documents (`posts/posts.json`, `posts/{id}.json`) live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    /// Site root served over HTTP(S).
    Remote(Url),
    /// Site root on the local filesystem.
    Local(PathBuf),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Documents
    pub documents: DocumentLocation,
    pub fetch_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `POSTS_BASE_URL` takes precedence over `SITE_DIR` when both are set.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let documents = match optional_env("POSTS_BASE_URL") {
            Some(raw) => DocumentLocation::Remote(parse_base_url("POSTS_BASE_URL", &raw)?),
            None => DocumentLocation::Local(PathBuf::from(env_or_default("SITE_DIR", "."))),
        };

        Ok(Self {
            documents,
            fetch_timeout: Duration::from_secs(parse_env_u64("FETCH_TIMEOUT_SECS", 30)?),

            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
            static_dir: PathBuf::from(env_or_default("STATIC_DIR", "./static")),
        })
    }

    /// Configuration pointing at a local site directory, for tests.
    #[must_use]
    pub fn for_testing(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents: DocumentLocation::Local(site_dir.into()),
            fetch_timeout: Duration::from_secs(5),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            static_dir: PathBuf::from("./static"),
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "FETCH_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.web_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "WEB_HOST".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if let DocumentLocation::Remote(url) = &self.documents {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    name: "POSTS_BASE_URL".to_string(),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
        }
        Ok(())
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

/// Parse the site root URL, making sure relative joins stay below it.
fn parse_base_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|e| ConfigError::ParseUrl {
        name: name.to_string(),
        source: e,
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "POSTS_BASE_URL",
            "SITE_DIR",
            "STATIC_DIR",
            "WEB_HOST",
            "WEB_PORT",
            "FETCH_TIMEOUT_SECS",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("X", "https://example.github.io/aipost").unwrap();
        assert_eq!(url.as_str(), "https://example.github.io/aipost/");

        let url = parse_base_url("X", "https://example.github.io/aipost/").unwrap();
        assert_eq!(url.as_str(), "https://example.github.io/aipost/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("POSTS_BASE_URL", "not a url"),
            Err(ConfigError::ParseUrl { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.documents, DocumentLocation::Local(PathBuf::from(".")));
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.web_host, "0.0.0.0");
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_remote_wins_over_site_dir() {
        clear_env();
        std::env::set_var("POSTS_BASE_URL", "https://example.github.io/aipost");
        std::env::set_var("SITE_DIR", "/srv/site");
        let config = Config::from_env().unwrap();
        clear_env();

        match config.documents {
            DocumentLocation::Remote(url) => {
                assert_eq!(url.as_str(), "https://example.github.io/aipost/");
            }
            DocumentLocation::Local(path) => panic!("expected remote, got {}", path.display()),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_bad_port() {
        clear_env();
        std::env::set_var("WEB_PORT", "eighty");
        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ParseInt { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::for_testing(".");
        config.fetch_timeout = Duration::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { name, .. }) if name == "FETCH_TIMEOUT_SECS"
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut config = Config::for_testing(".");
        config.documents =
            DocumentLocation::Remote(Url::parse("ftp://example.com/site/").unwrap());
        assert!(config.validate().is_err());
    }
}
