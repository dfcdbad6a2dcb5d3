//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the remote blog API; `None` disables `/api` forwarding.
    pub api_upstream: Option<String>,
    pub api_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BLOG_API_UPSTREAM`: `http://` or `https://` base URL of the remote API
    /// - `BLOG_API_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_upstream = parse_upstream(lookup("BLOG_API_UPSTREAM"))?;
        let api_timeout_secs = parse_or("BLOG_API_TIMEOUT_SECS", lookup("BLOG_API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?;
        if api_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "BLOG_API_TIMEOUT_SECS", value: "0".to_owned() });
        }
        Ok(Self { port, api_upstream, api_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

fn parse_upstream(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "BLOG_API_UPSTREAM", value: raw });
    }
    Ok(Some(trimmed.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
