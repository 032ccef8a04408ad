//! Probe configuration.
//!
//! `ProbeConfig` describes the single request the probe issues and how much
//! of the answer ends up on the console. The defaults reproduce the plain
//! diagnostic run: GET the asset categories endpoint of the local dev server,
//! print at most 200 characters of the body, never time out.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use api_probe::config::ProbeConfig;
//! let cfg = ProbeConfig::default();
//! assert_eq!(cfg.max_snippet_chars, 200);
//! assert!(cfg.timeout.is_none());
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use api_probe::config::ProbeConfig;
//! use std::time::Duration;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ProbeConfig::builder()
//!     .url("http://127.0.0.1:8080/health")
//!     .max_snippet_chars(80)
//!     .timeout(Duration::from_secs(5))
//!     .build()?; // returns Result<ProbeConfig, ConfigError>
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! [`ProbeConfigBuilder::build`] returns [`ConfigError`] when the URL does not
//! parse, is not `http`/`https`, has no host, or when a length or timeout is
//! zero.
//!
//! The binary does not build the config by hand, it goes through [`Cli`],
//! which reads flags and falls back to `API_PROBE_*` environment variables.

use clap::Parser;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_URL: &str = "http://localhost:5000/api/asset-categories";
pub const DEFAULT_MAX_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Target of the single GET request
    pub url: Url,
    /// How many characters of the decoded body are printed
    pub max_snippet_chars: usize,
    /// Whole-request deadline. `None` waits as long as the server does.
    pub timeout: Option<Duration>,
    /// User agent override; reqwest's default is used when unset
    pub user_agent: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_snippet_chars: DEFAULT_MAX_SNIPPET_CHARS,
            timeout: None,
            user_agent: None,
        }
    }
}

impl ProbeConfig {
    pub fn builder() -> ProbeConfigBuilder {
        ProbeConfigBuilder::default()
    }
}

fn default_url() -> Url {
    // Constant literal, always parses
    Url::parse(DEFAULT_URL).expect("default probe URL is valid")
}

/// Builder for [`ProbeConfig`]. Setters never fail, everything is checked in
/// [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ProbeConfigBuilder {
    inner: ProbeConfig,
    raw_url: Option<String>,
}

impl ProbeConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut ProbeConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn url<S: Into<String>>(mut self, url: S) -> Self {
        self.raw_url = Some(url.into());
        self
    }
    pub fn max_snippet_chars(self, n: usize) -> Self { self.map(|c| c.max_snippet_chars = n) }
    pub fn timeout(self, t: Duration) -> Self { self.map(|c| c.timeout = Some(t)) }
    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = Some(ua.into())) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut ProbeConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(mut self) -> Result<ProbeConfig, ConfigError> {
        if let Some(raw) = self.raw_url.take() {
            self.inner.url = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
                input: raw,
                reason: e,
            })?;
        }
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidUrl { input: String, reason: url::ParseError },
    UnsupportedScheme(String),
    MissingHost,
    ZeroSnippet,
    ZeroTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl { input, reason } =>
                write!(f, "cannot parse URL {input:?}: {reason}"),
            ConfigError::UnsupportedScheme(s) =>
                write!(f, "unsupported URL scheme {s:?} (expected http or https)"),
            ConfigError::MissingHost =>
                write!(f, "URL has no host"),
            ConfigError::ZeroSnippet =>
                write!(f, "max_snippet_chars must be at least 1"),
            ConfigError::ZeroTimeout =>
                write!(f, "timeout must be greater than zero"),
        }
    }
}
impl std::error::Error for ConfigError {}

fn validate(c: &ProbeConfig) -> Result<(), ConfigError> {
    if !matches!(c.url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(c.url.scheme().to_string()));
    }
    if c.url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::MissingHost);
    }
    if c.max_snippet_chars == 0 {
        return Err(ConfigError::ZeroSnippet);
    }
    if c.timeout.is_some_and(|t| t.is_zero()) {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(())
}

// ---------- Command line ----------

/// Command line front end of the `api-probe` binary.
///
/// Every flag has an environment fallback; with neither set the probe runs
/// against the default endpoint.
#[derive(Debug, Clone, Parser)]
#[command(name = "api-probe")]
#[command(about = "Issue one GET request and print the status and the start of the body")]
#[command(version)]
pub struct Cli {
    /// URL to request
    #[arg(long, default_value = DEFAULT_URL, env = "API_PROBE_URL")]
    pub url: String,

    /// Maximum number of body characters to print
    #[arg(long = "max-chars", default_value_t = DEFAULT_MAX_SNIPPET_CHARS, env = "API_PROBE_MAX_CHARS")]
    pub max_chars: usize,

    /// Request timeout in milliseconds (no timeout when omitted)
    #[arg(long = "timeout-ms", env = "API_PROBE_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// User-Agent header to send
    #[arg(long = "user-agent", env = "API_PROBE_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> Result<ProbeConfig, ConfigError> {
        let mut builder = ProbeConfig::builder()
            .url(self.url)
            .max_snippet_chars(self.max_chars);

        if let Some(ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        if let Some(ua) = self.user_agent {
            builder = builder.user_agent(ua);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_run() {
        let cfg = ProbeConfig::default();
        assert_eq!(cfg.url.as_str(), DEFAULT_URL);
        assert_eq!(cfg.max_snippet_chars, 200);
        assert_eq!(cfg.timeout, None);
        assert_eq!(cfg.user_agent, None);
    }

    #[test]
    fn builder_without_changes_equals_default() {
        let cfg = ProbeConfig::builder().build().unwrap();
        assert_eq!(cfg, ProbeConfig::default());
    }

    #[test]
    fn builder_applies_all_setters() {
        let cfg = ProbeConfig::builder()
            .url("https://example.com/api")
            .max_snippet_chars(10)
            .timeout(Duration::from_millis(250))
            .user_agent("probe/1.0")
            .build()
            .unwrap();

        assert_eq!(cfg.url.as_str(), "https://example.com/api");
        assert_eq!(cfg.max_snippet_chars, 10);
        assert_eq!(cfg.timeout, Some(Duration::from_millis(250)));
        assert_eq!(cfg.user_agent.as_deref(), Some("probe/1.0"));
    }

    #[test]
    fn builder_with_closure() {
        let cfg = ProbeConfig::builder()
            .with(|c| c.max_snippet_chars = 42)
            .build()
            .unwrap();
        assert_eq!(cfg.max_snippet_chars, 42);
    }

    #[test]
    fn rejects_unparsable_url() {
        let err = ProbeConfig::builder().url("not a url").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { ref input, .. } if input == "not a url"));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ProbeConfig::builder().url("ftp://localhost/file").build().unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("ftp".into()));
    }

    #[test]
    fn rejects_zero_snippet_length() {
        let err = ProbeConfig::builder().max_snippet_chars(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroSnippet);
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ProbeConfig::builder().timeout(Duration::ZERO).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }

    #[test]
    fn cli_without_arguments_yields_default_config() {
        // Env fallbacks would otherwise leak in from the calling shell
        for var in ["API_PROBE_URL", "API_PROBE_MAX_CHARS", "API_PROBE_TIMEOUT_MS", "API_PROBE_USER_AGENT"] {
            std::env::remove_var(var);
        }
        let cli = Cli::try_parse_from(["api-probe"]).unwrap();
        let cfg = cli.into_config().unwrap();
        assert_eq!(cfg, ProbeConfig::default());
    }

    #[test]
    fn cli_flags_are_forwarded() {
        let cli = Cli::try_parse_from([
            "api-probe",
            "--url",
            "http://127.0.0.1:9000/x",
            "--max-chars",
            "5",
            "--timeout-ms",
            "1500",
            "--user-agent",
            "tester",
        ])
        .unwrap();
        let cfg = cli.into_config().unwrap();

        assert_eq!(cfg.url.as_str(), "http://127.0.0.1:9000/x");
        assert_eq!(cfg.max_snippet_chars, 5);
        assert_eq!(cfg.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(cfg.user_agent.as_deref(), Some("tester"));
    }

    #[test]
    fn cli_invalid_values_surface_as_config_errors() {
        let cli = Cli::try_parse_from(["api-probe", "--max-chars", "0"]).unwrap();
        assert_eq!(cli.into_config().unwrap_err(), ConfigError::ZeroSnippet);
    }
}
