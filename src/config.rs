use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the Supabase project endpoint URL.
pub const ENDPOINT_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the anonymous-tier API key.
///
/// The anon key is a public credential; access control is enforced
/// server-side through row-level security, not by keeping it secret.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Endpoint value left behind when a project template was never filled in.
pub const DEFAULT_PLACEHOLDER: &str = "your_supabase_project_url";

/// Configuration inputs for the gatekeeper.
///
/// Both strings are opaque; an unset environment variable and an empty
/// string are treated the same.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub endpoint: String,
    pub anon_key: String,

    /// Endpoint value rejected as an unedited template default.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Config {
    /// Create a configuration from explicit values
    pub fn new(endpoint: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            anon_key: anon_key.into(),
            placeholder: default_placeholder(),
        }
    }

    /// Override the placeholder literal the gate rejects
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    ///
    /// Unset variables resolve to empty strings, so this never fails; the
    /// gate turns emptiness into a disabled handle later.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(ENDPOINT_VAR).unwrap_or_default(),
            std::env::var(ANON_KEY_VAR).unwrap_or_default(),
        )
    }

    /// Full verdict over the configuration.
    ///
    /// Returns the parsed endpoint URL the client will be bound to, or the
    /// first failed check. Pure: no side effects, deterministic for
    /// identical inputs.
    pub fn validate(&self) -> Result<Url> {
        if self.endpoint.is_empty() {
            return Err(Error::MissingEndpoint);
        }
        if self.anon_key.is_empty() {
            return Err(Error::MissingAnonKey);
        }
        if self.endpoint == self.placeholder {
            return Err(Error::PlaceholderEndpoint);
        }
        match Url::parse(&self.endpoint) {
            Ok(url) if is_web_scheme(&url) => Ok(url),
            _ => Err(Error::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
            }),
        }
    }

    /// Boolean form of [`Config::validate`]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// `true` iff `candidate` parses as an absolute URL with an `http` or
/// `https` scheme.
///
/// Malformed input is reported as `false`, never as an error. The parser
/// lower-cases schemes, so `HTTPS://…` passes.
pub fn is_web_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => is_web_scheme(&url),
        Err(_) => false,
    }
}

fn is_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
