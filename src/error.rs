/// Errors produced while validating Supabase configuration.
///
/// The gatekeeper absorbs every variant into [`Handle::Disabled`]: nothing
/// here reaches a caller as a fault unless it goes through the strict
/// [`Config::validate`] path on purpose.
///
/// [`Handle::Disabled`]: crate::client::Handle::Disabled
/// [`Config::validate`]: crate::config::Config::validate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Endpoint URL is unset or empty
    #[error("Supabase endpoint is missing. Set the SUPABASE_URL environment variable")]
    MissingEndpoint,

    /// Anonymous key is unset or empty
    #[error("Supabase anon key is missing. Set the SUPABASE_ANON_KEY environment variable")]
    MissingAnonKey,

    /// Endpoint does not parse as an absolute http(s) URL
    #[error("invalid Supabase endpoint: {endpoint}")]
    InvalidEndpoint { endpoint: String },

    /// Endpoint still carries the unedited template default
    #[error("Supabase endpoint is the template placeholder and was never configured")]
    PlaceholderEndpoint,
}

/// Result type alias for gatekeeper operations
pub type Result<T> = std::result::Result<T, Error>;
