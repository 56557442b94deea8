use std::sync::OnceLock;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::warn;
use url::Url;

use crate::config::Config;

static HANDLE: OnceLock<Handle> = OnceLock::new();

/// Live client bound to a validated Supabase project.
///
/// The handle carries the endpoint, the anon key and a shared HTTP client;
/// it never issues requests itself. Consumers drive [`Client::http`] with
/// [`Client::auth_headers`] attached.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    anon_key: String,
    http: reqwest::Client,
}

impl Client {
    fn new(endpoint: Url, anon_key: String) -> Self {
        Self {
            endpoint,
            anon_key,
            http: reqwest::Client::new(),
        }
    }

    /// Project endpoint this handle is bound to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Anonymous-tier key this handle is bound to
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Shared HTTP client for consumers issuing requests
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The `apikey` and `Authorization: Bearer` headers every Supabase
    /// request carries.
    ///
    /// A key with bytes that cannot appear in a header value is left out;
    /// such a request would be rejected server-side anyway.
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.anon_key)) {
            headers.insert(AUTHORIZATION, bearer);
        }
        headers
    }
}

/// Outcome of the configuration gate: a usable client or an explicit
/// "tracking disabled" marker.
///
/// There is no intermediate state and no retry; the verdict is computed
/// once from the configuration it is given.
#[derive(Debug, Clone)]
pub enum Handle {
    Enabled(Client),
    Disabled,
}

impl Handle {
    /// Evaluate the gate against `config`.
    ///
    /// An invalid configuration yields [`Handle::Disabled`] and, in debug
    /// builds only, a single warning on the `tracing` sink. Release builds
    /// disable tracking silently.
    pub fn from_config(config: Config) -> Self {
        match config.validate() {
            Ok(endpoint) => Handle::Enabled(Client::new(endpoint, config.anon_key)),
            Err(err) => {
                if cfg!(debug_assertions) {
                    warn!(%err, "Supabase credentials missing or invalid. Profile visit tracking disabled.");
                }
                Handle::Disabled
            }
        }
    }

    /// Evaluate the gate against `SUPABASE_URL` / `SUPABASE_ANON_KEY`
    pub fn from_env() -> Self {
        Self::from_config(Config::from_env())
    }

    /// The live client, if the gate let one through
    pub fn client(&self) -> Option<&Client> {
        match self {
            Handle::Enabled(client) => Some(client),
            Handle::Disabled => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Handle::Enabled(_))
    }
}

/// Evaluate the gate once, from the environment.
///
/// The first `init`/`init_with` call decides the process-wide handle; every
/// later call returns that same handle, regardless of environment changes.
pub fn init() -> &'static Handle {
    HANDLE.get_or_init(Handle::from_env)
}

/// Evaluate the gate once, against an explicit configuration
pub fn init_with(config: Config) -> &'static Handle {
    HANDLE.get_or_init(|| Handle::from_config(config))
}

/// The process-wide handle decided at startup.
///
/// Panics when called before any `init`; use [`init`] where the call order
/// is not guaranteed.
pub fn get() -> &'static Handle {
    HANDLE
        .get()
        .expect("supabase handle should have been initialized")
}

/// Shorthand for `init().client()`
pub fn client() -> Option<&'static Client> {
    init().client()
}
