//! # supatrack
//!
//! Gated [Supabase](https://supabase.com) client bootstrap for profile visit
//! tracking.
//!
//! The crate does one thing: it decides, exactly once per process, whether
//! the environment carries a usable Supabase configuration, and exposes the
//! outcome as a shared read-only handle. A valid configuration produces a
//! live [`Client`] bound to the project endpoint and anon key; anything
//! else produces the explicit [`Handle::Disabled`] marker, so dependent
//! features no-op instead of failing.
//!
//! A configuration is accepted when all of the following hold:
//!
//! - `SUPABASE_URL` is set and non-empty
//! - `SUPABASE_ANON_KEY` is set and non-empty
//! - the endpoint parses as an absolute `http`/`https` URL
//! - the endpoint is not an unedited template placeholder
//!
//! ## Quick start
//!
//! ```no_run
//! let handle = supatrack::init();
//!
//! if let Some(client) = handle.client() {
//!     // Drive client.http() with client.auth_headers() attached.
//! } else {
//!     // Credentials missing or invalid; tracking is disabled.
//! }
//! ```
//!
//! Invalid credentials are never an error here: debug builds log a single
//! warning through `tracing`, release builds stay silent, and the handle
//! comes back [`Handle::Disabled`] either way.

pub mod client;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use client::{client, get, init, init_with, Client, Handle};
pub use config::{is_web_url, Config, ANON_KEY_VAR, DEFAULT_PLACEHOLDER, ENDPOINT_VAR};
pub use error::{Error, Result};
