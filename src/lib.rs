//! api-env-config: environment profiles for API test runs
//!
//! Maps an environment name (`dev`, `test`, or anything else) to the
//! configuration an API test engine runs with: base URL, timeouts, retry
//! parameters, test credentials and common headers.

pub mod config;
pub mod domain;
pub mod render;

pub use config::resolve;
pub use domain::{Configuration, Profile, TestCredentials};
