//! Core data types for resolved environment configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Environment used when no selector is supplied.
pub const DEFAULT_ENV: &str = "dev";

/// Base URL every environment starts from.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// `apiTimeout` used when the environment sets no timeout of its own.
pub const FALLBACK_API_TIMEOUT_MS: u64 = 10_000;

pub const RETRY_COUNT: u32 = 3;
pub const RETRY_INTERVAL_MS: u64 = 1_000;

/// Headers sent with every request, as (name, value) pairs.
pub const COMMON_HEADERS: [(&str, &str); 3] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
    ("User-Agent", "Karate-Test-Framework"),
];

/// A named bundle of environment-specific settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Test,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Dev, Profile::Test];

    /// Exact, case-sensitive lookup. Unknown names have no profile.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dev" => Some(Self::Dev),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Dev | Self::Test => DEFAULT_BASE_URL,
        }
    }

    pub fn timeout_ms(self) -> u64 {
        match self {
            Self::Dev => 5_000,
            Self::Test => 10_000,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Login fixtures shared by every environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCredentials {
    pub valid_egn_or_eik: String,
    pub valid_password: String,
    pub invalid_egn_or_eik: String,
    pub invalid_password: String,
}

impl Default for TestCredentials {
    fn default() -> Self {
        Self {
            valid_egn_or_eik: "9308149045".to_string(),
            valid_password: "9308149045".to_string(),
            invalid_egn_or_eik: "123".to_string(),
            invalid_password: "wrong".to_string(),
        }
    }
}

/// Settings handed to the test-execution engine.
///
/// Scalar fields come before the nested maps so the struct serializes to
/// TOML without reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub env: String,
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    pub api_timeout: u64,
    pub retry_count: u32,
    pub retry_interval: u64,
    pub test_credentials: TestCredentials,
    pub common_headers: BTreeMap<String, String>,
}

impl Configuration {
    /// The profile this configuration was built from, if the name is known.
    pub fn profile(&self) -> Option<Profile> {
        Profile::from_name(&self.env)
    }
}

pub fn common_headers() -> BTreeMap<String, String> {
    COMMON_HEADERS.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
