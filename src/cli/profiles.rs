//! Profiles command implementation

use anyhow::Result;

use api_env_config::domain::{Profile, DEFAULT_BASE_URL, DEFAULT_ENV, FALLBACK_API_TIMEOUT_MS};

pub fn run() -> Result<()> {
    println!("Profiles:");
    for profile in Profile::ALL {
        let marker = if profile.name() == DEFAULT_ENV { " (default)" } else { "" };
        println!(
            "  {}{}: baseUrl={} timeout={}ms",
            profile,
            marker,
            profile.base_url(),
            profile.timeout_ms()
        );
    }
    println!(
        "Other names: baseUrl={} timeout=unset apiTimeout={}ms",
        DEFAULT_BASE_URL, FALLBACK_API_TIMEOUT_MS
    );
    Ok(())
}
