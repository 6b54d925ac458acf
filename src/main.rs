//! api-env-config: resolve environment profiles for API test runs

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
