//! Arena client binary.
//!
//! # Environment
//!
//! - `ARENA_SEED`: seed for both the core and the cooperative runtime
//! - `ARENA_CONFIG`: path to a TOML file with `[game]` / `[runtime]` sections
//! - `ARENA_RANDOM_SEED`: `true` draws a fresh seed when `ARENA_SEED` is unset
//! - `RUST_LOG`: tracing filter (INFO is always enabled)
//!
//! ```bash
//! ARENA_SEED=7 cargo run -p arena-client
//! ```

use anyhow::Result;
use arena_client::{ArenaSettings, core_demo, runtime_demo};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = ArenaSettings::from_env();
    let config = settings.resolve()?;
    info!(seed = config.game.seed, config = ?settings.config_path, "starting arena");

    println!("== encounter ==");
    for line in core_demo(&config.game)? {
        println!("{}", line);
    }

    println!("== cooperative runs ==");
    for line in runtime_demo(&config.runtime).await? {
        println!("{}", line);
    }

    Ok(())
}
