use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use engine_core::{App, GameConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional first argument: path to a TOML config file.
    let config_path = env::args().nth(1).map(PathBuf::from);

    let config = match GameConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = App::new(config).run() {
        error!("Fatal: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
