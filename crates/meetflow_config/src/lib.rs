use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Layering, lowest to highest precedence:
/// 1. `config/default.yml` at the workspace root
/// 2. `config/{RUN_ENV}.yml` (RUN_ENV defaults to "debug")
/// 3. environment variables prefixed `MEETFLOW`, with `__` as the separator
///    (e.g. `MEETFLOW__CALENDAR__BASE_URL`)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "MEETFLOW".to_string());

    let root = workspace_root();
    let default_path = root.join("config/default");
    let env_path = root.join(format!("config/{}", run_env));

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

/// Locates the workspace root by walking up from the running crate's manifest
/// directory until a `config/default.yml` is found. Falls back to the current
/// directory, so deployments can ship the config dir next to the binary.
fn workspace_root() -> PathBuf {
    let start = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    start
        .ancestors()
        .find(|dir| dir.join("config").join("default.yml").exists())
        .map(Path::to_path_buf)
        .unwrap_or(start)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// Guarded by a `OnceCell` so repeated calls (each crate's entry points may
/// call this defensively) only touch the filesystem once.
pub fn ensure_dotenv_loaded() {
    INIT_DOTENV.get_or_init(|| {
        if dotenv::dotenv().is_err() {
            tracing::debug!("no .env file found, relying on process environment");
        }
    });
}
