use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors produced while assembling the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration source could not be read or merged.
    #[error("failed to assemble configuration: {0}")]
    Build(#[source] config::ConfigError),
    /// The merged configuration does not match the expected shape.
    #[error("configuration does not match the expected shape: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layering strategy:
/// 1. **Base file**: settings from `<path>.toml` (or another supported extension).
///    Defaults to `"server"` in the working directory. The file is optional;
///    with no file present the typed defaults apply.
/// 2. **Environment overrides**: values prefixed with `VERSO__`, nested keys
///    separated by double underscores (`VERSO__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// Returns an error if a present file is malformed, an environment override
/// cannot be parsed, or the merged result does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use verso_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("VERSO")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    builder
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Deserialize)
}
