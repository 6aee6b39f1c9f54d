mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./marquee.toml",
        "~/.config/marquee/config.toml",
        "/etc/marquee/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// `TMDB_TOKEN` in the environment beats the file value.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(token) = std::env::var("TMDB_TOKEN") {
        if !token.is_empty() {
            config.tmdb.token = token;
        }
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.cache.ttl_secs == 0 {
        anyhow::bail!("Cache TTL cannot be 0");
    }

    // Without a token every upstream call will fail with 401; the server
    // still starts so the health endpoint stays usable.
    if config.tmdb.token.is_empty() {
        tracing::warn!("No TMDB token configured; upstream requests will be rejected");
    }

    Ok(())
}
