//! Gateway config loader (strict parsing + environment overrides).
//!
//! Load order: YAML file (optional) -> `validate` -> environment. The API key
//! is normally supplied through `MYNKAPI` rather than the file.

pub mod schema;

use std::fs;
use std::path::Path;

use rcprism_core::error::{Result, RcPrismError};

pub use schema::{AuthSection, GatewayConfig, ServerSection, UpstreamSection};

/// Environment variable holding the shared secret.
pub const API_KEY_ENV: &str = "MYNKAPI";
/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "RCPRISM_CONFIG";
/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "rcprism.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RcPrismError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| RcPrismError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the startup config from the process environment.
///
/// An explicit `RCPRISM_CONFIG` path must exist; the default path is optional.
pub fn load() -> Result<GatewayConfig> {
    let cfg = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_from_file(&path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        Err(_) => GatewayConfig::default(),
    };
    Ok(apply_env(cfg, |k| std::env::var(k).ok()))
}

/// Apply environment overrides using `lookup` as the variable source.
pub fn apply_env(
    mut cfg: GatewayConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> GatewayConfig {
    if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
        cfg.auth.api_key = Some(key);
    }
    cfg
}
