// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 2. **Environment variable** (`BRANDBOARD_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR: &str = "brandboard";
const CONFIG_DIR_ENV: &str = "BRANDBOARD_CONFIG_DIR";

static CONFIG_DIR_OVERRIDE: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the CLI-provided config directory, if any. Later calls are
/// ignored; the first initialization wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CONFIG_DIR_OVERRIDE.set(config_dir.map(PathBuf::from));
}

/// Resolves the directory holding `settings.toml`.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(Some(dir)) = CONFIG_DIR_OVERRIDE.get() {
        return Some(dir.clone());
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_resolves_somewhere() {
        // Without overrides this should fall back to the platform dir on
        // every supported OS (env var may also be set by the harness).
        let dir = config_dir();
        assert!(dir.is_none() || dir.unwrap().is_absolute() || std::env::var(CONFIG_DIR_ENV).is_ok());
    }
}
