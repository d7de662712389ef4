// SPDX-License-Identifier: MPL-2.0
//! Keyed site-image registry.
//!
//! The website refers to well-known images (hero banner, og-image, footer
//! badge, ...) by key rather than path. This registry maps those keys to
//! site-relative asset paths and persists as `site_images.toml` in the
//! site directory.

use crate::error::{AssetError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const REGISTRY_FILE: &str = "site_images.toml";

/// Map of normalized keys to site-relative image paths.
///
/// Keys are kept in sorted order so the persisted file diffs cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteImageRegistry {
    entries: BTreeMap<String, String>,
}

impl SiteImageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `path` to `key`, replacing any previous assignment.
    ///
    /// Returns the normalized key actually stored.
    pub fn assign(&mut self, key: &str, path: impl Into<String>) -> Result<String> {
        let key = normalize_key(key)?;
        self.entries.insert(key.clone(), path.into());
        Ok(key)
    }

    /// Removes a key; `false` if it was not assigned.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Looks up the path assigned to a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalizes a raw key into lowercase kebab-case.
///
/// Whitespace and underscores become hyphens; anything outside
/// `[a-z0-9-]` after lowercasing is rejected, as is an empty result.
pub fn normalize_key(raw: &str) -> Result<String> {
    let mut key = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        match c {
            ' ' | '\t' | '_' => key.push('-'),
            c if c.is_ascii_alphanumeric() => key.push(c.to_ascii_lowercase()),
            '-' => key.push('-'),
            _ => return Err(AssetError::InvalidKey(raw.to_string()).into()),
        }
    }
    if key.is_empty() || key.chars().all(|c| c == '-') {
        return Err(AssetError::InvalidKey(raw.to_string()).into());
    }
    Ok(key)
}

/// Loads the registry from the site directory; missing file means empty.
pub fn load(site_dir: &Path) -> Result<SiteImageRegistry> {
    let path = site_dir.join(REGISTRY_FILE);
    if !path.exists() {
        return Ok(SiteImageRegistry::new());
    }
    let content = fs::read_to_string(&path)?;
    let registry: SiteImageRegistry = toml::from_str(&content)?;
    Ok(registry)
}

/// Persists the registry into the site directory.
pub fn save(registry: &SiteImageRegistry, site_dir: &Path) -> Result<()> {
    fs::create_dir_all(site_dir)?;
    let content = toml::to_string_pretty(registry)?;
    fs::write(site_dir.join(REGISTRY_FILE), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn assign_normalizes_the_key() {
        let mut registry = SiteImageRegistry::new();
        let key = registry
            .assign("  Hero Banner ", "assets/images/hero.webp")
            .expect("assign failed");
        assert_eq!(key, "hero-banner");
        assert_eq!(registry.get("hero-banner"), Some("assets/images/hero.webp"));
    }

    #[test]
    fn reassigning_replaces_the_path() {
        let mut registry = SiteImageRegistry::new();
        registry.assign("og_image", "assets/images/a.png").unwrap();
        registry.assign("og-image", "assets/images/b.png").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("og-image"), Some("assets/images/b.png"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut registry = SiteImageRegistry::new();
        registry.assign("badge", "assets/images/badge.svg").unwrap();

        assert!(registry.remove("badge"));
        assert!(!registry.remove("badge"));
        assert!(registry.is_empty());
    }

    #[test]
    fn keys_are_iterated_in_sorted_order() {
        let mut registry = SiteImageRegistry::new();
        registry.assign("zebra", "z").unwrap();
        registry.assign("apple", "a").unwrap();
        registry.assign("mango", "m").unwrap();

        let keys: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["apple", "mango", "zebra"]);
    }

    #[test]
    fn bad_keys_are_rejected() {
        assert!(matches!(
            normalize_key(""),
            Err(Error::Asset(AssetError::InvalidKey(_)))
        ));
        assert!(normalize_key("---").is_err());
        assert!(normalize_key("héro").is_err());
        assert!(normalize_key("a/b").is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut registry = SiteImageRegistry::new();
        registry.assign("hero", "assets/images/hero.webp").unwrap();
        registry.assign("favicon", "assets/images/favicon.ico").unwrap();

        save(&registry, dir.path()).expect("save failed");
        let loaded = load(dir.path()).expect("load failed");
        assert_eq!(loaded, registry);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let registry = load(dir.path()).expect("load failed");
        assert!(registry.is_empty());
    }
}
