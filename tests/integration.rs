// SPDX-License-Identifier: MPL-2.0
use brandboard::config::{self, Config};
use brandboard::site::assets::{AssetLibrary, Category};
use brandboard::site::images::{self, SiteImageRegistry};
use brandboard::site::theme::{self, SiteTheme, CSS_FILE, THEME_FILE};
use brandboard::ui::notifications::{Message, Notification, Store};
use brandboard::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

fn write_png(path: &std::path::Path) {
    image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([200, 60, 60, 255]))
        .save(path)
        .expect("Failed to write test image");
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Dark;
    saved.general.site_dir = Some(dir.path().join("site"));
    saved.notifications.toast_lifetime_ms = Some(2_500);
    config::save_to_path(&saved, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.general.site_dir, Some(dir.path().join("site")));
    assert_eq!(loaded.notifications.toast_lifetime_ms, Some(2_500));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_theme_save_produces_toml_and_css() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut site_theme = SiteTheme::default();
    site_theme.colors.primary = "#112233".to_string();
    site_theme.fonts.heading = "Georgia".to_string();
    site_theme.logo = Some("assets/images/logo.png".to_string());
    theme::save(&site_theme, dir.path()).expect("Failed to save theme");

    assert!(dir.path().join(THEME_FILE).exists());
    let css = std::fs::read_to_string(dir.path().join(CSS_FILE)).expect("Failed to read css");
    assert!(css.contains("--color-primary: #112233;"));
    assert!(css.contains("--font-heading: Georgia;"));
    assert!(css.contains("--logo-url: url(\"assets/images/logo.png\");"));

    let reloaded = theme::load(dir.path()).expect("Failed to reload theme");
    assert_eq!(reloaded, site_theme);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_theme_load_defaults_when_missing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let loaded = theme::load(dir.path()).expect("Failed to load default theme");
    assert_eq!(loaded, SiteTheme::default());
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_asset_upload_list_delete() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let source = dir.path().join("banner.png");
    write_png(&source);

    let library = AssetLibrary::new(&dir.path().join("site"));
    library.ensure_layout().expect("Failed to create layout");

    let uploaded = library
        .upload(Category::Images, &source)
        .expect("Failed to upload image");
    assert_eq!(uploaded.name, "banner.png");
    assert_eq!(
        library.relative_path(Category::Images, &uploaded.name),
        "assets/images/banner.png"
    );

    let listed = library.list(Category::Images).expect("Failed to list assets");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "banner.png");

    // A second upload with the same file name is rejected.
    assert!(library.upload(Category::Images, &source).is_err());

    library
        .delete(Category::Images, "banner.png")
        .expect("Failed to delete asset");
    let listed = library.list(Category::Images).expect("Failed to list assets");
    assert!(listed.is_empty());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_site_image_registry_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut registry = SiteImageRegistry::new();
    let key = registry
        .assign("Hero Banner", "assets/images/hero.png")
        .expect("Failed to assign key");
    assert_eq!(key, "hero-banner");
    images::save(&registry, dir.path()).expect("Failed to save registry");

    let loaded = images::load(dir.path()).expect("Failed to load registry");
    assert_eq!(loaded.get("hero-banner"), Some("assets/images/hero.png"));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_notifications_keep_insertion_order() {
    let mut store = Store::new();
    let (first, _) = store.success("Saved", "First");
    let (second, _) = store.error("Failed", "Second");
    let (third, _) = store.info("Note", "Third");

    let order: Vec<_> = store.iter().map(Notification::id).collect();
    assert_eq!(order, [first, second, third]);
}

#[test]
fn test_dismissing_the_middle_notification_preserves_order() {
    let mut store = Store::new();
    let (first, _) = store.info("A", "");
    let (second, _) = store.info("B", "");
    let (third, _) = store.info("C", "");

    assert!(store.dismiss(second));
    let order: Vec<_> = store.iter().map(Notification::id).collect();
    assert_eq!(order, [first, third]);
}

#[test]
fn test_late_expiry_after_manual_dismiss_is_a_no_op() {
    let mut store = Store::new();
    let (id, _) = store.push(Notification::warning("Slow", "Check the disk").lifetime(
        Duration::from_millis(50),
    ));
    let (other, _) = store.info("Other", "");

    assert!(store.dismiss(id));
    // The timer message for the dismissed toast arrives afterwards.
    store.handle_message(&Message::Expired(id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.iter().next().map(Notification::id), Some(other));
}
