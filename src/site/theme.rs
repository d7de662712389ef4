// SPDX-License-Identifier: MPL-2.0
//! The site's visual theme document.
//!
//! A theme bundles the site's colors, font families, and optional logo and
//! favicon paths. It persists as `theme.toml` in the site directory, and
//! every save also regenerates `theme.css`, a `:root` block of CSS custom
//! properties that the website consumes for live styling.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const THEME_FILE: &str = "theme.toml";
pub const CSS_FILE: &str = "theme.css";

/// Named colors of the site theme, as hex strings (`#rgb` or `#rrggbb`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#3366cc".to_string(),
            secondary: "#5588dd".to_string(),
            accent: "#f0a030".to_string(),
            background: "#ffffff".to_string(),
            text: "#1a1a1a".to_string(),
        }
    }
}

/// Font families for heading and body text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Georgia, serif".to_string(),
            body: "Helvetica, Arial, sans-serif".to_string(),
        }
    }
}

/// The complete theme document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteTheme {
    #[serde(default)]
    pub colors: ThemeColors,
    #[serde(default)]
    pub fonts: ThemeFonts,
    /// Site-relative path of the logo image, if one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Site-relative path of the favicon, if one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl SiteTheme {
    /// Checks that every color is a well-formed hex value.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named_colors() {
            parse_hex(value)
                .map_err(|_| Error::Theme(format!("{} is not a valid hex color: {:?}", name, value)))?;
        }
        Ok(())
    }

    /// Renders the theme as a block of CSS custom properties.
    ///
    /// The variable names are the contract with the website's stylesheets;
    /// renaming one here breaks live previews on the site side.
    #[must_use]
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.named_colors() {
            css.push_str(&format!("  --color-{}: {};\n", name, value));
        }
        css.push_str(&format!("  --font-heading: {};\n", self.fonts.heading));
        css.push_str(&format!("  --font-body: {};\n", self.fonts.body));
        if let Some(logo) = &self.logo {
            css.push_str(&format!("  --logo-url: url(\"{}\");\n", logo));
        }
        if let Some(favicon) = &self.favicon {
            css.push_str(&format!("  --favicon-url: url(\"{}\");\n", favicon));
        }
        css.push_str("}\n");
        css
    }

    fn named_colors(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", &self.colors.primary),
            ("secondary", &self.colors.secondary),
            ("accent", &self.colors.accent),
            ("background", &self.colors.background),
            ("text", &self.colors.text),
        ]
    }
}

/// Parses a `#rgb` or `#rrggbb` hex color into RGB components.
pub fn parse_hex(value: &str) -> Result<[u8; 3]> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| Error::Theme(format!("missing '#' prefix: {:?}", value)))?;

    let component = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| Error::Theme(format!("bad hex digits: {:?}", value)))
    };

    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = component(&c.to_string())?;
                rgb[i] = v * 16 + v;
            }
            Ok(rgb)
        }
        6 => Ok([
            component(&digits[0..2])?,
            component(&digits[2..4])?,
            component(&digits[4..6])?,
        ]),
        _ => Err(Error::Theme(format!("expected 3 or 6 hex digits: {:?}", value))),
    }
}

/// Loads the theme from the site directory, falling back to defaults when
/// no theme file exists yet.
pub fn load(site_dir: &Path) -> Result<SiteTheme> {
    let path = site_dir.join(THEME_FILE);
    if !path.exists() {
        return Ok(SiteTheme::default());
    }
    let content = fs::read_to_string(&path)?;
    let theme: SiteTheme = toml::from_str(&content)?;
    Ok(theme)
}

/// Validates and persists the theme, regenerating the CSS variables file.
pub fn save(theme: &SiteTheme, site_dir: &Path) -> Result<()> {
    theme.validate()?;
    fs::create_dir_all(site_dir)?;

    let content = toml::to_string_pretty(theme)?;
    fs::write(site_dir.join(THEME_FILE), content)?;
    fs::write(site_dir.join(CSS_FILE), theme.to_css_variables())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_hex_accepts_both_forms() {
        assert_eq!(parse_hex("#ffffff").unwrap(), [255, 255, 255]);
        assert_eq!(parse_hex("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(parse_hex("#fff").unwrap(), [255, 255, 255]);
        assert_eq!(parse_hex("#3366cc").unwrap(), [0x33, 0x66, 0xcc]);
    }

    #[test]
    fn parse_hex_rejects_malformed_values() {
        assert!(parse_hex("3366cc").is_err()); // no prefix
        assert!(parse_hex("#33cc").is_err()); // wrong length
        assert!(parse_hex("#zzzzzz").is_err()); // not hex
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn default_theme_validates() {
        SiteTheme::default().validate().expect("defaults must be valid");
    }

    #[test]
    fn validate_names_the_bad_field() {
        let mut theme = SiteTheme::default();
        theme.colors.accent = "orange".to_string();
        let err = theme.validate().unwrap_err();
        assert!(format!("{}", err).contains("accent"));
    }

    #[test]
    fn css_variables_cover_colors_and_fonts() {
        let mut theme = SiteTheme::default();
        theme.logo = Some("assets/images/logo.png".to_string());
        let css = theme.to_css_variables();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #3366cc;"));
        assert!(css.contains("--color-background: #ffffff;"));
        assert!(css.contains("--font-heading: Georgia, serif;"));
        assert!(css.contains("--logo-url: url(\"assets/images/logo.png\");"));
        assert!(!css.contains("--favicon-url"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut theme = SiteTheme::default();
        theme.colors.primary = "#112233".to_string();
        theme.favicon = Some("assets/images/favicon.ico".to_string());

        save(&theme, dir.path()).expect("failed to save theme");
        let loaded = load(dir.path()).expect("failed to load theme");

        assert_eq!(loaded, theme);
        assert!(dir.path().join(CSS_FILE).exists());
    }

    #[test]
    fn save_rejects_invalid_colors() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut theme = SiteTheme::default();
        theme.colors.text = "#nothex".to_string();

        assert!(save(&theme, dir.path()).is_err());
        assert!(!dir.path().join(THEME_FILE).exists());
    }

    #[test]
    fn load_returns_default_when_missing() {
        let dir = tempdir().expect("failed to create temp dir");
        let theme = load(dir.path()).expect("load should not error");
        assert_eq!(theme, SiteTheme::default());
    }
}
