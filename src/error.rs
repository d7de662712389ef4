// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Theme(String),
    Asset(AssetError),
}

/// Specific error types for media asset operations.
/// Used to provide user-friendly messages in toasts.
#[derive(Debug, Clone)]
pub enum AssetError {
    /// Source file has no usable file name component.
    InvalidName(String),

    /// An asset with the same name already exists in the category.
    DuplicateName(String),

    /// The named asset does not exist in the category.
    NotFound(String),

    /// Upload into the images category failed header validation.
    NotAnImage(String),

    /// A site-image key failed normalization (empty or bad characters).
    InvalidKey(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::InvalidName(name) => write!(f, "Invalid asset name: {}", name),
            AssetError::DuplicateName(name) => {
                write!(f, "An asset named \"{}\" already exists", name)
            }
            AssetError::NotFound(name) => write!(f, "No asset named \"{}\" was found", name),
            AssetError::NotAnImage(name) => {
                write!(f, "\"{}\" is not a recognized image format", name)
            }
            AssetError::InvalidKey(key) => write!(f, "Invalid site-image key: \"{}\"", key),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Theme(e) => write!(f, "Theme Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn asset_error_wraps_into_error() {
        let err: Error = AssetError::DuplicateName("logo.png".into()).into();
        match err {
            Error::Asset(AssetError::DuplicateName(name)) => assert_eq!(name, "logo.png"),
            _ => panic!("expected Asset variant"),
        }
    }

    #[test]
    fn asset_error_display_mentions_name() {
        let err = AssetError::NotFound("hero.webp".into());
        assert!(format!("{}", err).contains("hero.webp"));
    }

    #[test]
    fn theme_error_formats_properly() {
        let err = Error::Theme("not a hex color".into());
        assert_eq!(format!("{}", err), "Theme Error: not a hex color");
    }
}
