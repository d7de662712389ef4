// SPDX-License-Identifier: MPL-2.0
//! Categorized media asset storage.
//!
//! Assets live under `<site>/assets/<category>/` as plain files. The
//! library copies uploads in, lists what is there, and deletes by name;
//! it never renames or mutates asset contents. Image uploads are checked
//! for a decodable image header before they are accepted.

use crate::error::{AssetError, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

const ASSETS_DIR: &str = "assets";

/// Closed set of asset categories, one subdirectory each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Images,
    Documents,
    Videos,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Images,
        Category::Documents,
        Category::Videos,
        Category::Other,
    ];

    /// Directory name under `assets/`.
    #[must_use]
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Documents => "documents",
            Category::Videos => "videos",
            Category::Other => "other",
        }
    }

    /// Human-readable label for the category selector.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single stored asset, as reported by [`AssetLibrary::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInfo {
    /// File name within its category directory.
    pub name: String,
    /// Absolute path of the stored file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Last modification time, when the filesystem reports one.
    pub modified: Option<DateTime<Local>>,
}

/// Handle on the categorized asset storage of one site directory.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    root: PathBuf,
}

impl AssetLibrary {
    /// Creates a library rooted at `<site_dir>/assets`.
    #[must_use]
    pub fn new(site_dir: &Path) -> Self {
        Self {
            root: site_dir.join(ASSETS_DIR),
        }
    }

    /// Returns the directory for a category.
    #[must_use]
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Creates every category directory that does not exist yet.
    pub fn ensure_layout(&self) -> Result<()> {
        for category in Category::ALL {
            fs::create_dir_all(self.category_dir(category))?;
        }
        Ok(())
    }

    /// Lists the assets of a category, sorted by name.
    ///
    /// A missing category directory yields an empty list rather than an
    /// error, so a freshly chosen site directory browses cleanly.
    pub fn list(&self, category: Category) -> Result<Vec<AssetInfo>> {
        let dir = self.category_dir(category);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut assets = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            assets.push(AssetInfo {
                name,
                path: entry.path(),
                size: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Local>::from),
            });
        }
        assets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(assets)
    }

    /// Copies `source` into the category directory.
    ///
    /// The stored name is the source's file name. Duplicate names are
    /// rejected instead of overwritten; uploads into [`Category::Images`]
    /// must carry a recognizable image header.
    pub fn upload(&self, category: Category, source: &Path) -> Result<AssetInfo> {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AssetError::InvalidName(source.display().to_string()))?;

        if category == Category::Images {
            validate_image(source, &name)?;
        }

        fs::create_dir_all(self.category_dir(category))?;
        let destination = self.category_dir(category).join(&name);
        if destination.exists() {
            return Err(AssetError::DuplicateName(name).into());
        }

        fs::copy(source, &destination)?;
        let metadata = fs::metadata(&destination)?;
        Ok(AssetInfo {
            name,
            path: destination,
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
        })
    }

    /// Deletes the named asset from a category.
    pub fn delete(&self, category: Category, name: &str) -> Result<()> {
        // Names come from list(), but reject anything path-like outright.
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Err(AssetError::InvalidName(name.to_string()).into());
        }

        let path = self.category_dir(category).join(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(name.to_string()).into());
        }
        fs::remove_file(path)?;
        Ok(())
    }

    /// Site-relative path for an asset stored in a category, for use in the
    /// theme document and the site-image registry.
    #[must_use]
    pub fn relative_path(&self, category: Category, name: &str) -> String {
        format!("{}/{}/{}", ASSETS_DIR, category.dir_name(), name)
    }
}

/// Checks that a file starts with a decodable image header.
fn validate_image(source: &Path, name: &str) -> Result<()> {
    let reader = image_rs::ImageReader::open(source)?
        .with_guessed_format()
        .map_err(|e| crate::error::Error::Io(e.to_string()))?;
    if reader.format().is_none() {
        return Err(AssetError::NotAnImage(name.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_source(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("failed to write source file");
        path
    }

    fn png_source(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("failed to write test image");
        path
    }

    #[test]
    fn ensure_layout_creates_all_category_dirs() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        library.ensure_layout().expect("layout creation failed");

        for category in Category::ALL {
            assert!(library.category_dir(category).is_dir());
        }
    }

    #[test]
    fn upload_and_list_documents() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        let source = write_source(dir.path(), "terms.txt", b"hello");

        let info = library
            .upload(Category::Documents, &source)
            .expect("upload failed");
        assert_eq!(info.name, "terms.txt");
        assert_eq!(info.size, 5);

        let listed = library.list(Category::Documents).expect("list failed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "terms.txt");
    }

    #[test]
    fn listing_is_sorted_by_name() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        for name in ["zeta.txt", "alpha.txt", "mid.txt"] {
            let source = write_source(dir.path(), name, b"x");
            library.upload(Category::Other, &source).expect("upload failed");
        }

        let names: Vec<String> = library
            .list(Category::Other)
            .expect("list failed")
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["alpha.txt", "mid.txt", "zeta.txt"]);
    }

    #[test]
    fn duplicate_upload_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        let source = write_source(dir.path(), "terms.txt", b"hello");

        library.upload(Category::Documents, &source).expect("first upload");
        let err = library.upload(Category::Documents, &source).unwrap_err();
        assert!(matches!(err, Error::Asset(AssetError::DuplicateName(_))));
    }

    #[test]
    fn image_upload_accepts_real_image() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        let source = png_source(dir.path(), "logo.png");

        let info = library.upload(Category::Images, &source).expect("upload failed");
        assert!(info.path.ends_with("assets/images/logo.png"));
    }

    #[test]
    fn image_upload_rejects_non_image_bytes() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        let source = write_source(dir.path(), "fake.png", b"definitely not an image");

        let err = library.upload(Category::Images, &source).unwrap_err();
        assert!(matches!(err, Error::Asset(AssetError::NotAnImage(_))));
    }

    #[test]
    fn delete_removes_asset() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        let source = write_source(dir.path(), "old.txt", b"bye");
        library.upload(Category::Documents, &source).expect("upload failed");

        library
            .delete(Category::Documents, "old.txt")
            .expect("delete failed");
        assert!(library.list(Category::Documents).expect("list").is_empty());
    }

    #[test]
    fn delete_missing_asset_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());

        let err = library.delete(Category::Documents, "ghost.txt").unwrap_err();
        assert!(matches!(err, Error::Asset(AssetError::NotFound(_))));
    }

    #[test]
    fn delete_rejects_path_traversal() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());

        let err = library.delete(Category::Other, "../theme.toml").unwrap_err();
        assert!(matches!(err, Error::Asset(AssetError::InvalidName(_))));
    }

    #[test]
    fn relative_path_is_site_relative() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        assert_eq!(
            library.relative_path(Category::Images, "logo.png"),
            "assets/images/logo.png"
        );
    }

    #[test]
    fn list_of_missing_category_is_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let library = AssetLibrary::new(dir.path());
        assert!(library.list(Category::Videos).expect("list").is_empty());
    }
}
