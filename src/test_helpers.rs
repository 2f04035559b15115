//! Shared test utilities for the studio-folio test suite.
//!
//! Fixture setup plus lookup helpers over catalog data.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let interiors = find_category(&manifest.catalog.photography, "interiors");
//! assert_eq!(item_titles(&interiors.items), vec!["kitchen", "living room"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::catalog::{Category, MediaItem};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `(relative path, contents)` pairs under `root`, creating parents.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
    }
}

// =========================================================================
// Catalog lookups, panicking with a clear message on miss
// =========================================================================

/// Find a category by name. Panics if not found.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> &'a Category {
    crate::catalog::find_category(categories, name).unwrap_or_else(|| {
        panic!(
            "category '{name}' not found. Available: {:?}",
            category_names(categories)
        )
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

pub fn category_names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.name.as_str()).collect()
}

pub fn item_titles(items: &[MediaItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}
