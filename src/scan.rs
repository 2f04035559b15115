//! Asset discovery and catalog indexing.
//!
//! Stage 1 of the build. Walks the asset tree once and produces the
//! [`Manifest`] (catalog + resolved config) that the generate stage renders.
//!
//! ## Directory Structure
//!
//! ```text
//! public/                              # Source root
//! ├── config.toml                      # Site configuration (optional)
//! └── assets/
//!     ├── photography/
//!     │   ├── interiors/               # Category
//!     │   │   ├── living-room.jpg
//!     │   │   └── kitchen.jpg
//!     │   └── events/
//!     │       └── gala.jpg
//!     ├── videography/
//!     │   └── films/
//!     │       ├── launch.mp4           # Thumbnail or clip
//!     │       └── launch.txt           # Caption: one URL
//!     ├── reels/                       # Flat, no categories
//!     │   ├── teaser.mp4
//!     │   └── teaser.txt
//!     └── intro/
//!         └── portrait.jpg             # First file wins
//! ```
//!
//! ## Two Steps
//!
//! [`discover`] is the only part that touches the filesystem: it lists every
//! file under the four roots (sorted by name, so discovery order is stable)
//! and reads the caption next to each media file. [`index`] is a pure function from that
//! listing to a [`Catalog`], which keeps the grouping rules testable without
//! a directory tree.
//!
//! ## Skipped Files
//!
//! Anything that does not fit the layout is ignored, not reported as an
//! error: files directly under `photography/` or `videography/`, files
//! nested more than one level deep, files with other extensions. Skips are
//! logged at `debug` level.

use crate::catalog::{Catalog, Category, DEFAULT_INTRO_IMAGE, MediaItem, MediaKind};
use crate::config::{self, EmptyPolicy, SiteConfig};
use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("No photography, videography or reels found under {0}")]
    EmptyCatalog(PathBuf),
}

/// Manifest output from the scan stage
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub catalog: Catalog,
    pub config: SiteConfig,
}

pub const PHOTOGRAPHY_DIR: &str = "photography";
pub const VIDEOGRAPHY_DIR: &str = "videography";
pub const REELS_DIR: &str = "reels";
pub const INTRO_DIR: &str = "intro";

const IMAGE_EXTENSIONS: &[&str] = &["avif", "png", "jpg", "jpeg", "webp"];
const VIDEOGRAPHY_EXTENSIONS: &[&str] = &["avif", "png", "jpg", "jpeg", "webp", "mp4", "webm"];
const REEL_EXTENSIONS: &[&str] = &["avif", "png", "jpg", "jpeg", "webp", "mp4"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm"];
const CAPTION_EXTENSION: &str = "txt";

/// Every file found under the four asset roots.
///
/// Paths are relative to the source root and `/`-separated, e.g.
/// `assets/photography/interiors/a.jpg`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredAssets {
    /// Asset directory the section roots live in (`assets`).
    pub assets_dir: String,
    pub photography: Vec<String>,
    pub videography: Vec<String>,
    pub reels: Vec<String>,
    pub intro: Vec<String>,
    /// Caption path (media path with a `.txt` extension) → file content.
    /// Videography and reels only.
    pub captions: BTreeMap<String, String>,
}

impl DiscoveredAssets {
    pub fn new(assets_dir: &str) -> Self {
        Self {
            assets_dir: assets_dir.trim_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// `assets/photography/` for the photography section, and so on.
    fn section_prefix(&self, section: &str) -> String {
        format!("{}/{}/", self.assets_dir, section)
    }
}

/// Load config, discover assets, and index them.
///
/// An empty asset tree is replaced by [`Catalog::sample`] unless the config
/// says `catalog.on_empty = "error"`.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let assets = discover(root, &config.assets_dir)?;
    let catalog = collect(&assets);

    if catalog.is_empty() {
        match config.catalog.on_empty {
            EmptyPolicy::Error => {
                return Err(ScanError::EmptyCatalog(root.join(&config.assets_dir)));
            }
            EmptyPolicy::Sample => {
                log::warn!(
                    "No media under {}, using sample content",
                    root.join(&config.assets_dir).display()
                );
            }
        }
    }

    Ok(Manifest {
        catalog: with_fallback(catalog),
        config,
    })
}

/// List every file under the four asset roots and read caption files.
///
/// Missing roots are treated as empty. Hidden entries are skipped.
pub fn discover(root: &Path, assets_dir: &str) -> Result<DiscoveredAssets, ScanError> {
    let mut assets = DiscoveredAssets::new(assets_dir);
    let assets_root = root.join(&assets.assets_dir);

    assets.photography = list_files(root, &assets_root.join(PHOTOGRAPHY_DIR))?;
    assets.videography = list_files(root, &assets_root.join(VIDEOGRAPHY_DIR))?;
    assets.reels = list_files(root, &assets_root.join(REELS_DIR))?;
    assets.intro = list_files(root, &assets_root.join(INTRO_DIR))?;

    let videography_captions = read_captions(root, &assets.videography, VIDEOGRAPHY_EXTENSIONS);
    let reel_captions = read_captions(root, &assets.reels, REEL_EXTENSIONS);
    assets.captions.extend(videography_captions);
    assets.captions.extend(reel_captions);

    log::debug!(
        "Discovered {} photography, {} videography, {} reel, {} intro files ({} captions)",
        assets.photography.len(),
        assets.videography.len(),
        assets.reels.len(),
        assets.intro.len(),
        assets.captions.len()
    );
    Ok(assets)
}

/// Read the caption next to each media file in `paths`.
///
/// Only `.txt` siblings of media files are read; other text files are left
/// alone. Content is decoded lossily and unreadable captions are skipped, so
/// a bad caption costs its link and nothing else. Keys are the media path
/// with a lowercase `.txt` extension, whatever case the file on disk uses.
fn read_captions(root: &Path, paths: &[String], extensions: &[&str]) -> BTreeMap<String, String> {
    let caption_files: BTreeMap<String, &String> = paths
        .iter()
        .filter(|p| is_caption(p))
        .map(|p| (caption_path(p), p))
        .collect();

    let mut captions = BTreeMap::new();
    for media in paths.iter().filter(|p| is_media(p, extensions)) {
        let key = caption_path(media);
        let Some(file) = caption_files.get(&key) else {
            continue;
        };
        match fs::read(root.join(file.as_str())) {
            Ok(bytes) => {
                captions.insert(key, String::from_utf8_lossy(&bytes).into_owned());
            }
            Err(e) => log::warn!("Ignoring caption {file}: {e}"),
        }
    }
    captions
}

fn list_files(root: &Path, dir: &Path) -> Result<Vec<String>, ScanError> {
    if !dir.is_dir() {
        log::debug!("No directory at {}", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(rel);
    }
    Ok(files)
}

/// Build the catalog from a discovered file listing.
///
/// Pure: the same listing always yields the same catalog. When nothing is
/// found in any section the sample catalog is returned instead, keeping the
/// discovered intro image.
pub fn index(assets: &DiscoveredAssets) -> Catalog {
    with_fallback(collect(assets))
}

fn with_fallback(catalog: Catalog) -> Catalog {
    if catalog.is_empty() {
        Catalog::sample(catalog.intro_image)
    } else {
        catalog
    }
}

fn collect(assets: &DiscoveredAssets) -> Catalog {
    let photography = group_by_category(
        &assets.photography,
        &assets.section_prefix(PHOTOGRAPHY_DIR),
        IMAGE_EXTENSIONS,
        None,
    );
    let videography = group_by_category(
        &assets.videography,
        &assets.section_prefix(VIDEOGRAPHY_DIR),
        VIDEOGRAPHY_EXTENSIONS,
        Some(&assets.captions),
    );
    let reels = flat_items(
        &assets.reels,
        &assets.section_prefix(REELS_DIR),
        REEL_EXTENSIONS,
        Some(&assets.captions),
    );
    let intro_image = flat_items(
        &assets.intro,
        &assets.section_prefix(INTRO_DIR),
        IMAGE_EXTENSIONS,
        None,
    )
    .into_iter()
    .next()
    .map(|item| item.url)
    .unwrap_or_else(|| DEFAULT_INTRO_IMAGE.to_string());

    log::info!(
        "Indexed {} photography and {} videography categories, {} reels",
        photography.len(),
        videography.len(),
        reels.len()
    );

    Catalog {
        photography,
        videography,
        reels,
        intro_image,
    }
}

/// Group `<prefix><category>/<file>` paths by category, in discovery order.
fn group_by_category(
    paths: &[String],
    prefix: &str,
    extensions: &[&str],
    captions: Option<&BTreeMap<String, String>>,
) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for path in paths {
        let Some(rest) = path.strip_prefix(prefix) else {
            log::debug!("Skipping {path}: outside {prefix}");
            continue;
        };
        let segments: Vec<&str> = rest.split('/').collect();
        let [category, filename] = segments.as_slice() else {
            log::debug!("Skipping {path}: expected <category>/<file>");
            continue;
        };
        if category.is_empty() || !is_media(filename, extensions) {
            log::debug!("Skipping {path}: not a media file");
            continue;
        }

        let item = media_item(path, filename, Some(*category), captions);
        match categories.iter_mut().find(|c| c.name == *category) {
            Some(existing) => existing.items.push(item),
            None => categories.push(Category {
                name: category.to_string(),
                items: vec![item],
            }),
        }
    }

    categories
}

/// Items for `<prefix><file>` paths; nested paths are skipped.
fn flat_items(
    paths: &[String],
    prefix: &str,
    extensions: &[&str],
    captions: Option<&BTreeMap<String, String>>,
) -> Vec<MediaItem> {
    paths
        .iter()
        .filter_map(|path| {
            let filename = path.strip_prefix(prefix)?;
            if filename.contains('/') || !is_media(filename, extensions) {
                log::debug!("Skipping {path}: not a media file at {prefix}");
                return None;
            }
            Some(media_item(path, filename, None, captions))
        })
        .collect()
}

fn media_item(
    path: &str,
    filename: &str,
    category: Option<&str>,
    captions: Option<&BTreeMap<String, String>>,
) -> MediaItem {
    let external_link = captions
        .and_then(|c| c.get(&caption_path(path)))
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(String::from);

    let kind = match extension_of(filename) {
        Some(ext) if VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext)) => {
            MediaKind::Video
        }
        _ => MediaKind::Image,
    };

    MediaItem {
        id: path.to_string(),
        title: naming::media_title(filename),
        url: format!("/{path}"),
        external_link,
        category: category.map(String::from),
        kind,
    }
}

/// The media path with its extension swapped for `.txt`.
fn caption_path(path: &str) -> String {
    match path.rfind('.') {
        Some(dot) => format!("{}.{}", &path[..dot], CAPTION_EXTENSION),
        None => format!("{path}.{CAPTION_EXTENSION}"),
    }
}

fn extension_of(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.contains('/'))
}

/// `.txt` in any case.
fn is_caption(path: &str) -> bool {
    extension_of(path).is_some_and(|ext| ext.eq_ignore_ascii_case(CAPTION_EXTENSION))
}

fn is_media(filename: &str, extensions: &[&str]) -> bool {
    !filename.is_empty()
        && !filename.starts_with('.')
        && extension_of(filename)
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
