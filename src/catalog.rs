//! The catalog: every asset the site shows, grouped the way the site shows it.
//!
//! A [`Catalog`] is produced once by [`crate::scan`] and never mutated
//! afterwards. It is serialized to `manifest.json` between the scan and
//! generate stages, so every type here round-trips through serde.

use serde::{Deserialize, Serialize};

/// Intro image used when `intro/` has no image.
pub const DEFAULT_INTRO_IMAGE: &str = "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&q=80&w=800";

/// Whether a media file is rendered as a still or as a looping clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One discoverable asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Source-relative path; unique across the catalog.
    pub id: String,
    /// Filename without extension, dashes and underscores as spaces.
    pub title: String,
    /// Root-relative URL (`/assets/...`) or an absolute `https://` URL.
    pub url: String,
    /// Trimmed content of the sibling caption file, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Directory the item was found in. `None` for reels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub kind: MediaKind,
}

/// A named, non-empty group of items in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<MediaItem>,
}

impl Category {
    /// The item shown for this category under the "all" filter.
    pub fn representative(&self) -> Option<&MediaItem> {
        self.items.first()
    }
}

/// Immutable index of the whole site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub photography: Vec<Category>,
    pub videography: Vec<Category>,
    pub reels: Vec<MediaItem>,
    pub intro_image: String,
}

impl Catalog {
    /// True when there is nothing to show in any portfolio tab.
    ///
    /// The intro image does not count: it belongs to the about section.
    pub fn is_empty(&self) -> bool {
        self.photography.is_empty() && self.videography.is_empty() && self.reels.is_empty()
    }

    /// Placeholder catalog substituted when the asset tree is empty.
    ///
    /// Holds one photograph, one film and one reel so every section of the
    /// page has something to render on a fresh checkout.
    pub fn sample(intro_image: String) -> Self {
        Self {
            photography: vec![Category {
                name: "interiors".to_string(),
                items: vec![MediaItem {
                    id: "s1".to_string(),
                    title: "Sample Interior".to_string(),
                    url: "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?auto=format&fit=crop&q=80&w=800".to_string(),
                    external_link: None,
                    category: Some("interiors".to_string()),
                    kind: MediaKind::Image,
                }],
            }],
            videography: vec![Category {
                name: "brand_films".to_string(),
                items: vec![MediaItem {
                    id: "s2".to_string(),
                    title: "Sample Film (Create a .txt file locally)".to_string(),
                    url: "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4?auto=format&fit=crop&q=80&w=800".to_string(),
                    external_link: Some("https://www.youtube.com".to_string()),
                    category: Some("brand_films".to_string()),
                    kind: MediaKind::Image,
                }],
            }],
            reels: vec![MediaItem {
                id: "s3".to_string(),
                title: "Sample Reel".to_string(),
                url: "https://images.unsplash.com/photo-1527631746610-bca00a040d60?auto=format&fit=crop&q=80&w=800".to_string(),
                external_link: Some("https://www.instagram.com".to_string()),
                category: None,
                kind: MediaKind::Image,
            }],
            intro_image,
        }
    }
}

/// Find a category by name.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}
