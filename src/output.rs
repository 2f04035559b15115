//! CLI output formatting for the build stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (category, item, page) is its semantic identity, a
//! positional index and a label, with filesystem paths shown as secondary
//! context via indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Photography
//! 001 Interiors (2 items)
//!     001 kitchen
//!         Source: assets/photography/interiors/kitchen.jpg
//!     002 living room
//!         Source: assets/photography/interiors/living-room.jpg
//!
//! Videography
//! 001 Brand Films (1 item)
//!     001 launch (video)
//!         Source: assets/videography/brand_films/launch.mp4
//!         Link: https://youtu.be/abc
//!
//! Reels
//!     001 teaser
//!         Source: assets/reels/teaser.jpg
//!
//! Intro
//!     Source: assets/intro/portrait.jpg
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Photography → index.html
//!     001 Interiors → photography/interiors/index.html
//! Videography → videography/index.html
//!     001 Brand Films → videography/brand-films/index.html
//!
//! Generated 3 pages, 4 assets
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout.

use crate::catalog::{Category, MediaItem, MediaKind};
use crate::generate::{self, GeneratedSite, Routes};
use crate::naming::format_label;
use crate::scan::Manifest;
use crate::view::Filter;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + label, with optional count.
///
/// ```text
/// 001 Interiors (2 items)
/// 001 Interiors
/// ```
fn entity_header(index: usize, label: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 item)", format_index(index), label),
        Some(n) => format!("{} {} ({} items)", format_index(index), label, n),
        None => format!("{} {}", format_index(index), label),
    }
}

/// Format one item: header line plus its source and link context lines.
///
/// Items without a local source (the sample catalog) show their URL instead.
fn item_lines(index: usize, item: &MediaItem, depth: usize) -> Vec<String> {
    let pad = indent(depth);
    let kind = match item.kind {
        MediaKind::Video => " (video)",
        MediaKind::Image => "",
    };
    let mut lines = vec![format!("{}{} {}{}", pad, format_index(index), item.title, kind)];
    if item.url.starts_with('/') {
        lines.push(format!("{}    Source: {}", pad, item.id));
    } else {
        lines.push(format!("{}    URL: {}", pad, item.url));
    }
    if let Some(link) = &item.external_link {
        lines.push(format!("{}    Link: {}", pad, link));
    }
    lines
}

fn category_lines(heading: &str, categories: &[Category], lines: &mut Vec<String>) {
    lines.push(heading.to_string());
    for (i, category) in categories.iter().enumerate() {
        lines.push(entity_header(
            i + 1,
            &format_label(&category.name),
            Some(category.items.len()),
        ));
        for (j, item) in category.items.iter().enumerate() {
            lines.extend(item_lines(j + 1, item, 1));
        }
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Format scan stage output showing the indexed catalog.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let catalog = &manifest.catalog;
    let mut lines = Vec::new();

    category_lines("Photography", &catalog.photography, &mut lines);

    lines.push(String::new());
    category_lines("Videography", &catalog.videography, &mut lines);

    lines.push(String::new());
    let reels_heading = if manifest.config.portfolio.show_reels {
        "Reels"
    } else {
        "Reels (hidden)"
    };
    lines.push(reels_heading.to_string());
    for (i, reel) in catalog.reels.iter().enumerate() {
        lines.extend(item_lines(i + 1, reel, 1));
    }

    lines.push(String::new());
    lines.push("Intro".to_string());
    match catalog.intro_image.strip_prefix('/') {
        Some(path) => lines.push(format!("    Source: {}", path)),
        None => lines.push(format!("    URL: {}", catalog.intro_image)),
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }
    if source_root.join(&manifest.config.assets_dir).is_dir() {
        lines.push(format!("    {}/", manifest.config.assets_dir));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format generate stage output: each view's label followed by `→` and the
/// page it was written to.
pub fn format_generate_output(manifest: &Manifest, site: &GeneratedSite) -> Vec<String> {
    let routes = Routes::new(&manifest.catalog, &manifest.config.base_path);
    let mut lines = Vec::new();
    let mut position = 0;

    for state in generate::site_states(&manifest.catalog, &manifest.config) {
        let page = format!("{}index.html", routes.route(&state));
        match state.active_filter() {
            Some(Filter::Category(name)) => {
                position += 1;
                lines.push(format!(
                    "{}{} \u{2192} {}",
                    indent(1),
                    entity_header(position, &format_label(name), None),
                    page
                ));
            }
            _ => {
                position = 0;
                lines.push(format!(
                    "{} \u{2192} {}",
                    format_label(state.active_tab.name()),
                    page
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, {} assets",
        site.pages.len(),
        site.assets_copied
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest, site: &GeneratedSite) {
    for line in format_generate_output(manifest, site) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
