//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the source root next to the asset directory and is never copied to the
//! output:
//!
//! ```text
//! public/
//! ├── config.toml              # Site config (optional)
//! └── assets/
//!     ├── photography/...
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown by `studio-folio gen-config`
//!
//! base_path = "/"           # URL prefix the site is deployed under
//! assets_dir = "assets"     # Asset directory inside the source root
//!
//! [site]                    # Brand, hero copy, footer line
//! [portfolio]               # show_reels
//! [catalog]                 # on_empty = "sample" | "error"
//! [about]                   # About section copy, markdown body, stats
//! [clients]                 # Client strip heading and names
//! [[social]]                # Footer links (label + url), repeatable
//! [colors.light]            # Light mode palette
//! [colors.dark]             # Dark mode palette
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Tables are merged key by key on top of the stock
//! defaults; arrays (client names, social links, stats) replace the default
//! array wholesale.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the source root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid config value for `{key}`: {message}")]
    Validation { key: String, message: String },
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// URL prefix for every local link and asset. Must start and end with `/`.
    pub base_path: String,
    /// Directory under the source root holding the four asset roots.
    pub assets_dir: String,
    /// Brand name, hero copy and footer line.
    pub site: SiteInfo,
    /// Portfolio section switches.
    pub portfolio: PortfolioConfig,
    /// What to do when the asset tree holds no media.
    pub catalog: CatalogConfig,
    /// About section copy.
    pub about: AboutConfig,
    /// Scrolling client strip.
    pub clients: ClientsConfig,
    /// Footer social links, in display order.
    pub social: Vec<SocialLink>,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            assets_dir: "assets".to_string(),
            site: SiteInfo::default(),
            portfolio: PortfolioConfig::default(),
            catalog: CatalogConfig::default(),
            about: AboutConfig::default(),
            clients: ClientsConfig::default(),
            social: default_social(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.starts_with('/') || !self.base_path.ends_with('/') {
            return Err(invalid("base_path", "must start and end with '/'"));
        }
        if self.assets_dir.trim().is_empty() {
            return Err(invalid("assets_dir", "must not be empty"));
        }
        if self.site.brand.trim().is_empty() {
            return Err(invalid("site.brand", "must not be empty"));
        }
        if let Some(i) = self.social.iter().position(|s| s.url.trim().is_empty()) {
            return Err(invalid(
                format!("social[{i}].url"),
                &format!("empty url for '{}'", self.social[i].label),
            ));
        }
        Ok(())
    }
}

fn invalid(key: impl Into<String>, message: &str) -> ConfigError {
    ConfigError::Validation {
        key: key.into(),
        message: message.to_string(),
    }
}

/// Brand and hero copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Bold part of the wordmark in the nav bar.
    pub brand: String,
    /// Muted suffix of the wordmark.
    pub brand_accent: String,
    /// Document `<title>`.
    pub title: String,
    /// First line of the hero heading.
    pub hero_heading: String,
    /// Second, italic line of the hero heading.
    pub hero_accent: String,
    /// Paragraph under the hero heading.
    pub hero_text: String,
    /// Footer line after the year.
    pub copyright: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            brand: "STUDIO".to_string(),
            brand_accent: "MEDIA".to_string(),
            title: "Studio Media | Photography & Film".to_string(),
            hero_heading: "Documenting life".to_string(),
            hero_accent: "as it unfolds.".to_string(),
            hero_text: "High-quality visual storytelling for architecture, interiors, and live events.".to_string(),
            copyright: "Studio Media. Quality in every frame.".to_string(),
        }
    }
}

/// Portfolio section switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Render the reels tab. Reels are always indexed either way.
    pub show_reels: bool,
}

/// Behaviour when the asset tree holds no photography, videography or reels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPolicy {
    /// Substitute the built-in sample catalog.
    #[default]
    Sample,
    /// Fail the build.
    Error,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub on_empty: EmptyPolicy,
}

/// About section copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    /// Small caps line above the heading.
    pub eyebrow: String,
    pub heading: String,
    /// Second, italic line of the heading.
    pub heading_accent: String,
    /// Markdown.
    pub body: String,
    /// Alt text for the intro image.
    pub image_alt: String,
    pub stats: Vec<Stat>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            eyebrow: "The Story".to_string(),
            heading: "Hello,".to_string(),
            heading_accent: "we are Studio Media.".to_string(),
            body: "Inspired by travel and storytelling, we specialize in architecture and event visuals that resonate.".to_string(),
            image_alt: "Studio portrait".to_string(),
            stats: vec![
                Stat {
                    value: "4+".to_string(),
                    label: "Years Exp".to_string(),
                },
                Stat {
                    value: "100+".to_string(),
                    label: "Projects".to_string(),
                },
            ],
        }
    }
}

/// A headline number in the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Scrolling client strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientsConfig {
    pub heading: String,
    /// Rendered twice back to back so the strip loops seamlessly.
    pub names: Vec<String>,
}

impl Default for ClientsConfig {
    fn default() -> Self {
        Self {
            heading: "Partnerships".to_string(),
            names: [
                "Vogue", "Tesla", "Airbnb", "Nike", "Red Bull", "Adobe", "Sony", "Canon",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// A footer link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

fn default_social() -> Vec<SocialLink> {
    [
        ("Instagram", "https://instagram.com"),
        ("YouTube", "https://youtube.com"),
        ("LinkedIn", "https://linkedin.com"),
        ("Email", "mailto:hello@example.com"),
    ]
    .iter()
    .map(|(label, url)| SocialLink {
        label: label.to_string(),
        url: url.to_string(),
    })
    .collect()
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Background of the about section.
    pub surface: String,
    pub text: String,
    /// Secondary text: nav links, labels, captions.
    pub text_muted: String,
    pub border: String,
    /// Client names before hover.
    pub faint: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#fafafa".to_string(),
            text: "#18181b".to_string(),
            text_muted: "#a1a1aa".to_string(),
            border: "#f4f4f5".to_string(),
            faint: "#e4e4e7".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#09090b".to_string(),
            surface: "#18181b".to_string(),
            text: "#f4f4f5".to_string(),
            text_muted: "#71717a".to_string(),
            border: "#27272a".to_string(),
            faint: "#3f3f46".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `<root>/config.toml` as a raw TOML value, if there is one.
fn read_overlay(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        log::debug!("No {} in {}, using stock defaults", CONFIG_FILE, root.display());
        return Ok(None);
    }
    log::debug!("Loading {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Layer a site's overrides onto the stock defaults, then deserialize and
/// validate the result.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config for a source root: stock defaults overlaid with
/// `config.toml` when present.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = read_overlay(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# studio-folio configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the source root (next to the assets directory).
# Unknown keys will cause an error.

# URL prefix the site is served under. Use "/my-repo/" for a project page.
base_path = "/"

# Directory inside the source root that holds photography/, videography/,
# reels/ and intro/.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Brand and hero
# ---------------------------------------------------------------------------
[site]
brand = "STUDIO"
brand_accent = "MEDIA"
title = "Studio Media | Photography & Film"
hero_heading = "Documenting life"
hero_accent = "as it unfolds."
hero_text = "High-quality visual storytelling for architecture, interiors, and live events."
copyright = "Studio Media. Quality in every frame."

# ---------------------------------------------------------------------------
# Portfolio
# ---------------------------------------------------------------------------
[portfolio]
# Show the reels tab. Reels are indexed either way.
show_reels = false

# ---------------------------------------------------------------------------
# Empty asset tree
# ---------------------------------------------------------------------------
[catalog]
# "sample" renders placeholder content, "error" fails the build.
on_empty = "sample"

# ---------------------------------------------------------------------------
# About section (body is markdown)
# ---------------------------------------------------------------------------
[about]
eyebrow = "The Story"
heading = "Hello,"
heading_accent = "we are Studio Media."
body = "Inspired by travel and storytelling, we specialize in architecture and event visuals that resonate."
image_alt = "Studio portrait"

[[about.stats]]
value = "4+"
label = "Years Exp"

[[about.stats]]
value = "100+"
label = "Projects"

# ---------------------------------------------------------------------------
# Client strip
# ---------------------------------------------------------------------------
[clients]
heading = "Partnerships"
names = ["Vogue", "Tesla", "Airbnb", "Nike", "Red Bull", "Adobe", "Sony", "Canon"]

# ---------------------------------------------------------------------------
# Footer links (repeat the table for each link)
# ---------------------------------------------------------------------------
[[social]]
label = "Instagram"
url = "https://instagram.com"

[[social]]
label = "YouTube"
url = "https://youtube.com"

[[social]]
label = "LinkedIn"
url = "https://linkedin.com"

[[social]]
label = "Email"
url = "mailto:hello@example.com"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#fafafa"
text = "#18181b"
text_muted = "#a1a1aa"
border = "#f4f4f5"
faint = "#e4e4e7"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#09090b"
surface = "#18181b"
text = "#f4f4f5"
text_muted = "#71717a"
border = "#27272a"
faint = "#3f3f46"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-faint: {light_faint};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-faint: {dark_faint};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_faint = colors.light.faint,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_faint = colors.dark.faint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.assets_dir, "assets");
        assert!(!config.portfolio.show_reels);
        assert_eq!(config.catalog.on_empty, EmptyPolicy::Sample);
        assert_eq!(config.colors.light.background, "#ffffff");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
base_path = "/portfolio/"

[site]
brand = "SBS"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_path, "/portfolio/");
        assert_eq!(config.site.brand, "SBS");
        // Defaults preserved
        assert_eq!(config.site.brand_accent, "MEDIA");
        assert_eq!(config.about.stats.len(), 2);
    }

    #[test]
    fn parse_empty_policy() {
        let config: SiteConfig = toml::from_str("[catalog]\non_empty = \"error\"").unwrap();
        assert_eq!(config.catalog.on_empty, EmptyPolicy::Error);
    }

    #[test]
    fn parse_social_links_replace_defaults() {
        let toml = r#"
[[social]]
label = "Vimeo"
url = "https://vimeo.com/studio"
"#;
        let config = resolve_config(stock_defaults_value(), Some(toml::from_str(toml).unwrap()))
            .unwrap();
        assert_eq!(
            config.social,
            vec![SocialLink {
                label: "Vimeo".to_string(),
                url: "https://vimeo.com/studio".to_string(),
            }]
        );
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.brand, "STUDIO");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[portfolio]
show_reels = true

[clients]
names = ["Acme"]
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert!(config.portfolio.show_reels);
        assert_eq!(config.clients.names, vec!["Acme"]);
        assert_eq!(config.clients.heading, "Partnerships");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site]\nbrnd = \"x\"\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[sight]\nbrand = \"x\"\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_base_path_needs_slashes() {
        let mut config = SiteConfig::default();
        config.base_path = "/portfolio".to_string();
        assert!(config.validate().is_err());

        config.base_path = "portfolio/".to_string();
        assert!(config.validate().is_err());

        config.base_path = "/portfolio/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_brand_not_empty() {
        let mut config = SiteConfig::default();
        config.site.brand = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.brand"));
    }

    #[test]
    fn validate_social_url_not_empty() {
        let mut config = SiteConfig::default();
        config.social[0].url = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::Validation { key, .. } if key == "social[0].url"
        ));
        assert!(err.to_string().contains("social[0].url"));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "base_path = \"x\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation { key, .. }) if key == "base_path"
        ));
    }

    // =========================================================================
    // merge_toml
    // =========================================================================

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str(r#"names = ["a", "b", "c"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"names = ["z"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("names").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // stock_config_toml
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.base_path, defaults.base_path);
        assert_eq!(config.site.hero_text, defaults.site.hero_text);
        assert_eq!(config.about.body, defaults.about.body);
        assert_eq!(config.about.stats, defaults.about.stats);
        assert_eq!(config.clients.names, defaults.clients.names);
        assert_eq!(config.social, defaults.social);
        assert_eq!(config.colors.dark.faint, defaults.colors.dark.faint);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for key in ["site", "portfolio", "catalog", "about", "clients", "social", "colors"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
