//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan manifest and writes the static site:
//! one complete single-page document per reachable portfolio view, plus a
//! copy of the asset tree.
//!
//! ## Generated Pages
//!
//! Every page is the full single-page site (nav, hero, portfolio, about,
//! clients, footer); only the portfolio section differs.
//!
//! - **Index** (`/index.html`): photography, all categories
//! - **Photo category** (`/photography/{slug}/index.html`)
//! - **Videography** (`/videography/index.html`)
//! - **Video category** (`/videography/{slug}/index.html`)
//! - **Reels** (`/reels/index.html`): only with `portfolio.show_reels`
//!
//! ## Links
//!
//! Cards, tabs and filter pills do not hard-code where they lead. Each one
//! sends its click message through [`ViewState::click_target`] and renders
//! whatever comes back:
//!
//! | Outcome | Rendered as |
//! |---------|-------------|
//! | new view state | `<a href="{base}{route}#portfolio">` |
//! | `OpenExternal(url)` | `<a href="{url}" target="_blank" rel="noopener noreferrer">` |
//! | nothing | plain `<div>` |
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── photography/
//! │   ├── events/index.html
//! │   └── interiors/index.html
//! ├── videography/
//! │   ├── index.html
//! │   └── brand-films/index.html
//! └── assets/                    # Copied from the source tree
//!     └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time and inlined into every page:
//! - `static/style.css`: base styles (colors injected from config)
//! - `static/site.js`: compact nav on scroll, offset smooth scrolling
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::catalog::{Catalog, Category, MediaItem, MediaKind};
use crate::config::{self, SiteConfig};
use crate::naming::{format_label, slugify};
use crate::scan::Manifest;
use crate::view::{
    self, Anchor, ClickTarget, Filter, Message, Tab, ViewState, VisibleItem,
};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");
const GENERATOR: &str = concat!("studio-folio ", env!("FOLIO_BUILD_VERSION"));

/// What the generate stage wrote.
#[derive(Debug, Default)]
pub struct GeneratedSite {
    /// Output-relative page paths, in render order.
    pub pages: Vec<String>,
    /// Asset files copied from the source tree.
    pub assets_copied: usize,
}

/// Read the manifest written by the scan stage.
pub fn load_manifest(manifest_path: &Path) -> Result<Manifest, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    Ok(serde_json::from_str(&manifest_content)?)
}

pub fn generate(
    manifest: &Manifest,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GeneratedSite, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets_dir = &manifest.config.assets_dir;
    let assets_copied = copy_assets(&source_root.join(assets_dir), &output_dir.join(assets_dir))?;

    let year = chrono::Local::now().year();
    let pages = write_pages(manifest, output_dir, year)?;

    log::info!(
        "Site generated at {} ({} pages, {} assets)",
        output_dir.display(),
        pages.len(),
        assets_copied
    );
    Ok(GeneratedSite {
        pages,
        assets_copied,
    })
}

/// Render and write one page per view state.
fn write_pages(manifest: &Manifest, output_dir: &Path, year: i32) -> Result<Vec<String>, GenerateError> {
    let site = Site::new(manifest, year);
    let mut pages = Vec::new();

    for state in site_states(&manifest.catalog, &manifest.config) {
        let route = site.routes.route(&state);
        let dir = output_dir.join(&route);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("index.html"), render_page(&site, &state).into_string())?;

        let page = format!("{route}index.html");
        log::debug!("Generated {page}");
        pages.push(page);
    }
    Ok(pages)
}

/// Views that get a page. Reels are dropped unless enabled.
pub fn site_states(catalog: &Catalog, config: &SiteConfig) -> Vec<ViewState> {
    view::reachable_states(catalog)
        .into_iter()
        .filter(|s| s.active_tab != Tab::Reels || config.portfolio.show_reels)
        .collect()
}

fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        log::debug!("No assets to copy at {}", src.display());
        return Ok(0);
    }

    let mut copied = 0;
    let walker = WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Routing
// ============================================================================

/// Maps view states to page paths.
///
/// Category slugs are assigned once per section in catalog order; a slug
/// already taken gets a numeric suffix (`brand-films`, `brand-films-2`).
#[derive(Debug)]
pub struct Routes {
    base_path: String,
    photography: Vec<(String, String)>,
    videography: Vec<(String, String)>,
}

impl Routes {
    pub fn new(catalog: &Catalog, base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
            photography: unique_slugs(&catalog.photography),
            videography: unique_slugs(&catalog.videography),
        }
    }

    /// Output-relative directory of the page for `state`, `/`-terminated.
    /// The index page is the empty route.
    pub fn route(&self, state: &ViewState) -> String {
        match state.active_tab {
            Tab::Photography => match &state.photo_filter {
                Filter::All => String::new(),
                Filter::Category(name) => format!("photography/{}/", slug_for(&self.photography, name)),
            },
            Tab::Videography => match &state.video_filter {
                Filter::All => "videography/".to_string(),
                Filter::Category(name) => format!("videography/{}/", slug_for(&self.videography, name)),
            },
            Tab::Reels => "reels/".to_string(),
        }
    }

    /// Link to the portfolio section of the page for `state`.
    pub fn href(&self, state: &ViewState) -> String {
        format!("{}{}#{}", self.base_path, self.route(state), Anchor::Portfolio.id())
    }

    /// Prefix a root-relative catalog URL with the base path. Absolute URLs
    /// pass through.
    pub fn asset_url(&self, url: &str) -> String {
        match url.strip_prefix('/') {
            Some(rest) => format!("{}{}", self.base_path, rest),
            None => url.to_string(),
        }
    }
}

fn unique_slugs(categories: &[Category]) -> Vec<(String, String)> {
    let mut taken = HashSet::new();
    categories
        .iter()
        .map(|c| {
            let base = slugify(&c.name);
            let mut slug = base.clone();
            let mut n = 2;
            while !taken.insert(slug.clone()) {
                slug = format!("{base}-{n}");
                n += 1;
            }
            (c.name.clone(), slug)
        })
        .collect()
}

fn slug_for(slugs: &[(String, String)], name: &str) -> String {
    slugs
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, slug)| slug.clone())
        .unwrap_or_else(|| slugify(name))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Everything a page render needs besides the view state.
struct Site<'a> {
    catalog: &'a Catalog,
    config: &'a SiteConfig,
    routes: Routes,
    css: String,
    year: i32,
}

impl<'a> Site<'a> {
    fn new(manifest: &'a Manifest, year: i32) -> Self {
        let color_css = config::generate_color_css(&manifest.config.colors);
        Self {
            catalog: &manifest.catalog,
            config: &manifest.config,
            routes: Routes::new(&manifest.catalog, &manifest.config.base_path),
            css: format!("{}\n\n{}", color_css, CSS_STATIC),
            year,
        }
    }

    fn tabs(&self) -> impl Iterator<Item = Tab> + '_ {
        Tab::ALL
            .into_iter()
            .filter(|t| *t != Tab::Reels || self.config.portfolio.show_reels)
    }

    fn link(&self, target: &ClickTarget, class: &str, body: Markup) -> Markup {
        match target {
            ClickTarget::View(next) => html! {
                a class=(class) href=(self.routes.href(next)) { (body) }
            },
            ClickTarget::External(url) => html! {
                a class=(class) href=(url) target="_blank" rel="noopener noreferrer" { (body) }
            },
            ClickTarget::Inert => html! {
                div class=(class) { (body) }
            },
        }
    }
}

fn after(state: &ViewState, message: Message) -> ViewState {
    let mut next = state.clone();
    next.update(message);
    next
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(GENERATOR);
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn page_title(site_title: &str, state: &ViewState) -> String {
    let section = match (state.active_tab, state.active_filter()) {
        (Tab::Photography, Some(Filter::All)) => return site_title.to_string(),
        (_, Some(Filter::Category(name))) => format_label(name),
        (tab, _) => format_label(tab.name()),
    };
    format!("{section} | {site_title}")
}

/// Fixed top bar: wordmark, section links and the mobile menu toggle.
fn render_nav(site: &Site, state: &ViewState) -> Markup {
    let info = &site.config.site;
    html! {
        nav.site-nav id="site-nav" {
            div.nav-inner {
                a.brand href="#top" data-scroll="top" {
                    (info.brand)
                    span.brand-accent { (info.brand_accent) }
                }
                ul.nav-links {
                    @for anchor in Anchor::ALL {
                        li {
                            a href=(anchor_href(site, state, anchor)) { (anchor.label()) }
                        }
                    }
                }
                label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
            }
        }
    }
}

fn anchor_href(site: &Site, state: &ViewState, anchor: Anchor) -> String {
    match state.click_target(Message::NavClicked(anchor)) {
        ClickTarget::View(next) => site.routes.href(&next),
        _ => format!("#{}", anchor.id()),
    }
}

/// Full-screen menu for narrow viewports, opened by the CSS-only checkbox.
fn render_mobile_menu(site: &Site, state: &ViewState) -> Markup {
    html! {
        div.mobile-menu {
            @for tab in site.tabs() {
                a href=(site.routes.href(&after(state, Message::MenuSelected(tab)))) {
                    (format_label(tab.name()))
                }
            }
            a href={ "#" (Anchor::Contact.id()) } { (Anchor::Contact.label()) }
        }
    }
}

fn render_hero(site: &Site) -> Markup {
    let info = &site.config.site;
    html! {
        header.hero id="top" {
            h1 {
                (info.hero_heading)
                br;
                em.accent { (info.hero_accent) }
            }
            p.hero-text { (info.hero_text) }
        }
    }
}

fn render_portfolio(site: &Site, state: &ViewState) -> Markup {
    html! {
        main.portfolio id=(Anchor::Portfolio.id()) {
            div.tab-bar {
                @for tab in site.tabs() {
                    a.tab.active[state.active_tab == tab]
                        href=(site.routes.href(&after(state, Message::SelectTab(tab)))) {
                        (tab.name())
                    }
                }
            }
            (render_filter_pills(site, state))
            (render_grid(site, state))
        }
    }
}

fn render_filter_pills(site: &Site, state: &ViewState) -> Markup {
    type SetFilter = fn(Filter) -> Message;
    let (categories, active, set_filter) = match state.active_tab {
        Tab::Photography => (
            site.catalog.photography.as_slice(),
            &state.photo_filter,
            Message::SetPhotoFilter as SetFilter,
        ),
        Tab::Videography => (
            site.catalog.videography.as_slice(),
            &state.video_filter,
            Message::SetVideoFilter as SetFilter,
        ),
        Tab::Reels => return html! {},
    };
    let pill_href = |filter: Filter| site.routes.href(&after(state, set_filter(filter)));

    html! {
        div.filter-pills {
            a.pill.active[active.is_all()] href=(pill_href(Filter::All)) { "Show All Categories" }
            @for category in categories {
                @let filter = Filter::Category(category.name.clone());
                a.pill.active[*active == filter] href=(pill_href(filter.clone())) {
                    (format_label(&category.name))
                }
            }
        }
    }
}

fn render_grid(site: &Site, state: &ViewState) -> Markup {
    let items = state.visible_items(site.catalog);
    html! {
        div class={ "grid grid-" (state.active_tab.name()) } {
            @for visible in &items {
                @match state.active_tab {
                    Tab::Photography => { (render_photo_card(site, state, visible)) }
                    Tab::Videography => { (render_video_card(site, state, visible)) }
                    Tab::Reels => { (render_reel_card(site, state, visible.item)) }
                }
            }
        }
        @if items.is_empty() {
            p.grid-empty { "Nothing to show here yet." }
        }
    }
}

fn render_media(site: &Site, item: &MediaItem, alt: &str) -> Markup {
    let src = site.routes.asset_url(&item.url);
    html! {
        @match item.kind {
            MediaKind::Image => { img src=(src) alt=(alt) loading="lazy"; }
            MediaKind::Video => { video src=(src) muted loop playsinline autoplay preload="metadata" {} }
        }
    }
}

fn render_photo_card(site: &Site, state: &ViewState, visible: &VisibleItem) -> Markup {
    let category = visible.category.unwrap_or_default();
    let heading = if state.photo_filter.is_all() {
        "Explore Category"
    } else {
        visible.item.title.as_str()
    };
    let target = state.click_target(Message::PhotoClicked {
        category: category.to_string(),
    });
    let body = html! {
        (render_media(site, visible.item, &visible.item.title))
        div.card-overlay {
            p.card-eyebrow { (format_label(category)) }
            h3 { (heading) }
        }
    };
    site.link(&target, "card photo-card", body)
}

fn render_video_card(site: &Site, state: &ViewState, visible: &VisibleItem) -> Markup {
    let item = visible.item;
    let category = visible.category.unwrap_or_default();
    let in_all = state.video_filter.is_all();
    let caption = match (in_all, &item.external_link) {
        (true, _) => "Explore Category",
        (false, Some(_)) => "Watch Video",
        (false, None) => "Local Content",
    };
    let target = state.click_target(Message::VideoClicked {
        category: category.to_string(),
        external_link: item.external_link.clone(),
    });
    let body = html! {
        div.video-frame {
            (render_media(site, item, ""))
            span.play-icon {}
            @if !in_all && item.external_link.is_some() {
                span.badge { "External Link" }
            }
        }
        h3 {
            @if in_all { (format_label(category)) } @else { (item.title) }
        }
        p.card-caption { (caption) }
    };
    site.link(&target, "card video-card", body)
}

fn render_reel_card(site: &Site, state: &ViewState, item: &MediaItem) -> Markup {
    let target = state.click_target(Message::ReelClicked {
        external_link: item.external_link.clone(),
    });
    let body = html! {
        (render_media(site, item, ""))
        @if item.external_link.is_some() {
            span.badge { "External Link" }
        }
        div.reel-caption {
            p.card-eyebrow { "Reel" }
            h3 { (item.title) }
        }
    };
    site.link(&target, "card reel-card", body)
}

fn render_about(site: &Site) -> Markup {
    let about = &site.config.about;
    html! {
        section.about id=(Anchor::About.id()) {
            div.about-inner {
                div.about-copy {
                    p.eyebrow { (about.eyebrow) }
                    h2 {
                        (about.heading)
                        br;
                        em.accent { (about.heading_accent) }
                    }
                    div.about-body { (PreEscaped(render_markdown(&about.body))) }
                    @if !about.stats.is_empty() {
                        div.stats {
                            @for stat in &about.stats {
                                div.stat {
                                    span.stat-value { (stat.value) }
                                    span.stat-label { (stat.label) }
                                }
                            }
                        }
                    }
                }
                div.about-image {
                    img src=(site.routes.asset_url(&site.catalog.intro_image)) alt=(about.image_alt) loading="lazy";
                }
            }
        }
    }
}

fn render_markdown(source: &str) -> String {
    let parser = Parser::new(source);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Client names scroll in a loop, so the list is rendered twice back to back.
fn render_clients(site: &Site) -> Markup {
    let clients = &site.config.clients;
    html! {
        section.clients id=(Anchor::Clients.id()) {
            p.eyebrow { (clients.heading) }
            div.client-strip {
                div.client-track {
                    @for _ in 0..2 {
                        @for name in &clients.names {
                            span.client { (name) }
                        }
                    }
                }
            }
        }
    }
}

fn render_footer(site: &Site) -> Markup {
    html! {
        footer.site-footer id=(Anchor::Contact.id()) {
            div.social {
                @for link in &site.config.social {
                    @if link.url.starts_with("mailto:") {
                        a href=(link.url) { (link.label) }
                    } @else {
                        a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.label) }
                    }
                }
            }
            p.copyright { "© " (site.year) " " (site.config.site.copyright) }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole single-page document for one view state.
fn render_page(site: &Site, state: &ViewState) -> Markup {
    let content = html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        (render_nav(site, state))
        (render_mobile_menu(site, state))
        (render_hero(site))
        (render_portfolio(site, state))
        (render_about(site))
        (render_clients(site))
        (render_footer(site))
    };
    base_document(&page_title(&site.config.site.title, state), &site.css, content)
}
