//! # Studio Folio
//!
//! A static site generator for photography and videography studio
//! portfolios. The asset tree is the data source: folders under
//! `photography/` and `videography/` become filterable categories, files
//! under `reels/` become reels, a `.txt` file next to a video holds its
//! external link, and the first image under `intro/` illustrates the about
//! section.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      public/   →  manifest.json    (asset tree → catalog + config)
//! 2. Generate  manifest  →  dist/            (one page per portfolio view)
//! ```
//!
//! The single-page site is interactive: tabs, category filters and cards
//! change what the portfolio grid shows. That behaviour lives in a pure
//! state machine ([`view`]), and the generate stage pre-renders every state
//! it can reach, linking states together with plain anchors. The output is
//! static HTML with a few lines of vanilla JavaScript for scroll effects.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: discovers assets and indexes them into the catalog |
//! | [`generate`] | Stage 2: renders every reachable view with Maud |
//! | [`catalog`] | Immutable catalog types shared between stages |
//! | [`view`] | Tab/filter state, transitions and visible-item derivation |
//! | [`config`] | `config.toml` loading, merging, validation and CSS generation |
//! | [`naming`] | Titles, labels and slugs derived from file and folder names |
//! | [`output`] | CLI output formatting for each stage |

pub mod catalog;
pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
