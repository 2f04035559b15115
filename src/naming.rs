//! Display names derived from the asset tree.
//!
//! Every human-facing string the site shows for an asset comes from a file
//! or directory name. There is no front-matter and no metadata file; the
//! filesystem is the only source.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `sunset_over-bay.jpg` | [`media_title`] | `sunset over bay` |
//! | `brand_films` | [`format_label`] | `Brand Films` |
//! | `Brand Films` | [`slugify`] | `brand-films` |

/// Title for a media file: the filename without its final extension, with
/// dashes and underscores turned into spaces.
///
/// - `"a-b_c.jpg"` → `"a b c"`
/// - `"clip.final.mp4"` → `"clip.final"` (only the last extension is dropped)
/// - `"README"` → `""` (no extension, nothing before it)
pub fn media_title(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => "",
    };
    stem.replace(['-', '_'], " ")
}

/// Display label for a category directory name.
///
/// Splits on underscores and upper-cases the first letter of each word:
/// `"brand_films"` → `"Brand Films"`. Dashes are left alone.
pub fn format_label(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const MAX_SLUG_LEN: usize = 80;

/// URL-safe directory name for a category page.
///
/// - Lower-cases ASCII letters
/// - Replaces anything other than ASCII alphanumerics with dashes
/// - Collapses consecutive dashes and strips them from both ends
/// - Truncates to `MAX_SLUG_LEN` characters at the last dash before the limit
///
/// A name with no usable characters becomes `"category"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut prev_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    let trimmed = slug.trim_end_matches('-');

    let truncated = if trimmed.len() <= MAX_SLUG_LEN {
        trimmed
    } else {
        let head = &trimmed[..MAX_SLUG_LEN];
        match head.rfind('-') {
            Some(pos) => &head[..pos],
            None => head,
        }
    };

    if truncated.is_empty() {
        "category".to_string()
    } else {
        truncated.to_string()
    }
}
