//! Utility helpers shared across the WASM frontend.

use unicode_segmentation::UnicodeSegmentation;

/// Shorten `text` to at most `max` grapheme clusters, appending `...` when
/// anything was cut. Used for table previews where the full text lives in
/// the cell tooltip.
pub fn truncate_preview(text: &str, max: usize) -> String {
    let mut graphemes = text.grapheme_indices(true);
    match graphemes.nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Append `?category=<value>` (percent-encoded) unless the category is
/// empty, which means "all categories".
pub fn with_category(path: &str, category: &str) -> String {
    if category.is_empty() {
        return path.to_string();
    }
    let encoded: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("category", category)
        .finish();
    format!("{}?{}", path, encoded)
}

/// Trim and fall back to `default` when nothing is left.
pub fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Short clock label (`14:05`) for a transcript timestamp.
pub fn clock_label(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.with_timezone(&chrono::Local).format("%H:%M").to_string()
}
