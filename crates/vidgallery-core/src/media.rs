//! Pure filename helpers: content-type resolution, title derivation, and
//! thumbnail naming. No I/O and no failure modes; every function is total.

/// Fallback when the extension is missing or unrecognized.
pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// Resolve a MIME type from the filename extension.
///
/// Fixed table, case-insensitive. Unknown or missing extensions fall back to
/// `video/mp4`.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return DEFAULT_CONTENT_TYPE,
    };
    match ext.as_str() {
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// Derive a display title from a filename by stripping the last extension.
///
/// A filename without an extension (or one that is nothing but an extension,
/// like `.hidden`) is used verbatim so the title is never empty.
pub fn title_for(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => &filename[..idx],
        _ => filename,
    }
}

/// Deterministic thumbnail pathname for a video: `{base}-thumb.jpg`.
pub fn thumbnail_pathname_for(filename: &str) -> String {
    format!("{}-thumb.jpg", title_for(filename))
}
