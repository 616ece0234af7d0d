//! Media URL normalization.
//!
//! Converts the media-reference shapes found in stored records into
//! absolute, renderable URLs against a configured origin. Pure functions;
//! already-absolute URLs and data URIs pass through unchanged, which makes
//! normalization idempotent.

use crate::domain::record::{ContentRecord, MediaRef};

/// Strip trailing slashes from an origin and guarantee a scheme.
///
/// An origin without `http://`/`https://` is treated as a bare host and
/// prefixed with `http://`. Never fails.
pub fn sanitize_origin(origin: &str) -> String {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Normalize a media reference into a renderable URL.
///
/// - empty value → `None`
/// - `http://` / `https://` → unchanged
/// - `data:` → unchanged (inline payload, never prefixed)
/// - leading `/` → joined to the origin without a double slash
/// - anything else → treated as a relative path, joined with one slash
/// - object form → first non-empty of `url`, `src`, `path`, then the
///   string rules; no recognized key → `None`
pub fn normalize(reference: &MediaRef, origin: &str) -> Option<String> {
    normalize_value(reference.value()?, origin)
}

fn normalize_value(value: &str, origin: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.starts_with("http://") || value.starts_with("https://") || value.starts_with("data:")
    {
        return Some(value.to_string());
    }
    // Rooted and relative paths both end up joined with exactly one slash.
    let origin = sanitize_origin(origin);
    Some(format!("{origin}/{}", value.trim_start_matches('/')))
}

/// Normalize every media field on a record in place.
///
/// Applied to each record before it leaves the pipeline, so callers only
/// ever see renderable URLs (or `None`).
pub fn normalize_record_media(record: &mut ContentRecord, origin: &str) {
    for field in [
        &mut record.banner_image,
        &mut record.featured_image,
        &mut record.image,
    ] {
        *field = field
            .as_ref()
            .and_then(|media| normalize(media, origin))
            .map(MediaRef::Url);
    }
}
