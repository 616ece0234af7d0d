//! Content records and the media-reference union.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Publication status of a content record.
///
/// Backends disagree on casing ("Published", "PUBLISHED", "published"),
/// so deserialization folds case. Unrecognized labels decode as `Draft`,
/// the conservative reading: a record whose status we cannot interpret is
/// not treated as publicly visible.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    /// Parse a status label, folding case and surrounding whitespace.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "published" => ContentStatus::Published,
            "archived" => ContentStatus::Archived,
            _ => ContentStatus::Draft,
        }
    }

    pub fn is_published(self) -> bool {
        self == ContentStatus::Published
    }
}

impl<'de> Deserialize<'de> for ContentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(ContentStatus::parse(&label))
    }
}

/// A media reference as it appears in stored records.
///
/// Historical data holds either a bare string (URL, relative path, or
/// data URI) or an object carrying the value under `url`, `src`, or
/// `path`. Absence is modelled as `Option<MediaRef>` on the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MediaRef {
    Url(String),
    Object {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
}

impl MediaRef {
    /// The raw string value carried by this reference: the string itself,
    /// or the first non-empty of `url`, `src`, `path` for the object form.
    pub fn value(&self) -> Option<&str> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|v| !v.is_empty())
        }
        match self {
            MediaRef::Url(s) => Some(s.as_str()),
            MediaRef::Object { url, src, path } => {
                non_empty(url).or_else(|| non_empty(src)).or_else(|| non_empty(path))
            }
        }
    }
}

impl From<&str> for MediaRef {
    fn from(value: &str) -> Self {
        MediaRef::Url(value.to_string())
    }
}

/// The canonical content record consumed by every pipeline stage.
///
/// A record must be addressable by at least one of `slug` and `id`;
/// anything else is a data error surfaced by [`ContentRecord::is_addressable`],
/// never silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Opaque server-assigned identifier, stable across edits.
    #[serde(default)]
    pub id: String,

    /// Human-readable URL-safe identifier. Not guaranteed unique across
    /// historical data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default)]
    pub title: String,

    /// Free-text category label; compared through the category normalizer.
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub status: ContentStatus,

    pub created_at: DateTime<Utc>,

    /// Rich-text/HTML body.
    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<MediaRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<MediaRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaRef>,

    /// Secondary numeric/legacy identifier kept from migrated data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
}

impl ContentRecord {
    /// Create a minimal record for the given identifiers.
    pub fn new(id: &str, slug: Option<&str>, title: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            slug: slug.map(str::to_string),
            title: title.to_string(),
            category: category.to_string(),
            status: ContentStatus::Draft,
            created_at: Utc::now(),
            content: String::new(),
            banner_image: None,
            featured_image: None,
            image: None,
            legacy_id: None,
        }
    }

    /// Whether the record can be addressed by slug or id.
    ///
    /// Records failing this check are a data error: the scanners warn
    /// about them instead of matching against them.
    pub fn is_addressable(&self) -> bool {
        !self.id.trim().is_empty()
            || self.slug.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// One page of a paginated collection.
///
/// `items.len()` never exceeds the requested page size; a short page
/// signals the end of the collection even when `total_pages` claims
/// otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub items: Vec<ContentRecord>,
    pub page: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_folds_case_and_whitespace() {
        assert_eq!(ContentStatus::parse("Published"), ContentStatus::Published);
        assert_eq!(ContentStatus::parse(" ARCHIVED "), ContentStatus::Archived);
        assert_eq!(ContentStatus::parse("draft"), ContentStatus::Draft);
    }

    #[test]
    fn status_unrecognized_decodes_as_draft() {
        let status: ContentStatus = serde_json::from_str("\"in-review\"").unwrap();
        assert_eq!(status, ContentStatus::Draft);
    }

    #[test]
    fn media_ref_string_form() {
        let media: MediaRef = serde_json::from_str("\"/images/web.svg\"").unwrap();
        assert_eq!(media.value(), Some("/images/web.svg"));
    }

    #[test]
    fn media_ref_object_form_prefers_url_then_src_then_path() {
        let media: MediaRef =
            serde_json::from_str(r#"{"src": "a.webp", "path": "b.webp"}"#).unwrap();
        assert_eq!(media.value(), Some("a.webp"));

        let media: MediaRef = serde_json::from_str(r#"{"path": "b.webp"}"#).unwrap();
        assert_eq!(media.value(), Some("b.webp"));
    }

    #[test]
    fn media_ref_object_without_known_keys_has_no_value() {
        let media: MediaRef = serde_json::from_str(r#"{"href": "x.png"}"#).unwrap();
        assert_eq!(media.value(), None);
    }

    #[test]
    fn media_ref_object_skips_empty_strings() {
        let media: MediaRef =
            serde_json::from_str(r#"{"url": "", "src": "cover.webp"}"#).unwrap();
        assert_eq!(media.value(), Some("cover.webp"));
    }

    #[test]
    fn record_addressable_by_slug_or_id() {
        let by_id = ContentRecord::new("42", None, "t", "c");
        assert!(by_id.is_addressable());

        let by_slug = ContentRecord::new("", Some("a-slug"), "t", "c");
        assert!(by_slug.is_addressable());

        let neither = ContentRecord::new("  ", Some(" "), "t", "c");
        assert!(!neither.is_addressable());
    }

    #[test]
    fn record_serde_roundtrip() {
        let mut record = ContentRecord::new("7", Some("future-scope-of-sap"), "Future", "SAP");
        record.banner_image = Some(MediaRef::Url("/img/banner.webp".into()));

        let json = serde_json::to_string(&record).expect("serialize");
        let decoded: ContentRecord = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(record, decoded);
    }

    #[test]
    fn record_decodes_camel_case_wire_shape() {
        let json = r#"{
            "id": "12",
            "slug": "sap-s4hana",
            "title": "S/4HANA",
            "category": "SAP",
            "status": "Published",
            "createdAt": "2024-03-01T10:00:00Z",
            "content": "<p>body</p>",
            "bannerImage": {"url": "https://cdn.example.com/b.webp"}
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.slug.as_deref(), Some("sap-s4hana"));
        assert!(record.status.is_published());
        assert!(record.banner_image.is_some());
        assert!(record.legacy_id.is_none());
    }
}
