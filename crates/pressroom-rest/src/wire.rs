//! Wire shapes for the JSON backend.
//!
//! The stored data predates any schema discipline: ids arrive as numbers
//! or strings, media references as bare strings or `{url|src|path}`
//! objects, and the page envelope spells its fields either way. Decoding
//! tolerates all of it; the one hard rule is that a record must carry a
//! slug or an id.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use pressroom_core::{ContentRecord, ContentStatus, MediaRef, PageResult};

use crate::error::{RestError, RestResult};

/// A post as the backend serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(default)]
    id: Option<Value>,

    #[serde(default)]
    slug: Option<String>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    category: Option<String>,

    #[serde(default)]
    status: Option<String>,

    #[serde(default, alias = "created_at")]
    created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    content: Option<String>,

    #[serde(default, alias = "banner_image")]
    banner_image: Option<MediaRef>,

    #[serde(default, alias = "featured_image")]
    featured_image: Option<MediaRef>,

    #[serde(default)]
    image: Option<MediaRef>,

    #[serde(default, alias = "legacy_id", alias = "postId")]
    legacy_id: Option<Value>,
}

/// Render a JSON id value (number or string) as the canonical string id.
fn id_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

impl PostDto {
    /// Convert into the canonical record shape.
    ///
    /// Fails with [`RestError::MissingIdentity`] when the post carries
    /// neither an id nor a slug: such a record is unresolvable and must
    /// surface as a data error rather than vanish from results.
    pub fn into_record(self) -> RestResult<ContentRecord> {
        let id = id_string(self.id).unwrap_or_default();
        let slug = self.slug.filter(|s| !s.trim().is_empty());
        if id.is_empty() && slug.is_none() {
            return Err(RestError::MissingIdentity);
        }

        Ok(ContentRecord {
            id,
            slug,
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .map(ContentStatus::parse)
                .unwrap_or_default(),
            created_at: self.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            content: self.content.unwrap_or_default(),
            banner_image: self.banner_image,
            featured_image: self.featured_image,
            image: self.image,
            legacy_id: id_string(self.legacy_id),
        })
    }
}

/// Single-record responses arrive bare or wrapped in `{"data": ...}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PostEnvelope {
    Wrapped { data: PostDto },
    Bare(PostDto),
}

impl PostEnvelope {
    pub fn into_inner(self) -> PostDto {
        match self {
            PostEnvelope::Wrapped { data } => data,
            PostEnvelope::Bare(dto) => dto,
        }
    }
}

/// One page of the list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope {
    #[serde(default, alias = "items")]
    data: Vec<PostDto>,

    #[serde(default)]
    page: u32,

    #[serde(default, alias = "total_pages")]
    total_pages: u32,
}

impl ListEnvelope {
    /// Convert into a [`PageResult`], using `requested_page` when the
    /// server omits the echo. Any undecodable record fails the page.
    pub fn into_page_result(self, requested_page: u32) -> RestResult<PageResult> {
        let page = if self.page == 0 {
            requested_page
        } else {
            self.page
        };
        let items = self
            .data
            .into_iter()
            .map(PostDto::into_record)
            .collect::<RestResult<Vec<_>>>()?;

        Ok(PageResult {
            items,
            page,
            total_pages: self.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_decode_alike() {
        let by_number: PostDto =
            serde_json::from_str(r#"{"id": 42, "title": "n"}"#).unwrap();
        let by_string: PostDto =
            serde_json::from_str(r#"{"id": "42", "title": "s"}"#).unwrap();

        assert_eq!(by_number.into_record().unwrap().id, "42");
        assert_eq!(by_string.into_record().unwrap().id, "42");
    }

    #[test]
    fn missing_identity_is_a_decode_error() {
        let dto: PostDto = serde_json::from_str(r#"{"title": "orphan"}"#).unwrap();
        assert!(matches!(
            dto.into_record(),
            Err(RestError::MissingIdentity)
        ));
    }

    #[test]
    fn slug_only_records_are_accepted() {
        let dto: PostDto = serde_json::from_str(r#"{"slug": "hello"}"#).unwrap();
        let record = dto.into_record().unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.slug.as_deref(), Some("hello"));
    }

    #[test]
    fn status_and_media_shapes_decode() {
        let json = r#"{
            "id": 7,
            "slug": "sap-s4hana",
            "status": "PUBLISHED",
            "createdAt": "2024-03-01T10:00:00Z",
            "bannerImage": "/img/banner.webp",
            "featuredImage": {"src": "feature.webp"},
            "postId": 1017
        }"#;
        let record: ContentRecord = serde_json::from_str::<PostDto>(json)
            .unwrap()
            .into_record()
            .unwrap();

        assert!(record.status.is_published());
        assert_eq!(record.banner_image, Some(MediaRef::Url("/img/banner.webp".into())));
        assert!(matches!(record.featured_image, Some(MediaRef::Object { .. })));
        assert_eq!(record.legacy_id.as_deref(), Some("1017"));
    }

    #[test]
    fn post_envelope_accepts_bare_and_wrapped() {
        let bare: PostEnvelope = serde_json::from_str(r#"{"id": 1, "slug": "a"}"#).unwrap();
        let wrapped: PostEnvelope =
            serde_json::from_str(r#"{"data": {"id": 1, "slug": "a"}}"#).unwrap();

        assert_eq!(bare.into_inner().into_record().unwrap().id, "1");
        assert_eq!(wrapped.into_inner().into_record().unwrap().id, "1");
    }

    #[test]
    fn list_envelope_accepts_field_aliases() {
        let spelled_out: ListEnvelope = serde_json::from_str(
            r#"{"data": [{"id": 1}], "page": 2, "totalPages": 3}"#,
        )
        .unwrap();
        let snake: ListEnvelope = serde_json::from_str(
            r#"{"items": [{"id": 1}], "page": 2, "total_pages": 3}"#,
        )
        .unwrap();

        let a = spelled_out.into_page_result(2).unwrap();
        let b = snake.into_page_result(2).unwrap();
        assert_eq!(a.total_pages, 3);
        assert_eq!(b.total_pages, 3);
        assert_eq!(a.items.len(), 1);
    }

    #[test]
    fn omitted_page_echo_falls_back_to_requested() {
        let envelope: ListEnvelope =
            serde_json::from_str(r#"{"data": [{"id": 1}]}"#).unwrap();
        let result = envelope.into_page_result(4).unwrap();
        assert_eq!(result.page, 4);
    }

    #[test]
    fn orphan_record_fails_the_whole_page() {
        let envelope: ListEnvelope = serde_json::from_str(
            r#"{"data": [{"id": 1}, {"title": "orphan"}], "page": 1, "totalPages": 1}"#,
        )
        .unwrap();
        assert!(envelope.into_page_result(1).is_err());
    }
}
