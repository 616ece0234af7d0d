//! Contract tests for the resolution fallback chain.
//!
//! These verify the behavioral contracts of `ContentResolver` using the
//! in-memory fakes. Any conforming source implementation gets the same
//! behavior.

use std::sync::Arc;

use pressroom_core::fakes::MemorySource;
use pressroom_core::{
    CancelToken, ContentRecord, ContentResolver, EngineConfig, MediaRef, ResolutionSource,
};

fn record(id: &str, slug: &str, category: &str) -> ContentRecord {
    ContentRecord::new(id, Some(slug), slug, category)
}

fn config() -> EngineConfig {
    EngineConfig::new("http://localhost:5000")
        .with_page_size(100)
        .with_max_pages(10)
        .with_related_limit(3)
}

fn dataset(count: usize, category: &str) -> Vec<ContentRecord> {
    (1..=count)
        .map(|n| record(&n.to_string(), &format!("post-{n}"), category))
        .collect()
}

fn resolver(source: MemorySource, fallback: Vec<ContentRecord>) -> (ContentResolver, Arc<MemorySource>) {
    let source = Arc::new(source);
    let resolver = ContentResolver::new(source.clone(), fallback, config());
    (resolver, source)
}

// ===========================================================================
// Fallback chain
// ===========================================================================

#[tokio::test]
async fn direct_hit_never_walks_the_collection() {
    let (resolver, source) = resolver(MemorySource::new(dataset(5, "SAP")), Vec::new());

    let result = resolver.resolve("post-3", &CancelToken::new()).await;

    assert_eq!(result.source, ResolutionSource::Direct);
    assert_eq!(result.record.unwrap().slug.as_deref(), Some("post-3"));
    // Fallback monotonicity: a direct hit issues zero page fetches.
    assert!(source.page_requests().is_empty());
}

#[tokio::test]
async fn full_scan_finds_record_after_exact_page_walk() {
    // 250 records across 3 pages of 100; the target sits on page 3.
    let mut records = dataset(250, "SAP");
    records[249] = record("250", "future-scope-of-sap", "SAP");
    let (resolver, source) = resolver(MemorySource::new(records).failing_direct(), Vec::new());

    let result = resolver
        .resolve("future-scope-of-sap", &CancelToken::new())
        .await;

    assert_eq!(result.source, ResolutionSource::FullScan);
    assert_eq!(
        result.record.unwrap().slug.as_deref(),
        Some("future-scope-of-sap")
    );
    assert_eq!(source.page_requests(), vec![1, 2, 3]);
}

#[tokio::test]
async fn direct_error_is_swallowed_and_chain_proceeds() {
    let (resolver, source) = resolver(MemorySource::new(dataset(5, "SAP")).failing_direct(), Vec::new());

    let result = resolver.resolve("post-2", &CancelToken::new()).await;

    assert_eq!(result.source, ResolutionSource::FullScan);
    assert_eq!(source.direct_requests(), vec!["post-2".to_string()]);
}

#[tokio::test]
async fn failed_page_falls_through_to_static_dataset() {
    // Target on page 3, but page 2 fails: the walk keeps page 1 only and
    // the chain falls through to the static dataset.
    let mut records = dataset(250, "SAP");
    records[249] = record("250", "future-scope-of-sap", "SAP");
    let source = MemorySource::new(records)
        .failing_direct()
        .failing_page(2);
    let fallback = vec![record("9000", "future-scope-of-sap", "SAP")];
    let (resolver, source) = resolver(source, fallback);

    let result = resolver
        .resolve("future-scope-of-sap", &CancelToken::new())
        .await;

    assert_eq!(result.source, ResolutionSource::StaticFallback);
    assert_eq!(result.record.unwrap().id, "9000");
    assert_eq!(source.page_requests(), vec![1, 2]);
}

#[tokio::test]
async fn exhausted_chain_returns_not_found_without_error() {
    let (resolver, _) = resolver(
        MemorySource::new(dataset(5, "SAP")).failing_direct(),
        vec![record("1", "static-post", "SAP")],
    );

    let result = resolver.resolve("no-such-slug", &CancelToken::new()).await;

    assert!(result.record.is_none());
    assert_eq!(result.source, ResolutionSource::NotFound);
}

#[tokio::test]
async fn legacy_id_resolves_through_full_scan() {
    let mut records = dataset(5, "SAP");
    records[3].legacy_id = Some("1017".to_string());
    let (resolver, _) = resolver(MemorySource::new(records).failing_direct(), Vec::new());

    let result = resolver.resolve("1017", &CancelToken::new()).await;

    assert_eq!(result.source, ResolutionSource::FullScan);
    assert_eq!(result.record.unwrap().slug.as_deref(), Some("post-4"));
}

#[tokio::test]
async fn duplicate_slugs_resolve_to_earliest_in_collection_order() {
    let mut records = dataset(5, "SAP");
    records[1] = record("101", "duplicated", "SAP");
    records[4] = record("102", "duplicated", "Cloud");
    let (resolver, _) = resolver(MemorySource::new(records).failing_direct(), Vec::new());

    let result = resolver.resolve("duplicated", &CancelToken::new()).await;

    assert_eq!(result.record.unwrap().id, "101");
}

// ===========================================================================
// Media normalization on the way out
// ===========================================================================

#[tokio::test]
async fn resolved_record_media_is_normalized() {
    let mut target = record("1", "with-media", "SAP");
    target.banner_image = Some(MediaRef::from("/images/banner.webp"));
    target.featured_image = Some(MediaRef::Object {
        url: Some("https://cdn.example.com/x.webp".to_string()),
        src: None,
        path: None,
    });
    let (resolver, _) = resolver(MemorySource::new(vec![target]), Vec::new());

    let result = resolver.resolve("with-media", &CancelToken::new()).await;

    let resolved = result.record.unwrap();
    assert_eq!(
        resolved.banner_image,
        Some(MediaRef::Url(
            "http://localhost:5000/images/banner.webp".to_string()
        ))
    );
    assert_eq!(
        resolved.featured_image,
        Some(MediaRef::Url("https://cdn.example.com/x.webp".to_string()))
    );
}

// ===========================================================================
// Bundles
// ===========================================================================

#[tokio::test]
async fn bundle_computes_related_and_counts_from_one_walk() {
    let mut records = dataset(6, "SAP");
    records[4] = record("5", "cloud-post", "Cloud");
    records[5] = record("6", "another-cloud", "cloud");
    let (resolver, source) = resolver(MemorySource::new(records), Vec::new());

    let bundle = resolver.resolve_bundle("post-2", &CancelToken::new()).await;

    assert_eq!(bundle.resolution.source, ResolutionSource::Direct);
    // Related: same category, self excluded, collection order.
    let slugs: Vec<&str> = bundle
        .related
        .iter()
        .filter_map(|r| r.slug.as_deref())
        .collect();
    assert_eq!(slugs, vec!["post-1", "post-3", "post-4"]);
    // Counts fold the case variants of "Cloud".
    assert_eq!(bundle.categories.len(), 2);
    assert_eq!(bundle.categories[0].label, "SAP");
    assert_eq!(bundle.categories[0].count, 4);
    assert_eq!(bundle.categories[1].count, 2);
    // One walk: 6 records fit one page of 100.
    assert_eq!(source.page_requests(), vec![1]);
}

#[tokio::test]
async fn bundle_for_unresolved_identifier_still_counts_categories() {
    let (resolver, _) = resolver(MemorySource::new(dataset(4, "SAP")).failing_direct(), Vec::new());

    let bundle = resolver
        .resolve_bundle("missing-slug", &CancelToken::new())
        .await;

    assert!(bundle.resolution.record.is_none());
    assert!(bundle.related.is_empty());
    assert_eq!(bundle.categories.len(), 1);
    assert_eq!(bundle.categories[0].count, 4);
}

#[tokio::test]
async fn bundle_related_never_includes_the_resolved_record() {
    let (resolver, _) = resolver(MemorySource::new(dataset(8, "SAP")), Vec::new());

    for n in 1..=8 {
        let identifier = format!("post-{n}");
        let bundle = resolver.resolve_bundle(&identifier, &CancelToken::new()).await;
        let resolved = bundle.resolution.record.expect("resolved");
        assert!(bundle
            .related
            .iter()
            .all(|related| related.id != resolved.id));
    }
}
