//! Resolve a post against a running backend and print its bundle.
//!
//! ```text
//! PRESSROOM_API_URL=http://localhost:5000/api \
//!     cargo run -p pressroom-rest --example fetch_posts -- future-scope-of-sap
//! ```

use std::sync::Arc;

use anyhow::Result;
use pressroom_core::{init_tracing, CancelToken, ContentResolver, EngineConfig};
use pressroom_rest::RestContentSource;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(false, Level::INFO);

    let identifier = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "welcome".to_string());

    let source = Arc::new(RestContentSource::from_env());
    let resolver = ContentResolver::new(source, Vec::new(), EngineConfig::from_env());

    let bundle = resolver
        .resolve_bundle(&identifier, &CancelToken::new())
        .await;

    match &bundle.resolution.record {
        Some(record) => println!(
            "{} [{}] via {}",
            record.title,
            record.category,
            bundle.resolution.source.as_str()
        ),
        None => println!("{identifier}: not found"),
    }

    println!("related: {}", bundle.related.len());
    for count in &bundle.categories {
        println!("  {:>4}  {}", count.count, count.label);
    }

    Ok(())
}
