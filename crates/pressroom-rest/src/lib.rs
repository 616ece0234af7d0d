//! Pressroom REST: JSON/REST backend for the content engine
//!
//! This crate implements the engine's source seam over a JSON REST API.
//! It owns all transport and wire-shape concerns so the core stays free
//! of them: endpoint layout, status-code handling, and tolerance for the
//! inconsistent shapes historical data arrives in.
//!
//! ## Key Components
//!
//! - `RestContentSource`: `ContentSource` over `GET /posts/:id` and
//!   `GET /posts?page=&limit=&status=`
//! - `RestConfig`: base URL and list status filter
//! - `wire`: tolerant DTOs mapping backend JSON onto `ContentRecord`

mod client;
mod error;
pub mod wire;

pub use client::{RestConfig, RestContentSource};
pub use error::{RestError, RestResult};
