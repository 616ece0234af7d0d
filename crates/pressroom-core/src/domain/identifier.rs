//! Identifier matching against content records.
//!
//! A requested identifier may be a slug, a primary id, or a legacy id.
//! Matching is exact per field: no substring or prefix matching, so a
//! slug like "sap" never resolves to "sap-s4hana".

use crate::domain::record::ContentRecord;

/// Whether `record` is addressed by `identifier`.
///
/// Priority order, first hit wins:
/// 1. slug, case-insensitive
/// 2. primary id, strict string equality
/// 3. legacy id, strict string equality
pub fn matches_identifier(record: &ContentRecord, identifier: &str) -> bool {
    if let Some(slug) = record.slug.as_deref() {
        if !slug.is_empty() && slug.eq_ignore_ascii_case(identifier) {
            return true;
        }
    }
    if !record.id.is_empty() && record.id == identifier {
        return true;
    }
    matches!(record.legacy_id.as_deref(), Some(legacy) if legacy == identifier)
}

/// Record identity for self-exclusion: same non-empty id, or same slug
/// (case-insensitive). Distinct objects holding the same record compare
/// equal here.
pub fn is_same_record(a: &ContentRecord, b: &ContentRecord) -> bool {
    if !a.id.trim().is_empty() && a.id == b.id {
        return true;
    }
    match (a.slug.as_deref(), b.slug.as_deref()) {
        (Some(sa), Some(sb)) => !sa.is_empty() && sa.eq_ignore_ascii_case(sb),
        _ => false,
    }
}
