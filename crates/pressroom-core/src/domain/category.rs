//! Category label normalization.
//!
//! Free-text category labels differ cosmetically between records
//! ("S/4HANA" vs "S4HANA" vs " s4hana "). Comparison happens on a
//! normalized key so those labels count as one category.

/// Reduce a label to its comparison key: trim, lowercase, then strip
/// `/`, `-`, `_` and all whitespace.
pub fn category_key(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '/' | '-' | '_') && !c.is_whitespace())
        .collect()
}

/// Grouping key used when bucketing records by category.
///
/// Labels that strip to nothing ("—", "---") must not merge with each
/// other, so they fall back to their trimmed lower-cased raw form and
/// only group when raw-equal.
pub fn group_key(label: &str) -> String {
    let key = category_key(label);
    if key.is_empty() {
        label.trim().to_lowercase()
    } else {
        key
    }
}

/// Whether two labels name the same category.
///
/// True iff the raw trimmed lower-cased forms are equal, or the stripped
/// keys are equal and non-empty.
pub fn same_category(a: &str, b: &str) -> bool {
    if a.trim().to_lowercase() == b.trim().to_lowercase() {
        return true;
    }
    let key_a = category_key(a);
    !key_a.is_empty() && key_a == category_key(b)
}
