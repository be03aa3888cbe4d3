//! Plus-tag variant generator.
//!
//! Appends `+<counter>` for every value in an inclusive range, then `+<tag>` for
//! every caller-supplied tag. Output is unique and keeps first-seen order.

use indexmap::IndexSet;

use crate::domain::PlusParams;

/// Generate plus-tag variants of `local_part@domain`.
///
/// Counters come first in ascending order, then custom tags in the order given.
/// A tag that renders the same address as an earlier counter or tag is dropped.
#[must_use]
pub fn generate_plus_variants(local_part: &str, domain: &str, params: &PlusParams) -> Vec<String> {
    let (start, end) = params.bounds();
    let capacity = usize::try_from(params.max_results()).unwrap_or(usize::MAX).min(4096);
    let mut out = IndexSet::with_capacity(capacity);

    for i in start..=end {
        out.insert(format!("{local_part}+{i}@{domain}"));
    }

    for tag in params.custom_tags() {
        out.insert(format!("{local_part}+{tag}@{domain}"));
    }

    out.into_iter().collect()
}
