use core_types::{FilterSelection, SalesRecord};

/// Applies the user's filter selection to the full record set.
///
/// A record is kept iff it passes every dimension test; a dimension with an
/// empty allowed-set imposes no constraint. Output order preserves input
/// order. There are no error conditions: an allowed value that never occurs
/// in the data simply matches nothing.
pub fn filter(records: &[SalesRecord], selection: &FilterSelection) -> Vec<SalesRecord> {
    let subset: Vec<SalesRecord> = records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect();

    tracing::debug!(
        total = records.len(),
        kept = subset.len(),
        "Applied filter selection."
    );
    subset
}
