// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::FileRecord;

/// Orders records newest first.
///
/// `sort_by` is stable, so records with identical modification times keep
/// their discovery order.
pub fn sort_by_recency(records: &mut [FileRecord]) {
    records.sort_by(compare_recency);
}

/// Descending comparison by modification time.
#[inline]
pub fn compare_recency(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.modified_at_raw().as_secs_f64().total_cmp(&a.modified_at_raw().as_secs_f64())
}
