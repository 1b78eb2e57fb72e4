//! Session-long accumulation of generated posting rows.

use crate::domain::PostingRow;

pub struct GridService;

impl GridService {
    /// Appends a generated batch to the grid: pure concatenation, both input
    /// orders preserved, no dedup and no sort. The grid is append-only for
    /// the session; no edit or removal operation exists.
    pub fn append(existing: &[PostingRow], new_rows: &[PostingRow]) -> Vec<PostingRow> {
        let mut combined = Vec::with_capacity(existing.len() + new_rows.len());
        combined.extend_from_slice(existing);
        combined.extend_from_slice(new_rows);
        combined
    }
}
