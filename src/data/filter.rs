use super::model::{BenchmarkDataset, Factor};

// ---------------------------------------------------------------------------
// Row filtering by factor value
// ---------------------------------------------------------------------------

/// Return indices of rows whose `factor` equals `value`, preserving row
/// order. An empty result is not an error; the caller decides whether an
/// empty chart is acceptable.
pub fn filtered_indices(dataset: &BenchmarkDataset, factor: Factor, value: u64) -> Vec<usize> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| factor.value_of(row) == value)
        .map(|(i, _)| i)
        .collect()
}
