use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Measurement – one row of the benchmark CSV
// ---------------------------------------------------------------------------

/// A single benchmark observation: one (array size, thread count)
/// configuration with the wall-clock time of each sorting algorithm.
///
/// Times are seconds and positive by contract; zero or negative values are
/// the caller's problem and surface as non-finite speedup ratios downstream.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Measurement {
    #[serde(rename = "ArraySize")]
    pub array_size: u64,
    #[serde(rename = "NumThreads")]
    pub num_threads: u64,
    /// Baseline: single-threaded `std::sort`.
    #[serde(rename = "StdSort")]
    pub std_sort: f64,
    #[serde(rename = "MinMaxQuicksort")]
    pub min_max_quicksort: f64,
    #[serde(rename = "GnuParallelSort")]
    pub gnu_parallel_sort: f64,
}

// ---------------------------------------------------------------------------
// Factor – the experimental dimension used for grouping / x-axis
// ---------------------------------------------------------------------------

/// The two experimental factors of the benchmark grid. A chart holds one
/// fixed as the group key while the other varies along the x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    ArraySize,
    NumThreads,
}

impl Factor {
    /// Value of this factor for a given row.
    pub fn value_of(&self, m: &Measurement) -> u64 {
        match self {
            Factor::ArraySize => m.array_size,
            Factor::NumThreads => m.num_threads,
        }
    }

    /// Full axis description.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Factor::ArraySize => "Array Size",
            Factor::NumThreads => "Number of Threads",
        }
    }

    /// Short form used in legend labels ("MinMaxQuicksort Size 1000").
    pub fn short_label(&self) -> &'static str {
        match self {
            Factor::ArraySize => "Size",
            Factor::NumThreads => "Threads",
        }
    }

    /// Sorted unique values of this factor across the dataset.
    pub fn unique_values<'a>(&self, dataset: &'a BenchmarkDataset) -> &'a BTreeSet<u64> {
        match self {
            Factor::ArraySize => &dataset.array_sizes,
            Factor::NumThreads => &dataset.thread_counts,
        }
    }
}

// ---------------------------------------------------------------------------
// BenchmarkDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed unique factor values.
/// Read-only after load; every chart pass shares it by reference.
#[derive(Debug, Clone)]
pub struct BenchmarkDataset {
    /// All measurements, in file order.
    pub rows: Vec<Measurement>,
    /// Sorted set of distinct array sizes present.
    pub array_sizes: BTreeSet<u64>,
    /// Sorted set of distinct thread counts present.
    pub thread_counts: BTreeSet<u64>,
}

impl BenchmarkDataset {
    /// Build factor indices from the loaded rows.
    pub fn from_rows(rows: Vec<Measurement>) -> Self {
        let mut array_sizes = BTreeSet::new();
        let mut thread_counts = BTreeSet::new();
        for row in &rows {
            array_sizes.insert(row.array_size);
            thread_counts.insert(row.num_threads);
        }
        BenchmarkDataset {
            rows,
            array_sizes,
            thread_counts,
        }
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
