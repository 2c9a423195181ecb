/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  benchmark_results.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → BenchmarkDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ BenchmarkDataset  │  Vec<Measurement>, unique factor values
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  select rows by factor value → filtered indices
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
