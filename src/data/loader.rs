use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{BenchmarkDataset, Measurement};

/// Columns that must appear in the header row. Order in the file does not
/// matter and extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "ArraySize",
    "NumThreads",
    "StdSort",
    "MinMaxQuicksort",
    "GnuParallelSort",
];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Fatal load failures. There is no recovery path: callers propagate these
/// to the process boundary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file is missing or unreadable.
    #[error("failed to open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the header row failed.
    #[error("failed to read CSV header")]
    Header(#[source] csv::Error),
    /// A required column is absent from the header.
    #[error("missing required column '{0}' in CSV header")]
    MissingColumn(&'static str),
    /// A data row could not be parsed into a [`Measurement`].
    #[error("CSV row {row}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the benchmark dataset from a comma-delimited file.
///
/// Expected layout: a header row containing at least the
/// [`REQUIRED_COLUMNS`], then one [`Measurement`] per line. An empty data
/// section yields an empty dataset, not an error.
pub fn load_csv(path: &Path) -> Result<BenchmarkDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<Measurement>().enumerate() {
        // row_no 0 is the first data line, i.e. file line 2.
        let row = result.map_err(|source| LoadError::Malformed {
            row: row_no + 2,
            source,
        })?;
        rows.push(row);
    }

    Ok(BenchmarkDataset::from_rows(rows))
}
