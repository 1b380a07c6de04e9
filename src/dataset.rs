//! Line-oriented transaction loading.
//!
//! One line is one transaction; whitespace-separated tokens are its items.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::errors::DatasetError;
use crate::item_sets::{Dataset, Transaction};

/// Basename used for result files when mining the built-in dataset.
pub const EXAMPLE_BASENAME: &str = "example_dataset";

/// Reads `path` fully before returning; a read failure yields no partial dataset.
///
/// Blank lines become empty transactions and still count toward the denominator.
/// Items are UTF-8 text; a line with invalid UTF-8 rejects the whole file.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let shown = path.display().to_string();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound {
            path: shown.clone(),
        },
        _ => DatasetError::Io {
            path: shown.clone(),
            source,
        },
    })?;

    let mut dataset = Dataset::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => DatasetError::InvalidUtf8 {
                path: shown.clone(),
                line: index + 1,
            },
            _ => DatasetError::Io {
                path: shown.clone(),
                source,
            },
        })?;
        dataset.push(parse_transaction(&line));
    }

    info!(path = %shown, transactions = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Parses an in-memory source with the same rules as [`load_dataset`].
pub fn parse_dataset(source: &str) -> Dataset {
    source.lines().map(parse_transaction).collect()
}

fn parse_transaction(line: &str) -> Transaction {
    line.split_whitespace().map(str::to_owned).collect()
}

/// Five market-basket transactions, mined when no dataset file is given.
pub fn example_dataset() -> Dataset {
    parse_dataset(
        "bread milk\n\
         bread diaper beer eggs\n\
         milk diaper beer cola\n\
         bread milk diaper beer\n\
         bread milk diaper cola\n",
    )
}

/// File stem of `path` without directory or extension, or [`EXAMPLE_BASENAME`].
pub fn output_basename(path: Option<&Path>) -> String {
    path.and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| EXAMPLE_BASENAME.to_string())
}
