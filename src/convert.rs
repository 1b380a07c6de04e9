//! Conversion of raw benchmark datasets into one-transaction-per-line input.
//!
//! Every source row becomes one output line of space-separated items. An empty
//! row becomes an empty line, so row counts are preserved.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::DatasetError;

/// Attribute names of the comma-separated chess endgame rows, in column order.
pub const CHESS_ATTRIBUTES: [&str; 6] = [
    "wk_file", "wk_rank", "wr_file", "wr_rank", "bk_file", "bk_rank",
];

/// Layout of a raw dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceFormat {
    /// Comma-separated columns named by [`CHESS_ATTRIBUTES`]; item `<attr>_<value>`.
    /// Columns past the sixth are dropped.
    Chess,
    /// Whitespace-separated board cells; item `pos<column>_<value>`, `0` cells skipped.
    Connect,
    /// Whitespace-separated attribute values; item `attr_<value>`.
    Accident,
}

impl SourceFormat {
    /// Items for one raw row.
    pub fn convert_line(self, line: &str) -> Vec<String> {
        match self {
            Self::Chess => CHESS_ATTRIBUTES
                .iter()
                .zip(line.trim().split(','))
                .filter(|(_, value)| !value.is_empty())
                .map(|(attr, value)| format!("{attr}_{value}"))
                .collect(),
            Self::Connect => line
                .split_whitespace()
                .enumerate()
                .filter(|&(_, value)| value != "0")
                .map(|(index, value)| format!("pos{}_{value}", index + 1))
                .collect(),
            Self::Accident => line
                .split_whitespace()
                .map(|value| format!("attr_{value}"))
                .collect(),
        }
    }
}

/// Converts every row of `reader` into `writer`; returns the number of rows written.
pub fn convert<R: BufRead, W: Write>(
    format: SourceFormat,
    reader: R,
    mut writer: W,
) -> io::Result<usize> {
    let mut rows = 0;
    for line in reader.lines() {
        writeln!(writer, "{}", format.convert_line(&line?).join(" "))?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

/// Copies at most the first `rows` lines of `reader` into `writer`.
pub fn write_sample<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    rows: usize,
) -> io::Result<usize> {
    let mut written = 0;
    for line in reader.lines().take(rows) {
        writeln!(writer, "{}", line?)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// `<input stem>_processed.txt` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    with_stem_suffix(input, "_processed.txt")
}

/// `<output stem>_sample.txt` next to the converted file.
pub fn sample_path(output: &Path) -> PathBuf {
    with_stem_suffix(output, "_sample.txt")
}

fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}"))
}

/// Files produced by [`convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFiles {
    pub output: PathBuf,
    pub rows: usize,
    /// Present when a non-zero sample size was requested.
    pub sample: Option<PathBuf>,
}

/// Converts `input` into `output` (default [`default_output_path`]) and, for a
/// non-zero `sample`, also writes its first `sample` rows to [`sample_path`].
pub fn convert_file(
    format: SourceFormat,
    input: &Path,
    output: Option<&Path>,
    sample: Option<usize>,
) -> Result<ConvertedFiles, DatasetError> {
    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);

    let reader = BufReader::new(open(input)?);
    let writer = BufWriter::new(create(&output)?);
    let rows = convert(format, reader, writer).map_err(io_error(&output))?;
    info!(input = %input.display(), output = %output.display(), rows, "dataset converted");

    let sample = match sample {
        Some(limit) if limit > 0 => {
            let path = sample_path(&output);
            let reader = BufReader::new(open(&output)?);
            let writer = BufWriter::new(create(&path)?);
            let written = write_sample(reader, writer, limit).map_err(io_error(&path))?;
            info!(path = %path.display(), rows = written, "sample written");
            Some(path)
        }
        _ => None,
    };

    Ok(ConvertedFiles {
        output,
        rows,
        sample,
    })
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound {
            path: path.display().to_string(),
        },
        _ => io_error(path)(source),
    })
}

fn create(path: &Path) -> Result<File, DatasetError> {
    File::create(path).map_err(io_error(path))
}

fn io_error(path: &Path) -> impl Fn(io::Error) -> DatasetError + '_ {
    move |source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    }
}
