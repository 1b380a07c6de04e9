//! Tests for loading transaction files.

use pate_apriori::dataset::{load_dataset, output_basename};
use pate_apriori::errors::{DatasetError, PateErrorCode};
use pate_apriori::{Apriori, ItemSetMiner};

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn loads_one_transaction_per_line() {
    let dir = tempdir();
    let path = dir.path().join("retail.dat");
    std::fs::write(&path, "bread milk\nbread  diaper\tbeer\n").unwrap();

    let dataset = load_dataset(&path).unwrap();

    assert_eq!(
        dataset,
        vec![vec!["bread", "milk"], vec!["bread", "diaper", "beer"]]
    );
    assert_eq!(output_basename(Some(path.as_path())), "retail");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir();
    let path = dir.path().join("absent.dat");

    let err = load_dataset(&path).unwrap_err();

    assert!(matches!(err, DatasetError::NotFound { .. }));
    assert_eq!(err.error_code(), "DATASET_ERROR");
}

#[test]
fn directory_is_an_io_error() {
    let dir = tempdir();

    let err = load_dataset(dir.path()).unwrap_err();

    assert!(matches!(err, DatasetError::Io { .. } | DatasetError::NotFound { .. }));
}

#[test]
fn empty_file_cannot_be_mined() {
    let dir = tempdir();
    let path = dir.path().join("empty.dat");
    std::fs::write(&path, "").unwrap();

    let dataset = load_dataset(&path).unwrap();

    assert!(dataset.is_empty());
    assert!(Apriori::new(dataset, 0.4).is_err());
}

#[test]
fn loaded_file_mines_like_the_builtin_example() {
    let dir = tempdir();
    let path = dir.path().join("basket.txt");
    std::fs::write(
        &path,
        "bread milk\n\
         bread diaper beer eggs\n\
         milk diaper beer cola\n\
         bread milk diaper beer\n\
         bread milk diaper cola\n",
    )
    .unwrap();

    let mut from_file = Apriori::new(load_dataset(&path).unwrap(), 0.4).unwrap();
    let mut builtin = Apriori::new(pate_apriori::dataset::example_dataset(), 0.4).unwrap();
    from_file.mine();
    builtin.mine();

    assert_eq!(from_file.frequent_sets(), builtin.frequent_sets());
}

#[test]
fn invalid_utf8_rejects_the_whole_file() {
    let dir = tempdir();
    let path = dir.path().join("latin1.dat");
    std::fs::write(&path, b"bread milk\ncaf\xe9 bread\n").unwrap();

    let err = load_dataset(&path).unwrap_err();

    match err {
        DatasetError::InvalidUtf8 { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}
