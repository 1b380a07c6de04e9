//! Tests for converting raw benchmark datasets.

use pate_apriori::convert::{convert_file, SourceFormat};
use pate_apriori::dataset::load_dataset;
use pate_apriori::errors::DatasetError;
use pate_apriori::{Apriori, ItemSetMiner};

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn chess_file_converts_beside_input_with_sample() {
    let dir = tempdir();
    let input = dir.path().join("krkopt.data");
    std::fs::write(&input, "a,1,b,3,c,2,draw\na,1,c,1,c,2,zero\na,1,c,1,d,1,zero\n").unwrap();

    let files = convert_file(SourceFormat::Chess, &input, None, Some(2)).unwrap();

    assert_eq!(files.output, dir.path().join("krkopt_processed.txt"));
    assert_eq!(files.rows, 3);
    assert_eq!(
        std::fs::read_to_string(&files.output).unwrap(),
        "wk_file_a wk_rank_1 wr_file_b wr_rank_3 bk_file_c bk_rank_2\n\
         wk_file_a wk_rank_1 wr_file_c wr_rank_1 bk_file_c bk_rank_2\n\
         wk_file_a wk_rank_1 wr_file_c wr_rank_1 bk_file_d bk_rank_1\n"
    );

    let sample = files.sample.unwrap();
    assert_eq!(sample, dir.path().join("krkopt_processed_sample.txt"));
    assert_eq!(std::fs::read_to_string(&sample).unwrap().lines().count(), 2);
}

#[test]
fn zero_sample_writes_no_sample_file() {
    let dir = tempdir();
    let input = dir.path().join("connect.data");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "b 0 x\n").unwrap();

    let files = convert_file(SourceFormat::Connect, &input, Some(output.as_path()), Some(0))
        .unwrap();

    assert_eq!(files.output, output);
    assert_eq!(files.sample, None);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "pos1_b pos3_x\n");
    assert!(!dir.path().join("out_sample.txt").exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempdir();
    let input = dir.path().join("absent.data");

    let err = convert_file(SourceFormat::Accident, &input, None, None).unwrap_err();

    assert!(matches!(err, DatasetError::NotFound { .. }));
}

#[test]
fn converted_file_is_minable() {
    let dir = tempdir();
    let input = dir.path().join("accidents.dat");
    std::fs::write(&input, "1 2 3\n1 2\n2 3\n1 2 4\n").unwrap();

    let files = convert_file(SourceFormat::Accident, &input, None, None).unwrap();
    let mut miner = Apriori::new(load_dataset(&files.output).unwrap(), 0.75).unwrap();
    miner.mine();

    let level_two: Vec<String> = miner.frequent_sets()[&2]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(level_two, ["attr_1,attr_2"]);
    assert_eq!(miner.total_frequent_itemsets(), 3);
}
