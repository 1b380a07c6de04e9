//! Tests for the CSV result tables.

use std::time::Duration;

use pate_apriori::errors::ReportError;
use pate_apriori::report::{write_csv_reports, ReportFiles, TimingMetrics};
use pate_apriori::{dataset, Apriori, ItemSetMiner};

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn mined() -> Apriori {
    let mut miner = Apriori::new(dataset::example_dataset(), 0.4).unwrap();
    miner.mine();
    miner
}

fn metrics() -> TimingMetrics {
    TimingMetrics {
        data_load: Duration::from_millis(125),
        processing: Duration::from_millis(500),
        total: Duration::from_millis(750),
    }
}

#[test]
fn writes_all_four_tables() {
    let dir = tempdir();
    let results = dir.path().join("results");
    let miner = mined();

    let files = write_csv_reports(&miner, &results, "basket", &metrics()).unwrap();

    assert_eq!(files, ReportFiles::new(&results, "basket"));
    assert!(files.summary.ends_with("basket_summary.csv"));

    let summary = std::fs::read_to_string(&files.summary).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "Size,Items,Support");
    assert_eq!(lines[1], "1,\"beer\",0.600000");
    assert_eq!(lines[2], "1,\"bread\",0.800000");
    assert!(lines.contains(&"2,\"bread,milk\",0.600000"));
    assert!(lines.contains(&"3,\"cola,diaper,milk\",0.400000"));
    assert_eq!(lines.len(), 1 + 17);

    let sizes = std::fs::read_to_string(&files.size_distribution).unwrap();
    assert_eq!(sizes, "Size,Count\n1,5\n2,8\n3,4\n");

    let support = std::fs::read_to_string(&files.support_distribution).unwrap();
    assert!(support.starts_with("ItemsetSize,Items,Support\n1,\"beer\",0.600000\n"));

    let performance = std::fs::read_to_string(&files.performance).unwrap();
    assert_eq!(
        performance,
        "Metric,Time(seconds)\n\
         Data Loading,0.125000\n\
         Processing,0.500000\n\
         Total,0.750000\n\
         Total Transactions,5\n\
         Total Frequent Itemsets,17\n"
    );
}

#[test]
fn output_is_identical_across_runs() {
    let dir = tempdir();
    let first = write_csv_reports(&mined(), &dir.path().join("a"), "x", &metrics()).unwrap();
    let second = write_csv_reports(&mined(), &dir.path().join("b"), "x", &metrics()).unwrap();

    assert_eq!(
        std::fs::read(&first.summary).unwrap(),
        std::fs::read(&second.summary).unwrap()
    );
}

#[test]
fn unwritable_directory_leaves_results_intact() {
    let dir = tempdir();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();
    let miner = mined();

    let err = write_csv_reports(&miner, &blocker, "basket", &metrics()).unwrap_err();

    assert!(matches!(err, ReportError::CreateDir { .. }));
    assert_eq!(miner.total_frequent_itemsets(), 17);
    assert_eq!(miner.frequent_sets().len(), 3);
}

#[test]
fn quotes_inside_items_are_escaped() {
    let dir = tempdir();
    let mut miner = Apriori::new(dataset::parse_dataset("say\"hi\" x\n"), 1.0).unwrap();
    miner.mine();

    let files = write_csv_reports(&miner, dir.path(), "quoted", &metrics()).unwrap();

    let summary = std::fs::read_to_string(&files.summary).unwrap();
    assert_eq!(
        summary,
        "Size,Items,Support\n\
         1,\"say\"\"hi\"\"\",1.000000\n\
         1,\"x\",1.000000\n\
         2,\"say\"\"hi\"\",x\",1.000000\n"
    );

    let support = std::fs::read_to_string(&files.support_distribution).unwrap();
    assert!(support.ends_with("2,\"say\"\"hi\"\",x\",1.000000\n"));
}
