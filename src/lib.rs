//! Pattern mining tools.
//!
//! Frequent itemsets are discovered with the level-wise Apriori search: every level `k`
//! joins the frequent `k`-itemsets into `k + 1` candidates, drops candidates with an
//! infrequent subset, and keeps those whose support reaches the threshold.
//!
//! ```
//! use pate_apriori::{dataset, Apriori, ItemSetMiner};
//!
//! let mut miner = Apriori::new(dataset::example_dataset(), 0.4).unwrap();
//! miner.mine();
//!
//! assert_eq!(miner.frequent_sets()[&1].len(), 5);
//! assert_eq!(miner.total_frequent_itemsets(), 17);
//! ```

pub mod config;
pub mod convert;
pub mod dataset;
pub mod errors;
pub mod item_sets;
pub mod report;
pub mod tracing;

pub use item_sets::{Apriori, Dataset, FrequentSets, Item, ItemSet, ItemSetMiner, Transaction};
