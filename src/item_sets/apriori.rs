use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use super::{is_subset, sets_equal, sorted_items, Dataset, FrequentSets, ItemSet, ItemSetMiner};
use crate::errors::MiningError;

/// Level-wise Apriori search over an in-memory dataset.
///
/// Supports are recomputed by scanning every transaction with a linear membership
/// test; neither transactions nor itemsets are indexed.
#[derive(Debug, Clone)]
pub struct Apriori {
    dataset: Dataset,
    min_support: f64,
    transaction_len: usize,
    frequent_sets: FrequentSets,
}

impl Apriori {
    /// Fails on an empty dataset or a `min_support` outside `[0, 1]` (NaN included).
    pub fn new(dataset: Dataset, min_support: f64) -> Result<Self, MiningError> {
        if !(0.0..=1.0).contains(&min_support) {
            return Err(MiningError::InvalidMinSupport { value: min_support });
        }
        if dataset.is_empty() {
            return Err(MiningError::EmptyDataset);
        }

        let transaction_len = dataset.len();
        Ok(Self {
            dataset,
            min_support,
            transaction_len,
            frequent_sets: FrequentSets::new(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Number of transactions; the denominator of every support value.
    pub fn transaction_len(&self) -> usize {
        self.transaction_len
    }

    pub fn total_frequent_itemsets(&self) -> usize {
        self.frequent_sets.values().map(Vec::len).sum()
    }

    /// True when no itemset reached the threshold (or `mine` has not run yet).
    pub fn is_empty(&self) -> bool {
        self.frequent_sets.is_empty()
    }

    /// Number of transactions that contain every item of `itemset`.
    pub fn support_count(&self, itemset: &ItemSet) -> usize {
        self.dataset
            .iter()
            .filter(|transaction| is_subset(itemset, transaction))
            .count()
    }

    pub fn calculate_support(&self, itemset: &ItemSet) -> f64 {
        self.support_count(itemset) as f64 / self.transaction_len as f64
    }

    /// Singletons of every distinct item whose occurrence count meets the threshold,
    /// in canonical item order.
    ///
    /// An item repeated inside one transaction is counted once for that transaction.
    pub fn generate_initial_candidates(&self) -> Vec<ItemSet> {
        let mut item_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for transaction in &self.dataset {
            for (pos, item) in transaction.iter().enumerate() {
                if transaction[..pos].contains(item) {
                    continue;
                }
                *item_counts.entry(item.as_str()).or_default() += 1;
            }
        }

        item_counts
            .into_iter()
            .filter(|&(_, count)| count as f64 / self.transaction_len as f64 >= self.min_support)
            .map(|(item, _)| ItemSet::singleton(item))
            .collect()
    }

    /// Joins frequent `size`-itemsets into `size + 1` candidates.
    ///
    /// Two itemsets are joined when their canonical sequences share the first
    /// `size - 1` items and the last item of the first sorts strictly before the last
    /// item of the second. Inputs are put in canonical order first, so each candidate
    /// comes from exactly one pair and the output holds no duplicates. Candidates with
    /// an infrequent `size`-subset are dropped.
    pub fn generate_candidates(frequent: &[ItemSet], size: usize) -> Vec<ItemSet> {
        if size == 0 {
            return Vec::new();
        }

        let mut sequences: Vec<Vec<&String>> = frequent
            .iter()
            .filter(|set| set.len() == size)
            .map(sorted_items)
            .collect();
        sequences.sort();
        sequences.dedup();

        let mut candidates = Vec::new();
        for (i, first) in sequences.iter().enumerate() {
            for second in &sequences[i + 1..] {
                let joinable = first[..size - 1] == second[..size - 1]
                    && first[size - 1] < second[size - 1];
                if !joinable {
                    continue;
                }

                let candidate: ItemSet = first
                    .iter()
                    .copied()
                    .chain(std::iter::once(second[size - 1]))
                    .cloned()
                    .collect();

                if Self::is_valid_candidate(&candidate, frequent) {
                    candidates.push(candidate);
                } else {
                    trace!(%candidate, "pruned: infrequent subset");
                }
            }
        }
        candidates
    }

    /// Every subset obtained by removing exactly one item must be in `frequent`.
    pub fn is_valid_candidate(candidate: &ItemSet, frequent: &[ItemSet]) -> bool {
        candidate.iter().all(|item| {
            let subset = candidate.without(item);
            frequent.iter().any(|set| sets_equal(&subset, set))
        })
    }
}

impl ItemSetMiner for Apriori {
    fn mine(&mut self) {
        self.frequent_sets.clear();
        info!(
            transactions = self.transaction_len,
            min_support = self.min_support,
            "mining started"
        );

        let mut candidates = self.generate_initial_candidates();
        let mut k = 1;

        while !candidates.is_empty() {
            let candidate_count = candidates.len();
            let frequent: Vec<ItemSet> = candidates
                .into_iter()
                .filter(|candidate| self.calculate_support(candidate) >= self.min_support)
                .collect();

            debug!(
                level = k,
                candidates = candidate_count,
                frequent = frequent.len(),
                "level scanned"
            );
            if frequent.is_empty() {
                break;
            }

            // Level k is final before any k + 1 candidate is formed.
            candidates = Self::generate_candidates(&frequent, k);
            self.frequent_sets.insert(k, frequent);
            k += 1;
        }

        info!(
            levels = self.frequent_sets.len(),
            frequent_itemsets = self.total_frequent_itemsets(),
            "mining finished"
        );
    }

    fn frequent_sets(&self) -> &FrequentSets {
        &self.frequent_sets
    }
}
