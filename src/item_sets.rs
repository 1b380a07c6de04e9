mod apriori;
pub use apriori::Apriori;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// An opaque token; the lexicographic order of `String` is the canonical item order.
pub type Item = String;

/// Items in source order. Duplicates are kept as read.
pub type Transaction = Vec<Item>;

pub type Dataset = Vec<Transaction>;

/// Frequent itemsets keyed by size, ascending from 1 with no gaps.
pub type FrequentSets = BTreeMap<usize, Vec<ItemSet>>;

/// A set of unique items.
///
/// Iteration always yields the canonical (sorted) sequence, so comparison and
/// printing are independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemSet(BTreeSet<Item>);

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(item: impl Into<Item>) -> Self {
        let mut set = Self::new();
        set.insert(item);
        set
    }

    /// Returns `false` if the item was already present.
    pub fn insert(&mut self, item: impl Into<Item>) -> bool {
        self.0.insert(item.into())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.0.iter()
    }

    /// A copy of this set with `item` removed.
    pub fn without(&self, item: &str) -> Self {
        self.iter().filter(|i| i.as_str() != item).cloned().collect()
    }
}

impl<S: Into<Item>> FromIterator<S> for ItemSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::collections::btree_set::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Canonical comma-joined form, e.g. `beer,bread,diaper`.
impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(item)?;
            first = false;
        }
        Ok(())
    }
}

/// A miner that owns its dataset and threshold and fills a [`FrequentSets`] map.
pub trait ItemSetMiner {
    /// Runs the search. Calling it again recomputes the same result.
    fn mine(&mut self);

    /// The result of the most recent [`ItemSetMiner::mine`]; empty before the first run.
    fn frequent_sets(&self) -> &FrequentSets;
}

/// The canonical sorted sequence of a set's items.
pub fn sorted_items(set: &ItemSet) -> Vec<&Item> {
    set.iter().collect()
}

/// Same cardinality and identical membership.
pub fn sets_equal(a: &ItemSet, b: &ItemSet) -> bool {
    a.len() == b.len() && a.iter().all(|item| b.contains(item))
}

/// Every item of `set` occurs somewhere in `transaction`.
///
/// Linear scan of the transaction per item; repeated items in the transaction are harmless.
pub fn is_subset(set: &ItemSet, transaction: &[Item]) -> bool {
    set.iter()
        .all(|item| transaction.iter().any(|candidate| candidate == item))
}
