use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts for the values of one column.
///
/// Ties are broken towards the smallest value, both for [`FrequencyTable::mode`]
/// and for the ordering of [`FrequencyTable::counts`].
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash + Ord> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: K) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, value: &K) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Distinct values, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    pub fn mode(&self) -> Option<&K> {
        self.counts
            .iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
            .map(|(value, _)| value)
    }

    /// Values with their counts, most frequent first.
    pub fn counts(&self) -> Vec<(&K, usize)> {
        let mut entries: Vec<(&K, usize)> = self
            .counts
            .iter()
            .map(|(value, count)| (value, *count))
            .collect();
        entries.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));
        entries
    }
}

impl<K: Eq + Hash + Ord> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for value in iter {
            table.push(value);
        }
        table
    }
}
