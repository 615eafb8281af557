// ============================================================
// Layer 3 — Frequency Map
// ============================================================
// How many times each value of the stratify column occurs in
// the whole dataset. Built by the counting pass, read by the
// quota allocator.
//
// A BTreeMap keeps categories sorted so plans and reports come
// out in the same order on every run.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `category`.
    pub fn observe(&mut self, category: &str) {
        // Avoid allocating a key for categories already seen
        if let Some(n) = self.counts.get_mut(category) {
            *n += 1;
        } else {
            self.counts.insert(category.to_string(), 1);
        }
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.counts.get(category).copied()
    }

    /// Sum of all counts, i.e. the number of data rows.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Categories that occur exactly once, in sorted order.
    pub fn single_entry_categories(&self) -> Vec<String> {
        self.counts
            .iter()
            .filter(|&(_, &n)| n == 1)
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &n)| (k.as_str(), n))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for category in iter {
            map.observe(category.as_ref());
        }
        map
    }
}
