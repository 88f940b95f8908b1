use std::collections::HashMap;
use std::hash::Hash;

/// Frequency counter that remembers first-seen order
///
/// [`most_common`](Self::most_common) sorts by descending count; keys with equal counts keep
/// the order in which they were first counted.
#[derive(Debug, Clone)]
pub struct OrderedCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> OrderedCounter<K> {
    pub fn new() -> Self {
        Self { index: HashMap::new(), entries: Vec::new() }
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending count, ties in first-seen order, truncated to `limit` if given
    pub fn most_common(self, limit: Option<usize>) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        // sort_by is stable, which keeps first-seen order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }
}

impl<K: Eq + Hash + Clone> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for OrderedCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let counter: OrderedCounter<&str> = ["b", "a", "c", "a", "c", "d"].into_iter().collect();

        assert_eq!(counter.get(&"a"), 2);
        assert_eq!(counter.get(&"z"), 0);
        assert_eq!(counter.total(), 6);
        assert_eq!(counter.len(), 4);
        // a and c tie at 2: a was seen first. b and d tie at 1: b was seen first.
        assert_eq!(counter.most_common(None), vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn test_limit() {
        let counter: OrderedCounter<u32> = [1, 2, 2, 3, 3, 3].into_iter().collect();
        assert_eq!(counter.most_common(Some(2)), vec![(3, 3), (2, 2)]);
    }

    #[test]
    fn test_empty() {
        let counter: OrderedCounter<String> = OrderedCounter::new();
        assert!(counter.is_empty());
        assert!(counter.most_common(Some(5)).is_empty());
    }
}
