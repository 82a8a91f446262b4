/*!
The word-frequency accumulator.
*/
use std::collections::{hash_map, HashMap};

use crate::WordSink;

/**
Maps each distinct word to the number of times it has been seen.

Words are compared exactly; there's no case folding or normalization,
and the empty string is a word like any other.

```
use wordfreq::FrequencyTable;

let mut t = FrequencyTable::new();
for w in ["a", "", "b", "a"] {
    t.increment(w);
}
assert_eq!(t.distinct_count(), 3);
assert_eq!(t.total_count(), 4);
assert_eq!(t.count("a"), Some(2));
assert_eq!(t.count(""), Some(1));
```
*/
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`. Only allocates the first time
    /// a given word shows up.
    pub fn increment(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Number of distinct words seen.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, which is the number of times
    /// [`FrequencyTable::increment`] has been called.
    pub fn total_count(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

impl WordSink for FrequencyTable {
    fn word(&mut self, word: &str) {
        self.increment(word);
    }
}

impl WordSink for &mut FrequencyTable {
    fn word(&mut self, word: &str) {
        self.increment(word);
    }
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(w, n)| (w.as_str(), *n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
