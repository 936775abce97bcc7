//! Word occurrence counting.
//!
//! A [`FrequencyTable`] remembers the order in which words were first seen.
//! The tree builder starts from that order, so it decides how ties between
//! equally frequent words are broken.

use std::collections::HashMap;

use serde::ser::{Serialize, Serializer};

/// Pairs `word: occurrence` in first-seen order.
///
/// Every count is at least 1 and no word appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>, // word -> position in `entries`
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `word`, inserting it at the end of the
    /// table if it is new.
    pub fn add_word(&mut self, word: &str) {
        if let Some(&pos) = self.index.get(word) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(word.to_owned(), self.entries.len());
            self.entries.push((word.to_owned(), 1));
        }
    }

    /// Returns the number of occurrences of `word`, `None` if it was never seen.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&pos| self.entries[pos].1)
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no word has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of all the occurrences, i.e., the number of words counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, occurrence)| occurrence).sum()
    }

    /// Iterates over `(word, occurrence)` pairs in first-seen order.
    ///
    /// # Examples
    /// ```
    /// use wordtree::frequency::FrequencyTable;
    ///
    /// let table: FrequencyTable = ["b", "a", "b"].into_iter().collect();
    /// let pairs: Vec<(&str, u64)> = table.iter().collect();
    /// assert_eq!(pairs, vec![("b", 2), ("a", 1)]);
    /// ```
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(word, occurrence)| (word.as_str(), *occurrence))
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.add_word(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

// Serialized as a map, keeping first-seen order.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Returns a frequency table of the words in `words`.
pub fn count_words<'a, I>(words: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().collect()
}
