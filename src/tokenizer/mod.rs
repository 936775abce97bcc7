//! Splits text into lowercase words.
//!
//! Words are separated by the literal space character only. Tabs, newlines
//! and punctuation stay inside the word they touch.

use std::str::Split;

/// A lowercased copy of the input that can be walked any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    normalized: String,
}

impl Tokenizer {
    /// Lowercases `text` and keeps it for splitting.
    ///
    /// Leading and trailing whitespace is **not** removed here: the caller
    /// is expected to trim.
    ///
    /// # Examples
    /// ```
    /// use wordtree::tokenizer::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new("The cat  sat");
    /// let words: Vec<&str> = tokenizer.words().collect();
    /// assert_eq!(words, vec!["the", "cat", "sat"]);
    /// ```
    pub fn new(text: &str) -> Self {
        Self {
            normalized: text.to_lowercase(),
        }
    }

    /// Returns a fresh iterator over the words. Each call restarts from the
    /// beginning of the text.
    pub fn words(&self) -> Words<'_> {
        Words {
            inner: self.normalized.split(' '),
        }
    }

    /// Checks whether the text contains no words at all.
    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }
}

/// Iterator over the words of a [`Tokenizer`].
///
/// Runs of spaces would produce empty pieces; those are skipped.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    inner: Split<'a, char>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|word| !word.is_empty())
    }
}

/// Shorthand for [`Tokenizer::new`].
pub fn tokenize(text: &str) -> Tokenizer {
    Tokenizer::new(text)
}

#[cfg(test)]
mod tests;
