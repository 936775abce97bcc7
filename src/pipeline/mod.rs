//! From raw text to the rendered tree.
//!
//! Every call builds its own frequency table and tree, so concurrent calls
//! never share state. When runs are triggered faster than they complete
//! (e.g., on every keystroke), a [`Sequencer`] lets the caller drop the
//! results of runs that have been superseded.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace};
use serde::Serialize;

use crate::frequency::{count_words, FrequencyTable};
use crate::huffman::WordTree;
use crate::render::render_tree;
use crate::tokenizer::Tokenizer;

/// Everything produced by a single run over a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub table: FrequencyTable,
    pub tree: WordTree,
    pub rendered: String,
}

/// Runs the whole pipeline on `text`.
///
/// Returns `None` if `text` is empty or made only of whitespace.
pub fn analyze(text: &str) -> Option<Analysis> {
    let tokenizer = Tokenizer::new(text.trim());
    if tokenizer.is_empty() {
        debug!("blank input, no tree built");
        return None;
    }

    let table = count_words(tokenizer.words());
    let mut tree = WordTree::build_from_freqs(&table);
    let rendered = render_tree(&mut tree);

    debug!(
        "built tree over {} words ({} distinct), depth {}",
        table.total(),
        table.len(),
        tree.depth()
    );

    Some(Analysis {
        table,
        tree,
        rendered,
    })
}

/// Returns the ASCII rendering of the merge tree of `text`, or an empty
/// string if `text` has no words.
///
/// # Examples
/// ```
/// assert_eq!(wordtree::render("   "), "");
/// assert_eq!(wordtree::render("Hi hi"), "2 ( hi )\n");
/// ```
pub fn render(text: &str) -> String {
    analyze(text)
        .map(|analysis| analysis.rendered)
        .unwrap_or_default()
}

/// Identifies a run started through [`Sequencer::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Last-write-wins bookkeeping for runs started from several threads.
///
/// # Examples
/// ```
/// use wordtree::pipeline::{render, Sequencer};
///
/// let sequencer = Sequencer::new();
/// let old = sequencer.begin();
/// let new = sequencer.begin();
///
/// assert_eq!(sequencer.publish(old, render("old text")), None);
/// assert!(sequencer.publish(new, render("new text")).is_some());
/// ```
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: AtomicU64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run. Every ticket handed out before becomes stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Checks whether `ticket` belongs to the most recently started run.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Hands `output` back if `ticket` is still current, drops it otherwise.
    pub fn publish<T>(&self, ticket: Ticket, output: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(output)
        } else {
            trace!("discarding stale run {:?}", ticket);
            None
        }
    }
}

#[cfg(test)]
mod tests;
