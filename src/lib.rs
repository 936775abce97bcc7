//! This library counts the words of a text and builds a binary merge tree over
//! their frequencies, in the style of a [Huffman tree](https://en.wikipedia.org/wiki/Huffman_coding).
//! The tree is then printed as an indented ASCII diagram.
//!
//! The pipeline has four stages:
//! - [`tokenizer`] lowercases the text and splits it on spaces;
//! - [`frequency`] counts the occurrences of each word, in first-seen order;
//! - [`huffman`] repeatedly merges the two least frequent nodes until one root is left;
//! - [`render`](mod@render) prints the tree, one node per line, left subtrees first.
//!
//! [`render()`] runs all of them on a string:
//!
//! ```
//! let rendered = wordtree::render("a a b");
//! assert_eq!(rendered, "3\n| \n+- 2 ( a )\n| \n+- 1 ( b )\n");
//! ```
//!
//! Every run builds fresh state, nothing is shared between calls. Ties
//! between equally frequent nodes are broken by the order of first appearance,
//! so the same text always produces the same tree.

pub mod frequency;
pub mod huffman;
pub mod perf_and_test_utils;
pub mod pipeline;
pub mod render;
pub mod tokenizer;

pub use frequency::FrequencyTable;
pub use huffman::{NodeKind, TreeNode, WordTree};
pub use pipeline::{analyze, render, Analysis, Sequencer};
pub use tokenizer::Tokenizer;
