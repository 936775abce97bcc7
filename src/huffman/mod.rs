//! Huffman-style merge trees over word frequencies.
//!
//! The tree is built greedily: the two least frequent nodes are merged into
//! a new internal node until a single root is left.

use std::fmt;

use log::trace;
use serde::Serialize;

use crate::frequency::FrequencyTable;

/// A node of a [`WordTree`].
///
/// A leaf holds a word and its occurrence count. An internal node owns
/// exactly two children and its occurrence is the sum of theirs.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    occurrence: u64,
    #[serde(flatten)]
    kind: NodeKind,
    #[serde(skip)]
    level: Option<usize>, // set by the last render, not part of the identity
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NodeKind {
    Leaf {
        content: String,
    },
    Internal {
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        self.occurrence == other.occurrence && self.kind == other.kind
    }
}

impl Eq for TreeNode {}

impl TreeNode {
    pub fn leaf(occurrence: u64, content: &str) -> Self {
        TreeNode {
            occurrence,
            kind: NodeKind::Leaf {
                content: content.to_owned(),
            },
            level: None,
        }
    }

    /// Builds the parent of `left` and `right`.
    pub fn internal_node(left: TreeNode, right: TreeNode) -> Self {
        TreeNode {
            occurrence: left.occurrence + right.occurrence,
            kind: NodeKind::Internal {
                left: Box::new(left),
                right: Box::new(right),
            },
            level: None,
        }
    }

    pub fn occurrence(&self) -> u64 {
        self.occurrence
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Returns the word of a leaf, `None` for internal nodes.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { content } => Some(content.as_str()),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Returns `(left, right)` for internal nodes, `None` for leaves.
    pub fn children(&self) -> Option<(&TreeNode, &TreeNode)> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left, right } => Some((left.as_ref(), right.as_ref())),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<(&mut TreeNode, &mut TreeNode)> {
        match &mut self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left, right } => Some((left.as_mut(), right.as_mut())),
        }
    }

    /// Returns the depth assigned to this node by the last render, if any.
    pub fn level(&self) -> Option<usize> {
        self.level
    }

    pub(crate) fn set_level(&mut self, level: usize) {
        self.level = Some(level);
    }
}

/// Writes `occurrence` for internal nodes and `occurrence ( content )` for leaves.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.occurrence)?;
        if let NodeKind::Leaf { content } = &self.kind {
            write!(f, " ( {} )", content)?;
        }
        Ok(())
    }
}

/// A merge tree with an optional root. The tree is empty when it was built
/// from an empty frequency table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordTree {
    root: Option<TreeNode>,
}

impl WordTree {
    /// Builds a `WordTree` from the given `freq_table`.
    ///
    /// Leaves are created in the table order. At every step the working stack
    /// is stably sorted by decreasing occurrence and the last two nodes are
    /// popped: the first one becomes the `right` child of the new node, the
    /// second one its `left` child. Ties are therefore resolved by the order
    /// the nodes had before the sort.
    ///
    /// # Examples
    /// ```
    /// use wordtree::frequency::FrequencyTable;
    /// use wordtree::huffman::WordTree;
    ///
    /// let table: FrequencyTable = ["a", "a", "b", "b"].into_iter().collect();
    /// let tree = WordTree::build_from_freqs(&table);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.occurrence(), 4);
    /// let (left, right) = root.children().unwrap();
    /// assert_eq!(left.content(), Some("a"));
    /// assert_eq!(right.content(), Some("b"));
    /// ```
    pub fn build_from_freqs(freq_table: &FrequencyTable) -> Self {
        let mut stack: Vec<TreeNode> = freq_table
            .iter()
            .map(|(word, occurrence)| TreeNode::leaf(occurrence, word))
            .collect();

        loop {
            // `sort_by` is stable, equal occurrences keep their current order
            stack.sort_by(|a, b| b.occurrence.cmp(&a.occurrence));

            let Some(right) = stack.pop() else {
                return WordTree { root: None };
            };
            let Some(left) = stack.pop() else {
                return WordTree { root: Some(right) };
            };

            trace!(
                "merging {} and {} ({} nodes left)",
                left,
                right,
                stack.len()
            );
            stack.push(TreeNode::internal_node(left, right));
        }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub(crate) fn root_mut(&mut self) -> Option<&mut TreeNode> {
        self.root.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the occurrence of the root, 0 for an empty tree.
    pub fn occurrence(&self) -> u64 {
        self.root.as_ref().map_or(0, TreeNode::occurrence)
    }

    /// Iterates over the leaves from left to right.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: self.root.iter().collect(),
        }
    }

    /// Returns the length of the longest root-to-leaf path. Both an empty
    /// tree and a single leaf have depth 0.
    pub fn depth(&self) -> usize {
        fn depth(node: &TreeNode) -> usize {
            match node.children() {
                Some((left, right)) => 1 + depth(left).max(depth(right)),
                None => 0,
            }
        }

        self.root.as_ref().map_or(0, depth)
    }

    /// Returns the sum over the leaves of `occurrence * depth`, i.e., the total
    /// length of the text if every word were replaced by its root-to-leaf path.
    pub fn weighted_path_length(&self) -> u64 {
        fn collect(node: &TreeNode, depth: u64) -> u64 {
            match node.children() {
                Some((left, right)) => collect(left, depth + 1) + collect(right, depth + 1),
                None => node.occurrence * depth,
            }
        }

        self.root.as_ref().map_or(0, |root| collect(root, 0))
    }
}

/// Iterator over the leaves of a [`WordTree`], see [`WordTree::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
                None => return Some(node),
            }
        }
        None
    }
}
