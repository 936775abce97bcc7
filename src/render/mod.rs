//! ASCII rendering of a [`WordTree`].
//!
//! A node at depth `d > 0` is printed on two lines:
//!
//! ```text
//! | | 
//! | +- 2 ( sat )
//! ```
//!
//! the first one made of `d` bars, the second one of `d - 1` bars followed by
//! the connector and the node text. The root is printed alone on the first
//! line. Left subtrees are printed before right subtrees.

use crate::huffman::{TreeNode, WordTree};

const BAR: &str = "| ";
const CONNECTOR: &str = "+- ";

/// Renders the whole tree, or returns an empty string for an empty tree.
///
/// Every visited node gets its level updated.
///
/// # Examples
/// ```
/// use wordtree::frequency::FrequencyTable;
/// use wordtree::huffman::WordTree;
/// use wordtree::render::render_tree;
///
/// let table: FrequencyTable = ["a", "a", "b"].into_iter().collect();
/// let mut tree = WordTree::build_from_freqs(&table);
///
/// assert_eq!(render_tree(&mut tree), "3\n| \n+- 2 ( a )\n| \n+- 1 ( b )\n");
/// ```
pub fn render_tree(tree: &mut WordTree) -> String {
    match tree.root_mut() {
        Some(root) => render_node(root, 0),
        None => String::new(),
    }
}

/// Renders the subtree rooted at `node` as if `node` were at depth `level`.
pub fn render_node(node: &mut TreeNode, level: usize) -> String {
    let mut output = String::new();
    write_node(&mut output, node, level);
    output
}

fn write_node(output: &mut String, node: &mut TreeNode, level: usize) {
    node.set_level(level);

    output.push_str(&BAR.repeat(level));
    if level > 0 {
        output.push('\n');
        output.push_str(&BAR.repeat(level - 1));
        output.push_str(CONNECTOR);
    }
    output.push_str(&node.to_string());
    output.push('\n');

    if let Some((left, right)) = node.children_mut() {
        write_node(output, left, level + 1);
        write_node(output, right, level + 1);
    }
}

#[cfg(test)]
mod tests;
