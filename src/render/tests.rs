use super::*;
use crate::frequency::count_words;
use crate::tokenizer::tokenize;

fn tree_of(text: &str) -> WordTree {
    WordTree::build_from_freqs(&count_words(tokenize(text).words()))
}

#[test]
fn test_empty_tree() {
    let mut tree = WordTree::default();
    assert_eq!(render_tree(&mut tree), "");
}

#[test]
fn test_single_leaf() {
    let mut tree = tree_of("hello hello hello");
    assert_eq!(render_tree(&mut tree), "3 ( hello )\n");
    assert_eq!(tree.root().unwrap().level(), Some(0));
}

#[test]
fn test_two_leaves() {
    let mut tree = tree_of("a a b b");
    assert_eq!(
        render_tree(&mut tree),
        "4\n| \n+- 2 ( a )\n| \n+- 2 ( b )\n"
    );
}

#[test]
fn test_full_rendering() {
    let mut tree = tree_of("the cat sat on the mat the cat sat");
    let expected = "\
9
| 
+- 5
| | 
| +- 3 ( the )
| | 
| +- 2 ( cat )
| 
+- 4
| | 
| +- 2 ( sat )
| | 
| +- 2
| | | 
| | +- 1 ( on )
| | | 
| | +- 1 ( mat )
";
    assert_eq!(render_tree(&mut tree), expected);
}

#[test]
fn test_grandchildren_indentation() {
    let mut tree = tree_of("a a a a b b c d");
    let rendered = render_tree(&mut tree);

    for leaf in tree.leaves() {
        let line = format!("+- {}", leaf);
        let pos = rendered.lines().position(|l| l.ends_with(&line)).unwrap();
        let bar_line = rendered.lines().nth(pos - 1).unwrap();
        let depth = leaf.level().unwrap();
        assert_eq!(bar_line, BAR.repeat(depth));
    }

    // depth 2 nodes
    assert!(rendered.contains("| | \n| +- "));
}

#[test]
fn test_levels_assigned() {
    let mut tree = tree_of("the cat sat on the mat the cat sat");
    render_tree(&mut tree);

    let depths: Vec<(String, usize)> = tree
        .leaves()
        .map(|leaf| (leaf.content().unwrap().to_owned(), leaf.level().unwrap()))
        .collect();
    assert_eq!(
        depths,
        vec![
            ("the".to_owned(), 2),
            ("cat".to_owned(), 2),
            ("sat".to_owned(), 2),
            ("on".to_owned(), 3),
            ("mat".to_owned(), 3),
        ]
    );
}

#[test]
fn test_render_node_at_depth() {
    let mut node = TreeNode::leaf(7, "x");
    assert_eq!(render_node(&mut node, 2), "| | \n| +- 7 ( x )\n");
    assert_eq!(node.level(), Some(2));
}
