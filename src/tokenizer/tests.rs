use super::*;

#[test]
fn test_lowercase_and_split() {
    let tokenizer = tokenize("The Cat sat ON the mat");
    let words: Vec<&str> = tokenizer.words().collect();
    assert_eq!(words, vec!["the", "cat", "sat", "on", "the", "mat"]);
}

#[test]
fn test_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("    ").is_empty());
    assert_eq!(tokenize("").words().count(), 0);
    assert!(!tokenize("a").is_empty());
}

#[test]
fn test_consecutive_spaces_are_skipped() {
    let tokenizer = tokenize(" a  b   c ");
    let words: Vec<&str> = tokenizer.words().collect();
    assert_eq!(words, vec!["a", "b", "c"]);
}

#[test]
fn test_only_space_separates() {
    let tokenizer = tokenize("one\ttwo\nthree, four.");
    let words: Vec<&str> = tokenizer.words().collect();
    assert_eq!(words, vec!["one\ttwo\nthree,", "four."]);
}

#[test]
fn test_restartable() {
    let tokenizer = tokenize("x y z");
    let first: Vec<&str> = tokenizer.words().collect();
    let second: Vec<&str> = tokenizer.words().collect();
    assert_eq!(first, second);

    let mut words = tokenizer.words();
    words.next();
    let rest = words.clone();
    assert_eq!(words.count(), 2);
    assert_eq!(rest.collect::<Vec<_>>(), vec!["y", "z"]);
}

#[test]
fn test_unicode_lowercase() {
    let tokenizer = tokenize("ÉCOLE Straße");
    let words: Vec<&str> = tokenizer.words().collect();
    assert_eq!(words, vec!["école", "straße"]);
}
