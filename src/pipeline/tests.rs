use std::sync::Arc;
use std::thread;

use super::*;
use crate::perf_and_test_utils::{gen_text, init_test_logger};

#[test]
fn test_blank_input() {
    init_test_logger();
    assert_eq!(render(""), "");
    assert_eq!(render("   "), "");
    assert_eq!(render("\n\t  \n"), "");
    assert!(analyze("  ").is_none());
}

#[test]
fn test_input_is_trimmed() {
    assert_eq!(render("  a a b b \n"), render("a a b b"));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(render("Word WORD word"), "3 ( word )\n");
}

#[test]
fn test_analysis() {
    let analysis = analyze("the cat sat on the mat the cat sat").unwrap();

    assert_eq!(analysis.table.total(), 9);
    assert_eq!(analysis.tree.occurrence(), 9);
    assert_eq!(analysis.rendered.lines().next(), Some("9"));
    assert_eq!(analysis.tree.root().unwrap().level(), Some(0));
}

#[test]
fn test_deterministic() {
    init_test_logger();
    let text = gen_text(5000, 300, 3);
    assert_eq!(render(&text), render(&text));
}

#[test]
fn test_runs_are_independent() {
    let first = render("x y z");
    render("completely different words here");
    assert_eq!(render("x y z"), first);
}

#[test]
fn test_sequencer_last_wins() {
    let sequencer = Sequencer::new();
    let first = sequencer.begin();
    assert!(sequencer.is_current(first));

    let second = sequencer.begin();
    assert!(!sequencer.is_current(first));
    assert!(second > first);

    assert_eq!(sequencer.publish(first, 1), None);
    assert_eq!(sequencer.publish(second, 2), Some(2));
}

#[test]
fn test_sequencer_threads() {
    let sequencer = Arc::new(Sequencer::new());
    let texts: Vec<String> = (0..8).map(|seed| gen_text(200, 20, seed)).collect();

    // every run starts before any of them publishes
    let tickets: Vec<Ticket> = texts.iter().map(|_| sequencer.begin()).collect();

    let handles: Vec<_> = texts
        .iter()
        .cloned()
        .zip(tickets)
        .map(|(text, ticket)| {
            let sequencer = Arc::clone(&sequencer);
            thread::spawn(move || sequencer.publish(ticket, render(&text)))
        })
        .collect();

    let published: Vec<String> = handles
        .into_iter()
        .filter_map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(published, vec![render(texts.last().unwrap())]);
}
