use wordtree::perf_and_test_utils::{gen_text, type_of, TimingQueries};
use wordtree::pipeline::analyze;
use wordtree::tokenizer::Tokenizer;
use wordtree::{FrequencyTable, WordTree};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 100000)]
    n_words: usize,
    #[arg(short, long, default_value_t = 2000)]
    vocabulary_size: usize,
    #[arg(short = 'r', long, default_value_t = 5)]
    n_runs: usize,
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let text = gen_text(args.n_words, args.vocabulary_size, args.seed);
    let tokenizer = Tokenizer::new(&text);
    let table: FrequencyTable = tokenizer.words().collect();
    println!("Text length: {} words", table.total());
    println!("Distinct words: {}", table.len());

    let mut t = TimingQueries::new(args.n_runs, 1);
    let mut tree = WordTree::default();
    for _ in 0..args.n_runs {
        t.start();
        tree = WordTree::build_from_freqs(&table);
        t.stop();
    }
    let (t_min, t_max, t_avg) = t.get();
    println!(
        "[ds_name: {}, exp: build, n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, depth: {}, n_runs: {}]",
        type_of(&tree),
        table.len(),
        t_min,
        t_max,
        t_avg,
        tree.depth(),
        args.n_runs
    );

    let mut t = TimingQueries::new(args.n_runs, args.n_words);
    let mut rendered = 0;
    for _ in 0..args.n_runs {
        t.start();
        rendered += analyze(&text).map_or(0, |analysis| analysis.rendered.len());
        t.stop();
    }
    let (t_min, t_max, t_avg) = t.get();
    println!(
        "[exp: pipeline_per_word, n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, n_runs: {}]",
        args.n_words, t_min, t_max, t_avg, args.n_runs
    );

    println!("fake {}", rendered);
}
