//! Helpers shared by tests and benchmarks: random text generation, timing
//! and logger setup.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates `n_words` space-separated words drawn from a vocabulary of
/// `vocabulary_size` words (`w0`, `w1`, ...). Smaller indices are more
/// likely, so the frequencies are skewed as in natural text.
///
/// The same `seed` always gives the same text.
pub fn gen_text(n_words: usize, vocabulary_size: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let vocabulary_size = vocabulary_size.max(1);

    let words: Vec<String> = (0..n_words)
        .map(|_| {
            let bound = rng.gen_range(0..vocabulary_size);
            format!("w{}", rng.gen_range(0..=bound))
        })
        .collect();
    words.join(" ")
}

/// Collects the running time of several runs of the same experiment.
pub struct TimingQueries {
    timings: Vec<u128>,
    time: Instant,
    n_queries: usize,
}

impl TimingQueries {
    pub fn new(n_runs: usize, n_queries: usize) -> Self {
        Self {
            timings: Vec::with_capacity(n_runs),
            time: Instant::now(),
            n_queries: n_queries.max(1),
        }
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.time = Instant::now();
    }

    #[inline(always)]
    pub fn stop(&mut self) {
        self.timings.push(self.time.elapsed().as_nanos());
    }

    /// Returns minimum, maximum and average time per query in nanosecs.
    pub fn get(&self) -> (u128, u128, u128) {
        if self.timings.is_empty() {
            return (0, 0, 0);
        }
        let n_queries = self.n_queries as u128;
        let min = self.timings.iter().min().copied().unwrap_or(0);
        let max = self.timings.iter().max().copied().unwrap_or(0);
        let avg = self.timings.iter().sum::<u128>() / self.timings.len() as u128;
        (min / n_queries, max / n_queries, avg / n_queries)
    }
}

pub fn type_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Installs a terminal logger for tests. Does nothing if a logger is
/// already set.
pub fn init_test_logger() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
