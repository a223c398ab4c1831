//! # Introduction
//!
//! An in-place bubble sorter that stops as soon as a pass makes no swaps and lets the caller watch
//! every comparison it makes. See the [`sorting`] module for the library side; [`SortArgs`] and
//! [`BenchArgs`] are the command line front ends used by the `sinker` binary.

pub mod error;
pub mod sorting;

pub use error::{Error, Result};

use std::fmt::Debug;
use std::io::{self, Write};

use clap::Args;
use colored::Colorize;
use tracing::info;

use sorting::benchmark::{self, DEFAULT_SIZES};
use sorting::{
    BubbleSorter, ConsoleObserver, Direction, Observer, ProgressObserver, SortEvent, Sorter,
    TracingObserver,
};

/// Values sorted by `sinker sort --sample`.
pub const SAMPLE: [i64; 6] = [12, 4, 7, 2, 15, 7];

/// Sort a list of integers given on the command line. Install the `sinker` binary and run
/// `sinker sort --help` to see what options are available
#[derive(Debug, Args)]
pub struct SortArgs {
    /// The integers to sort.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Sort direction: asc, ascending, desc or descending.
    #[arg(short, long, default_value_t = Direction::Ascending)]
    direction: Direction,

    /// Sort the built-in sample list instead of VALUES.
    #[arg(long, conflicts_with = "values")]
    sample: bool,

    /// Print every comparison and every completed pass.
    #[arg(long)]
    trace: bool,

    /// Show a progress bar counting passes.
    #[arg(long)]
    progress: bool,
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let mut values = if self.sample {
            SAMPLE.to_vec()
        } else {
            self.values
        };

        let mut observer = CliObserver {
            tracing: TracingObserver,
            console: self.trace.then(ConsoleObserver::new),
            progress: self.progress.then(|| ProgressObserver::new(values.len())),
        };

        let stats = BubbleSorter.sort_with(&mut values, self.direction, &mut observer);
        if let Some(progress) = &observer.progress {
            progress.finish();
        }
        info!(
            direction = %self.direction,
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            passes = stats.passes,
            "sorted {} values",
            values.len()
        );

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", "----- RESULT -----".bold())?;
        writeln!(stdout, "{values:?}")?;
        Ok(())
    }
}

// Fans events out to whichever observers the command line switched on.
struct CliObserver {
    tracing: TracingObserver,
    console: Option<ConsoleObserver>,
    progress: Option<ProgressObserver>,
}

impl<T: Debug> Observer<T> for CliObserver {
    fn observe(&mut self, event: SortEvent<'_, T>) {
        self.tracing.observe(event);
        if let Some(console) = &mut self.console {
            console.observe(event);
        }
        if let Some(progress) = &mut self.progress {
            progress.observe(event);
        }
    }
}

/// Benchmark the bubble sorter on generated inputs and print the comparisons, swaps and passes it
/// needed.
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Skip list sizes larger than this.
    #[arg(long, default_value_t = 10_000)]
    max_len: usize,

    /// Seed for the random inputs. A fresh seed is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

impl BenchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let sizes: Vec<usize> = DEFAULT_SIZES
            .into_iter()
            .filter(|&n| n <= self.max_len)
            .collect();

        let results = benchmark::run_bench(&sizes, self.seed);
        benchmark::print_results(&results);

        if let Some(bad) = results.iter().find(|r| !r.is_consistent()) {
            anyhow::bail!(
                "comparison count mismatch for {} input of length {}: sorter reported {}, elements counted {}",
                bad.pattern,
                bad.len,
                bad.stats.comparisons,
                bad.counted
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        sort: SortArgs,
    }

    #[test]
    fn parses_values_and_direction() {
        let cli = TestCli::try_parse_from(["test", "-d", "DESC", "3", "-1", "2"]).unwrap();
        assert_eq!(cli.sort.direction, Direction::Descending);
        assert_eq!(cli.sort.values, vec![3, -1, 2]);
    }

    #[test]
    fn direction_defaults_to_ascending() {
        let cli = TestCli::try_parse_from(["test", "1"]).unwrap();
        assert_eq!(cli.sort.direction, Direction::Ascending);
        assert!(!cli.sort.sample);
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = TestCli::try_parse_from(["test", "--direction", "sideways", "1"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn sample_conflicts_with_values() {
        assert!(TestCli::try_parse_from(["test", "--sample", "1"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--sample"]).is_ok());
    }

    #[test]
    fn cli_observer_forwards_to_enabled_observers() {
        let mut observer = CliObserver {
            tracing: TracingObserver,
            console: None,
            progress: Some(ProgressObserver::hidden(SAMPLE.len())),
        };

        let mut values = SAMPLE;
        let stats = BubbleSorter.sort_with(&mut values, Direction::Ascending, &mut observer);

        assert_eq!(values, [2, 4, 7, 7, 12, 15]);
        assert_eq!(
            observer.progress.map(|p| p.position()),
            Some(stats.passes as u64)
        );
    }

    #[test]
    fn sort_runs_on_the_sample() {
        let cli = TestCli::try_parse_from(["test", "--sample", "-d", "desc"]).unwrap();
        cli.sort.run().unwrap();
    }

    #[test]
    fn bench_runs_small_sizes() {
        BenchArgs {
            max_len: 100,
            seed: Some(42),
        }
        .run()
        .unwrap();
    }
}
