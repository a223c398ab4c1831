use colored::Colorize;
use prettytable::{row, Table};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{cell::Cell, fmt, rc::Rc, time::Duration, time::Instant};
use tracing::{debug, info, warn};

use super::{BubbleSorter, Direction, SortStats, Sorter};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;
const TEN_THOUSAND: usize = 10_000;

/// Sizes the benchmark walks through unless told otherwise.
pub const DEFAULT_SIZES: [usize; 5] = [ZERO, ONE, HUNDRED, THOUSAND, TEN_THOUSAND];

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    // Shared by every element of one input, bumped on each comparison.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// Shape of a generated benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
    AllEqual,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Random,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::AllEqual,
    ];

    /// Generates `len` values following this pattern.
    pub fn generate<R: Rng>(self, len: usize, rng: &mut R) -> Vec<i32> {
        match self {
            Pattern::Random => (0..len).map(|_| rng.gen::<i32>()).collect(),
            Pattern::Ascending => (0..len as i32).collect(),
            Pattern::Descending => (0..len as i32).rev().collect(),
            Pattern::AllEqual => vec![7; len],
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Random => "random",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::AllEqual => "all equal",
        };
        f.write_str(name)
    }
}

/// Outcome of sorting one generated input.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub pattern: Pattern,
    pub len: usize,
    pub direction: Direction,
    pub stats: SortStats,
    /// Comparisons counted by the elements themselves.
    pub counted: usize,
    pub elapsed: Duration,
}

impl BenchResult {
    /// The sorter's own bookkeeping agrees with what the elements observed.
    pub fn is_consistent(&self) -> bool {
        self.counted == self.stats.comparisons
    }
}

/// Generates one input and sorts it with [`BubbleSorter`].
pub fn run_case<R: Rng>(
    pattern: Pattern,
    len: usize,
    direction: Direction,
    rng: &mut R,
) -> BenchResult {
    let counter = Rc::new(Cell::new(0));
    let mut values: Vec<_> = pattern
        .generate(len, rng)
        .into_iter()
        .map(|elem| SortEvaluator::new(elem, counter.clone()))
        .collect();

    let now = Instant::now();
    let stats = BubbleSorter.sort_by_direction(&mut values, direction);
    let elapsed = now.elapsed();

    let result = BenchResult {
        pattern,
        len,
        direction,
        stats,
        counted: counter.get(),
        elapsed,
    };
    debug!(?result, "benchmark case done");
    result
}

/// Runs every pattern in both directions for each of `sizes`.
///
/// A `seed` makes the random pattern reproducible.
pub fn run_bench(sizes: &[usize], seed: Option<u64>) -> Vec<BenchResult> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(?sizes, ?seed, "running bubble sort benchmark");

    let mut results = Vec::new();
    for &len in sizes {
        for pattern in Pattern::ALL {
            for direction in [Direction::Ascending, Direction::Descending] {
                let result = run_case(pattern, len, direction, &mut rng);
                if !result.is_consistent() {
                    warn!(
                        counted = result.counted,
                        reported = result.stats.comparisons,
                        "comparison counts disagree"
                    );
                }
                results.push(result);
            }
        }
    }
    results
}

/// Prints one table per list size.
pub fn print_results(results: &[BenchResult]) {
    let mut sizes: Vec<usize> = results.iter().map(|r| r.len).collect();
    sizes.dedup();

    for n in sizes {
        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Pattern".bold(),
            "Direction".bold(),
            "Comparisons Made".bold(),
            "Swaps".bold(),
            "Passes".bold(),
            "Time Taken".bold()
        ]);

        for result in results.iter().filter(|r| r.len == n) {
            let comparisons = if result.is_consistent() {
                result.stats.comparisons.to_string().normal()
            } else {
                format!("{} (counted {})", result.stats.comparisons, result.counted).red()
            };

            table.add_row(row![
                result.pattern.to_string(),
                result.direction.to_string(),
                comparisons,
                result.stats.swaps.to_string(),
                result.stats.passes.to_string(),
                format!("{:?}", result.elapsed)
            ]);
        }

        table.printstd();
        println!();
    }
}
