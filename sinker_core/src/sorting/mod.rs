//! An in-place, comparator-driven bubble sort that reports what it is doing.
//!
//! # Example
//!
//! ```
//! use sinker_core::sorting::{BubbleSorter, Direction, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! let stats = BubbleSorter.sort_by_direction(&mut slice, Direction::Descending);
//! assert_eq!(vec![5, 4, 3, 2, 1], slice);
//! assert_eq!(stats.swaps, 8);
//! ```
//!
//! Directions coming from text (command lines, config values) go through [`sort_named`], which
//! refuses unknown names before the slice is touched:
//!
//! ```
//! use sinker_core::sorting::{sort_named, NoopObserver};
//!
//! let mut slice = [2, 1];
//! assert!(sort_named(&mut slice, "sideways", &mut NoopObserver).is_err());
//! assert_eq!(slice, [2, 1]);
//! ```

pub mod benchmark;
mod bubble_sorter;
mod direction;
mod observer;

pub use bubble_sorter::BubbleSorter;
pub use direction::{Comparator, Direction};
pub use observer::{
    ConsoleObserver, NoopObserver, Observer, ProgressObserver, RecordedEvent, Recorder, SortEvent,
    TracingObserver,
};

use crate::error::Result;

/// Counters collected over a single sort.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    /// Adjacent pairs compared.
    pub comparisons: usize,
    /// Adjacent pairs swapped.
    pub swaps: usize,
    /// Passes completed, including the final swap-free one.
    pub passes: usize,
}

/// The sorting algorithm must implement the trait `Sorter`.
///
/// The slice is reordered in place; nothing is allocated for the elements themselves.
pub trait Sorter<T>
where
    T: Ord,
{
    /// Sorts `slice` into `direction`, reporting every comparison and completed pass to
    /// `observer`.
    fn sort_with<O>(&self, slice: &mut [T], direction: Direction, observer: &mut O) -> SortStats
    where
        O: Observer<T> + ?Sized;

    /// Sorts `slice` in ascending order.
    fn sort(&self, slice: &mut [T]) -> SortStats {
        self.sort_with(slice, Direction::Ascending, &mut NoopObserver)
    }

    /// Sorts `slice` into `direction` without observing it.
    fn sort_by_direction(&self, slice: &mut [T], direction: Direction) -> SortStats {
        self.sort_with(slice, direction, &mut NoopObserver)
    }
}

/// Sorts `slice` with [`BubbleSorter`] in the direction named by `direction`.
///
/// The name is validated first, so an unknown direction leaves `slice` untouched and returns
/// [`Error::InvalidDirection`](crate::Error::InvalidDirection).
pub fn sort_named<T, O>(slice: &mut [T], direction: &str, observer: &mut O) -> Result<SortStats>
where
    T: Ord,
    O: Observer<T> + ?Sized,
{
    let direction = direction.parse::<Direction>()?;
    Ok(BubbleSorter.sort_with(slice, direction, observer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn sort_named_accepts_source_style_names() {
        let mut slice = [12, 4, 7, 2, 15, 7];
        sort_named(&mut slice, "ASC", &mut NoopObserver).unwrap();
        assert_eq!(slice, [2, 4, 7, 7, 12, 15]);

        sort_named(&mut slice, "DESC", &mut NoopObserver).unwrap();
        assert_eq!(slice, [15, 12, 7, 7, 4, 2]);
    }

    #[test]
    fn sort_named_rejects_before_touching_the_slice() {
        let mut slice = [3, 1, 2];
        let mut recorder = Recorder::new();

        let err = sort_named(&mut slice, "UP", &mut recorder).unwrap_err();

        assert_eq!(err, Error::InvalidDirection("UP".to_string()));
        assert_eq!(slice, [3, 1, 2]);
        assert!(recorder.events().is_empty());
    }
}
