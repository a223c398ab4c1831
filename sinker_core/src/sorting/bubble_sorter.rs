use tracing::debug;

use crate::sorting::{Direction, Observer, SortEvent, SortStats, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort) with early exit
///
/// # Usage
///```
/// use sinker_core::sorting::{BubbleSorter, Direction, Sorter};
///
/// let mut slice = [12, 4, 7, 2, 15, 7];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [2, 4, 7, 7, 12, 15]);
///
/// BubbleSorter.sort_by_direction(&mut slice, Direction::Descending);
/// assert_eq!(slice, [15, 12, 7, 7, 4, 2]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted.
///
/// Every pass carries the largest (or smallest, when sorting in
/// [`Direction::Descending`]) remaining element to the end of the
/// unsorted window, so each pass looks at one element less than the
/// one before it. A pass that swaps nothing proves the slice is
/// sorted and ends the sort right away. An already sorted slice of
/// `n` elements therefore costs a single pass of `n - 1` comparisons.
///
/// Equal neighbours are never swapped, which keeps equal elements in
/// their original relative order.
///
/// # Algorithm
///
/// ```
/// let mut slice = vec![1, 3, 2, 5, 4];
///
/// for limit in (1..=slice.len()).rev() {
///     let mut swapped = false;
///     for i in 0..limit - 1 {
///         if slice[i] > slice[i + 1] {
///             slice.swap(i, i + 1);
///             swapped = true;
///         }
///     }
///     if !swapped {
///         break;
///     }
/// }
/// # assert_eq!(slice, [1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    fn sort_with<O>(&self, slice: &mut [T], direction: Direction, observer: &mut O) -> SortStats
    where
        O: Observer<T> + ?Sized,
    {
        let mut stats = SortStats::default();

        let len = slice.len();
        if len <= 1 {
            return stats;
        }

        let out_of_order = direction.comparator::<T>();

        for limit in (1..=len).rev() {
            let mut swaps = 0;

            for i in 0..limit - 1 {
                observer.observe(SortEvent::Comparison {
                    snapshot: &*slice,
                    index: i,
                    left: &slice[i],
                    right: &slice[i + 1],
                });

                stats.comparisons += 1;
                if out_of_order(&slice[i], &slice[i + 1]) {
                    slice.swap(i, i + 1);
                    swaps += 1;
                }
            }

            stats.passes += 1;
            stats.swaps += swaps;
            observer.observe(SortEvent::PassComplete {
                pass: stats.passes,
                swaps,
            });

            if swaps == 0 {
                break;
            }
        }

        debug!(
            len,
            %direction,
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            passes = stats.passes,
            "bubble sort finished"
        );

        stats
    }
}
