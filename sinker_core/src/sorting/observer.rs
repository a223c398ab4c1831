//! Observation hooks for a running sort.
//!
//! The sorter never prints or logs on its own. Instead it hands a [`SortEvent`] to an
//! [`Observer`] before every comparison and after every completed pass. What happens to those
//! events is entirely up to the caller: they can be discarded ([`NoopObserver`]), collected for
//! later inspection ([`Recorder`]), forwarded to `tracing` ([`TracingObserver`]), printed
//! ([`ConsoleObserver`]) or turned into a progress bar ([`ProgressObserver`]).
//!
//! Any closure taking a [`SortEvent`] is an observer too:
//!
//! ```
//! use sinker_core::sorting::{BubbleSorter, Direction, SortEvent, Sorter};
//!
//! let mut passes = Vec::new();
//! let mut slice = [3, 1, 2];
//! BubbleSorter.sort_with(&mut slice, Direction::Ascending, &mut |event: SortEvent<'_, i32>| {
//!     if let SortEvent::PassComplete { pass, .. } = event {
//!         passes.push(pass);
//!     }
//! });
//! assert_eq!(slice, [1, 2, 3]);
//! assert_eq!(passes, [1, 2]);
//! ```

use std::fmt::Debug;
use std::io::{self, Stdout, Write};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, trace, warn};

/// Something that happened while sorting.
///
/// Events only hold shared borrows of the sequence, so an observer can look at the data but can
/// never reorder it.
#[derive(Debug)]
pub enum SortEvent<'a, T> {
    /// Emitted right before `left` and `right` are compared.
    Comparison {
        /// The whole sequence as it is at this moment.
        snapshot: &'a [T],
        /// Position of `left` in `snapshot`. `right` sits at `index + 1`.
        index: usize,
        left: &'a T,
        right: &'a T,
    },

    /// Emitted after a pass over the unsorted window finished.
    PassComplete {
        /// 1-based number of the pass.
        pass: usize,
        /// Swaps performed during this pass. Zero means the sort is about to stop.
        swaps: usize,
    },
}

impl<T> Clone for SortEvent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortEvent<'_, T> {}

/// A sink for [`SortEvent`]s.
///
/// Observing is fire-and-forget: nothing an observer does can change the outcome of the sort.
pub trait Observer<T> {
    fn observe(&mut self, event: SortEvent<'_, T>);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(SortEvent<'_, T>),
{
    #[inline]
    fn observe(&mut self, event: SortEvent<'_, T>) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T> Observer<T> for NoopObserver {
    #[inline]
    fn observe(&mut self, _event: SortEvent<'_, T>) {}
}

/// An owned copy of a [`SortEvent`], as stored by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent<T> {
    Comparison {
        snapshot: Vec<T>,
        index: usize,
        left: T,
        right: T,
    },
    PassComplete {
        pass: usize,
        swaps: usize,
    },
}

impl<T: Clone> From<SortEvent<'_, T>> for RecordedEvent<T> {
    fn from(event: SortEvent<'_, T>) -> Self {
        match event {
            SortEvent::Comparison {
                snapshot,
                index,
                left,
                right,
            } => RecordedEvent::Comparison {
                snapshot: snapshot.to_vec(),
                index,
                left: left.clone(),
                right: right.clone(),
            },
            SortEvent::PassComplete { pass, swaps } => RecordedEvent::PassComplete { pass, swaps },
        }
    }
}

/// Keeps an owned copy of every event it sees.
///
/// ```
/// use sinker_core::sorting::{BubbleSorter, Direction, Recorder, Sorter};
///
/// let mut recorder = Recorder::new();
/// let mut slice = [2, 1];
/// BubbleSorter.sort_with(&mut slice, Direction::Ascending, &mut recorder);
///
/// assert_eq!(recorder.comparisons(), 1);
/// assert_eq!(recorder.passes(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    events: Vec<RecordedEvent<T>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[RecordedEvent<T>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<RecordedEvent<T>> {
        self.events
    }

    /// Number of comparison events recorded.
    pub fn comparisons(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::Comparison { .. }))
            .count()
    }

    /// Number of completed passes recorded.
    pub fn passes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::PassComplete { .. }))
            .count()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Observer<T> for Recorder<T> {
    fn observe(&mut self, event: SortEvent<'_, T>) {
        self.events.push(event.into());
    }
}

/// Forwards comparisons as `TRACE` events and completed passes as `DEBUG` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<T: Debug> Observer<T> for TracingObserver {
    fn observe(&mut self, event: SortEvent<'_, T>) {
        match event {
            SortEvent::Comparison {
                snapshot,
                index,
                left,
                right,
            } => trace!(?snapshot, index, ?left, ?right, "comparing adjacent pair"),
            SortEvent::PassComplete { pass, swaps } => debug!(pass, swaps, "pass complete"),
        }
    }
}

/// Prints a line per comparison (`[snapshot] left right`) and per pass (`n PASS COMPLETE!`).
pub struct ConsoleObserver<W: Write = Stdout> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleObserver<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Prints into `out` instead of stdout.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<T: Debug, W: Write> Observer<T> for ConsoleObserver<W> {
    fn observe(&mut self, event: SortEvent<'_, T>) {
        let written = match event {
            SortEvent::Comparison {
                snapshot,
                left,
                right,
                ..
            } => writeln!(
                self.out,
                "{:?} {} {}",
                snapshot,
                format!("{left:?}").cyan().bold(),
                format!("{right:?}").cyan().bold()
            ),
            SortEvent::PassComplete { pass, .. } => writeln!(
                self.out,
                "{} {}",
                pass.to_string().green().bold(),
                "PASS COMPLETE!".green()
            ),
        };

        if let Err(err) = written {
            warn!(%err, "unable to write sort trace");
        }
    }
}

/// Ticks an `indicatif` progress bar once per completed pass.
///
/// Bubble sort performs at most one pass per element, so the bar is bounded by the length of the
/// sequence. An early exit leaves the bar short of its end.
pub struct ProgressObserver {
    pb: ProgressBar,
}

impl ProgressObserver {
    pub fn new(len: usize) -> Self {
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "Bubble Sort -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Passes: ({pos}/{len}, ETA: {eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { pb }
    }

    /// A progress observer that counts passes without drawing anything.
    pub fn hidden(len: usize) -> Self {
        let pb = ProgressBar::hidden();
        pb.set_length(len as u64);
        Self { pb }
    }

    /// Passes completed so far.
    pub fn position(&self) -> u64 {
        self.pb.position()
    }

    pub fn finish(&self) {
        self.pb.finish();
    }
}

impl<T> Observer<T> for ProgressObserver {
    fn observe(&mut self, event: SortEvent<'_, T>) {
        if let SortEvent::PassComplete { .. } = event {
            self.pb.inc(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison<'a>(snapshot: &'a [i32], index: usize) -> SortEvent<'a, i32> {
        SortEvent::Comparison {
            snapshot,
            index,
            left: &snapshot[index],
            right: &snapshot[index + 1],
        }
    }

    #[test]
    fn recorder_keeps_owned_copies() {
        let data = [4, 2, 9];
        let mut recorder = Recorder::new();

        recorder.observe(comparison(&data, 1));
        recorder.observe(SortEvent::PassComplete { pass: 1, swaps: 0 });

        assert_eq!(
            recorder.events(),
            &[
                RecordedEvent::Comparison {
                    snapshot: vec![4, 2, 9],
                    index: 1,
                    left: 2,
                    right: 9,
                },
                RecordedEvent::PassComplete { pass: 1, swaps: 0 },
            ]
        );
        assert_eq!(recorder.comparisons(), 1);
        assert_eq!(recorder.passes(), 1);
    }

    #[test]
    fn closures_are_observers() {
        let data = [1, 2];
        let mut seen = 0;
        {
            let mut count = |_event: SortEvent<'_, i32>| seen += 1;
            count.observe(comparison(&data, 0));
            count.observe(SortEvent::PassComplete { pass: 1, swaps: 0 });
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn console_observer_prints_trace_lines() {
        let data = [12, 4, 7];
        let mut console = ConsoleObserver::with_writer(Vec::new());

        console.observe(comparison(&data, 0));
        Observer::<i32>::observe(&mut console, SortEvent::PassComplete { pass: 3, swaps: 1 });

        let out = String::from_utf8(console.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[12, 4, 7]"));
        assert!(lines[0].contains("12") && lines[0].contains('4'));
        assert!(lines[1].contains('3'));
        assert!(lines[1].contains("PASS COMPLETE!"));
    }

    #[test]
    fn progress_observer_counts_passes_only() {
        let data = [1, 2, 3];
        let mut progress = ProgressObserver::hidden(data.len());

        progress.observe(comparison(&data, 0));
        progress.observe(comparison(&data, 1));
        assert_eq!(progress.position(), 0);

        Observer::<i32>::observe(&mut progress, SortEvent::PassComplete { pass: 1, swaps: 0 });
        assert_eq!(progress.position(), 1);
    }

    #[test]
    fn tracing_observer_accepts_both_events() {
        let data = [2, 1];
        let mut observer = TracingObserver;
        observer.observe(comparison(&data, 0));
        Observer::<i32>::observe(&mut observer, SortEvent::PassComplete { pass: 1, swaps: 1 });
    }
}
