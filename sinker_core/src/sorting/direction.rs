use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{Error, Result};

/// The order a sequence is sorted into.
///
/// A `Direction` is resolved once per sort into a plain comparator function (see
/// [`Direction::comparator`]), so the inner loop never branches on the direction itself.
///
/// # Parsing
///
/// ```
/// use sinker_core::sorting::Direction;
///
/// assert_eq!("ASC".parse::<Direction>().unwrap(), Direction::Ascending);
/// assert_eq!("descending".parse::<Direction>().unwrap(), Direction::Descending);
/// assert!("up".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest element first. Pairs are swapped when `left > right`.
    #[default]
    Ascending,

    /// Largest element first. Pairs are swapped when `left < right`.
    Descending,
}

/// Returns `true` when an adjacent pair is out of order and must be swapped.
pub type Comparator<T> = fn(&T, &T) -> bool;

fn out_of_ascending_order<T: Ord>(left: &T, right: &T) -> bool {
    left > right
}

fn out_of_descending_order<T: Ord>(left: &T, right: &T) -> bool {
    left < right
}

impl Direction {
    /// Picks the swap predicate for this direction.
    ///
    /// Both predicates are strict, so equal neighbours are never swapped.
    pub fn comparator<T: Ord>(self) -> Comparator<T> {
        match self {
            Direction::Ascending => out_of_ascending_order::<T>,
            Direction::Descending => out_of_descending_order::<T>,
        }
    }

    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Checks that `left` and `right` already satisfy this direction (`<=` or `>=`).
    pub fn is_ordered<T: Ord>(self, left: &T, right: &T) -> bool {
        !self.comparator::<T>()(left, right)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        for name in ["asc", "ASC", "Ascending", " ascending "] {
            assert_eq!(name.parse::<Direction>(), Ok(Direction::Ascending));
        }
        for name in ["desc", "DESC", "Descending"] {
            assert_eq!(name.parse::<Direction>(), Ok(Direction::Descending));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "ASCD".parse::<Direction>(),
            Err(Error::InvalidDirection("ASCD".to_string()))
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn comparators_are_strict() {
        let asc = Direction::Ascending.comparator::<i32>();
        let desc = Direction::Descending.comparator::<i32>();

        assert!(asc(&2, &1));
        assert!(!asc(&1, &2));
        assert!(!asc(&1, &1));

        assert!(desc(&1, &2));
        assert!(!desc(&2, &1));
        assert!(!desc(&1, &1));
    }

    #[test]
    fn default_and_reverse() {
        assert_eq!(Direction::default(), Direction::Ascending);
        assert_eq!(Direction::Ascending.reverse(), Direction::Descending);
        assert_eq!(Direction::Descending.reverse(), Direction::Ascending);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for direction in [Direction::Ascending, Direction::Descending] {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }
}
