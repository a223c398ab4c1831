use thiserror::Error;

/// Alias for `Result<T, sinker_core::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors raised at the boundary of the sorter.
///
/// Once a sort has been accepted it cannot fail, so every variant here is produced before any
/// element of the sequence is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when a sort direction is not one of the recognised names.
    #[error("Invalid Direction: `{0}` (expected one of: [\"asc\", \"ascending\", \"desc\", \"descending\"])")]
    InvalidDirection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_direction_names_the_input() {
        let err = Error::InvalidDirection("sideways".to_string());
        assert!(err.to_string().contains("`sideways`"));
    }
}
