use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// A window that has to be usable as a chain key needs room for at least one token.
    #[error("invalid window capacity {capacity}: order must be at least 1")]
    InvalidCapacity { capacity: usize },

    #[error("window holds {len} tokens but its capacity is {capacity}")]
    Overfull { len: usize, capacity: usize },
}
