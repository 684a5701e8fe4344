use thiserror::Error;

use crate::types::Key;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Insert rejected; the tree is left untouched.
    #[error("duplicate key: {0}")]
    DuplicateKey(Key),

    #[error("empty tree")]
    EmptyTree,

    /// Arena already holds as many nodes as a `u32` index can address.
    #[error("tree is full: {0} nodes")]
    CapacityExceeded(usize),
}
