//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! Tree-manipulation functions take the arena as `&mut Vec<N>` (or a slice)
//! and work with indices, so rotations can rewrite several links without
//! fighting the borrow checker.

/// Keys stored in the tree. Integers only.
pub type Key = i64;

/// Binary-tree links (`p`, `l`, `r`).
///
/// `p` is a back-reference used for upward walks; it never owns anything.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}
