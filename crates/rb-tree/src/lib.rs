//! Arena-based red-black tree over unique integer keys.
//!
//! Nodes are stored in a `Vec` owned by the tree and linked by
//! `Option<u32>` indices, so rotations rewrite several links at once without
//! aliasing trouble. Parent links are plain indices used only for upward
//! walks during rebalancing.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait and the [`Key`] alias |
//! | [`util`] | `first`, `last`, `next`, `size`, `height` walks |
//! | [`print`] | box-drawing `print_tree` helper |
//! | [`red_black`] | [`RbNode`], insert fix-up, rotations, [`RbTree`] |
//! | [`error`] | [`TreeError`] |
//!
//! Removal of single keys is not supported.

pub mod error;
pub mod print;
pub mod red_black;
pub mod types;
pub mod util;

pub use error::TreeError;
pub use red_black::{Color, RbNode, RbTree};
pub use types::{Key, Node};
