//! Box-drawing tree dumps.

mod print_tree;

pub use print_tree::print_tree;

/// Renders one child given the indentation prefix for its own children.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
