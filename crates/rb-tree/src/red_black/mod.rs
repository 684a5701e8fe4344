//! Red-black tree over unique integer keys.

mod print;
pub mod rb_tree;
pub mod types;
pub mod util;

pub use print::print;
pub use rb_tree::RbTree;
pub use types::{Color, RbNode};
