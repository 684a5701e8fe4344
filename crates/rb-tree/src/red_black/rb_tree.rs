use crate::error::TreeError;
use crate::types::Key;
use crate::util::{first, height, last, size};

use super::types::{Color, RbNode};
use super::util;

/// Ordered set of unique integer keys kept balanced by red-black coloring.
///
/// Nodes live in an arena owned by the tree and link to each other by index.
/// There is no removal of single keys; [`RbTree::clear`] drops everything.
///
/// ```
/// use rb_tree::RbTree;
///
/// let mut tree = RbTree::new();
/// for k in [10, 20, 30] {
///     tree.insert(k).unwrap();
/// }
/// assert_eq!(tree.to_infix_string(), " R10  B20  R30 ");
/// assert!(tree.insert(20).is_err());
/// assert_eq!(tree.size(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RbTree {
    arena: Vec<RbNode>,
    root: Option<u32>,
    len: usize,
}

impl RbTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree holding just `key` in a black root.
    pub fn with_key(key: Key) -> Self {
        let mut node = RbNode::new(key);
        node.c = Color::Black;
        Self {
            arena: vec![node],
            root: Some(0),
            len: 1,
        }
    }

    /// Adds `key`, failing with [`TreeError::DuplicateKey`] if it is already
    /// present. On failure the tree is unchanged.
    pub fn insert(&mut self, key: Key) -> Result<(), TreeError> {
        let root = util::insert(&mut self.arena, self.root, key)?;
        self.root = Some(root);
        self.len += 1;
        Ok(())
    }

    pub fn contains(&self, key: Key) -> bool {
        util::find(&self.arena, self.root, key).is_some()
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn min(&self) -> Result<Key, TreeError> {
        first(&self.arena, self.root)
            .map(|i| self.arena[i as usize].k)
            .ok_or(TreeError::EmptyTree)
    }

    pub fn max(&self) -> Result<Key, TreeError> {
        last(&self.arena, self.root)
            .map(|i| self.arena[i as usize].k)
            .ok_or(TreeError::EmptyTree)
    }

    pub fn root_key(&self) -> Option<Key> {
        self.root.map(|i| self.arena[i as usize].k)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn to_infix_string(&self) -> String {
        util::to_infix_string(&self.arena, self.root)
    }

    pub fn to_prefix_string(&self) -> String {
        util::to_prefix_string(&self.arena, self.root)
    }

    pub fn to_postfix_string(&self) -> String {
        util::to_postfix_string(&self.arena, self.root)
    }

    pub fn black_height(&self) -> usize {
        util::black_height(&self.arena, self.root)
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn print(&self) -> String {
        super::print(&self.arena, self.root, "")
    }

    /// Checks every structural invariant, including that the stored count
    /// matches the reachable nodes.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_red_black_tree(&self.arena, self.root)?;
        let reachable = size(&self.arena, self.root);
        if reachable != self.len {
            return Err(format!(
                "Size mismatch: counted {reachable}, recorded {}",
                self.len
            ));
        }
        Ok(())
    }
}

impl Clone for RbTree {
    fn clone(&self) -> Self {
        let (arena, root) = util::copy_of(&self.arena, self.root);
        Self {
            arena,
            root,
            len: self.len,
        }
    }
}
