use crate::print::{print_tree, PrintChild};

use super::types::RbNode;

/// Debug dump of the subtree at `node`, e.g. `B20` with `├─`/`└─` children.
///
/// Leaves print on one line; a node with a single child shows `∅` for the
/// missing side.
pub fn print(arena: &[RbNode], node: Option<u32>, tab: &str) -> String {
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let head = format!("{}{}", n.c.tag(), n.k);
    if n.l.is_none() && n.r.is_none() {
        return head;
    }
    let left = |tab: &str| print(arena, n.l, tab);
    let right = |tab: &str| print(arena, n.r, tab);
    head + &print_tree(tab, &[Some(&left as &PrintChild), Some(&right as &PrintChild)])
}
