use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::TreeError;
use crate::types::Key;
use crate::util::{first, get_l, get_p, get_r, next, set_l, set_p, set_r};

use super::types::{Color, RbNode};

#[inline]
fn is_red(arena: &[RbNode], i: Option<u32>) -> bool {
    i.map(|i| arena[i as usize].is_red()).unwrap_or(false)
}

#[inline]
fn set_color(arena: &mut [RbNode], i: u32, c: Color) {
    arena[i as usize].c = c;
}

/// Arena index of the node holding `key`.
pub fn find(arena: &[RbNode], root: Option<u32>, key: Key) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(&arena[i as usize].k) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Inserts `key` and rebalances; returns the new root.
///
/// The duplicate check happens during the same descent that finds the
/// attachment slot, before anything is pushed onto the arena, so a rejected
/// insert leaves `arena` untouched. The new node lives at the last arena
/// index.
pub fn insert(arena: &mut Vec<RbNode>, root: Option<u32>, key: Key) -> Result<u32, TreeError> {
    let mut parent = None;
    let mut went_left = false;
    let mut curr = root;
    while let Some(i) = curr {
        match key.cmp(&arena[i as usize].k) {
            Ordering::Equal => {
                debug!("rejecting duplicate key {key}");
                return Err(TreeError::DuplicateKey(key));
            }
            Ordering::Less => {
                parent = Some(i);
                went_left = true;
                curr = get_l(arena, i);
            }
            Ordering::Greater => {
                parent = Some(i);
                went_left = false;
                curr = get_r(arena, i);
            }
        }
    }

    let n = next_index(arena.len())?;
    let mut node = RbNode::new(key);
    node.p = parent;
    arena.push(node);

    if let Some(p) = parent {
        if went_left {
            set_l(arena, p, Some(n));
        } else {
            set_r(arena, p, Some(n));
        }
    }

    Ok(insert_fix_up(arena, root.unwrap_or(n), n))
}

/// Arena index for a node pushed onto an arena of length `len`.
fn next_index(len: usize) -> Result<u32, TreeError> {
    u32::try_from(len).map_err(|_| TreeError::CapacityExceeded(len))
}

/// Restores the coloring invariants after `n` was attached as a red leaf.
fn insert_fix_up(arena: &mut [RbNode], mut root: u32, mut n: u32) -> u32 {
    while n != root {
        let Some(mut p) = get_p(arena, n) else {
            break;
        };
        if arena[p as usize].is_black() {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let Some(g) = get_p(arena, p) else {
            break;
        };
        let parent_is_left = get_l(arena, g) == Some(p);
        let u = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(u) = u.filter(|&u| arena[u as usize].is_red()) {
            trace!(
                "red uncle {}: recolor around {}",
                arena[u as usize].k,
                arena[g as usize].k
            );
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            n = g;
            continue;
        }

        if parent_is_left {
            if get_r(arena, p) == Some(n) {
                trace!("zig-zag at {}: rotate left", arena[p as usize].k);
                root = rotate_left(arena, root, p);
                std::mem::swap(&mut n, &mut p);
            }
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            trace!("rotate right at {}", arena[g as usize].k);
            root = rotate_right(arena, root, g);
        } else {
            if get_l(arena, p) == Some(n) {
                trace!("zig-zag at {}: rotate right", arena[p as usize].k);
                root = rotate_right(arena, root, p);
                std::mem::swap(&mut n, &mut p);
            }
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            trace!("rotate left at {}", arena[g as usize].k);
            root = rotate_left(arena, root, g);
        }
        break;
    }

    set_color(arena, root, Color::Black);
    root
}

/// Points `x`'s parent (or the root slot) at `y`.
fn replace_child(arena: &mut [RbNode], root: u32, x: u32, y: u32) -> u32 {
    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    match xp {
        None => y,
        Some(xp) => {
            if get_l(arena, xp) == Some(x) {
                set_l(arena, xp, Some(y));
            } else {
                set_r(arena, xp, Some(y));
            }
            root
        }
    }
}

/// Promotes the right child of `x` into its place; returns the new root.
///
/// Colors are left alone. Without a right child there is nothing to rotate.
pub fn rotate_left(arena: &mut [RbNode], root: u32, x: u32) -> u32 {
    let Some(y) = get_r(arena, x) else {
        return root;
    };
    let yl = get_l(arena, y);
    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    let root = replace_child(arena, root, x, y);
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Mirror of [`rotate_left`]: promotes the left child of `x`.
pub fn rotate_right(arena: &mut [RbNode], root: u32, x: u32) -> u32 {
    let Some(y) = get_l(arena, x) else {
        return root;
    };
    let yr = get_r(arena, y);
    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    let root = replace_child(arena, root, x, y);
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Deep copy of the subtree at `root` into a fresh, pre-order arena.
///
/// The copied root lands at index 0 and every link is rewired to the new
/// indices. Uses an explicit stack, so depth is not bounded by the call
/// stack.
pub fn copy_of(arena: &[RbNode], root: Option<u32>) -> (Vec<RbNode>, Option<u32>) {
    let Some(root) = root else {
        return (Vec::new(), None);
    };

    let mut out: Vec<RbNode> = Vec::with_capacity(arena.len());
    // (source index, new parent index, attach as left child)
    let mut stack: Vec<(u32, Option<u32>, bool)> = vec![(root, None, false)];
    while let Some((src, parent, left)) = stack.pop() {
        // Never exceeds the source arena, whose indices already fit in u32.
        let idx = out.len() as u32;
        let node = &arena[src as usize];
        out.push(RbNode {
            p: parent,
            l: None,
            r: None,
            k: node.k,
            c: node.c,
        });
        if let Some(parent) = parent {
            if left {
                set_l(&mut out, parent, Some(idx));
            } else {
                set_r(&mut out, parent, Some(idx));
            }
        }
        if let Some(r) = node.r {
            stack.push((r, Some(idx), false));
        }
        if let Some(l) = node.l {
            stack.push((l, Some(idx), true));
        }
    }

    debug!("copied {} nodes", out.len());
    (out, Some(0))
}

fn write_token(out: &mut String, node: &RbNode) {
    out.push(' ');
    out.push_str(node.c.tag());
    out.push_str(&node.k.to_string());
    out.push(' ');
}

fn infix(arena: &[RbNode], node: Option<u32>, out: &mut String) {
    let Some(i) = node else {
        return;
    };
    let n = &arena[i as usize];
    infix(arena, n.l, out);
    write_token(out, n);
    infix(arena, n.r, out);
}

fn prefix(arena: &[RbNode], node: Option<u32>, out: &mut String) {
    let Some(i) = node else {
        return;
    };
    let n = &arena[i as usize];
    write_token(out, n);
    prefix(arena, n.l, out);
    prefix(arena, n.r, out);
}

fn postfix(arena: &[RbNode], node: Option<u32>, out: &mut String) {
    let Some(i) = node else {
        return;
    };
    let n = &arena[i as usize];
    postfix(arena, n.l, out);
    postfix(arena, n.r, out);
    write_token(out, n);
}

/// In-order `" R10  B20 "` style token string.
pub fn to_infix_string(arena: &[RbNode], root: Option<u32>) -> String {
    let mut out = String::new();
    infix(arena, root, &mut out);
    out
}

pub fn to_prefix_string(arena: &[RbNode], root: Option<u32>) -> String {
    let mut out = String::new();
    prefix(arena, root, &mut out);
    out
}

pub fn to_postfix_string(arena: &[RbNode], root: Option<u32>) -> String {
    let mut out = String::new();
    postfix(arena, root, &mut out);
    out
}

/// Black nodes on the leftmost root-to-leaf path. NIL leaves are not counted.
pub fn black_height(arena: &[RbNode], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = root;
    while let Some(i) = curr {
        if arena[i as usize].is_black() {
            count += 1;
        }
        curr = get_l(arena, i);
    }
    count
}

/// Checks BST order, coloring, black-height and parent links.
///
/// Returns a description of the first violation found.
pub fn assert_red_black_tree(arena: &[RbNode], root: Option<u32>) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p.is_some() {
        return Err("Root has parent".to_string());
    }
    if !arena[root as usize].is_black() {
        return Err("Root is not black".to_string());
    }

    fn check(arena: &[RbNode], node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(0);
        };
        let n = &arena[node as usize];

        if let Some(li) = n.l {
            if arena[li as usize].p != Some(node) {
                return Err(format!("Broken parent link on left child of {}", n.k));
            }
        }
        if let Some(ri) = n.r {
            if arena[ri as usize].p != Some(node) {
                return Err(format!("Broken parent link on right child of {}", n.k));
            }
        }

        if n.is_red() && (is_red(arena, n.l) || is_red(arena, n.r)) {
            return Err(format!("Red node {} has red child", n.k));
        }

        let lh = check(arena, n.l)?;
        let rh = check(arena, n.r)?;
        if lh != rh {
            return Err(format!("Black height mismatch at {}: {lh} vs {rh}", n.k));
        }

        Ok(lh + usize::from(n.is_black()))
    }

    check(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<Key> = None;
    while let Some(i) = curr {
        let k = arena[i as usize].k;
        if let Some(prev) = prev {
            match prev.cmp(&k) {
                Ordering::Less => {}
                Ordering::Equal => return Err(format!("Duplicate key {k}")),
                Ordering::Greater => return Err(format!("Node order violated at {k}")),
            }
        }
        prev = Some(k);
        curr = next(arena, i);
    }

    Ok(())
}
