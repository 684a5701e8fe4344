use crate::types::{Key, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Single-letter tag used by the traversal strings.
    pub fn tag(self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Black => "B",
        }
    }
}

/// One stored key.
///
/// Absent children are `None` and count as black leaves.
#[derive(Clone, Debug)]
pub struct RbNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    pub c: Color,
}

impl RbNode {
    /// Fresh unlinked node. New nodes are born red.
    pub fn new(k: Key) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }

    pub fn is_black(&self) -> bool {
        self.c == Color::Black
    }

    pub fn is_red(&self) -> bool {
        self.c == Color::Red
    }
}

impl Node for RbNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
