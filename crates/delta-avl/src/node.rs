use crate::types::{DeltaNode, Node};

/// A single key of the tree.
///
/// Created once as a parentless, childless leaf with `delta = 0`; after
/// that only relinked by rotations and re-balanced by the insert fix-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub key: K,
    /// Balance delta, `height(right) - height(left)`.
    pub delta: i32,
}

impl<K> AvlNode<K> {
    pub fn new(key: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            key,
            delta: 0,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}

impl<K> Node for AvlNode<K> {
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

impl<K> DeltaNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.key
    }

    fn delta(&self) -> i32 {
        self.delta
    }

    fn set_delta(&mut self, delta: i32) {
        self.delta = delta;
    }
}
