//! Node trait definitions.
//!
//! Nodes live in a caller-owned slice arena. Every "pointer" is an
//! `Option<u32>` index into that arena: `l`/`r` are the owning child links,
//! `p` is a non-owning back-index used only to climb during fix-up.

/// Parent/child links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Keyed node carrying an AVL balance delta.
///
/// `delta` is `height(right) - height(left)`; it grows when the right
/// subtree grows.
pub trait DeltaNode<K>: Node {
    fn key(&self) -> &K;
    fn delta(&self) -> i32;
    fn set_delta(&mut self, delta: i32);
}

/// Three-way comparator derived from `PartialOrd`: negative when `a < b`,
/// zero when equal, positive otherwise.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
