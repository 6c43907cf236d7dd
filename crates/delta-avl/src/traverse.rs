//! Read-only walks over an arena tree.

use crate::link::{get_l, get_p, get_r};
use crate::types::{DeltaNode, Node};

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor, found by climbing `p` links when there is no right
/// subtree.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Keys in ascending order.
pub fn in_order<K, N>(arena: &[N], root: Option<u32>) -> Vec<K>
where
    K: Clone,
    N: DeltaNode<K>,
{
    let mut keys = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        keys.push(arena[i as usize].key().clone());
        curr = next(arena, i);
    }
    keys
}

/// One node as seen by a presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit<'a, K> {
    pub index: u32,
    pub key: &'a K,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

/// Parent-before-children walk, left subtree first.
#[derive(Debug)]
pub struct PreOrder<'a, N> {
    arena: &'a [N],
    stack: Vec<u32>,
}

impl<'a, N> Clone for PreOrder<'a, N> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
        }
    }
}

pub fn pre_order<N: Node>(arena: &[N], root: Option<u32>) -> PreOrder<'_, N> {
    PreOrder {
        arena,
        stack: root.into_iter().collect(),
    }
}

impl<'a, N: Node> Iterator for PreOrder<'a, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.stack.pop()?;
        if let Some(r) = get_r(self.arena, i) {
            self.stack.push(r);
        }
        if let Some(l) = get_l(self.arena, i) {
            self.stack.push(l);
        }
        Some(i)
    }
}

/// [`pre_order`] yielding each node's key and child links.
pub fn traverse<'a, K, N>(arena: &'a [N], root: Option<u32>) -> impl Iterator<Item = Visit<'a, K>> + 'a
where
    K: 'a,
    N: DeltaNode<K>,
{
    pre_order(arena, root).map(move |i| {
        let n = &arena[i as usize];
        Visit {
            index: i,
            key: n.key(),
            left: n.l(),
            right: n.r(),
        }
    })
}
