//! Linkage primitives.
//!
//! These are the only functions that attach or detach subtrees. Each keeps
//! `arena[c].p() == Some(p)` whenever `p` links `c` as a child.

use thiserror::Error;

use crate::types::Node;

/// A relative was requested from a node that structurally lacks it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("node {0} has no parent")]
    NoParent(u32),
    #[error("node {0} has no grandparent")]
    NoGrandparent(u32),
}

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

/// Links `child` as the left child of `node`.
///
/// The previous occupant keeps its stale `p`; re-homing it is up to the
/// caller.
pub fn set_left<N: Node>(arena: &mut [N], node: u32, child: Option<u32>) {
    arena[node as usize].set_l(child);
    if let Some(c) = child {
        set_p(arena, c, Some(node));
    }
}

/// Links `child` as the right child of `node`. See [`set_left`].
pub fn set_right<N: Node>(arena: &mut [N], node: u32, child: Option<u32>) {
    arena[node as usize].set_r(child);
    if let Some(c) = child {
        set_p(arena, c, Some(node));
    }
}

pub fn set_children<N: Node>(arena: &mut [N], node: u32, left: Option<u32>, right: Option<u32>) {
    set_left(arena, node, left);
    set_right(arena, node, right);
}

/// Puts `other` in the slot `node` occupies and detaches `node` from its
/// parent.
///
/// When `node` is the root, `other` becomes parentless and the caller must
/// rebind its root handle.
pub fn replace_by<N: Node>(arena: &mut [N], node: u32, other: Option<u32>) {
    match get_p(arena, node) {
        None => {
            if let Some(o) = other {
                set_p(arena, o, None);
            }
        }
        Some(p) if get_l(arena, p) == Some(node) => set_left(arena, p, other),
        Some(p) => set_right(arena, p, other),
    }
    set_p(arena, node, None);
}

/// `true` if `node` hangs off its parent's left slot.
pub fn is_left_child<N: Node>(arena: &[N], node: u32) -> bool {
    get_p(arena, node).is_some_and(|p| get_l(arena, p) == Some(node))
}

pub fn try_sibling<N: Node>(arena: &[N], node: u32) -> Result<Option<u32>, LinkError> {
    let p = get_p(arena, node).ok_or(LinkError::NoParent(node))?;
    Ok(if get_l(arena, p) == Some(node) {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    })
}

/// The other child of `node`'s parent.
///
/// # Panics
///
/// If `node` is the root.
pub fn sibling<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    try_sibling(arena, node).unwrap_or_else(|e| panic!("sibling: {e}"))
}

pub fn try_grandparent<N: Node>(arena: &[N], node: u32) -> Result<Option<u32>, LinkError> {
    let p = get_p(arena, node).ok_or(LinkError::NoParent(node))?;
    Ok(get_p(arena, p))
}

/// # Panics
///
/// If `node` is the root.
pub fn grandparent<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    try_grandparent(arena, node).unwrap_or_else(|e| panic!("grandparent: {e}"))
}

pub fn try_uncle<N: Node>(arena: &[N], node: u32) -> Result<Option<u32>, LinkError> {
    let p = get_p(arena, node).ok_or(LinkError::NoParent(node))?;
    try_sibling(arena, p).map_err(|_| LinkError::NoGrandparent(node))
}

/// The sibling of `node`'s parent.
///
/// # Panics
///
/// If `node` has no grandparent.
pub fn uncle<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    try_uncle(arena, node).unwrap_or_else(|e| panic!("uncle: {e}"))
}
