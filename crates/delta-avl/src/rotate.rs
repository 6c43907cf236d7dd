//! Single rotations.
//!
//! Both keep the in-order sequence and only relink; deltas are left
//! untouched since the right values depend on which rebalance case asked
//! for the rotation.

use crate::link::{get_l, get_p, get_r, replace_by, set_children};
use crate::types::Node;

/// Rotates `x` down to the left, lifting `x.r` into its slot.
///
/// ```text
///     x                y
///    / \              / \
///   a   y     =>     x   c
///      / \          / \
///     b   c        a   b
/// ```
///
/// Returns the tree root, which is `y` when `x` was the root.
///
/// # Panics
///
/// If `x` has no right child.
pub fn left_rotate<N: Node>(arena: &mut [N], root: u32, x: u32) -> u32 {
    let parent = get_p(arena, x);
    let y = get_r(arena, x).expect("left_rotate: pivot has no right child");
    let (a, b, c) = (get_l(arena, x), get_l(arena, y), get_r(arena, y));
    replace_by(arena, x, Some(y));
    set_children(arena, x, a, b);
    set_children(arena, y, Some(x), c);
    if parent.is_none() {
        y
    } else {
        root
    }
}

/// Mirror of [`left_rotate`]: lifts `y.l` into `y`'s slot.
///
/// # Panics
///
/// If `y` has no left child.
pub fn right_rotate<N: Node>(arena: &mut [N], root: u32, y: u32) -> u32 {
    let parent = get_p(arena, y);
    let x = get_l(arena, y).expect("right_rotate: pivot has no left child");
    let (a, b, c) = (get_l(arena, x), get_r(arena, x), get_r(arena, y));
    replace_by(arena, y, Some(x));
    set_children(arena, y, b, c);
    set_children(arena, x, a, Some(y));
    if parent.is_none() {
        x
    } else {
        root
    }
}
