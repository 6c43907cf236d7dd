//! Insertion and the delta fix-up walk.

use log::{debug, error, trace};

use crate::link::{get_l, get_p, get_r, set_left, set_right};
use crate::rotate::{left_rotate, right_rotate};
use crate::types::DeltaNode;

/// Which imbalance an insertion repaired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rebalance {
    /// Single left rotation.
    RightRight,
    /// Right rotation at the child, then left rotation at the parent.
    RightLeft,
    /// Single right rotation.
    LeftLeft,
    /// Left rotation at the child, then right rotation at the parent.
    LeftRight,
}

impl Rebalance {
    pub fn is_double(self) -> bool {
        matches!(self, Rebalance::RightLeft | Rebalance::LeftRight)
    }
}

/// Result of an insertion: the (possibly new) root and the rebalance it
/// needed, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inserted {
    pub root: u32,
    pub rebalance: Option<Rebalance>,
}

#[inline]
fn delta<K, N: DeltaNode<K>>(arena: &[N], i: u32) -> i32 {
    arena[i as usize].delta()
}

#[inline]
fn set_delta<K, N: DeltaNode<K>>(arena: &mut [N], i: u32, v: i32) {
    arena[i as usize].set_delta(v);
}

#[cold]
fn corrupted(p: u32, d1: i32, d2: i32) -> ! {
    error!("insert fix-up: impossible delta step {d1} -> {d2} at node {p}");
    panic!("insert fix-up reached delta step {d1} -> {d2} at node {p}: tree invariants were already broken");
}

#[cold]
fn corrupted_child(c: u32, d: i32) -> ! {
    error!("insert fix-up: heavy child {c} has delta {d}");
    panic!("insert fix-up found heavy child {c} with delta {d}: tree invariants were already broken");
}

/// Links the detached leaf `n` into the tree under `root` and rebalances.
///
/// Descends left while `comparator(new, node) < 0` and right otherwise, so
/// equal keys land to the right of the keys already present.
pub fn insert<K, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Inserted
where
    N: DeltaNode<K>,
    C: Fn(&K, &K) -> i32,
{
    debug_assert!(
        arena[n as usize].p().is_none() && arena[n as usize].l().is_none() && arena[n as usize].r().is_none(),
        "insert: node {n} is already linked"
    );
    set_delta(arena, n, 0);

    let Some(root) = root else {
        return Inserted {
            root: n,
            rebalance: None,
        };
    };

    let mut curr = root;
    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        let next = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if cmp < 0 {
                    set_left(arena, curr, Some(n));
                } else {
                    set_right(arena, curr, Some(n));
                }
                return insert_fix(arena, root, n);
            }
        }
    }
}

/// Climbs from the freshly linked leaf `x`, updating ancestor deltas until
/// a subtree stops growing or a single (or double) rotation restores
/// balance.
///
/// # Panics
///
/// If an ancestor's delta step is impossible for a tree that was balanced
/// before the insertion.
pub fn insert_fix<K, N>(arena: &mut [N], root: u32, mut x: u32) -> Inserted
where
    N: DeltaNode<K>,
{
    while let Some(p) = get_p(arena, x) {
        let d1 = delta(arena, p);
        let d2 = if get_l(arena, p) == Some(x) { d1 - 1 } else { d1 + 1 };
        set_delta(arena, p, d2);
        trace!("insert fix-up: node {p} delta {d1} -> {d2}");

        match (d1.abs(), d2.abs()) {
            (1, 0) => break,
            (0, 1) => x = p,
            (1, 2) => {
                let (root, case) = if d2 == 2 {
                    fix_right_heavy(arena, root, p)
                } else {
                    fix_left_heavy(arena, root, p)
                };
                debug!("insert fix-up: {case:?} rebalance at node {p}");
                return Inserted {
                    root,
                    rebalance: Some(case),
                };
            }
            _ => corrupted(p, d1, d2),
        }
    }

    Inserted {
        root,
        rebalance: None,
    }
}

fn fix_right_heavy<K, N>(arena: &mut [N], root: u32, p: u32) -> (u32, Rebalance)
where
    N: DeltaNode<K>,
{
    let r = get_r(arena, p).expect("right-heavy node has a right child");
    match delta(arena, r) {
        1 => {
            set_delta(arena, p, 0);
            set_delta(arena, r, 0);
            (left_rotate(arena, root, p), Rebalance::RightRight)
        }
        -1 => {
            let rl = get_l(arena, r).expect("left-leaning child has a left child");
            let dy = delta(arena, rl);
            set_delta(arena, p, if dy == 1 { -1 } else { 0 });
            set_delta(arena, rl, 0);
            set_delta(arena, r, if dy == -1 { 1 } else { 0 });
            let root = right_rotate(arena, root, r);
            (left_rotate(arena, root, p), Rebalance::RightLeft)
        }
        d => corrupted_child(r, d),
    }
}

fn fix_left_heavy<K, N>(arena: &mut [N], root: u32, p: u32) -> (u32, Rebalance)
where
    N: DeltaNode<K>,
{
    let l = get_l(arena, p).expect("left-heavy node has a left child");
    match delta(arena, l) {
        -1 => {
            set_delta(arena, p, 0);
            set_delta(arena, l, 0);
            (right_rotate(arena, root, p), Rebalance::LeftLeft)
        }
        1 => {
            let lr = get_r(arena, l).expect("right-leaning child has a right child");
            let dy = delta(arena, lr);
            set_delta(arena, l, if dy == 1 { -1 } else { 0 });
            set_delta(arena, lr, 0);
            set_delta(arena, p, if dy == -1 { 1 } else { 0 });
            let root = left_rotate(arena, root, l);
            (right_rotate(arena, root, p), Rebalance::LeftRight)
        }
        d => corrupted_child(l, d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AvlNode;
    use crate::types::default_comparator;

    fn build(keys: &[i32]) -> (Vec<AvlNode<i32>>, Option<u32>, Vec<Option<Rebalance>>) {
        let mut arena = Vec::new();
        let mut root = None;
        let mut cases = Vec::new();
        for &k in keys {
            arena.push(AvlNode::new(k));
            let n = (arena.len() - 1) as u32;
            let out = insert(&mut arena, root, n, &default_comparator::<i32>);
            root = Some(out.root);
            cases.push(out.rebalance);
        }
        (arena, root, cases)
    }

    fn shape(arena: &[AvlNode<i32>], root: u32) -> (i32, Option<i32>, Option<i32>) {
        let n = &arena[root as usize];
        (
            n.key,
            n.l.map(|i| arena[i as usize].key),
            n.r.map(|i| arena[i as usize].key),
        )
    }

    #[test]
    fn first_key_becomes_root() {
        let (arena, root, cases) = build(&[42]);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].delta, 0);
        assert_eq!(cases, vec![None]);
    }

    #[test]
    fn right_right() {
        let (arena, root, cases) = build(&[10, 20, 30]);
        assert_eq!(shape(&arena, root.unwrap()), (20, Some(10), Some(30)));
        assert_eq!(cases[2], Some(Rebalance::RightRight));
        assert!(arena.iter().all(|n| n.delta == 0));
    }

    #[test]
    fn left_left() {
        let (arena, root, cases) = build(&[30, 20, 10]);
        assert_eq!(shape(&arena, root.unwrap()), (20, Some(10), Some(30)));
        assert_eq!(cases[2], Some(Rebalance::LeftLeft));
        assert!(arena.iter().all(|n| n.delta == 0));
    }

    #[test]
    fn left_right() {
        let (arena, root, cases) = build(&[30, 10, 20]);
        assert_eq!(shape(&arena, root.unwrap()), (20, Some(10), Some(30)));
        assert_eq!(cases[2], Some(Rebalance::LeftRight));
        assert!(arena.iter().all(|n| n.delta == 0));
    }

    #[test]
    fn right_left() {
        let (arena, root, cases) = build(&[10, 30, 20]);
        assert_eq!(shape(&arena, root.unwrap()), (20, Some(10), Some(30)));
        assert_eq!(cases[2], Some(Rebalance::RightLeft));
        assert!(arena.iter().all(|n| n.delta == 0));
    }

    #[test]
    fn double_rotation_below_root_with_leaning_grandchild() {
        // 25 tips 30 to the left and leaves 50 left-right heavy, so the
        // middle node of the zig-zag carries delta -1.
        let (arena, root, cases) = build(&[50, 20, 70, 10, 30, 25]);
        let root = root.unwrap();
        assert_eq!(cases[5], Some(Rebalance::LeftRight));
        assert_eq!(shape(&arena, root), (30, Some(20), Some(50)));
        let by_key = |k: i32| arena.iter().find(|n| n.key == k).unwrap();
        assert_eq!(by_key(20).delta, 0);
        assert_eq!(by_key(50).delta, 1);
        assert_eq!(by_key(30).delta, 0);
        assert_eq!(by_key(25).p, Some(1));
    }

    #[test]
    fn balancing_insert_stops_walk() {
        let (arena, root, cases) = build(&[20, 10, 30]);
        assert_eq!(cases, vec![None, None, None]);
        assert_eq!(arena[root.unwrap() as usize].delta, 0);
    }

    #[test]
    fn duplicates_go_right() {
        let (arena, root, cases) = build(&[5, 5]);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].r, Some(1));
        assert_eq!(arena[0].delta, 1);
        assert_eq!(cases, vec![None, None]);
    }

    #[test]
    #[should_panic(expected = "tree invariants were already broken")]
    fn corrupted_delta_is_fatal() {
        let mut arena = vec![AvlNode::new(1), AvlNode::new(2)];
        arena[0].delta = 2;
        insert(&mut arena, Some(0), 1, &default_comparator::<i32>);
    }
}
