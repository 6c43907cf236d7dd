use std::fmt;

use crate::insert::{insert, Rebalance};
use crate::node::AvlNode;
use crate::print::{dump, to_debug_string};
use crate::traverse::{in_order, traverse, Visit};
use crate::types::default_comparator;
use crate::verify::{assert_valid, height, is_avl, is_bst, InvariantError};

/// AVL tree owning its node arena.
///
/// Nodes are never removed, so an index returned by [`AvlTree::insert`]
/// stays valid for the life of the tree.
pub struct AvlTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Vec<AvlNode<K>>,
    rebalances: usize,
    last_rebalance: Option<Rebalance>,
}

impl<K> AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut tree = Self::new();
        tree.arena.reserve(capacity);
        tree
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
            rebalances: 0,
            last_rebalance: None,
        }
    }

    /// Inserts `key` and returns the index of its node. Equal keys are
    /// kept, each in its own node.
    pub fn insert(&mut self, key: K) -> u32 {
        let n = u32::try_from(self.arena.len()).expect("arena exceeds u32 indices");
        self.arena.push(AvlNode::new(key));
        let out = insert(&mut self.arena, self.root, n, &self.comparator);
        self.root = Some(out.root);
        self.last_rebalance = out.rebalance;
        if out.rebalance.is_some() {
            self.rebalances += 1;
        }
        n
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn arena(&self) -> &[AvlNode<K>] {
        &self.arena
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].key
    }

    pub fn delta(&self, idx: u32) -> i32 {
        self.arena[idx as usize].delta
    }

    pub fn left(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].l
    }

    pub fn right(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].r
    }

    pub fn parent(&self, idx: u32) -> Option<u32> {
        self.arena[idx as usize].p
    }

    /// Rebalance events so far; a double rotation counts once.
    pub fn rebalances(&self) -> usize {
        self.rebalances
    }

    /// What the most recent [`AvlTree::insert`] had to repair.
    pub fn last_rebalance(&self) -> Option<Rebalance> {
        self.last_rebalance
    }

    /// Pre-order walk over keys and child links.
    pub fn traverse(&self) -> impl Iterator<Item = Visit<'_, K>> + '_ {
        traverse(&self.arena, self.root)
    }

    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        in_order(&self.arena, self.root)
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn is_avl(&self) -> bool {
        is_avl(&self.arena, self.root)
    }

    /// `true` if the tree holds exactly `keys` in sorted order.
    pub fn is_bst(&self, keys: &[K]) -> bool
    where
        K: Clone + PartialEq,
    {
        is_bst(&self.arena, self.root, keys, &self.comparator)
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_valid(&self.arena, self.root, &self.comparator)
    }

    pub fn to_debug_string(&self) -> String
    where
        K: fmt::Display,
    {
        to_debug_string(&self.arena, self.root)
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> fmt::Display for AvlTree<K, C>
where
    K: fmt::Display,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dump(&self.arena, self.root))
    }
}

impl<K, C> fmt::Debug for AvlTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("root", &self.root)
            .field("arena", &self.arena)
            .field("rebalances", &self.rebalances)
            .finish_non_exhaustive()
    }
}
