//! Arena-based AVL tree balanced by incremental balance deltas.
//!
//! Every node stores `delta = height(right) - height(left)` and nothing
//! else about heights. Insertion links a new leaf, then climbs its
//! ancestors adjusting deltas until a subtree stops growing or one single
//! or double rotation restores balance, so each insertion performs at most
//! one rebalance.
//!
//! Nodes live in a `Vec` arena; links are `Option<u32>` indices into it.
//! Child links own, the parent link is a back-index used only to climb.
//!
//! ```
//! use delta_avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.to_debug_string(), "((. 10:0 .) 20:0 (. 30:0 .))");
//! assert_eq!(tree.rebalances(), 1);
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`DeltaNode`] traits, default comparator |
//! [`node`] | [`AvlNode`] |
//! [`link`] | `set_left`, `set_right`, `replace_by`, relatives |
//! [`rotate`] | `left_rotate`, `right_rotate` |
//! [`insert`] | `insert`, `insert_fix` |
//! [`traverse`] | in-order and pre-order walks |
//! [`verify`] | `height`, `is_avl`, `is_bst`, `assert_valid` |
//! [`print`] | debug string and box dump |
//! [`tree`] | [`AvlTree`] handle |

pub mod insert;
pub mod link;
pub mod node;
pub mod print;
pub mod rotate;
pub mod traverse;
pub mod tree;
pub mod types;
pub mod verify;

pub use insert::{insert, insert_fix, Inserted, Rebalance};
pub use link::{
    grandparent, is_left_child, replace_by, set_children, set_left, set_right, sibling, try_grandparent,
    try_sibling, try_uncle, uncle, LinkError,
};
pub use node::AvlNode;
pub use print::{dump, to_debug_string};
pub use rotate::{left_rotate, right_rotate};
pub use traverse::{first, in_order, next, pre_order, traverse, Visit};
pub use tree::AvlTree;
pub use types::{default_comparator, DeltaNode, Node};
pub use verify::{assert_valid, height, is_avl, is_bst, InvariantError};
