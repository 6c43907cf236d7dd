//! Text renderings of a tree.

use std::fmt::Display;

use crate::types::DeltaNode;

/// Renders one child subtree given the indentation of its first line.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Box-drawing layout of a node's children under `tab`.
///
/// `None` children take no row.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let text = child(&child_tab);
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─" } else { "├─" });
        if !text.is_empty() {
            out.push(' ');
            out.push_str(&text);
        }
    }

    out
}

/// Parenthesised form `(left key:delta right)` with `.` for a missing
/// subtree.
///
/// ```
/// use delta_avl::AvlTree;
///
/// let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_debug_string(), "((. 1:0 .) 2:0 (. 3:0 .))");
/// ```
pub fn to_debug_string<K, N>(arena: &[N], root: Option<u32>) -> String
where
    K: Display,
    N: DeltaNode<K>,
{
    let mut out = String::new();
    write_debug::<K, N>(arena, root, &mut out);
    out
}

fn write_debug<K, N>(arena: &[N], node: Option<u32>, out: &mut String)
where
    K: Display,
    N: DeltaNode<K>,
{
    let Some(i) = node else {
        out.push('.');
        return;
    };
    let n = &arena[i as usize];
    out.push('(');
    write_debug::<K, N>(arena, n.l(), out);
    out.push_str(&format!(" {}:{} ", n.key(), n.delta()));
    write_debug::<K, N>(arena, n.r(), out);
    out.push(')');
}

/// Pre-order dump, one node per line: `key [delta]`, children marked `←`
/// and `→`.
pub fn dump<K, N>(arena: &[N], root: Option<u32>) -> String
where
    K: Display,
    N: DeltaNode<K>,
{
    match root {
        Some(root) => dump_node::<K, N>(arena, root, ""),
        None => "∅".to_string(),
    }
}

fn dump_node<K, N>(arena: &[N], i: u32, tab: &str) -> String
where
    K: Display,
    N: DeltaNode<K>,
{
    let n = &arena[i as usize];
    let left = n
        .l()
        .map(|l| move |tab: &str| format!("← {}", dump_node::<K, N>(arena, l, tab)));
    let right = n
        .r()
        .map(|r| move |tab: &str| format!("→ {}", dump_node::<K, N>(arena, r, tab)));
    let children: [Option<&PrintChild<'_>>; 2] = [
        left.as_ref().map(|f| f as &PrintChild<'_>),
        right.as_ref().map(|f| f as &PrintChild<'_>),
    ];
    format!("{} [{}]{}", n.key(), n.delta(), print_tree(tab, &children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{set_children, set_right};
    use crate::node::AvlNode;

    #[test]
    fn debug_string_of_empty_tree() {
        let arena: Vec<AvlNode<i32>> = Vec::new();
        assert_eq!(to_debug_string(&arena, None), ".");
    }

    #[test]
    fn debug_string_shows_deltas() {
        let mut arena: Vec<_> = (0..2).map(AvlNode::new).collect();
        set_right(&mut arena, 0, Some(1));
        arena[0].delta = 1;
        assert_eq!(to_debug_string(&arena, Some(0)), "(. 0:1 (. 1:0 .))");
    }

    #[test]
    fn dump_marks_sides() {
        let mut arena: Vec<_> = (0..4).map(AvlNode::new).collect();
        set_children(&mut arena, 1, Some(0), Some(2));
        set_right(&mut arena, 2, Some(3));
        arena[1].delta = 1;
        arena[2].delta = 1;
        let expected = "1 [1]\n├─ ← 0 [0]\n└─ → 2 [1]\n   └─ → 3 [0]";
        assert_eq!(dump(&arena, Some(1)), expected);
    }

    #[test]
    fn dump_skips_missing_left_child() {
        let mut arena: Vec<_> = (0..2).map(AvlNode::new).collect();
        set_right(&mut arena, 0, Some(1));
        arena[0].delta = 1;
        assert_eq!(dump(&arena, Some(0)), "0 [1]\n└─ → 1 [0]");
    }

    #[test]
    fn print_tree_skips_empty_children() {
        let a: &PrintChild<'_> = &|_: &str| "a".to_string();
        assert_eq!(print_tree("", &[Some(a), None]), "\n└─ a");
        assert_eq!(print_tree("", &[None, Some(a)]), "\n└─ a");
        assert_eq!(print_tree("", &[None, None]), "");
    }
}
