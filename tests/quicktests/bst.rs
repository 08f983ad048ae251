use datastructs::bst::BinarySearchTree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut BinarySearchTree<K>, set: &mut HashSet<K>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                set.remove(k);
            }
        }
    }
}

/// Whether every node sits on the correct side of its parent and links back to it.
fn ordered_and_linked(tree: &BinarySearchTree<i8>) -> bool {
    let inner = tree.as_tree();
    let mut pending: Vec<_> = inner.root().into_iter().collect();
    while let Some(id) = pending.pop() {
        let value = inner.get(id);
        for (child, wanted) in [
            (inner.left(id), std::cmp::Ordering::Less),
            (inner.right(id), std::cmp::Ordering::Greater),
        ] {
            if let Some(child) = child {
                if inner.get(child).cmp(&value) != wanted || inner.parent(child) != Some(id) {
                    return false;
                }
                pending.push(child);
            }
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|key| tree.contains(key)) && ordered_and_linked(&tree)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && ordered_and_linked(&tree)
}

#[quickcheck]
fn in_order_is_sorted_and_distinct(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    let mut visited = Vec::new();
    tree.in_order(|x| visited.push(*x));
    visited == expected && tree.len() == expected.len()
}

#[quickcheck]
fn remove_everything_leaves_empty_tree(xs: Vec<i8>, rotate: usize) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let mut order = xs;
    if !order.is_empty() {
        let by = rotate % order.len();
        order.rotate_left(by);
    }
    for x in &order {
        tree.remove(x);
    }
    tree.is_empty() && tree.as_tree().root().is_none() && tree.height() == 0
}

#[quickcheck]
fn height_never_exceeds_len(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    tree.height() <= tree.len() && (tree.len() == 0) == (tree.height() == 0)
}
