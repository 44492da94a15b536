use bst_engine::{Key, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, in the same order, as the set.
/// Returns `None` as soon as the two disagree.
fn do_ops(ops: &[Op<i8>], mut bst: Tree, set: &mut BTreeSet<Key>) -> Option<Tree> {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                let k = Key::from(k);
                let before = bst.len();
                bst = bst.insert(k);
                let added = set.insert(k);
                if bst.len() != before + usize::from(added) {
                    return None;
                }
            }
            Op::Delete(k) => {
                let k = Key::from(k);
                let before = bst.len();
                bst = bst.delete(k);
                let removed = set.remove(&k);
                if bst.len() + usize::from(removed) != before || bst.contains(k) {
                    return None;
                }
            }
            Op::Iter => {
                if !bst.inorder().eq(set.iter().copied()) {
                    return None;
                }
            }
        }
    }

    Some(bst)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut set = BTreeSet::new();

    match do_ops(&ops, Tree::new(), &mut set) {
        Some(tree) => tree.is_bst() && tree.inorder().eq(set.iter().copied()),
        None => false,
    }
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<Key>, deletes: Vec<Key>) -> bool {
    let mut tree: Tree = xs.into_iter().collect();
    for delete in deletes {
        tree = tree.delete(delete);
    }

    let keys: Vec<_> = tree.inorder().collect();
    keys.windows(2).all(|w| w[0] < w[1]) && tree.is_bst()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().copied().map(Key::from).collect();

    xs.iter()
        .map(|x| Key::from(*x))
        .all(|x| tree.search(x).map(|n| n.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().copied().map(Key::from).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(Key::from(*x)).is_none())
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().copied().map(Key::from).collect();
    let again = xs
        .iter()
        .copied()
        .map(Key::from)
        .fold(tree.clone(), Tree::insert);

    again == tree
}

#[quickcheck]
fn min_max_match_inorder(xs: Vec<Key>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let keys: Vec<_> = tree.inorder().collect();

    match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => {
            tree.minimum().map(|n| n.key()) == Ok(*first)
                && tree.maximum().map(|n| n.key()) == Ok(*last)
        }
        _ => tree.minimum().is_err() && tree.maximum().is_err(),
    }
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().copied().map(Key::from).collect();
    for delete in &deletes {
        tree = tree.delete(Key::from(*delete));
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(Key::from(*x)).is_none())
        && still_present
            .iter()
            .all(|x| tree.search(Key::from(*x)).is_some())
}

#[quickcheck]
fn delete_absent_is_noop(xs: Vec<i8>, missing: i8) -> bool {
    let tree: Tree = xs
        .iter()
        .copied()
        .filter(|x| *x != missing)
        .map(Key::from)
        .collect();

    tree.clone().delete(Key::from(missing)) == tree
}

#[quickcheck]
fn teardown_releases_every_node(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().copied().map(Key::from).collect();
    let unique: HashSet<_> = xs.into_iter().collect();

    tree.teardown() == unique.len()
}
