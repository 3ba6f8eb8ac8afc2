use balanced_bst::avl::Tree;

use quickcheck::{Arbitrary, Gen};

use crate::Op;

/// The tallest an AVL tree holding `len` values can be, counting edges.
fn max_height(len: usize) -> isize {
    (1.44 * ((len + 2) as f64).log2()).floor() as isize
}

quickcheck::quickcheck! {
    fn size_matches_iteration(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut net = 0isize;

        for op in &ops {
            match op {
                Op::Insert(k) => {
                    if tree.insert(*k) {
                        net += 1;
                    }
                }
                Op::Remove(k) => {
                    if tree.remove(k) {
                        net -= 1;
                    }
                }
            }
        }

        tree.iter().count() == tree.len() && tree.len() as isize == net
    }
}

quickcheck::quickcheck! {
    fn iteration_is_sorted(xs: Vec<i32>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let values: Vec<_> = tree.iter().collect();
        values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn height_is_logarithmic(ops: Vec<Op<i16>>) -> bool {
        let mut tree = Tree::new();

        ops.iter().all(|op| {
            match op {
                Op::Insert(k) => tree.insert(*k),
                Op::Remove(k) => tree.remove(k),
            };
            tree.height() <= max_height(tree.len())
        })
    }
}

#[test]
fn ascending_inserts_stay_short() {
    let mut tree = Tree::new();
    for x in 0..100_000 {
        tree.insert(x);
        assert!(tree.height() <= max_height(tree.len()));
    }
    assert_eq!(tree.len(), 100_000);
}

#[test]
fn descending_inserts_stay_short() {
    let mut tree = Tree::new();
    for x in (0..100_000).rev() {
        tree.insert(x);
        assert!(tree.height() <= max_height(tree.len()));
    }
}

#[test]
fn large_random_inserts_and_removes_stay_short() {
    let mut g = Gen::new(50_000);
    let xs = Vec::<i32>::arbitrary(&mut g);
    let mut tree = Tree::new();

    for x in &xs {
        tree.insert(*x);
        assert!(tree.height() <= max_height(tree.len()));
    }
    for x in xs.iter().step_by(2) {
        tree.remove(x);
        assert!(tree.height() <= max_height(tree.len()));
    }
    assert_eq!(tree.iter().count(), tree.len());
}
