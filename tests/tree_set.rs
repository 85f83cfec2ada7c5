use std::collections::BTreeSet;

use pretty_assertions::{assert_eq, assert_ne};
use proptest::prelude::*;
use rb_treeset::{EmptyError, TreeSet, tree_set};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 5_000;

/// Values drawn from a range narrow enough to force collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    FirstAbove(i64),
    FirstBelowEqual(i64),
    Min,
    Max,
    PopFirst,
    PopLast,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => value_strategy().prop_map(SetOp::FirstAbove),
        1 => value_strategy().prop_map(SetOp::FirstBelowEqual),
        1 => Just(SetOp::Min),
        1 => Just(SetOp::Max),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
    ]
}

// ─── Core operations against BTreeSet ────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both TreeSet and BTreeSet and asserts
    /// identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set: TreeSet<i64> = TreeSet::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => prop_assert_eq!(set.insert(*v), model.insert(*v), "insert({})", v),
                SetOp::Remove(v) => prop_assert_eq!(set.remove(v), model.remove(v), "remove({})", v),
                SetOp::Contains(v) => prop_assert_eq!(set.contains(v), model.contains(v), "contains({})", v),
                SetOp::FirstAbove(v) => {
                    let expected = model.range((v + 1)..).next();
                    prop_assert_eq!(set.first_above(v), expected, "first_above({})", v);
                }
                SetOp::FirstBelowEqual(v) => {
                    let expected = model.range(..=*v).next_back();
                    prop_assert_eq!(set.first_below_equal(v), expected, "first_below_equal({})", v);
                }
                SetOp::Min => prop_assert_eq!(set.min().ok(), model.first(), "min()"),
                SetOp::Max => prop_assert_eq!(set.max().ok(), model.last(), "max()"),
                SetOp::PopFirst => prop_assert_eq!(set.pop_first(), model.pop_first(), "pop_first()"),
                SetOp::PopLast => prop_assert_eq!(set.pop_last(), model.pop_last(), "pop_last()"),
            }
            prop_assert_eq!(set.len(), model.len(), "len mismatch after {:?}", op);
        }
        prop_assert!(set.equal_slice(&model.iter().copied().collect::<Vec<_>>()));
    }

    /// Iteration in both directions, owned and borrowed, matches BTreeSet.
    #[test]
    fn iter_matches_btreeset(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let set: TreeSet<i64> = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(
            set.iter().rev().copied().collect::<Vec<_>>(),
            model.iter().rev().copied().collect::<Vec<_>>()
        );
        prop_assert_eq!(set.iter().len(), model.len());
        prop_assert_eq!(set.clone().into_iter().collect::<Vec<_>>(), model.into_iter().collect::<Vec<_>>());
    }

    /// Strict and inclusive bounds agree with BTreeSet ranges, for present and absent pivots.
    #[test]
    fn bounds_match_btreeset(
        values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE / 5),
        pivot in value_strategy(),
    ) {
        let set: TreeSet<i64> = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();

        prop_assert_eq!(set.above(&pivot).to_vec(), model.range((pivot + 1)..).copied().collect::<Vec<_>>());
        prop_assert_eq!(set.above_equal(&pivot).to_vec(), model.range(pivot..).copied().collect::<Vec<_>>());
        prop_assert_eq!(set.below(&pivot).to_vec(), model.range(..pivot).copied().collect::<Vec<_>>());
        prop_assert_eq!(set.below_equal(&pivot).to_vec(), model.range(..=pivot).copied().collect::<Vec<_>>());
        prop_assert_eq!(set.first_above_equal(&pivot), model.range(pivot..).next());
        prop_assert_eq!(set.first_below(&pivot), model.range(..pivot).next_back());
    }

    /// `top_k` / `bottom_k` are the ends of the sorted sequence.
    #[test]
    fn top_and_bottom_k(values in proptest::collection::vec(value_strategy(), 0..500), k in 0usize..600) {
        let set: TreeSet<i64> = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();

        prop_assert_eq!(set.top_k(k), model.iter().take(k).collect::<Vec<_>>());
        prop_assert_eq!(set.bottom_k(k), model.iter().rev().take(k).collect::<Vec<_>>());
    }
}

// ─── Set algebra ─────────────────────────────────────────────────────────────

/// Quadratic reference: is every element of `sub` somewhere in `sup`?
fn naive_subset(sub: &[i64], sup: &[i64]) -> bool {
    sub.iter().all(|a| sup.iter().any(|b| a == b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn algebra_matches_btreeset(
        values_a in proptest::collection::vec(value_strategy(), 0..TEST_SIZE / 5),
        values_b in proptest::collection::vec(value_strategy(), 0..TEST_SIZE / 5),
    ) {
        let a: TreeSet<i64> = values_a.iter().copied().collect();
        let b: TreeSet<i64> = values_b.iter().copied().collect();
        let model_a: BTreeSet<i64> = values_a.iter().copied().collect();
        let model_b: BTreeSet<i64> = values_b.iter().copied().collect();

        prop_assert_eq!(a.union(&b).to_vec(), model_a.union(&model_b).copied().collect::<Vec<_>>());
        prop_assert_eq!(a.intersection(&b).to_vec(), model_a.intersection(&model_b).copied().collect::<Vec<_>>());
        prop_assert_eq!(a.difference(&b).to_vec(), model_a.difference(&model_b).copied().collect::<Vec<_>>());

        // Operands are untouched.
        prop_assert_eq!(a.len(), model_a.len());
        prop_assert_eq!(b.len(), model_b.len());
    }

    #[test]
    fn algebra_identities(
        values_a in proptest::collection::vec(value_strategy(), 0..500),
        values_b in proptest::collection::vec(value_strategy(), 0..500),
    ) {
        let a: TreeSet<i64> = values_a.iter().copied().collect();
        let b: TreeSet<i64> = values_b.iter().copied().collect();
        let union = a.union(&b);
        let intersection = a.intersection(&b);

        prop_assert_eq!(&union, &b.union(&a));
        prop_assert_eq!(&intersection, &b.intersection(&a));
        prop_assert!(union.is_superset(&a) && union.is_superset(&b));
        prop_assert!(intersection.is_subset(&a) && intersection.is_subset(&b));
        prop_assert_eq!(union.len() + intersection.len(), a.len() + b.len());
        prop_assert!(a.difference(&b).intersection(&b).is_empty());
        prop_assert_eq!(&a.difference(&b).union(&intersection), &a);
    }

    #[test]
    fn subset_and_equality_match_naive(
        values_a in proptest::collection::vec(-50i64..50, 0..60),
        values_b in proptest::collection::vec(-50i64..50, 0..60),
    ) {
        let a: TreeSet<i64> = values_a.iter().copied().collect();
        let b: TreeSet<i64> = values_b.iter().copied().collect();
        let (slice_a, slice_b) = (a.to_vec(), b.to_vec());

        prop_assert_eq!(a.is_superset(&b), naive_subset(&slice_b, &slice_a));
        prop_assert_eq!(a.is_subset(&b), naive_subset(&slice_a, &slice_b));
        let naive_equal = naive_subset(&slice_a, &slice_b) && naive_subset(&slice_b, &slice_a);
        prop_assert_eq!(a == b, naive_equal);
        prop_assert_eq!(a.equal_slice(&slice_b), naive_equal);
        let repeated: Vec<i64> = values_b.iter().chain(&values_b).copied().collect();
        prop_assert_eq!(a.equal_slice(&repeated), naive_equal);
        prop_assert!(a.is_superset(&a) && a.is_subset(&a));
    }

    #[test]
    fn remove_if_matches_retain(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE / 5)) {
        let mut set: TreeSet<i64> = values.iter().copied().collect();
        let mut model: BTreeSet<i64> = values.iter().copied().collect();
        let before = model.len();

        model.retain(|v| v % 3 != 0);
        prop_assert_eq!(set.remove_if(|v| v % 3 == 0), model.len() != before);
        prop_assert_eq!(set.to_vec(), model.into_iter().collect::<Vec<_>>());
    }
}

// ─── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn mixed_inserts_come_out_sorted() {
    let mut set = TreeSet::new();
    for n in [4, 7, 1, 5, 2, 8, 9, 3] {
        assert!(set.insert(n));
    }
    assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.min(), Ok(&1));
    assert_eq!(set.max(), Ok(&9));
    assert_eq!(set.len(), 8);

    assert!(set.remove(&4));
    assert!(!set.remove(&4));
    assert!(!set.remove(&6));
    assert_eq!(set.to_vec(), vec![1, 2, 3, 5, 7, 8, 9]);
}

#[test]
fn empty_set_queries() {
    let set: TreeSet<String> = TreeSet::new();
    assert_eq!(set.min(), Err(EmptyError));
    assert_eq!(set.max(), Err(EmptyError));
    assert_eq!(set.first(), None);
    assert!(set.to_vec().is_empty());
    assert!(set.iter().next().is_none());
    assert!(set.contains_slice(&[]));
    assert!(set.equal_slice(&[]));
    assert_eq!(set.to_string(), "[]");
    assert_eq!(format!("{set:?}"), "{}");
}

#[test]
fn top_and_bottom_k_examples() {
    let set = TreeSet::from([3, 9, 1, 7, 5]);
    assert_eq!(set.top_k(2), vec![&1, &3]);
    assert_eq!(set.bottom_k(2), vec![&9, &7]);
    assert_eq!(set.top_k(99).len(), 5);
    assert!(set.bottom_k(0).is_empty());
}

#[test]
fn neighbours_of_every_probe() {
    let set: TreeSet<i32> = (1..=5).collect();
    assert_eq!(set.first_above(&3), Some(&4));
    assert_eq!(set.first_above(&5), None);
    assert_eq!(set.first_above_equal(&5), Some(&5));
    assert_eq!(set.first_below(&3), Some(&2));
    assert_eq!(set.first_below(&1), None);
    assert_eq!(set.first_below_equal(&1), Some(&1));
    assert_eq!(set.first_above(&-10), Some(&1));
    assert_eq!(set.first_below(&10), Some(&5));
}

#[test]
fn strings_with_length_comparator() {
    let mut set = TreeSet::with_comparator(|a: &String, b: &String| a.len().cmp(&b.len()));
    assert!(set.insert("three".to_owned()));
    assert!(set.insert("a".to_owned()));
    // Same length as "three", so the same element under this comparator.
    assert!(!set.insert("seven".to_owned()));
    assert_eq!(set.get(&"xxxxx".to_owned()).map(String::as_str), Some("three"));
    assert_eq!(set.take(&"?".to_owned()).as_deref(), Some("a"));
    assert_eq!(set.to_string(), "[three]");
}

#[test]
fn copy_is_independent() {
    let mut original = TreeSet::from([1, 2, 3]);
    let copy = original.copy();
    original.insert(4);
    assert!(original.remove(&1));
    assert_eq!(copy.to_vec(), vec![1, 2, 3]);
    assert_ne!(copy, original);
    assert_eq!(copy.clone(), copy);
}

#[test]
fn bulk_and_trait_conversions() {
    let mut set: TreeSet<i32> = TreeSet::with_capacity(8);
    assert!(set.capacity() >= 8);
    set.extend([5, 1, 3]);
    set.extend(&[2, 4]);
    assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(set.filter(|n| n % 2 == 1), vec![1, 3, 5]);

    let other = TreeSet::from([4, 5, 6]);
    assert!(set.insert_set(&other));
    assert!(set.remove_set(&other));
    assert_eq!(set.to_vec(), vec![1, 2, 3]);

    let default_set: TreeSet<i32> = TreeSet::default();
    assert!(default_set.is_empty());

    let mut visited = Vec::new();
    set.for_each(|&n| {
        visited.push(n);
        true
    });
    assert_eq!(visited, vec![1, 2, 3]);

    let iter: tree_set::Iter<'_, i32, _> = set.iter();
    assert_eq!(iter.rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.pop_first(), None);
}

#[test]
fn rendering() {
    let set = TreeSet::from([10, 2, 33]);
    assert_eq!(set.to_string(), "[2 10 33]");
    assert_eq!(format!("{set:?}"), "{2, 10, 33}");
    assert_eq!(set.to_string_with(|n| format!("{n:03}")), "[002 010 033]");
}

#[test]
fn large_sequential_workload() {
    let mut set: TreeSet<u32> = (0..20_000).collect();
    assert_eq!(set.len(), 20_000);
    for n in (0..20_000).step_by(2) {
        assert!(set.remove(&n));
    }
    assert_eq!(set.len(), 10_000);
    assert_eq!(set.min(), Ok(&1));
    assert_eq!(set.max(), Ok(&19_999));
    assert_eq!(set.first_above(&100), Some(&101));
    assert_eq!(set.first_below(&100), Some(&99));
}
