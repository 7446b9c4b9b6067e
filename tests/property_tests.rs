//! Property-based tests for split ends.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated operation sequences, checked against a `Vec` model.

use proptest::prelude::*;

use splitends::{SplitEnd, SplitEndError};

/// One step applied to a split end.
#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Snip,
    Cut(usize),
}

/// Strategy for generating operations, biased towards pushes so stacks grow.
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Snip),
        1 => (0usize..6).prop_map(Op::Cut),
    ]
}

/// Strategy for a root value plus the values pushed on top of it.
fn root_and_values() -> impl Strategy<Value = (i32, Vec<i32>)> {
    (any::<i32>(), prop::collection::vec(any::<i32>(), 0..40))
}

/// Apply `op` to both the split end and its model (root first, tip last).
fn apply(se: &mut SplitEnd<i32>, model: &mut Vec<i32>, op: &Op) -> Result<(), TestCaseError> {
    match op {
        Op::Push(v) => {
            se.push(*v);
            model.push(*v);
        }
        Op::Snip => {
            if model.len() > 1 {
                prop_assert_eq!(se.snip(), Ok(model.pop().unwrap()));
            } else {
                prop_assert_eq!(se.snip(), Err(SplitEndError::RootBoundary));
            }
        }
        Op::Cut(n) => {
            let take = (*n).min(model.len() - 1);
            let expected: Vec<i32> = (0..take).map(|_| model.pop().unwrap()).collect();
            prop_assert_eq!(se.cut(*n), expected);
        }
    }
    Ok(())
}

proptest! {
    /// Length never drops below one, whatever the operations.
    #[test]
    fn length_is_at_least_one(root in any::<i32>(), ops in prop::collection::vec(op(), 0..80)) {
        let mut se = SplitEnd::new(root);
        let mut model = vec![root];
        for op in &ops {
            apply(&mut se, &mut model, op)?;
            prop_assert!(se.len() >= 1);
            prop_assert_eq!(se.len(), model.len());
            prop_assert_eq!(*se.root(), root);
        }
    }

    /// A split end always matches its model, tip to root.
    #[test]
    fn matches_vec_model(root in any::<i32>(), ops in prop::collection::vec(op(), 0..80)) {
        let mut se = SplitEnd::new(root);
        let mut model = vec![root];
        for op in &ops {
            apply(&mut se, &mut model, op)?;
        }
        let tip_first: Vec<i32> = se.iter().copied().collect();
        let expected: Vec<i32> = model.iter().rev().copied().collect();
        prop_assert_eq!(tip_first, expected);
        let root_first: Vec<i32> = se.iter_from_root().copied().collect();
        prop_assert_eq!(root_first, model);
    }

    /// Push grows the length by one and puts the value on top.
    #[test]
    fn push_increments_and_peeks((root, values) in root_and_values(), v in any::<i32>()) {
        let mut se = SplitEnd::from_values(root, values);
        let before = se.len();
        se.push(v);
        prop_assert_eq!(se.len(), before + 1);
        prop_assert_eq!(*se.peek(), v);
    }

    /// Snip returns values in LIFO order, one length at a time.
    #[test]
    fn snip_is_lifo((root, values) in root_and_values()) {
        let mut se = SplitEnd::from_values(root, values.clone());
        for expected in values.iter().rev() {
            let before = se.len();
            prop_assert_eq!(se.snip(), Ok(*expected));
            prop_assert_eq!(se.len(), before - 1);
        }
        prop_assert_eq!(se.len(), 1);
        prop_assert_eq!(*se.peek(), root);
    }

    /// Snipping a root-only split end fails and changes nothing.
    #[test]
    fn snip_at_root_fails(root in any::<i32>()) {
        let mut se = SplitEnd::new(root);
        let before = se.clone();
        prop_assert_eq!(se.snip(), Err(SplitEndError::RootBoundary));
        prop_assert_eq!(&se, &before);
        prop_assert_eq!(se.len(), 1);
        prop_assert_eq!(*se.peek(), root);
    }

    /// Copies start equal and stay independent once either side moves.
    #[test]
    fn copies_are_independent(
        (root, values) in root_and_values(),
        left_ops in prop::collection::vec(op(), 0..30),
        right_ops in prop::collection::vec(op(), 0..30),
    ) {
        let mut left = SplitEnd::from_values(root, values.clone());
        let mut right = left.clone();
        prop_assert_eq!(right.len(), left.len());
        prop_assert_eq!(right.peek(), left.peek());

        let mut left_model: Vec<i32> = std::iter::once(root).chain(values).collect();
        let mut right_model = left_model.clone();
        for op in &left_ops {
            apply(&mut left, &mut left_model, op)?;
        }
        for op in &right_ops {
            apply(&mut right, &mut right_model, op)?;
        }

        prop_assert_eq!(left.iter_from_root().copied().collect::<Vec<_>>(), left_model);
        prop_assert_eq!(right.iter_from_root().copied().collect::<Vec<_>>(), right_model);
    }

    /// `is_extended` tracks `len() > 1` in every reachable state.
    #[test]
    fn is_extended_matches_length(root in any::<i32>(), ops in prop::collection::vec(op(), 0..80)) {
        let mut se = SplitEnd::new(root);
        let mut model = vec![root];
        prop_assert!(!se.is_extended());
        for op in &ops {
            apply(&mut se, &mut model, op)?;
            prop_assert_eq!(se.is_extended(), se.len() > 1);
        }
    }

    /// Rebuilding from the same values gives content-equal, distinct handles.
    #[test]
    fn content_eq_ignores_identity((root, values) in root_and_values()) {
        let a = SplitEnd::from_values(root, values.clone());
        let b = SplitEnd::from_values(root, values);
        prop_assert!(a.content_eq(&b));
        prop_assert!(a != b);
        prop_assert_eq!(a.shared_len(&b), 0);
    }

    /// Split shares exactly the original's nodes.
    #[test]
    fn split_shares_prefix((root, values) in root_and_values(), more in prop::collection::vec(any::<i32>(), 0..10)) {
        let base = SplitEnd::from_values(root, values);
        let grown = base.split(more.clone());
        prop_assert_eq!(grown.len(), base.len() + more.len());
        prop_assert_eq!(grown.shared_len(&base), base.len());
    }
}
