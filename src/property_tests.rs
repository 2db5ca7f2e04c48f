use proptest_derive::Arbitrary;

use crate::{List, ListError};
use proptest::prelude::*;

// operations applied in any order, indices are allowed to be out of range
#[derive(Debug, Clone, Arbitrary)]
enum ListOps<T> {
    Add(T),
    AddAll(Vec<T>),
    Set(u8, T),
    Remove(u8),
    Swap(u8, u8),
    Pop,
    Dequeue,
    Reverse,
    Clear,
}

// applies `op` to both the list and a Vec model, checking that results agree
fn apply<T>(
    list: &mut List<T>,
    model: &mut Vec<T>,
    op: &ListOps<T>,
) -> std::result::Result<(), TestCaseError>
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    match op {
        ListOps::Add(item) => {
            list.add(item.clone());
            model.push(item.clone());
        }
        ListOps::AddAll(items) => {
            list.add_all(items);
            model.extend_from_slice(items);
        }
        ListOps::Set(index, item) => {
            let index = usize::from(*index);
            let result = list.set(index, item.clone());
            if index < model.len() {
                prop_assert_eq!(result, Ok(()));
                model[index] = item.clone();
            } else {
                prop_assert_eq!(result, Err(ListError::IndexOutOfBounds { index, len: model.len() }));
            }
        }
        ListOps::Remove(index) => {
            let index = usize::from(*index);
            let result = list.remove(index);
            if index < model.len() {
                prop_assert_eq!(result, Ok(model.remove(index)));
            } else {
                prop_assert_eq!(result, Err(ListError::IndexOutOfBounds { index, len: model.len() }));
            }
        }
        ListOps::Swap(a, b) => {
            let (a, b) = (usize::from(*a), usize::from(*b));
            let result = list.swap(a, b);
            if a < model.len() && b < model.len() {
                prop_assert_eq!(result, Ok(()));
                model.swap(a, b);
            } else {
                let failed = matches!(result, Err(ListError::IndexOutOfBounds { .. }));
                prop_assert!(failed, "swap({}, {}) should fail out of bounds", a, b);
            }
        }
        ListOps::Pop => {
            if model.is_empty() {
                prop_assert_eq!(list.pop(), Err(ListError::EmptyCollection));
            } else {
                prop_assert_eq!(list.pop(), Ok(model.remove(0)));
            }
        }
        ListOps::Dequeue => match model.pop() {
            Some(item) => {
                prop_assert_eq!(list.dequeue(), Ok(item));
            }
            None => {
                prop_assert_eq!(list.dequeue(), Err(ListError::EmptyCollection));
            }
        },
        ListOps::Reverse => {
            list.reverse();
            model.reverse();
        }
        ListOps::Clear => {
            list.clear();
            model.clear();
        }
    }
    Ok(())
}

proptest! {
    // Test that any sequence of operations keeps the list identical to a Vec model
    #[test]
    fn test_ops_match_model(ref ops in proptest::collection::vec(any::<ListOps<i32>>(), 0..100)) {
        let mut list = List::new();
        let mut model = Vec::new();
        for op in ops.iter() {
            apply(&mut list, &mut model, op)?;
            prop_assert_eq!(list.as_slice(), model.as_slice());
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), list.len() == 0);
        }
    }

    // Same as above with an element type that owns heap data
    #[test]
    fn test_ops_match_model_string(ref ops in proptest::collection::vec(any::<ListOps<String>>(), 0..50)) {
        let mut list = List::new();
        let mut model = Vec::new();
        for op in ops.iter() {
            apply(&mut list, &mut model, op)?;
        }
        prop_assert_eq!(list.into_vec(), model);
    }

    // head/tail/pop/dequeue fail exactly when the list is empty
    #[test]
    fn test_empty_gates_ends(ref items in proptest::collection::vec(any::<i32>(), 0..4)) {
        let list = List::from(items.clone());
        prop_assert_eq!(list.head().is_err(), list.is_empty());
        prop_assert_eq!(list.tail().is_err(), list.is_empty());
        prop_assert_eq!(list.clone().pop().is_err(), list.is_empty());
        prop_assert_eq!(list.clone().dequeue().is_err(), list.is_empty());
    }

    #[test]
    fn test_remove_returns_prior_get(ref items in proptest::collection::vec(any::<i32>(), 1..40), index in any::<prop::sample::Index>()) {
        let mut list = List::from(items.clone());
        let i = index.index(items.len());
        let prior = *list.get(i).unwrap();
        prop_assert_eq!(list.remove(i), Ok(prior));
        prop_assert_eq!(list.len(), items.len() - 1);
        prop_assert_eq!(&list.as_slice()[..i], &items[..i]);
        prop_assert_eq!(&list.as_slice()[i..], &items[i + 1..]);
    }

    #[test]
    fn test_reverse_twice(ref items in proptest::collection::vec(any::<i32>(), 0..40)) {
        let mut list = List::from(items.clone());
        list.reverse();
        list.reverse();
        prop_assert_eq!(list.as_slice(), items.as_slice());
    }

    #[test]
    fn test_swap_self_inverse(ref items in proptest::collection::vec(any::<i32>(), 1..40), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let (a, b) = (a.index(items.len()), b.index(items.len()));
        let mut list = List::from(items.clone());
        list.swap(a, a).unwrap();
        prop_assert_eq!(list.as_slice(), items.as_slice());
        list.swap(a, b).unwrap();
        list.swap(a, b).unwrap();
        prop_assert_eq!(list.as_slice(), items.as_slice());
    }

    // sorted output is non-decreasing and a permutation of the input
    #[test]
    fn test_sort_non_decreasing(ref items in proptest::collection::vec(any::<i16>(), 0..60)) {
        let mut list = List::from(items.clone());
        list.sort(|a, b| a < b);
        for pair in list.as_slice().windows(2) {
            prop_assert!(!(pair[1] < pair[0]));
        }
        let mut expected = items.clone();
        expected.sort_unstable();
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_union_concatenates(ref a in proptest::collection::vec(0..8i32, 0..20), ref b in proptest::collection::vec(0..8i32, 0..20)) {
        let (left, right) = (List::from(a.clone()), List::from(b.clone()));
        let union = left.union(&right);
        prop_assert_eq!(union.len(), a.len() + b.len());
        let expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        prop_assert_eq!(union.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_intersection_filters_left(ref a in proptest::collection::vec(0..8i32, 0..20), ref b in proptest::collection::vec(0..8i32, 0..20)) {
        let (left, right) = (List::from(a.clone()), List::from(b.clone()));
        let expected: Vec<i32> = a.iter().filter(|x| b.contains(x)).copied().collect();
        let intersection = left.intersection(&right);
        prop_assert_eq!(intersection.as_slice(), expected.as_slice());
        prop_assert_eq!(left.as_slice(), a.as_slice());
        prop_assert_eq!(right.as_slice(), b.as_slice());
    }
}
