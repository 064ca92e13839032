use std::collections::VecDeque;

use fct_core::list::{
    concat, group, inits, map, permutations, reverse, split_on, tail, take, transpose, zip,
};
use fct_core::{SeqError, Sequence};

fn deque<T: Clone>(xs: &[T]) -> VecDeque<T> {
    xs.iter().cloned().collect()
}

#[test]
fn bounds_checked_access() {
    let xs = vec![10, 20, 30];
    assert_eq!(Sequence::at(&xs, 2), Ok(&30));
    assert_eq!(
        Sequence::at(&xs, 3),
        Err(SeqError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(Sequence::get(&xs, 7), None);
}

#[test]
fn slice_copies_a_sub_range() {
    let xs = vec!['a', 'b', 'c', 'd'];
    assert_eq!(Sequence::slice(&xs, 1..3), Ok(vec!['b', 'c']));
    assert_eq!(Sequence::slice(&xs, 4..4), Ok(vec![]));
    assert!(matches!(
        Sequence::slice(&xs, 2..5),
        Err(SeqError::OutOfRange { index: 5, len: 4 })
    ));
    #[allow(clippy::reversed_empty_ranges)]
    let inverted = Sequence::slice(&xs, 3..1);
    assert!(matches!(inverted, Err(SeqError::InvalidArgument(_))));
}

#[test]
fn deque_slice_uses_default_construction() {
    let xs = deque(&[1, 2, 3, 4]);
    assert_eq!(xs.slice(1..4), Ok(deque(&[2, 3, 4])));
    assert!(xs.slice(0..9).is_err());
}

#[test]
fn sequence_iter_is_double_ended_and_exact() {
    let xs = deque(&[1, 2, 3, 4, 5]);
    let mut iter = Sequence::iter(&xs);
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.nth(1), Some(&3));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn combinators_keep_the_deque_container() {
    let xs = deque(&[3, 3, 1, 2]);

    let doubled: VecDeque<i32> = map(|x| x * 2, &xs);
    assert_eq!(doubled, deque(&[6, 6, 2, 4]));

    assert_eq!(reverse(&xs), deque(&[2, 1, 3, 3]));
    assert_eq!(take(2, &xs), deque(&[3, 3]));
    assert_eq!(tail(&xs), Ok(deque(&[3, 1, 2])));

    let runs: VecDeque<VecDeque<i32>> = group(&xs);
    assert_eq!(runs.len(), 3);
    assert_eq!(concat(&runs), xs);

    assert_eq!(inits(&xs).len(), xs.len() + 1);
    assert_eq!(permutations(&deque(&[2, 1])), deque(&[deque(&[1, 2]), deque(&[2, 1])]));
}

#[test]
fn deque_and_vec_agree() {
    let v = vec![1, 0, 2, 0, 3];
    let d = deque(&v);

    let from_vec = split_on(&vec![0], &v).unwrap();
    let from_deque = split_on(&deque(&[0]), &d).unwrap();
    let from_deque: Vec<Vec<i32>> = from_deque
        .into_iter()
        .map(|fragment| fragment.into_iter().collect())
        .collect();
    assert_eq!(from_vec, from_deque);

    let grid = deque(&[deque(&[1, 2]), deque(&[3])]);
    assert_eq!(transpose(&grid), deque(&[deque(&[1, 3]), deque(&[2])]));
}

#[test]
fn zip_may_mix_container_types() {
    let xs = vec![1, 2, 3];
    let ys = deque(&['a', 'b']);
    let pairs: Vec<(i32, char)> = zip(&xs, &ys);
    assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
}

#[cfg(feature = "smallvec")]
#[test]
fn smallvec_conforms() {
    use fct_core::list::{nub, split_at};
    use smallvec::{smallvec, SmallVec};

    let xs: SmallVec<[i32; 4]> = smallvec![4, 4, 1, 2, 1];
    assert_eq!(nub(&xs).as_slice(), &[4, 1, 2]);

    let (left, right) = split_at(2, &xs);
    assert_eq!(left.as_slice(), &[4, 4]);
    assert_eq!(right.as_slice(), &[1, 2, 1]);

    let labels: SmallVec<[String; 4]> = map(|x| x.to_string(), &xs);
    assert_eq!(labels.len(), 5);
}
