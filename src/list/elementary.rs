use std::iter::{Product, Sum};

use crate::types::Sequence;

/// Apply `f` to every element, preserving order and length.
pub fn map<S, U, F>(f: F, xs: &S) -> S::Rebind<U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> U,
{
    Sequence::from_iter_seq(xs.iter().map(f))
}

/// Keep every element satisfying `predicate`, in order.
pub fn filter<S, P>(mut predicate: P, xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    S::from_iter_seq(xs.iter().filter(|x| predicate(*x)).cloned())
}

/// Longest prefix whose elements all satisfy `predicate`.
///
/// Unlike [`filter`], scanning stops for good at the first failing element.
pub fn take_while<S, P>(mut predicate: P, xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    S::from_iter_seq(xs.iter().take_while(|x| predicate(*x)).cloned())
}

/// Everything after the prefix [`take_while`] would return.
pub fn drop_while<S, P>(mut predicate: P, xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    S::from_iter_seq(xs.iter().skip_while(|x| predicate(*x)).cloned())
}

/// Left-to-right sum. The sum of nothing is the additive identity.
pub fn sum<S>(xs: &S) -> S::Item
where
    S: Sequence,
    S::Item: Clone + Sum,
{
    xs.iter().cloned().sum()
}

/// Left-to-right product. The product of nothing is the multiplicative identity.
pub fn product<S>(xs: &S) -> S::Item
where
    S: Sequence,
    S::Item: Clone + Product,
{
    xs.iter().cloned().product()
}

/// Logical and of every element; `true` for an empty sequence, matching [`all`].
pub fn conjunction<S>(xs: &S) -> bool
where
    S: Sequence<Item = bool>,
{
    xs.iter().all(|&b| b)
}

/// Logical or of every element; `false` for an empty sequence, matching [`any`].
pub fn disjunction<S>(xs: &S) -> bool
where
    S: Sequence<Item = bool>,
{
    xs.iter().any(|&b| b)
}

/// Largest element, first occurrence on ties.
pub fn maximum<S>(xs: &S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone + PartialOrd,
{
    let mut iter = xs.iter();
    let mut best = iter.next()?;
    for x in iter {
        if x > best {
            best = x;
        }
    }
    Some(best.clone())
}

/// Smallest element, first occurrence on ties.
pub fn minimum<S>(xs: &S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone + PartialOrd,
{
    let mut iter = xs.iter();
    let mut best = iter.next()?;
    for x in iter {
        if x < best {
            best = x;
        }
    }
    Some(best.clone())
}

pub fn any<S, P>(predicate: P, xs: &S) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    xs.iter().any(predicate)
}

pub fn all<S, P>(predicate: P, xs: &S) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    xs.iter().all(predicate)
}

/// Flatten one level of nesting.
pub fn concat<O>(xxs: &O) -> O::Item
where
    O: Sequence,
    O::Item: Sequence,
    <O::Item as Sequence>::Item: Clone,
{
    let total = xxs.iter().map(Sequence::len).sum();
    let mut out = <O::Item as Sequence>::with_capacity(total);
    for xs in xxs.iter() {
        out.extend_from(xs);
    }
    out
}

pub fn reverse<S>(xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone,
{
    S::from_iter_seq(xs.iter().rev().cloned())
}

/// Stable ascending sort into a new sequence.
pub fn sort<S>(xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone + Ord,
{
    let mut sorted: Vec<S::Item> = xs.iter().cloned().collect();
    sorted.sort();
    S::from_iter_seq(sorted)
}

pub fn length<S: Sequence>(xs: &S) -> usize {
    xs.len()
}

pub fn null<S: Sequence>(xs: &S) -> bool {
    xs.is_empty()
}

/// `n` copies of `x`.
pub fn replicate<S>(n: usize, x: S::Item) -> S
where
    S: Sequence,
    S::Item: Clone,
{
    S::from_iter_seq(std::iter::repeat(x).take(n))
}

/// The first `n` values of `x, f(x), f(f(x)), ...`.
///
/// `f` is called exactly `n - 1` times.
pub fn iterate<S, F>(n: usize, mut f: F, x: S::Item) -> S
where
    S: Sequence,
    F: FnMut(&S::Item) -> S::Item,
{
    let mut out = S::with_capacity(n);
    if n == 0 {
        return out;
    }
    let mut current = x;
    for _ in 1..n {
        let next = f(&current);
        out.push(current);
        current = next;
    }
    out.push(current);
    out
}

/// Apply `f` until `predicate` holds. Returns `x` untouched if it already does.
pub fn until<T, P, F>(mut predicate: P, mut f: F, x: T) -> T
where
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> T,
{
    let mut out = x;
    while !predicate(&out) {
        out = f(&out);
    }
    out
}
