use crate::list::copy_range;
use crate::types::{SeqError, Sequence};

/// First element, or `None` for an empty sequence.
pub fn head<S>(xs: &S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    xs.get(0).cloned()
}

/// Last element, or `None` for an empty sequence.
pub fn last<S>(xs: &S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    xs.iter().next_back().cloned()
}

/// Everything but the first element.
///
/// An empty sequence has no first element to remove and yields
/// [`SeqError::OutOfRange`].
pub fn tail<S>(xs: &S) -> Result<S, SeqError>
where
    S: Sequence,
    S::Item: Clone,
{
    if xs.is_empty() {
        return Err(SeqError::out_of_range(0, 0));
    }
    Ok(copy_range(xs, 1, xs.len()))
}

/// Everything but the last element. Fails like [`tail`] on empty input.
pub fn init<S>(xs: &S) -> Result<S, SeqError>
where
    S: Sequence,
    S::Item: Clone,
{
    if xs.is_empty() {
        return Err(SeqError::out_of_range(0, 0));
    }
    Ok(copy_range(xs, 0, xs.len() - 1))
}

/// The first `n` elements, or all of them when `n` exceeds the length.
pub fn take<S>(n: usize, xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone,
{
    copy_range(xs, 0, n.min(xs.len()))
}

/// Everything after the first `n` elements; empty when `n` exceeds the length.
pub fn drop<S>(n: usize, xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone,
{
    let len = xs.len();
    copy_range(xs, n.min(len), len)
}

/// `(take(n, xs), drop(n, xs))`.
pub fn split_at<S>(n: usize, xs: &S) -> (S, S)
where
    S: Sequence,
    S::Item: Clone,
{
    let len = xs.len();
    let n = n.min(len);
    (copy_range(xs, 0, n), copy_range(xs, n, len))
}

/// Split after the longest prefix satisfying `predicate`.
pub fn span<S, P>(mut predicate: P, xs: &S) -> (S, S)
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let boundary = xs.iter().take_while(|x| predicate(*x)).count();
    split_at(boundary, xs)
}

/// Split before the first element satisfying `predicate`.
pub fn break_when<S, P>(mut predicate: P, xs: &S) -> (S, S)
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    span(|x| !predicate(x), xs)
}

/// Every prefix, shortest (empty) first, ending with `xs` itself.
pub fn inits<S>(xs: &S) -> S::Rebind<S>
where
    S: Sequence,
    S::Item: Clone,
{
    let len = xs.len();
    let mut out = <S::Rebind<S> as Sequence>::with_capacity(len + 1);
    for end in 0..=len {
        out.push(copy_range(xs, 0, end));
    }
    out
}

/// Every suffix, starting with `xs` itself and ending with the empty sequence.
pub fn tails<S>(xs: &S) -> S::Rebind<S>
where
    S: Sequence,
    S::Item: Clone,
{
    let len = xs.len();
    let mut out = <S::Rebind<S> as Sequence>::with_capacity(len + 1);
    for start in 0..=len {
        out.push(copy_range(xs, start, len));
    }
    out
}
