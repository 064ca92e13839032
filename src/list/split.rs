use crate::list::copy_range;
use crate::list::relational::{elem, find_from};
use crate::types::{SeqError, Sequence};

/// Split `haystack` on every non-overlapping occurrence of `needle`,
/// scanning left to right.
///
/// There is always one more fragment than there were matches, so
/// `intercalate(needle, split_on(needle, haystack)?)` gives back `haystack`.
/// An empty needle has no meaningful match width and is rejected with
/// [`SeqError::InvalidArgument`].
pub fn split_on<S>(needle: &S, haystack: &S) -> Result<S::Rebind<S>, SeqError>
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    if needle.is_empty() {
        return Err(SeqError::InvalidArgument("split_on needle must not be empty"));
    }

    let mut out = <S::Rebind<S> as Sequence>::new();
    let mut start = 0;
    while let Some(found) = find_from(needle, haystack, start) {
        out.push(copy_range(haystack, start, found));
        start = found + needle.len();
    }
    out.push(copy_range(haystack, start, haystack.len()));
    Ok(out)
}

/// Split on every element that occurs in `needles`.
///
/// Adjacent separators produce empty fragments between them.
pub fn split_one_of<S>(needles: &S, haystack: &S) -> S::Rebind<S>
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    split_when(|x| elem(x, needles), haystack)
}

/// Split on every element satisfying `predicate`, dropping the separators.
pub fn split_when<S, P>(mut predicate: P, xs: &S) -> S::Rebind<S>
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut out = <S::Rebind<S> as Sequence>::new();
    let mut start = 0;
    for (i, x) in xs.iter().enumerate() {
        if predicate(x) {
            out.push(copy_range(xs, start, i));
            start = i + 1;
        }
    }
    out.push(copy_range(xs, start, xs.len()));
    out
}
