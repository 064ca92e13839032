use crate::types::Sequence;

/// Does `x` occur in `xs`?
pub fn elem<S>(x: &S::Item, xs: &S) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    xs.iter().any(|y| y == x)
}

pub fn not_elem<S>(x: &S::Item, xs: &S) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    !elem(x, xs)
}

/// Elements of `xs` that also occur in `ys`.
///
/// Order and multiplicity come from `xs`: each duplicate in `xs` is tested
/// on its own.
pub fn intersect<S>(xs: &S, ys: &S) -> S
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    S::from_iter_seq(xs.iter().filter(|x| elem(*x, ys)).cloned())
}

/// Elements of `xs` absent from `ys`, followed by all of `ys`.
///
/// Duplicates within `ys` are kept.
pub fn union_of<S>(xs: &S, ys: &S) -> S
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    let mut out = S::with_capacity(xs.len() + ys.len());
    for x in xs.iter() {
        if not_elem(x, ys) {
            out.push(x.clone());
        }
    }
    out.extend_from(ys);
    out
}

pub fn is_prefix_of<S>(needle: &S, haystack: &S) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    needle.len() <= haystack.len() && matches_at(needle, haystack, 0)
}

pub fn is_suffix_of<S>(needle: &S, haystack: &S) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    needle.len() <= haystack.len()
        && matches_at(needle, haystack, haystack.len() - needle.len())
}

/// Does `needle` occur as a contiguous run anywhere in `haystack`?
pub fn is_infix_of<S>(needle: &S, haystack: &S) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    find_from(needle, haystack, 0).is_some()
}

/// First-occurrence-preserving deduplication.
pub fn nub<S>(xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    let mut out = S::new();
    for x in xs.iter() {
        if not_elem(x, &out) {
            out.push(x.clone());
        }
    }
    out
}

// Caller guarantees `start + needle.len() <= haystack.len()`.
fn matches_at<S>(needle: &S, haystack: &S, start: usize) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    needle
        .iter()
        .zip(haystack.iter().skip(start))
        .all(|(a, b)| a == b)
}

/// Index of the first occurrence of `needle` in `haystack` at or after `from`.
///
/// An empty needle matches at `from` whenever `from` is in bounds.
pub(crate) fn find_from<S>(needle: &S, haystack: &S, from: usize) -> Option<usize>
where
    S: Sequence,
    S::Item: PartialEq,
{
    let last_start = haystack.len().checked_sub(needle.len())?;
    (from..=last_start).find(|&start| matches_at(needle, haystack, start))
}
