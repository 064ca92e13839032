use crate::list::copy_range;
use crate::types::Sequence;

/// Maximal runs of consecutive equal elements.
///
/// Concatenating the runs gives back `xs`. An empty sequence has no runs.
pub fn group<S>(xs: &S) -> S::Rebind<S>
where
    S: Sequence,
    S::Item: Clone + PartialEq,
{
    let len = xs.len();
    let mut out = <S::Rebind<S> as Sequence>::new();
    let mut start = 0;
    for end in 1..=len {
        if end == len || xs.get(end) != xs.get(start) {
            out.push(copy_range(xs, start, end));
            start = end;
        }
    }
    out
}

/// `(matches, non_matches)`, each in original order.
pub fn partition<S, P>(mut predicate: P, xs: &S) -> (S, S)
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut matches = S::new();
    let mut rest = S::new();
    for x in xs.iter() {
        if predicate(x) {
            matches.push(x.clone());
        } else {
            rest.push(x.clone());
        }
    }
    (matches, rest)
}

/// Put `sep` between every pair of adjacent elements.
pub fn intersperse<S>(sep: &S::Item, xs: &S) -> S
where
    S: Sequence,
    S::Item: Clone,
{
    let mut out = S::with_capacity((2 * xs.len()).saturating_sub(1));
    for (i, x) in xs.iter().enumerate() {
        if i > 0 {
            out.push(sep.clone());
        }
        out.push(x.clone());
    }
    out
}

/// Join `xxs` with `sep` between each pair; `concat(intersperse(sep, xxs))`.
pub fn intercalate<O, S>(sep: &S, xxs: &O) -> S
where
    O: Sequence<Item = S>,
    S: Sequence,
    S::Item: Clone,
{
    let mut out = S::new();
    for (i, xs) in xxs.iter().enumerate() {
        if i > 0 {
            out.extend_from(sep);
        }
        out.extend_from(xs);
    }
    out
}
