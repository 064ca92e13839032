//! Eager list combinators, generic over any [`Sequence`].
//!
//! Every function here borrows its inputs and returns freshly allocated
//! output. Nothing is mutated in place and no result aliases an input.

pub mod combinatorial;
pub mod elementary;
pub mod grouping;
pub mod positional;
pub mod relational;
pub mod split;

pub use combinatorial::{permutations, subsets, transpose, unzip, zip, zip_with};
pub use elementary::{
    all, any, concat, conjunction, disjunction, drop_while, filter, iterate, length, map, maximum,
    minimum, null, product, replicate, reverse, sort, sum, take_while, until,
};
pub use grouping::{group, intercalate, intersperse, partition};
pub use positional::{
    break_when, drop, head, init, inits, last, span, split_at, tail, tails, take,
};
pub use relational::{
    elem, intersect, is_infix_of, is_prefix_of, is_suffix_of, not_elem, nub, union_of,
};
pub use split::{split_one_of, split_on, split_when};

use crate::types::Sequence;

/// Copy `xs[start..end]` into a new sequence. Callers keep the bounds valid.
pub(crate) fn copy_range<S>(xs: &S, start: usize, end: usize) -> S
where
    S: Sequence,
    S::Item: Clone,
{
    debug_assert!(start <= end && end <= xs.len(), "range {start}..{end} outside 0..{}", xs.len());
    S::from_iter_seq(xs.iter().skip(start).take(end - start).cloned())
}
