//! Eager, pure list combinators for any ordered, indexable sequence.
//!
//! `fct-core` provides the familiar functional-language list toolkit
//! (mapping, folding, positional slicing, set-like operations, grouping,
//! splitting, and combinatorial generators) written once against the
//! [`Sequence`] capability trait. `Vec`, `VecDeque` and, with the `smallvec`
//! feature, `SmallVec` all plug in unchanged.
//!
//! Every combinator borrows its input and returns an owned result, so the
//! same inputs always produce the same outputs and calls are safe to run
//! from any number of threads.
//!
//! ```
//! use fct_core::prelude::*;
//!
//! let xs = vec![1, 1, 2, 2, 2, 3];
//! assert_eq!(group(&xs), vec![vec![1, 1], vec![2, 2, 2], vec![3]]);
//!
//! let (evens, odds) = partition(|x| x % 2 == 0, &vec![1, 2, 3, 4, 5]);
//! assert_eq!((evens, odds), (vec![2, 4], vec![1, 3, 5]));
//! ```

pub mod io;
pub mod list;
pub mod text;
pub mod types;

pub use types::{SeqError, Sequence};

/// Glob-importable surface: the error and the combinators.
///
/// The [`Sequence`] trait is left out so that its `get`/`iter` methods do not
/// shadow the slice methods of the same name on `Vec`. `list::drop` and
/// `list::take` are left out as well; `drop` would shadow `std::mem::drop`.
pub mod prelude {
    pub use crate::list::{
        all, any, break_when, concat, conjunction, disjunction, drop_while, elem, filter, group,
        head, init, inits, intercalate, intersect, intersperse, is_infix_of, is_prefix_of,
        is_suffix_of, iterate, last, length, map, maximum, minimum, not_elem, nub, null,
        partition, permutations, product, replicate, reverse, sort, span, split_at,
        split_one_of, split_on, split_when, subsets, sum, tail, tails, take_while, transpose,
        union_of, until, unzip, zip, zip_with,
    };
    pub use crate::text::{lines, to_lower, to_upper, unlines, unwords, words};
    pub use crate::types::SeqError;
}
