use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::types::error::SeqError;

/// The capability set every combinator in this crate is written against.
///
/// A conforming container is ordered, finite and 0-indexed. It must be able
/// to answer its length, hand out a shared reference by index, and grow at
/// the back. Everything else (sub-ranges, appends, iteration) is derived
/// from those three operations, so plugging in a new container only needs
/// the required methods.
///
/// `Rebind<U>` names the same container family holding a different element
/// type. It is what `map` and `zip` return, and what every
/// sequence-of-sequences result (`group`, `inits`, `split_on`, ...) is built
/// from.
pub trait Sequence: Sized {
    type Item;
    type Rebind<U>: Sequence<Item = U>;

    fn new() -> Self;

    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    /// `None` exactly when `index >= self.len()`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked access.
    fn at(&self, index: usize) -> Result<&Self::Item, SeqError> {
        self.get(index)
            .ok_or_else(|| SeqError::out_of_range(index, self.len()))
    }

    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Copy `range` out into a new, independent sequence.
    fn slice(&self, range: Range<usize>) -> Result<Self, SeqError>
    where
        Self::Item: Clone,
    {
        if range.start > range.end {
            return Err(SeqError::InvalidArgument("range start exceeds range end"));
        }
        let len = self.len();
        if range.end > len {
            return Err(SeqError::out_of_range(range.end, len));
        }
        Ok(Self::from_iter_seq(
            self.iter().skip(range.start).take(range.len()).cloned(),
        ))
    }

    /// Append clones of every element of `other`.
    fn extend_from(&mut self, other: &Self)
    where
        Self::Item: Clone,
    {
        for x in other.iter() {
            self.push(x.clone());
        }
    }

    fn from_iter_seq<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        for x in iter {
            out.push(x);
        }
        out
    }
}

/// Index-driven iterator over any [`Sequence`].
pub struct Iter<'a, S> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence> Iter<'a, S> {
    fn new(seq: &'a S) -> Self {
        Self {
            seq,
            front: 0,
            back: seq.len(),
        }
    }
}

impl<S> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S: Sequence> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.seq.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<S: Sequence> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.seq.get(self.back)
    }
}

impl<S: Sequence> ExactSizeIterator for Iter<'_, S> {}

impl<S: Sequence> FusedIterator for Iter<'_, S> {}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Rebind<U> = Vec<U>;

    fn new() -> Self {
        Vec::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn slice(&self, range: Range<usize>) -> Result<Self, SeqError>
    where
        T: Clone,
    {
        if range.start > range.end {
            return Err(SeqError::InvalidArgument("range start exceeds range end"));
        }
        let len = self.as_slice().len();
        self.as_slice()
            .get(range.clone())
            .map(<[T]>::to_vec)
            .ok_or_else(|| SeqError::out_of_range(range.end, len))
    }

    fn extend_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.extend_from_slice(other.as_slice())
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Rebind<U> = VecDeque<U>;

    fn new() -> Self {
        VecDeque::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn push(&mut self, item: T) {
        self.push_back(item)
    }
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> Sequence for smallvec::SmallVec<[T; N]> {
    type Item = T;
    type Rebind<U> = smallvec::SmallVec<[U; N]>;

    fn new() -> Self {
        smallvec::SmallVec::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        smallvec::SmallVec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn push(&mut self, item: T) {
        smallvec::SmallVec::push(self, item)
    }
}
