use crate::types::Sequence;

/// All `2^n` subsets of `xs`.
///
/// Starts from the empty set and, for each element in turn, appends a copy
/// of every subset collected so far with that element added. The output
/// order is therefore fixed: `[], [a], [b], [a, b], [c], ...`.
pub fn subsets<S>(xs: &S) -> S::Rebind<S>
where
    S: Sequence,
    S::Item: Clone,
{
    let capacity = u32::try_from(xs.len())
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .unwrap_or(0);
    let mut out = <S::Rebind<S> as Sequence>::with_capacity(capacity);
    out.push(S::new());

    for x in xs.iter() {
        let mut grown = Vec::with_capacity(out.len());
        for subset in out.iter() {
            let mut next = S::with_capacity(subset.len() + 1);
            next.extend_from(subset);
            next.push(x.clone());
            grown.push(next);
        }
        for subset in grown {
            out.push(subset);
        }
    }
    out
}

/// All `n!` orderings of `xs`, in lexicographic order of the sorted input.
///
/// Positions are permuted rather than values, so equal elements are treated
/// as distinct and produce repeated orderings.
pub fn permutations<S>(xs: &S) -> S::Rebind<S>
where
    S: Sequence,
    S::Item: Clone + Ord,
{
    let mut sorted: Vec<&S::Item> = xs.iter().collect();
    sorted.sort();

    let mut order: Vec<usize> = (0..sorted.len()).collect();
    let mut out = <S::Rebind<S> as Sequence>::new();
    loop {
        out.push(S::from_iter_seq(order.iter().map(|&i| sorted[i].clone())));
        if !next_permutation(&mut order) {
            break;
        }
    }
    out
}

/// Advance `v` to its lexicographic successor. Returns `false` once `v` is
/// the last (descending) arrangement, leaving it untouched.
fn next_permutation<T: Ord>(v: &mut [T]) -> bool {
    if v.len() < 2 {
        return false;
    }

    let mut pivot = v.len() - 1;
    while pivot > 0 && v[pivot - 1] >= v[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = v.len() - 1;
    while v[successor] <= v[pivot - 1] {
        successor -= 1;
    }
    v.swap(pivot - 1, successor);
    v[pivot..].reverse();
    true
}

/// Rows become columns.
///
/// Ragged rows are allowed: output row `i` holds, in row order, the `i`th
/// element of every input row long enough to have one.
pub fn transpose<O>(xxs: &O) -> O
where
    O: Sequence,
    O::Item: Sequence,
    <O::Item as Sequence>::Item: Clone,
{
    let width = xxs.iter().map(Sequence::len).max().unwrap_or(0);
    let mut out = O::with_capacity(width);
    for column in 0..width {
        let cells = xxs.iter().filter_map(|row| row.get(column)).cloned();
        out.push(<O::Item as Sequence>::from_iter_seq(cells));
    }
    out
}

/// Pair elements positionally, stopping at the shorter input.
pub fn zip<S, R>(xs: &S, ys: &R) -> S::Rebind<(S::Item, R::Item)>
where
    S: Sequence,
    R: Sequence,
    S::Item: Clone,
    R::Item: Clone,
{
    Sequence::from_iter_seq(xs.iter().cloned().zip(ys.iter().cloned()))
}

/// Combine elements positionally with `f`, stopping at the shorter input.
pub fn zip_with<S, R, U, F>(mut f: F, xs: &S, ys: &R) -> S::Rebind<U>
where
    S: Sequence,
    R: Sequence,
    F: FnMut(&S::Item, &R::Item) -> U,
{
    Sequence::from_iter_seq(xs.iter().zip(ys.iter()).map(|(x, y)| f(x, y)))
}

pub fn unzip<O, A, B>(pairs: &O) -> (O::Rebind<A>, O::Rebind<B>)
where
    O: Sequence<Item = (A, B)>,
    A: Clone,
    B: Clone,
{
    let mut left = <O::Rebind<A> as Sequence>::with_capacity(pairs.len());
    let mut right = <O::Rebind<B> as Sequence>::with_capacity(pairs.len());
    for (a, b) in pairs.iter() {
        left.push(a.clone());
        right.push(b.clone());
    }
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::next_permutation;

    #[test]
    fn next_permutation_walks_to_last_arrangement() {
        let mut v = vec![1, 2, 3];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    fn next_permutation_of_short_input_is_exhausted() {
        assert!(!next_permutation::<u8>(&mut []));
        assert!(!next_permutation(&mut [7]));
    }
}
