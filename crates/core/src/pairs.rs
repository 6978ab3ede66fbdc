//! Pair and zip helpers

/// Combine two sequences element-wise with `f`.
///
/// The result is as long as the shorter input.
///
/// ```rust
/// use funcplus_core::pairs::zip_with;
///
/// assert_eq!(zip_with(|a, b| a + b, [1, 2, 3], [5, 6]), vec![6, 8]);
/// ```
pub fn zip_with<X, Y, Z, F, XS, YS>(mut f: F, xs: XS, ys: YS) -> Vec<Z>
where
    XS: IntoIterator<Item = X>,
    YS: IntoIterator<Item = Y>,
    F: FnMut(X, Y) -> Z,
{
    xs.into_iter().zip(ys).map(|(x, y)| f(x, y)).collect()
}

/// Pair up two sequences, truncating to the shorter one
pub fn zip<X, Y, XS, YS>(xs: XS, ys: YS) -> Vec<(X, Y)>
where
    XS: IntoIterator<Item = X>,
    YS: IntoIterator<Item = Y>,
{
    zip_with(|x, y| (x, y), xs, ys)
}

/// Split a sequence of pairs into its first and second elements
pub fn unzip<X, Y, PS>(pairs: PS) -> (Vec<X>, Vec<Y>)
where
    PS: IntoIterator<Item = (X, Y)>,
{
    pairs.into_iter().unzip()
}

/// First element of a pair
pub fn fst<X, Y>(pair: (X, Y)) -> X {
    pair.0
}

/// Second element of a pair
pub fn snd<X, Y>(pair: (X, Y)) -> Y {
    pair.1
}

/// Apply `f` to the first element
pub fn transform_fst<X, Y, R, F>(f: F, pair: (X, Y)) -> (R, Y)
where
    F: FnOnce(X) -> R,
{
    let (x, y) = pair;
    (f(x), y)
}

/// Apply `f` to the second element
pub fn transform_snd<X, Y, R, F>(f: F, pair: (X, Y)) -> (X, R)
where
    F: FnOnce(Y) -> R,
{
    let (x, y) = pair;
    (x, f(y))
}

/// `(a, b)` becomes `(b, a)`
pub fn swap_pair_elems<X, Y>(pair: (X, Y)) -> (Y, X) {
    let (x, y) = pair;
    (y, x)
}

/// Every element paired with its successor.
///
/// `[0, 1, 2, 3]` gives `[(0, 1), (1, 2), (2, 3)]`; fewer than two
/// elements give an empty result.
pub fn overlapping_pairs<T, XS>(xs: XS) -> Vec<(T, T)>
where
    XS: IntoIterator<Item = T>,
    T: Clone,
{
    let mut iter = xs.into_iter();
    let Some(mut previous) = iter.next() else {
        return Vec::new();
    };

    let (lower, _) = iter.size_hint();
    let mut result = Vec::with_capacity(lower);
    for current in iter {
        result.push((previous, current.clone()));
        previous = current;
    }
    result
}
