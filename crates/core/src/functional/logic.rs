//! Combinators for unary predicates

/// `logical_not(f)(x) == !f(x)`
pub fn logical_not<X, F>(f: F) -> impl Fn(&X) -> bool
where
    X: ?Sized,
    F: Fn(&X) -> bool,
{
    move |x| !f(x)
}

/// `logical_and(f, g)(x) == f(x) && g(x)`; `g` is skipped when `f` fails
pub fn logical_and<X, F, G>(f: F, g: G) -> impl Fn(&X) -> bool
where
    X: ?Sized,
    F: Fn(&X) -> bool,
    G: Fn(&X) -> bool,
{
    move |x| f(x) && g(x)
}

/// `logical_or(f, g)(x) == f(x) || g(x)`; `g` is skipped when `f` holds
pub fn logical_or<X, F, G>(f: F, g: G) -> impl Fn(&X) -> bool
where
    X: ?Sized,
    F: Fn(&X) -> bool,
    G: Fn(&X) -> bool,
{
    move |x| f(x) || g(x)
}

/// `logical_xor(f, g)(x)` holds when exactly one of `f(x)` and `g(x)` holds.
///
/// Both predicates are always evaluated.
pub fn logical_xor<X, F, G>(f: F, g: G) -> impl Fn(&X) -> bool
where
    X: ?Sized,
    F: Fn(&X) -> bool,
    G: Fn(&X) -> bool,
{
    move |x| {
        let fx = f(x);
        let gx = g(x);
        fx != gx
    }
}
