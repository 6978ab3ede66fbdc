//! Optional values and their composition algebra
//!
//! [`Maybe`] holds either exactly one value or nothing. Ordinary functions are
//! promoted to work on it with [`lift`], and functions that may produce
//! nothing are chained with [`and_then`], which stops at the first empty
//! result without calling the remaining steps.
//!
//! ```rust
//! use funcplus_core::maybe::{and_then, just, lift, nothing, Maybe};
//!
//! let positive = |x: i32| if x > 0 { just(x) } else { nothing() };
//! let double = |y: i32| just(y * 2);
//!
//! let checked_double = and_then(positive, double);
//! assert_eq!(checked_double(5), just(10));
//! assert_eq!(checked_double(-1), Maybe::Nothing);
//!
//! let square = lift(|x: i32| x * x);
//! assert_eq!(square(just(4)), just(16));
//! ```

use crate::errors::{Error, Result};

/// Message used when an empty value is unwrapped.
pub const EMPTY_EXTRACTION_MESSAGE: &str = "called unsafe_get_just on a nothing value";

/// A value of type `T`, or nothing.
///
/// The variant is fixed at construction; every operation returns a new
/// `Maybe` instead of changing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Maybe<T> {
    /// No value
    Nothing,
    /// Exactly one value
    Just(T),
}

pub use Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    /// Wrap a value
    pub fn just(value: T) -> Self {
        Just(value)
    }

    /// The empty value
    pub fn nothing() -> Self {
        Nothing
    }

    /// Whether a value is present
    #[must_use]
    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// Whether no value is present
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Borrow the contained value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is [`Nothing`]. This check is never compiled out.
    #[track_caller]
    pub fn unsafe_get_just(&self) -> &T {
        match self {
            Just(value) => value,
            Nothing => empty_extraction(),
        }
    }

    /// Take the contained value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is [`Nothing`].
    #[track_caller]
    pub fn into_unsafe_just(self) -> T {
        match self {
            Just(value) => value,
            Nothing => empty_extraction(),
        }
    }

    /// The contained value, or `default` when empty
    pub fn with_default(self, default: T) -> T {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    /// The contained value, or the result of `default` when empty
    pub fn with_default_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Just(value) => value,
            Nothing => default(),
        }
    }

    /// Convert into a `Result`, reporting `context` when empty
    pub fn ok_or_missing(self, context: impl Into<String>) -> Result<T> {
        match self {
            Just(value) => Ok(value),
            Nothing => Err(Error::missing_value(context)),
        }
    }

    /// Apply `f` to the contained value, keeping emptiness
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    /// Feed the contained value into `f`; stays empty without calling `f`
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Just(value) => f(value),
            Nothing => Nothing,
        }
    }

    /// Keep the value only if it satisfies `predicate`
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Just(value) if predicate(&value) => Just(value),
            _ => Nothing,
        }
    }

    /// `self` if occupied, otherwise the result of `f`
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Just(value) => Just(value),
            Nothing => f(),
        }
    }

    /// Borrow the content as `Maybe<&T>`
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    /// Iterate over the zero or one contained values
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Convert into the standard library's `Option`
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Just(value) => serializer.serialize_some(value),
            Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}

#[cold]
#[track_caller]
fn empty_extraction() -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(
        file = location.file(),
        line = location.line(),
        "{EMPTY_EXTRACTION_MESSAGE}"
    );
    panic!("{EMPTY_EXTRACTION_MESSAGE}")
}

/// Wrap a value as [`Just`]
pub fn just<T>(value: T) -> Maybe<T> {
    Just(value)
}

/// An empty [`Maybe`] of the requested type
pub fn nothing<T>() -> Maybe<T> {
    Nothing
}

/// Is not nothing?
#[must_use]
pub fn is_just<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_just()
}

/// Has no value?
#[must_use]
pub fn is_nothing<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_nothing()
}

/// Take the value out of `maybe`.
///
/// # Panics
///
/// Panics if `maybe` is [`Nothing`].
#[track_caller]
pub fn unsafe_get_just<T>(maybe: Maybe<T>) -> T {
    maybe.into_unsafe_just()
}

/// The value in `maybe`, or `default` when it is empty
pub fn with_default<T>(default: T, maybe: Maybe<T>) -> T {
    maybe.with_default(default)
}

/// Lift `f` into the `Maybe` functor.
///
/// The returned function maps `Just(a)` to `Just(f(a))` and leaves
/// `Nothing` untouched, never calling `f` for it.
pub fn lift<A, B, F>(f: F) -> impl Fn(Maybe<A>) -> Maybe<B>
where
    F: Fn(A) -> B,
{
    move |maybe| maybe.map(&f)
}

/// Monadic bind of two `Maybe`-returning functions.
///
/// `and_then(f, g)(x)` runs `f(x)`; when that is [`Nothing`] it returns
/// [`Nothing`] without calling `g`, otherwise it returns `g` applied to the
/// contained value. The output type of `f` must be the input type of `g`.
pub fn and_then<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Maybe<C>
where
    F: Fn(A) -> Maybe<B>,
    G: Fn(B) -> Maybe<C>,
{
    move |x| match f(x) {
        Just(y) => g(y),
        Nothing => Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn positive(x: i32) -> Maybe<i32> {
        if x > 0 {
            just(x)
        } else {
            nothing()
        }
    }

    fn double(y: i32) -> Maybe<i32> {
        just(y * 2)
    }

    #[test]
    fn test_queries() {
        assert!(is_just(&just(1)));
        assert!(!is_just(&nothing::<i32>()));
        assert!(is_nothing(&nothing::<i32>()));
        assert!(!is_nothing(&just("x")));
    }

    #[test]
    fn test_extraction() {
        assert_eq!(unsafe_get_just(just(42)), 42);
        assert_eq!(*just(String::from("a")).unsafe_get_just(), "a");
        assert_eq!(with_default(0, just(7)), 7);
        assert_eq!(with_default(0, nothing()), 0);
        assert_eq!(nothing().with_default_else(|| 9), 9);
    }

    #[test]
    #[should_panic(expected = "called unsafe_get_just on a nothing value")]
    fn test_unsafe_get_just_panics_on_nothing() {
        unsafe_get_just(nothing::<u8>());
    }

    #[test]
    #[should_panic(expected = "called unsafe_get_just on a nothing value")]
    fn test_borrowing_extraction_panics_on_nothing() {
        let empty: Maybe<String> = Maybe::nothing();
        let _ = empty.unsafe_get_just();
    }

    #[test]
    fn test_equality() {
        assert_eq!(nothing::<i32>(), nothing::<i32>());
        assert_eq!(just(3), just(3));
        assert_ne!(just(3), just(4));
        assert_ne!(just(3), nothing());
    }

    #[test]
    fn test_ordering_and_hashing() {
        use std::collections::HashSet;

        assert!(nothing() < just(i32::MIN));
        assert!(just(1) < just(2));
        assert_eq!(nothing::<i32>().cmp(&nothing()), std::cmp::Ordering::Equal);

        let mut values = vec![just(2), nothing(), just(-1), nothing()];
        values.sort();
        assert_eq!(values, vec![nothing(), nothing(), just(-1), just(2)]);

        let set: HashSet<Maybe<i32>> = [just(1), just(1), nothing(), nothing(), just(2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&nothing()));
        assert!(set.contains(&just(2)));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = just(vec![1, 2, 3]);
        let mut copy = original.clone();
        if let Just(values) = &mut copy {
            values.push(4);
        }
        assert_eq!(original, just(vec![1, 2, 3]));
        assert_eq!(copy, just(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_lift_square() {
        let square = lift(|x: i32| x * x);
        assert_eq!(square(just(4)), just(16));
        assert_eq!(square(nothing()), nothing());
    }

    #[test]
    fn test_lift_changes_type() {
        let describe = lift(|x: u32| format!("#{x}"));
        assert_eq!(describe(just(5)), just("#5".to_string()));
    }

    #[test]
    fn test_lift_calls_f_once_per_just_and_never_for_nothing() {
        let calls = Cell::new(0);
        let counted = lift(|x: i32| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(counted(nothing()), nothing());
        assert_eq!(calls.get(), 0);

        assert_eq!(counted(just(1)), just(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_and_then_scenario() {
        let chained = and_then(positive, double);
        assert_eq!(chained(5), just(10));
        assert_eq!(chained(-1), nothing());
    }

    #[test]
    fn test_and_then_skips_second_step_after_nothing() {
        let calls = Cell::new(0);
        let chained = and_then(positive, |y: i32| {
            calls.set(calls.get() + 1);
            just(y)
        });

        assert_eq!(chained(0), nothing());
        assert_eq!(calls.get(), 0);

        assert_eq!(chained(3), just(3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_and_then_returns_second_result_directly() {
        let never = and_then(positive, |_: i32| nothing::<String>());
        assert_eq!(never(10), nothing());

        let chained = and_then(|s: &str| Maybe::from(s.parse::<i32>().ok()), positive);
        assert_eq!(chained("12"), just(12));
        assert_eq!(chained("-12"), nothing());
        assert_eq!(chained("twelve"), nothing());
    }

    #[test]
    fn test_method_chain() {
        let result = just(4)
            .map(|x| x + 1)
            .filter(|x| x % 5 == 0)
            .and_then(double);
        assert_eq!(result, just(10));

        let fallback = nothing::<i32>().or_else(|| just(1));
        assert_eq!(fallback, just(1));
        assert_eq!(just(just(2)).flatten(), just(2));
    }

    #[test]
    fn test_ok_or_missing() {
        assert_eq!(just(1).ok_or_missing("count").unwrap(), 1);
        let err = nothing::<i32>().ok_or_missing("count").unwrap_err();
        assert_eq!(err.to_string(), "expected a value for count, found nothing");
    }

    #[test]
    fn test_option_round_trip_and_iteration() {
        assert_eq!(Maybe::from(Some(3)), just(3));
        assert_eq!(Option::<i32>::from(nothing::<i32>()), None);
        assert_eq!(just(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(nothing::<i32>().iter().count(), 0);
        assert_eq!(Maybe::<u8>::default(), Nothing);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_like_option() {
        assert_eq!(serde_json::to_string(&just(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&nothing::<i32>()).unwrap(), "null");

        let parsed: Vec<Maybe<String>> = serde_json::from_str(r#"["a", null]"#).unwrap();
        assert_eq!(parsed, vec![just("a".to_string()), nothing()]);
    }
}
