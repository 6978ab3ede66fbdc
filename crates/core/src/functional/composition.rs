//! Function composition and partial application

/// Function composition trait for building pipelines out of closures
pub trait Compose<A, B> {
    /// Forward composition: `f.then(g)(x) == g(f(x))`
    fn then<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
        Self: Fn(A) -> B + Sized;

    /// Backward composition: `f.after(g)(x) == f(g(x))`
    fn after<G, Z>(self, g: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
        Self: Fn(A) -> B + Sized;
}

impl<T, A, B> Compose<A, B> for T
where
    T: Fn(A) -> B,
{
    fn then<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |a| g(self(a))
    }

    fn after<G, Z>(self, g: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
    {
        move |z| self(g(z))
    }
}

/// Combinators over plain functions
pub mod operators {

    /// Forward composition: `compose(f, g)(x) == g(f(x))`
    pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        move |a| g(f(a))
    }

    /// `compose3(f, g, h)(x) == h(g(f(x)))`
    pub fn compose3<A, B, C, D, F, G, H>(f: F, g: G, h: H) -> impl Fn(A) -> D
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
        H: Fn(C) -> D,
    {
        move |a| h(g(f(a)))
    }

    /// `compose4(f, g, h, i)(x) == i(h(g(f(x))))`
    pub fn compose4<A, B, C, D, E, F, G, H, I>(f: F, g: G, h: H, i: I) -> impl Fn(A) -> E
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
        H: Fn(C) -> D,
        I: Fn(D) -> E,
    {
        move |a| i(h(g(f(a))))
    }

    /// `compose5(f, g, h, i, j)(x) == j(i(h(g(f(x)))))`
    #[allow(clippy::many_single_char_names)]
    pub fn compose5<A, B, C, D, E, R, F, G, H, I, J>(
        f: F,
        g: G,
        h: H,
        i: I,
        j: J,
    ) -> impl Fn(A) -> R
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
        H: Fn(C) -> D,
        I: Fn(D) -> E,
        J: Fn(E) -> R,
    {
        move |a| j(i(h(g(f(a)))))
    }

    /// Identity function
    pub fn identity<T>(x: T) -> T {
        x
    }

    /// Constant function
    pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
    where
        T: Clone,
    {
        move |_| value.clone()
    }

    /// Flip the arguments of a two-argument function
    pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
    where
        F: Fn(A, B) -> C,
    {
        move |b, a| f(a, b)
    }

    /// Call a two-argument function with the elements of a pair
    pub fn apply_to_pair<A, B, C, F>(f: F, pair: (A, B)) -> C
    where
        F: FnOnce(A, B) -> C,
    {
        let (a, b) = pair;
        f(a, b)
    }

    /// Fix the first argument of a two-argument function
    pub fn bind_1_of_2<A, B, C, F>(f: F, x: A) -> impl Fn(B) -> C
    where
        F: Fn(A, B) -> C,
        A: Clone,
    {
        move |y| f(x.clone(), y)
    }

    /// Fix the first argument of a three-argument function
    pub fn bind_1_of_3<A, B, C, D, F>(f: F, x: A) -> impl Fn(B, C) -> D
    where
        F: Fn(A, B, C) -> D,
        A: Clone,
    {
        move |y, z| f(x.clone(), y, z)
    }

    /// Fix the first two arguments of a three-argument function
    pub fn bind_2_of_3<A, B, C, D, F>(f: F, x: A, y: B) -> impl Fn(C) -> D
    where
        F: Fn(A, B, C) -> D,
        A: Clone,
        B: Clone,
    {
        move |z| f(x.clone(), y.clone(), z)
    }

    /// Curry a two-argument function
    pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
    where
        F: Fn(A, B) -> C + Clone + 'static,
        A: Clone + 'static,
        B: 'static,
        C: 'static,
    {
        move |a| {
            let f = f.clone();
            Box::new(move |b| f(a.clone(), b))
        }
    }

    /// Uncurry a curried function
    pub fn uncurry<A, B, C, F>(f: F) -> impl Fn(A, B) -> C
    where
        F: Fn(A) -> Box<dyn Fn(B) -> C>,
    {
        move |a, b| f(a)(b)
    }
}

/// Forward composition of any number of functions.
///
/// `compose!(f, g, h)(x)` evaluates `h(g(f(x)))`.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::functional::composition::operators::compose($f, $crate::compose!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::operators::*;
    use super::*;

    fn square(x: i32) -> i32 {
        x * x
    }

    #[test]
    fn test_compose_is_forward() {
        let add_one = |x: i32| x + 1;
        let composed = compose(add_one, square);
        assert_eq!(composed(2), 9); // (2 + 1)^2
    }

    #[test]
    fn test_compose_n() {
        let add_one = |x: i32| x + 1;
        let to_text = |x: i32| x.to_string();
        let length = |s: String| s.len();

        assert_eq!(compose3(add_one, square, to_text)(9), "100");
        assert_eq!(compose4(add_one, square, to_text, length)(9), 3);
        assert_eq!(
            compose5(add_one, square, add_one, to_text, length)(99),
            5 // 10001
        );
    }

    #[test]
    fn test_compose_macro() {
        let add_one = |x: i32| x + 1;
        assert_eq!(compose!(square)(3), 9);
        assert_eq!(compose!(add_one, square, add_one)(2), 10);
    }

    #[test]
    fn test_compose_trait() {
        let add_one = |x: i32| x + 1;
        assert_eq!(add_one.then(square)(2), 9);
        assert_eq!(add_one.after(square)(2), 5);
    }

    #[test]
    fn test_partial_application() {
        let sub = |a: i32, b: i32| a - b;
        assert_eq!(bind_1_of_2(sub, 10)(3), 7);

        let clamp = |lo: i32, hi: i32, x: i32| x.max(lo).min(hi);
        assert_eq!(bind_1_of_3(clamp, 0)(5, 7), 5);
        assert_eq!(bind_2_of_3(clamp, 0, 5)(7), 5);
        assert_eq!(bind_2_of_3(clamp, 0, 5)(-2), 0);
    }

    #[test]
    fn test_bound_argument_is_reused() {
        let greet = |greeting: String, name: &str| format!("{greeting}, {name}");
        let hello = bind_1_of_2(greet, "hello".to_string());
        assert_eq!(hello("ann"), "hello, ann");
        assert_eq!(hello("bob"), "hello, bob");
    }

    #[test]
    fn test_flip_and_apply_to_pair() {
        let sub = |a: i32, b: i32| a - b;
        assert_eq!(flip(sub)(1, 10), 9);
        assert_eq!(apply_to_pair(sub, (10, 1)), 9);
        assert_eq!(apply_to_pair(flip(sub), (10, 1)), -9);
    }

    #[test]
    fn test_curry_round_trip() {
        let add = |a: i32, b: i32| a + b;
        let curried = curry(add);
        assert_eq!(curried(2)(3), 5);
        assert_eq!(uncurry(curried)(4, 5), 9);
    }

    #[test]
    fn test_identity_and_constant() {
        assert_eq!(identity("x"), "x");
        let always_seven = constant::<i32, &str>(7);
        assert_eq!(always_seven("ignored"), 7);
    }
}
