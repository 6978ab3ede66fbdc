//! Function combinators
//!
//! Composition, partial application and predicate combinators. Everything
//! here takes functions by value and returns new closures; argument and
//! arity mismatches are rejected by the type checker.

pub mod composition;
pub mod logic;

// Re-export commonly used combinators
pub use composition::operators::{
    apply_to_pair, bind_1_of_2, bind_1_of_3, bind_2_of_3, compose, compose3, compose4, compose5,
    constant, curry, flip, identity, uncurry,
};
pub use composition::Compose;
pub use logic::{logical_and, logical_not, logical_or, logical_xor};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::composition::operators::*;
    pub use super::composition::Compose;
    pub use super::logic::*;
    pub use crate::compose;
}
