//! Functional building blocks for `funcplus`.
//!
//! ## Key Components
//!
//! - **`maybe`**: the [`Maybe`] optional value type together with [`lift`]
//!   and [`and_then`], which chain functions while stopping at the first
//!   empty result.
//! - **`functional`**: composition, partial application and predicate
//!   combinators.
//! - **`pairs`** and **`maps`**: zip helpers and generic map construction and
//!   lookup, with lookups returning `Maybe`.
//! - **`errors`**: the [`Error`] enum and [`Result`] alias used where a caller
//!   asks to turn absence into a failure.
//!
//! Everything is pure: no I/O, no shared state, no interior mutability.

pub mod errors;
pub mod functional;
pub mod maps;
pub mod maybe;
pub mod pairs;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    errors::{Error, Result, ResultExt},
    maybe::{
        and_then, is_just, is_nothing, just, lift, nothing, unsafe_get_just, with_default, Maybe,
    },
};
