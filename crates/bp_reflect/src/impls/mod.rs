//! Provide [`Typed`] implementations for foreign types and utilities for
//! implementing it by hand.
//!
//! ## Implemented Menu
//!
//! - `()`, `bool`, `char`
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `str`, `&'static str`, `String`
//! - `Option<T>`, `Vec<T>` (erased, one type parameter `T`)
//! - `dyn Any`, the top type used for unbounded type parameters
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod native;

// -----------------------------------------------------------------------------
// Exports

pub use cell::TypeInfoCell;
