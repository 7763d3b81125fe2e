#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `bp_reflect`, which must also resolve
// inside the crate itself (fixtures, doctests).
extern crate self as bp_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod access;
pub mod impls;
pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use bp_reflect_derive as derive;

#[cfg(test)]
pub(crate) mod fixtures;
