//! Shared helpers for the beanpath proc-macro crates.
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro crate")]

// -----------------------------------------------------------------------------
// Modules

mod manifest;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::Manifest;
