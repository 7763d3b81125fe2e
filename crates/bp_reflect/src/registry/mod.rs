//! Provide the type registry, the shipped introspection capability.
//!
//! ## Menu
//!
//! - [`TypeRegistry`]: Registered [`TypeInfo`]s keyed by type path; implements [`Introspect`].
//! - [`TypeRegistryArc`]: A `TypeRegistry` behind `Arc<RwLock<_>>`.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//!
//! If it is not supported, the function returns `false` without
//! causing any errors.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`Introspect`]: crate::access::Introspect
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod introspect;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_registry::{TypeRegistry, TypeRegistryArc};
