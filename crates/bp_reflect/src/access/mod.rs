//! Resolve property identifiers into dotted property paths.
//!
//! ## Menu
//!
//! - [`PropertyAccess`]: The resolver, driving one lookup per identifier.
//! - [`Introspect`]: The capability enumerating the accessors of a type.
//! - [`AccessorView`]: An accessor with its result type substituted.
//! - [`property_name`]: Property-name derivation (`getX`, `isX`, `hasX`).
//! - [`PropertyAccessError`]: Why a resolution failed.
//!
//! ## Example
//!
//! ```
//! use bp_reflect::access::PropertyAccess;
//! use bp_reflect::derive::reflect_accessors;
//! use bp_reflect::registry::TypeRegistry;
//!
//! pub struct Flags;
//!
//! #[reflect_accessors]
//! impl Flags {
//!     #[property("enabled-id")]
//!     pub fn is_enabled(&self) -> bool { true }
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Flags>();
//!
//! let access = PropertyAccess::new(&registry);
//! assert_eq!(access.resolve_of::<Flags>(&["enabled-id"]).unwrap(), "enabled");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod introspect;
mod naming;
mod property_access;

// -----------------------------------------------------------------------------
// Exports

pub use error::{PropertyAccessError, PropertyAccessErrorKind};
pub use introspect::{AccessorView, Introspect};
pub use naming::{decapitalize, is_boolean, property_name};
pub use property_access::{PATH_SEPARATOR, PropertyAccess};
