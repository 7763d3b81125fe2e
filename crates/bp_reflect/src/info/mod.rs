//! Provide compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining erased type paths, without prefix `::`.
//! - [`TypePathTable`]: Function pointers of a single type's `TypePath` implementation.
//! - [`Type`]: A `TypePathTable` compared by type path.
//! - [`TypeRef`]: A declared type expression, possibly mentioning type parameters.
//! - [`BoundType`]: A `Type` together with the type arguments it is used with.
//! - [`Generics`]: The declared type parameters ([`TypeParamInfo`]) of a type.
//! - [`AccessorInfo`]: A declared accessor: name, result type, optional property identifier.
//! - [`TypeInfo`]: Either a [`ClassInfo`] or an [`OpaqueInfo`].
//! - [`ReflectKind`]: The kind of a `TypeInfo`.
//! - [`Typed`]: A trait for obtaining static `TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod accessor_info;
mod class_info;
mod generics;
mod opaque_info;
mod type_info;
mod type_path;
mod type_ref;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use generics::impl_generic_fn;

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use accessor_info::AccessorInfo;
pub use class_info::ClassInfo;
pub use generics::{Generics, TypeParamInfo};
pub use opaque_info::OpaqueInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{Type, TypePath, TypePathTable};
pub use type_ref::{BoundType, TypeRef};
pub use typed::Typed;
