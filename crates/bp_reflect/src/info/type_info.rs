use core::fmt;

use thiserror::Error;

use crate::info::{ClassInfo, Generics, OpaqueInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Class,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.pad("Class"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information of a reflected type.
///
/// Generally obtained through [`Typed::type_info`](crate::info::Typed::type_info),
/// or from a [`TypeRegistry`](crate::registry::TypeRegistry) by type path.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::{ReflectKind, Typed};
///
/// let info = bool::type_info();
/// assert_eq!(info.kind(), ReflectKind::Opaque);
/// assert!(info.as_class().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Class(ClassInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_class`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_class: Class => ClassInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Class(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Class(_) => ReflectKind::Class,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns `true` for classes.
    #[inline]
    pub const fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the declared type parameters.
    pub const fn generics(&self) -> &Generics {
        match self {
            Self::Class(info) => info.generics(),
            Self::Opaque(info) => info.generics(),
        }
    }
}
