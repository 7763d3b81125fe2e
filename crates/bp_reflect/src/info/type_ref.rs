use alloc::boxed::Box;
use core::fmt;

use crate::info::{Type, TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// TypeRef

/// A type expression as written in a class declaration.
///
/// Used for accessor result types and supertypes. Type parameters stay
/// symbolic until the declaring class is used with concrete arguments,
/// see [`BoundType`].
///
/// # Examples
///
/// ```
/// use bp_reflect::info::TypeRef;
///
/// // `String`
/// let plain = TypeRef::of::<String>();
/// // `T`
/// let param = TypeRef::param("T");
/// // `Option<T>`
/// let applied = TypeRef::generic::<Option<bool>>([TypeRef::param("T")]);
///
/// assert_eq!(format!("{plain:?}"), "alloc::string::String");
/// assert_eq!(format!("{param:?}"), "T");
/// assert_eq!(format!("{applied:?}"), "core::option::Option<T>");
///
/// // `Option<bool>`
/// let boxed = TypeRef::of::<Option<bool>>();
/// assert_eq!(format!("{boxed:?}"), "core::option::Option<bool>");
/// ```
#[derive(Clone)]
pub enum TypeRef {
    /// A concrete (or raw) type.
    Type(fn() -> &'static TypeInfo),
    /// A type parameter of the declaring class.
    Param(&'static str),
    /// A generic class applied to type arguments.
    Generic(fn() -> &'static TypeInfo, Box<[TypeRef]>),
}

impl TypeRef {
    /// Refer to a concrete type, see [`Typed::type_ref`].
    ///
    /// `TypeRef::of::<Option<bool>>()` keeps the `bool` argument, so the
    /// boxed boolean is recognised however it is spelled.
    #[inline]
    pub fn of<T: Typed + ?Sized>() -> Self {
        T::type_ref()
    }

    /// Refer to a type parameter of the declaring class.
    #[inline]
    pub const fn param(name: &'static str) -> Self {
        Self::Param(name)
    }

    /// Refer to the erased class of `T` applied to `args`.
    ///
    /// Only the class of `T` matters: `TypeRef::generic::<Vec<u8>>(...)`
    /// and `TypeRef::generic::<Vec<String>>(...)` are the same.
    #[inline]
    pub fn generic<T: Typed + ?Sized>(args: impl Into<Box<[TypeRef]>>) -> Self {
        Self::Generic(T::type_info, args.into())
    }

    /// Returns the referenced type information, `None` for a parameter.
    pub fn info(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Type(info) | Self::Generic(info, _) => Some(info()),
            Self::Param(_) => None,
        }
    }

    /// Returns the type arguments of a generic application.
    pub fn args(&self) -> &[TypeRef] {
        match self {
            Self::Generic(_, args) => args,
            Self::Type(_) | Self::Param(_) => &[],
        }
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(info) => f.write_str(info().type_path()),
            Self::Param(name) => f.write_str(name),
            Self::Generic(info, args) => {
                f.write_str(info().type_path())?;
                f.write_str("<")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Debug::fmt(arg, f)?;
                }
                f.write_str(">")
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BoundType

/// A type together with the type arguments it is used with.
///
/// Empty arguments mean the type is used raw: parameters of a raw class
/// fall back to their upper bounds during substitution.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::BoundType;
///
/// let raw = BoundType::of::<Option<bool>>();
/// assert!(raw.is_raw());
///
/// let boxed_bool = raw.with_args([BoundType::of::<bool>()]);
/// assert_eq!(boxed_bool.to_string(), "Option<bool>");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoundType {
    ty: Type,
    args: Box<[BoundType]>,
}

impl BoundType {
    /// A raw handle to `T`.
    #[inline]
    pub fn of<T: TypePath + ?Sized>() -> Self {
        Self::raw(Type::of::<T>())
    }

    /// A raw handle to `ty`.
    #[inline]
    pub fn raw(ty: Type) -> Self {
        Self {
            ty,
            args: Box::new([]),
        }
    }

    /// Replace the type arguments.
    #[inline]
    pub fn with_args(mut self, args: impl Into<Box<[BoundType]>>) -> Self {
        self.args = args.into();
        self
    }

    /// Returns the (erased) type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the type arguments, in declaration order of the parameters.
    #[inline]
    pub fn args(&self) -> &[BoundType] {
        &self.args
    }

    /// Returns `true` if no type arguments are bound.
    #[inline]
    pub fn is_raw(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for BoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.name())?;
        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.path())?;
        if !self.args.is_empty() {
            f.debug_list().entries(self.args.iter()).finish()?;
        }
        Ok(())
    }
}
