use alloc::boxed::Box;
use core::ops::Deref;

use crate::info::TypeRef;

// -----------------------------------------------------------------------------
// TypeParamInfo

/// A declared type parameter of a class, with its optional upper bound.
///
/// When the parameter is not fixed by a type argument, accessors returning
/// it resolve to the bound, or to the top type `dyn Any` when unbounded.
/// The bound is a type expression, so `Holder<Bean>` keeps its argument.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::{TypeParamInfo, TypeRef};
///
/// let t = TypeParamInfo::new("T").with_bound(TypeRef::of::<String>());
/// assert_eq!(t.name(), "T");
/// assert!(t.bound().unwrap().info().unwrap().type_is::<String>());
///
/// assert!(TypeParamInfo::new("U").bound().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TypeParamInfo {
    name: &'static str,
    bound: Option<TypeRef>,
}

impl TypeParamInfo {
    /// Create an unbounded type parameter.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name, bound: None }
    }

    /// Returns the generic parameter name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Set the upper bound of this parameter.
    #[inline]
    pub fn with_bound(mut self, bound: TypeRef) -> Self {
        self.bound = Some(bound);
        self
    }

    /// Returns the upper bound of this parameter, if declared.
    #[inline]
    pub const fn bound(&self) -> Option<&TypeRef> {
        self.bound.as_ref()
    }
}

// -----------------------------------------------------------------------------
// Generics

/// The ordered type parameters of a class.
///
/// Derefs to `[TypeParamInfo]`; the position of a parameter is the index of
/// its argument in a [`BoundType`](crate::info::BoundType).
#[derive(Clone, Debug, Default)]
pub struct Generics(Box<[TypeParamInfo]>);

impl Generics {
    /// Creates an empty `Generics`.
    #[inline]
    pub fn new() -> Self {
        Self(Box::new([]))
    }

    /// Returns the parameter with the given name.
    pub fn get(&self, name: &str) -> Option<&TypeParamInfo> {
        self.0.iter().find(|info| info.name == name)
    }

    /// Returns the position of the parameter with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|info| info.name == name)
    }
}

impl<const N: usize> From<[TypeParamInfo; N]> for Generics {
    #[inline]
    fn from(value: [TypeParamInfo; N]) -> Self {
        Self(Box::new(value))
    }
}

impl FromIterator<TypeParamInfo> for Generics {
    fn from_iter<I: IntoIterator<Item = TypeParamInfo>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Generics {
    type Target = [TypeParamInfo];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_generic_fn {
    ($field:ident) => {
        /// Returns the declared type parameters.
        #[inline]
        pub const fn generics(&self) -> &$crate::info::Generics {
            &self.$field
        }

        /// Replace the declared type parameters.
        #[inline]
        pub fn with_generics(mut self, generics: $crate::info::Generics) -> Self {
            self.$field = generics;
            self
        }
    };
}

pub(crate) use impl_generic_fn;
