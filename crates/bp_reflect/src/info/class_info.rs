use alloc::boxed::Box;

use crate::info::{AccessorInfo, Generics, Type, TypePath, TypeRef};
use crate::info::{impl_generic_fn, impl_type_fn};

// -----------------------------------------------------------------------------
// ClassInfo

/// Compile-time information of a class: a type exposing accessors.
///
/// Holds only what the class *declares*. Inherited accessors are reached
/// through [`supertypes`](ClassInfo::supertypes), which the registry walks
/// with type arguments substituted.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::{AccessorInfo, ClassInfo, TypePath, TypeRef};
///
/// struct Person;
///
/// impl TypePath for Person {
///     fn type_path() -> &'static str { "my_crate::Person" }
///     fn type_name() -> &'static str { "Person" }
/// }
///
/// let info = ClassInfo::new::<Person>().with_accessors([
///     AccessorInfo::new("getName", TypeRef::of::<String>()),
///     AccessorInfo::new("isAdult", TypeRef::of::<bool>()),
/// ]);
///
/// assert_eq!(info.len(), 2);
/// assert!(info.accessor("getName").is_some());
/// assert!(info.accessor("getAge").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ClassInfo {
    ty: Type,
    generics: Generics,
    supertypes: Box<[TypeRef]>,
    accessors: Box<[AccessorInfo]>,
}

impl ClassInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Create an empty class of type `T`.
    #[inline]
    pub fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
            supertypes: Box::new([]),
            accessors: Box::new([]),
        }
    }

    /// Replace the direct supertypes, in declaration order.
    #[inline]
    pub fn with_supertypes(mut self, supertypes: impl Into<Box<[TypeRef]>>) -> Self {
        self.supertypes = supertypes.into();
        self
    }

    /// Replace the declared accessors, in declaration order.
    #[inline]
    pub fn with_accessors(mut self, accessors: impl Into<Box<[AccessorInfo]>>) -> Self {
        self.accessors = accessors.into();
        self
    }

    /// Returns the direct supertypes.
    #[inline]
    pub fn supertypes(&self) -> &[TypeRef] {
        &self.supertypes
    }

    /// Returns the declared accessor with the given name.
    pub fn accessor(&self, name: &str) -> Option<&AccessorInfo> {
        self.accessors.iter().find(|info| info.name() == name)
    }

    /// Iterates over the declared accessors in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, AccessorInfo> {
        self.accessors.iter()
    }

    /// Returns the number of declared accessors.
    #[inline]
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// Returns `true` if the class declares no accessor.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}
