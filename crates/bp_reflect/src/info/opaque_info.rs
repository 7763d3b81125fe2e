use crate::info::{Generics, Type, TypePath};
use crate::info::{impl_generic_fn, impl_type_fn};

// -----------------------------------------------------------------------------
// OpaqueInfo

/// Compile-time information of a type without accessors,
/// such as `bool`, `String` or the top type `dyn Any`.
///
/// A generic opaque type (e.g. `Option<T>`) still declares its type
/// parameters, so `Option<bool>` can be told apart from `Option<String>`.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::Typed;
///
/// let info = String::type_info().as_opaque().unwrap();
/// assert_eq!(info.type_name(), "String");
///
/// let info = <Option<bool>>::type_info().as_opaque().unwrap();
/// assert_eq!(info.generics()[0].name(), "T");
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    generics: Generics,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_generic_fn!(generics);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            generics: Generics::new(),
        }
    }
}
