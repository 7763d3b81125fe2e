use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use crate::impls::TypeInfoCell;
use crate::info::{Generics, OpaqueInfo, TypeInfo, TypeParamInfo, TypePath, TypeRef, Typed};

// -----------------------------------------------------------------------------
// Opaque implementations

macro_rules! impl_opaque {
    ($ty:ty, $path:literal, $name:literal) => {
        impl_opaque!($ty, $path, $name, None);
    };
    ($ty:ty, $path:literal, $name:literal, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: TypeInfoCell = TypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }
    };
}

impl_opaque!((), "()", "()");
impl_opaque!(bool, "bool", "bool");
impl_opaque!(char, "char", "char");
impl_opaque!(u8, "u8", "u8");
impl_opaque!(u16, "u16", "u16");
impl_opaque!(u32, "u32", "u32");
impl_opaque!(u64, "u64", "u64");
impl_opaque!(u128, "u128", "u128");
impl_opaque!(usize, "usize", "usize");
impl_opaque!(i8, "i8", "i8");
impl_opaque!(i16, "i16", "i16");
impl_opaque!(i32, "i32", "i32");
impl_opaque!(i64, "i64", "i64");
impl_opaque!(i128, "i128", "i128");
impl_opaque!(isize, "isize", "isize");
impl_opaque!(f32, "f32", "f32");
impl_opaque!(f64, "f64", "f64");
impl_opaque!(str, "str", "str");
impl_opaque!(&'static str, "&str", "&str");
impl_opaque!(String, "alloc::string::String", "String", Some("alloc::string"));
impl_opaque!(dyn Any, "dyn core::any::Any", "dyn Any", Some("core::any"));

// -----------------------------------------------------------------------------
// Generic opaque implementations

macro_rules! impl_generic_opaque {
    ($ty:ident, $path:literal, $module:literal $(, $type_ref:ident)?) => {
        impl<T: 'static> TypePath for $ty<T> {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: 'static> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: TypeInfoCell = TypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Opaque(
                        OpaqueInfo::new::<Self>()
                            .with_generics(Generics::from([TypeParamInfo::new("T")])),
                    )
                })
            }

            $(
                #[inline]
                fn type_ref() -> TypeRef {
                    $type_ref::<T>()
                }
            )?
        }
    };
}

/// `Option<bool>` is the boxed boolean and keeps its argument.
/// Other arguments are erased.
fn option_type_ref<T: 'static>() -> TypeRef {
    if TypeId::of::<T>() == TypeId::of::<bool>() {
        TypeRef::generic::<Option<bool>>([TypeRef::of::<bool>()])
    } else {
        TypeRef::Type(<Option<T>>::type_info)
    }
}

impl_generic_opaque!(Option, "core::option::Option", "core::option", option_type_ref);
impl_generic_opaque!(Vec, "alloc::vec::Vec", "alloc::vec");

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::Any;

    use crate::info::{Type, TypePath, TypeRef, Typed};

    #[test]
    fn primitive_paths() {
        assert_eq!(<bool as TypePath>::type_path(), "bool");
        assert_eq!(<() as TypePath>::type_path(), "()");
        assert_eq!(<String as TypePath>::type_name(), "String");
        assert_eq!(<dyn Any as TypePath>::type_name(), "dyn Any");
        assert_eq!(<&'static str as TypePath>::type_path(), "&str");
    }

    #[test]
    fn generic_opaque_is_erased() {
        assert_eq!(Type::of::<Option<bool>>(), Type::of::<Option<u8>>());
        assert_ne!(Type::of::<Option<bool>>(), Type::of::<Vec<bool>>());

        let info = <Vec<String>>::type_info();
        assert!(info.type_is::<Vec<()>>());
        assert_eq!(info.generics().len(), 1);
    }

    #[test]
    fn boxed_boolean_keeps_its_argument() {
        let boxed = TypeRef::of::<Option<bool>>();
        assert!(boxed.info().unwrap().type_is::<Option<()>>());
        assert_eq!(boxed.args().len(), 1);
        assert!(boxed.args()[0].info().unwrap().type_is::<bool>());

        assert!(TypeRef::of::<Option<u8>>().args().is_empty());
        assert!(TypeRef::of::<Vec<bool>>().args().is_empty());
    }

    #[test]
    fn opaque_infos_are_not_classes() {
        assert!(!i32::type_info().is_class());
        assert!(<dyn Any>::type_info().as_opaque().is_ok());
    }
}
