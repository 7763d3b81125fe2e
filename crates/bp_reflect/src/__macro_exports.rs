//! Items used by the code `#[reflect_accessors]` generates. Not public API.

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
#[allow(unsafe_code, reason = "link-time registration emitted by `inventory`")]
pub mod auto_register {
    use crate::impls::TypeInfoCell;
    use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
    use crate::registry::TypeRegistry;

    pub use inventory;

    /// A registration function collected at link time.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Names the registration function of a type as a plain `fn` pointer.
    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: Typed> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered only when link-time collection works on this platform.
    pub struct __AvailFlag;

    impl TypePath for __AvailFlag {
        fn type_path() -> &'static str {
            "bp_reflect::__macro_exports::auto_register::__AvailFlag"
        }

        fn type_name() -> &'static str {
            "__AvailFlag"
        }

        fn module_path() -> Option<&'static str> {
            Some("bp_reflect::__macro_exports::auto_register")
        }
    }

    impl Typed for __AvailFlag {
        fn type_info() -> &'static TypeInfo {
            static CELL: TypeInfoCell = TypeInfoCell::new();
            CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    pub(crate) fn register_all(registry: &mut TypeRegistry) -> bool {
        let flag = <__AvailFlag as TypePath>::type_path();
        if registry.contains(flag) {
            return true;
        }
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
        registry.contains(flag)
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) mod auto_register {
    use crate::registry::TypeRegistry;

    #[inline(always)]
    pub(crate) fn register_all(_: &mut TypeRegistry) -> bool {
        false
    }
}
