use proc_macro2::TokenStream;

use crate::derive_data::ReflectClass;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(class: &ReflectClass) -> TokenStream {
    // Not available for generic types.
    let Some(span) = class.auto_register_span() else {
        return crate::utils::empty();
    };

    let auto_register_ = crate::path::auto_register_(class.bp_reflect_path());
    let self_ty = class.self_ty();

    quote::quote_spanned! { span =>
        #[allow(unsafe_code)]
        const _: () = {
            #auto_register_::inventory::submit! {
                #auto_register_::__AutoRegisterFunc(
                    <#self_ty as #auto_register_::__RegisterType>::__register
                )
            }
        };
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectClass) -> TokenStream {
    crate::utils::empty()
}
