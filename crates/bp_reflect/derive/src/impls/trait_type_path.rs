use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectClass;

/// Generate implementation codes for `TypePath`
///
/// The path is erased: every instantiation of a generic class shares it.
pub(crate) fn impl_trait_type_path(class: &ReflectClass) -> TokenStream {
    let bp_reflect_path = class.bp_reflect_path();
    let trait_type_path_ = crate::path::type_path_(bp_reflect_path);

    let self_ty = class.self_ty();
    let type_path = class.type_path_expr();
    let type_name = class.type_name_lit();
    let module_path = class.module_path_expr();

    let generics = class.static_generics();
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #trait_type_path_ for #self_ty #where_clause {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
