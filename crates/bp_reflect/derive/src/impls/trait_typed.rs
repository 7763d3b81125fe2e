use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectClass;
use crate::impls::type_ref::to_type_ref;

/// `Generics::from([TypeParamInfo::new("T").with_bound(TypeRef::..), ..])`
fn generics_tokens(class: &ReflectClass, type_ref_: &TokenStream) -> Option<TokenStream> {
    if !class.impl_with_generic() {
        return None;
    }

    let bp_reflect_path = class.bp_reflect_path();
    let generics_ = crate::path::generics_(bp_reflect_path);
    let type_param_info_ = crate::path::type_param_info_(bp_reflect_path);

    let params = class.params().iter().map(|param| {
        let name = param.to_string();
        let bound = class
            .attrs()
            .bounds
            .iter()
            .find(|(bounded, _)| bounded == param)
            .map(|(_, bound)| {
                let bound = to_type_ref(bound, class.params(), type_ref_);
                quote! { .with_bound(#bound) }
            });
        quote! { #type_param_info_::new(#name) #bound }
    });

    Some(quote! {
        .with_generics(#generics_::from([#(#params),*]))
    })
}

fn supertypes_tokens(class: &ReflectClass, type_ref_: &TokenStream) -> Option<TokenStream> {
    let extends = &class.attrs().extends;
    if extends.is_empty() {
        return None;
    }
    let supertypes = extends
        .iter()
        .map(|ty| to_type_ref(ty, class.params(), type_ref_));
    Some(quote! {
        .with_supertypes([#(#supertypes),*])
    })
}

fn accessors_tokens(class: &ReflectClass, type_ref_: &TokenStream) -> Option<TokenStream> {
    if class.accessors().is_empty() {
        return None;
    }
    let accessor_info_ = crate::path::accessor_info_(class.bp_reflect_path());

    let accessors = class.accessors().iter().map(|accessor| {
        let name = &accessor.name;
        let result = to_type_ref(&accessor.result, class.params(), type_ref_);
        let property_id = accessor
            .property_id
            .as_ref()
            .map(|id| quote! { .with_property_id(#id) });
        quote! { #accessor_info_::new(#name, #result) #property_id }
    });

    Some(quote! {
        .with_accessors([#(#accessors),*])
    })
}

/// Generate implementation code for `Typed`
///
/// The class information is built once, on first use, and kept in a
/// static `TypeInfoCell`.
pub(crate) fn impl_trait_typed(class: &ReflectClass) -> TokenStream {
    let bp_reflect_path = class.bp_reflect_path();
    let trait_typed_ = crate::path::typed_(bp_reflect_path);
    let type_info_ = crate::path::type_info_(bp_reflect_path);
    let class_info_ = crate::path::class_info_(bp_reflect_path);
    let type_info_cell_ = crate::path::type_info_cell_(bp_reflect_path);
    let type_ref_ = crate::path::type_ref_(bp_reflect_path);

    let generics_tokens = generics_tokens(class, &type_ref_);
    let supertypes_tokens = supertypes_tokens(class, &type_ref_);
    let accessors_tokens = accessors_tokens(class, &type_ref_);

    let self_ty = class.self_ty();
    let generics = class.static_generics();
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #trait_typed_ for #self_ty #where_clause {
            fn type_info() -> &'static #type_info_ {
                static CELL: #type_info_cell_ = #type_info_cell_::new();
                CELL.get_or_init(|| {
                    #type_info_::Class(
                        #class_info_::new::<Self>()
                            #generics_tokens
                            #supertypes_tokens
                            #accessors_tokens
                    )
                })
            }
        }
    }
}
