//! Paths of the `bp_reflect` items used by generated code.
//!
//! Kept in one place so that moving an item in `bp_reflect` only needs
//! a change here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `bp_reflect` crate.
///
/// 1. For crates that depend on `bp_reflect`, `::bp_reflect` is returned.
/// 2. For crates that depend on `beanpath`, `::beanpath::reflect` is returned.
/// 3. For other situations, `::bp_reflect` is returned, but this may be incorrect.
///
/// Reading the caller's manifest is not cheap, so the path is computed once
/// per macro invocation and passed around.
pub(crate) fn bp_reflect() -> syn::Path {
    bp_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("bp_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline]
pub(crate) fn type_path_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::TypePath
    }
}

#[inline]
pub(crate) fn typed_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn type_info_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::TypeInfo
    }
}

#[inline]
pub(crate) fn class_info_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::ClassInfo
    }
}

#[inline]
pub(crate) fn accessor_info_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::AccessorInfo
    }
}

#[inline]
pub(crate) fn type_ref_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::TypeRef
    }
}

#[inline]
pub(crate) fn generics_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::Generics
    }
}

#[inline]
pub(crate) fn type_param_info_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::info::TypeParamInfo
    }
}

#[inline]
pub(crate) fn type_info_cell_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::impls::TypeInfoCell
    }
}

#[cfg(feature = "auto_register")]
#[inline]
pub(crate) fn auto_register_(bp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #bp_reflect_path::__macro_exports::auto_register
    }
}
