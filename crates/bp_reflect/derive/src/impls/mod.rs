//! Generate the trait implementations for a [`ReflectClass`].

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_type_path;
mod trait_typed;
mod type_ref;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectClass;

/// Generate `TypePath`, `Typed` and the optional auto registration.
pub(crate) fn impl_reflect_class(class: &ReflectClass) -> TokenStream {
    let type_path_impl = impl_trait_type_path(class);
    let typed_impl = impl_trait_typed(class);
    let auto_register = get_auto_register_impl(class);

    quote! {
        #type_path_impl

        #typed_impl

        #auto_register
    }
}
