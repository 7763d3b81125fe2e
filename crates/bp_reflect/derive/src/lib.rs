//! See [`reflect_accessors`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemImpl, parse_macro_input};

static PROPERTY_ATTRIBUTE_NAME: &str = "property";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Accessor Reflection
///
/// `#[reflect_accessors]` on an inherent `impl` block implements `TypePath`
/// and `Typed` for its self type, describing the type as a class whose
/// accessors are the methods of the block.
///
/// ## Accessors
///
/// Every method taking `&self` and no other argument is an accessor.
/// Its accessor name is the lowerCamelCase form of the method name:
///
/// - `get_sub_bean1` -> `getSubBean1`
/// - `is_valid` -> `isValid`
///
/// Methods with other arguments, methods returning `()`, and methods whose
/// result is neither a path nor a trait object (`impl Trait`, slices,
/// tuples) are skipped. References in result types are stripped, so
/// `fn get_name(&self) -> &str` has result type `str`.
///
/// Result types must implement `Typed`: the primitives, `String`,
/// `Option<T>`, `Vec<T>`, `dyn Any` and other `#[reflect_accessors]` types.
///
/// ## Property identifiers
///
/// `#[property("id")]` binds a property identifier to the accessor.
/// The accessor name can be given explicitly when the camel case form does
/// not fit:
///
/// ```rust, ignore
/// #[reflect_accessors]
/// impl Link {
///     #[property("url-id", name = "getURL")]
///     pub fn get_url(&self) -> &str { &self.url }
/// }
/// ```
///
/// A tagged method is always an accessor, even if it returns `()`;
/// a tagged method with arguments is a compile error.
///
/// ## Class options
///
/// - `extends(A, B<C>)`: direct supertypes, in lookup order.
/// - `bound(T = Upper)`: upper bound of a type parameter, used when the
///   parameter is not fixed by a type argument.
/// - `type_path = "my_crate::Name"`: custom type path. The default is
///   `module_path!()` followed by the type's ident, without generics.
/// - `auto_register`: collect the type for `TypeRegistry::auto_register`.
///   No effect on generic types, or when the `auto_register` feature is
///   disabled.
///
/// ```rust, ignore
/// #[reflect_accessors(bound(T = SimpleBean))]
/// impl<T> ParameterizedBean<T> {
///     #[property("property-id")]
///     pub fn get_sub_bean(&self) -> &T { &self.0 }
/// }
///
/// #[reflect_accessors(extends(ParameterizedBean<SimpleBean>), auto_register)]
/// impl GenericBean {}
/// ```
///
/// Type parameters of the impl block get a `'static` bound in the
/// generated impls. Lifetime and const parameters are not supported.
#[proc_macro_attribute]
pub fn reflect_accessors(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut attrs = derive_data::ClassAttributes::default();
    let attr_parser = syn::meta::parser(|meta| attrs.parse_meta(meta));
    parse_macro_input!(attr with attr_parser);

    let mut item = parse_macro_input!(item as ItemImpl);

    let generated = match derive_data::ReflectClass::new(attrs, &mut item) {
        Ok(class) => impls::impl_reflect_class(&class),
        Err(err) => err.into_compile_error(),
    };

    TokenStream::from(quote! {
        #item
        #generated
    })
}
