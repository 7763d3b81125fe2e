use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, Ident, PathArguments, Type};

/// Convert a declared type into a `TypeRef` constructor expression.
///
/// - References, parentheses and groups are stripped: `&T` is `T`.
/// - A bare impl type parameter `T` becomes `TypeRef::param("T")`.
/// - `Self` of a generic impl becomes `TypeRef::generic::<Self>` applied to
///   the impl's own parameters, so recursion keeps the type arguments.
/// - A path with type arguments, `Holder<T>`, becomes
///   `TypeRef::generic::<Holder<T>>([..])` with converted arguments.
/// - Everything else is `TypeRef::of::<Ty>()`.
pub(crate) fn to_type_ref(ty: &Type, params: &[Ident], type_ref_: &TokenStream) -> TokenStream {
    match ty {
        Type::Reference(reference) => to_type_ref(&reference.elem, params, type_ref_),
        Type::Paren(paren) => to_type_ref(&paren.elem, params, type_ref_),
        Type::Group(group) => to_type_ref(&group.elem, params, type_ref_),
        Type::Path(path) if path.qself.is_none() => {
            if let Some(ident) = path.path.get_ident()
                && let Some(param) = params.iter().find(|param| *param == ident)
            {
                let name = param.to_string();
                return quote! { #type_ref_::param(#name) };
            }

            if path.path.is_ident("Self") && !params.is_empty() {
                let names = params.iter().map(Ident::to_string);
                return quote! { #type_ref_::generic::<Self>([#(#type_ref_::param(#names)),*]) };
            }

            let args: Vec<TokenStream> = match path.path.segments.last().map(|s| &s.arguments) {
                Some(PathArguments::AngleBracketed(angle)) => angle
                    .args
                    .iter()
                    .filter_map(|arg| match arg {
                        GenericArgument::Type(arg) => Some(to_type_ref(arg, params, type_ref_)),
                        _ => None,
                    })
                    .collect(),
                _ => Vec::new(),
            };

            if args.is_empty() {
                quote! { #type_ref_::of::<#ty>() }
            } else {
                quote! { #type_ref_::generic::<#ty>([#(#args),*]) }
            }
        }
        _ => quote! { #type_ref_::of::<#ty>() },
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::TokenStream;
    use quote::quote;
    use syn::{Ident, Type, parse_quote};

    use super::to_type_ref;

    fn convert(ty: Type) -> String {
        let params: Vec<Ident> = vec![parse_quote!(T)];
        let type_ref_: TokenStream = quote!(TypeRef);
        to_type_ref(&ty, &params, &type_ref_).to_string()
    }

    #[test]
    fn reference_to_param() {
        assert_eq!(convert(parse_quote!(&T)), quote!(TypeRef::param("T")).to_string());
    }

    #[test]
    fn plain_type() {
        assert_eq!(
            convert(parse_quote!(&str)),
            quote!(TypeRef::of::<str>()).to_string(),
        );
        assert_eq!(
            convert(parse_quote!(&dyn Any)),
            quote!(TypeRef::of::<dyn Any>()).to_string(),
        );
    }

    #[test]
    fn self_of_generic_impl() {
        assert_eq!(
            convert(parse_quote!(&Self)),
            quote!(TypeRef::generic::<Self>([TypeRef::param("T")])).to_string(),
        );

        let type_ref_: TokenStream = quote!(TypeRef);
        assert_eq!(
            to_type_ref(&parse_quote!(&Self), &[], &type_ref_).to_string(),
            quote!(TypeRef::of::<Self>()).to_string(),
        );
    }

    #[test]
    fn generic_application() {
        assert_eq!(
            convert(parse_quote!(Option<&T>)),
            quote!(TypeRef::generic::<Option<&T>>([TypeRef::param("T")])).to_string(),
        );
        assert_eq!(
            convert(parse_quote!(Holder<'static, bool>)),
            quote!(TypeRef::generic::<Holder<'static, bool>>([TypeRef::of::<bool>()])).to_string(),
        );
    }
}
