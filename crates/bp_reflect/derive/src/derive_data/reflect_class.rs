use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned;
use syn::{
    GenericArgument, GenericParam, Generics, Ident, ImplItem, ItemImpl, LitStr, Path, PathArguments,
    Type,
};

use super::{Accessor, ClassAttributes};

/// Type parameters in the order the self type takes them.
///
/// The arguments of a `BoundType` are indexed in that order, so
/// `impl<A, B> Pair<B, A>` declares `B` first.
fn self_type_params(self_ty: &Type, impl_params: &[Ident]) -> syn::Result<Vec<Ident>> {
    let mut params = Vec::new();
    let arguments = match self_ty {
        Type::Path(path) => path.path.segments.last().map(|s| &s.arguments),
        _ => None,
    };
    if let Some(PathArguments::AngleBracketed(angle)) = arguments {
        for arg in &angle.args {
            let param = match arg {
                GenericArgument::Lifetime(_) => continue,
                GenericArgument::Type(Type::Path(ty)) if ty.qself.is_none() => ty.path.get_ident(),
                _ => None,
            };
            match param {
                Some(ident) if impl_params.contains(ident) && !params.contains(ident) => {
                    params.push(ident.clone());
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        arg,
                        "type arguments of the self type must be distinct type parameters of the impl",
                    ));
                }
            }
        }
    }
    if params.len() != impl_params.len() {
        return Err(syn::Error::new_spanned(
            self_ty,
            "every type parameter of the impl must be a type argument of the self type",
        ));
    }
    Ok(params)
}

/// A parsed `#[reflect_accessors]` impl block.
pub(crate) struct ReflectClass {
    bp_reflect_path: Path,
    attrs: ClassAttributes,
    self_ty: Type,
    ident: Ident,
    generics: Generics,
    params: Vec<Ident>,
    accessors: Vec<Accessor>,
}

impl ReflectClass {
    /// Validate the impl block and collect its accessors.
    ///
    /// `#[property]` attributes are stripped from `item` even on error,
    /// so the re-emitted block never carries unknown attributes.
    pub fn new(attrs: ClassAttributes, item: &mut ItemImpl) -> syn::Result<Self> {
        let mut errors: Option<syn::Error> = None;

        let mut accessors = Vec::new();
        for impl_item in &mut item.items {
            if let ImplItem::Fn(method) = impl_item {
                match Accessor::from_method(method) {
                    Ok(Some(accessor)) => accessors.push(accessor),
                    Ok(None) => {}
                    Err(err) => crate::utils::push_error(&mut errors, err),
                }
            }
        }

        if let Some((_, path, _)) = &item.trait_ {
            crate::utils::push_error(
                &mut errors,
                syn::Error::new_spanned(path, "`#[reflect_accessors]` only supports inherent impl blocks"),
            );
        }

        let mut impl_params = Vec::new();
        for param in &item.generics.params {
            match param {
                GenericParam::Type(param) => impl_params.push(param.ident.clone()),
                GenericParam::Lifetime(_) | GenericParam::Const(_) => crate::utils::push_error(
                    &mut errors,
                    syn::Error::new(
                        param.span(),
                        "`#[reflect_accessors]` only supports type parameters",
                    ),
                ),
            }
        }

        for (param, _) in &attrs.bounds {
            if !impl_params.contains(param) {
                crate::utils::push_error(
                    &mut errors,
                    syn::Error::new(param.span(), format!("`{param}` is not a type parameter of this impl")),
                );
            }
        }

        let ident = match &*item.self_ty {
            Type::Path(path) if path.qself.is_none() => path.path.segments.last().map(|s| s.ident.clone()),
            _ => None,
        };

        if let Some(err) = errors {
            return Err(err);
        }

        let Some(ident) = ident else {
            return Err(syn::Error::new_spanned(
                &item.self_ty,
                "`#[reflect_accessors]` requires a named struct or enum type",
            ));
        };

        let params = self_type_params(&item.self_ty, &impl_params)?;

        Ok(Self {
            bp_reflect_path: crate::path::bp_reflect(),
            attrs,
            self_ty: (*item.self_ty).clone(),
            ident,
            generics: item.generics.clone(),
            params,
            accessors,
        })
    }

    #[inline]
    pub fn bp_reflect_path(&self) -> &Path {
        &self.bp_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &ClassAttributes {
        &self.attrs
    }

    #[inline]
    pub fn self_ty(&self) -> &Type {
        &self.self_ty
    }

    #[inline]
    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    /// Type parameters of the impl block, in the order of the self type's arguments.
    #[inline]
    pub fn params(&self) -> &[Ident] {
        &self.params
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.params.is_empty()
    }

    /// `impl<..>` generics, with a `'static` bound added to every type parameter.
    pub fn static_generics(&self) -> Generics {
        let mut generics = self.generics.clone();
        let where_clause = generics.make_where_clause();
        for param in &self.params {
            where_clause.predicates.push(syn::parse_quote!(#param: 'static));
        }
        generics
    }

    /// Type path expression, e.g. `concat!(module_path!(), "::Foo")`.
    pub fn type_path_expr(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => quote!(#lit),
            None => {
                let suffix = format!("::{}", self.ident);
                quote!(::core::concat!(::core::module_path!(), #suffix))
            }
        }
    }

    /// Type name literal: the last segment of the type path.
    pub fn type_name_lit(&self) -> LitStr {
        let name = match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                match value.rsplit_once("::") {
                    Some((_, name)) => name.to_owned(),
                    None => value,
                }
            }
            None => self.ident.to_string(),
        };
        LitStr::new(&name, self.ident.span())
    }

    /// Module path expression, `Option<&'static str>`.
    pub fn module_path_expr(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => match lit.value().rsplit_once("::") {
                Some((module, _)) => {
                    let module = LitStr::new(module, lit.span());
                    quote!(::core::option::Option::Some(#module))
                }
                None => quote!(::core::option::Option::None),
            },
            None => quote!(::core::option::Option::Some(::core::module_path!())),
        }
    }

    /// The span `auto_register` was requested at, if it applies.
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    pub fn auto_register_span(&self) -> Option<Span> {
        if self.impl_with_generic() {
            return None;
        }
        self.attrs.auto_register
    }
}

#[cfg(test)]
mod tests {
    use syn::{Ident, Type, parse_quote};

    use super::self_type_params;

    fn names(self_ty: Type, impl_params: &[Ident]) -> syn::Result<Vec<String>> {
        self_type_params(&self_ty, impl_params).map(|params| params.iter().map(Ident::to_string).collect())
    }

    #[test]
    fn params_follow_self_type_order() {
        let impl_params: Vec<Ident> = vec![parse_quote!(A), parse_quote!(B)];
        assert_eq!(names(parse_quote!(Pair<'static, B, A>), &impl_params).unwrap(), ["B", "A"]);
        assert_eq!(names(parse_quote!(Bean), &[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn self_type_arguments_must_be_impl_params() {
        let impl_params: Vec<Ident> = vec![parse_quote!(T)];
        assert!(names(parse_quote!(Holder<u8>), &[]).is_err());
        assert!(names(parse_quote!(Holder<T, T>), &impl_params).is_err());
        assert!(names(parse_quote!(Holder), &impl_params).is_err());
    }
}
