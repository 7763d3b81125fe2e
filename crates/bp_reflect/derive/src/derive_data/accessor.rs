use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, FnArg, ImplItemFn, Ident, LitStr, ReturnType, Token, Type};

use crate::PROPERTY_ATTRIBUTE_NAME;

/// A method of the annotated block that is reflected as an accessor.
pub(crate) struct Accessor {
    /// Accessor name, e.g. `getSubBean1`.
    pub name: String,
    /// Declared result type; `()` when the method returns nothing.
    pub result: Type,
    /// `#[property("id")]`
    pub property_id: Option<LitStr>,
}

/// The content of `#[property("id", name = "getURL")]`.
#[derive(Default)]
struct PropertyAttribute {
    id: Option<LitStr>,
    name: Option<LitStr>,
}

impl PropertyAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attr = Self::default();
        if input.peek(LitStr) {
            attr.id = Some(input.parse()?);
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            if key != "name" || attr.name.is_some() {
                return Err(syn::Error::new(
                    key.span(),
                    "expected `#[property(\"id\")]` or `#[property(\"id\", name = \"...\")]`",
                ));
            }
            input.parse::<Token![=]>()?;
            attr.name = Some(input.parse()?);
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(attr)
    }

    /// Removes every `#[property]` attribute from `attrs`, returning the parsed one.
    fn take(attrs: &mut Vec<Attribute>) -> syn::Result<Option<Self>> {
        let (tagged, rest): (Vec<Attribute>, Vec<Attribute>) = std::mem::take(attrs)
            .into_iter()
            .partition(|attr| attr.path().is_ident(PROPERTY_ATTRIBUTE_NAME));
        *attrs = rest;

        let mut tagged = tagged.into_iter();
        let Some(first) = tagged.next() else {
            return Ok(None);
        };
        if let Some(extra) = tagged.next() {
            return Err(syn::Error::new_spanned(extra, "duplicate `#[property]` attribute"));
        }
        first.parse_args_with(Self::parse).map(Some)
    }
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(tuple) if tuple.elems.is_empty())
}

/// Result types that can be described by a `TypeRef`, once references are stripped.
fn is_supported(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => is_supported(&reference.elem),
        Type::Paren(paren) => is_supported(&paren.elem),
        Type::Group(group) => is_supported(&group.elem),
        Type::Path(path) => path.qself.is_none(),
        Type::TraitObject(_) => true,
        Type::Tuple(tuple) => tuple.elems.is_empty(),
        _ => false,
    }
}

/// `&self` (or `self: &Self`) and nothing else.
fn takes_only_shared_self(method: &ImplItemFn) -> bool {
    let sig = &method.sig;
    if sig.inputs.len() != 1 || !sig.generics.params.is_empty() || sig.asyncness.is_some() {
        return false;
    }
    matches!(
        sig.inputs.first(),
        Some(FnArg::Receiver(receiver))
            if matches!(&*receiver.ty, Type::Reference(reference) if reference.mutability.is_none())
    )
}

impl Accessor {
    /// Reflect `method` as an accessor, stripping its `#[property]` attribute.
    ///
    /// Returns `Ok(None)` for methods that are not accessors.
    pub fn from_method(method: &mut ImplItemFn) -> syn::Result<Option<Self>> {
        let property = PropertyAttribute::take(&mut method.attrs)?;
        let shaped = takes_only_shared_self(method);

        let result: Type = match &method.sig.output {
            ReturnType::Default => syn::parse_quote!(()),
            ReturnType::Type(_, ty) => (**ty).clone(),
        };

        let Some(property) = property else {
            if !shaped || is_unit(&result) || !is_supported(&result) {
                return Ok(None);
            }
            return Ok(Some(Self {
                name: crate::utils::lower_camel(&method.sig.ident.unraw().to_string()),
                result,
                property_id: None,
            }));
        };

        if !shaped {
            return Err(syn::Error::new_spanned(
                &method.sig,
                "`#[property]` accessors must take `&self` and no other argument",
            ));
        }

        if !is_supported(&result) {
            return Err(syn::Error::new_spanned(
                &result,
                "unsupported accessor result type, expected a path, a trait object or `()`",
            ));
        }

        let name = match property.name {
            Some(name) => name.value(),
            None => crate::utils::lower_camel(&method.sig.ident.unraw().to_string()),
        };

        Ok(Some(Self {
            name,
            result,
            property_id: property.id,
        }))
    }
}
