use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Ident, LitStr, Token, Type, parenthesized};

/// Options given to `#[reflect_accessors(...)]`.
#[derive(Default)]
pub(crate) struct ClassAttributes {
    /// `extends(A, B<C>)`
    pub extends: Vec<Type>,
    /// `bound(T = Upper)`
    pub bounds: Vec<(Ident, Type)>,
    /// `type_path = "..."`
    pub type_path: Option<LitStr>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

/// `T = Upper` inside `bound(...)`.
struct BoundSpec {
    param: Ident,
    bound: Type,
}

impl syn::parse::Parse for BoundSpec {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let param = input.parse()?;
        input.parse::<Token![=]>()?;
        let bound = input.parse()?;
        Ok(Self { param, bound })
    }
}

impl ClassAttributes {
    pub fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("extends") {
            let content;
            parenthesized!(content in meta.input);
            let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
            self.extends.extend(types);
            Ok(())
        } else if meta.path.is_ident("bound") {
            let content;
            parenthesized!(content in meta.input);
            let specs = Punctuated::<BoundSpec, Token![,]>::parse_terminated(&content)?;
            for spec in specs {
                if self.bounds.iter().any(|(param, _)| *param == spec.param) {
                    return Err(syn::Error::new(
                        spec.param.span(),
                        format!("duplicate bound for `{}`", spec.param),
                    ));
                }
                self.bounds.push((spec.param, spec.bound));
            }
            Ok(())
        } else if meta.path.is_ident("type_path") {
            if self.type_path.is_some() {
                return Err(meta.error("duplicate `type_path`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            let value = lit.value();
            if value.is_empty() || value.starts_with("::") {
                return Err(syn::Error::new(
                    lit.span(),
                    "`type_path` must be a non-empty path without a leading `::`",
                ));
            }
            self.type_path = Some(lit);
            Ok(())
        } else if meta.path.is_ident("auto_register") {
            self.auto_register = Some(meta.path.require_ident()?.span());
            Ok(())
        } else {
            Err(meta.error(
                "unsupported option, expected one of `extends`, `bound`, `type_path`, `auto_register`",
            ))
        }
    }
}
