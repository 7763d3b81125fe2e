use proc_macro2::TokenStream;

/// Returns an empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Convert a snake_case method name into a lowerCamelCase accessor name.
///
/// Leading and repeated underscores are dropped.
pub(crate) fn lower_camel(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Combine `error` into `errors`.
pub(crate) fn push_error(errors: &mut Option<syn::Error>, error: syn::Error) {
    match errors {
        Some(errors) => errors.combine(error),
        None => *errors = Some(error),
    }
}
