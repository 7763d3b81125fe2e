//! Property-name derivation from accessor names.

use alloc::string::String;

use crate::info::BoundType;

const GET_PREFIX: &str = "get";
const IS_PREFIX: &str = "is";
const HAS_PREFIX: &str = "has";

/// Lower the first character of `name`, unless the first two characters
/// are both upper case (`URL` stays `URL`, `Name` becomes `name`).
///
/// # Examples
///
/// ```
/// use bp_reflect::access::decapitalize;
///
/// assert_eq!(decapitalize("SubBean1"), "subBean1");
/// assert_eq!(decapitalize("URL"), "URL");
/// assert_eq!(decapitalize("X"), "x");
/// assert_eq!(decapitalize(""), "");
/// ```
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if first.is_uppercase() && chars.next().is_some_and(char::is_uppercase) {
        return String::from(name);
    }
    let mut out = String::with_capacity(name.len());
    out.extend(first.to_lowercase());
    out.push_str(&name[first.len_utf8()..]);
    out
}

/// Returns `true` for `bool` and `Option<bool>`.
///
/// # Examples
///
/// ```
/// use bp_reflect::access::is_boolean;
/// use bp_reflect::info::BoundType;
///
/// assert!(is_boolean(&BoundType::of::<bool>()));
/// assert!(is_boolean(&BoundType::of::<Option<()>>().with_args([BoundType::of::<bool>()])));
/// assert!(!is_boolean(&BoundType::of::<Option<()>>()));
/// assert!(!is_boolean(&BoundType::of::<String>()));
/// ```
pub fn is_boolean(ty: &BoundType) -> bool {
    let ty_ = ty.ty();
    ty_.is::<bool>()
        || (ty_.is::<Option<bool>>() && matches!(ty.args(), [arg] if arg.ty().is::<bool>()))
}

/// Derive the property name of an accessor.
///
/// - `getX` becomes `x`, whatever the result type;
/// - `isX` and `hasX` become `x` when the result is boolean;
/// - everything else, including accessors returning `()`, has no property name.
///
/// # Examples
///
/// ```
/// use bp_reflect::access::property_name;
/// use bp_reflect::info::BoundType;
///
/// let text = BoundType::of::<String>();
/// let flag = BoundType::of::<bool>();
///
/// assert_eq!(property_name("getName", &text).as_deref(), Some("name"));
/// assert_eq!(property_name("isValid", &flag).as_deref(), Some("valid"));
/// assert_eq!(property_name("hasId", &flag).as_deref(), Some("id"));
/// assert_eq!(property_name("isValid", &text), None);
/// assert_eq!(property_name("get", &text), None);
/// ```
pub fn property_name(accessor: &str, result: &BoundType) -> Option<String> {
    if result.ty().is::<()>() {
        return None;
    }
    if let Some(rest) = accessor.strip_prefix(GET_PREFIX)
        && !rest.is_empty()
    {
        return Some(decapitalize(rest));
    }
    if !is_boolean(result) {
        return None;
    }
    [IS_PREFIX, HAS_PREFIX]
        .into_iter()
        .filter_map(|prefix| accessor.strip_prefix(prefix))
        .find(|rest| !rest.is_empty())
        .map(decapitalize)
}

#[cfg(test)]
mod tests {
    use super::{decapitalize, property_name};
    use crate::info::BoundType;

    #[test]
    fn decapitalize_follows_bean_rules() {
        assert_eq!(decapitalize("Name"), "name");
        assert_eq!(decapitalize("URLPath"), "URLPath");
        assert_eq!(decapitalize("aB"), "aB");
        assert_eq!(decapitalize("Éclair"), "éclair");
    }

    #[test]
    fn boxed_boolean_accepts_is_and_has() {
        let boxed = BoundType::of::<Option<bool>>().with_args([BoundType::of::<bool>()]);
        assert_eq!(property_name("isVisible", &boxed).as_deref(), Some("visible"));
        assert_eq!(property_name("hasId", &boxed).as_deref(), Some("id"));

        let raw = BoundType::of::<Option<bool>>();
        assert_eq!(property_name("isVisible", &raw), None);
    }

    #[test]
    fn non_conventional_names() {
        let flag = BoundType::of::<bool>();
        assert_eq!(property_name("handleEvent", &flag), None);
        assert_eq!(property_name("is", &flag), None);
        assert_eq!(property_name("has", &flag), None);
        assert_eq!(property_name("getName", &BoundType::of::<()>()), None);
    }

    #[test]
    fn get_prefix_wins_for_booleans() {
        let flag = BoundType::of::<bool>();
        assert_eq!(property_name("getActive", &flag).as_deref(), Some("active"));
    }
}
