use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::access::{AccessorView, Introspect, PropertyAccessError, property_name};
use crate::info::{BoundType, TypePath};

/// Separator between property names of a path.
pub const PATH_SEPARATOR: &str = ".";

// -----------------------------------------------------------------------------
// PropertyAccess

/// Resolves chains of property identifiers into dotted property paths.
///
/// Each identifier is looked up on the *current* type: exactly one accessor
/// reachable from it must be bound to the identifier. The accessor's property
/// name is appended and its (substituted) result type becomes the current
/// type of the next hop.
///
/// `PropertyAccess` holds no state besides its [`Introspect`] capability and
/// may be shared freely between threads when the capability allows it.
///
/// # Examples
///
/// ```
/// use bp_reflect::access::PropertyAccess;
/// use bp_reflect::derive::reflect_accessors;
/// use bp_reflect::registry::TypeRegistry;
///
/// pub struct Address;
///
/// #[reflect_accessors]
/// impl Address {
///     #[property("city-id")]
///     pub fn get_city(&self) -> String { String::new() }
/// }
///
/// pub struct Person;
///
/// #[reflect_accessors]
/// impl Person {
///     #[property("home-id")]
///     pub fn get_home_address(&self) -> Address { Address }
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Person>();
///
/// let access = PropertyAccess::new(&registry);
/// let path = access.resolve_of::<Person>(&["home-id", "city-id"]).unwrap();
/// assert_eq!(path, "homeAddress.city");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropertyAccess<I> {
    introspect: I,
}

impl<I> PropertyAccess<I> {
    /// Create a resolver over the given introspection capability.
    #[inline]
    pub const fn new(introspect: I) -> Self {
        Self { introspect }
    }

    /// Returns the introspection capability.
    #[inline]
    pub const fn introspect(&self) -> &I {
        &self.introspect
    }

    /// Returns the introspection capability, consuming the resolver.
    #[inline]
    pub fn into_inner(self) -> I {
        self.introspect
    }
}

impl<I: Introspect> PropertyAccess<I> {
    /// Resolve `ids` starting from the raw type `T`.
    ///
    /// See [`resolve`](Self::resolve).
    #[inline]
    pub fn resolve_of<T: TypePath + ?Sized>(&self, ids: &[&str]) -> Result<String, PropertyAccessError> {
        self.resolve(&BoundType::of::<T>(), ids)
    }

    /// Resolve `ids` starting from `root`, joining the derived property
    /// names with [`PATH_SEPARATOR`].
    ///
    /// Fails on the first identifier that is not bound to exactly one
    /// property accessor; no partial path is returned. Every failure is
    /// logged at `error` level.
    pub fn resolve(&self, root: &BoundType, ids: &[&str]) -> Result<String, PropertyAccessError> {
        self.resolve_segments(root, ids)
            .map(|segments| segments.join(PATH_SEPARATOR))
            .inspect_err(|err| log::error!("{err}"))
    }

    /// Find the single accessor of `ty` bound to `id`.
    ///
    /// Property-name eligibility is *not* checked here.
    pub fn lookup(&self, ty: &BoundType, id: &str) -> Result<AccessorView, PropertyAccessError> {
        self.lookup_at(ty, id, 0)
    }

    fn resolve_segments(&self, root: &BoundType, ids: &[&str]) -> Result<Vec<String>, PropertyAccessError> {
        if ids.is_empty() {
            return Err(PropertyAccessError::EmptyPath);
        }

        let mut current = root.clone();
        let mut segments = Vec::with_capacity(ids.len());

        for (hop, &id) in ids.iter().enumerate() {
            let accessor = self.lookup_at(&current, id, hop)?;
            let Some(name) = property_name(accessor.name, &accessor.result) else {
                return Err(PropertyAccessError::NotAPropertyAccessor {
                    ty: current.ty().path(),
                    accessor: accessor.name,
                    id: id.to_string(),
                    hop,
                });
            };
            log::trace!(
                "hop {hop}: `{id}` on `{current}` -> {}() as `{name}`: {}",
                accessor.name,
                accessor.result,
            );
            segments.push(name);
            current = accessor.result;
        }

        Ok(segments)
    }

    fn lookup_at(&self, ty: &BoundType, id: &str, hop: usize) -> Result<AccessorView, PropertyAccessError> {
        let mut matching = self
            .introspect
            .accessors(ty)
            .into_iter()
            .filter(|accessor| accessor.property_id == Some(id));

        let Some(first) = matching.next() else {
            return Err(PropertyAccessError::MissingBinding {
                ty: ty.ty().path(),
                id: id.to_string(),
                hop,
            });
        };

        let rest: Vec<AccessorView> = matching.collect();
        if rest.is_empty() {
            return Ok(first);
        }

        Err(PropertyAccessError::AmbiguousBinding {
            ty: ty.ty().path(),
            id: id.to_string(),
            accessors: core::iter::once(&first)
                .chain(rest.iter())
                .map(|accessor| accessor.name)
                .collect(),
            hop,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::PropertyAccess;
    use crate::access::{AccessorView, Introspect, PropertyAccessError, PropertyAccessErrorKind};
    use crate::info::BoundType;

    struct Table(Vec<AccessorView>);

    impl Introspect for Table {
        fn accessors(&self, _: &BoundType) -> Vec<AccessorView> {
            self.0.clone()
        }
    }

    fn view(name: &'static str, result: BoundType, id: &'static str) -> AccessorView {
        AccessorView {
            name,
            result,
            property_id: Some(id),
        }
    }

    #[test]
    fn empty_path_is_rejected() {
        let access = PropertyAccess::new(Table(vec![]));
        assert_eq!(access.resolve_of::<()>(&[]), Err(PropertyAccessError::EmptyPath));
    }

    #[test]
    fn single_hop_has_no_separator() {
        let access = PropertyAccess::new(Table(vec![view("getName", BoundType::of::<String>(), "n")]));
        assert_eq!(access.resolve_of::<()>(&["n"]).unwrap(), "name");
    }

    #[test]
    fn ambiguity_lists_every_candidate() {
        let access = PropertyAccess::new(Table(vec![
            view("isVisible", BoundType::of::<bool>(), "dup"),
            view("getName", BoundType::of::<String>(), "other"),
            view("getId", BoundType::of::<String>(), "dup"),
        ]));
        let err = access.resolve_of::<()>(&["other", "dup"]).unwrap_err();
        assert_eq!(err.kind(), PropertyAccessErrorKind::AmbiguousBinding);
        assert_eq!(err.hop(), Some(1));
        let PropertyAccessError::AmbiguousBinding { mut accessors, .. } = err else {
            unreachable!()
        };
        accessors.sort_unstable();
        assert_eq!(accessors, ["getId", "isVisible"]);
    }

    #[test]
    fn lookup_ignores_naming_convention() {
        let access = PropertyAccess::new(Table(vec![view("handleEvent", BoundType::of::<()>(), "e")]));
        let found = access.lookup(&BoundType::of::<()>(), "e").unwrap();
        assert_eq!(found.name, "handleEvent");

        let err = access.resolve_of::<()>(&["e"]).unwrap_err();
        assert_eq!(
            err,
            PropertyAccessError::NotAPropertyAccessor {
                ty: "()",
                accessor: "handleEvent",
                id: "e".into(),
                hop: 0,
            }
        );
    }

    #[test]
    fn identifiers_match_exactly() {
        let access = PropertyAccess::new(Table(vec![view("getName", BoundType::of::<String>(), "name-id")]));
        let err = access.resolve_of::<()>(&["Name-id"]).unwrap_err();
        assert_eq!(err.kind(), PropertyAccessErrorKind::MissingBinding);
    }
}
