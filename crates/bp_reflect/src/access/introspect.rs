use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::info::BoundType;

// -----------------------------------------------------------------------------
// AccessorView

/// An accessor as seen from a concrete [`BoundType`].
///
/// `result` already has the type parameters of the declaring class
/// substituted: a bound argument when the caller fixes the parameter,
/// the parameter's upper bound otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorView {
    /// Accessor name, e.g. `getSubBean`.
    pub name: &'static str,
    /// Declared result type, substituted.
    pub result: BoundType,
    /// Bound property identifier, if any.
    pub property_id: Option<&'static str>,
}

// -----------------------------------------------------------------------------
// Introspect

/// The type introspection capability used by
/// [`PropertyAccess`](crate::access::PropertyAccess).
///
/// Implementations must be stateless with respect to a single query:
/// the same `ty` always yields the same accessors in the same order.
///
/// # Examples
///
/// A fixed table is enough to drive resolution:
///
/// ```
/// use bp_reflect::access::{AccessorView, Introspect, PropertyAccess};
/// use bp_reflect::info::BoundType;
///
/// struct OneAccessor;
///
/// impl Introspect for OneAccessor {
///     fn accessors(&self, _: &BoundType) -> Vec<AccessorView> {
///         vec![AccessorView {
///             name: "getName",
///             result: BoundType::of::<String>(),
///             property_id: Some("name-id"),
///         }]
///     }
/// }
///
/// let access = PropertyAccess::new(OneAccessor);
/// assert_eq!(access.resolve_of::<()>(&["name-id"]).unwrap(), "name");
/// ```
pub trait Introspect {
    /// Returns every accessor reachable from `ty`, own accessors first,
    /// then inherited ones.
    fn accessors(&self, ty: &BoundType) -> Vec<AccessorView>;
}

impl<I: Introspect + ?Sized> Introspect for &I {
    #[inline]
    fn accessors(&self, ty: &BoundType) -> Vec<AccessorView> {
        (**self).accessors(ty)
    }
}

impl<I: Introspect + ?Sized> Introspect for Box<I> {
    #[inline]
    fn accessors(&self, ty: &BoundType) -> Vec<AccessorView> {
        (**self).accessors(ty)
    }
}

impl<I: Introspect + ?Sized> Introspect for Arc<I> {
    #[inline]
    fn accessors(&self, ty: &BoundType) -> Vec<AccessorView> {
        (**self).accessors(ty)
    }
}
