use crate::info::TypeRef;

// -----------------------------------------------------------------------------
// AccessorInfo

/// A declared zero-argument accessor of a class.
///
/// `name` is the accessor name as seen by property-name derivation
/// (`getName`, `isValid`, ...), `result` its declared result type.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::{AccessorInfo, TypeRef};
///
/// let info = AccessorInfo::new("getName", TypeRef::of::<String>())
///     .with_property_id("name-id");
///
/// assert_eq!(info.name(), "getName");
/// assert_eq!(info.property_id(), Some("name-id"));
/// ```
#[derive(Clone, Debug)]
pub struct AccessorInfo {
    name: &'static str,
    result: TypeRef,
    property_id: Option<&'static str>,
}

impl AccessorInfo {
    /// Create an accessor without a bound property identifier.
    #[inline]
    pub const fn new(name: &'static str, result: TypeRef) -> Self {
        Self {
            name,
            result,
            property_id: None,
        }
    }

    /// Bind a property identifier to this accessor.
    #[inline]
    pub fn with_property_id(mut self, id: &'static str) -> Self {
        self.property_id = Some(id);
        self
    }

    /// Returns the accessor name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared result type.
    #[inline]
    pub const fn result(&self) -> &TypeRef {
        &self.result
    }

    /// Returns the bound property identifier, if any.
    #[inline]
    pub const fn property_id(&self) -> Option<&'static str> {
        self.property_id
    }
}
