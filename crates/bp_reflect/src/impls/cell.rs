//! Containers for static storage of type information.

use std::sync::OnceLock;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// TypeInfoCell

/// Container for static storage of [`TypeInfo`].
///
/// Internally an [`OnceLock`]. A `static` cell declared inside a generic
/// function is shared by all instantiations; class information is erased,
/// so one cell per class is all that is needed.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct TypeInfoCell(OnceLock<TypeInfo>);

impl TypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`TypeInfo`], creating it with `f` on first use.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}
