use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

// -----------------------------------------------------------------------------
// PropertyAccessError

/// An error returned by [`PropertyAccess`](crate::access::PropertyAccess).
///
/// `hop` is the zero-based position of the failing identifier,
/// `ty` the type path of the type it was looked up on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PropertyAccessError {
    /// No identifier was given.
    #[error("at least one property identifier is required")]
    EmptyPath,
    /// No accessor of `ty` is bound to `id`.
    #[error("no accessor of `{ty}` is bound to property identifier `{id}` (hop {hop})")]
    MissingBinding {
        ty: &'static str,
        id: String,
        hop: usize,
    },
    /// Several accessors of `ty` are bound to `id`.
    #[error("several accessors of `{ty}` are bound to property identifier `{id}`: {accessors:?} (hop {hop})")]
    AmbiguousBinding {
        ty: &'static str,
        id: String,
        accessors: Vec<&'static str>,
        hop: usize,
    },
    /// The accessor bound to `id` has no conventional property name.
    #[error("accessor `{accessor}` of `{ty}` is bound to `{id}` but it is not a property accessor (hop {hop})")]
    NotAPropertyAccessor {
        ty: &'static str,
        accessor: &'static str,
        id: String,
        hop: usize,
    },
}

/// The fieldless kind of a [`PropertyAccessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyAccessErrorKind {
    EmptyPath,
    MissingBinding,
    AmbiguousBinding,
    NotAPropertyAccessor,
}

impl PropertyAccessError {
    /// Returns the kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bp_reflect::access::{PropertyAccessError, PropertyAccessErrorKind};
    ///
    /// let err = PropertyAccessError::EmptyPath;
    /// assert_eq!(err.kind(), PropertyAccessErrorKind::EmptyPath);
    /// ```
    pub fn kind(&self) -> PropertyAccessErrorKind {
        match self {
            Self::EmptyPath => PropertyAccessErrorKind::EmptyPath,
            Self::MissingBinding { .. } => PropertyAccessErrorKind::MissingBinding,
            Self::AmbiguousBinding { .. } => PropertyAccessErrorKind::AmbiguousBinding,
            Self::NotAPropertyAccessor { .. } => PropertyAccessErrorKind::NotAPropertyAccessor,
        }
    }

    /// Returns the position of the failing identifier, `None` for [`EmptyPath`].
    ///
    /// [`EmptyPath`]: PropertyAccessError::EmptyPath
    pub fn hop(&self) -> Option<usize> {
        match self {
            Self::EmptyPath => None,
            Self::MissingBinding { hop, .. }
            | Self::AmbiguousBinding { hop, .. }
            | Self::NotAPropertyAccessor { hop, .. } => Some(*hop),
        }
    }
}
