use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// The type path is the identity of a type in this crate. Class paths are
/// *erased*: every instantiation of a generic class reports the same path,
/// so `Holder<A>` and `Holder<B>` are one class whose type arguments are
/// tracked separately by [`BoundType`](crate::info::BoundType).
///
/// We guarantee that these names do not have the prefix `::`.
/// Users should also ensure this when manually implementing it.
///
/// # Implementation
///
/// [`#[reflect_accessors]`](crate::derive::reflect_accessors) implements it
/// for the type of the annotated `impl` block.
///
/// Manually:
///
/// ```
/// use bp_reflect::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
/// ```
pub trait TypePath: 'static {
    /// Returns the fully qualified, erased path of the type.
    ///
    /// This is the unique identifier of a type,
    /// and should **not** be duplicated in different types.
    ///
    /// For `Option<bool>`, this is `"core::option::Option"`.
    fn type_path() -> &'static str;

    /// Returns the short name of the type, without module path.
    ///
    /// This name allows for duplication.
    ///
    /// For `Option<bool>`, this is `"Option"`.
    fn type_name() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive built-in types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// Lightweight vtable providing dynamic access to [`TypePath`] APIs.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::TypePathTable;
///
/// let x = TypePathTable::of::<String>();
/// assert_eq!(x.path(), "alloc::string::String");
/// assert_eq!(x.name(), "String");
/// assert_eq!(x.module_path(), Some("alloc::string"));
/// ```
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    /// Creates a new table from a type.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            module_path: T::module_path,
        }
    }

    /// See [`TypePath::type_path`]
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`]
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::module_path`]
    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The base representation of a reflected type.
///
/// A thin wrapper of [`TypePathTable`]. Equality and hashing only look at
/// the (erased) type path.
///
/// # Examples
///
/// ```
/// use bp_reflect::info::Type;
///
/// let ty = Type::of::<String>();
///
/// assert!(ty.is::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
///
/// // Erased: every `Option<T>` is the same type.
/// assert_eq!(Type::of::<Option<bool>>(), Type::of::<Option<String>>());
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
}

impl Type {
    /// Creates a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
        }
    }

    /// Check if the given type matches this one, comparing erased paths.
    #[inline]
    pub fn is<T: TypePath + ?Sized>(&self) -> bool {
        self.path() == T::type_path()
    }

    /// Returns the [`TypePathTable`] of the type.
    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.type_path_table
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path().hash(state);
    }
}

/// Only outputs the type path.
impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: $crate::info::TypePath + ?Sized>(&self) -> bool {
            self.ty().is::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// Returns the module path.
        #[inline]
        pub fn module_path(&self) -> Option<&'static str> {
            self.ty().module_path()
        }
    };
}

pub(crate) use impl_type_fn;
