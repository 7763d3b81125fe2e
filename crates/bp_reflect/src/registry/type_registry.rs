use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bp_utils::TypePathMap;

use crate::info::{TypeInfo, TypeRef, Typed};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of reflected types, keyed by (erased) type path.
///
/// [Registering](TypeRegistry::register) a type stores its static
/// [`TypeInfo`] together with everything it refers to: supertypes,
/// accessor result types and type parameter bounds.
///
/// The registry is the shipped [`Introspect`](crate::access::Introspect)
/// capability.
///
/// # Example
///
/// ```
/// use bp_reflect::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// let info = registry.get("alloc::string::String").unwrap();
/// assert_eq!(info.type_name(), "String");
/// ```
pub struct TypeRegistry {
    type_info_table: TypePathMap<&'static TypeInfo>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_info_table: TypePathMap::new(),
        }
    }

    /// Create a type registry with default registrations for primitive types.
    ///
    /// - `()` `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `str` `String`
    /// - `Option<T>` and the top type `dyn Any`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<str>();
        registry.register::<String>();
        registry.register::<Option<bool>>();
        registry.register::<dyn core::any::Any>();
        registry
    }

    // Returns `false` if the type path is already registered.
    #[inline]
    fn register_internal(&mut self, info: &'static TypeInfo) -> bool {
        self.type_info_table.try_insert(info.type_path(), || info)
    }

    fn register_type_ref(&mut self, type_ref: &TypeRef) {
        if let Some(info) = type_ref.info() {
            self.register_info(info);
        }
        for arg in type_ref.args() {
            self.register_type_ref(arg);
        }
    }

    fn register_dependencies(&mut self, info: &'static TypeInfo) {
        for param in info.generics().iter() {
            if let Some(bound) = param.bound() {
                self.register_type_ref(bound);
            }
        }
        if let Ok(class) = info.as_class() {
            for supertype in class.supertypes() {
                self.register_type_ref(supertype);
            }
            for accessor in class.iter() {
                self.register_type_ref(accessor.result());
            }
        }
    }

    /// Attempts to register the type `T` if it has not yet been registered already.
    ///
    /// This will also recursively register the types `T` refers to: its
    /// supertypes, the result types of its accessors and the upper bounds
    /// of its type parameters. No type is registered more than once, so
    /// self-referential classes are fine.
    ///
    /// # Example
    ///
    /// ```
    /// use bp_reflect::derive::reflect_accessors;
    /// use bp_reflect::registry::TypeRegistry;
    ///
    /// pub struct Node;
    ///
    /// #[reflect_accessors]
    /// impl Node {
    ///     pub fn get_next(&self) -> Node { Node }
    ///     pub fn get_label(&self) -> char { 'n' }
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Node>();
    ///
    /// assert_eq!(registry.len(), 2);
    /// assert!(registry.contains_type::<Node>());
    /// assert!(registry.contains_type::<char>());
    /// ```
    #[inline]
    pub fn register<T: Typed + ?Sized>(&mut self) {
        self.register_info(T::type_info());
    }

    /// Registers the given type information and its dependencies.
    ///
    /// See [`register`](Self::register).
    pub fn register_info(&mut self, info: &'static TypeInfo) {
        if self.register_internal(info) {
            self.register_dependencies(info);
        }
    }

    /// Insert or **Overwrite** the information of a type.
    ///
    /// This method will _not_ register type dependencies.
    /// Use [`register_info`](Self::register_info) to register a type with its dependencies.
    pub fn insert(&mut self, info: &'static TypeInfo) {
        self.type_info_table.insert(info.type_path(), info);
    }

    /// Automatically registers all non-generic types annotated with
    /// `#[reflect_accessors(auto_register)]`.
    ///
    /// This method is equivalent to calling [`register`](Self::register) for each qualifying type.
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration succeeded on the current platform; otherwise, `false`.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it
    /// does nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bp_reflect::derive::reflect_accessors;
    /// use bp_reflect::registry::TypeRegistry;
    ///
    /// pub struct Config;
    ///
    /// #[reflect_accessors(auto_register)]
    /// impl Config {
    ///     #[property("verbose-id")]
    ///     pub fn is_verbose(&self) -> bool { false }
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains_type::<Config>());
    /// ```
    #[inline]
    pub fn auto_register(&mut self) -> bool {
        crate::__macro_exports::auto_register::register_all(self)
    }

    /// Whether a type with the given type path has been registered.
    #[inline]
    pub fn contains(&self, type_path: &str) -> bool {
        self.type_info_table.contains(type_path)
    }

    /// Whether the type `T` has been registered.
    #[inline]
    pub fn contains_type<T: Typed + ?Sized>(&self) -> bool {
        self.contains(T::type_path())
    }

    /// Returns the [`TypeInfo`] of the type with the given type path.
    #[inline]
    pub fn get(&self, type_path: &str) -> Option<&'static TypeInfo> {
        self.type_info_table.get(type_path).copied()
    }

    /// Returns an iterator over the registered [`TypeInfo`]s.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.type_info_table.values().copied()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_info_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_info_table.is_empty()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_info_table.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shared [`TypeRegistry`], for hosts that keep registering types while
/// resolving paths.
///
/// Resolution only takes the read lock.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    /// The wrapped [`TypeRegistry`].
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Takes a read lock on the underlying [`TypeRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`TypeRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<TypeRegistry> for TypeRegistryArc {
    fn from(registry: TypeRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&*self.read(), f)
    }
}
