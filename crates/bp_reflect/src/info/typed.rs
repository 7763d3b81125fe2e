use crate::info::{TypeInfo, TypePath, TypeRef};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[reflect_accessors]`](crate::derive::reflect_accessors)
/// for classes, and by this crate for the primitive opaque types.
///
/// # Manually Impl
///
/// Use [`TypeInfoCell`] to keep the information in static storage:
///
/// ```
/// use bp_reflect::info::{AccessorInfo, ClassInfo, TypeInfo, TypePath, TypeRef, Typed};
/// use bp_reflect::impls::TypeInfoCell;
///
/// struct Person;
///
/// impl TypePath for Person {
///     fn type_path() -> &'static str { "my_crate::Person" }
///     fn type_name() -> &'static str { "Person" }
///     fn module_path() -> Option<&'static str> { Some("my_crate") }
/// }
///
/// impl Typed for Person {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: TypeInfoCell = TypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Class(
///             ClassInfo::new::<Self>().with_accessors([
///                 AccessorInfo::new("getName", TypeRef::of::<String>())
///                     .with_property_id("name-id"),
///             ])
///         ))
///     }
/// }
///
/// let info = Person::type_info().as_class().unwrap();
/// assert_eq!(info.accessor("getName").unwrap().property_id(), Some("name-id"));
/// ```
///
/// Statics inside generic functions are shared by every instantiation,
/// which is exactly right here: class information is erased.
///
/// [`TypeInfoCell`]: crate::impls::TypeInfoCell
pub trait Typed: TypePath {
    /// A static accessor to compile-time type information.
    fn type_info() -> &'static TypeInfo;

    /// The type expression [`TypeRef::of`] builds for this type.
    ///
    /// Type information is erased, so by default the arguments of a generic
    /// type are lost. `Option<bool>` overrides this to keep its `bool`.
    #[inline]
    fn type_ref() -> TypeRef {
        TypeRef::Type(Self::type_info)
    }
}
