//! Classes shared by the unit tests.

#![allow(dead_code, reason = "only the reflected shape is used")]

use core::any::Any;

use crate::derive::reflect_accessors;
use crate::impls::TypeInfoCell;
use crate::info::{AccessorInfo, ClassInfo, TypeInfo, TypePath, TypeRef, Typed};

// -----------------------------------------------------------------------------
// Beans

pub(crate) struct SimpleBean {
    pub name: String,
    pub valid: bool,
}

#[reflect_accessors]
impl SimpleBean {
    #[property("valid-id")]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[property("name-id")]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[property("id-id")]
    pub fn has_id(&self) -> bool {
        true
    }

    #[property("duplicate-id")]
    pub fn is_visible(&self) -> Option<bool> {
        None
    }

    #[property("duplicate-id")]
    pub fn get_id(&self) -> &dyn Any {
        &self.name
    }

    #[property("not-a-property-id")]
    pub fn handle_event(&self) {}

    // Not an accessor: takes an argument.
    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

pub(crate) struct SubBeanProperties {
    pub sub_bean1: SimpleBean,
}

#[reflect_accessors]
impl SubBeanProperties {
    #[property("simpleBean")]
    pub fn get_sub_bean1(&self) -> &SimpleBean {
        &self.sub_bean1
    }

    #[property("subBean")]
    pub fn get_bean2(&self) -> &Self {
        self
    }
}

pub(crate) struct ParameterizedBean<T>(pub T);

#[reflect_accessors(bound(T = SimpleBean))]
impl<T> ParameterizedBean<T> {
    #[property("property-id")]
    pub fn get_sub_bean(&self) -> &T {
        &self.0
    }
}

pub(crate) struct GenericBean(pub ParameterizedBean<SimpleBean>);

#[reflect_accessors(extends(ParameterizedBean<SimpleBean>))]
impl GenericBean {}

// -----------------------------------------------------------------------------
// Edge cases

pub(crate) struct Override(pub SimpleBean);

#[reflect_accessors(extends(SimpleBean))]
impl Override {
    pub fn get_name(&self) -> &str {
        "override"
    }
}

pub(crate) struct Cycle;

#[reflect_accessors(extends(Cycle))]
impl Cycle {
    pub fn get_self(&self) -> &Cycle {
        self
    }
}

pub(crate) struct Unbounded<T>(pub T);

#[reflect_accessors]
impl<T> Unbounded<T> {
    #[property("value-id")]
    pub fn get_value(&self) -> &T {
        &self.0
    }
}

/// Linked list node, recursing through `Self`.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Option<Box<Node<T>>>,
}

#[reflect_accessors(bound(T = SimpleBean))]
impl<T> Node<T> {
    #[property("next-id")]
    pub fn get_next(&self) -> &Self {
        self.next.as_deref().unwrap_or(self)
    }

    #[property("value-id")]
    pub fn get_value(&self) -> &T {
        &self.value
    }
}

/// Upper bound that is itself a generic application.
pub(crate) struct Wrapper<T>(pub T);

#[reflect_accessors(bound(T = ParameterizedBean<SubBeanProperties>))]
impl<T> Wrapper<T> {
    #[property("inner-id")]
    pub fn get_inner(&self) -> &T {
        &self.0
    }
}

type Flag = Option<bool>;

pub(crate) struct Flags;

#[reflect_accessors]
impl Flags {
    #[property("flag-id")]
    pub fn has_flag(&self) -> Option<bool> {
        Some(true)
    }

    #[property("enabled-id")]
    pub fn is_enabled(&self) -> Flag {
        None
    }

    #[property("count-id")]
    pub fn is_counted(&self) -> Option<u8> {
        None
    }
}

pub(crate) struct Renamed;

#[reflect_accessors(type_path = "beans::Renamed")]
impl Renamed {
    #[property("url-id", name = "getURL")]
    pub fn get_url(&self) -> String {
        String::new()
    }

    #[property("tags-id")]
    pub fn get_tags(&self) -> Vec<String> {
        Vec::new()
    }
}

pub(crate) struct AutoBean;

#[reflect_accessors(auto_register)]
impl AutoBean {
    #[property("auto-id")]
    pub fn is_auto(&self) -> bool {
        true
    }
}

/// Described without the macro.
pub(crate) struct Manual;

impl TypePath for Manual {
    fn type_path() -> &'static str {
        "bp_reflect::fixtures::Manual"
    }

    fn type_name() -> &'static str {
        "Manual"
    }

    fn module_path() -> Option<&'static str> {
        Some("bp_reflect::fixtures")
    }
}

impl Typed for Manual {
    fn type_info() -> &'static TypeInfo {
        static CELL: TypeInfoCell = TypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Class(
                ClassInfo::new::<Self>()
                    .with_supertypes([TypeRef::of::<SimpleBean>()])
                    .with_accessors([
                        AccessorInfo::new("getOwner", TypeRef::of::<SubBeanProperties>())
                            .with_property_id("owner-id"),
                        AccessorInfo::new("isActive", TypeRef::of::<Option<bool>>())
                            .with_property_id("active-id"),
                    ]),
            )
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{PropertyAccess, PropertyAccessError, PropertyAccessErrorKind};
    use crate::info::BoundType;
    use crate::registry::{TypeRegistry, TypeRegistryArc};

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<SubBeanProperties>();
        registry.register::<GenericBean>();
        registry.register::<Override>();
        registry.register::<Renamed>();
        registry
    }

    fn resolve<T: TypePath + ?Sized>(ids: &[&str]) -> Result<String, PropertyAccessError> {
        PropertyAccess::new(registry()).resolve_of::<T>(ids)
    }

    #[test]
    fn generated_type_path() {
        assert_eq!(SimpleBean::type_path(), "bp_reflect::fixtures::SimpleBean");
        assert_eq!(SimpleBean::type_name(), "SimpleBean");
        assert_eq!(SimpleBean::module_path(), Some("bp_reflect::fixtures"));

        assert_eq!(Renamed::type_path(), "beans::Renamed");
        assert_eq!(Renamed::type_name(), "Renamed");
        assert_eq!(Renamed::module_path(), Some("beans"));

        // Erased: every instantiation shares the class.
        assert_eq!(
            ParameterizedBean::<SimpleBean>::type_path(),
            ParameterizedBean::<u8>::type_path(),
        );
    }

    #[test]
    fn generated_class_info() {
        let info = SimpleBean::type_info().as_class().unwrap();
        assert_eq!(info.len(), 6);
        assert!(info.accessor("rename").is_none());
        assert_eq!(info.accessor("getName").unwrap().property_id(), Some("name-id"));
        assert!(info.accessor("handleEvent").unwrap().result().info().unwrap().type_is::<()>());

        let info = ParameterizedBean::<SimpleBean>::type_info().as_class().unwrap();
        let param = &info.generics()[0];
        assert_eq!(param.name(), "T");
        assert!(param.bound().unwrap().info().unwrap().type_is::<SimpleBean>());

        let info = Wrapper::<()>::type_info().as_class().unwrap();
        let bound = info.generics()[0].bound().unwrap();
        assert!(bound.info().unwrap().type_is::<ParameterizedBean<()>>());
        assert!(bound.args()[0].info().unwrap().type_is::<SubBeanProperties>());

        let info = GenericBean::type_info().as_class().unwrap();
        assert!(info.is_empty());
        assert_eq!(info.supertypes().len(), 1);

        let info = Renamed::type_info().as_class().unwrap();
        assert_eq!(info.accessor("getURL").unwrap().property_id(), Some("url-id"));
    }

    #[test]
    fn simple_bean_paths() {
        assert_eq!(resolve::<SimpleBean>(&["valid-id"]).unwrap(), "valid");
        assert_eq!(resolve::<SimpleBean>(&["name-id"]).unwrap(), "name");
        assert_eq!(resolve::<SimpleBean>(&["id-id"]).unwrap(), "id");
    }

    #[test]
    fn simple_bean_failures() {
        let err = resolve::<SimpleBean>(&["duplicate-id"]).unwrap_err();
        assert_eq!(err.kind(), PropertyAccessErrorKind::AmbiguousBinding);

        let err = resolve::<SimpleBean>(&["not-a-property-id"]).unwrap_err();
        assert_eq!(
            err,
            PropertyAccessError::NotAPropertyAccessor {
                ty: "bp_reflect::fixtures::SimpleBean",
                accessor: "handleEvent",
                id: "not-a-property-id".into(),
                hop: 0,
            }
        );

        let err = resolve::<SimpleBean>(&["foo"]).unwrap_err();
        assert_eq!(err.kind(), PropertyAccessErrorKind::MissingBinding);

        assert_eq!(resolve::<SimpleBean>(&[]), Err(PropertyAccessError::EmptyPath));
    }

    #[test]
    fn nested_paths() {
        assert_eq!(
            resolve::<SubBeanProperties>(&["simpleBean", "valid-id"]).unwrap(),
            "subBean1.valid",
        );
        assert_eq!(resolve::<SubBeanProperties>(&["subBean", "subBean"]).unwrap(), "bean2.bean2");
        assert_eq!(
            resolve::<SubBeanProperties>(&["subBean", "simpleBean", "name-id"]).unwrap(),
            "bean2.subBean1.name",
        );
        assert_eq!(
            resolve::<SubBeanProperties>(&["subBean", "subBean", "subBean", "simpleBean", "id-id"]).unwrap(),
            "bean2.bean2.bean2.subBean1.id",
        );
    }

    #[test]
    fn nested_failure_reports_hop() {
        let err = resolve::<SubBeanProperties>(&["subBean", "simpleBean", "missing"]).unwrap_err();
        assert_eq!(
            err,
            PropertyAccessError::MissingBinding {
                ty: "bp_reflect::fixtures::SimpleBean",
                id: "missing".into(),
                hop: 2,
            }
        );
    }

    #[test]
    fn generic_paths() {
        assert_eq!(resolve::<GenericBean>(&["property-id"]).unwrap(), "subBean");
        assert_eq!(resolve::<GenericBean>(&["property-id", "valid-id"]).unwrap(), "subBean.valid");
    }

    #[test]
    fn raw_generic_uses_bound() {
        assert_eq!(
            resolve::<ParameterizedBean<SimpleBean>>(&["property-id", "name-id"]).unwrap(),
            "subBean.name",
        );
    }

    #[test]
    fn explicit_argument_beats_bound() {
        let root = BoundType::of::<ParameterizedBean<()>>().with_args([BoundType::of::<SubBeanProperties>()]);
        let access = PropertyAccess::new(registry());
        assert_eq!(
            access.resolve(&root, &["property-id", "simpleBean"]).unwrap(),
            "subBean.subBean1",
        );
        assert_eq!(
            access.resolve(&root, &["property-id", "valid-id"]).unwrap_err().kind(),
            PropertyAccessErrorKind::MissingBinding,
        );
    }

    #[test]
    fn unbounded_parameter_has_no_properties() {
        let mut registry = registry();
        registry.register::<Unbounded<SimpleBean>>();
        let access = PropertyAccess::new(&registry);

        assert_eq!(access.resolve_of::<Unbounded<SimpleBean>>(&["value-id"]).unwrap(), "value");
        let err = access
            .resolve_of::<Unbounded<SimpleBean>>(&["value-id", "valid-id"])
            .unwrap_err();
        assert_eq!(err.kind(), PropertyAccessErrorKind::MissingBinding);
        assert_eq!(err.hop(), Some(1));
    }

    #[test]
    fn override_drops_binding() {
        let err = resolve::<Override>(&["name-id"]).unwrap_err();
        assert_eq!(err.kind(), PropertyAccessErrorKind::MissingBinding);
        assert_eq!(resolve::<Override>(&["valid-id"]).unwrap(), "valid");
    }

    #[test]
    fn explicit_accessor_name() {
        assert_eq!(resolve::<Renamed>(&["url-id"]).unwrap(), "URL");
        assert_eq!(resolve::<Renamed>(&["tags-id"]).unwrap(), "tags");
    }

    #[test]
    fn shared_registry() {
        let registry = TypeRegistryArc::default();
        let access = PropertyAccess::new(registry.clone());

        assert_eq!(
            access.resolve_of::<SimpleBean>(&["valid-id"]).unwrap_err().kind(),
            PropertyAccessErrorKind::MissingBinding,
        );

        registry.write().register::<SimpleBean>();
        assert_eq!(access.resolve_of::<SimpleBean>(&["valid-id"]).unwrap(), "valid");
    }

    #[test]
    fn hand_written_class() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Manual>();
        let access = PropertyAccess::new(&registry);

        assert_eq!(
            access.resolve_of::<Manual>(&["owner-id", "simpleBean", "valid-id"]).unwrap(),
            "owner.subBean1.valid",
        );
        assert_eq!(access.resolve_of::<Manual>(&["valid-id"]).unwrap(), "valid");
        assert_eq!(access.resolve_of::<Manual>(&["active-id"]).unwrap(), "active");
    }

    #[test]
    fn boxed_boolean_accessors() {
        let mut registry = TypeRegistry::new();
        registry.register::<Flags>();
        let access = PropertyAccess::new(&registry);

        assert_eq!(access.resolve_of::<Flags>(&["flag-id"]).unwrap(), "flag");
        assert_eq!(access.resolve_of::<Flags>(&["enabled-id"]).unwrap(), "enabled");
        assert_eq!(
            access.resolve_of::<Flags>(&["count-id"]).unwrap_err().kind(),
            PropertyAccessErrorKind::NotAPropertyAccessor,
        );
    }

    #[test]
    fn self_keeps_type_arguments() {
        let mut registry = registry();
        registry.register::<Node<()>>();
        let access = PropertyAccess::new(&registry);

        let root = BoundType::of::<Node<()>>().with_args([BoundType::of::<SubBeanProperties>()]);
        assert_eq!(
            access
                .resolve(&root, &["next-id", "next-id", "value-id", "simpleBean"])
                .unwrap(),
            "next.next.value.subBean1",
        );
        assert_eq!(
            access.resolve(&root, &["next-id", "value-id", "valid-id"]).unwrap_err().kind(),
            PropertyAccessErrorKind::MissingBinding,
        );

        // Raw: the bound applies at every hop.
        assert_eq!(
            access.resolve_of::<Node<()>>(&["next-id", "value-id", "valid-id"]).unwrap(),
            "next.value.valid",
        );
    }

    #[test]
    fn generic_bound_keeps_its_arguments() {
        let mut registry = TypeRegistry::new();
        registry.register::<Wrapper<()>>();
        assert!(registry.contains_type::<ParameterizedBean<()>>());
        assert!(registry.contains_type::<SubBeanProperties>());
        assert!(registry.contains_type::<SimpleBean>());

        let access = PropertyAccess::new(&registry);
        assert_eq!(
            access
                .resolve_of::<Wrapper<()>>(&["inner-id", "property-id", "simpleBean"])
                .unwrap(),
            "inner.subBean.subBean1",
        );
    }

    #[test]
    fn resolver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let access = PropertyAccess::new(registry());
        assert_send_sync(&access);
        assert_send_sync(&PropertyAccess::new(TypeRegistryArc::default()));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| access.resolve_of::<GenericBean>(&["property-id", "name-id"])))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), "subBean.name");
            }
        });
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_registered_class() {
        let mut registry = TypeRegistry::empty();
        assert!(registry.auto_register());
        assert!(registry.contains_type::<AutoBean>());
        assert!(registry.contains_type::<bool>());

        let access = PropertyAccess::new(&registry);
        assert_eq!(access.resolve_of::<AutoBean>(&["auto-id"]).unwrap(), "auto");
    }
}
