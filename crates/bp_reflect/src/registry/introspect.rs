use alloc::vec::Vec;
use core::any::Any;

use bp_utils::hash::HashSet;

use crate::access::{AccessorView, Introspect};
use crate::info::{BoundType, Generics, Type, TypeRef};
use crate::registry::{TypeRegistry, TypeRegistryArc};

// -----------------------------------------------------------------------------
// Substitution

/// Resolves the type parameters of one class use, e.g. `Holder<Bean>`.
struct Substitution<'a> {
    class: &'a BoundType,
    generics: &'a Generics,
}

impl Substitution<'_> {
    /// `fallback` allows a parameter to resolve to its upper bound.
    /// Parameters inside a bound never fall back again, so
    /// `bound(T = Holder<T>)` terminates.
    fn param(&self, name: &str, fallback: bool) -> BoundType {
        let Some(index) = self.generics.index_of(name) else {
            log::warn!(
                "`{}` refers to undeclared type parameter `{name}`, using `dyn Any`",
                self.class.ty().path(),
            );
            return BoundType::of::<dyn Any>();
        };
        if let Some(arg) = self.class.args().get(index) {
            return arg.clone();
        }
        match self.generics[index].bound() {
            Some(bound) if fallback => self.resolve(bound, false),
            _ => BoundType::of::<dyn Any>(),
        }
    }

    fn resolve(&self, type_ref: &TypeRef, fallback: bool) -> BoundType {
        match type_ref {
            TypeRef::Type(info) => BoundType::raw(*info().ty()),
            TypeRef::Param(name) => self.param(name, fallback),
            TypeRef::Generic(info, args) => {
                let args: Vec<BoundType> = args.iter().map(|arg| self.resolve(arg, fallback)).collect();
                BoundType::raw(*info().ty()).with_args(args)
            }
        }
    }

    #[inline]
    fn apply(&self, type_ref: &TypeRef) -> BoundType {
        self.resolve(type_ref, true)
    }
}

// -----------------------------------------------------------------------------
// Walk

struct Walk<'a> {
    registry: &'a TypeRegistry,
    seen_names: HashSet<&'static str>,
    stack: Vec<Type>,
    out: Vec<AccessorView>,
}

impl Walk<'_> {
    fn visit(&mut self, ty: &BoundType) {
        if self.stack.contains(ty.ty()) {
            log::warn!("supertype cycle through `{}` is ignored", ty.ty().path());
            return;
        }
        let Some(info) = self.registry.get(ty.ty().path()) else {
            log::warn!("`{}` is not registered, it has no accessors", ty.ty().path());
            return;
        };
        let Ok(class) = info.as_class() else {
            return;
        };

        let substitution = Substitution {
            class: ty,
            generics: class.generics(),
        };

        for accessor in class.iter() {
            // An accessor redeclared by a subtype hides the inherited one.
            if self.seen_names.insert(accessor.name()) {
                self.out.push(AccessorView {
                    name: accessor.name(),
                    result: substitution.apply(accessor.result()),
                    property_id: accessor.property_id(),
                });
            }
        }

        self.stack.push(*ty.ty());
        for supertype in class.supertypes() {
            self.visit(&substitution.apply(supertype));
        }
        self.stack.pop();
    }
}

// -----------------------------------------------------------------------------
// Introspect

/// Own accessors first, then supertypes depth-first in declaration order.
impl Introspect for TypeRegistry {
    fn accessors(&self, ty: &BoundType) -> Vec<AccessorView> {
        let mut walk = Walk {
            registry: self,
            seen_names: HashSet::default(),
            stack: Vec::new(),
            out: Vec::new(),
        };
        walk.visit(ty);
        walk.out
    }
}

impl Introspect for TypeRegistryArc {
    #[inline]
    fn accessors(&self, ty: &BoundType) -> Vec<AccessorView> {
        self.read().accessors(ty)
    }
}

// -----------------------------------------------------------------------------
// Tests
