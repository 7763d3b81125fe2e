//! Parse the annotated `impl` block into the data needed to generate code.

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod class_attributes;
mod reflect_class;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use accessor::Accessor;
pub(crate) use class_attributes::ClassAttributes;
pub(crate) use reflect_class::ReflectClass;
