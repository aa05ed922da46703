//! Core value, record, and type-descriptor types for `row2entity`.
//!
//! This crate provides the engine-independent intermediate representations
//! ([`Value`] / [`ScalarType`]), the tabular source ([`Columns`] / [`Record`]
//! / [`Table`]), and the hand-registered type-introspection capability
//! ([`TypeDescriptor`] / [`Describe`]) consumed by the `row2entity` engine.

mod descriptor;
mod enums;
mod error;
mod record;
mod value;

pub use descriptor::{
    ConstructError, ConstructorSpec, Describe, ParamSpec, PropertySpec, TypeDescriptor,
    TypeDescriptorBuilder,
};
pub use enums::EnumTable;
pub use error::{ConversionError, DescriptorError, RecordError, ValueTypeError};
pub use record::{Column, Columns, Record, Table};
pub use value::{ScalarType, Value};
