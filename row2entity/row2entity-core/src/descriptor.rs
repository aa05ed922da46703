//! Hand-registered type descriptors replacing runtime reflection.
//!
//! A [`TypeDescriptor`] carries everything the engine needs to know about a
//! target entity type: its constructor signatures (with construction thunks)
//! and its named properties (with setter thunks). Descriptors are built once
//! per type, validated, and reused for every record.

use std::{error::Error, fmt, sync::Arc};

use crate::{
    enums::EnumTable,
    error::{ConversionError, DescriptorError},
    value::{ScalarType, Value},
};

/// Error raised by an entity's own construction logic.
///
/// Carried boxed so the engine can hand it back to the caller with its
/// original identity (downcastable) and message intact.
pub type ConstructError = Box<dyn Error + Send + Sync>;

type ConstructFn<E> = Box<dyn Fn(&[Value]) -> Result<E, ConstructError> + Send + Sync>;
type SetterFn<E> = Box<dyn Fn(&mut E, &Value) -> Result<(), ConversionError> + Send + Sync>;

/// One constructor parameter: name, declared type, nullability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: String,
    data_type: ScalarType,
    nullable: bool,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, data_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
        }
    }

    pub fn nullable(name: impl Into<String>, data_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> ScalarType {
        self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// One constructor signature of an entity type, paired with the thunk that
/// invokes it from a positional argument list.
///
/// The thunk receives exactly [`arity`](Self::arity) values, in parameter
/// order; a null argument arrives as [`Value::Null`].
pub struct ConstructorSpec<E> {
    params: Vec<ParamSpec>,
    construct: ConstructFn<E>,
}

impl<E> ConstructorSpec<E> {
    pub fn new(
        params: Vec<ParamSpec>,
        construct: impl Fn(&[Value]) -> Result<E, ConstructError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            params,
            construct: Box::new(construct),
        }
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Invoke the construction thunk with positional arguments.
    pub fn invoke(&self, args: &[Value]) -> Result<E, ConstructError> {
        debug_assert_eq!(args.len(), self.arity());
        (self.construct)(args)
    }
}

impl<E> fmt::Debug for ConstructorSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorSpec")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// One named property of an entity type.
///
/// Writable properties carry a setter thunk; read-only (computed) properties
/// are registrable so a descriptor can mirror the full shape of its type, but
/// they cannot accept backfilled data.
pub struct PropertySpec<E> {
    name: String,
    data_type: ScalarType,
    nullable: bool,
    enum_table: Option<Arc<EnumTable>>,
    setter: Option<SetterFn<E>>,
}

impl<E> PropertySpec<E> {
    /// Non-nullable writable property; values are assigned raw.
    pub fn writable(
        name: impl Into<String>,
        data_type: ScalarType,
        setter: impl Fn(&mut E, &Value) -> Result<(), ConversionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
            enum_table: None,
            setter: Some(Box::new(setter)),
        }
    }

    /// Nullable writable property; values are coerced to `data_type` before
    /// assignment.
    pub fn writable_nullable(
        name: impl Into<String>,
        data_type: ScalarType,
        setter: impl Fn(&mut E, &Value) -> Result<(), ConversionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            enum_table: None,
            setter: Some(Box::new(setter)),
        }
    }

    /// Nullable writable property backed by an enumeration; values are
    /// resolved through `enum_table` (member name or ordinal) before
    /// assignment.
    pub fn writable_enum(
        name: impl Into<String>,
        data_type: ScalarType,
        enum_table: Arc<EnumTable>,
        setter: impl Fn(&mut E, &Value) -> Result<(), ConversionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            enum_table: Some(enum_table),
            setter: Some(Box::new(setter)),
        }
    }

    /// Read-only property: registrable, never assignable.
    pub fn read_only(name: impl Into<String>, data_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
            enum_table: None,
            setter: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> ScalarType {
        self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_settable(&self) -> bool {
        self.setter.is_some()
    }

    pub fn enum_table(&self) -> Option<&EnumTable> {
        self.enum_table.as_deref()
    }

    pub fn setter(
        &self,
    ) -> Option<&(dyn Fn(&mut E, &Value) -> Result<(), ConversionError> + Send + Sync)> {
        self.setter.as_deref()
    }
}

impl<E> fmt::Debug for PropertySpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySpec")
            .field("name", &self.name)
            .field("data_type", &self.data_type)
            .field("nullable", &self.nullable)
            .field("settable", &self.is_settable())
            .finish_non_exhaustive()
    }
}

/// Everything the engine knows about one entity type.
///
/// Immutable once built; intended to live in a `static` (see [`Describe`])
/// and be shared by every factory targeting the type.
pub struct TypeDescriptor<E> {
    entity_name: &'static str,
    constructors: Vec<ConstructorSpec<E>>,
    properties: Vec<PropertySpec<E>>,
}

impl<E> TypeDescriptor<E> {
    pub fn builder(entity_name: &'static str) -> TypeDescriptorBuilder<E> {
        TypeDescriptorBuilder {
            entity_name,
            constructors: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    pub fn constructors(&self) -> &[ConstructorSpec<E>] {
        &self.constructors
    }

    pub fn properties(&self) -> &[PropertySpec<E>] {
        &self.properties
    }

    /// The zero-arity constructor, if one is registered.
    pub fn parameterless(&self) -> Option<&ConstructorSpec<E>> {
        self.constructors.iter().find(|c| c.arity() == 0)
    }

    /// Property by case-insensitive name match.
    pub fn property(&self, name: &str) -> Option<&PropertySpec<E>> {
        self.properties
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl<E> fmt::Debug for TypeDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("entity_name", &self.entity_name)
            .field("constructors", &self.constructors)
            .field("properties", &self.properties)
            .finish()
    }
}

/// Builder for [`TypeDescriptor`]; `build` validates name uniqueness.
pub struct TypeDescriptorBuilder<E> {
    entity_name: &'static str,
    constructors: Vec<ConstructorSpec<E>>,
    properties: Vec<PropertySpec<E>>,
}

impl<E> TypeDescriptorBuilder<E> {
    pub fn constructor(mut self, constructor: ConstructorSpec<E>) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn property(mut self, property: PropertySpec<E>) -> Self {
        self.properties.push(property);
        self
    }

    /// Validate and assemble the descriptor.
    ///
    /// Rejects an empty entity name, duplicate parameter names within one
    /// constructor, and duplicate property names (all case-insensitive).
    pub fn build(self) -> Result<TypeDescriptor<E>, DescriptorError> {
        if self.entity_name.is_empty() {
            return Err(DescriptorError::EmptyEntityName);
        }
        for (index, constructor) in self.constructors.iter().enumerate() {
            let params = constructor.params();
            for (i, param) in params.iter().enumerate() {
                if params[..i]
                    .iter()
                    .any(|p| p.name().eq_ignore_ascii_case(param.name()))
                {
                    return Err(DescriptorError::DuplicateParameter {
                        entity: self.entity_name,
                        index,
                        name: param.name().to_string(),
                    });
                }
            }
        }
        for (i, property) in self.properties.iter().enumerate() {
            if self.properties[..i]
                .iter()
                .any(|p| p.name().eq_ignore_ascii_case(property.name()))
            {
                return Err(DescriptorError::DuplicateProperty {
                    entity: self.entity_name,
                    name: property.name().to_string(),
                });
            }
        }
        Ok(TypeDescriptor {
            entity_name: self.entity_name,
            constructors: self.constructors,
            properties: self.properties,
        })
    }
}

/// Type-introspection capability: an entity type that can hand out its own
/// descriptor.
///
/// Implementations back this with a `LazyLock` static so the descriptor is
/// computed at most once per type and first access is safe under concurrency.
pub trait Describe: Sized + 'static {
    fn descriptor() -> &'static TypeDescriptor<Self>;
}
