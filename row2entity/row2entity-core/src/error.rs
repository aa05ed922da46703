//! Error types for the value, record, and descriptor layers.

/// Error returned by [`Value`](crate::Value) accessors when the runtime
/// variant does not match the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct ValueTypeError {
    expected: &'static str,
    found: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }

    pub fn expected(&self) -> &'static str {
        self.expected
    }

    pub fn found(&self) -> &'static str {
        self.found
    }
}

/// Error produced when a field value cannot be coerced to a property's
/// declared type.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The value's runtime variant cannot supply the requested type.
    #[error(transparent)]
    ValueType(#[from] ValueTypeError),

    /// A numeric value does not fit the target type's range.
    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// A textual value does not parse as the target type.
    #[error("cannot parse {text:?} as {target}")]
    Parse { text: String, target: &'static str },

    /// A floating-point value with a fractional part was offered to an
    /// integer target; only exact conversions are performed.
    #[error("value {value} has a fractional part, {target} requires a whole number")]
    FractionalPart { value: f64, target: &'static str },

    /// An enumeration has no member with the given name.
    #[error("enum {enum_name} has no member named {member:?}")]
    UnknownEnumMember { enum_name: String, member: String },

    /// An enumeration has no member at the given ordinal.
    #[error("enum {enum_name} has no member with ordinal {ordinal}")]
    UnknownEnumOrdinal { enum_name: String, ordinal: i128 },

    /// The source and target kinds have no defined conversion.
    #[error("no conversion from {from} to {to}")]
    Unsupported { from: &'static str, to: &'static str },
}

/// Errors building tabular input.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A table was declared without any columns.
    #[error("a table must have at least one column")]
    NoColumns,

    /// Two columns share a name under case-insensitive comparison.
    #[error("duplicate column name {name:?}")]
    DuplicateColumn { name: String },

    /// A column was declared with an empty name.
    #[error("column names must be non-empty")]
    EmptyColumnName,

    /// A row's value count does not match the table's column count.
    #[error("row has {actual} values, table has {expected} columns")]
    WidthMismatch { expected: usize, actual: usize },
}

/// Errors validating a hand-registered type descriptor.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// The descriptor was built with an empty entity name.
    #[error("entity name must be non-empty")]
    EmptyEntityName,

    /// A constructor declares two parameters with the same name
    /// (case-insensitive).
    #[error("constructor #{index} of {entity} declares parameter {name:?} twice")]
    DuplicateParameter {
        entity: &'static str,
        index: usize,
        name: String,
    },

    /// Two properties share a name under case-insensitive comparison.
    #[error("{entity} declares property {name:?} twice")]
    DuplicateProperty { entity: &'static str, name: String },
}
