//! Error types for the materialization engine.

use row2entity_core::{ConstructError, ConversionError};

/// Errors produced while resolving a constructor for a record or
/// materializing an entity from it.
///
/// No variant is retried or recovered within the engine: the first failure
/// aborts the current record and, in a batch, the remainder of the batch.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// No constructor's non-nullable parameters are all covered by non-null
    /// record fields.
    #[error("no constructor of {entity} matches the record's non-null fields")]
    NoMatchingConstructor { entity: &'static str },

    /// The selected constructor names a parameter with no column in the
    /// record's schema at all (absence is distinct from presence-with-null).
    #[error("constructor parameter {parameter:?} of {entity} has no matching column")]
    UnmatchedConstructorParameter {
        entity: &'static str,
        parameter: String,
    },

    /// A leftover non-null field has no writable property to land in.
    #[error("{entity} has no writable property matching field {field:?}")]
    UnmatchedProperty { entity: &'static str, field: String },

    /// A leftover field's value could not be coerced to its property's
    /// declared type.
    #[error("cannot assign field {field:?} of {entity}: {source}")]
    Conversion {
        entity: &'static str,
        field: String,
        #[source]
        source: ConversionError,
    },

    /// An error raised by the entity's own construction logic, passed through
    /// with its original identity and message.
    #[error(transparent)]
    Construction(ConstructError),
}
