//! Positional constructor invocation and property backfill.

use row2entity_core::{ConstructorSpec, Record, TypeDescriptor, Value};
use tracing::trace;

use crate::{coerce::coerce_value, error::FactoryError};

/// Materialize one entity from `record` using the selected `constructor`.
///
/// Constructor arguments are bound positionally: each parameter takes the
/// value of the same-named (case-insensitive) column. A parameter whose
/// column is absent from the record's schema fails with
/// [`FactoryError::UnmatchedConstructorParameter`] even when the parameter is
/// nullable; a present-but-null column binds as [`Value::Null`].
///
/// Columns consumed by the constructor are excluded from backfill. Every
/// remaining non-null field must land in a writable property of the same
/// (case-insensitive) name, coerced to the property's declared type when the
/// property is nullable; remaining null fields are skipped, leaving the
/// property at its constructor-assigned value.
///
/// An error raised by the entity's own construction logic is returned as
/// [`FactoryError::Construction`] with its identity and message untouched.
pub fn materialize<E>(
    constructor: &ConstructorSpec<E>,
    descriptor: &TypeDescriptor<E>,
    record: &Record,
) -> Result<E, FactoryError> {
    let entity = descriptor.entity_name();

    let mut consumed = vec![false; record.width()];
    let mut args = Vec::with_capacity(constructor.arity());
    for param in constructor.params() {
        let Some(index) = record.columns().index_of(param.name()) else {
            return Err(FactoryError::UnmatchedConstructorParameter {
                entity,
                parameter: param.name().to_string(),
            });
        };
        consumed[index] = true;
        args.push(record.value_at(index).clone());
    }

    let mut instance = constructor
        .invoke(&args)
        .map_err(FactoryError::Construction)?;

    for (index, (column, value)) in record.iter().enumerate() {
        if consumed[index] || value.is_null() {
            continue;
        }
        let unmatched = || FactoryError::UnmatchedProperty {
            entity,
            field: column.name().to_string(),
        };
        let property = descriptor.property(column.name()).ok_or_else(unmatched)?;
        // A registered but read-only property cannot accept data either.
        let setter = property.setter().ok_or_else(unmatched)?;

        let conversion = |source| FactoryError::Conversion {
            entity,
            field: column.name().to_string(),
            source,
        };
        let coerced = if property.is_nullable() {
            match property.enum_table() {
                Some(table) => {
                    let ordinal = table.resolve(value).map_err(conversion)?;
                    coerce_value(&Value::U64(ordinal as u64), property.data_type())
                        .map_err(conversion)?
                }
                None => coerce_value(value, property.data_type()).map_err(conversion)?,
            }
        } else {
            value.clone()
        };
        setter(&mut instance, &coerced).map_err(conversion)?;
        trace!(entity, field = column.name(), "backfilled property");
    }

    Ok(instance)
}
