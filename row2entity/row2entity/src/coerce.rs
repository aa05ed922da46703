//! Standard numeric/textual conversions for nullable property targets.
//!
//! Conversions are strict: integer narrowing is range-checked, float to
//! integer is accepted only when the value is whole (no rounding), and
//! string conversions go through the standard parse/format paths. Pairs with
//! no defined conversion (e.g. bytes to anything else) are rejected.

use row2entity_core::{ConversionError, ScalarType, Value};

/// Coerce `value` to the declared `target` type.
///
/// `Null` passes through unchanged; a value already of the target type is
/// cloned as-is.
pub fn coerce_value(value: &Value, target: ScalarType) -> Result<Value, ConversionError> {
    if value.is_null() || value.kind() == Some(target) {
        return Ok(value.clone());
    }
    match target {
        ScalarType::I8
        | ScalarType::I16
        | ScalarType::I32
        | ScalarType::I64
        | ScalarType::U8
        | ScalarType::U16
        | ScalarType::U32
        | ScalarType::U64 => to_integer(value, target),
        ScalarType::F32 | ScalarType::F64 => to_float(value, target),
        ScalarType::Bool => to_bool(value),
        ScalarType::String => to_string(value),
        ScalarType::Bytes => Err(unsupported(value, target)),
    }
}

fn to_integer(value: &Value, target: ScalarType) -> Result<Value, ConversionError> {
    if let Some(wide) = value.as_integer() {
        return narrow_integer(wide, target);
    }
    match value {
        Value::F32(v) => whole_float_to_integer(f64::from(*v), target),
        Value::F64(v) => whole_float_to_integer(*v, target),
        Value::Bool(v) => narrow_integer(i128::from(*v), target),
        Value::String(text) => {
            let wide = text.parse::<i128>().map_err(|_| ConversionError::Parse {
                text: text.to_string(),
                target: target.name(),
            })?;
            narrow_integer(wide, target)
        }
        _ => Err(unsupported(value, target)),
    }
}

fn whole_float_to_integer(v: f64, target: ScalarType) -> Result<Value, ConversionError> {
    if !v.is_finite() || v.fract() != 0.0 {
        return Err(ConversionError::FractionalPart {
            value: v,
            target: target.name(),
        });
    }
    // f64 integers up to 2^53 are exact; beyond that the cast is still
    // well-defined and range checking happens in narrow_integer.
    narrow_integer(v as i128, target)
}

fn narrow_integer(wide: i128, target: ScalarType) -> Result<Value, ConversionError> {
    let out_of_range = || ConversionError::OutOfRange {
        value: wide.to_string(),
        target: target.name(),
    };
    Ok(match target {
        ScalarType::I8 => Value::I8(i8::try_from(wide).map_err(|_| out_of_range())?),
        ScalarType::I16 => Value::I16(i16::try_from(wide).map_err(|_| out_of_range())?),
        ScalarType::I32 => Value::I32(i32::try_from(wide).map_err(|_| out_of_range())?),
        ScalarType::I64 => Value::I64(i64::try_from(wide).map_err(|_| out_of_range())?),
        ScalarType::U8 => Value::U8(u8::try_from(wide).map_err(|_| out_of_range())?),
        ScalarType::U16 => Value::U16(u16::try_from(wide).map_err(|_| out_of_range())?),
        ScalarType::U32 => Value::U32(u32::try_from(wide).map_err(|_| out_of_range())?),
        ScalarType::U64 => Value::U64(u64::try_from(wide).map_err(|_| out_of_range())?),
        _ => {
            return Err(ConversionError::Unsupported {
                from: "integer",
                to: target.name(),
            });
        }
    })
}

fn to_float(value: &Value, target: ScalarType) -> Result<Value, ConversionError> {
    let wide = match value {
        Value::F32(v) => f64::from(*v),
        Value::F64(v) => *v,
        Value::String(text) => text.parse::<f64>().map_err(|_| ConversionError::Parse {
            text: text.to_string(),
            target: target.name(),
        })?,
        _ => match value.as_integer() {
            Some(v) => v as f64,
            None => return Err(unsupported(value, target)),
        },
    };
    Ok(match target {
        ScalarType::F32 => Value::F32(wide as f32),
        _ => Value::F64(wide),
    })
}

fn to_bool(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::String(text) => text
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| ConversionError::Parse {
                text: text.to_string(),
                target: "bool",
            }),
        _ => match value.as_integer() {
            Some(0) => Ok(Value::Bool(false)),
            Some(1) => Ok(Value::Bool(true)),
            Some(other) => Err(ConversionError::OutOfRange {
                value: other.to_string(),
                target: "bool",
            }),
            None => Err(unsupported(value, ScalarType::Bool)),
        },
    }
}

fn to_string(value: &Value) -> Result<Value, ConversionError> {
    let text = match value {
        Value::Bool(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        _ => match value.as_integer() {
            Some(v) => v.to_string(),
            None => return Err(unsupported(value, ScalarType::String)),
        },
    };
    Ok(Value::string(text))
}

fn unsupported(value: &Value, target: ScalarType) -> ConversionError {
    ConversionError::Unsupported {
        from: value.type_name(),
        to: target.name(),
    }
}
