//! Dynamic field values and their declared-type counterparts.

use std::sync::Arc;

use crate::error::ValueTypeError;

/// Value carried by one record field.
///
/// `Null` is the null sentinel and is distinct from an absent column (see
/// [`Record::value`](crate::Record::value)). All other variants hold the raw
/// datum exactly as the tabular source produced it; conversions happen in the
/// engine, never here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Bytes(Arc<[u8]>),
}

/// Declared type of a column, constructor parameter, or property.
///
/// Variant names mirror [`Value`] (declared types ↔ runtime values);
/// nullability is not part of the type, it is a flag on the declaration
/// that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
}

impl ScalarType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

impl Value {
    /// Shared-string constructor, mirroring the `String(Arc<str>)` variant.
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    /// Shared-bytes constructor, mirroring the `Bytes(Arc<[u8]>)` variant.
    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Declared type matching this value's variant; `None` for `Null`.
    pub fn kind(&self) -> Option<ScalarType> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ScalarType::Bool),
            Self::I8(_) => Some(ScalarType::I8),
            Self::I16(_) => Some(ScalarType::I16),
            Self::I32(_) => Some(ScalarType::I32),
            Self::I64(_) => Some(ScalarType::I64),
            Self::U8(_) => Some(ScalarType::U8),
            Self::U16(_) => Some(ScalarType::U16),
            Self::U32(_) => Some(ScalarType::U32),
            Self::U64(_) => Some(ScalarType::U64),
            Self::F32(_) => Some(ScalarType::F32),
            Self::F64(_) => Some(ScalarType::F64),
            Self::String(_) => Some(ScalarType::String),
            Self::Bytes(_) => Some(ScalarType::Bytes),
        }
    }

    /// Widen any integer variant to `i128`; `None` for everything else.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::I8(v) => Some(i128::from(*v)),
            Self::I16(v) => Some(i128::from(*v)),
            Self::I32(v) => Some(i128::from(*v)),
            Self::I64(v) => Some(i128::from(*v)),
            Self::U8(v) => Some(i128::from(*v)),
            Self::U16(v) => Some(i128::from(*v)),
            Self::U32(v) => Some(i128::from(*v)),
            Self::U64(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    /// Lowercase variant name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.kind() {
            None => "null",
            Some(kind) => kind.name(),
        }
    }

    fn type_mismatch(&self, expected: &'static str) -> ValueTypeError {
        ValueTypeError::new(expected, self.type_name())
    }
}

// Exact-variant accessors. `try_*` maps `Null` to `Ok(None)`; `require_*`
// rejects it, for call sites where null is not an acceptable datum.
impl Value {
    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Self::Bool(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("bool")),
        }
    }

    pub fn try_i8(&self) -> Result<Option<i8>, ValueTypeError> {
        match self {
            Self::I8(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("i8")),
        }
    }

    pub fn try_i16(&self) -> Result<Option<i16>, ValueTypeError> {
        match self {
            Self::I16(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("i16")),
        }
    }

    pub fn try_i32(&self) -> Result<Option<i32>, ValueTypeError> {
        match self {
            Self::I32(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("i32")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Self::I64(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("i64")),
        }
    }

    pub fn try_u8(&self) -> Result<Option<u8>, ValueTypeError> {
        match self {
            Self::U8(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("u8")),
        }
    }

    pub fn try_u16(&self) -> Result<Option<u16>, ValueTypeError> {
        match self {
            Self::U16(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("u16")),
        }
    }

    pub fn try_u32(&self) -> Result<Option<u32>, ValueTypeError> {
        match self {
            Self::U32(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("u32")),
        }
    }

    pub fn try_u64(&self) -> Result<Option<u64>, ValueTypeError> {
        match self {
            Self::U64(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("u64")),
        }
    }

    pub fn try_f32(&self) -> Result<Option<f32>, ValueTypeError> {
        match self {
            Self::F32(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("f32")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Self::F64(v) => Ok(Some(*v)),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("f64")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Self::String(v) => Ok(Some(v.as_ref())),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("string")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Self::Bytes(v) => Ok(Some(v.as_ref())),
            Self::Null => Ok(None),
            _ => Err(self.type_mismatch("bytes")),
        }
    }

    pub fn require_bool(&self) -> Result<bool, ValueTypeError> {
        self.try_bool()?.ok_or_else(|| self.type_mismatch("bool"))
    }

    pub fn require_i8(&self) -> Result<i8, ValueTypeError> {
        self.try_i8()?.ok_or_else(|| self.type_mismatch("i8"))
    }

    pub fn require_i16(&self) -> Result<i16, ValueTypeError> {
        self.try_i16()?.ok_or_else(|| self.type_mismatch("i16"))
    }

    pub fn require_i32(&self) -> Result<i32, ValueTypeError> {
        self.try_i32()?.ok_or_else(|| self.type_mismatch("i32"))
    }

    pub fn require_i64(&self) -> Result<i64, ValueTypeError> {
        self.try_i64()?.ok_or_else(|| self.type_mismatch("i64"))
    }

    pub fn require_u8(&self) -> Result<u8, ValueTypeError> {
        self.try_u8()?.ok_or_else(|| self.type_mismatch("u8"))
    }

    pub fn require_u16(&self) -> Result<u16, ValueTypeError> {
        self.try_u16()?.ok_or_else(|| self.type_mismatch("u16"))
    }

    pub fn require_u32(&self) -> Result<u32, ValueTypeError> {
        self.try_u32()?.ok_or_else(|| self.type_mismatch("u32"))
    }

    pub fn require_u64(&self) -> Result<u64, ValueTypeError> {
        self.try_u64()?.ok_or_else(|| self.type_mismatch("u64"))
    }

    pub fn require_f32(&self) -> Result<f32, ValueTypeError> {
        self.try_f32()?.ok_or_else(|| self.type_mismatch("f32"))
    }

    pub fn require_f64(&self) -> Result<f64, ValueTypeError> {
        self.try_f64()?.ok_or_else(|| self.type_mismatch("f64"))
    }

    pub fn require_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Self::String(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("string")),
        }
    }

    pub fn require_bytes(&self) -> Result<&[u8], ValueTypeError> {
        match self {
            Self::Bytes(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("bytes")),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        })*
    };
}

impl_from_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Arc::from(v))
    }
}

/// `None` becomes the null sentinel; `Some` converts the inner value.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            None => Self::Null,
            Some(inner) => inner.into(),
        }
    }
}
