//! Per-enum member tables used for parsing enum-typed property values.

use crate::{error::ConversionError, value::Value};

/// Explicit name/ordinal mapping for one enumeration.
///
/// Built once when a type descriptor is assembled and consulted per backfill,
/// replacing any reliance on runtime enum reflection. A member's ordinal is
/// its position in the declared member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTable {
    name: String,
    members: Vec<String>,
}

impl EnumTable {
    pub fn new(
        name: impl Into<String>,
        members: impl IntoIterator<Item: Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Ordinal of the member with exactly this name (no case folding).
    pub fn ordinal_of(&self, member: &str) -> Option<usize> {
        self.members.iter().position(|m| m == member)
    }

    pub fn member_at(&self, ordinal: usize) -> Option<&str> {
        self.members.get(ordinal).map(String::as_str)
    }

    /// Resolve a field value to a member ordinal.
    ///
    /// Strings are matched against member names first, then read as a decimal
    /// ordinal; integers are taken as ordinals directly. Anything else has no
    /// defined conversion to an enum member.
    pub fn resolve(&self, value: &Value) -> Result<usize, ConversionError> {
        if let Value::String(text) = value {
            if let Some(ordinal) = self.ordinal_of(text) {
                return Ok(ordinal);
            }
            if let Ok(ordinal) = text.parse::<i128>() {
                return self.check_ordinal(ordinal);
            }
            return Err(ConversionError::UnknownEnumMember {
                enum_name: self.name.clone(),
                member: text.to_string(),
            });
        }
        match value.as_integer() {
            Some(ordinal) => self.check_ordinal(ordinal),
            None => Err(ConversionError::Unsupported {
                from: value.type_name(),
                to: "enum",
            }),
        }
    }

    fn check_ordinal(&self, ordinal: i128) -> Result<usize, ConversionError> {
        usize::try_from(ordinal)
            .ok()
            .filter(|&o| o < self.members.len())
            .ok_or_else(|| ConversionError::UnknownEnumOrdinal {
                enum_name: self.name.clone(),
                ordinal,
            })
    }
}
