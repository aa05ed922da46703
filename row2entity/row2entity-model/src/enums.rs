//! Domain enumerations for project items.

use std::{
    fmt::{Display, Formatter, Result},
    sync::{Arc, LazyLock},
};

use row2entity_core::EnumTable;

/// Type of data to be captured by a project item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ItemDataType {
    /// Integer value, no decimal places.
    #[default]
    Integer,
    /// Decimal value; decimal places determined by precision.
    Float,
    /// Decimal value displayed with a currency sign.
    Currency,
    /// Decimal value displayed with a percentage sign.
    Percent,
    /// Date value.
    Date,
    /// Date value displayed as "yyyy-MM".
    YearMonth,
    /// List of keywords taken from a pool, filtered by knowledge category.
    KeywordList,
    /// Localized string value.
    String,
    /// List of localized strings.
    MultiString,
    /// Localized string stored in Markdown format.
    Markdown,
}

impl ItemDataType {
    /// Member names in declaration (ordinal) order.
    pub const NAMES: [&'static str; 10] = [
        "Integer",
        "Float",
        "Currency",
        "Percent",
        "Date",
        "YearMonth",
        "KeywordList",
        "String",
        "MultiString",
        "Markdown",
    ];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Whether values of this data type carry a decimal precision.
    pub fn supports_precision(self) -> bool {
        matches!(self, Self::Float | Self::Currency | Self::Percent)
    }

    /// Whether values of this data type carry a knowledge category.
    pub fn supports_category(self) -> bool {
        matches!(self, Self::KeywordList)
    }

    /// Shared name/ordinal table for descriptor registration.
    pub fn enum_table() -> Arc<EnumTable> {
        static TABLE: LazyLock<Arc<EnumTable>> =
            LazyLock::new(|| Arc::new(EnumTable::new("ItemDataType", ItemDataType::NAMES)));
        Arc::clone(&TABLE)
    }
}

impl Display for ItemDataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Error converting a raw value into a domain enumeration member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{enum_name} has no member with value {value}")]
pub struct UnknownEnumValue {
    pub enum_name: &'static str,
    pub value: u8,
}

impl TryFrom<u8> for ItemDataType {
    type Error = UnknownEnumValue;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Integer,
            1 => Self::Float,
            2 => Self::Currency,
            3 => Self::Percent,
            4 => Self::Date,
            5 => Self::YearMonth,
            6 => Self::KeywordList,
            7 => Self::String,
            8 => Self::MultiString,
            9 => Self::Markdown,
            _ => {
                return Err(UnknownEnumValue {
                    enum_name: "ItemDataType",
                    value,
                });
            }
        })
    }
}

/// Keyword list category, used to filter the pool of keywords offered for a
/// [`KeywordList`](ItemDataType::KeywordList) project item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KnowledgeCategory {
    /// Computer languages used.
    ComputerLanguage,
    /// Frameworks and runtimes coded for.
    FrameworkRuntime,
    /// Infrastructural components used for execution.
    Infrastructure,
    /// Operating systems worked with.
    OperatingSystem,
    /// Products and tools used.
    ProductTool,
}

impl KnowledgeCategory {
    /// Member names in declaration (ordinal) order.
    pub const NAMES: [&'static str; 5] = [
        "ComputerLanguage",
        "FrameworkRuntime",
        "Infrastructure",
        "OperatingSystem",
        "ProductTool",
    ];

    pub fn as_str(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Shared name/ordinal table for descriptor registration.
    pub fn enum_table() -> Arc<EnumTable> {
        static TABLE: LazyLock<Arc<EnumTable>> = LazyLock::new(|| {
            Arc::new(EnumTable::new("KnowledgeCategory", KnowledgeCategory::NAMES))
        });
        Arc::clone(&TABLE)
    }
}

impl Display for KnowledgeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for KnowledgeCategory {
    type Error = UnknownEnumValue;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::ComputerLanguage,
            1 => Self::FrameworkRuntime,
            2 => Self::Infrastructure,
            3 => Self::OperatingSystem,
            4 => Self::ProductTool,
            _ => {
                return Err(UnknownEnumValue {
                    enum_name: "KnowledgeCategory",
                    value,
                });
            }
        })
    }
}
