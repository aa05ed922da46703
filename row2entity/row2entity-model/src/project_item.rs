//! Project item entity and its registered type descriptor.

use std::{
    fmt::{Display, Formatter},
    sync::LazyLock,
};

use row2entity_core::{
    ConstructError, ConstructorSpec, ConversionError, Describe, ParamSpec, PropertySpec,
    ScalarType, TypeDescriptor, Value,
};

use crate::enums::{ItemDataType, KnowledgeCategory};

/// Project grouping item, a container for a single piece of information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectItem {
    id: i32,
    is_required: bool,
    data_type: ItemDataType,
    precision: Option<u8>,
    knowledge_category: Option<KnowledgeCategory>,
    test: Option<i32>,
}

/// Domain validation errors raised by [`ProjectItem`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectItemError {
    /// A decimal number data type was used without a precision.
    #[error(
        "a precision must be provided for decimal number data types; the current data type is \"{data_type}\""
    )]
    PrecisionRequired { data_type: ItemDataType },

    /// The keyword list data type was used without a knowledge category.
    #[error(
        "a knowledge category must be provided for the keyword list data type; the current data type is \"{data_type}\""
    )]
    CategoryRequired { data_type: ItemDataType },

    /// A precision was supplied for a data type that forbids it.
    #[error(
        "a precision may only be provided for decimal number data types; the current data type is \"{data_type}\""
    )]
    PrecisionNotSupported { data_type: ItemDataType },

    /// A knowledge category was supplied for a data type that forbids it.
    #[error(
        "a knowledge category may only be provided for the keyword list data type; the current data type is \"{data_type}\""
    )]
    CategoryNotSupported { data_type: ItemDataType },
}

impl ProjectItem {
    /// Item for generic data types (no precision, no category).
    pub fn new(
        id: i32,
        is_required: bool,
        data_type: ItemDataType,
    ) -> Result<Self, ProjectItemError> {
        if data_type.supports_precision() {
            return Err(ProjectItemError::PrecisionRequired { data_type });
        }
        if data_type.supports_category() {
            return Err(ProjectItemError::CategoryRequired { data_type });
        }
        Ok(Self {
            id,
            is_required,
            data_type,
            ..Self::default()
        })
    }

    /// Item for decimal number data types (Float, Currency, Percent).
    pub fn with_precision(
        id: i32,
        is_required: bool,
        data_type: ItemDataType,
        precision: u8,
    ) -> Result<Self, ProjectItemError> {
        if !data_type.supports_precision() {
            return Err(ProjectItemError::PrecisionNotSupported { data_type });
        }
        Ok(Self {
            id,
            is_required,
            data_type,
            precision: Some(precision),
            ..Self::default()
        })
    }

    /// Item for the keyword list data type.
    pub fn with_category(
        id: i32,
        is_required: bool,
        data_type: ItemDataType,
        knowledge_category: KnowledgeCategory,
    ) -> Result<Self, ProjectItemError> {
        if !data_type.supports_category() {
            return Err(ProjectItemError::CategoryNotSupported { data_type });
        }
        Ok(Self {
            id,
            is_required,
            data_type,
            knowledge_category: Some(knowledge_category),
            ..Self::default()
        })
    }

    /// Keyword list item with an optional precision applied after category
    /// validation.
    pub fn with_precision_and_category(
        id: i32,
        is_required: bool,
        data_type: ItemDataType,
        precision: Option<u8>,
        knowledge_category: KnowledgeCategory,
    ) -> Result<Self, ProjectItemError> {
        let mut item = Self::with_category(id, is_required, data_type, knowledge_category)?;
        if precision.is_some() {
            item.precision = precision;
        }
        Ok(item)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn data_type(&self) -> ItemDataType {
        self.data_type
    }

    pub fn precision(&self) -> Option<u8> {
        self.precision
    }

    pub fn knowledge_category(&self) -> Option<KnowledgeCategory> {
        self.knowledge_category
    }

    /// Only meaningful in tests; carried to mirror the stored schema.
    pub fn test(&self) -> Option<i32> {
        self.test
    }

    /// Whether this item's data type supports decimal places.
    pub fn is_precision_type(&self) -> bool {
        self.data_type.supports_precision()
    }

    /// Whether this item's data type supports a knowledge category.
    pub fn is_category_type(&self) -> bool {
        self.data_type.supports_category()
    }
}

impl Display for ProjectItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}required, {}",
            self.id,
            if self.is_required { "" } else { "not " },
            self.data_type
        )?;
        if self.is_precision_type() {
            if let Some(precision) = self.precision {
                write!(f, ", precision = {precision}")?;
            }
        } else if self.is_category_type() {
            if let Some(category) = self.knowledge_category {
                write!(f, ", category = {category}")?;
            }
        }
        Ok(())
    }
}

fn arity_error(expected: usize, actual: usize) -> ConstructError {
    format!("constructor expected {expected} arguments, got {actual}").into()
}

fn data_type_arg(value: &Value) -> Result<ItemDataType, ConstructError> {
    Ok(ItemDataType::try_from(value.require_u8()?)?)
}

fn category_arg(value: &Value) -> Result<KnowledgeCategory, ConstructError> {
    Ok(KnowledgeCategory::try_from(value.require_u8()?)?)
}

fn construct_default(_args: &[Value]) -> Result<ProjectItem, ConstructError> {
    Ok(ProjectItem::default())
}

fn construct_basic(args: &[Value]) -> Result<ProjectItem, ConstructError> {
    let [id, is_required, data_type] = args else {
        return Err(arity_error(3, args.len()));
    };
    Ok(ProjectItem::new(
        id.require_i32()?,
        is_required.require_bool()?,
        data_type_arg(data_type)?,
    )?)
}

fn construct_with_precision(args: &[Value]) -> Result<ProjectItem, ConstructError> {
    let [id, is_required, data_type, precision] = args else {
        return Err(arity_error(4, args.len()));
    };
    Ok(ProjectItem::with_precision(
        id.require_i32()?,
        is_required.require_bool()?,
        data_type_arg(data_type)?,
        precision.require_u8()?,
    )?)
}

fn construct_with_category(args: &[Value]) -> Result<ProjectItem, ConstructError> {
    let [id, is_required, data_type, category] = args else {
        return Err(arity_error(4, args.len()));
    };
    Ok(ProjectItem::with_category(
        id.require_i32()?,
        is_required.require_bool()?,
        data_type_arg(data_type)?,
        category_arg(category)?,
    )?)
}

fn construct_with_precision_and_category(args: &[Value]) -> Result<ProjectItem, ConstructError> {
    let [id, is_required, data_type, precision, category] = args else {
        return Err(arity_error(5, args.len()));
    };
    Ok(ProjectItem::with_precision_and_category(
        id.require_i32()?,
        is_required.require_bool()?,
        data_type_arg(data_type)?,
        precision.try_u8()?,
        category_arg(category)?,
    )?)
}

fn set_id(item: &mut ProjectItem, value: &Value) -> Result<(), ConversionError> {
    item.id = value.require_i32()?;
    Ok(())
}

fn set_is_required(item: &mut ProjectItem, value: &Value) -> Result<(), ConversionError> {
    item.is_required = value.require_bool()?;
    Ok(())
}

fn set_data_type(item: &mut ProjectItem, value: &Value) -> Result<(), ConversionError> {
    let raw = value.require_u8()?;
    item.data_type =
        ItemDataType::try_from(raw).map_err(|_| ConversionError::UnknownEnumOrdinal {
            enum_name: "ItemDataType".to_string(),
            ordinal: i128::from(raw),
        })?;
    Ok(())
}

fn set_precision(item: &mut ProjectItem, value: &Value) -> Result<(), ConversionError> {
    item.precision = value.try_u8()?;
    Ok(())
}

fn set_knowledge_category(item: &mut ProjectItem, value: &Value) -> Result<(), ConversionError> {
    item.knowledge_category = match value.try_u8()? {
        None => None,
        Some(raw) => Some(KnowledgeCategory::try_from(raw).map_err(|_| {
            ConversionError::UnknownEnumOrdinal {
                enum_name: "KnowledgeCategory".to_string(),
                ordinal: i128::from(raw),
            }
        })?),
    };
    Ok(())
}

fn set_test(item: &mut ProjectItem, value: &Value) -> Result<(), ConversionError> {
    item.test = value.try_i32()?;
    Ok(())
}

fn build_descriptor() -> TypeDescriptor<ProjectItem> {
    TypeDescriptor::builder("ProjectItem")
        .constructor(ConstructorSpec::new(Vec::new(), construct_default))
        .constructor(ConstructorSpec::new(
            vec![
                ParamSpec::new("id", ScalarType::I32),
                ParamSpec::new("isRequired", ScalarType::Bool),
                ParamSpec::new("dataType", ScalarType::U8),
            ],
            construct_basic,
        ))
        .constructor(ConstructorSpec::new(
            vec![
                ParamSpec::new("id", ScalarType::I32),
                ParamSpec::new("isRequired", ScalarType::Bool),
                ParamSpec::new("dataType", ScalarType::U8),
                ParamSpec::new("precision", ScalarType::U8),
            ],
            construct_with_precision,
        ))
        .constructor(ConstructorSpec::new(
            vec![
                ParamSpec::new("id", ScalarType::I32),
                ParamSpec::new("isRequired", ScalarType::Bool),
                ParamSpec::new("dataType", ScalarType::U8),
                ParamSpec::new("knowledgeCategory", ScalarType::U8),
            ],
            construct_with_category,
        ))
        .constructor(ConstructorSpec::new(
            vec![
                ParamSpec::new("id", ScalarType::I32),
                ParamSpec::new("isRequired", ScalarType::Bool),
                ParamSpec::new("dataType", ScalarType::U8),
                ParamSpec::nullable("precision", ScalarType::U8),
                ParamSpec::new("knowledgeCategory", ScalarType::U8),
            ],
            construct_with_precision_and_category,
        ))
        .property(PropertySpec::writable("Id", ScalarType::I32, set_id))
        .property(PropertySpec::writable(
            "IsRequired",
            ScalarType::Bool,
            set_is_required,
        ))
        .property(PropertySpec::writable(
            "DataType",
            ScalarType::U8,
            set_data_type,
        ))
        .property(PropertySpec::writable_nullable(
            "Precision",
            ScalarType::U8,
            set_precision,
        ))
        .property(PropertySpec::writable_enum(
            "KnowledgeCategory",
            ScalarType::U8,
            KnowledgeCategory::enum_table(),
            set_knowledge_category,
        ))
        .property(PropertySpec::writable_nullable(
            "Test",
            ScalarType::I32,
            set_test,
        ))
        .property(PropertySpec::read_only(
            "IsPrecisionType",
            ScalarType::Bool,
        ))
        .property(PropertySpec::read_only("IsCategoryType", ScalarType::Bool))
        .build()
        .expect("ProjectItem descriptor is statically valid")
}

impl Describe for ProjectItem {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: LazyLock<TypeDescriptor<ProjectItem>> = LazyLock::new(build_descriptor);
        &DESCRIPTOR
    }
}
