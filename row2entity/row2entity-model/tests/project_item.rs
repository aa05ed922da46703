use pretty_assertions::assert_eq;
use row2entity_core::Describe;
use row2entity_model::{ItemDataType, KnowledgeCategory, ProjectItem, ProjectItemError};

#[test]
fn new_accepts_generic_data_types() {
    for data_type in [
        ItemDataType::Integer,
        ItemDataType::Date,
        ItemDataType::YearMonth,
        ItemDataType::String,
        ItemDataType::MultiString,
        ItemDataType::Markdown,
    ] {
        let item = ProjectItem::new(1, true, data_type).unwrap();
        assert_eq!(item.data_type(), data_type);
        assert_eq!(item.precision(), None);
        assert_eq!(item.knowledge_category(), None);
    }
}

#[test]
fn new_rejects_precision_data_types() {
    for data_type in [
        ItemDataType::Float,
        ItemDataType::Currency,
        ItemDataType::Percent,
    ] {
        let err = ProjectItem::new(1, true, data_type).unwrap_err();
        assert_eq!(err, ProjectItemError::PrecisionRequired { data_type });
    }
}

#[test]
fn new_rejects_keyword_list() {
    let err = ProjectItem::new(1, true, ItemDataType::KeywordList).unwrap_err();
    assert_eq!(
        err,
        ProjectItemError::CategoryRequired {
            data_type: ItemDataType::KeywordList
        }
    );
}

#[test]
fn with_precision_requires_precision_data_type() {
    let item = ProjectItem::with_precision(2, false, ItemDataType::Currency, 2).unwrap();
    assert_eq!(item.precision(), Some(2));
    assert!(item.is_precision_type());

    for data_type in [
        ItemDataType::Integer,
        ItemDataType::KeywordList,
        ItemDataType::String,
    ] {
        let err = ProjectItem::with_precision(2, false, data_type, 2).unwrap_err();
        assert_eq!(err, ProjectItemError::PrecisionNotSupported { data_type });
    }
}

#[test]
fn with_category_requires_keyword_list() {
    let item = ProjectItem::with_category(
        3,
        true,
        ItemDataType::KeywordList,
        KnowledgeCategory::Infrastructure,
    )
    .unwrap();
    assert_eq!(
        item.knowledge_category(),
        Some(KnowledgeCategory::Infrastructure)
    );
    assert!(item.is_category_type());

    for data_type in [ItemDataType::Integer, ItemDataType::Float] {
        let err =
            ProjectItem::with_category(3, true, data_type, KnowledgeCategory::Infrastructure)
                .unwrap_err();
        assert_eq!(err, ProjectItemError::CategoryNotSupported { data_type });
    }
}

#[test]
fn with_precision_and_category_applies_optional_precision() {
    let without = ProjectItem::with_precision_and_category(
        4,
        true,
        ItemDataType::KeywordList,
        None,
        KnowledgeCategory::ComputerLanguage,
    )
    .unwrap();
    assert_eq!(without.precision(), None);

    let with = ProjectItem::with_precision_and_category(
        4,
        true,
        ItemDataType::KeywordList,
        Some(7),
        KnowledgeCategory::ComputerLanguage,
    )
    .unwrap();
    assert_eq!(with.precision(), Some(7));
    assert_eq!(
        with.knowledge_category(),
        Some(KnowledgeCategory::ComputerLanguage)
    );
}

#[test]
fn with_precision_and_category_still_validates_data_type() {
    let err = ProjectItem::with_precision_and_category(
        4,
        true,
        ItemDataType::Integer,
        Some(7),
        KnowledgeCategory::ComputerLanguage,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ProjectItemError::CategoryNotSupported {
            data_type: ItemDataType::Integer
        }
    );
}

#[test]
fn display_renders_summary_per_data_type() {
    let currency = ProjectItem::with_precision(1, true, ItemDataType::Currency, 2).unwrap();
    assert_eq!(currency.to_string(), "1, required, Currency, precision = 2");

    let keywords = ProjectItem::with_category(
        2,
        false,
        ItemDataType::KeywordList,
        KnowledgeCategory::ProductTool,
    )
    .unwrap();
    assert_eq!(
        keywords.to_string(),
        "2, not required, KeywordList, category = ProductTool"
    );

    let plain = ProjectItem::new(3, true, ItemDataType::String).unwrap();
    assert_eq!(plain.to_string(), "3, required, String");
}

#[test]
fn enum_round_trips_between_name_and_ordinal() {
    assert_eq!(ItemDataType::Currency.as_str(), "Currency");
    assert_eq!(ItemDataType::try_from(2).unwrap(), ItemDataType::Currency);
    assert!(ItemDataType::try_from(10).is_err());

    assert_eq!(
        KnowledgeCategory::try_from(0).unwrap(),
        KnowledgeCategory::ComputerLanguage
    );
    assert!(KnowledgeCategory::try_from(5).is_err());
}

#[test]
fn enum_tables_match_declared_members() {
    let table = ItemDataType::enum_table();
    assert_eq!(table.members().len(), 10);
    assert_eq!(table.ordinal_of("KeywordList"), Some(6));

    let table = KnowledgeCategory::enum_table();
    assert_eq!(table.member_at(4), Some("ProductTool"));
}

#[test]
fn descriptor_registers_full_shape() {
    let descriptor = ProjectItem::descriptor();
    assert_eq!(descriptor.entity_name(), "ProjectItem");

    let mut arities: Vec<usize> = descriptor.constructors().iter().map(|c| c.arity()).collect();
    arities.sort_unstable();
    assert_eq!(arities, vec![0, 3, 4, 4, 5]);

    assert!(descriptor.property("knowledgecategory").unwrap().is_nullable());
    assert!(descriptor
        .property("KnowledgeCategory")
        .unwrap()
        .enum_table()
        .is_some());
    assert!(!descriptor.property("IsPrecisionType").unwrap().is_settable());
    assert!(descriptor.property("Test").unwrap().is_settable());
}

#[test]
fn descriptor_is_cached_across_accesses() {
    let first = ProjectItem::descriptor() as *const _;
    let second = ProjectItem::descriptor() as *const _;
    assert_eq!(first, second);
}
