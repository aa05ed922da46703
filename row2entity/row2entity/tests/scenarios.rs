//! End-to-end scenarios over the sample project-item domain.

use pretty_assertions::assert_eq;
use row2entity::{ConstructorFactory, ConstructorPolicy, EntityFactory, FactoryError};
use row2entity_core::{Column, Columns, ScalarType, Table, Value};
use row2entity_model::{ItemDataType, KnowledgeCategory, ProjectItem, ProjectItemError};

fn item_columns() -> Columns {
    Columns::new(vec![
        Column::new("Id", ScalarType::I32),
        Column::new("IsRequired", ScalarType::Bool),
        Column::new("DataType", ScalarType::U8),
        Column::new("Precision", ScalarType::U8),
        Column::new("KnowledgeCategory", ScalarType::U8),
    ])
    .unwrap()
}

fn item_row(
    id: i32,
    is_required: bool,
    data_type: ItemDataType,
    precision: Option<u8>,
    category: Option<KnowledgeCategory>,
) -> Vec<Value> {
    vec![
        Value::I32(id),
        Value::Bool(is_required),
        Value::U8(data_type as u8),
        precision.into(),
        category.map(|c| c as u8).into(),
    ]
}

fn factory(policy: ConstructorPolicy) -> EntityFactory<ProjectItem> {
    ConstructorFactory::new(policy).entity_factory::<ProjectItem>()
}

fn table_with(rows: Vec<Vec<Value>>) -> Table {
    let mut table = Table::new(item_columns());
    for row in rows {
        table.push_row(row).unwrap();
    }
    table
}

#[test]
fn currency_row_resolves_to_precision_constructor() {
    let table = table_with(vec![item_row(1, true, ItemDataType::Currency, Some(2), None)]);
    let factory = factory(ConstructorPolicy::MostSpecific);

    let constructor = factory.resolve_constructor(&table.records()[0]).unwrap();
    assert_eq!(constructor.arity(), 4);
    assert_eq!(constructor.params()[3].name(), "precision");

    let item = factory.create(&table.records()[0]).unwrap();
    assert_eq!(
        item,
        ProjectItem::with_precision(1, true, ItemDataType::Currency, 2).unwrap()
    );
}

#[test]
fn keyword_list_row_resolves_to_five_parameter_constructor() {
    let table = table_with(vec![item_row(
        2,
        true,
        ItemDataType::KeywordList,
        None,
        Some(KnowledgeCategory::ComputerLanguage),
    )]);
    let factory = factory(ConstructorPolicy::MostSpecific);

    // The nullable precision parameter lets the 5-parameter candidate qualify
    // despite the null Precision field.
    let constructor = factory.resolve_constructor(&table.records()[0]).unwrap();
    assert_eq!(constructor.arity(), 5);

    let item = factory.create(&table.records()[0]).unwrap();
    assert_eq!(
        item,
        ProjectItem::with_precision_and_category(
            2,
            true,
            ItemDataType::KeywordList,
            None,
            KnowledgeCategory::ComputerLanguage,
        )
        .unwrap()
    );
}

#[test]
fn string_row_resolves_to_three_parameter_constructor() {
    let table = table_with(vec![item_row(3, true, ItemDataType::String, None, None)]);
    let factory = factory(ConstructorPolicy::MostSpecific);

    let constructor = factory.resolve_constructor(&table.records()[0]).unwrap();
    assert_eq!(constructor.arity(), 3);

    let item = factory.create(&table.records()[0]).unwrap();
    assert_eq!(item, ProjectItem::new(3, true, ItemDataType::String).unwrap());
}

#[test]
fn prefer_parameterless_shortcuts_and_backfills_everything() {
    let table = table_with(vec![item_row(
        1,
        true,
        ItemDataType::KeywordList,
        None,
        Some(KnowledgeCategory::ComputerLanguage),
    )]);
    let factory = factory(ConstructorPolicy::PreferParameterless);

    let constructor = factory.resolve_constructor(&table.records()[0]).unwrap();
    assert_eq!(constructor.arity(), 0);

    let item = factory.create(&table.records()[0]).unwrap();
    assert_eq!(item.id(), 1);
    assert!(item.is_required());
    assert_eq!(item.data_type(), ItemDataType::KeywordList);
    assert_eq!(item.precision(), None);
    assert_eq!(
        item.knowledge_category(),
        Some(KnowledgeCategory::ComputerLanguage)
    );
}

#[test]
fn domain_validation_error_reaches_the_caller_unwrapped() {
    // A precision supplied for a data type that forbids it: the 4-parameter
    // constructor is selected and its own validation rejects the combination.
    let table = table_with(vec![item_row(1, true, ItemDataType::Integer, Some(2), None)]);
    let factory = factory(ConstructorPolicy::MostSpecific);

    let err = factory.create(&table.records()[0]).unwrap_err();
    let expected = ProjectItemError::PrecisionNotSupported {
        data_type: ItemDataType::Integer,
    };
    assert_eq!(err.to_string(), expected.to_string());
    match err {
        FactoryError::Construction(cause) => {
            assert_eq!(cause.downcast_ref::<ProjectItemError>(), Some(&expected));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn category_backfills_from_member_name_and_ordinal_string() {
    let factory = factory(ConstructorPolicy::PreferParameterless);

    let mut table = Table::new(item_columns());
    table
        .push_row(vec![
            Value::I32(8),
            Value::Bool(false),
            Value::U8(ItemDataType::KeywordList as u8),
            Value::Null,
            Value::string("OperatingSystem"),
        ])
        .unwrap();
    table
        .push_row(vec![
            Value::I32(9),
            Value::Bool(false),
            Value::U8(ItemDataType::KeywordList as u8),
            Value::Null,
            Value::string("4"),
        ])
        .unwrap();

    let items = factory.materialize_all(table.records()).unwrap();
    assert_eq!(
        items[0].knowledge_category(),
        Some(KnowledgeCategory::OperatingSystem)
    );
    assert_eq!(
        items[1].knowledge_category(),
        Some(KnowledgeCategory::ProductTool)
    );
}

#[test]
fn batch_preserves_input_order() {
    let table = table_with(vec![
        item_row(1, true, ItemDataType::Currency, Some(2), None),
        item_row(
            2,
            true,
            ItemDataType::KeywordList,
            None,
            Some(KnowledgeCategory::ComputerLanguage),
        ),
        item_row(3, false, ItemDataType::String, None, None),
    ]);
    let factory = factory(ConstructorPolicy::MostSpecific);

    let items = factory.materialize_all(table.records()).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items.iter().map(ProjectItem::id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn batch_aborts_on_first_failure() {
    let table = table_with(vec![
        item_row(1, true, ItemDataType::String, None, None),
        // Invalid: precision for a non-precision data type.
        item_row(2, true, ItemDataType::Integer, Some(2), None),
        item_row(3, true, ItemDataType::String, None, None),
    ]);
    let factory = factory(ConstructorPolicy::MostSpecific);

    let err = factory.materialize_all(table.records()).unwrap_err();
    assert!(matches!(err, FactoryError::Construction(_)));
}

#[test]
fn materializing_an_entity_read_back_as_a_record_round_trips() {
    let original =
        ProjectItem::with_precision(11, true, ItemDataType::Percent, 3).unwrap();

    let table = table_with(vec![item_row(
        original.id(),
        original.is_required(),
        original.data_type(),
        original.precision(),
        original.knowledge_category(),
    )]);
    let factory = factory(ConstructorPolicy::MostSpecific);

    let rebuilt = factory.create(&table.records()[0]).unwrap();
    assert_eq!(rebuilt, original);
}
