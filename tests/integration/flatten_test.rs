//! Row window integration tests.
//!
//! Covers windowing, traversal direction, truncation, and the full
//! per-type rendering path through the dispatcher.

use rowscope::config::InspectorConfig;
use rowscope::inspect::Inspector;
use rowscope::render::{GenericValue, NativeFieldType, TRUNCATION_MARKER};
use rowscope::store::{MockEngine, MockRow, MockTable, ScalarValue};

fn numbers_table(rows: i64) -> MockTable {
    let mut table = MockTable::new("numbers").with_column("n", NativeFieldType::Integer);
    for n in 0..rows {
        table = table.with_row(MockRow::new(1000 + n).int(n));
    }
    table
}

fn inspector_with(table: MockTable, config: InspectorConfig) -> Inspector {
    Inspector::new(Box::new(MockEngine::new().with_table(table)), config)
}

#[tokio::test]
async fn test_limit_caps_emitted_rows() {
    let inspector = inspector_with(numbers_table(10), InspectorConfig::default().with_limit(3));
    let response = inspector.execute_query("db", "SELECT * FROM numbers").await;

    let values = response.values.unwrap();
    // Three data rows plus one truncation marker for the single column.
    assert_eq!(values.len(), 4);
    assert_eq!(values[..3], [
        GenericValue::Int(0),
        GenericValue::Int(1),
        GenericValue::Int(2),
    ]);
    assert_eq!(values[3], GenericValue::text(TRUNCATION_MARKER));
}

#[tokio::test]
async fn test_no_truncation_when_limit_covers_table() {
    let inspector = inspector_with(numbers_table(3), InspectorConfig::default().with_limit(3));
    let response = inspector.execute_query("db", "SELECT * FROM numbers").await;

    let values = response.values.unwrap();
    assert_eq!(values.len(), 3);
    assert!(values
        .iter()
        .all(|v| *v != GenericValue::text(TRUNCATION_MARKER)));
}

#[tokio::test]
async fn test_descending_configuration_reverses_window() {
    let inspector = inspector_with(
        numbers_table(5),
        InspectorConfig::default().with_limit(2).with_ascending(false),
    );
    let response = inspector.execute_query("db", "SELECT * FROM numbers").await;

    let values = response.values.unwrap();
    assert_eq!(values[..2], [GenericValue::Int(4), GenericValue::Int(3)]);
}

#[tokio::test]
async fn test_truncation_row_is_not_index_prefixed() {
    let inspector = inspector_with(numbers_table(5), InspectorConfig::default().with_limit(2));
    // Bare table name: index column requested by the engine.
    let response = inspector.execute_query("db", "numbers").await;

    let names = response.column_names.unwrap();
    assert_eq!(names, vec!["<index>".to_string(), "n".to_string()]);

    let values = response.values.unwrap();
    // Two rows of (index, n), then exactly one marker per data column.
    assert_eq!(values.len(), 2 * 2 + 1);
    assert_eq!(values[4], GenericValue::text(TRUNCATION_MARKER));
}

#[tokio::test]
async fn test_every_column_type_renders() {
    let table = MockTable::new("specimens")
        .with_column("count", NativeFieldType::Integer)
        .with_column("alive", NativeFieldType::Boolean)
        .with_column("label", NativeFieldType::String)
        .with_column("blob", NativeFieldType::Binary)
        .with_column("ratio", NativeFieldType::Float)
        .with_column("weight", NativeFieldType::Double)
        .with_column("seen_at", NativeFieldType::Date)
        .with_column("owner", NativeFieldType::Object)
        .with_column("friends", NativeFieldType::List)
        .with_column("scores", NativeFieldType::IntegerList)
        .with_row(
            MockRow::new(1)
                .int(3)
                .boolean(true)
                .string("alpha")
                .bytes(vec![0xff])
                .float(f32::NAN)
                .double(0.25)
                .date(0)
                .link(8)
                .link_list("specimens", vec![2, 3])
                .value_list(vec![ScalarValue::Int(9), ScalarValue::Int(8)]),
        );

    let inspector = inspector_with(table, InspectorConfig::default());
    let response = inspector
        .execute_query("db", "SELECT * FROM specimens")
        .await;

    let values = response.values.unwrap();
    assert_eq!(values.len(), 10);
    assert_eq!(values[0], GenericValue::Int(3));
    assert_eq!(values[1], GenericValue::Bool(true));
    assert_eq!(values[2], GenericValue::text("alpha"));
    assert_eq!(values[3], GenericValue::Bytes(vec![0xff]));
    assert_eq!(values[4], GenericValue::text("NaN"));
    assert_eq!(values[5], GenericValue::Float(0.25));
    assert_eq!(
        values[6],
        GenericValue::text("January 1, 1970 00:00:00 UTC (0)")
    );
    assert_eq!(values[7], GenericValue::Link(8));
    assert_eq!(values[8], GenericValue::text("specimens{2,3}"));
    assert_eq!(values[9], GenericValue::text("INTEGER_LIST{9,8}"));
}

#[tokio::test]
async fn test_nullable_cells_hit_the_sentinel_on_the_wire() {
    let table = MockTable::new("sparse")
        .with_column("label", NativeFieldType::String)
        .with_column("owner", NativeFieldType::Object)
        .with_column("tags", NativeFieldType::StringList)
        .with_row(MockRow::new(1).null().null_link().null_link());

    let inspector = inspector_with(table, InspectorConfig::default());
    let response = inspector.execute_query("db", "SELECT * FROM sparse").await;

    assert_eq!(
        serde_json::to_string(&response.values.unwrap()).unwrap(),
        r#"["[null]","[null]","[null]"]"#
    );
}

#[tokio::test]
async fn test_empty_collections_are_not_null() {
    let table = MockTable::new("loners")
        .with_column("friends", NativeFieldType::List)
        .with_column("scores", NativeFieldType::DoubleList)
        .with_row(MockRow::new(1).link_list("loners", vec![]).value_list(vec![]));

    let inspector = inspector_with(table, InspectorConfig::default());
    let response = inspector.execute_query("db", "SELECT * FROM loners").await;

    assert_eq!(
        response.values,
        Some(vec![
            GenericValue::text("loners{}"),
            GenericValue::text("DOUBLE_LIST{}"),
        ])
    );
}
