//! Execute-query integration tests.
//!
//! Exercises the four outcome shapes and the error-as-data contract end
//! to end, including the JSON the client actually receives.

use rowscope::config::InspectorConfig;
use rowscope::inspect::Inspector;
use rowscope::render::{GenericValue, NativeFieldType};
use rowscope::store::{FailingEngine, MockEngine, MockRow, MockTable};

/// Two-column users table from the rendering contract: rows (1, "a") and
/// (2, NULL).
fn users_table() -> MockTable {
    MockTable::new("users")
        .with_column("id", NativeFieldType::Integer)
        .with_column("name", NativeFieldType::String)
        .with_row(MockRow::new(1).int(1).string("a"))
        .with_row(MockRow::new(2).int(2).null())
}

fn users_inspector() -> Inspector {
    let engine = MockEngine::new()
        .with_table(users_table())
        .with_insert_id(99)
        .with_modified_count(4);
    Inspector::new(Box::new(engine), InspectorConfig::default().with_limit(10))
}

#[tokio::test]
async fn test_select_end_to_end() {
    let response = users_inspector()
        .execute_query("db", "SELECT * FROM users")
        .await;

    assert_eq!(
        response.column_names,
        Some(vec!["id".to_string(), "name".to_string()])
    );
    assert_eq!(
        response.values,
        Some(vec![
            GenericValue::Int(1),
            GenericValue::text("a"),
            GenericValue::Int(2),
            GenericValue::Null,
        ])
    );
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_select_wire_json() {
    let response = users_inspector()
        .execute_query("db", "SELECT * FROM users")
        .await;

    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"columnNames":["id","name"],"values":[1,"a",2,"[null]"]}"#
    );
}

#[tokio::test]
async fn test_values_align_with_column_names() {
    let inspector = users_inspector();
    for query in ["users", "SELECT * FROM users", "INSERT INTO users", "VACUUM"] {
        let response = inspector.execute_query("db", query).await;
        let names = response.column_names.expect("columnNames populated");
        let values = response.values.expect("values populated");
        assert!(
            !names.is_empty() && values.len() % names.len() == 0,
            "misaligned response for {query}: {} names, {} values",
            names.len(),
            values.len()
        );
    }
}

#[tokio::test]
async fn test_acknowledged_shape() {
    let response = users_inspector().execute_query("db", "BEGIN").await;

    assert_eq!(response.column_names, Some(vec!["success".to_string()]));
    assert_eq!(response.values, Some(vec![GenericValue::text("true")]));
}

#[tokio::test]
async fn test_insert_shape() {
    let response = users_inspector()
        .execute_query("db", "INSERT INTO users VALUES (3, 'c')")
        .await;

    assert_eq!(
        response.column_names,
        Some(vec!["ID of last inserted row".to_string()])
    );
    assert_eq!(response.values, Some(vec![GenericValue::Int(99)]));
}

#[tokio::test]
async fn test_modify_shape() {
    let response = users_inspector()
        .execute_query("db", "UPDATE users SET name = 'x'")
        .await;

    assert_eq!(response.column_names, Some(vec!["Modified rows".to_string()]));
    assert_eq!(response.values, Some(vec![GenericValue::Int(4)]));
}

#[tokio::test]
async fn test_malformed_query_returns_error_data() {
    let response = users_inspector()
        .execute_query("db", "SELECT * FROM no_such_table")
        .await;

    assert!(response.column_names.is_none());
    assert!(response.values.is_none());
    let error = response.error.expect("sqlError populated");
    assert_eq!(error.code, 0);
    assert!(error.message.contains("no such table"));
}

#[tokio::test]
async fn test_engine_failure_wire_json() {
    let inspector = Inspector::new(
        Box::new(FailingEngine::new("near \"FROM\": syntax error")),
        InspectorConfig::default(),
    );
    let response = inspector.execute_query("db", "SELEC 1").await;

    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"sqlError":{"code":0,"message":"near \"FROM\": syntax error"}}"#
    );
}
