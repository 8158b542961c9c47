//! List-tables integration tests.

use rowscope::config::InspectorConfig;
use rowscope::inspect::Inspector;
use rowscope::store::{FailingEngine, MockEngine, MockTable};

fn engine() -> MockEngine {
    MockEngine::new()
        .with_table(MockTable::new("users"))
        .with_table(MockTable::new("orders"))
        .with_meta_table("pk")
        .with_meta_table("metadata")
}

#[tokio::test]
async fn test_lists_user_tables_in_order() {
    let inspector = Inspector::new(Box::new(engine()), InspectorConfig::default());
    let response = inspector.list_tables("db").await.unwrap();

    assert_eq!(response.table_names, vec!["users", "orders"]);
}

#[tokio::test]
async fn test_meta_tables_included_when_configured() {
    let inspector = Inspector::new(
        Box::new(engine()),
        InspectorConfig::default().with_meta_tables(true),
    );
    let response = inspector.list_tables("db").await.unwrap();

    assert_eq!(
        response.table_names,
        vec!["users", "orders", "pk", "metadata"]
    );
}

#[tokio::test]
async fn test_wire_shape() {
    let inspector = Inspector::new(Box::new(engine()), InspectorConfig::default());
    let response = inspector.list_tables("db").await.unwrap();

    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"tableNames":["users","orders"]}"#
    );
}

#[tokio::test]
async fn test_engine_failure_propagates() {
    let inspector = Inspector::new(
        Box::new(FailingEngine::default()),
        InspectorConfig::default(),
    );
    let err = inspector.list_tables("db").await.unwrap_err();

    assert_eq!(err.category(), "Engine Error");
}
