//! Query outcome dispatch.
//!
//! The `Inspector` is the boundary between the inspection client and the
//! storage engine: it runs a submitted query through the engine, matches
//! the outcome, and produces exactly one response shape per outcome kind.
//! Engine failures become structured error data, never a Rust error.

use tracing::debug;

use crate::config::InspectorConfig;
use crate::error::{Result, RowscopeError};
use crate::inspect::response::{ExecuteQueryResponse, QueryError, TableNamesResponse};
use crate::render::{flatten_rows, GenericValue};
use crate::store::{QueryEngine, QueryOutcome};

/// Name of the synthetic column carrying each row's object key.
const INDEX_COLUMN: &str = "<index>";

/// Serves inspection requests against one storage engine.
pub struct Inspector {
    engine: Box<dyn QueryEngine>,
    config: InspectorConfig,
}

impl Inspector {
    /// Creates an inspector over the given engine.
    pub fn new(engine: Box<dyn QueryEngine>, config: InspectorConfig) -> Self {
        Self { engine, config }
    }

    /// Enumerates the tables of a database.
    ///
    /// Meta tables are included only when the configuration asks for them.
    pub async fn list_tables(&self, database_id: &str) -> Result<TableNamesResponse> {
        let table_names = self
            .engine
            .table_names(database_id, self.config.with_meta_tables)
            .await?;
        Ok(TableNamesResponse { table_names })
    }

    /// Executes a query string and builds the client response.
    ///
    /// Execution failures are returned inline as `sqlError` data so the
    /// client can render them; this method itself never fails.
    pub async fn execute_query(&self, database_id: &str, query: &str) -> ExecuteQueryResponse {
        debug!(database = database_id, query, "executing inspection query");

        match self.engine.run_query(database_id, query).await {
            Ok(outcome) => self.build_response(outcome),
            Err(err) => {
                debug!(error = %err, "query failed");
                // The client sees the engine's own text, not our wrapper.
                let message = match err {
                    RowscopeError::Engine(message) => message,
                    other => other.to_string(),
                };
                ExecuteQueryResponse::failed(QueryError::new(message))
            }
        }
    }

    /// Maps one query outcome to its response shape.
    fn build_response(&self, outcome: QueryOutcome) -> ExecuteQueryResponse {
        match outcome {
            QueryOutcome::Acknowledged => {
                ExecuteQueryResponse::single("success", GenericValue::text("true"))
            }
            QueryOutcome::Rows {
                table,
                add_row_index,
            } => {
                let mut column_names = Vec::new();
                if add_row_index {
                    column_names.push(INDEX_COLUMN.to_string());
                }
                column_names.extend(table.columns().into_iter().map(|column| column.name));

                let values = flatten_rows(
                    table.as_ref(),
                    self.config.limit,
                    self.config.ascending,
                    add_row_index,
                );
                ExecuteQueryResponse::rows(column_names, values)
            }
            QueryOutcome::Inserted { id } => {
                ExecuteQueryResponse::single("ID of last inserted row", GenericValue::Int(id))
            }
            QueryOutcome::Modified { count } => {
                ExecuteQueryResponse::single("Modified rows", GenericValue::Int(count as i64))
            }
        }
    }
}
