//! Wire response shapes.
//!
//! Defines the structures serialized back to the inspection client. Field
//! names follow the remote protocol's camelCase convention; absent fields
//! are omitted from the wire entirely.

use serde::Serialize;

use crate::render::GenericValue;

/// Structured error carried inside an execute-query response.
///
/// The engine does not distinguish error classes, so the code is fixed at
/// zero; the message is the engine's own text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryError {
    /// Numeric error code, currently always 0.
    pub code: i32,

    /// Engine-reported failure text.
    pub message: String,
}

impl QueryError {
    /// Creates an error with the fixed code and the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
        }
    }
}

/// Response to an execute-query request.
///
/// Exactly one of the two shapes is populated: `column_names` + `values`
/// on success, `error` on an engine failure. `values` is flat, row-major,
/// and its length is always an exact multiple of `column_names` length.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteQueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<GenericValue>>,

    #[serde(rename = "sqlError", skip_serializing_if = "Option::is_none")]
    pub error: Option<QueryError>,
}

impl ExecuteQueryResponse {
    /// Builds a tabular success response.
    pub fn rows(column_names: Vec<String>, values: Vec<GenericValue>) -> Self {
        Self {
            column_names: Some(column_names),
            values: Some(values),
            error: None,
        }
    }

    /// Builds a single-column, single-value response.
    pub fn single(column_name: impl Into<String>, value: GenericValue) -> Self {
        Self::rows(vec![column_name.into()], vec![value])
    }

    /// Builds an error response; the error replaces the body.
    pub fn failed(error: QueryError) -> Self {
        Self {
            column_names: None,
            values: None,
            error: Some(error),
        }
    }
}

/// Response to a list-tables request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableNamesResponse {
    /// Ordered table names.
    pub table_names: Vec<String>,
}
