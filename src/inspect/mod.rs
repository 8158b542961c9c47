//! Inspection request handling.
//!
//! Dispatches client requests (list tables, execute query) through the
//! storage engine and shapes the results for the wire.

mod dispatcher;
mod response;

pub use dispatcher::Inspector;
pub use response::{ExecuteQueryResponse, QueryError, TableNamesResponse};
