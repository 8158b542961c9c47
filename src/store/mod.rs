//! Storage abstraction layer for Rowscope.
//!
//! Rowscope owns no storage: the host application's embedded engine sits
//! behind the traits defined here. `QueryEngine` executes ad-hoc queries
//! and enumerates tables; `TableRead`/`RowRead` give the renderer ordered,
//! read-only access to one table window for the duration of a request.

mod mock;

pub use mock::{FailingEngine, MockEngine, MockRow, MockTable};

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::render::NativeFieldType;

/// Stable per-column handle, assigned by the engine. Distinct from the
/// column's position in the declared order.
pub type ColumnKey = u64;

/// Stable per-row identifier. Unlike an ordinal position, an object key
/// does not depend on traversal direction and stays meaningful across
/// requests.
pub type ObjectKey = i64;

/// Metadata for one column of a table, queried once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name, as declared in the table.
    pub name: String,

    /// Stable accessor key for this column.
    pub key: ColumnKey,

    /// Native storage type reported by the engine.
    pub field_type: NativeFieldType,
}

impl ColumnMeta {
    /// Creates column metadata with the given name, key, and native type.
    pub fn new(name: impl Into<String>, key: ColumnKey, field_type: NativeFieldType) -> Self {
        Self {
            name: name.into(),
            key,
            field_type,
        }
    }
}

/// A raw element of a scalar-valued list column.
///
/// Elements render with the engine's native textual representation; the
/// per-cell substitutions (null sentinel, NaN/Infinity) do not apply
/// inside collections.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Int(i64),
    Bool(bool),
    Float(f32),
    Double(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// Epoch milliseconds.
    Date(i64),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
            Self::Bytes(v) => {
                for byte in v {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Date(v) => write!(f, "{v}"),
        }
    }
}

/// Owned snapshot of a link-list cell: the target table's name plus the
/// object keys of every linked row, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList {
    /// Name of the table the links point into.
    pub target_table: String,

    /// Object keys of the linked rows, in list order.
    pub keys: Vec<ObjectKey>,
}

impl LinkList {
    /// Creates a link list pointing into the given table.
    pub fn new(target_table: impl Into<String>, keys: Vec<ObjectKey>) -> Self {
        Self {
            target_table: target_table.into(),
            keys,
        }
    }
}

/// Read-only view of one table, scoped to a single request.
///
/// Column order is fixed for the lifetime of a flattening operation and
/// matches the order `columns()` returns.
pub trait TableRead: Send + Sync {
    /// Returns the table's name.
    fn name(&self) -> &str;

    /// Returns the current number of rows.
    fn row_count(&self) -> u64;

    /// Returns the ordered column metadata.
    fn columns(&self) -> Vec<ColumnMeta>;

    /// Resolves the row at the given physical ordinal (0-based).
    ///
    /// Callers must keep `ordinal < row_count()`.
    fn row(&self, ordinal: u64) -> Box<dyn RowRead + '_>;
}

/// Read-only view of one row.
///
/// Typed accessors assume the column actually holds the requested type;
/// the renderer guarantees this by classifying each column first.
pub trait RowRead {
    /// Returns the row's stable object key.
    fn object_key(&self) -> ObjectKey;

    /// Whether the cell holds no value.
    fn is_null(&self, col: ColumnKey) -> bool;

    /// Whether a link or list container is absent for this cell.
    fn is_null_link(&self, col: ColumnKey) -> bool;

    fn int_value(&self, col: ColumnKey) -> i64;
    fn bool_value(&self, col: ColumnKey) -> bool;
    fn float_value(&self, col: ColumnKey) -> f32;
    fn double_value(&self, col: ColumnKey) -> f64;
    fn string_value(&self, col: ColumnKey) -> String;
    fn binary_value(&self, col: ColumnKey) -> Vec<u8>;

    /// Date cell as epoch milliseconds.
    fn date_value(&self, col: ColumnKey) -> i64;

    /// Object key of the row a link cell points to.
    fn link_value(&self, col: ColumnKey) -> ObjectKey;

    /// Snapshot of a link-list cell. Link lists are never absent; an
    /// empty list is returned for rows with no links.
    fn link_list(&self, col: ColumnKey) -> LinkList;

    /// Snapshot of a scalar list cell's elements, in list order.
    fn value_list(&self, col: ColumnKey) -> Vec<ScalarValue>;
}

/// Outcome of one executed query, as reported by the engine.
///
/// Constructed once per execution and consumed immediately to build the
/// response.
pub enum QueryOutcome {
    /// A non-select statement succeeded with nothing further to report.
    Acknowledged,

    /// The query produced a tabular result. `add_row_index` asks the
    /// renderer to prepend a synthetic column carrying each row's object
    /// key (set when the client inspects a table directly).
    Rows {
        table: Box<dyn TableRead>,
        add_row_index: bool,
    },

    /// An insert succeeded; carries the new row's identifier.
    Inserted { id: i64 },

    /// An update or delete succeeded; carries the affected row count.
    Modified { count: u64 },
}

impl fmt::Debug for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acknowledged => write!(f, "Acknowledged"),
            Self::Rows { table, add_row_index } => f
                .debug_struct("Rows")
                .field("table", &table.name())
                .field("add_row_index", add_row_index)
                .finish(),
            Self::Inserted { id } => f.debug_struct("Inserted").field("id", id).finish(),
            Self::Modified { count } => f.debug_struct("Modified").field("count", count).finish(),
        }
    }
}

/// Trait defining the interface to the host's storage/query engine.
///
/// Parsing and executing the query text is entirely the engine's concern;
/// Rowscope only consumes the outcome. All operations are async and return
/// Results with RowscopeError.
#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Enumerates the tables of a database, optionally including
    /// internal/meta tables.
    async fn table_names(&self, database_id: &str, with_meta_tables: bool) -> Result<Vec<String>>;

    /// Executes a query string against a database.
    async fn run_query(&self, database_id: &str, query: &str) -> Result<QueryOutcome>;
}
