//! Mock storage engine for testing.
//!
//! Provides in-memory tables and a prefix-parsing query engine so the
//! bridge can be exercised without a real embedded database.

use async_trait::async_trait;

use super::{
    ColumnKey, ColumnMeta, LinkList, ObjectKey, QueryEngine, QueryOutcome, RowRead, ScalarValue,
    TableRead,
};
use crate::error::{Result, RowscopeError};
use crate::render::NativeFieldType;

/// One cell of a mock row.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCell {
    /// Absent value.
    Null,
    /// Absent link or list container.
    NullLink,
    Int(i64),
    Bool(bool),
    Float(f32),
    Double(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// Epoch milliseconds.
    Date(i64),
    Link(ObjectKey),
    LinkList(LinkList),
    ValueList(Vec<ScalarValue>),
}

/// An in-memory row. Cells are positional and must line up with the
/// owning table's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct MockRow {
    object_key: ObjectKey,
    cells: Vec<MockCell>,
}

impl MockRow {
    /// Creates a row with the given stable object key and no cells.
    pub fn new(object_key: ObjectKey) -> Self {
        Self {
            object_key,
            cells: Vec::new(),
        }
    }

    fn cell(&self, col: ColumnKey) -> &MockCell {
        &self.cells[col as usize]
    }

    fn push(mut self, cell: MockCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Appends an absent value.
    pub fn null(self) -> Self {
        self.push(MockCell::Null)
    }

    /// Appends an absent link or list container.
    pub fn null_link(self) -> Self {
        self.push(MockCell::NullLink)
    }

    pub fn int(self, v: i64) -> Self {
        self.push(MockCell::Int(v))
    }

    pub fn boolean(self, v: bool) -> Self {
        self.push(MockCell::Bool(v))
    }

    pub fn float(self, v: f32) -> Self {
        self.push(MockCell::Float(v))
    }

    pub fn double(self, v: f64) -> Self {
        self.push(MockCell::Double(v))
    }

    pub fn string(self, v: impl Into<String>) -> Self {
        self.push(MockCell::Str(v.into()))
    }

    pub fn bytes(self, v: Vec<u8>) -> Self {
        self.push(MockCell::Bytes(v))
    }

    /// Appends a date cell holding epoch milliseconds.
    pub fn date(self, millis: i64) -> Self {
        self.push(MockCell::Date(millis))
    }

    /// Appends a link to the row with the given object key.
    pub fn link(self, target: ObjectKey) -> Self {
        self.push(MockCell::Link(target))
    }

    /// Appends a link list into `target_table`.
    pub fn link_list(self, target_table: impl Into<String>, keys: Vec<ObjectKey>) -> Self {
        self.push(MockCell::LinkList(LinkList::new(target_table, keys)))
    }

    /// Appends a scalar list cell.
    pub fn value_list(self, values: Vec<ScalarValue>) -> Self {
        self.push(MockCell::ValueList(values))
    }
}

impl RowRead for MockRow {
    fn object_key(&self) -> ObjectKey {
        self.object_key
    }

    fn is_null(&self, col: ColumnKey) -> bool {
        matches!(self.cell(col), MockCell::Null)
    }

    fn is_null_link(&self, col: ColumnKey) -> bool {
        matches!(self.cell(col), MockCell::NullLink)
    }

    fn int_value(&self, col: ColumnKey) -> i64 {
        match self.cell(col) {
            MockCell::Int(v) => *v,
            other => panic!("column {col} does not hold an integer: {other:?}"),
        }
    }

    fn bool_value(&self, col: ColumnKey) -> bool {
        match self.cell(col) {
            MockCell::Bool(v) => *v,
            other => panic!("column {col} does not hold a boolean: {other:?}"),
        }
    }

    fn float_value(&self, col: ColumnKey) -> f32 {
        match self.cell(col) {
            MockCell::Float(v) => *v,
            other => panic!("column {col} does not hold a float: {other:?}"),
        }
    }

    fn double_value(&self, col: ColumnKey) -> f64 {
        match self.cell(col) {
            MockCell::Double(v) => *v,
            other => panic!("column {col} does not hold a double: {other:?}"),
        }
    }

    fn string_value(&self, col: ColumnKey) -> String {
        match self.cell(col) {
            MockCell::Str(v) => v.clone(),
            other => panic!("column {col} does not hold a string: {other:?}"),
        }
    }

    fn binary_value(&self, col: ColumnKey) -> Vec<u8> {
        match self.cell(col) {
            MockCell::Bytes(v) => v.clone(),
            other => panic!("column {col} does not hold binary data: {other:?}"),
        }
    }

    fn date_value(&self, col: ColumnKey) -> i64 {
        match self.cell(col) {
            MockCell::Date(v) => *v,
            other => panic!("column {col} does not hold a date: {other:?}"),
        }
    }

    fn link_value(&self, col: ColumnKey) -> ObjectKey {
        match self.cell(col) {
            MockCell::Link(v) => *v,
            other => panic!("column {col} does not hold a link: {other:?}"),
        }
    }

    fn link_list(&self, col: ColumnKey) -> LinkList {
        match self.cell(col) {
            MockCell::LinkList(v) => v.clone(),
            other => panic!("column {col} does not hold a link list: {other:?}"),
        }
    }

    fn value_list(&self, col: ColumnKey) -> Vec<ScalarValue> {
        match self.cell(col) {
            MockCell::ValueList(v) => v.clone(),
            other => panic!("column {col} does not hold a value list: {other:?}"),
        }
    }
}

/// An in-memory table built with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct MockTable {
    name: String,
    columns: Vec<ColumnMeta>,
    rows: Vec<MockRow>,
}

impl MockTable {
    /// Creates an empty table with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Appends a column; its accessor key is the declaration position.
    pub fn with_column(mut self, name: impl Into<String>, field_type: NativeFieldType) -> Self {
        let key = self.columns.len() as ColumnKey;
        self.columns.push(ColumnMeta::new(name, key, field_type));
        self
    }

    /// Appends a row. Cell order must match the column order.
    pub fn with_row(mut self, row: MockRow) -> Self {
        self.rows.push(row);
        self
    }
}

impl TableRead for MockTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }

    fn columns(&self) -> Vec<ColumnMeta> {
        self.columns.clone()
    }

    fn row(&self, ordinal: u64) -> Box<dyn RowRead + '_> {
        Box::new(self.rows[ordinal as usize].clone())
    }
}

/// A mock query engine over a single in-memory database.
///
/// Queries are recognized by prefix: a bare table name inspects that table
/// (with the synthetic row-index column), `SELECT ... FROM <table>` returns
/// the named table without it, `INSERT`/`UPDATE`/`DELETE` report canned
/// identifiers and counts, and anything else is acknowledged. The database
/// identifier is ignored.
#[derive(Debug, Clone, Default)]
pub struct MockEngine {
    tables: Vec<MockTable>,
    meta_tables: Vec<String>,
    insert_id: i64,
    modified_count: u64,
}

impl MockEngine {
    /// Creates an engine with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table.
    pub fn with_table(mut self, table: MockTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Registers an internal/meta table name, reported only when the
    /// caller asks for meta tables.
    pub fn with_meta_table(mut self, name: impl Into<String>) -> Self {
        self.meta_tables.push(name.into());
        self
    }

    /// Sets the row identifier reported for inserts.
    pub fn with_insert_id(mut self, id: i64) -> Self {
        self.insert_id = id;
        self
    }

    /// Sets the affected-row count reported for updates and deletes.
    pub fn with_modified_count(mut self, count: u64) -> Self {
        self.modified_count = count;
        self
    }

    fn find_table(&self, name: &str) -> Option<&MockTable> {
        self.tables.iter().find(|table| table.name == name)
    }
}

#[async_trait]
impl QueryEngine for MockEngine {
    async fn table_names(&self, _database_id: &str, with_meta_tables: bool) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.tables.iter().map(|t| t.name.clone()).collect();
        if with_meta_tables {
            names.extend(self.meta_tables.iter().cloned());
        }
        Ok(names)
    }

    async fn run_query(&self, _database_id: &str, query: &str) -> Result<QueryOutcome> {
        let trimmed = query.trim();

        // Inspecting a table by bare name shows the row-index column.
        if let Some(table) = self.find_table(trimmed) {
            return Ok(QueryOutcome::Rows {
                table: Box::new(table.clone()),
                add_row_index: true,
            });
        }

        let upper = trimmed.to_uppercase();
        if upper.starts_with("SELECT") {
            let target = trimmed
                .split_whitespace()
                .skip_while(|word| !word.eq_ignore_ascii_case("from"))
                .nth(1);
            return match target.and_then(|name| self.find_table(name)) {
                Some(table) => Ok(QueryOutcome::Rows {
                    table: Box::new(table.clone()),
                    add_row_index: false,
                }),
                None => Err(RowscopeError::engine(format!(
                    "no such table: {}",
                    target.unwrap_or("<missing>")
                ))),
            };
        }
        if upper.starts_with("INSERT") {
            return Ok(QueryOutcome::Inserted { id: self.insert_id });
        }
        if upper.starts_with("UPDATE") || upper.starts_with("DELETE") {
            return Ok(QueryOutcome::Modified {
                count: self.modified_count,
            });
        }

        Ok(QueryOutcome::Acknowledged)
    }
}

/// A query engine whose every operation fails with a fixed message.
#[derive(Debug, Clone)]
pub struct FailingEngine {
    message: String,
}

impl FailingEngine {
    /// Creates an engine that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingEngine {
    fn default() -> Self {
        Self::new("simulated engine failure")
    }
}

#[async_trait]
impl QueryEngine for FailingEngine {
    async fn table_names(&self, _database_id: &str, _with_meta_tables: bool) -> Result<Vec<String>> {
        Err(RowscopeError::engine(self.message.clone()))
    }

    async fn run_query(&self, _database_id: &str, _query: &str) -> Result<QueryOutcome> {
        Err(RowscopeError::engine(self.message.clone()))
    }
}
