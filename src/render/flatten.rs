//! Row window flattening.
//!
//! Converts a bounded, ordered window of table rows into one flat value
//! sequence, row-major and column-minor. The output lines up one-to-one
//! with the column-name sequence the caller advertises; that alignment is
//! the rendering contract generic clients rely on.

use tracing::warn;

use crate::render::fieldtype::LogicalFieldType;
use crate::render::format::format_cell;
use crate::render::value::GenericValue;
use crate::store::TableRead;

/// Marker value appended once per column as a final synthetic row when the
/// row limit suppressed part of the table.
pub const TRUNCATION_MARKER: &str = "{truncated}";

/// Flattens up to `limit` rows of `table` into a single value sequence.
///
/// Rows are visited at physical ordinal `i` when `ascending`, or
/// `row_count - i - 1` otherwise (descending walks from the last physical
/// row backward, not by any sort key). When `add_row_index` is set, each
/// row is prefixed with its stable object key. If the limit cut the window
/// short, one `"{truncated}"` marker per column is appended as a trailing
/// synthetic row; the trailing markers are never index-prefixed.
pub fn flatten_rows(
    table: &dyn TableRead,
    limit: u64,
    ascending: bool,
    add_row_index: bool,
) -> Vec<GenericValue> {
    let columns = table.columns();
    let kinds: Vec<LogicalFieldType> = columns
        .iter()
        .map(|column| LogicalFieldType::classify(column.field_type))
        .collect();

    let row_count = table.row_count();
    let window = limit.min(row_count);

    let per_row = columns.len() + usize::from(add_row_index);
    let mut values = Vec::with_capacity(window as usize * per_row + columns.len());

    for index in 0..window {
        let ordinal = if ascending {
            index
        } else {
            row_count - index - 1
        };
        let row = table.row(ordinal);

        if add_row_index {
            values.push(GenericValue::Int(row.object_key()));
        }
        for (column, kind) in columns.iter().zip(&kinds) {
            values.push(format_cell(row.as_ref(), column.key, *kind));
        }
    }

    if limit < row_count {
        warn!(
            table = table.name(),
            limit, row_count, "row window truncated"
        );
        for _ in &columns {
            values.push(GenericValue::text(TRUNCATION_MARKER));
        }
    }

    values
}
