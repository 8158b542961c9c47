//! Per-cell value formatting.
//!
//! Renders one column value of a known logical type into a `GenericValue`.
//! Each arm is independent: null handling, IEEE special substitution, date
//! rendering, link and collection expansion. Unrecognized tags degrade to a
//! diagnostic placeholder so that one odd column never breaks a row fetch.

use chrono::{TimeZone, Utc};

use crate::render::fieldtype::LogicalFieldType;
use crate::render::value::GenericValue;
use crate::store::{ColumnKey, LinkList, RowRead, ScalarValue};

/// Formats a single cell.
///
/// `kind` must be the classification of the column `col` refers to; the
/// flattener guarantees this by classifying each column once per request.
pub fn format_cell(row: &dyn RowRead, col: ColumnKey, kind: LogicalFieldType) -> GenericValue {
    match kind {
        LogicalFieldType::Integer => {
            if row.is_null(col) {
                GenericValue::Null
            } else {
                GenericValue::Int(row.int_value(col))
            }
        }
        LogicalFieldType::Boolean => {
            if row.is_null(col) {
                GenericValue::Null
            } else {
                GenericValue::Bool(row.bool_value(col))
            }
        }
        LogicalFieldType::String => {
            if row.is_null(col) {
                GenericValue::Null
            } else {
                GenericValue::Text(row.string_value(col))
            }
        }
        LogicalFieldType::Binary => {
            if row.is_null(col) {
                GenericValue::Null
            } else {
                GenericValue::Bytes(row.binary_value(col))
            }
        }
        LogicalFieldType::Float => {
            if row.is_null(col) {
                GenericValue::Null
            } else {
                format_double(f64::from(row.float_value(col)))
            }
        }
        LogicalFieldType::Double => {
            if row.is_null(col) {
                GenericValue::Null
            } else {
                format_double(row.double_value(col))
            }
        }
        LogicalFieldType::LegacyDate | LogicalFieldType::Date => {
            if row.is_null(col) {
                GenericValue::Null
            } else {
                GenericValue::Text(format_timestamp(row.date_value(col)))
            }
        }
        LogicalFieldType::ObjectLink => {
            if row.is_null_link(col) {
                GenericValue::Null
            } else {
                GenericValue::Link(row.link_value(col))
            }
        }
        // Link lists are never null; empty lists format to empty braces.
        LogicalFieldType::LinkList => GenericValue::Text(format_link_list(&row.link_list(col))),
        kind if kind.is_scalar_list() => {
            if row.is_null_link(col) {
                GenericValue::Null
            } else {
                GenericValue::Text(format_value_list(kind, &row.value_list(col)))
            }
        }
        other => GenericValue::Text(format!("unsupported column type: {}", other.name())),
    }
}

/// Substitutes IEEE specials that do not round-trip through the generic
/// numeric encoding; finite values pass through unchanged.
fn format_double(value: f64) -> GenericValue {
    if value.is_nan() {
        GenericValue::text("NaN")
    } else if value == f64::INFINITY {
        GenericValue::text("Infinity")
    } else if value == f64::NEG_INFINITY {
        GenericValue::text("-Infinity")
    } else {
        GenericValue::Float(value)
    }
}

/// Renders a date cell as a human-readable instant followed by the exact
/// epoch-millisecond value, e.g. `"March 5, 2021 14:30:00 UTC (1614954600000)"`.
/// Clients sort and compare by the parenthesized part.
pub(crate) fn format_timestamp(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(instant) => format!(
            "{} ({millis})",
            instant.format("%B %-d, %Y %H:%M:%S UTC")
        ),
        None => format!("out-of-range timestamp ({millis})"),
    }
}

/// Renders a link list as `"<target-table>{key1,key2,...}"`.
fn format_link_list(list: &LinkList) -> String {
    let keys = list
        .keys
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}{{{keys}}}", list.target_table)
}

/// Renders a scalar list as `"<LOGICAL_TYPE_NAME>{v1,v2,...}"` with raw
/// element values.
fn format_value_list(kind: LogicalFieldType, values: &[ScalarValue]) -> String {
    let elements = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}{{{elements}}}", kind.name())
}
