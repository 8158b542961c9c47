//! Row-to-generic-value rendering.
//!
//! The serialization core of the bridge: native column types are
//! classified into logical tags, cells are formatted per tag, and bounded
//! row windows are flattened into the single ordered value sequence the
//! inspection protocol carries.

mod fieldtype;
mod flatten;
mod format;
mod value;

pub use fieldtype::{LogicalFieldType, NativeFieldType};
pub use flatten::{flatten_rows, TRUNCATION_MARKER};
pub use format::format_cell;
pub use value::{GenericValue, NULL_SENTINEL};
