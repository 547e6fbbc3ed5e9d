//! Bordered two-column table of named values.
//!
//! Rendering is pure: callers resolve values (usually from the process
//! environment) and border characters up front and pass them in.

mod render;
mod style;

pub use render::{render_table, rows_from_lookup, TableRow, NAME_HEADER, VALUE_HEADER};
pub use style::{parse_style_char, TableStyle};
