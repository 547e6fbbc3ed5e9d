//! Command handlers, one file per binary.

mod normalize;
mod table;

pub use normalize::run_normalize;
pub use table::{env_value, resolve_style, run_table};
