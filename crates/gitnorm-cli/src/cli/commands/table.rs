//! `print-vars-table`: render named environment variables as a table.

use anyhow::{Context, Result};
use gitnorm_core::table::{self, TableStyle};
use std::ffi::OsString;
use std::io::Write;

pub const EDGE_COL_CHAR: &str = "EDGE_COL_CHAR";
pub const MID_COL_CHAR: &str = "MID_COL_CHAR";
pub const HR_CHAR: &str = "HR_CHAR";

/// Environment lookup that keeps set-but-non-UTF-8 values (lossily) instead of
/// treating them as unset.
pub fn env_value(name: &str) -> Option<String> {
    lossy(std::env::var_os(name))
}

pub(crate) fn lossy(value: Option<OsString>) -> Option<String> {
    value.map(|v| v.to_string_lossy().into_owned())
}

/// Apply single-character overrides found through `lookup` on top of `base`.
pub fn resolve_style<F>(base: TableStyle, lookup: F) -> TableStyle
where
    F: Fn(&str) -> Option<String>,
{
    let char_for = |key: &str| {
        let raw = lookup(key)?;
        let c = table::parse_style_char(&raw);
        if c.is_none() {
            tracing::warn!("ignoring {}={:?}: expected exactly one character", key, raw);
        }
        c
    };
    base.with_overrides(
        char_for(EDGE_COL_CHAR),
        char_for(MID_COL_CHAR),
        char_for(HR_CHAR),
    )
}

/// Print the table for `names`, reading values from the process environment.
pub fn run_table(names: &[String], style: &TableStyle) -> Result<()> {
    let rows = table::rows_from_lookup(names.iter().map(String::as_str), env_value);
    let rendered = table::render_table(&rows, style);
    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("write table to stdout")?;
    Ok(())
}
