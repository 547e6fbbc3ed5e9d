use super::style::TableStyle;

pub const NAME_HEADER: &str = "Name:";
pub const VALUE_HEADER: &str = "Value:";

/// One data row: a variable name and its value (empty when unset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub value: String,
}

/// Resolve each name through `lookup`; names it cannot resolve get an empty value.
pub fn rows_from_lookup<I, S, F>(names: I, mut lookup: F) -> Vec<TableRow>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(&str) -> Option<String>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.into();
            let value = lookup(&name).unwrap_or_default();
            TableRow { name, value }
        })
        .collect()
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn separator(name_width: usize, value_width: usize, style: &TableStyle) -> String {
    let fill = |n: usize| std::iter::repeat(style.fill).take(n).collect::<String>();
    format!(
        "{j}{}{j}{}{j}\n",
        fill(name_width + 2),
        fill(value_width + 2),
        j = style.junction
    )
}

fn data_row(name: &str, name_width: usize, value: &str, value_width: usize, edge: char) -> String {
    format!("{edge} {name:<name_width$} {edge} {value:<value_width$} {edge}\n")
}

/// Render `rows` as a bordered table, header first, rows in input order.
///
/// Returns an empty string for no rows.
pub fn render_table(rows: &[TableRow], style: &TableStyle) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let name_width = rows
        .iter()
        .map(|r| width(&r.name))
        .fold(width(NAME_HEADER), usize::max);
    let value_width = rows
        .iter()
        .map(|r| width(&r.value))
        .fold(width(VALUE_HEADER), usize::max);
    tracing::debug!(rows = rows.len(), name_width, value_width, "rendering table");

    let sep = separator(name_width, value_width, style);
    let mut out = String::with_capacity(sep.len() * (rows.len() + 4));
    out.push_str(&sep);
    out.push_str(&data_row(
        NAME_HEADER,
        name_width,
        VALUE_HEADER,
        value_width,
        style.edge,
    ));
    out.push_str(&sep);
    for row in rows {
        out.push_str(&data_row(
            &row.name,
            name_width,
            &row.value,
            value_width,
            style.edge,
        ));
    }
    out.push_str(&sep);
    out
}
