use serde::{Deserialize, Serialize};

/// Border characters for a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Outer and inner column borders on header and data rows.
    pub edge: char,
    /// Corners and column crossings on separator lines.
    pub junction: char,
    /// Horizontal fill on separator lines.
    pub fill: char,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            edge: '|',
            junction: '+',
            fill: '-',
        }
    }
}

impl TableStyle {
    /// Replace each border character that has an override, keeping the rest.
    pub fn with_overrides(
        self,
        edge: Option<char>,
        junction: Option<char>,
        fill: Option<char>,
    ) -> Self {
        Self {
            edge: edge.unwrap_or(self.edge),
            junction: junction.unwrap_or(self.junction),
            fill: fill.unwrap_or(self.fill),
        }
    }
}

/// Accept `raw` as a border character only if it is exactly one `char`.
pub fn parse_style_char(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
