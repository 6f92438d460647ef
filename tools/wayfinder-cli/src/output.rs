//! Output formatting utilities.

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// A key-value info row.
#[derive(Tabled)]
pub struct InfoRow {
    #[tabled(rename = "Property")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl InfoRow {
    pub fn new(key: &str, value: impl ToString) -> Self {
        Self { key: key.to_string(), value: value.to_string() }
    }
}

/// Format an info table with key-value pairs.
pub fn format_info_table(rows: Vec<InfoRow>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a route cost, keeping one decimal for whole numbers.
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{distance:.1}")
    } else {
        format!("{distance}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(format_distance(11.0), "11.0");
        assert_eq!(format_distance(7.5), "7.5");
    }

    #[test]
    fn info_table_has_headers() {
        let table = format_info_table(vec![InfoRow::new("Walls", 3)]);
        assert!(table.contains("Property"));
        assert!(table.contains("Walls"));
        assert!(table.contains('3'));
        assert!(table.starts_with('╭'));
    }
}
