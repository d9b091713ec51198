//! Fixed-width text rendering for table specs.
//!
//! Purely a display concern layered on top of [`TableSpec`]: column widths
//! are computed from headers and values (capped at [`MAX_CELL_WIDTH`]), long
//! values are truncated with an ellipsis marker, and cells with no value
//! render as a placeholder dash.

use wos_shared::TableSpec;

/// Widest a rendered cell is allowed to be.
const MAX_CELL_WIDTH: usize = 40;

/// Placeholder for a cell with no value in the row map.
const MISSING_CELL: &str = "—";

fn cell_value(spec: &TableSpec, row_idx: usize, column: &str) -> String {
    let val = spec.rows[row_idx]
        .get(column)
        .map(String::as_str)
        .unwrap_or(MISSING_CELL);

    if val.chars().count() > MAX_CELL_WIDTH {
        let truncated: String = val.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{truncated}...")
    } else {
        val.to_string()
    }
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let padding = width.saturating_sub(len);
    format!("{value}{}", " ".repeat(padding))
}

/// Render a table spec as aligned text for the terminal.
pub fn render_table(spec: &TableSpec) -> String {
    let rule = "━".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!("  TABLE: {}\n", spec.name));
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!(
        "  Columns ({}): {}\n",
        spec.columns.len(),
        spec.columns.join(", ")
    ));
    out.push_str(&format!("  Rows: {}\n\n", spec.rows.len()));

    if spec.rows.is_empty() {
        out.push_str("  (no rows)\n");
        return out;
    }

    // Column width = max of header and (capped) cell widths.
    let widths: Vec<usize> = spec
        .columns
        .iter()
        .enumerate()
        .map(|(c, col)| {
            let mut width = col.chars().count();
            for r in 0..spec.rows.len() {
                width = width.max(cell_value(spec, r, &spec.columns[c]).chars().count());
            }
            width
        })
        .collect();

    let header = spec
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| pad(col, *w))
        .collect::<Vec<_>>()
        .join("  │ ");
    let separator = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("──┼─");
    out.push_str(&format!("  {header}\n"));
    out.push_str(&format!("  {separator}\n"));

    for r in 0..spec.rows.len() {
        let line = spec
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| pad(&cell_value(spec, r, col), *w))
            .collect::<Vec<_>>()
            .join("  │ ");
        out.push_str(&format!("  {line}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn spec_with_rows(rows: Vec<HashMap<String, String>>) -> TableSpec {
        TableSpec {
            name: "ACM-wos-test".into(),
            columns: vec!["service".into(), "api_key".into()],
            rows,
        }
    }

    #[test]
    fn renders_header_and_counts() {
        let spec = spec_with_rows(vec![]);
        let out = render_table(&spec);
        assert!(out.contains("TABLE: ACM-wos-test"));
        assert!(out.contains("Columns (2): service, api_key"));
        assert!(out.contains("Rows: 0"));
        assert!(out.contains("(no rows)"));
    }

    #[test]
    fn truncates_long_values_with_ellipsis() {
        let long = "x".repeat(50);
        let mut row = HashMap::new();
        row.insert("service".to_string(), "hubspot".to_string());
        row.insert("api_key".to_string(), long);

        let out = render_table(&spec_with_rows(vec![row]));
        let expected = format!("{}...", "x".repeat(37));
        assert!(out.contains(&expected));
        assert!(!out.contains(&"x".repeat(41)));
    }

    #[test]
    fn missing_cell_renders_placeholder() {
        let mut row = HashMap::new();
        row.insert("service".to_string(), "hubspot".to_string());
        // api_key intentionally absent from the row map

        let out = render_table(&spec_with_rows(vec![row]));
        assert!(out.contains(MISSING_CELL));
    }

    #[test]
    fn columns_align_to_widest_value() {
        let mut row = HashMap::new();
        row.insert("service".to_string(), "hs".to_string());
        row.insert("api_key".to_string(), "k".to_string());

        let out = render_table(&spec_with_rows(vec![row]));
        // "service" (7 chars) is wider than "hs", so the value is padded.
        assert!(out.contains("hs     "));
    }
}
