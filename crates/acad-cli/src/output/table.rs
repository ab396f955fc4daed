/// Cells wider than this are cut with an ellipsis.
const MAX_CELL_WIDTH: usize = 48;

/// Render a left-aligned table with a dashed divider under the header.
/// Numeric cells are right-aligned.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count().min(MAX_CELL_WIDTH))
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let value = truncate(value, *width);
                pad(&value, *width, looks_numeric(&value))
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_and_draws_divider() {
        let rows = vec![
            vec!["5".to_string(), "Databases".to_string()],
            vec!["120".to_string(), "Algorithms".to_string()],
        ];
        let out = render(&["id", "course_name"], &rows);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id "));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("  5  Databases"));
        assert!(lines[3].starts_with("120  Algorithms"));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(100);
        let out = render(&["name"], &[vec![long]]);
        let last = out.lines().last().unwrap();
        assert_eq!(last.chars().count(), MAX_CELL_WIDTH);
        assert!(last.ends_with('…'));
    }

    #[test]
    fn missing_cells_render_dash() {
        let out = render(&["a", "b"], &[vec!["1".to_string()]]);
        assert!(out.lines().last().unwrap().ends_with('-'));
    }
}
