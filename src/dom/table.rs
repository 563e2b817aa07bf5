use scraper::ElementRef;

const SEPARATOR_CELL: &str = "---";

/// A table lifted out of the DOM as rows of trimmed cell text
///
/// The first row is treated as the header. Rows keep exactly the cells they
/// had in the markup, so ragged tables stay ragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Collect every `tr` below `table` and the `th`/`td` cells below each row
    pub fn from_element(table: ElementRef<'_>) -> Self {
        let rows = table
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "tr")
            .map(|row| {
                row.descendants()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| matches!(el.value().name(), "th" | "td"))
                    .map(cell_text)
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Build a table directly from cell text
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns announced by the header row
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as a pipe table, or `None` when the table has no rows at all
    pub fn to_text(&self) -> Option<String> {
        let (header, body) = self.rows.split_first()?;

        let separator = vec![SEPARATOR_CELL; header.len()];
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format_row(header));
        lines.push(format_row(&separator));
        lines.extend(body.iter().map(|row| format_row(row)));

        Some(lines.join("\n"))
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn format_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined = cells.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" | ");
    format!("| {} |", joined)
}
