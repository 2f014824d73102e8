// ABOUTME: ResultTable type holding extraction output as ordered rows under fixed columns.
// ABOUTME: Renders as aligned text for terminals or as CSV for saved exports.

use crate::record::Tabular;

/// Extraction output as ordered rows under a fixed set of columns.
///
/// Row order matches the document order of the source markup. A fetch or
/// extraction that found nothing still produces a table with its full
/// column set and zero rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    columns: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Builds a table from extracted records, preserving their order.
    pub fn from_records<R: Tabular>(records: Vec<R>) -> Self {
        Self {
            columns: R::COLUMNS,
            rows: records.into_iter().map(Tabular::into_row).collect(),
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table as aligned plain text with a header rule.
    pub fn render_text(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        let mut push_line = |cells: Vec<String>| {
            let mut line = String::new();
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                let printed = cell.chars().count();
                for _ in printed..widths[i] {
                    line.push(' ');
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        };

        push_line(self.columns.iter().map(|c| c.to_string()).collect());
        push_line(widths.iter().map(|w| "-".repeat(*w)).collect());
        for row in &self.rows {
            push_line(row.clone());
        }
        out
    }

    /// Serializes the table as CSV with the column headers as the first record.
    pub fn to_csv(&self) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        // Writing to an in-memory Vec cannot fail, and every row has the
        // same arity as the header by construction.
        wtr.write_record(self.columns)
            .expect("failed to write CSV header");
        for row in &self.rows {
            wtr.write_record(row).expect("failed to write CSV row");
        }
        let bytes = wtr.into_inner().expect("failed to flush CSV writer");
        String::from_utf8(bytes).expect("CSV output was not UTF-8")
    }
}
