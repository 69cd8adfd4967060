//! Plain-text table for the license list.

/// A bordered table with a header row, in the ASCII style of the license list.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    /// Create a table with the given column headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
        let widths = headers.iter().map(|h| h.chars().count()).collect();

        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    /// Append a row. Extra cells beyond the header count are dropped.
    pub fn add_row(&mut self, cells: &[&str]) {
        let mut row = Vec::with_capacity(self.headers.len());
        for (i, width) in self.widths.iter_mut().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            *width = (*width).max(cell.chars().count());
            row.push(cell.to_string());
        }
        self.rows.push(row);
    }

    /// Render the table, one trailing newline included.
    pub fn render(&self) -> String {
        let border = self.border();
        let mut out = String::new();

        out.push_str(&border);
        out.push_str(&self.line(&self.headers));
        out.push_str(&border);
        for row in &self.rows {
            out.push_str(&self.line(row));
        }
        out.push_str(&border);
        out
    }

    fn border(&self) -> String {
        let mut s = String::from("+");
        for width in &self.widths {
            s.push_str(&"-".repeat(width + 2));
            s.push('+');
        }
        s.push('\n');
        s
    }

    fn line(&self, cells: &[String]) -> String {
        let mut s = String::from("|");
        for (cell, width) in cells.iter().zip(&self.widths) {
            let pad = width - cell.chars().count();
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(pad + 1));
            s.push('|');
        }
        s.push('\n');
        s
    }
}
