use crate::table::{VocabularyTable, WordRecord};

/// One filter pass over the table: the matching rows in rank order plus
/// the highlight toggle the caller passed in.
#[derive(Debug)]
pub struct FilterView<'a> {
    pub rows: Vec<&'a WordRecord>,
    pub match_count: usize,
    pub highlight_enabled: bool,
}

impl FilterView<'_> {
    /// Display highlight for one row; forced off while the toggle is off.
    /// Never changes the record's stored `is_known`.
    pub fn highlight(&self, record: &WordRecord) -> bool {
        self.highlight_enabled && record.is_known
    }

    /// Count line shown above the grid, e.g. "Showing 1,204 words"
    pub fn summary(&self) -> String {
        format!("Showing {} words", format_count(self.match_count))
    }
}

/// Select the rows whose word contains `search_term` as a case-insensitive
/// substring. An empty term matches every row. Matching is a stable filter:
/// rows come back in the table's rank order.
pub fn filter<'a>(
    table: &'a VocabularyTable,
    search_term: &str,
    highlight_enabled: bool,
) -> FilterView<'a> {
    let term = search_term.to_lowercase();

    let rows: Vec<&WordRecord> = if term.is_empty() {
        table.records().iter().collect()
    } else {
        table
            .records()
            .iter()
            .filter(|record| record.word.to_lowercase().contains(&term))
            .collect()
    };

    let match_count = rows.len();
    FilterView {
        rows,
        match_count,
        highlight_enabled,
    }
}

fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
