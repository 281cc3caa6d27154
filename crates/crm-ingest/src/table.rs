use crm_model::SourceRecord;

/// An export held in memory as named columns.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// Display label of the input (usually its path).
    pub source_name: String,
    pub headers: Vec<String>,
    /// Rows padded to the header width.
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(source_name: &str, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source_name: source_name.to_string(),
            headers,
            rows,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell values of a column, `None` for empty cells.
    ///
    /// Returns `None` when the column is absent.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).filter(|v| !v.is_empty()))
                .collect(),
        )
    }

    /// Count of non-empty cells in a column (0 when absent).
    pub fn filled_count(&self, name: &str) -> usize {
        self.column(name)
            .map(|values| values.iter().filter(|value| value.is_some()).count())
            .unwrap_or(0)
    }

    /// Rows as source records. Empty cells become null values.
    ///
    /// When a header is repeated, the first column with that name wins.
    pub fn records(&self) -> Vec<SourceRecord> {
        self.rows
            .iter()
            .map(|row| {
                let mut record = SourceRecord::new();
                for (header, value) in self.headers.iter().zip(row) {
                    if header.is_empty() || record.contains(header) {
                        continue;
                    }
                    let value = (!value.is_empty()).then(|| value.clone());
                    record.insert(header.clone(), value);
                }
                record
            })
            .collect()
    }
}
