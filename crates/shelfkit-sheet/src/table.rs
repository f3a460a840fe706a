use indexmap::IndexMap;

/// A column-ordered table of text cells. Cells a row never set are missing,
/// which is distinct from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<IndexMap<String, String>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Appends `name` to the column list if it is not already there.
    pub fn add_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_owned());
        }
    }

    /// Appends a row. Columns not seen before are added in the row's order.
    pub fn push_row(&mut self, row: IndexMap<String, String>) {
        for key in row.keys() {
            self.add_column(key);
        }
        self.rows.push(row);
    }

    /// Removes a column and every cell in it.
    pub fn drop_column(&mut self, name: &str) {
        self.columns.retain(|c| c != name);
        for row in &mut self.rows {
            row.shift_remove(name);
        }
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Every row's value for `column`, in row order.
    #[must_use]
    pub fn column_values(&self, column: &str) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.get(column).map(String::as_str))
            .collect()
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [IndexMap<String, String>] {
        &mut self.rows
    }

    /// Rows as cell lists aligned with [`Self::columns`]; missing cells are
    /// empty strings.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .map(|c| row.get(c).map_or("", String::as_str))
                .collect()
        })
    }
}
