//! Format independent tabular report model

use super::{ReportLayout, Reportable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Localized header label
    pub label: &'static str,
    /// Fixed width on the PDF page
    pub width_mm: f32,
}

impl Column {
    pub const fn new(label: &'static str, width_mm: f32) -> Self {
        Self { label, width_mm }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Number(f64),
    Empty,
}

impl Cell {
    /// Text shown for the cell. Missing values are blank.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(i) => i.to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Integer(i)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub file_stem: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(layout: &ReportLayout) -> Self {
        Self {
            title: layout.title.to_string(),
            file_stem: layout.file_stem.to_string(),
            columns: layout.columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn from_views<E: Reportable>(views: &[E::View]) -> Self {
        let mut table = Self::new(&E::LAYOUT);
        table.rows = views.iter().map(E::row).collect();
        table
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_values_render_blank() {
        let missing: Option<String> = None;
        assert_eq!(Cell::from(missing), Cell::Empty);
        assert_eq!(Cell::Empty.display(), "");
        assert_eq!(Cell::from(Some(7_i64)).display(), "7");
        assert_eq!(Cell::from(12.5).display(), "12.5");
    }
}
