//! Row module - raw survey responses as they arrive from a tabular file

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single cell of an uploaded table
///
/// Readers infer the narrowest type they can; anything else stays text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean cell
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Decimal number
    Float(f64),
    /// Free text
    Text(String),
}

impl CellValue {
    /// Infer a cell from raw text the way a dataframe reader would
    ///
    /// Blank text is empty, then booleans, integers, finite floats, otherwise text.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed {
            "true" | "True" | "TRUE" => return CellValue::Bool(true),
            "false" | "False" | "FALSE" => return CellValue::Bool(false),
            _ => {}
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return CellValue::Float(f);
            }
        }
        CellValue::Text(raw.to_string())
    }
}

impl From<CellValue> for Value {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Empty => Value::Null,
            CellValue::Bool(b) => Value::Bool(b),
            CellValue::Integer(i) => Value::Number(i.into()),
            // Non-finite floats have no JSON form
            CellValue::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
            CellValue::Text(s) => Value::String(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

/// One survey respondent: an ordered mapping of column name to cell value
///
/// Column names are whatever the source file used. No renaming or filtering
/// happens here; the oracle maps questionnaire fields onto the analysis schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateRow {
    cells: Map<String, Value>,
}

impl CandidateRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, keeping first-insertion order
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let cell: CellValue = value.into();
        self.cells.insert(column.into(), cell.into());
    }

    /// Builder-style variant of [`CandidateRow::insert`]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Get a cell by column name
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells.get(column)
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row has no columns
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.cells
    }
}

impl From<Map<String, Value>> for CandidateRow {
    fn from(cells: Map<String, Value>) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_cells() {
        assert_eq!(CellValue::infer(""), CellValue::Empty);
        assert_eq!(CellValue::infer("   "), CellValue::Empty);
        assert_eq!(CellValue::infer("42"), CellValue::Integer(42));
        assert_eq!(CellValue::infer("3.5"), CellValue::Float(3.5));
        assert_eq!(CellValue::infer("True"), CellValue::Bool(true));
        assert_eq!(CellValue::infer("NaN"), CellValue::Text("NaN".to_string()));
        assert_eq!(
            CellValue::infer("Ada Lovelace"),
            CellValue::Text("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn test_row_preserves_column_order() {
        let row = CandidateRow::new()
            .with("Full Name", "Ada")
            .with("Email Address", "ada@example.com")
            .with("Age", 36i64);

        let columns: Vec<_> = row.columns().collect();
        assert_eq!(columns, vec!["Full Name", "Email Address", "Age"]);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_row_serializes_as_flat_object() {
        let row = CandidateRow::new()
            .with("Name", "Grace")
            .with("Score", 4.5)
            .with("Notes", CellValue::Empty);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"Name":"Grace","Score":4.5,"Notes":null}"#);
    }

    #[test]
    fn test_row_deserializes_from_object() {
        let row: CandidateRow =
            serde_json::from_str(r#"{"What do you like doing best?":"Building things"}"#).unwrap();
        assert_eq!(
            row.get("What do you like doing best?"),
            Some(&Value::String("Building things".to_string()))
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn integers_infer_as_integers(i in any::<i64>()) {
                prop_assert_eq!(CellValue::infer(&i.to_string()), CellValue::Integer(i));
            }

            #[test]
            fn inferred_cells_always_have_json_form(raw in ".*") {
                let value: Value = CellValue::infer(&raw).into();
                prop_assert!(serde_json::to_string(&value).is_ok());
            }
        }
    }
}
