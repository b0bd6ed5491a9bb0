//! Cell values for backend tables.

use serde::{Deserialize, Serialize};

/// A single cell in a backend table.
///
/// Network tables are heterogeneous: numeric results sit next to textual
/// labels (bus ids, carrier names, timestamps) and missing entries, all in
/// the same column type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    /// Numeric view of the cell. Numeric strings count: the backend
    /// serializes some numbers through text, and those still format and
    /// plot as numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Null => None,
        }
    }

    /// Whether the cell carries information: anything but `Null` and
    /// numeric zero. The emptiness rule is about numeric zero, so
    /// `Text("0")` is informative.
    pub fn is_informative(&self) -> bool {
        match self {
            CellValue::Number(n) => *n != 0.0,
            CellValue::Text(_) => true,
            CellValue::Null => false,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn informative_rejects_null_and_numeric_zero() {
        assert!(!CellValue::Null.is_informative());
        assert!(!CellValue::Number(0.0).is_informative());
        assert!(!CellValue::Number(-0.0).is_informative());
        assert!(CellValue::Number(0.001).is_informative());
        assert!(CellValue::Text(String::new()).is_informative());
        assert!(CellValue::from("0").is_informative());
    }

    #[test]
    fn as_f64_parses_numeric_text() {
        assert_eq!(CellValue::Number(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::from(" 2.25 ").as_f64(), Some(2.25));
        assert_eq!(CellValue::from("AC").as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn decodes_untagged_json() {
        let column: Vec<CellValue> = serde_json::from_str("[1.5, \"Bus1\", null]").unwrap();
        assert_eq!(
            column,
            vec![
                CellValue::Number(1.5),
                CellValue::from("Bus1"),
                CellValue::Null
            ]
        );
    }
}
