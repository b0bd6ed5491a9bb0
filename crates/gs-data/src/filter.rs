//! Empty-column filtering.

use crate::{CellValue, Dataset};

/// Drop columns that carry no informative value.
///
/// A column survives iff at least one cell is neither null nor numeric
/// zero; surviving columns keep their order. Pure and idempotent. The
/// filter knows nothing about `snapshots` — an all-null axis would be
/// dropped like any other column, so varying-path callers detach the axis
/// first ([`Dataset::detach_axis`]) and reattach it afterwards.
pub fn filter_empty_columns(dataset: &Dataset) -> Dataset {
    let mut filtered = Dataset::new();
    for (name, column) in dataset.iter() {
        if column.iter().any(CellValue::is_informative) {
            filtered.insert(name, column.clone());
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Column;

    fn dataset(entries: &[(&str, &[CellValue])]) -> Dataset {
        entries
            .iter()
            .map(|(name, cells)| (name.to_string(), cells.to_vec()))
            .collect()
    }

    #[test]
    fn keeps_only_columns_with_informative_values() {
        let input = dataset(&[
            ("a", &[0.0.into(), 0.0.into(), CellValue::Null]),
            ("b", &[0.0.into(), 1.0.into(), 0.0.into()]),
            ("c", &[CellValue::Null, CellValue::Null, CellValue::Null]),
        ]);

        let filtered = filter_empty_columns(&input);
        let keys: Vec<&str> = filtered.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, ["b"]);
        assert_eq!(
            filtered.get("b"),
            Some(&vec![0.0.into(), 1.0.into(), 0.0.into()] as &Column)
        );
    }

    #[test]
    fn zero_text_is_not_sparse() {
        let input = dataset(&[("flag", &["0".into(), "0".into()])]);
        assert_eq!(filter_empty_columns(&input).len(), 1);
    }

    #[test]
    fn empty_dataset_stays_empty() {
        assert_eq!(filter_empty_columns(&Dataset::new()), Dataset::new());
    }

    #[test]
    fn is_idempotent() {
        let input = dataset(&[
            ("keep", &[2.0.into()]),
            ("drop", &[0.0.into()]),
        ]);
        let once = filter_empty_columns(&input);
        let twice = filter_empty_columns(&once);
        assert_eq!(once, twice);
    }
}
