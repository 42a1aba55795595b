use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use serde_json::Value;

use crate::error::{PacerError, Result};

/// One pipeline row: an ordered mapping from field name to value.
///
/// Runner records enter the pipeline as rows; every stage consumes and
/// produces rows, so projections and group outputs are rows as well.
pub type Row = serde_json::Map<String, Value>;

/// Address of a field inside a row. Dots descend into nested objects, so
/// `fastest.name` reads `name` from the object stored under `fastest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        FieldPath(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn resolve<'a>(&self, row: &'a Row) -> Option<&'a Value> {
        let mut segments = self.0.split('.');
        let mut current = row.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn resolve_mut<'a>(&self, row: &'a mut Row) -> Option<&'a mut Value> {
        let mut segments = self.0.split('.');
        let mut current = row.get_mut(segments.next()?)?;
        for segment in segments {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        FieldPath::new(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        FieldPath(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn is_descending(self) -> bool {
        matches!(self, SortOrder::Descending)
    }
}

/// Named text parameters supplied by the caller alongside a query name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Like [`QueryParams::get`], but a missing parameter is an error.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| PacerError::MissingParameter(name.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn resolves_nested_paths() {
        let row = row(json!({"fastest": {"name": "Asha", "city": "Pune"}, "category": "10K"}));

        assert_eq!(FieldPath::from("category").resolve(&row), Some(&json!("10K")));
        assert_eq!(FieldPath::from("fastest.name").resolve(&row), Some(&json!("Asha")));
        assert_eq!(FieldPath::from("fastest.age").resolve(&row), None);
        assert_eq!(FieldPath::from("category.name").resolve(&row), None);
    }

    #[test]
    fn require_reports_missing_parameter() {
        let params = QueryParams::new().with("city", "Pune");
        assert_eq!(params.require("city").unwrap(), "Pune");
        assert!(matches!(
            params.require("category"),
            Err(PacerError::MissingParameter(name)) if name == "category"
        ));
    }
}
