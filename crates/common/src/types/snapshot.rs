// algotrace - Algorithm Trace Engine
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::{collections::BTreeMap, fmt};

use itertools::Itertools;
use serde::Serialize;

/// Value of one tracked variable at one instant.
///
/// Serialized untagged for display and JSON output only; an empty grid and an
/// empty list look the same on the wire, so values are never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Variable not (yet, or any longer) in scope, e.g. a pointer before initialization
    Null,
    /// Scalar integer: an element, an index, an accumulator
    Int(i64),
    /// Array contents or a list of indices
    List(Vec<i64>),
    /// Collected results, e.g. triplets
    Grid(Vec<Vec<i64>>),
    /// Hash map from value to index
    Map(BTreeMap<i64, i64>),
}

impl Value {
    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<Vec<i64>> for Value {
    fn from(value: Vec<i64>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<Vec<i64>>> for Value {
    fn from(value: Vec<Vec<i64>>) -> Self {
        Self::Grid(value)
    }
}

impl From<BTreeMap<i64, i64>> for Value {
    fn from(value: BTreeMap<i64, i64>) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int(i) => write!(f, "{i}"),
            Self::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            Self::Grid(rows) => {
                let mut rows = rows.iter().map(|row| format!("[{}]", row.iter().join(", ")));
                write!(f, "[{}]", rows.join(", "))
            }
            Self::Map(map) => {
                write!(f, "{{{}}}", map.iter().map(|(k, v)| format!("{k}: {v}")).join(", "))
            }
        }
    }
}

/// Full copy of every tracked variable at one instant of an algorithm run.
///
/// Snapshots own their data. A later mutation of the structures the generator
/// works on can never reach a snapshot that has already been recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    vars: BTreeMap<String, Value>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or overwrite a variable
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Raw access to a variable
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Whether the variable is tracked at all (a `Null` value counts as tracked)
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Integer variable; `None` if missing, `Null` or of another type
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.vars.get(name) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Integer variable used as an index
    pub fn index(&self, name: &str) -> Option<usize> {
        self.int(name).and_then(|i| usize::try_from(i).ok())
    }

    /// List variable
    pub fn list(&self, name: &str) -> Option<&[i64]> {
        match self.vars.get(name) {
            Some(Value::List(items)) => Some(items),
            _ => None,
        }
    }

    /// Grid variable
    pub fn grid(&self, name: &str) -> Option<&[Vec<i64>]> {
        match self.vars.get(name) {
            Some(Value::Grid(rows)) => Some(rows),
            _ => None,
        }
    }

    /// Map variable
    pub fn map(&self, name: &str) -> Option<&BTreeMap<i64, i64>> {
        match self.vars.get(name) {
            Some(Value::Map(map)) => Some(map),
            _ => None,
        }
    }

    /// Whether the variable is present and `Null`
    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.vars.get(name), Some(Value::Null))
    }

    /// Iterate variables in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of tracked variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variable is tracked
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().map(|(k, v)| format!("{k} = {v}")).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_an_independent_copy() {
        let mut array = vec![3, 1, 2];
        let snapshot = Snapshot::new().with("array", array.clone());
        array.swap(0, 1);

        assert_eq!(snapshot.list("array"), Some(&[3, 1, 2][..]));
    }

    #[test]
    fn test_typed_accessors() {
        let snapshot = Snapshot::new()
            .with("i", 2usize)
            .with("left", Option::<i64>::None)
            .with("triplets", vec![vec![-1, 0, 1]]);

        assert_eq!(snapshot.int("i"), Some(2));
        assert_eq!(snapshot.index("i"), Some(2));
        assert!(snapshot.is_null("left"));
        assert_eq!(snapshot.int("left"), None);
        assert!(snapshot.contains("left"));
        assert!(!snapshot.contains("right"));
        assert_eq!(snapshot.grid("triplets").map(<[_]>::len), Some(1));
        assert_eq!(snapshot.list("i"), None);
    }

    #[test]
    fn test_display_is_name_ordered() {
        let mut map = BTreeMap::new();
        map.insert(2, 0);
        let snapshot = Snapshot::new().with("target", 9i64).with("map", map);

        assert_eq!(snapshot.to_string(), "map = {2: 0}, target = 9");
    }

    #[test]
    fn test_grid_display() {
        let snapshot = Snapshot::new().with("pairs", vec![vec![2, 7], vec![-1, 0, 1]]);

        assert_eq!(snapshot.to_string(), "pairs = [[2, 7], [-1, 0, 1]]");
        assert_eq!(Value::Grid(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_json_shape_is_untagged() {
        let snapshot = Snapshot::new().with("array", vec![1, 2]).with("index", Option::<i64>::None);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json, serde_json::json!({ "array": [1, 2], "index": null }));
    }
}
