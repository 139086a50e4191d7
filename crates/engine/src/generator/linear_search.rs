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

use algotrace_common::{AlgorithmId, InvalidInputError, Snapshot, StepKind, Trace, TraceBuilder};
use serde::{Deserialize, Serialize};

use super::{check_operand, check_values, TraceGenerator};
use crate::Limits;

/// Left-to-right scan that stops at the first element equal to the target.
///
/// The target is always explicit. Callers that want a random target pick it
/// beforehand through [`crate::OperandPicker`], which can be seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearSearch {
    /// Values to scan
    pub values: Vec<i64>,
    /// Value to look for
    pub target: i64,
}

impl LinearSearch {
    /// Search `values` for `target`
    pub fn new(values: Vec<i64>, target: i64) -> Self {
        Self { values, target }
    }
}

impl TraceGenerator for LinearSearch {
    const ID: AlgorithmId = AlgorithmId::LinearSearch;

    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        check_values(Self::ID, &self.values, limits)?;
        check_operand(&self.values, self.target, limits)
    }

    fn record(&self) -> Trace {
        let target = self.target;
        let snapshot = |index: Option<usize>, found_at: Option<usize>| {
            Snapshot::new()
                .with("array", self.values.clone())
                .with("target", target)
                .with("index", index)
                .with("found_at", found_at)
        };

        let mut rec =
            TraceBuilder::new(Self::ID, snapshot(None, None), format!("Start: look for {target}"));

        let mut found_at = None;
        for (i, &value) in self.values.iter().enumerate() {
            rec.record(
                StepKind::Compare,
                snapshot(Some(i), None),
                vec![i],
                format!("Checking index {i}: is {value} equal to {target}?"),
            );
            if value == target {
                found_at = Some(i);
                rec.record(
                    StepKind::MatchFound,
                    snapshot(Some(i), found_at),
                    vec![i],
                    format!("Found {target} at index {i}"),
                );
                break;
            }
        }

        match found_at {
            Some(i) => rec.finish(snapshot(None, found_at), vec![i], format!("Return index {i}")),
            None => rec.finish(
                snapshot(None, None),
                Vec::new(),
                format!("{target} is not in the array, return -1"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_first_match() {
        let trace = LinearSearch::new(vec![4, 7, 7, 1], 7).record();

        assert_eq!(trace.count(StepKind::Compare), 2);
        assert_eq!(trace.count(StepKind::MatchFound), 1);
        assert_eq!(trace.final_step().snapshot().int("found_at"), Some(1));
        assert_eq!(trace.final_step().highlights(), &[1]);
    }

    #[test]
    fn test_missing_target_scans_everything() {
        let trace = LinearSearch::new(vec![4, 7, 1], 3).record();

        assert_eq!(trace.count(StepKind::Compare), 3);
        assert_eq!(trace.count(StepKind::MatchFound), 0);
        assert!(trace.final_step().snapshot().is_null("found_at"));
    }
}
