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

use algotrace_common::{AlgorithmId, InvalidInputError, StepKind, Trace, TraceBuilder};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{
    check_operand, check_values,
    two_pointer::{Flavor, WindowState},
    TraceGenerator,
};
use crate::Limits;

/// Two-pointer two-sum over the sorted values, collecting every unique value pair.
///
/// Tracked variables: `array` (sorted), `target`, `left`, `right`, `sum`, `pairs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoSumSorted {
    /// Values to search, in any order
    pub values: Vec<i64>,
    /// Sum each pair must add up to
    pub target: i64,
}

impl TwoSumSorted {
    /// Collect every unique pair of `values` adding up to `target`
    pub fn new(values: Vec<i64>, target: i64) -> Self {
        Self { values, target }
    }
}

impl TraceGenerator for TwoSumSorted {
    const ID: AlgorithmId = AlgorithmId::TwoSumSorted;

    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        check_values(Self::ID, &self.values, limits)?;
        check_operand(&self.values, self.target, limits)
    }

    fn record(&self) -> Trace {
        let mut sorted = self.values.clone();
        sorted.sort_unstable();
        let n = sorted.len();

        let mut state = WindowState::new(Flavor::Pairs, sorted, self.target);
        let mut rec = TraceBuilder::new(
            Self::ID,
            state.snapshot(),
            format!(
                "Start: sort the array and find every unique pair that sums to {}",
                self.target
            ),
        );

        state.scan(&mut rec, 0, n - 1);

        state.clear_window();
        let narrative = match state.found.len() {
            0 => "Complete! No pair found".to_string(),
            1 => "Complete! Found 1 unique pair".to_string(),
            count => format!(
                "Complete! Found {count} unique pairs: {}",
                state.found.iter().map(|pair| format!("[{}]", pair.iter().join(", "))).join(" ")
            ),
        };
        rec.finish(state.snapshot(), Vec::new(), narrative)
    }
}
