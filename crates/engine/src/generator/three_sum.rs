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
use serde::{Deserialize, Serialize};

use super::{
    check_values,
    two_pointer::{Flavor, WindowState},
    TraceGenerator,
};
use crate::Limits;

/// Sort, then fix each anchor and close a two-pointer window against zero.
///
/// An anchor equal to its predecessor in the sorted array emits no steps at
/// all, so every triplet appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeSum {
    /// Values to search, in any order
    pub values: Vec<i64>,
}

impl ThreeSum {
    /// Collect every unique triplet of `values` summing to zero
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }
}

impl TraceGenerator for ThreeSum {
    const ID: AlgorithmId = AlgorithmId::ThreeSum;

    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        check_values(Self::ID, &self.values, limits)
    }

    fn record(&self) -> Trace {
        let mut sorted = self.values.clone();
        sorted.sort_unstable();
        let n = sorted.len();

        let mut state = WindowState::new(Flavor::Triplets, sorted, 0);
        let mut rec = TraceBuilder::new(
            Self::ID,
            state.snapshot(),
            "Start: sort the array and find every unique triplet that sums to 0",
        );

        for i in 0..n - 2 {
            if i > 0 && state.array[i] == state.array[i - 1] {
                continue;
            }

            state.anchor = Some(i);
            state.clear_window();
            rec.record(
                StepKind::FixAnchor,
                state.snapshot(),
                vec![i],
                format!("Fix anchor nums[{i}] = {}", state.array[i]),
            );
            state.scan(&mut rec, i + 1, n - 1);
        }

        state.anchor = None;
        state.clear_window();
        let narrative = match state.found.len() {
            1 => "Complete! Found 1 unique triplet".to_string(),
            count => format!("Complete! Found {count} unique triplets"),
        };
        rec.finish(state.snapshot(), Vec::new(), narrative)
    }
}
