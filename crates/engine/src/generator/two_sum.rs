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

use std::collections::BTreeMap;

use algotrace_common::{AlgorithmId, InvalidInputError, Snapshot, StepKind, Trace, TraceBuilder};
use serde::{Deserialize, Serialize};

use super::{check_operand, check_values, TraceGenerator};
use crate::Limits;

/// One-pass hash-map two-sum returning the first pair of indices found.
///
/// Tracked variables: `array`, `target`, `index`, `current`, `complement`,
/// `map` (value to most recent index), `result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoSum {
    /// Values to search
    pub values: Vec<i64>,
    /// Sum the pair must add up to
    pub target: i64,
}

impl TwoSum {
    /// Find two indices of `values` whose elements add up to `target`
    pub fn new(values: Vec<i64>, target: i64) -> Self {
        Self { values, target }
    }
}

struct State<'a> {
    array: &'a [i64],
    target: i64,
    index: Option<usize>,
    current: Option<i64>,
    complement: Option<i64>,
    map: BTreeMap<i64, i64>,
    result: Option<Vec<i64>>,
}

impl State<'_> {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with("array", self.array.to_vec())
            .with("target", self.target)
            .with("index", self.index)
            .with("current", self.current)
            .with("complement", self.complement)
            .with("map", self.map.clone())
            .with("result", self.result.clone())
    }

    fn leave_loop(&mut self) {
        self.index = None;
        self.current = None;
        self.complement = None;
    }
}

impl TraceGenerator for TwoSum {
    const ID: AlgorithmId = AlgorithmId::TwoSum;

    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        check_values(Self::ID, &self.values, limits)?;
        check_operand(&self.values, self.target, limits)
    }

    fn record(&self) -> Trace {
        let target = self.target;
        let mut state = State {
            array: &self.values,
            target,
            index: None,
            current: None,
            complement: None,
            map: BTreeMap::new(),
            result: None,
        };
        let mut rec = TraceBuilder::new(
            Self::ID,
            state.snapshot(),
            format!("Start: find two numbers that add up to {target}"),
        );

        for (i, &num) in self.values.iter().enumerate() {
            let complement = target - num;
            state.index = Some(i);
            state.current = Some(num);
            state.complement = Some(complement);
            rec.record(
                StepKind::ComputeComplement,
                state.snapshot(),
                vec![i],
                format!("Checking index {i}: complement = {target} - {num} = {complement}"),
            );

            if let Some(&j) = state.map.get(&complement) {
                state.result = Some(vec![j, i as i64]);
                let j = j as usize;
                rec.record(
                    StepKind::MapLookupHit,
                    state.snapshot(),
                    vec![j, i],
                    format!("Found complement {complement} at index {j}!"),
                );

                state.leave_loop();
                return rec.finish(
                    state.snapshot(),
                    vec![j, i],
                    format!("Solution: indices [{j}, {i}]"),
                );
            }

            rec.record(
                StepKind::MapLookupMiss,
                state.snapshot(),
                vec![i],
                format!("Complement {complement} not found in the map"),
            );
            state.map.insert(num, i as i64);
            rec.record(
                StepKind::MapInsert,
                state.snapshot(),
                vec![i],
                format!("Store {num} -> {i} in the map"),
            );
        }

        state.leave_loop();
        rec.finish(state.snapshot(), Vec::new(), "No solution found")
    }
}
