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

use super::{check_values, TraceGenerator};
use crate::Limits;

/// Bubble sort without early exit.
///
/// Tracked variables: `array`, `pass`, `index`, `sorted` (positions fixed so
/// far, in the order they were fixed), `comparisons`, `swaps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleSort {
    /// Values to sort
    pub values: Vec<i64>,
}

impl BubbleSort {
    /// Sort `values`
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }
}

struct State {
    array: Vec<i64>,
    pass: Option<usize>,
    index: Option<usize>,
    sorted: Vec<i64>,
    comparisons: usize,
    swaps: usize,
}

impl State {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with("array", self.array.clone())
            .with("pass", self.pass)
            .with("index", self.index)
            .with("sorted", self.sorted.clone())
            .with("comparisons", self.comparisons)
            .with("swaps", self.swaps)
    }
}

impl TraceGenerator for BubbleSort {
    const ID: AlgorithmId = AlgorithmId::BubbleSort;

    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        check_values(Self::ID, &self.values, limits)
    }

    fn record(&self) -> Trace {
        let n = self.values.len();
        let mut state = State {
            array: self.values.clone(),
            pass: None,
            index: None,
            sorted: Vec::new(),
            comparisons: 0,
            swaps: 0,
        };
        let mut rec = TraceBuilder::new(
            Self::ID,
            state.snapshot(),
            format!("Start: sort {n} values by repeatedly swapping adjacent pairs"),
        );

        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                let (a, b) = (state.array[j], state.array[j + 1]);
                state.pass = Some(i);
                state.index = Some(j);
                state.comparisons += 1;
                rec.record(
                    StepKind::Compare,
                    state.snapshot(),
                    vec![j, j + 1],
                    format!("Comparing {a} and {b}"),
                );

                if a > b {
                    state.array.swap(j, j + 1);
                    state.swaps += 1;
                    rec.record(
                        StepKind::Swap,
                        state.snapshot(),
                        vec![j, j + 1],
                        format!("Swapping {a} and {b}"),
                    );
                }
            }

            let fixed = n - 1 - i;
            state.sorted.push(fixed as i64);
            state.index = None;
            rec.record(
                StepKind::PassComplete,
                state.snapshot(),
                vec![fixed],
                format!("Pass {} complete: position {fixed} holds {}", i + 1, state.array[fixed]),
            );
        }

        state.sorted.push(0);
        state.pass = None;
        state.index = None;
        let narrative = format!(
            "Sorting complete! {} comparisons, {} swaps",
            state.comparisons, state.swaps
        );
        rec.finish(state.snapshot(), Vec::new(), narrative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_precedes_every_swap() {
        let trace = BubbleSort::new(vec![5, 2, 8, 1]).record();

        for (prev, step) in trace.iter().zip(trace.iter().skip(1)) {
            if step.kind() == StepKind::Swap {
                assert_eq!(prev.kind(), StepKind::Compare);
                assert_eq!(prev.highlights(), step.highlights());
            }
        }
    }

    #[test]
    fn test_no_swaps_on_sorted_input() {
        let trace = BubbleSort::new(vec![1, 2, 3]).record();

        assert_eq!(trace.count(StepKind::Compare), 3);
        assert_eq!(trace.count(StepKind::Swap), 0);
        assert_eq!(trace.count(StepKind::PassComplete), 2);
        assert_eq!(trace.final_step().snapshot().list("sorted"), Some(&[2, 1, 0][..]));
    }

    #[test]
    fn test_single_value() {
        let trace = BubbleSort::new(vec![42]).record();

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.final_step().snapshot().list("array"), Some(&[42][..]));
        assert_eq!(trace.final_step().snapshot().list("sorted"), Some(&[0][..]));
    }

    #[test]
    fn test_narratives_come_from_values() {
        let trace = BubbleSort::new(vec![2, 1]).record();

        assert_eq!(trace[1].narrative(), "Comparing 2 and 1");
        assert_eq!(trace[2].narrative(), "Swapping 2 and 1");
        assert_eq!(trace[1].snapshot().list("array"), Some(&[2, 1][..]));
        assert_eq!(trace[2].snapshot().list("array"), Some(&[1, 2][..]));
    }
}
