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

//! Snapshot replay verifier
//!
//! [`verify`] checks that a trace is a faithful recording of its algorithm.
//! Starting from the initial snapshot, every later snapshot is re-derived by
//! applying the single operation its step kind names to the previous
//! snapshot, and must match what was recorded. Conditional kinds are only
//! accepted when their condition holds on the previous state, so a trace that
//! skips a swap, misses a match or stops early is rejected as well.
//!
//! Operands the previous state cannot determine, such as the value of a newly
//! created list node, are taken from the recorded snapshot itself.

mod array;
mod linked_list;
mod transition;
mod two_sum;
mod window;

use algotrace_common::{AlgorithmId, Snapshot, StepKind, Trace};
use thiserror::Error;
use tracing::debug;

use transition::Transition;

/// A trace that is not a faithful recording of its algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// Sequence numbers are not 0, 1, 2, ...
    #[error("step {index} carries sequence number {sequence}")]
    BadSequence {
        /// Position of the step
        index: usize,
        /// Recorded sequence number
        sequence: usize,
    },

    /// The trace does not start with initialize or end with a single complete
    #[error("step {index}: {kind} is misplaced")]
    BadBoundary {
        /// Position of the step
        index: usize,
        /// Misplaced kind
        kind: StepKind,
    },

    /// A kind the algorithm never records
    #[error("step {index}: {kind} is not a step of {algorithm}")]
    ForeignKind {
        /// Position of the step
        index: usize,
        /// Algorithm of the trace
        algorithm: AlgorithmId,
        /// Offending kind
        kind: StepKind,
    },

    /// A tracked variable that is absent or has the wrong type
    #[error("step {index}: variable {name:?} is missing or has the wrong type")]
    MissingVariable {
        /// Position of the step whose input lacks the variable
        index: usize,
        /// Variable name
        name: String,
    },

    /// A step whose operation is not possible from the previous state
    #[error("step {index}: {kind} cannot follow {previous}: {reason}")]
    IllegalTransition {
        /// Position of the step
        index: usize,
        /// Kind of the previous step
        previous: StepKind,
        /// Kind of the step
        kind: StepKind,
        /// What the previous state violates
        reason: String,
    },

    /// A recorded snapshot that differs from the replayed one
    #[error("step {index}: snapshot after {kind} is {actual}, replay gives {expected}")]
    Diverged {
        /// Position of the step
        index: usize,
        /// Kind of the step
        kind: StepKind,
        /// Replayed snapshot
        expected: Box<Snapshot>,
        /// Recorded snapshot
        actual: Box<Snapshot>,
    },
}

/// Variables every snapshot of `algorithm` tracks.
pub fn tracked_variables(algorithm: AlgorithmId) -> &'static [&'static str] {
    match algorithm {
        AlgorithmId::BubbleSort => &["array", "pass", "index", "sorted", "comparisons", "swaps"],
        AlgorithmId::LinearSearch => &["array", "target", "index", "found_at"],
        AlgorithmId::TwoSum => {
            &["array", "target", "index", "current", "complement", "map", "result"]
        }
        AlgorithmId::TwoSumSorted => &["array", "target", "left", "right", "sum", "pairs"],
        AlgorithmId::ThreeSum => &["array", "anchor", "left", "right", "sum", "triplets"],
        AlgorithmId::LinkedListInsertHead => &[
            "list",
            "node_ids",
            "head",
            "new_node_id",
            "new_node_value",
            "new_node_next",
        ],
        AlgorithmId::LinkedListInsertTail => &[
            "list",
            "node_ids",
            "head",
            "new_node_id",
            "new_node_value",
            "new_node_next",
            "cursor",
        ],
    }
}

/// Replay `trace` from its initial snapshot and report the first inconsistency.
pub fn verify(trace: &Trace) -> Result<(), ReplayError> {
    let algorithm = trace.algorithm();
    let last = trace.len().saturating_sub(1);

    for (index, step) in trace.iter().enumerate() {
        if step.sequence() != index {
            return Err(ReplayError::BadSequence { index, sequence: step.sequence() });
        }

        let kind = step.kind();
        if !algorithm.allows(kind) {
            return Err(ReplayError::ForeignKind { index, algorithm, kind });
        }
        let misplaced = match kind {
            StepKind::Initialize => index != 0,
            StepKind::Complete => index != last,
            _ => index == 0 || index == last,
        };
        if misplaced {
            return Err(ReplayError::BadBoundary { index, kind });
        }
    }
    if let Some(step) = trace.first().filter(|_| trace.len() < 2) {
        return Err(ReplayError::BadBoundary { index: 0, kind: step.kind() });
    }

    if let Some(first) = trace.first() {
        for name in tracked_variables(algorithm) {
            if !first.snapshot().contains(name) {
                return Err(ReplayError::MissingVariable { index: 0, name: name.to_string() });
            }
        }
    }

    for (index, pair) in trace.windows(2).enumerate() {
        let (prev, step) = (&pair[0], &pair[1]);
        let transition = Transition {
            index: index + 1,
            previous: prev.kind(),
            kind: step.kind(),
            before: prev.snapshot(),
            after: step.snapshot(),
        };

        let expected = replay_step(algorithm, &transition)?;
        if expected != *step.snapshot() {
            return Err(ReplayError::Diverged {
                index: index + 1,
                kind: step.kind(),
                expected: Box::new(expected),
                actual: Box::new(step.snapshot().clone()),
            });
        }
    }

    debug!(%algorithm, steps = trace.len(), "Replay verified");
    Ok(())
}

fn replay_step(algorithm: AlgorithmId, t: &Transition<'_>) -> Result<Snapshot, ReplayError> {
    match algorithm {
        AlgorithmId::BubbleSort => array::bubble_sort(t),
        AlgorithmId::LinearSearch => array::linear_search(t),
        AlgorithmId::TwoSum => two_sum::two_sum(t),
        AlgorithmId::TwoSumSorted => window::two_pointer(t, false),
        AlgorithmId::ThreeSum => window::two_pointer(t, true),
        AlgorithmId::LinkedListInsertHead => linked_list::insert(t, false),
        AlgorithmId::LinkedListInsertTail => linked_list::insert(t, true),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use algotrace_common::{Step, TraceBuilder};

    use super::*;
    use crate::{Algorithm, BubbleSort, InsertTail, LinearSearch, ThreeSum, TwoSum, TwoSumSorted};

    /// Re-record `trace`, letting `edit` replace a step's kind and snapshot.
    fn rebuild(
        trace: &Trace,
        edit: impl Fn(usize, &Step) -> Option<(StepKind, Snapshot)>,
    ) -> Trace {
        let parts: Vec<_> = trace
            .iter()
            .enumerate()
            .map(|(i, step)| {
                edit(i, step).unwrap_or_else(|| (step.kind(), step.snapshot().clone()))
            })
            .collect();

        let mut rec = TraceBuilder::new(trace.algorithm(), parts[0].1.clone(), "start");
        for (kind, snapshot) in &parts[1..parts.len() - 1] {
            rec.record(*kind, snapshot.clone(), Vec::new(), "step");
        }
        rec.finish(parts[parts.len() - 1].1.clone(), Vec::new(), "done")
    }

    fn generate(algorithm: Algorithm) -> Trace {
        algorithm.generate().unwrap()
    }

    #[test]
    fn test_generated_traces_replay() {
        let traces = [
            generate(Algorithm::BubbleSort(BubbleSort::new(vec![5, 2, 8, 1, 9, 3, 7, 4, 6]))),
            generate(Algorithm::LinearSearch(LinearSearch::new(vec![4, 2, 7], 7))),
            generate(Algorithm::LinearSearch(LinearSearch::new(vec![4, 2, 7], 5))),
            generate(Algorithm::TwoSum(TwoSum::new(vec![2, 7, 11, 15], 9))),
            generate(Algorithm::TwoSum(TwoSum::new(vec![1, 2], 9))),
            generate(Algorithm::TwoSumSorted(TwoSumSorted::new(vec![1, 1, 2, 2, 3, 3], 4))),
            generate(Algorithm::ThreeSum(ThreeSum::new(vec![-1, 0, 1, 2, -1, -4]))),
            generate(Algorithm::LinkedListInsertTail(InsertTail::new(vec![], 3))),
            generate(Algorithm::LinkedListInsertTail(InsertTail::new(vec![1, 2, 3], 4))),
        ];

        for trace in &traces {
            assert_eq!(verify(trace), Ok(()), "{}", trace.algorithm());
        }
    }

    #[test]
    fn test_skipped_swap_is_rejected() {
        let trace = generate(Algorithm::BubbleSort(BubbleSort::new(vec![2, 1])));
        // initialize, compare, swap, pass_complete, complete
        let tampered = rebuild(&trace, |i, _| {
            (i == 2).then(|| (StepKind::Compare, trace[1].snapshot().clone()))
        });

        assert!(matches!(
            verify(&tampered),
            Err(ReplayError::IllegalTransition { index: 2, kind: StepKind::Compare, .. })
        ));
    }

    #[test]
    fn test_altered_snapshot_diverges() {
        let trace = generate(Algorithm::TwoSum(TwoSum::new(vec![2, 7, 11, 15], 9)));
        assert_eq!(trace[3].kind(), StepKind::MapInsert);
        let tampered = rebuild(&trace, |i, step| {
            let wrong: BTreeMap<i64, i64> = BTreeMap::from([(2, 5)]);
            (i == 3).then(|| (step.kind(), step.snapshot().clone().with("map", wrong)))
        });

        assert!(matches!(verify(&tampered), Err(ReplayError::Diverged { index: 3, .. })));
    }

    #[test]
    fn test_truncated_trace_is_rejected() {
        let trace = generate(Algorithm::ThreeSum(ThreeSum::new(vec![-1, 0, 1, 2, -1, -4])));
        let mut rec = TraceBuilder::new(
            trace.algorithm(),
            trace[0].snapshot().clone(),
            trace[0].narrative(),
        );
        rec.record(StepKind::FixAnchor, trace[1].snapshot().clone(), Vec::new(), "anchor");
        let truncated = rec.finish(trace.final_step().snapshot().clone(), Vec::new(), "done");

        assert!(matches!(
            verify(&truncated),
            Err(ReplayError::IllegalTransition { index: 2, kind: StepKind::Complete, .. })
        ));
    }

    #[test]
    fn test_foreign_kind_is_rejected() {
        let trace = generate(Algorithm::LinearSearch(LinearSearch::new(vec![1], 1)));
        let tampered =
            rebuild(&trace, |i, step| (i == 1).then(|| (StepKind::Swap, step.snapshot().clone())));

        assert_eq!(
            verify(&tampered),
            Err(ReplayError::ForeignKind {
                index: 1,
                algorithm: AlgorithmId::LinearSearch,
                kind: StepKind::Swap
            })
        );
    }

    #[test]
    fn test_missing_variable_is_reported() {
        let mut rec = TraceBuilder::new(
            AlgorithmId::BubbleSort,
            Snapshot::new().with("array", vec![1]),
            "start",
        );
        rec.record(StepKind::PassComplete, Snapshot::new(), Vec::new(), "pass");
        let trace = rec.finish(Snapshot::new(), Vec::new(), "done");

        assert!(matches!(verify(&trace), Err(ReplayError::MissingVariable { index: 0, .. })));
    }
}
