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

use std::ops::Deref;

use serde::Serialize;
use tracing::trace;

use crate::{AlgorithmId, Snapshot, Step, StepKind};

/// The complete, ordered, immutable sequence of steps of one algorithm run.
///
/// A trace can only be produced by [`TraceBuilder`], which guarantees that it
/// starts with an [`StepKind::Initialize`] step, ends with the single
/// [`StepKind::Complete`] step, and numbers its steps 0, 1, 2, ... There is
/// no mutable access to the steps once the trace exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    algorithm: AlgorithmId,
    steps: Vec<Step>,
}

impl Deref for Trace {
    type Target = [Step];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl Trace {
    /// Algorithm this trace was generated for
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Steps in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The final step, holding the result
    pub fn final_step(&self) -> &Step {
        // A builder always records a complete step before handing the trace out.
        &self.steps[self.steps.len() - 1]
    }

    /// Iterator over the kinds, in order
    pub fn kinds(&self) -> impl Iterator<Item = StepKind> + '_ {
        self.steps.iter().map(Step::kind)
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.kinds().filter(|k| *k == kind).count()
    }

    /// Convert trace to serde_json::Value for machine-readable output
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only recorder a generator uses while it runs an algorithm.
///
/// The initialize step is recorded on construction and the complete step by
/// [`TraceBuilder::finish`], which consumes the builder. Everything in between
/// goes through [`TraceBuilder::record`].
#[derive(Debug)]
pub struct TraceBuilder {
    algorithm: AlgorithmId,
    steps: Vec<Step>,
}

impl TraceBuilder {
    /// Start a trace with its initialize step
    pub fn new(algorithm: AlgorithmId, snapshot: Snapshot, narrative: impl Into<String>) -> Self {
        let mut builder = Self { algorithm, steps: Vec::new() };
        builder.push(StepKind::Initialize, snapshot, Vec::new(), narrative.into());
        builder
    }

    /// Append an intermediate step
    pub fn record(
        &mut self,
        kind: StepKind,
        snapshot: Snapshot,
        highlights: Vec<usize>,
        narrative: impl Into<String>,
    ) {
        debug_assert!(
            !matches!(kind, StepKind::Initialize | StepKind::Complete),
            "boundary steps are recorded by new() and finish()"
        );
        self.push(kind, snapshot, highlights, narrative.into());
    }

    /// Append the complete step and hand out the immutable trace
    pub fn finish(
        mut self,
        snapshot: Snapshot,
        highlights: Vec<usize>,
        narrative: impl Into<String>,
    ) -> Trace {
        self.push(StepKind::Complete, snapshot, highlights, narrative.into());
        Trace { algorithm: self.algorithm, steps: self.steps }
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the initialize step exists from construction
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn push(
        &mut self,
        kind: StepKind,
        snapshot: Snapshot,
        highlights: Vec<usize>,
        narrative: String,
    ) {
        let sequence = self.steps.len();
        trace!(algorithm = %self.algorithm, sequence, %kind, "{narrative}");
        self.steps.push(Step::new(sequence, kind, snapshot, highlights, narrative));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trace {
        let initial = Snapshot::new().with("array", vec![2, 1]);
        let mut builder = TraceBuilder::new(AlgorithmId::BubbleSort, initial, "start");
        builder.record(
            StepKind::Compare,
            Snapshot::new().with("array", vec![2, 1]),
            vec![0, 1],
            "Comparing 2 and 1",
        );
        let swapped = Snapshot::new().with("array", vec![1, 2]);
        builder.record(StepKind::Swap, swapped, vec![0, 1], "swap");
        builder.finish(Snapshot::new().with("array", vec![1, 2]), vec![], "done")
    }

    #[test]
    fn test_builder_numbers_steps_and_adds_boundaries() {
        let trace = sample();

        assert_eq!(trace.len(), 4);
        assert_eq!(trace[0].kind(), StepKind::Initialize);
        assert_eq!(trace.final_step().kind(), StepKind::Complete);
        for (i, step) in trace.iter().enumerate() {
            assert_eq!(step.sequence(), i);
        }
        assert_eq!(trace.count(StepKind::Swap), 1);
    }

    #[test]
    fn test_shortest_trace_has_two_steps() {
        let trace = TraceBuilder::new(AlgorithmId::BubbleSort, Snapshot::new(), "start").finish(
            Snapshot::new(),
            vec![],
            "done",
        );

        assert_eq!(trace.len(), 2);
        assert_eq!(
            trace.kinds().collect::<Vec<_>>(),
            vec![StepKind::Initialize, StepKind::Complete]
        );
    }

    #[test]
    fn test_json_contains_algorithm_and_steps() {
        let json = sample().to_json_value().unwrap();

        assert_eq!(json["algorithm"], "bubble-sort");
        assert_eq!(json["steps"][1]["kind"], "compare");
        assert_eq!(json["steps"][1]["highlights"], serde_json::json!([0, 1]));
        assert_eq!(json["steps"][2]["snapshot"]["array"], serde_json::json!([1, 2]));
    }
}
