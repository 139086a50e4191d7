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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Snapshot, UnknownStepKindError};

/// Semantic operation a step represents.
///
/// One closed enum is shared by every algorithm family; each family only uses
/// the subset returned by [`crate::AlgorithmId::step_kinds`]. The snake_case
/// names double as the `@step:<name>` markers of annotated sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Starting state, before the first operation
    Initialize,
    /// Two elements (or an element and the target) are compared
    Compare,
    /// Two adjacent elements are exchanged
    Swap,
    /// A bubble-sort pass finished and fixed one more position
    PassComplete,
    /// A match was recorded (search hit, pair or triplet)
    MatchFound,
    /// `target - value` was computed for the current element
    ComputeComplement,
    /// The complement is present in the hash map
    MapLookupHit,
    /// The complement is absent from the hash map
    MapLookupMiss,
    /// The current value was stored in the hash map
    MapInsert,
    /// The outer element of a triplet search was fixed
    FixAnchor,
    /// Left and right pointers were placed at the window bounds
    PointerInit,
    /// The sum under the pointers was computed
    ComputeSum,
    /// The left pointer skipped over equal values after a match
    SkipLeftDuplicates,
    /// The right pointer skipped over equal values after a match
    SkipRightDuplicates,
    /// Both pointers moved inwards after a match
    NarrowWindow,
    /// The left pointer moved right because the sum was too small
    MoveLeft,
    /// The right pointer moved left because the sum was too large
    MoveRight,
    /// A new list node was allocated
    CreateNode,
    /// The new node's `next` was pointed at the current head
    LinkNext,
    /// The head pointer was moved to the new node
    AssignHead,
    /// The traversal cursor was placed on the head
    InitCursor,
    /// The traversal cursor moved to the next node
    Traverse,
    /// The traversal cursor stopped on the last node
    ReachTail,
    /// The new node was linked after the last node
    AttachTail,
    /// Final state, holding the result
    Complete,
}

impl StepKind {
    /// Every step kind.
    pub const ALL: [Self; 25] = [
        Self::Initialize,
        Self::Compare,
        Self::Swap,
        Self::PassComplete,
        Self::MatchFound,
        Self::ComputeComplement,
        Self::MapLookupHit,
        Self::MapLookupMiss,
        Self::MapInsert,
        Self::FixAnchor,
        Self::PointerInit,
        Self::ComputeSum,
        Self::SkipLeftDuplicates,
        Self::SkipRightDuplicates,
        Self::NarrowWindow,
        Self::MoveLeft,
        Self::MoveRight,
        Self::CreateNode,
        Self::LinkNext,
        Self::AssignHead,
        Self::InitCursor,
        Self::Traverse,
        Self::ReachTail,
        Self::AttachTail,
        Self::Complete,
    ];

    /// snake_case name, as used in `@step:` markers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::PassComplete => "pass_complete",
            Self::MatchFound => "match_found",
            Self::ComputeComplement => "compute_complement",
            Self::MapLookupHit => "map_lookup_hit",
            Self::MapLookupMiss => "map_lookup_miss",
            Self::MapInsert => "map_insert",
            Self::FixAnchor => "fix_anchor",
            Self::PointerInit => "pointer_init",
            Self::ComputeSum => "compute_sum",
            Self::SkipLeftDuplicates => "skip_left_duplicates",
            Self::SkipRightDuplicates => "skip_right_duplicates",
            Self::NarrowWindow => "narrow_window",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::CreateNode => "create_node",
            Self::LinkNext => "link_next",
            Self::AssignHead => "assign_head",
            Self::InitCursor => "init_cursor",
            Self::Traverse => "traverse",
            Self::ReachTail => "reach_tail",
            Self::AttachTail => "attach_tail",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKind {
    type Err = UnknownStepKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownStepKindError { name: s.to_string() })
    }
}

/// One immutable recorded instant of an algorithm's execution.
///
/// Steps are created by [`crate::TraceBuilder`] only and expose read-only
/// accessors, so a step cannot change once it is part of a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    sequence: usize,
    kind: StepKind,
    snapshot: Snapshot,
    highlights: Vec<usize>,
    narrative: String,
}

impl Step {
    pub(crate) fn new(
        sequence: usize,
        kind: StepKind,
        snapshot: Snapshot,
        highlights: Vec<usize>,
        narrative: String,
    ) -> Self {
        Self { sequence, kind, snapshot, highlights, narrative }
    }

    /// Position of this step in its trace, starting at 0
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Operation this step represents
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// State of every tracked variable after the operation
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Positions the step wants visually emphasized, in order
    pub fn highlights(&self) -> &[usize] {
        &self.highlights
    }

    /// Human-readable description of the operation
    pub fn narrative(&self) -> &str {
        &self.narrative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_kind_names_are_unique_and_parse_back() {
        for kind in StepKind::ALL {
            assert_eq!(kind.as_str().parse::<StepKind>().unwrap(), kind);
        }
        let mut names: Vec<_> = StepKind::ALL.iter().map(StepKind::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StepKind::ALL.len());
    }

    #[test]
    fn test_serde_name_matches_marker_name() {
        let json = serde_json::to_string(&StepKind::SkipLeftDuplicates).unwrap();
        assert_eq!(json, "\"skip_left_duplicates\"");
    }

    #[test]
    fn test_unknown_kind() {
        let err = "teleport".parse::<StepKind>().unwrap_err();
        assert_eq!(err.name, "teleport");
    }
}
