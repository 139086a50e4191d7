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

use crate::{StepKind, UnknownAlgorithmError, UnknownLanguageError};

/// Identifier of a supported algorithm.
///
/// The set is closed: every variant has its own generator, its own kind set and
/// its own annotated sources. Text is only converted into an identifier at the
/// outer boundary (command line, configuration), through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    /// Textbook bubble sort without early exit
    BubbleSort,
    /// Left-to-right scan for a target value
    LinearSearch,
    /// Hash-map based two-sum returning the first pair of indices
    TwoSum,
    /// Two-pointer two-sum over the sorted input, collecting every unique value pair
    TwoSumSorted,
    /// Sort plus two pointers, collecting every unique triplet summing to zero
    ThreeSum,
    /// Singly linked list insertion at the head
    LinkedListInsertHead,
    /// Singly linked list insertion at the tail
    LinkedListInsertTail,
}

impl AlgorithmId {
    /// Every supported algorithm, in presentation order.
    pub const ALL: [Self; 7] = [
        Self::BubbleSort,
        Self::LinearSearch,
        Self::TwoSum,
        Self::TwoSumSorted,
        Self::ThreeSum,
        Self::LinkedListInsertHead,
        Self::LinkedListInsertTail,
    ];

    /// Stable kebab-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BubbleSort => "bubble-sort",
            Self::LinearSearch => "linear-search",
            Self::TwoSum => "two-sum",
            Self::TwoSumSorted => "two-sum-sorted",
            Self::ThreeSum => "three-sum",
            Self::LinkedListInsertHead => "linked-list-insert-head",
            Self::LinkedListInsertTail => "linked-list-insert-tail",
        }
    }

    /// Minimum number of input values the algorithm needs to do meaningful work.
    pub fn min_elements(&self) -> usize {
        match self {
            Self::BubbleSort | Self::LinearSearch => 1,
            Self::TwoSum | Self::TwoSumSorted => 2,
            Self::ThreeSum => 3,
            Self::LinkedListInsertHead | Self::LinkedListInsertTail => 0,
        }
    }

    /// Whether the algorithm takes a second operand besides the value list
    /// (a target, or the value to insert).
    pub fn takes_operand(&self) -> bool {
        !matches!(self, Self::BubbleSort | Self::ThreeSum)
    }

    /// The closed set of step kinds a trace of this algorithm may contain.
    pub fn step_kinds(&self) -> &'static [StepKind] {
        use StepKind::*;
        match self {
            Self::BubbleSort => &[Initialize, Compare, Swap, PassComplete, Complete],
            Self::LinearSearch => &[Initialize, Compare, MatchFound, Complete],
            Self::TwoSum => &[
                Initialize,
                ComputeComplement,
                MapLookupHit,
                MapLookupMiss,
                MapInsert,
                Complete,
            ],
            Self::TwoSumSorted => &[
                Initialize,
                PointerInit,
                ComputeSum,
                MatchFound,
                SkipLeftDuplicates,
                SkipRightDuplicates,
                NarrowWindow,
                MoveLeft,
                MoveRight,
                Complete,
            ],
            Self::ThreeSum => &[
                Initialize,
                FixAnchor,
                PointerInit,
                ComputeSum,
                MatchFound,
                SkipLeftDuplicates,
                SkipRightDuplicates,
                NarrowWindow,
                MoveLeft,
                MoveRight,
                Complete,
            ],
            Self::LinkedListInsertHead => {
                &[Initialize, CreateNode, LinkNext, AssignHead, Complete]
            }
            Self::LinkedListInsertTail => &[
                Initialize,
                CreateNode,
                AssignHead,
                InitCursor,
                Traverse,
                ReachTail,
                AttachTail,
                Complete,
            ],
        }
    }

    /// Whether `kind` belongs to this algorithm's kind set.
    pub fn allows(&self, kind: StepKind) -> bool {
        self.step_kinds().contains(&kind)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| UnknownAlgorithmError { name: s.to_string() })
    }
}

/// Human-readable language an algorithm's reference implementation is shown in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLanguage {
    /// Java
    #[default]
    Java,
    /// Python 3
    Python,
    /// C++
    Cpp,
}

impl DisplayLanguage {
    /// Every display language.
    pub const ALL: [Self; 3] = [Self::Java, Self::Python, Self::Cpp];

    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Python => "python",
            Self::Cpp => "cpp",
        }
    }
}

impl fmt::Display for DisplayLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayLanguage {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "python" | "py" => Ok(Self::Python),
            "cpp" | "c++" => Ok(Self::Cpp),
            _ => Err(UnknownLanguageError { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_id_round_trips_through_text() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.as_str().parse::<AlgorithmId>().unwrap(), id);
        }
        assert_eq!("Three_Sum".parse::<AlgorithmId>().unwrap(), AlgorithmId::ThreeSum);
        assert!("quick-sort".parse::<AlgorithmId>().is_err());
    }

    #[test]
    fn test_every_family_has_boundary_kinds() {
        for id in AlgorithmId::ALL {
            assert!(id.allows(StepKind::Initialize), "{id}");
            assert!(id.allows(StepKind::Complete), "{id}");
        }
        assert!(!AlgorithmId::BubbleSort.allows(StepKind::MapInsert));
    }

    #[test]
    fn test_display_language_aliases() {
        assert_eq!("C++".parse::<DisplayLanguage>().unwrap(), DisplayLanguage::Cpp);
        assert_eq!("py".parse::<DisplayLanguage>().unwrap(), DisplayLanguage::Python);
        assert!("rust".parse::<DisplayLanguage>().is_err());
    }
}
