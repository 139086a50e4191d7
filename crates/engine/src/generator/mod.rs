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

//! Trace generation
//!
//! Every supported algorithm is a variant of the closed [`Algorithm`] enum and
//! carries its own typed input. A variant re-executes the textbook algorithm
//! exactly once and records a [`Step`](algotrace_common::Step) at every
//! semantically meaningful point: a comparison, a swap, a pointer move, a map
//! lookup, a node link.
//!
//! Generation is validate-then-record. Input that fails validation produces an
//! [`InvalidInputError`] before the first step exists; input that passes always
//! yields a complete trace, because recording is a total function of valid
//! input. Recording never consults a clock or a random source, so the same
//! input yields the same trace every time.

mod bubble_sort;
pub use bubble_sort::BubbleSort;

mod linear_search;
pub use linear_search::LinearSearch;

mod linked_list;
pub use linked_list::{InsertHead, InsertTail};

mod three_sum;
pub use three_sum::ThreeSum;

mod two_sum;
pub use two_sum::TwoSum;

mod two_sum_sorted;
pub use two_sum_sorted::TwoSumSorted;

mod two_pointer;

use algotrace_common::{AlgorithmId, InvalidInputError, Trace};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{EngineConfig, Limits};

/// Uniform capability shared by every algorithm family.
pub trait TraceGenerator {
    /// Identifier of the family
    const ID: AlgorithmId;

    /// Check the structural preconditions of the input
    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError>;

    /// Run the algorithm once and record its steps.
    ///
    /// Only called on input that passed [`TraceGenerator::validate`].
    fn record(&self) -> Trace;
}

/// A supported algorithm together with its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum Algorithm {
    /// Bubble sort over a list of values
    BubbleSort(BubbleSort),
    /// Linear search for an explicit target
    LinearSearch(LinearSearch),
    /// Hash-map two-sum
    TwoSum(TwoSum),
    /// Two-pointer two-sum over the sorted values
    TwoSumSorted(TwoSumSorted),
    /// Three-sum against zero
    ThreeSum(ThreeSum),
    /// Linked list insertion at the head
    LinkedListInsertHead(InsertHead),
    /// Linked list insertion at the tail
    LinkedListInsertTail(InsertTail),
}

impl Algorithm {
    /// Identifier of this algorithm
    pub fn id(&self) -> AlgorithmId {
        match self {
            Self::BubbleSort(_) => BubbleSort::ID,
            Self::LinearSearch(_) => LinearSearch::ID,
            Self::TwoSum(_) => TwoSum::ID,
            Self::TwoSumSorted(_) => TwoSumSorted::ID,
            Self::ThreeSum(_) => ThreeSum::ID,
            Self::LinkedListInsertHead(_) => InsertHead::ID,
            Self::LinkedListInsertTail(_) => InsertTail::ID,
        }
    }

    /// Check the input against the given limits
    pub fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        match self {
            Self::BubbleSort(alg) => alg.validate(limits),
            Self::LinearSearch(alg) => alg.validate(limits),
            Self::TwoSum(alg) => alg.validate(limits),
            Self::TwoSumSorted(alg) => alg.validate(limits),
            Self::ThreeSum(alg) => alg.validate(limits),
            Self::LinkedListInsertHead(alg) => alg.validate(limits),
            Self::LinkedListInsertTail(alg) => alg.validate(limits),
        }
    }

    /// Generate the trace with default limits
    pub fn generate(&self) -> Result<Trace, InvalidInputError> {
        self.generate_with(&EngineConfig::default())
    }

    /// Generate the trace with the limits of `config`
    pub fn generate_with(&self, config: &EngineConfig) -> Result<Trace, InvalidInputError> {
        let id = self.id();
        if let Err(err) = self.validate(&config.limits) {
            warn!(algorithm = %id, "Rejected input: {err}");
            return Err(err);
        }

        debug!(algorithm = %id, "Generating trace");
        let trace = match self {
            Self::BubbleSort(alg) => alg.record(),
            Self::LinearSearch(alg) => alg.record(),
            Self::TwoSum(alg) => alg.record(),
            Self::TwoSumSorted(alg) => alg.record(),
            Self::ThreeSum(alg) => alg.record(),
            Self::LinkedListInsertHead(alg) => alg.record(),
            Self::LinkedListInsertTail(alg) => alg.record(),
        };
        debug!(algorithm = %id, steps = trace.len(), "Generated trace");

        Ok(trace)
    }
}

/// Shared validation of a value list: element count and magnitude.
pub(crate) fn check_values(
    algorithm: AlgorithmId,
    values: &[i64],
    limits: &Limits,
) -> Result<(), InvalidInputError> {
    let required = algorithm.min_elements();
    if values.len() < required {
        return Err(InvalidInputError::TooFewElements {
            algorithm,
            required,
            actual: values.len(),
        });
    }
    if values.len() > limits.max_elements {
        return Err(InvalidInputError::TooManyElements {
            algorithm,
            limit: limits.max_elements,
            actual: values.len(),
        });
    }
    for (position, &value) in values.iter().enumerate() {
        check_magnitude(position, value, limits)?;
    }
    Ok(())
}

/// Magnitude check for a target or operand, reported after the last value.
pub(crate) fn check_operand(
    values: &[i64],
    operand: i64,
    limits: &Limits,
) -> Result<(), InvalidInputError> {
    check_magnitude(values.len(), operand, limits)
}

fn check_magnitude(position: usize, value: i64, limits: &Limits) -> Result<(), InvalidInputError> {
    let limit = limits.abs_value_bound();
    if value.unsigned_abs() > limit.unsigned_abs() {
        return Err(InvalidInputError::ValueOutOfRange { position, value, limit });
    }
    Ok(())
}
