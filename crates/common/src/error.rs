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

//! Error taxonomy of the trace engine.
//!
//! Both runtime errors are local and synchronous: [`InvalidInputError`] is
//! raised by the generator before any step exists, [`OutOfRangeError`] by a
//! player seek that leaves the cursor untouched. Neither invalidates an
//! existing trace or player. The remaining types report text that could not be
//! turned into one of the closed identifiers.

use thiserror::Error;

use crate::AlgorithmId;

/// Input that fails an algorithm's structural precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Fewer values than the algorithm needs
    #[error("{algorithm} needs at least {required} values, got {actual}")]
    TooFewElements {
        /// Algorithm that rejected the input
        algorithm: AlgorithmId,
        /// Minimum number of values
        required: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// More values than the configured limit
    #[error("{algorithm} accepts at most {limit} values, got {actual}")]
    TooManyElements {
        /// Algorithm that rejected the input
        algorithm: AlgorithmId,
        /// Configured maximum
        limit: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// A value token that is not an integer
    #[error("value #{position} is not an integer: {token:?}")]
    NotNumeric {
        /// 0-based position of the token in the value list
        position: usize,
        /// Offending token
        token: String,
    },

    /// A target or operand token that is not an integer
    #[error("target is not an integer: {token:?}")]
    MalformedTarget {
        /// Offending token
        token: String,
    },

    /// An algorithm that needs a target was given none
    #[error("{algorithm} needs a target value")]
    MissingTarget {
        /// Algorithm that rejected the input
        algorithm: AlgorithmId,
    },

    /// A value whose magnitude could overflow intermediate sums
    #[error("value #{position} ({value}) exceeds the magnitude limit {limit}")]
    ValueOutOfRange {
        /// 0-based position in the value list; the operand is reported after the last value
        position: usize,
        /// Offending value
        value: i64,
        /// Configured maximum magnitude
        limit: i64,
    },
}

/// A seek to a position outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("step index {index} is out of range (trace has {len} steps)")]
pub struct OutOfRangeError {
    /// Requested position
    pub index: isize,
    /// Number of steps in the trace
    pub len: usize,
}

/// Text that names no supported algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {name:?}")]
pub struct UnknownAlgorithmError {
    /// Offending name
    pub name: String,
}

/// Text that names no supported display language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display language {name:?} (expected java, python or cpp)")]
pub struct UnknownLanguageError {
    /// Offending name
    pub name: String,
}

/// Text that names no step kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step kind {name:?}")]
pub struct UnknownStepKindError {
    /// Offending name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_algorithm() {
        let err = InvalidInputError::TooFewElements {
            algorithm: AlgorithmId::ThreeSum,
            required: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "three-sum needs at least 3 values, got 2");

        let err = OutOfRangeError { index: -1, len: 4 };
        assert_eq!(err.to_string(), "step index -1 is out of range (trace has 4 steps)");
    }
}
