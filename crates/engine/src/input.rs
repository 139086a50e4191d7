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

//! Text input parsing and seeded operand selection.
//!
//! This is the only place where user-supplied text turns into typed algorithm
//! input. Parsing never validates algorithm preconditions; that is left to
//! [`Algorithm::generate`].

use algotrace_common::{AlgorithmId, InvalidInputError};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::{
    Algorithm, BubbleSort, InsertHead, InsertTail, LinearSearch, ThreeSum, TwoSum, TwoSumSorted,
};

/// Exclusive upper bound of a randomly picked value to insert.
pub const RANDOM_VALUE_BOUND: i64 = 100;

/// Parse a comma and/or whitespace separated list of integers.
///
/// Empty text yields an empty list.
pub fn parse_values(text: &str) -> Result<Vec<i64>, InvalidInputError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<i64>()
                .map_err(|_| InvalidInputError::NotNumeric { position, token: token.to_string() })
        })
        .collect()
}

/// Parse a single integer target or operand.
pub fn parse_target(text: &str) -> Result<i64, InvalidInputError> {
    let token = text.trim();
    token
        .parse::<i64>()
        .map_err(|_| InvalidInputError::MalformedTarget { token: token.to_string() })
}

/// Source of operands the user did not supply.
///
/// A seeded picker makes every pick, and therefore the whole trace, reproducible.
#[derive(Debug, Clone)]
pub struct OperandPicker {
    rng: StdRng,
}

impl OperandPicker {
    /// Picker with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Seeded picker if `seed` is given, entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// One of `values`, or `None` for an empty list
    pub fn pick_target(&mut self, values: &[i64]) -> Option<i64> {
        if values.is_empty() {
            return None;
        }
        Some(values[self.rng.random_range(0..values.len())])
    }

    /// A value in `0..100`
    pub fn pick_value(&mut self) -> i64 {
        self.rng.random_range(0..RANDOM_VALUE_BOUND)
    }
}

impl Algorithm {
    /// Build an algorithm from command-line text.
    ///
    /// A missing operand is picked by `picker` for linear search (an element of
    /// the list) and list insertion (a value below 100). The sum algorithms
    /// require an explicit target. Bubble sort and three-sum ignore the operand.
    pub fn parse(
        id: AlgorithmId,
        values_text: &str,
        operand_text: Option<&str>,
        picker: &mut OperandPicker,
    ) -> Result<Self, InvalidInputError> {
        let values = parse_values(values_text)?;
        let operand = operand_text.map(parse_target).transpose()?;

        let algorithm = match id {
            AlgorithmId::BubbleSort => Self::BubbleSort(BubbleSort::new(values)),
            AlgorithmId::ThreeSum => Self::ThreeSum(ThreeSum::new(values)),
            AlgorithmId::LinearSearch => {
                let target = match operand {
                    Some(target) => target,
                    // An empty list fails validation regardless of the target.
                    None => picker.pick_target(&values).unwrap_or_default(),
                };
                Self::LinearSearch(LinearSearch::new(values, target))
            }
            AlgorithmId::TwoSum => {
                let target = operand.ok_or(InvalidInputError::MissingTarget { algorithm: id })?;
                Self::TwoSum(TwoSum::new(values, target))
            }
            AlgorithmId::TwoSumSorted => {
                let target = operand.ok_or(InvalidInputError::MissingTarget { algorithm: id })?;
                Self::TwoSumSorted(TwoSumSorted::new(values, target))
            }
            AlgorithmId::LinkedListInsertHead => {
                let value = operand.unwrap_or_else(|| picker.pick_value());
                Self::LinkedListInsertHead(InsertHead::new(values, value))
            }
            AlgorithmId::LinkedListInsertTail => {
                let value = operand.unwrap_or_else(|| picker.pick_value());
                Self::LinkedListInsertTail(InsertTail::new(values, value))
            }
        };
        debug!(algorithm = %id, "Parsed input");

        Ok(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_accepts_commas_and_spaces() {
        assert_eq!(parse_values("2, 7,11 15").unwrap(), vec![2, 7, 11, 15]);
        assert_eq!(parse_values("  -1,\t-4 ").unwrap(), vec![-1, -4]);
        assert_eq!(parse_values("").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_values_reports_position() {
        assert_eq!(
            parse_values("1, two, 3"),
            Err(InvalidInputError::NotNumeric { position: 1, token: "two".to_string() })
        );
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" -9 "), Ok(-9));
        assert_eq!(
            parse_target("9.5"),
            Err(InvalidInputError::MalformedTarget { token: "9.5".to_string() })
        );
    }

    #[test]
    fn test_seeded_picks_repeat() {
        let values = [3, 1, 4, 1, 5];
        let mut a = OperandPicker::seeded(42);
        let mut b = OperandPicker::seeded(42);

        for _ in 0..16 {
            let target = a.pick_target(&values);
            assert_eq!(target, b.pick_target(&values));
            assert!(values.contains(&target.unwrap()));

            let value = a.pick_value();
            assert_eq!(value, b.pick_value());
            assert!((0..RANDOM_VALUE_BOUND).contains(&value));
        }
        assert_eq!(a.pick_target(&[]), None);
    }

    #[test]
    fn test_sum_algorithms_need_a_target() {
        let mut picker = OperandPicker::seeded(0);

        assert_eq!(
            Algorithm::parse(AlgorithmId::TwoSum, "2,7", None, &mut picker),
            Err(InvalidInputError::MissingTarget { algorithm: AlgorithmId::TwoSum })
        );
        assert_eq!(
            Algorithm::parse(AlgorithmId::TwoSum, "2,7", Some("9"), &mut picker),
            Ok(Algorithm::TwoSum(TwoSum::new(vec![2, 7], 9)))
        );
    }

    #[test]
    fn test_missing_operand_is_picked() {
        let mut picker = OperandPicker::seeded(5);
        let alg = Algorithm::parse(AlgorithmId::LinkedListInsertTail, "10 20", None, &mut picker)
            .unwrap();

        match alg {
            Algorithm::LinkedListInsertTail(insert) => {
                assert!((0..RANDOM_VALUE_BOUND).contains(&insert.value))
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }
}
