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

//! Subcommand implementations

pub mod list;
pub mod play;
pub mod source;
pub mod trace;

pub use list::*;
pub use play::*;
pub use source::*;
pub use trace::*;

use algotrace_common::{AlgorithmId, Trace};
use algotrace_engine::{Algorithm, OperandPicker};
use clap::Args;
use eyre::Result;
use tracing::info;

use crate::config::Config;

/// Algorithm and input shared by `trace`, `step` and `play`
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Algorithm to run, e.g. two-sum
    pub algorithm: AlgorithmId,

    /// Input values separated by commas or whitespace (default: a sample input)
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Target sum, search target or value to insert
    #[arg(long, allow_hyphen_values = true)]
    pub operand: Option<String>,

    /// Seed for an operand picked at random (default: from the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl InputArgs {
    /// Resolve the input text and build the algorithm.
    ///
    /// Without `--values` the sample input of the algorithm is used, together
    /// with its sample operand unless `--operand` is given.
    pub fn algorithm(&self, config: &Config) -> Result<Algorithm> {
        let (sample_values, sample_operand) = sample_input(self.algorithm);
        let (values, operand) = match &self.values {
            Some(values) => (values.as_str(), self.operand.as_deref()),
            None => (sample_values, self.operand.as_deref().or(sample_operand)),
        };

        let mut picker = OperandPicker::from_seed(self.seed.or(config.engine.seed));
        let algorithm = Algorithm::parse(self.algorithm, values, operand, &mut picker)?;
        info!(algorithm = %self.algorithm, "Input: {values}");
        Ok(algorithm)
    }

    /// Build the algorithm and generate its trace under the configured limits
    pub fn trace(&self, config: &Config) -> Result<Trace> {
        Ok(self.algorithm(config)?.generate_with(&config.engine)?)
    }
}

/// Sample values and operand of every algorithm
pub fn sample_input(algorithm: AlgorithmId) -> (&'static str, Option<&'static str>) {
    match algorithm {
        AlgorithmId::BubbleSort | AlgorithmId::LinearSearch => ("5, 2, 8, 1, 9, 3, 7, 4, 6", None),
        AlgorithmId::TwoSum | AlgorithmId::TwoSumSorted => ("2, 7, 11, 15", Some("9")),
        AlgorithmId::ThreeSum => ("-1, 0, 1, 2, -1, -4", None),
        AlgorithmId::LinkedListInsertHead | AlgorithmId::LinkedListInsertTail => {
            ("10, 20, 30", None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_engine::TwoSum;

    fn args(algorithm: AlgorithmId, values: Option<&str>, operand: Option<&str>) -> InputArgs {
        InputArgs {
            algorithm,
            values: values.map(str::to_string),
            operand: operand.map(str::to_string),
            seed: Some(1),
        }
    }

    #[test]
    fn test_every_sample_input_generates() {
        let config = Config::default();
        for id in AlgorithmId::ALL {
            let trace = args(id, None, None).trace(&config).unwrap();
            assert_eq!(trace.algorithm(), id);
        }
    }

    #[test]
    fn test_sample_operand_is_overridable() {
        let config = Config::default();

        let algorithm = args(AlgorithmId::TwoSum, None, Some("18")).algorithm(&config).unwrap();

        assert_eq!(algorithm, Algorithm::TwoSum(TwoSum::new(vec![2, 7, 11, 15], 18)));
    }

    #[test]
    fn test_explicit_values_need_their_own_target() {
        let config = Config::default();

        assert!(args(AlgorithmId::TwoSum, Some("1, 2"), None).algorithm(&config).is_err());
    }

    #[test]
    fn test_seed_makes_operand_reproducible() {
        let config = Config::default();
        let input = args(AlgorithmId::LinkedListInsertTail, None, None);

        assert_eq!(input.algorithm(&config).unwrap(), input.algorithm(&config).unwrap());
    }
}
