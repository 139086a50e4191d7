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

//! Engine configuration

use serde::{Deserialize, Serialize};

/// Largest accepted input magnitude. Three values of this size sum well inside `i64`.
pub const DEFAULT_MAX_ABS_VALUE: i64 = 1 << 40;

/// Ceiling on any configured magnitude limit; a sum of three values stays inside `i64`.
pub const MAX_SAFE_ABS_VALUE: i64 = i64::MAX / 3;

/// Largest accepted number of input values.
pub const DEFAULT_MAX_ELEMENTS: usize = 64;

/// Input bounds enforced by the generator before any step is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of values in the input list
    pub max_elements: usize,
    /// Maximum magnitude of any value, target or operand
    pub max_abs_value: i64,
}

impl Limits {
    /// The magnitude bound actually enforced: `max_abs_value` capped at [`MAX_SAFE_ABS_VALUE`].
    pub fn abs_value_bound(&self) -> i64 {
        self.max_abs_value.saturating_abs().min(MAX_SAFE_ABS_VALUE)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_elements: DEFAULT_MAX_ELEMENTS, max_abs_value: DEFAULT_MAX_ABS_VALUE }
    }
}

/// Configuration for trace generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Input bounds
    pub limits: Limits,
    /// Seed for operands picked at random (search target, value to insert).
    /// `None` draws from OS entropy.
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.limits.max_elements, 64);
        assert_eq!(config.limits.max_abs_value, 1 << 40);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig =
            toml::from_str("seed = 7\n[limits]\nmax_elements = 8\n").unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.limits.max_elements, 8);
        assert_eq!(config.limits.max_abs_value, DEFAULT_MAX_ABS_VALUE);
    }

    #[test]
    fn test_abs_value_bound_is_capped() {
        let limits = |max_abs_value| Limits { max_elements: 8, max_abs_value };

        assert_eq!(limits(100).abs_value_bound(), 100);
        assert_eq!(limits(-100).abs_value_bound(), 100);
        assert_eq!(limits(i64::MAX).abs_value_bound(), MAX_SAFE_ABS_VALUE);
        assert_eq!(limits(i64::MIN).abs_value_bound(), MAX_SAFE_ABS_VALUE);
        assert_eq!(Limits::default().abs_value_bound(), DEFAULT_MAX_ABS_VALUE);
    }
}
