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

use algotrace_common::InvalidInputError;
use algotrace_engine::{Algorithm, EngineConfig, Limits, TwoSum, DEFAULT_MAX_ABS_VALUE};
use tracing::info;

#[test]
fn test_default_config() {
    algotrace_common::logging::ensure_test_logging(None);
    info!("Running test");
    let config = EngineConfig::default();

    assert_eq!(config.limits.max_elements, 64);
    assert_eq!(config.limits.max_abs_value, DEFAULT_MAX_ABS_VALUE);
    assert_eq!(config.seed, None);
}

#[test]
fn test_config_with_custom_values() {
    algotrace_common::logging::ensure_test_logging(None);
    info!("Running test");
    let config =
        EngineConfig { limits: Limits { max_elements: 4, max_abs_value: 10 }, seed: Some(3) };
    let algorithm = Algorithm::TwoSum(TwoSum::new(vec![1, 2, 3, 4, 5], 9));

    assert_eq!(
        algorithm.generate_with(&config),
        Err(InvalidInputError::TooManyElements {
            algorithm: algorithm.id(),
            limit: 4,
            actual: 5
        })
    );
    assert!(algorithm.generate().is_ok());
}

#[test]
fn test_config_toml_round_trip() {
    algotrace_common::logging::ensure_test_logging(None);
    info!("Running test");
    let config =
        EngineConfig { limits: Limits { max_elements: 16, max_abs_value: 1000 }, seed: None };

    let text = toml::to_string(&config).unwrap();
    let parsed: EngineConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_magnitude_limit_covers_the_target() {
    algotrace_common::logging::ensure_test_logging(None);
    info!("Running test");
    let config = EngineConfig {
        limits: Limits { max_elements: 8, max_abs_value: 10 },
        ..Default::default()
    };
    let algorithm = Algorithm::TwoSum(TwoSum::new(vec![1, 2], -11));

    assert_eq!(
        algorithm.generate_with(&config),
        Err(InvalidInputError::ValueOutOfRange { position: 2, value: -11, limit: 10 })
    );
}
