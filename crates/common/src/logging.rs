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

//! Logging configuration for algotrace components

use eyre::Result;
use std::{env, fs, path::PathBuf, sync::Once};
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, time::LocalTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Initialize console logging at `console_level`, optionally mirrored into a
/// daily-rotated file under `$TMP/algotrace-logs/<component>`.
///
/// The file records at least `info`, and more when the console is more verbose.
/// `RUST_LOG` overrides both defaults.
pub fn init_logging(
    component_name: &str,
    enable_file_logging: bool,
    console_level: Level,
) -> Result<()> {
    let console_filter = default_filter(console_level.as_str())?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .pretty();

    if enable_file_logging {
        let log_dir = create_log_directory(component_name)?;

        let file_appender = rolling::daily(&log_dir, format!("{component_name}.log"));
        let (non_blocking_appender, guard) = non_blocking(file_appender);

        // The writer thread must outlive every span; logging lasts for the whole process.
        std::mem::forget(guard);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(LocalTime::rfc_3339())
            .with_ansi(false)
            .with_writer(non_blocking_appender);

        tracing_subscriber::registry()
            .with(console_layer.with_filter(console_filter))
            .with(file_layer.with_filter(default_filter(file_level(console_level).as_str())?))
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {e}"))?;

        tracing::info!(
            component = component_name,
            log_dir = %log_dir.display(),
            "Logging initialized with console and file output"
        );
    } else {
        tracing_subscriber::registry()
            .with(console_layer.with_filter(console_filter))
            .try_init()
            .map_err(|e| eyre::eyre!("Failed to initialize tracing subscriber: {e}"))?;

        tracing::debug!(component = component_name, "Logging initialized with console output only");
    }

    log_environment_info(component_name);

    Ok(())
}

fn file_level(console_level: Level) -> Level {
    console_level.max(Level::INFO)
}

fn default_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| eyre::eyre!("Failed to create environment filter: {e}"))
}

fn create_log_directory(component_name: &str) -> Result<PathBuf> {
    let log_dir = env::temp_dir().join("algotrace-logs").join(component_name);
    fs::create_dir_all(&log_dir)?;
    Ok(log_dir)
}

fn log_environment_info(component_name: &str) {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let args: Vec<String> = env::args().collect();

    tracing::debug!(
        component = component_name,
        rust_log = %rust_log,
        args = ?args,
        "Environment information"
    );
}

/// Compact console-only logging at the given default level (overridden by `RUST_LOG`)
pub fn init_simple_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter(level.as_str())?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize simple logging: {e}"))?;

    Ok(())
}

static TEST_LOGGING_INIT: Once = Once::new();

/// Set up logging once per test binary; later calls are no-ops
pub fn ensure_test_logging(default_level: Option<Level>) {
    TEST_LOGGING_INIT.call_once(|| {
        // Another subscriber may already be installed; that is fine for tests.
        let _ = init_simple_logging(default_level.unwrap_or(Level::INFO));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, error, info, warn};

    #[test]
    fn test_logging_functions_work() {
        ensure_test_logging(None);

        info!("Test info message");
        warn!("Test warning message");
        debug!("Test debug message");
        error!("Test error message");
    }

    #[test]
    fn test_log_directory_creation() {
        let log_dir = create_log_directory("test-component").unwrap();

        assert!(log_dir.exists());
        assert!(log_dir.to_string_lossy().contains("algotrace-logs"));
        assert!(log_dir.to_string_lossy().contains("test-component"));
    }

    #[test]
    fn test_file_level_follows_verbose_console() {
        assert_eq!(file_level(Level::WARN), Level::INFO);
        assert_eq!(file_level(Level::INFO), Level::INFO);
        assert_eq!(file_level(Level::DEBUG), Level::DEBUG);
        assert_eq!(file_level(Level::TRACE), Level::TRACE);
    }

    #[test]
    fn test_repeated_initialization_is_graceful() {
        ensure_test_logging(None);

        // A subscriber is already installed, so both attempts report an error instead of panicking.
        assert!(init_logging("test-repeat-1", false, Level::INFO).is_err());
        assert!(init_simple_logging(Level::DEBUG).is_err());

        info!("Test logging after repeated init attempts");
    }
}
