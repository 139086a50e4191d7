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

//! algotrace - Algorithm Trace Engine
//!
//! Generate the step trace of a textbook algorithm on concrete input, then
//! print it, jump to a single step, play it back, or show the reference
//! implementation with the lines each step corresponds to.

use std::path::PathBuf;

use algotrace_common::{init_logging, init_simple_logging, AlgorithmId, DisplayLanguage, StepKind};
use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use tracing::{debug, Level};

mod cmd;
mod config;
mod render;

use config::Config;

/// Command-line interface for algotrace
#[derive(Debug, Parser)]
#[command(name = "algotrace")]
#[command(about = "Algorithm Trace Engine - step through textbook algorithms")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ~/.algotrace.toml)
    #[arg(long, global = true, env = "ALGOTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Language the reference implementation is shown in (default: from the config file)
    #[arg(long, global = true)]
    pub lang: Option<DisplayLanguage>,

    /// Also write logs to a daily-rotated file under the temp directory
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format of `trace` and `step`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON, for other tools
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the supported algorithms
    List {
        /// Also list the step kinds of every algorithm
        #[arg(long)]
        kinds: bool,
    },
    /// Print the full step trace of an algorithm run
    Trace {
        #[command(flatten)]
        input: cmd::InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Replay the trace from its initial snapshot and check every step
        #[arg(long)]
        verify: bool,
    },
    /// Show a single step of an algorithm run
    Step {
        #[command(flatten)]
        input: cmd::InputArgs,

        /// Step to show; negative values count from the end
        #[arg(long, allow_negative_numbers = true, default_value = "0")]
        index: isize,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Play an algorithm run back step by step
    Play {
        #[command(flatten)]
        input: cmd::InputArgs,

        /// Delay between steps in milliseconds (default: from the config file)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Show the annotated reference implementation of an algorithm
    Source {
        /// Algorithm to show, e.g. two-sum
        algorithm: AlgorithmId,

        /// Mark the lines of this step kind, e.g. compute_sum
        #[arg(long)]
        kind: Option<StepKind>,

        /// Print the line ranges of every step kind instead of the code
        #[arg(long)]
        map: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    if cli.log_file {
        init_logging("algotrace", true, level)?;
    } else {
        init_simple_logging(level)?;
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;
    let language = cli.lang.unwrap_or(config.display.language);
    debug!(config = %config_path.display(), %language, "Configuration ready");

    match cli.command {
        Commands::List { kinds } => cmd::list_algorithms(kinds),
        Commands::Trace { input, format, verify } => {
            cmd::print_trace(&input, format, verify, language, &config)
        }
        Commands::Step { input, index, format } => {
            cmd::show_step(&input, index, format, language, &config)
        }
        Commands::Play { input, interval_ms } => {
            let interval = interval_ms.unwrap_or(config.display.interval_ms);
            cmd::play(&input, interval, language, &config)
        }
        Commands::Source { algorithm, kind, map } => {
            cmd::show_source(algorithm, kind, map, language)
        }
    }
}
