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

use algotrace_common::{DisplayLanguage, OutOfRangeError};
use algotrace_engine::{verify, LineRangeTable, TracePlayer};
use eyre::Result;
use serde_json::json;
use tracing::info;

use super::InputArgs;
use crate::{config::Config, render, OutputFormat};

/// Print every step of the trace, optionally checking it by replay first
pub fn print_trace(
    input: &InputArgs,
    format: OutputFormat,
    check: bool,
    language: DisplayLanguage,
    config: &Config,
) -> Result<()> {
    let trace = input.trace(config)?;
    if check {
        verify(&trace)?;
        info!(algorithm = %trace.algorithm(), steps = trace.len(), "Trace verified");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trace)?),
        OutputFormat::Text => {
            let lines = LineRangeTable::builtin();
            for step in trace.iter() {
                println!("{}", render::step_line(step, trace.len()));
                let mapped = lines.lookup(trace.algorithm(), language, step.kind());
                let spans = render::line_spans(mapped);
                if !spans.is_empty() {
                    println!("      {language} lines {spans}");
                }
            }
            if check {
                println!("Replay verified {} steps", trace.len());
            }
        }
    }
    Ok(())
}

/// Show the step at `index` with its variables and source lines
pub fn show_step(
    input: &InputArgs,
    index: isize,
    format: OutputFormat,
    language: DisplayLanguage,
    config: &Config,
) -> Result<()> {
    let mut player = TracePlayer::new(input.trace(config)?);
    let len = player.len();
    player
        .seek(from_end(index, len))
        .map_err(|_| OutOfRangeError { index, len })?;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "algorithm": player.algorithm(),
                "position": player.position(),
                "total": player.len(),
                "language": language,
                "lines": player.resolve_highlight_lines(language),
                "step": player.current(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => println!("{}", describe(&player, language, config)),
    }
    Ok(())
}

/// Map a negative `index` onto the trace counted from its end; `-1` is the last step.
fn from_end(index: isize, len: usize) -> isize {
    if index < 0 {
        index.saturating_add_unsigned(len)
    } else {
        index
    }
}

/// Step summary followed by the configured detail blocks
pub(super) fn describe(player: &TracePlayer, language: DisplayLanguage, config: &Config) -> String {
    let step = player.current();
    let mut blocks = vec![render::step_line(step, player.len())];

    if config.display.show_snapshot {
        blocks.push(render::snapshot_block(step.snapshot()));
    }
    if config.display.show_source {
        let lines = player.resolve_highlight_lines(language);
        if let Some(text) = player.source_text(language).filter(|_| !lines.is_empty()) {
            blocks.push(render::excerpt(text, lines));
        }
    }
    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_index_counts_from_the_end() {
        assert_eq!(from_end(-1, 5), 4);
        assert_eq!(from_end(-5, 5), 0);
        assert_eq!(from_end(2, 5), 2);
        // still out of range; the player rejects it
        assert_eq!(from_end(-6, 5), -1);
        assert_eq!(from_end(isize::MIN, 5), isize::MIN + 5);
    }
}
