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

//! Plain-text rendering of steps and annotated sources.

use std::fmt::Write;

use algotrace_common::{Snapshot, Step};
use itertools::Itertools;

/// One-line summary: position, kind, narrative and highlighted positions.
pub fn step_line(step: &Step, total: usize) -> String {
    let mut line = format!(
        "[{:>width$}/{}] {:<22} {}",
        step.sequence(),
        total.saturating_sub(1),
        step.kind().as_str(),
        step.narrative(),
        width = digits(total.saturating_sub(1)),
    );
    if !step.highlights().is_empty() {
        let _ = write!(line, "  @ {}", step.highlights().iter().join(", "));
    }
    line
}

/// Compress sorted 0-indexed lines into 1-based ranges, e.g. `3-5, 9`.
pub fn line_spans(lines: &[usize]) -> String {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for &line in lines {
        match spans.last_mut() {
            Some((_, end)) if *end + 1 == line => *end = line,
            _ => spans.push((line, line)),
        }
    }
    spans
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                (start + 1).to_string()
            } else {
                format!("{}-{}", start + 1, end + 1)
            }
        })
        .join(", ")
}

/// Tracked variables, one per line.
pub fn snapshot_block(snapshot: &Snapshot) -> String {
    let width = snapshot.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    snapshot.iter().map(|(name, value)| format!("    {name:<width$} = {value}")).join("\n")
}

/// Numbered source listing with `>` in front of the highlighted (0-indexed) lines.
pub fn listing(text: &str, highlighted: &[usize]) -> String {
    let width = digits(text.lines().count());
    text.lines()
        .enumerate()
        .map(|(i, code)| {
            let mark = if highlighted.contains(&i) { '>' } else { ' ' };
            format!("{mark} {:>width$} | {code}", i + 1).trim_end().to_string()
        })
        .join("\n")
}

/// Only the highlighted lines, numbered, for the compact view under a step.
pub fn excerpt(text: &str, highlighted: &[usize]) -> String {
    let width = digits(highlighted.last().map_or(0, |line| line + 1));
    text.lines()
        .enumerate()
        .filter(|(i, _)| highlighted.contains(i))
        .map(|(i, code)| format!("    {:>width$} | {code}", i + 1).trim_end().to_string())
        .join("\n")
}

fn digits(n: usize) -> usize {
    n.max(1).ilog10() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spans() {
        assert_eq!(line_spans(&[]), "");
        assert_eq!(line_spans(&[3]), "4");
        assert_eq!(line_spans(&[2, 3, 4, 8, 10, 11]), "3-5, 9, 11-12");
    }

    #[test]
    fn test_listing_marks_highlighted_lines() {
        let text = "a = 1\nb = 2\nc = 3";

        assert_eq!(listing(text, &[1]), "  1 | a = 1\n> 2 | b = 2\n  3 | c = 3");
    }

    #[test]
    fn test_excerpt_keeps_original_numbers() {
        let text = "one\ntwo\nthree\nfour";

        assert_eq!(excerpt(text, &[1, 3]), "    2 | two\n    4 | four");
        assert_eq!(excerpt(text, &[]), "");
    }

    #[test]
    fn test_snapshot_block_aligns_names() {
        let snapshot = Snapshot::new().with("left", 0usize).with("sum", Option::<i64>::None);
        let block = snapshot_block(&snapshot);

        assert!(block.contains("    left = 0"));
        assert!(block.contains("    sum  = "));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(120), 3);
    }
}
