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

//! Parser for `@step:<kind>` markers in annotated reference sources.
//!
//! A marker is a `//` or `#` comment containing one or more `@step:<kind>`
//! tokens. On a line of its own it annotates the next non-blank code line and
//! disappears from the display text; stacked marker lines accumulate. After
//! code it annotates that same line and is cut off. Line numbers refer to the
//! display text and are 0-indexed.

use std::{collections::BTreeMap, str::FromStr};

use algotrace_common::{AlgorithmId, StepKind};
use thiserror::Error;

const MARKER: &str = "@step:";

/// A malformed annotated source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// A marker naming no step kind
    #[error("line {line}: unknown step kind {name:?}")]
    UnknownKind {
        /// 1-based line in the annotated source
        line: usize,
        /// Offending name
        name: String,
    },

    /// A marker naming a kind the algorithm never records
    #[error("line {line}: {kind} is not a step of {algorithm}")]
    ForeignKind {
        /// 1-based line in the annotated source
        line: usize,
        /// Algorithm the source belongs to
        algorithm: AlgorithmId,
        /// Offending kind
        kind: StepKind,
    },

    /// Marker lines with no code line after them
    #[error("line {line}: marker is not followed by a code line")]
    DanglingMarker {
        /// 1-based line of the last pending marker
        line: usize,
    },
}

/// Display text of an annotated source and the lines each kind maps to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedSource {
    /// Source with all markers removed
    pub text: String,
    /// Sorted, deduplicated display lines per kind
    pub lines: BTreeMap<StepKind, Vec<usize>>,
}

/// Parse `source`, accepting only kinds that `algorithm` records.
pub fn parse_annotated(
    algorithm: AlgorithmId,
    source: &str,
) -> Result<AnnotatedSource, AnnotationError> {
    let mut parsed = AnnotatedSource::default();
    let mut display: Vec<&str> = Vec::new();
    let mut pending: Vec<StepKind> = Vec::new();
    let mut pending_since = 0;

    for (raw, line) in source.lines().enumerate() {
        let (code, names) = split_marker(line);
        let mut kinds = Vec::with_capacity(names.len());
        for name in names {
            let kind = StepKind::from_str(name).map_err(|_| AnnotationError::UnknownKind {
                line: raw + 1,
                name: name.to_string(),
            })?;
            if !algorithm.allows(kind) {
                return Err(AnnotationError::ForeignKind { line: raw + 1, algorithm, kind });
            }
            kinds.push(kind);
        }

        if code.trim().is_empty() {
            if !kinds.is_empty() {
                // marker-only line
                pending.extend(kinds);
                pending_since = raw + 1;
                continue;
            }
            display.push(code);
            continue;
        }

        let index = display.len();
        display.push(code);
        for kind in pending.drain(..).chain(kinds) {
            parsed.lines.entry(kind).or_default().push(index);
        }
    }

    if !pending.is_empty() {
        return Err(AnnotationError::DanglingMarker { line: pending_since });
    }

    for lines in parsed.lines.values_mut() {
        lines.sort_unstable();
        lines.dedup();
    }
    parsed.text = display.join("\n");
    Ok(parsed)
}

/// Split a raw line into its code part and the kind names of its marker, if any.
fn split_marker(line: &str) -> (&str, Vec<&str>) {
    let Some(at) = line.find(MARKER) else {
        return (line, Vec::new());
    };
    let Some(comment) = comment_start(&line[..at]) else {
        return (line, Vec::new());
    };

    let names = line[comment..]
        .match_indices(MARKER)
        .map(|(pos, _)| {
            let rest = &line[comment + pos + MARKER.len()..];
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            &rest[..end]
        })
        .collect();

    (line[..comment].trim_end(), names)
}

/// Byte offset of the comment prefix that opens the marker comment.
fn comment_start(before_marker: &str) -> Option<usize> {
    let slashes = before_marker.rfind("//");
    let hash = before_marker.rfind('#');
    match (slashes, hash) {
        (Some(s), Some(h)) => Some(s.max(h)),
        (s, h) => s.or(h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_lines_annotate_the_next_code_line() {
        let source = "\
def f(a):
    # @step:initialize
    # @step:compare
    x = a[0]

    return x  # @step:complete
";
        let parsed = parse_annotated(AlgorithmId::LinearSearch, source).unwrap();

        assert_eq!(parsed.text, "def f(a):\n    x = a[0]\n\n    return x");
        assert_eq!(parsed.lines[&StepKind::Initialize], vec![1]);
        assert_eq!(parsed.lines[&StepKind::Compare], vec![1]);
        assert_eq!(parsed.lines[&StepKind::Complete], vec![3]);
    }

    #[test]
    fn test_marker_skips_blank_lines() {
        let source = "// @step:initialize\n\nint x = 0;\n";
        let parsed = parse_annotated(AlgorithmId::BubbleSort, source).unwrap();

        assert_eq!(parsed.text, "\nint x = 0;");
        assert_eq!(parsed.lines[&StepKind::Initialize], vec![1]);
    }

    #[test]
    fn test_several_markers_in_one_comment() {
        let source = "swap(a, j); // @step:compare @step:swap";
        let parsed = parse_annotated(AlgorithmId::BubbleSort, source).unwrap();

        assert_eq!(parsed.text, "swap(a, j);");
        assert_eq!(parsed.lines.len(), 2);
    }

    #[test]
    fn test_kind_may_span_several_lines() {
        let source = "a = 1  # @step:swap\nb = 2  # @step:swap\n";
        let parsed = parse_annotated(AlgorithmId::BubbleSort, source).unwrap();

        assert_eq!(parsed.lines[&StepKind::Swap], vec![0, 1]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_annotated(AlgorithmId::BubbleSort, "x = 1\n# @step:teleport\ny = 2"),
            Err(AnnotationError::UnknownKind { line: 2, name: "teleport".to_string() })
        );
        assert_eq!(
            parse_annotated(AlgorithmId::BubbleSort, "x = 1  # @step:map_insert"),
            Err(AnnotationError::ForeignKind {
                line: 1,
                algorithm: AlgorithmId::BubbleSort,
                kind: StepKind::MapInsert
            })
        );
        assert_eq!(
            parse_annotated(AlgorithmId::BubbleSort, "x = 1\n// @step:complete\n"),
            Err(AnnotationError::DanglingMarker { line: 2 })
        );
    }

    #[test]
    fn test_unmarked_hash_is_code() {
        let parsed = parse_annotated(AlgorithmId::BubbleSort, "#include <vector>").unwrap();

        assert_eq!(parsed.text, "#include <vector>");
        assert!(parsed.lines.is_empty());
    }
}
