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

//! Trace player
//!
//! A cursor over one exclusively owned trace. Navigation only moves an index;
//! the trace itself is never touched after construction. Every call is a
//! single synchronous transition, so the cursor always sits on a valid step.
//!
//! Animated playback is an external timer calling [`TracePlayer::advance`]
//! until it returns `false`. The player knows nothing about time.

use std::sync::Arc;

use algotrace_common::{
    AlgorithmId, DisplayLanguage, InvalidInputError, OutOfRangeError, Step, Trace,
};
use tracing::{debug, warn};

use crate::{Algorithm, LineRangeTable};

/// Navigation state over one trace.
#[derive(Debug, Clone)]
pub struct TracePlayer {
    trace: Trace,
    lines: Arc<LineRangeTable>,
    position: usize,
}

impl TracePlayer {
    /// Player at step 0, resolving lines through the builtin table
    pub fn new(trace: Trace) -> Self {
        Self::with_line_table(trace, LineRangeTable::builtin())
    }

    /// Player at step 0, resolving lines through `lines`
    pub fn with_line_table(trace: Trace, lines: Arc<LineRangeTable>) -> Self {
        debug!(algorithm = %trace.algorithm(), steps = trace.len(), "Created player");
        Self { trace, lines, position: 0 }
    }

    /// Generate a fresh trace for `algorithm` and wrap it in a new player.
    ///
    /// Each call yields an independent session; no trace is ever shared.
    pub fn from_algorithm(algorithm: &Algorithm) -> Result<Self, InvalidInputError> {
        Ok(Self::new(algorithm.generate()?))
    }

    /// The step under the cursor
    pub fn current(&self) -> &Step {
        &self.trace[self.position]
    }

    /// Move one step forward. Returns `false` and stays put at the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        debug!(position = self.position, "Advanced");
        true
    }

    /// Move one step back. Returns `false` and stays put at step 0.
    pub fn retreat(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        debug!(position = self.position, "Retreated");
        true
    }

    /// Jump to `index`. Out-of-range requests leave the cursor unchanged.
    pub fn seek(&mut self, index: isize) -> Result<&Step, OutOfRangeError> {
        let len = self.trace.len();
        match usize::try_from(index) {
            Ok(position) if position < len => {
                self.position = position;
                debug!(position, "Seeked");
                Ok(self.current())
            }
            _ => {
                warn!(index, len, "Seek out of range");
                Err(OutOfRangeError { index, len })
            }
        }
    }

    /// Back to step 0
    pub fn reset(&mut self) {
        self.position = 0;
        debug!("Reset");
    }

    /// Source lines to highlight for the current step in `language`.
    ///
    /// A missing mapping means nothing to highlight and yields an empty slice.
    pub fn resolve_highlight_lines(&self, language: DisplayLanguage) -> &[usize] {
        self.lines.lookup(self.trace.algorithm(), language, self.current().kind())
    }

    /// Display text of the reference implementation in `language`
    pub fn source_text(&self, language: DisplayLanguage) -> Option<&str> {
        self.lines.source_text(self.trace.algorithm(), language)
    }

    /// Cursor position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of steps in the trace
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Always false: a trace has at least two steps
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Whether the cursor is on the first step
    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Whether the cursor is on the last step
    pub fn is_at_end(&self) -> bool {
        self.position + 1 == self.trace.len()
    }

    /// The trace being played
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Algorithm of the trace being played
    pub fn algorithm(&self) -> AlgorithmId {
        self.trace.algorithm()
    }
}
