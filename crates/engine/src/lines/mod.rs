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

//! Line-range lookup table
//!
//! Maps `(algorithm, display language, step kind)` to the lines of the
//! algorithm's reference implementation in that language. The lines come from
//! `@step:<kind>` markers in annotated sources (see [`parse_annotated`]), so the
//! mapping is derived rather than maintained by hand. Entries can also be
//! inserted directly.
//!
//! The builtin table covers every algorithm in Java, Python and C++. It is
//! built once per process and shared read-only behind an [`Arc`].

mod annotation;
pub use annotation::*;

mod builtin;

use std::{collections::HashMap, sync::Arc};

use algotrace_common::{AlgorithmId, DisplayLanguage, StepKind};
use once_cell::sync::Lazy;
use tracing::{debug, error};

static BUILTIN: Lazy<Arc<LineRangeTable>> = Lazy::new(|| Arc::new(LineRangeTable::load_builtin()));

/// Step kind to source line mapping, per algorithm and display language.
#[derive(Debug, Clone, Default)]
pub struct LineRangeTable {
    ranges: HashMap<(AlgorithmId, DisplayLanguage, StepKind), Vec<usize>>,
    sources: HashMap<(AlgorithmId, DisplayLanguage), String>,
}

impl LineRangeTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide table built from the embedded annotated sources.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    fn load_builtin() -> Self {
        let mut table = Self::new();
        for &(algorithm, language, source) in builtin::SOURCES {
            // A broken source only loses its own highlighting.
            if let Err(err) = table.register_source(algorithm, language, source) {
                error!(%algorithm, %language, "Failed to parse annotated source: {err}");
            }
        }
        debug!(sources = table.sources.len(), entries = table.ranges.len(), "Loaded line table");
        table
    }

    /// Set the lines of one kind, replacing any previous entry.
    pub fn insert(
        &mut self,
        algorithm: AlgorithmId,
        language: DisplayLanguage,
        kind: StepKind,
        lines: impl IntoIterator<Item = usize>,
    ) {
        let mut lines: Vec<usize> = lines.into_iter().collect();
        lines.sort_unstable();
        lines.dedup();
        self.ranges.insert((algorithm, language, kind), lines);
    }

    /// Parse an annotated source and register its display text and every marked kind.
    ///
    /// Entries of a previously registered source for the same pair are dropped.
    /// On error the table is left untouched.
    pub fn register_source(
        &mut self,
        algorithm: AlgorithmId,
        language: DisplayLanguage,
        annotated: &str,
    ) -> Result<(), AnnotationError> {
        let parsed = parse_annotated(algorithm, annotated)?;

        self.ranges.retain(|&(alg, lang, _), _| (alg, lang) != (algorithm, language));
        for (kind, lines) in parsed.lines {
            self.ranges.insert((algorithm, language, kind), lines);
        }
        self.sources.insert((algorithm, language), parsed.text);
        Ok(())
    }

    /// Lines highlighted for `kind`; empty when nothing is mapped.
    pub fn lookup(
        &self,
        algorithm: AlgorithmId,
        language: DisplayLanguage,
        kind: StepKind,
    ) -> &[usize] {
        self.ranges.get(&(algorithm, language, kind)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display text of the reference implementation, if one is registered.
    pub fn source_text(&self, algorithm: AlgorithmId, language: DisplayLanguage) -> Option<&str> {
        self.sources.get(&(algorithm, language)).map(String::as_str)
    }

    /// Every mapped kind of the pair with its lines, in the family's kind order.
    pub fn entries(
        &self,
        algorithm: AlgorithmId,
        language: DisplayLanguage,
    ) -> Vec<(StepKind, &[usize])> {
        algorithm
            .step_kinds()
            .iter()
            .filter_map(|&kind| {
                self.ranges.get(&(algorithm, language, kind)).map(|lines| (kind, lines.as_slice()))
            })
            .collect()
    }
}
