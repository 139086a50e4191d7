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

use algotrace_common::{AlgorithmId, DisplayLanguage, StepKind};
use algotrace_engine::LineRangeTable;
use eyre::{OptionExt, Result};

use crate::render;

/// Print the annotated reference implementation, or its kind-to-lines map
pub fn show_source(
    algorithm: AlgorithmId,
    kind: Option<StepKind>,
    map: bool,
    language: DisplayLanguage,
) -> Result<()> {
    let table = LineRangeTable::builtin();

    if map {
        for (kind, lines) in table.entries(algorithm, language) {
            println!("{:<22} {}", kind.as_str(), render::line_spans(lines));
        }
        return Ok(());
    }

    if let Some(kind) = kind {
        if !algorithm.allows(kind) {
            eyre::bail!("{algorithm} never records a {kind} step");
        }
    }

    let text = table
        .source_text(algorithm, language)
        .ok_or_eyre(format!("No {language} source registered for {algorithm}"))?;
    let highlighted = kind.map(|kind| table.lookup(algorithm, language, kind)).unwrap_or(&[]);
    println!("{}", render::listing(text, highlighted));
    Ok(())
}
