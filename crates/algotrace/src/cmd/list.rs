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

use algotrace_common::AlgorithmId;
use eyre::Result;
use itertools::Itertools;

/// Print every supported algorithm with its input requirements
pub fn list_algorithms(kinds: bool) -> Result<()> {
    for id in AlgorithmId::ALL {
        let operand = if id.takes_operand() { ", takes an operand" } else { "" };
        println!("{:<24} at least {} value(s){operand}", id.as_str(), id.min_elements());
        if kinds {
            println!("    {}", id.step_kinds().iter().map(|kind| kind.as_str()).join(", "));
        }
    }
    Ok(())
}
