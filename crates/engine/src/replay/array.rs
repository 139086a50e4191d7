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

use algotrace_common::{Snapshot, StepKind, Value};

use super::{transition::Transition, ReplayError};

pub(super) fn bubble_sort(t: &Transition<'_>) -> Result<Snapshot, ReplayError> {
    let mut array = t.list("array")?;
    let n = array.len();
    let pass = t.opt_index("pass")?;
    let index = t.opt_index("index")?;
    let mut next = t.before.clone();

    // A pair found out of order must be swapped right away.
    if t.previous == StepKind::Compare && t.kind != StepKind::Swap {
        let j = t.index("index")?;
        t.ensure(t.at(&array, j)? <= t.at(&array, j + 1)?, "an out-of-order pair was not swapped")?;
    }

    match t.kind {
        StepKind::Compare => {
            let (i, j) = match index {
                Some(j) => (t.index("pass")?, j + 1),
                None => (pass.map_or(0, |p| p + 1), 0),
            };
            t.ensure(i + 1 < n && j + 1 < n - i, "compare outside the unsorted range")?;
            next.set("pass", i);
            next.set("index", j);
            next.set("comparisons", t.int("comparisons")? + 1);
        }
        StepKind::Swap => {
            t.expect_previous(&[StepKind::Compare])?;
            let j = t.index("index")?;
            t.ensure(t.at(&array, j)? > t.at(&array, j + 1)?, "swap of a pair already in order")?;
            array.swap(j, j + 1);
            next.set("array", array);
            next.set("swaps", t.int("swaps")? + 1);
        }
        StepKind::PassComplete => {
            t.expect_previous(&[StepKind::Compare, StepKind::Swap])?;
            let (i, j) = (t.index("pass")?, t.index("index")?);
            t.ensure(j + i + 2 == n, "pass ended before its last pair")?;
            let mut sorted = t.list("sorted")?;
            sorted.push((n - 1 - i) as i64);
            next.set("sorted", sorted);
            next.set("index", Value::Null);
        }
        StepKind::Complete => {
            let passes = pass.map_or(0, |p| p + 1);
            t.ensure(index.is_none() && passes + 1 >= n, "sort ended before its last pass")?;
            let mut sorted = t.list("sorted")?;
            sorted.push(0);
            next.set("sorted", sorted);
            next.set("pass", Value::Null);
        }
        _ => return Err(t.illegal("not a bubble sort step")),
    }

    Ok(next)
}

pub(super) fn linear_search(t: &Transition<'_>) -> Result<Snapshot, ReplayError> {
    let array = t.list("array")?;
    let target = t.int("target")?;
    let index = t.opt_index("index")?;
    let mut next = t.before.clone();

    match t.kind {
        StepKind::Compare => {
            t.ensure(t.previous != StepKind::MatchFound, "scan continued after a match")?;
            let i = match index {
                Some(i) => {
                    t.ensure(t.at(&array, i)? != target, "scan continued past a match")?;
                    i + 1
                }
                None => 0,
            };
            t.ensure(i < array.len(), "compare past the end of the array")?;
            next.set("index", i);
        }
        StepKind::MatchFound => {
            t.expect_previous(&[StepKind::Compare])?;
            let i = t.index("index")?;
            t.ensure(t.at(&array, i)? == target, "match on a different value")?;
            next.set("found_at", i);
        }
        StepKind::Complete => {
            if t.previous != StepKind::MatchFound {
                let i = t.index("index")?;
                t.ensure(i + 1 == array.len(), "search ended before the last element")?;
                t.ensure(t.at(&array, i)? != target, "search ended without reporting a match")?;
            }
            next.set("index", Value::Null);
        }
        _ => return Err(t.illegal("not a linear search step")),
    }

    Ok(next)
}
