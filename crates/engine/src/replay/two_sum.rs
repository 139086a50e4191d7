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

pub(super) fn two_sum(t: &Transition<'_>) -> Result<Snapshot, ReplayError> {
    let array = t.list("array")?;
    let index = t.opt_index("index")?;
    let mut next = t.before.clone();

    match t.kind {
        StepKind::ComputeComplement => {
            t.expect_previous(&[StepKind::Initialize, StepKind::MapInsert])?;
            let i = index.map_or(0, |i| i + 1);
            let current = t.at(&array, i)?;
            let complement = t
                .int("target")?
                .checked_sub(current)
                .ok_or_else(|| t.illegal("complement overflows"))?;
            next.set("index", i);
            next.set("current", current);
            next.set("complement", complement);
        }
        StepKind::MapLookupHit => {
            t.expect_previous(&[StepKind::ComputeComplement])?;
            let complement = t.int("complement")?;
            let j = *t
                .map("map")?
                .get(&complement)
                .ok_or_else(|| t.illegal("hit on a complement that is not in the map"))?;
            next.set("result", vec![j, t.index("index")? as i64]);
        }
        StepKind::MapLookupMiss => {
            t.expect_previous(&[StepKind::ComputeComplement])?;
            let complement = t.int("complement")?;
            t.ensure(!t.map("map")?.contains_key(&complement), "miss on a stored complement")?;
        }
        StepKind::MapInsert => {
            t.expect_previous(&[StepKind::MapLookupMiss])?;
            let mut map = t.map("map")?;
            map.insert(t.int("current")?, t.index("index")? as i64);
            next.set("map", map);
        }
        StepKind::Complete => {
            match t.previous {
                StepKind::MapLookupHit => {}
                StepKind::MapInsert => t.ensure(
                    index.is_some_and(|i| i + 1 == array.len()),
                    "search ended before the last element",
                )?,
                _ => return Err(t.illegal("steps are out of order")),
            }
            for name in ["index", "current", "complement"] {
                next.set(name, Value::Null);
            }
        }
        _ => return Err(t.illegal("not a two-sum step")),
    }

    Ok(next)
}
