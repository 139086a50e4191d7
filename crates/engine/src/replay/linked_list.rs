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

pub(super) fn insert(t: &Transition<'_>, at_tail: bool) -> Result<Snapshot, ReplayError> {
    let mut list = t.list("list")?;
    let mut node_ids = t.list("node_ids")?;
    let mut next = t.before.clone();

    match t.kind {
        StepKind::CreateNode => {
            t.expect_previous(&[StepKind::Initialize])?;
            let value = t.after.int("new_node_value").ok_or_else(|| t.missing("new_node_value"))?;
            next.set("new_node_id", node_ids.iter().copied().max().unwrap_or(0) + 1);
            next.set("new_node_value", value);
            next.set("new_node_next", Value::Null);
        }
        StepKind::LinkNext => {
            t.expect_previous(&[StepKind::CreateNode])?;
            next.set("new_node_next", node_ids.first().copied());
        }
        StepKind::AssignHead => {
            if at_tail {
                t.expect_previous(&[StepKind::CreateNode])?;
                t.ensure(list.is_empty(), "head replaced on a non-empty list")?;
            } else {
                t.expect_previous(&[StepKind::LinkNext])?;
            }
            let (id, value) = (t.int("new_node_id")?, t.int("new_node_value")?);
            list.insert(0, value);
            node_ids.insert(0, id);
            link_in(&mut next, list, node_ids);
        }
        StepKind::InitCursor => {
            t.expect_previous(&[StepKind::CreateNode])?;
            t.ensure(!list.is_empty(), "cursor on an empty list")?;
            next.set("cursor", 0usize);
        }
        StepKind::Traverse => {
            t.expect_previous(&[StepKind::InitCursor, StepKind::Traverse])?;
            let cursor = t.index("cursor")?;
            t.ensure(cursor + 1 < list.len(), "traversal past the last node")?;
            next.set("cursor", cursor + 1);
        }
        StepKind::ReachTail => {
            t.expect_previous(&[StepKind::InitCursor, StepKind::Traverse])?;
            t.ensure(t.index("cursor")? + 1 == list.len(), "tail reached before the last node")?;
        }
        StepKind::AttachTail => {
            t.expect_previous(&[StepKind::ReachTail])?;
            let (id, value) = (t.int("new_node_id")?, t.int("new_node_value")?);
            list.push(value);
            node_ids.push(id);
            next.set("cursor", Value::Null);
            link_in(&mut next, list, node_ids);
        }
        StepKind::Complete => {
            let allowed: &[StepKind] = if at_tail {
                &[StepKind::AssignHead, StepKind::AttachTail]
            } else {
                &[StepKind::AssignHead]
            };
            t.expect_previous(allowed)?;
        }
        _ => return Err(t.illegal("not a linked list step")),
    }

    Ok(next)
}

/// The pending node is now part of the list.
fn link_in(next: &mut Snapshot, list: Vec<i64>, node_ids: Vec<i64>) {
    next.set("head", node_ids.first().copied());
    next.set("list", list);
    next.set("node_ids", node_ids);
    for name in ["new_node_id", "new_node_value", "new_node_next"] {
        next.set(name, Value::Null);
    }
}
