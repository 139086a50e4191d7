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

//! Singly linked list insertion at either end.
//!
//! The list is modelled by two parallel variables: `list` holds the values in
//! order and `node_ids` their identities. Existing nodes are numbered `1..=n`
//! by position and a new node takes `max(ids) + 1`, so ids stay unique. The node
//! being inserted lives in `new_node_id`, `new_node_value` and `new_node_next`
//! until it is linked into the list, after which those three are Null again.
//! Highlights are positions in `list`.

use algotrace_common::{AlgorithmId, InvalidInputError, Snapshot, StepKind, Trace, TraceBuilder};
use serde::{Deserialize, Serialize};

use super::{check_operand, check_values, TraceGenerator};
use crate::Limits;

/// Insert `value` in front of the current head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertHead {
    /// Base list, head first
    pub values: Vec<i64>,
    /// Value of the new node
    pub value: i64,
}

impl InsertHead {
    /// Insert `value` at the head of `values`
    pub fn new(values: Vec<i64>, value: i64) -> Self {
        Self { values, value }
    }
}

/// Walk a cursor to the last node and attach `value` behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertTail {
    /// Base list, head first
    pub values: Vec<i64>,
    /// Value of the new node
    pub value: i64,
}

impl InsertTail {
    /// Insert `value` at the tail of `values`
    pub fn new(values: Vec<i64>, value: i64) -> Self {
        Self { values, value }
    }
}

struct NewNode {
    id: i64,
    value: i64,
    next: Option<i64>,
}

struct ListState {
    list: Vec<i64>,
    node_ids: Vec<i64>,
    new_node: Option<NewNode>,
    cursor: Option<usize>,
    with_cursor: bool,
}

impl ListState {
    fn new(values: &[i64], with_cursor: bool) -> Self {
        Self {
            list: values.to_vec(),
            node_ids: (1..=values.len() as i64).collect(),
            new_node: None,
            cursor: None,
            with_cursor,
        }
    }

    fn next_id(&self) -> i64 {
        self.node_ids.iter().copied().max().unwrap_or(0) + 1
    }

    fn snapshot(&self) -> Snapshot {
        let node = self.new_node.as_ref();
        let snapshot = Snapshot::new()
            .with("list", self.list.clone())
            .with("node_ids", self.node_ids.clone())
            .with("head", self.node_ids.first().copied())
            .with("new_node_id", node.map(|n| n.id))
            .with("new_node_value", node.map(|n| n.value))
            .with("new_node_next", node.and_then(|n| n.next));
        if self.with_cursor {
            snapshot.with("cursor", self.cursor)
        } else {
            snapshot
        }
    }

    fn create_node(&mut self, rec: &mut TraceBuilder, value: i64) {
        self.new_node = Some(NewNode { id: self.next_id(), value, next: None });
        rec.record(
            StepKind::CreateNode,
            self.snapshot(),
            Vec::new(),
            format!("Create new node with value {value}"),
        );
    }

    /// Move the pending node into the list at `position`.
    fn link_in(&mut self, position: usize) {
        if let Some(node) = self.new_node.take() {
            self.list.insert(position, node.value);
            self.node_ids.insert(position, node.id);
        }
    }

    fn finish(self, rec: TraceBuilder, position: usize, value: i64, end: &str) -> Trace {
        rec.finish(
            self.snapshot(),
            vec![position],
            format!("Operation complete! Inserted {value} at the {end} of the linked list"),
        )
    }
}

impl TraceGenerator for InsertHead {
    const ID: AlgorithmId = AlgorithmId::LinkedListInsertHead;

    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        check_values(Self::ID, &self.values, limits)?;
        check_operand(&self.values, self.value, limits)
    }

    fn record(&self) -> Trace {
        let mut state = ListState::new(&self.values, false);
        let mut rec = TraceBuilder::new(
            Self::ID,
            state.snapshot(),
            format!("Initial state: list of {} node(s)", self.values.len()),
        );

        state.create_node(&mut rec, self.value);

        let head = state.node_ids.first().copied();
        if let Some(node) = state.new_node.as_mut() {
            node.next = head;
        }
        let narrative = match head {
            Some(_) => "Point new node's next to the current head".to_string(),
            None => "Point new node's next to the current head (NULL)".to_string(),
        };
        let marks = if head.is_some() { vec![0] } else { Vec::new() };
        rec.record(StepKind::LinkNext, state.snapshot(), marks, narrative);

        state.link_in(0);
        rec.record(
            StepKind::AssignHead,
            state.snapshot(),
            vec![0],
            "Update head to point to the new node",
        );

        state.finish(rec, 0, self.value, "head")
    }
}

impl TraceGenerator for InsertTail {
    const ID: AlgorithmId = AlgorithmId::LinkedListInsertTail;

    fn validate(&self, limits: &Limits) -> Result<(), InvalidInputError> {
        check_values(Self::ID, &self.values, limits)?;
        check_operand(&self.values, self.value, limits)
    }

    fn record(&self) -> Trace {
        let n = self.values.len();
        let mut state = ListState::new(&self.values, true);

        if n == 0 {
            let mut rec =
                TraceBuilder::new(Self::ID, state.snapshot(), "Initial state: the list is empty");
            state.create_node(&mut rec, self.value);
            state.link_in(0);
            rec.record(
                StepKind::AssignHead,
                state.snapshot(),
                vec![0],
                "List is empty, set head to the new node",
            );
            return state.finish(rec, 0, self.value, "tail");
        }

        let mut rec = TraceBuilder::new(
            Self::ID,
            state.snapshot(),
            format!("Initial state: list of {n} node(s)"),
        );
        state.create_node(&mut rec, self.value);

        state.cursor = Some(0);
        rec.record(
            StepKind::InitCursor,
            state.snapshot(),
            vec![0],
            "Initialize temp pointer to head",
        );

        for k in 1..n {
            state.cursor = Some(k);
            rec.record(
                StepKind::Traverse,
                state.snapshot(),
                vec![k],
                format!("Traverse to next node (temp->next != NULL): node {}", state.list[k]),
            );
        }

        rec.record(
            StepKind::ReachTail,
            state.snapshot(),
            vec![n - 1],
            format!("Reached the last node {} (temp->next == NULL)", state.list[n - 1]),
        );

        state.cursor = None;
        state.link_in(n);
        rec.record(
            StepKind::AttachTail,
            state.snapshot(),
            vec![n],
            "Attach the new node after the last node",
        );

        state.finish(rec, n, self.value, "tail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_head_links_to_old_head() {
        let trace = InsertHead::new(vec![10, 20, 30], 5).record();
        let kinds: Vec<_> = trace.kinds().collect();

        assert_eq!(
            kinds,
            vec![
                StepKind::Initialize,
                StepKind::CreateNode,
                StepKind::LinkNext,
                StepKind::AssignHead,
                StepKind::Complete
            ]
        );
        assert_eq!(trace[1].snapshot().int("new_node_id"), Some(4));
        assert_eq!(trace[2].snapshot().int("new_node_next"), Some(1));

        let last = trace.final_step().snapshot();
        assert_eq!(last.list("list"), Some(&[5, 10, 20, 30][..]));
        assert_eq!(last.list("node_ids"), Some(&[4, 1, 2, 3][..]));
        assert_eq!(last.int("head"), Some(4));
        assert!(last.is_null("new_node_id"));
    }

    #[test]
    fn test_insert_head_into_empty_list() {
        let trace = InsertHead::new(vec![], 7).record();

        assert!(trace[2].snapshot().is_null("new_node_next"));
        assert!(trace[2].highlights().is_empty());
        assert_eq!(trace.final_step().snapshot().list("list"), Some(&[7][..]));
    }

    #[test]
    fn test_insert_tail_short_circuits_on_empty_list() {
        let trace = InsertTail::new(vec![], 7).record();
        let kinds: Vec<_> = trace.kinds().collect();

        assert_eq!(
            kinds,
            vec![
                StepKind::Initialize,
                StepKind::CreateNode,
                StepKind::AssignHead,
                StepKind::Complete
            ]
        );
        assert_eq!(trace.final_step().snapshot().int("head"), Some(1));
    }

    #[test]
    fn test_insert_tail_walks_the_list() {
        let trace = InsertTail::new(vec![10, 20, 30], 40).record();

        assert_eq!(trace.count(StepKind::Traverse), 2);
        let reach = trace.iter().find(|step| step.kind() == StepKind::ReachTail).unwrap();
        assert_eq!(reach.snapshot().index("cursor"), Some(2));

        let last = trace.final_step().snapshot();
        assert_eq!(last.list("list"), Some(&[10, 20, 30, 40][..]));
        assert_eq!(last.list("node_ids"), Some(&[1, 2, 3, 4][..]));
        assert!(last.is_null("cursor"));
        assert_eq!(trace.final_step().highlights(), &[3]);
    }
}
