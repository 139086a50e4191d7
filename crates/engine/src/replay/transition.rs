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

//! Typed access to the state a single step starts from.

use std::collections::BTreeMap;

use algotrace_common::{Snapshot, StepKind, Value};

use super::ReplayError;

/// One step of a trace seen as a transition from the previous snapshot.
pub(super) struct Transition<'a> {
    pub(super) index: usize,
    pub(super) previous: StepKind,
    pub(super) kind: StepKind,
    pub(super) before: &'a Snapshot,
    /// Only read for operands the previous state cannot determine.
    pub(super) after: &'a Snapshot,
}

impl Transition<'_> {
    pub(super) fn missing(&self, name: &str) -> ReplayError {
        ReplayError::MissingVariable { index: self.index, name: name.to_string() }
    }

    pub(super) fn illegal(&self, reason: impl Into<String>) -> ReplayError {
        ReplayError::IllegalTransition {
            index: self.index,
            previous: self.previous,
            kind: self.kind,
            reason: reason.into(),
        }
    }

    pub(super) fn ensure(&self, condition: bool, reason: &str) -> Result<(), ReplayError> {
        if condition {
            Ok(())
        } else {
            Err(self.illegal(reason))
        }
    }

    pub(super) fn expect_previous(&self, allowed: &[StepKind]) -> Result<(), ReplayError> {
        self.ensure(allowed.contains(&self.previous), "steps are out of order")
    }

    pub(super) fn int(&self, name: &str) -> Result<i64, ReplayError> {
        self.before.int(name).ok_or_else(|| self.missing(name))
    }

    /// Integer that may be Null
    pub(super) fn opt_int(&self, name: &str) -> Result<Option<i64>, ReplayError> {
        match self.before.get(name) {
            Some(Value::Null) => Ok(None),
            Some(Value::Int(i)) => Ok(Some(*i)),
            _ => Err(self.missing(name)),
        }
    }

    /// Non-negative integer that may be Null
    pub(super) fn opt_index(&self, name: &str) -> Result<Option<usize>, ReplayError> {
        self.opt_int(name)?
            .map(|i| usize::try_from(i).map_err(|_| self.illegal(format!("{name} is negative"))))
            .transpose()
    }

    /// Non-negative integer that must not be Null
    pub(super) fn index(&self, name: &str) -> Result<usize, ReplayError> {
        self.opt_index(name)?.ok_or_else(|| self.illegal(format!("{name} is not set")))
    }

    pub(super) fn list(&self, name: &str) -> Result<Vec<i64>, ReplayError> {
        self.before.list(name).map(<[i64]>::to_vec).ok_or_else(|| self.missing(name))
    }

    pub(super) fn grid(&self, name: &str) -> Result<Vec<Vec<i64>>, ReplayError> {
        self.before.grid(name).map(<[Vec<i64>]>::to_vec).ok_or_else(|| self.missing(name))
    }

    pub(super) fn map(&self, name: &str) -> Result<BTreeMap<i64, i64>, ReplayError> {
        self.before.map(name).cloned().ok_or_else(|| self.missing(name))
    }

    /// Bounds-checked element access
    pub(super) fn at(&self, array: &[i64], position: usize) -> Result<i64, ReplayError> {
        array
            .get(position)
            .copied()
            .ok_or_else(|| self.illegal(format!("position {position} is outside the array")))
    }
}
