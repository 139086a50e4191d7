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

//! Two-pointer families: all unique pairs against a target, and three-sum.

use algotrace_common::{Snapshot, StepKind, Value};

use super::{transition::Transition, ReplayError};

fn skip_left(array: &[i64], mut left: usize, right: usize) -> usize {
    while left < right && array[left] == array[left + 1] {
        left += 1;
    }
    left
}

fn skip_right(array: &[i64], left: usize, mut right: usize) -> usize {
    while left < right && array[right] == array[right - 1] {
        right -= 1;
    }
    right
}

/// First anchor after `current` whose value differs from its predecessor.
fn next_anchor(array: &[i64], current: Option<usize>) -> Option<usize> {
    let start = current.map_or(0, |i| i + 1);
    (start..array.len().saturating_sub(2)).find(|&i| i == 0 || array[i] != array[i - 1])
}

pub(super) fn two_pointer(t: &Transition<'_>, triplets: bool) -> Result<Snapshot, ReplayError> {
    let array = t.list("array")?;
    let n = array.len();
    let (target, anchor, found_name) = if triplets {
        (0, t.opt_index("anchor")?, "triplets")
    } else {
        (t.int("target")?, None, "pairs")
    };
    let left = t.opt_index("left")?;
    let right = t.opt_index("right")?;
    let closed = left.zip(right).is_none_or(|(l, r)| l >= r);

    // Pointers of an open window, checked against the array bounds.
    let window = || match left.zip(right) {
        Some((l, r)) if l < r && r < n => Ok((l, r)),
        _ => Err(t.illegal("no open pointer window")),
    };
    let terms = |l: usize, r: usize| -> Result<Vec<i64>, ReplayError> {
        let anchor = anchor.map(|i| t.at(&array, i)).transpose()?;
        Ok(anchor.into_iter().chain([t.at(&array, l)?, t.at(&array, r)?]).collect())
    };

    let mut next = t.before.clone();
    match t.kind {
        StepKind::FixAnchor => {
            t.ensure(closed, "anchor moved while the window is open")?;
            let i = next_anchor(&array, anchor).ok_or_else(|| t.illegal("no anchor is left"))?;
            next.set("anchor", i);
            clear_window(&mut next);
        }
        StepKind::PointerInit => {
            let lo = if triplets {
                t.expect_previous(&[StepKind::FixAnchor])?;
                t.index("anchor")? + 1
            } else {
                t.expect_previous(&[StepKind::Initialize])?;
                0
            };
            t.ensure(array.is_sorted(), "array is not sorted")?;
            t.ensure(n > 0, "array is empty")?;
            next.set("left", lo);
            next.set("right", n - 1);
            next.set("sum", Value::Null);
        }
        StepKind::ComputeSum => {
            t.expect_previous(&[
                StepKind::PointerInit,
                StepKind::NarrowWindow,
                StepKind::MoveLeft,
                StepKind::MoveRight,
            ])?;
            let (l, r) = window()?;
            let sum = terms(l, r)?
                .into_iter()
                .try_fold(0i64, i64::checked_add)
                .ok_or_else(|| t.illegal("sum overflows"))?;
            next.set("sum", sum);
        }
        StepKind::MatchFound => {
            t.expect_previous(&[StepKind::ComputeSum])?;
            t.ensure(t.int("sum")? == target, "match on a sum that misses the target")?;
            let (l, r) = window()?;
            let mut found = t.grid(found_name)?;
            found.push(terms(l, r)?);
            next.set(found_name, found);
        }
        StepKind::SkipLeftDuplicates => {
            t.expect_previous(&[StepKind::MatchFound])?;
            let (l, r) = window()?;
            let skipped = skip_left(&array, l, r);
            t.ensure(skipped > l, "left skip over no duplicate")?;
            next.set("left", skipped);
            next.set("sum", Value::Null);
        }
        StepKind::SkipRightDuplicates => {
            t.expect_previous(&[StepKind::MatchFound, StepKind::SkipLeftDuplicates])?;
            let (l, r) = skip_bounds(t, left, right, n)?;
            if t.previous == StepKind::MatchFound {
                t.ensure(skip_left(&array, l, r) == l, "left duplicates were not skipped")?;
            }
            let skipped = skip_right(&array, l, r);
            t.ensure(skipped < r, "right skip over no duplicate")?;
            next.set("right", skipped);
            next.set("sum", Value::Null);
        }
        StepKind::NarrowWindow => {
            t.expect_previous(&[
                StepKind::MatchFound,
                StepKind::SkipLeftDuplicates,
                StepKind::SkipRightDuplicates,
            ])?;
            let (l, r) = skip_bounds(t, left, right, n)?;
            if t.previous == StepKind::MatchFound {
                t.ensure(skip_left(&array, l, r) == l, "left duplicates were not skipped")?;
            }
            if t.previous != StepKind::SkipRightDuplicates {
                t.ensure(skip_right(&array, l, r) == r, "right duplicates were not skipped")?;
            }
            let r = r.checked_sub(1).ok_or_else(|| t.illegal("right pointer underflows"))?;
            next.set("left", l + 1);
            next.set("right", r);
            next.set("sum", Value::Null);
        }
        StepKind::MoveLeft => {
            t.expect_previous(&[StepKind::ComputeSum])?;
            t.ensure(t.int("sum")? < target, "left pointer moved on a sum not below the target")?;
            let (l, _) = window()?;
            next.set("left", l + 1);
            next.set("sum", Value::Null);
        }
        StepKind::MoveRight => {
            t.expect_previous(&[StepKind::ComputeSum])?;
            t.ensure(t.int("sum")? > target, "right pointer moved on a sum not above the target")?;
            let (_, r) = window()?;
            next.set("right", r - 1);
            next.set("sum", Value::Null);
        }
        StepKind::Complete => {
            t.ensure(closed, "search ended with an open window")?;
            if triplets {
                let done = next_anchor(&array, anchor).is_none();
                t.ensure(done, "search ended before the last anchor")?;
                next.set("anchor", Value::Null);
            } else {
                t.ensure(t.previous != StepKind::Initialize, "search never started")?;
            }
            clear_window(&mut next);
        }
        _ => return Err(t.illegal("not a two-pointer step")),
    }

    Ok(next)
}

/// Pointers right after a match; they may already have met during a left skip.
fn skip_bounds(
    t: &Transition<'_>,
    left: Option<usize>,
    right: Option<usize>,
    n: usize,
) -> Result<(usize, usize), ReplayError> {
    match left.zip(right) {
        Some((l, r)) if l <= r && r < n => Ok((l, r)),
        _ => Err(t.illegal("pointers are out of bounds")),
    }
}

fn clear_window(snapshot: &mut Snapshot) {
    for name in ["left", "right", "sum"] {
        snapshot.set(name, Value::Null);
    }
}
