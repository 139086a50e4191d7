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

//! Two-pointer window scan shared by two-sum-sorted and three-sum.

use algotrace_common::{Snapshot, StepKind, TraceBuilder};
use itertools::Itertools;

/// Which family the scan records for; decides variable names and the sum's terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    /// `array, target, left, right, sum, pairs`
    Pairs,
    /// `array, anchor, left, right, sum, triplets`
    Triplets,
}

pub(super) struct WindowState {
    flavor: Flavor,
    pub(super) array: Vec<i64>,
    pub(super) target: i64,
    pub(super) anchor: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
    sum: Option<i64>,
    pub(super) found: Vec<Vec<i64>>,
}

impl WindowState {
    /// `array` must already be sorted ascending.
    pub(super) fn new(flavor: Flavor, array: Vec<i64>, target: i64) -> Self {
        Self {
            flavor,
            array,
            target,
            anchor: None,
            left: None,
            right: None,
            sum: None,
            found: Vec::new(),
        }
    }

    pub(super) fn snapshot(&self) -> Snapshot {
        let snapshot = Snapshot::new()
            .with("array", self.array.clone())
            .with("left", self.left)
            .with("right", self.right)
            .with("sum", self.sum);
        match self.flavor {
            Flavor::Pairs => snapshot.with("target", self.target).with("pairs", self.found.clone()),
            Flavor::Triplets => {
                snapshot.with("anchor", self.anchor).with("triplets", self.found.clone())
            }
        }
    }

    /// Forget the window, e.g. before the next anchor or the final step.
    pub(super) fn clear_window(&mut self) {
        self.left = None;
        self.right = None;
        self.sum = None;
    }

    fn marks(&self, positions: &[usize]) -> Vec<usize> {
        self.anchor.into_iter().chain(positions.iter().copied()).collect()
    }

    fn terms(&self, left: usize, right: usize) -> Vec<i64> {
        let anchor = self.anchor.map(|i| self.array[i]);
        anchor.into_iter().chain([self.array[left], self.array[right]]).collect()
    }

    /// Record `pointer_init` on `[lo, hi]` and run the scan until the pointers meet.
    ///
    /// After a match the lower pointer skips following equal values, then the
    /// upper pointer skips preceding equal values, then both move inwards once.
    /// Each skip is recorded only if the pointer actually moved.
    pub(super) fn scan(&mut self, rec: &mut TraceBuilder, lo: usize, hi: usize) {
        let (mut left, mut right) = (lo, hi);
        self.left = Some(left);
        self.right = Some(right);
        self.sum = None;
        rec.record(
            StepKind::PointerInit,
            self.snapshot(),
            self.marks(&[left, right]),
            format!("Initialize two pointers: left = {left}, right = {right}"),
        );

        while left < right {
            let terms = self.terms(left, right);
            let sum: i64 = terms.iter().sum();
            self.sum = Some(sum);
            rec.record(
                StepKind::ComputeSum,
                self.snapshot(),
                self.marks(&[left, right]),
                format!("Calculate sum: {} = {sum}", terms.iter().join(" + ")),
            );

            if sum == self.target {
                self.found.push(terms.clone());
                rec.record(
                    StepKind::MatchFound,
                    self.snapshot(),
                    self.marks(&[left, right]),
                    format!("Found {}: [{}]", self.match_noun(), terms.iter().join(", ")),
                );

                let left_before = left;
                while left < right && self.array[left] == self.array[left + 1] {
                    left += 1;
                }
                if left > left_before {
                    self.left = Some(left);
                    self.sum = None;
                    rec.record(
                        StepKind::SkipLeftDuplicates,
                        self.snapshot(),
                        self.marks(&[left_before, left]),
                        format!("Skip duplicate left values: left {left_before} -> {left}"),
                    );
                }

                let right_before = right;
                while left < right && self.array[right] == self.array[right - 1] {
                    right -= 1;
                }
                if right < right_before {
                    self.right = Some(right);
                    self.sum = None;
                    rec.record(
                        StepKind::SkipRightDuplicates,
                        self.snapshot(),
                        self.marks(&[right, right_before]),
                        format!("Skip duplicate right values: right {right_before} -> {right}"),
                    );
                }

                left += 1;
                // right > lo here: the left skip stops short of an equal right neighbour.
                right -= 1;
                self.left = Some(left);
                self.right = Some(right);
                self.sum = None;
                rec.record(
                    StepKind::NarrowWindow,
                    self.snapshot(),
                    self.marks(&[left.min(self.array.len() - 1), right]),
                    format!("Move both pointers inwards: left = {left}, right = {right}"),
                );
            } else if sum < self.target {
                left += 1;
                self.left = Some(left);
                self.sum = None;
                rec.record(
                    StepKind::MoveLeft,
                    self.snapshot(),
                    self.marks(&[left, right]),
                    format!("Sum {sum} < {}: move left pointer right to {left}", self.target),
                );
            } else {
                right -= 1;
                self.right = Some(right);
                self.sum = None;
                rec.record(
                    StepKind::MoveRight,
                    self.snapshot(),
                    self.marks(&[left, right]),
                    format!("Sum {sum} > {}: move right pointer left to {right}", self.target),
                );
            }
        }
    }

    fn match_noun(&self) -> &'static str {
        match self.flavor {
            Flavor::Pairs => "pair",
            Flavor::Triplets => "triplet",
        }
    }
}
