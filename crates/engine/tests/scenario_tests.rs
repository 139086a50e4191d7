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

use algotrace_common::{logging::ensure_test_logging, AlgorithmId, InvalidInputError, StepKind};
use algotrace_engine::{
    verify, Algorithm, BubbleSort, InsertHead, InsertTail, LinearSearch, ThreeSum, TwoSum,
    TwoSumSorted,
};
use tracing::info;

#[test]
fn test_two_sum_scenario() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::TwoSum(TwoSum::new(vec![2, 7, 11, 15], 9)).generate().unwrap();

    assert_eq!(trace.final_step().snapshot().list("result"), Some(&[0, 1][..]));
    assert_eq!(trace.count(StepKind::MapLookupHit), 1);

    let hit = trace.iter().find(|step| step.kind() == StepKind::MapLookupHit).unwrap();
    assert_eq!(hit.snapshot().int("complement"), Some(2));
    assert_eq!(hit.highlights(), &[0, 1]);
}

#[test]
fn test_three_sum_scenario() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::ThreeSum(ThreeSum::new(vec![-1, 0, 1, 2, -1, -4])).generate().unwrap();

    assert_eq!(trace[0].snapshot().list("array"), Some(&[-4, -1, -1, 0, 1, 2][..]));
    assert_eq!(
        trace.final_step().snapshot().grid("triplets"),
        Some(&[vec![-1, -1, 2], vec![-1, 0, 1]][..])
    );
    // the second -1 is never an anchor
    let anchors: Vec<_> = trace
        .iter()
        .filter(|step| step.kind() == StepKind::FixAnchor)
        .filter_map(|step| step.snapshot().index("anchor"))
        .collect();
    assert_eq!(anchors, vec![0, 1, 3]);
}

#[test]
fn test_bubble_sort_scenario() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::BubbleSort(BubbleSort::new(vec![5, 2, 8, 1])).generate().unwrap();

    assert_eq!(trace.count(StepKind::Compare), 6);
    assert_eq!(trace.count(StepKind::Swap), 4);
    assert_eq!(trace.final_step().kind(), StepKind::Complete);
    assert_eq!(trace.final_step().snapshot().list("array"), Some(&[1, 2, 5, 8][..]));
    assert_eq!(trace.final_step().snapshot().int("comparisons"), Some(6));
    assert_eq!(trace.final_step().snapshot().int("swaps"), Some(4));
}

#[test]
fn test_default_bubble_sort_input() {
    ensure_test_logging(None);
    info!("Running test");
    let trace =
        Algorithm::BubbleSort(BubbleSort::new(vec![5, 2, 8, 1, 9, 3, 7, 4, 6])).generate().unwrap();

    assert_eq!(trace.count(StepKind::Compare), 36);
    assert_eq!(trace.count(StepKind::PassComplete), 8);
    assert_eq!(
        trace.final_step().snapshot().list("array"),
        Some(&[1, 2, 3, 4, 5, 6, 7, 8, 9][..])
    );
    assert_eq!(
        trace.final_step().snapshot().list("sorted"),
        Some(&[8, 7, 6, 5, 4, 3, 2, 1, 0][..])
    );
}

#[test]
fn test_insert_head_scenario() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::LinkedListInsertHead(InsertHead::new(vec![10, 20, 30], 5))
        .generate()
        .unwrap();

    assert_eq!(trace.final_step().snapshot().list("list"), Some(&[5, 10, 20, 30][..]));
    assert_eq!(trace.count(StepKind::Complete), 1);
}

#[test]
fn test_insert_tail_on_empty_list() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::LinkedListInsertTail(InsertTail::new(vec![], 9)).generate().unwrap();

    let operations: Vec<_> = trace
        .kinds()
        .filter(|kind| !matches!(kind, StepKind::Initialize | StepKind::Complete))
        .collect();
    assert_eq!(operations, vec![StepKind::CreateNode, StepKind::AssignHead]);
    assert_eq!(trace.final_step().snapshot().list("list"), Some(&[9][..]));
    assert_eq!(verify(&trace), Ok(()));
}

#[test]
fn test_insert_tail_on_base_list() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::LinkedListInsertTail(InsertTail::new(vec![10, 20, 30], 40))
        .generate()
        .unwrap();

    assert_eq!(trace.count(StepKind::Traverse), 2);
    assert_eq!(trace.count(StepKind::AttachTail), 1);
    assert_eq!(trace.final_step().snapshot().list("list"), Some(&[10, 20, 30, 40][..]));
}

#[test]
fn test_two_sum_sorted_finds_every_pair() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::TwoSumSorted(TwoSumSorted::new(vec![2, 7, 11, 15, -2, 4, 5], 9))
        .generate()
        .unwrap();

    assert_eq!(
        trace.final_step().snapshot().grid("pairs"),
        Some(&[vec![-2, 11], vec![2, 7], vec![4, 5]][..])
    );
}

#[test]
fn test_linear_search_reports_position() {
    ensure_test_logging(None);
    info!("Running test");
    let trace = Algorithm::LinearSearch(LinearSearch::new(vec![8, 3, 5], 5)).generate().unwrap();

    assert_eq!(trace.final_step().snapshot().int("found_at"), Some(2));
    assert_eq!(trace.count(StepKind::Compare), 3);
}

#[test]
fn test_too_few_elements_is_rejected() {
    ensure_test_logging(None);
    info!("Running test");
    let cases = [
        (Algorithm::ThreeSum(ThreeSum::new(vec![1, -1])), AlgorithmId::ThreeSum, 3, 2),
        (Algorithm::TwoSumSorted(TwoSumSorted::new(vec![], 0)), AlgorithmId::TwoSumSorted, 2, 0),
        (Algorithm::BubbleSort(BubbleSort::new(vec![])), AlgorithmId::BubbleSort, 1, 0),
        (Algorithm::LinearSearch(LinearSearch::new(vec![], 3)), AlgorithmId::LinearSearch, 1, 0),
    ];

    for (algorithm, id, required, actual) in cases {
        assert_eq!(
            algorithm.generate(),
            Err(InvalidInputError::TooFewElements { algorithm: id, required, actual })
        );
    }
}
