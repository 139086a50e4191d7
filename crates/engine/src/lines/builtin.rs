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

//! Annotated reference implementations embedded at build time.

use algotrace_common::{AlgorithmId, DisplayLanguage};

macro_rules! source {
    ($algorithm:ident, $language:ident, $file:literal) => {
        (
            AlgorithmId::$algorithm,
            DisplayLanguage::$language,
            include_str!(concat!("../../sources/", $file)),
        )
    };
}

pub(super) static SOURCES: &[(AlgorithmId, DisplayLanguage, &str)] = &[
    source!(BubbleSort, Java, "bubble_sort.java"),
    source!(BubbleSort, Python, "bubble_sort.py"),
    source!(BubbleSort, Cpp, "bubble_sort.cpp"),
    source!(LinearSearch, Java, "linear_search.java"),
    source!(LinearSearch, Python, "linear_search.py"),
    source!(LinearSearch, Cpp, "linear_search.cpp"),
    source!(TwoSum, Java, "two_sum.java"),
    source!(TwoSum, Python, "two_sum.py"),
    source!(TwoSum, Cpp, "two_sum.cpp"),
    source!(TwoSumSorted, Java, "two_sum_sorted.java"),
    source!(TwoSumSorted, Python, "two_sum_sorted.py"),
    source!(TwoSumSorted, Cpp, "two_sum_sorted.cpp"),
    source!(ThreeSum, Java, "three_sum.java"),
    source!(ThreeSum, Python, "three_sum.py"),
    source!(ThreeSum, Cpp, "three_sum.cpp"),
    source!(LinkedListInsertHead, Java, "linked_list_insert_head.java"),
    source!(LinkedListInsertHead, Python, "linked_list_insert_head.py"),
    source!(LinkedListInsertHead, Cpp, "linked_list_insert_head.cpp"),
    source!(LinkedListInsertTail, Java, "linked_list_insert_tail.java"),
    source!(LinkedListInsertTail, Python, "linked_list_insert_tail.py"),
    source!(LinkedListInsertTail, Cpp, "linked_list_insert_tail.cpp"),
];
