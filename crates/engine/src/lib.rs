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

//! algotrace engine
//!
//! Turns an algorithm and its input into an immutable [`Trace`](algotrace_common::Trace),
//! maps every step kind to the source lines it corresponds to, and steps
//! through a trace with a cursor.

pub mod config;
pub use config::*;

pub mod generator;
pub use generator::*;

pub mod input;
pub use input::*;

pub mod lines;
pub use lines::*;

pub mod player;
pub use player::*;

pub mod replay;
pub use replay::*;
