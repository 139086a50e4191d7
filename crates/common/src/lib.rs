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

//! algotrace common - shared data model for the trace engine
//!
//! This crate provides the types exchanged between the trace generator, the
//! trace player and whatever renders them: steps, snapshots, traces, the
//! identifiers of algorithms and display languages, and the error taxonomy.
//! It also hosts the logging setup used by every algotrace component.

/// Step, snapshot and trace types recorded by the generator and consumed by the player
pub mod types;

/// Error types raised by input validation, seeking and text-boundary parsing
pub mod error;
/// Logging setup and utilities for consistent logging across algotrace components
pub mod logging;

pub use error::*;
pub use logging::*;
pub use types::*;
