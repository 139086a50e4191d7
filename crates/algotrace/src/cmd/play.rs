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

use std::{thread, time::Duration};

use algotrace_common::DisplayLanguage;
use algotrace_engine::TracePlayer;
use eyre::Result;
use tracing::debug;

use super::{trace::describe, InputArgs};
use crate::config::Config;

/// Walk the trace from the first step to the last, pausing between steps
pub fn play(
    input: &InputArgs,
    interval_ms: u64,
    language: DisplayLanguage,
    config: &Config,
) -> Result<()> {
    let mut player = TracePlayer::new(input.trace(config)?);
    let interval = Duration::from_millis(interval_ms);
    debug!(steps = player.len(), ?interval, "Starting playback");

    loop {
        println!("{}\n", describe(&player, language, config));
        if !player.advance() {
            break;
        }
        thread::sleep(interval);
    }
    Ok(())
}
