// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::console::Console;
use crate::console::Event;
use crate::error::Fallible;
use crate::error::fail;
use crate::rehearsal::Rehearser;
use crate::rng::RankSource;
use crate::types::card::Card;
use crate::types::counters::Counters;

/// A topic split into groups of equal size.
///
/// Only whole groups are kept: when the group size does not divide the
/// number of cards, the trailing cards are left out and never drilled.
/// `skipped` says how many.
#[derive(Debug, PartialEq, Eq)]
pub struct Plan<'a> {
    groups: Vec<&'a [Card]>,
    skipped: usize,
}

pub fn plan_groups(cards: &[Card], group_size: usize) -> Fallible<Plan<'_>> {
    if group_size < 1 {
        return fail("Invalid group size");
    }
    let chunks = cards.chunks_exact(group_size);
    let skipped = chunks.remainder().len();
    Ok(Plan {
        groups: chunks.collect(),
        skipped,
    })
}

impl<'a> Plan<'a> {
    pub fn groups(&self) -> &[&'a [Card]] {
        &self.groups
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Drill the groups in order, each one to completion before the next.
    pub fn rehearse<R: RankSource, C: Console>(
        &self,
        rehearser: &mut Rehearser<'_, R, C>,
        counters: &mut Counters,
    ) -> Fallible<()> {
        let stages = self.groups.len();
        for (i, group) in self.groups.iter().enumerate() {
            log::debug!("Stage {}/{stages}: {} cards", i + 1, group.len());
            rehearser.console().notify(&Event::StageStarted {
                stage: i + 1,
                stages,
            })?;
            rehearser.rehearse(group, counters)?;
        }
        Ok(())
    }
}
