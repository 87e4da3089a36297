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

use std::fmt::Display;
use std::fmt::Formatter;

/// Running score for one topic rehearsal. Both counts only ever grow, and
/// `right` never exceeds `total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    right: usize,
    total: usize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one answer.
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.right += 1;
        }
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

impl Display for Counters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.right, self.total)
    }
}
