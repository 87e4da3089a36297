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

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Anything that can hand out random ranks. The rehearsal loop only draws
/// ranks through this trait, so tests can plug in a fixed sequence.
pub trait RankSource {
    fn next_rank(&mut self) -> u64;
}

/// A minimal, zero-dependency, completely insecure PRNG to shuffle the cards.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Initialize the RNG from the current time.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::from_seed(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }
}

impl RankSource for TinyRng {
    fn next_rank(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }
}

/// A value paired with the random key that decides its place in a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ranked<T> {
    pub item: T,
    pub rank: u64,
}

impl<T> Ranked<T> {
    /// Pair `item` with a fresh rank drawn from `rng`.
    pub fn draw(item: T, rng: &mut impl RankSource) -> Self {
        Self {
            item,
            rank: rng.next_rank(),
        }
    }
}

/// Order ranked items by ascending rank. Ties keep their input order.
pub fn sort_by_rank<T>(v: &mut [Ranked<T>]) {
    v.sort_by_key(|r| r.rank);
}

/// Give every item a fresh rank and return them in rank order.
pub fn shuffle<T>(v: Vec<T>, rng: &mut impl RankSource) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = v.into_iter().map(|item| Ranked::draw(item, rng)).collect();
    sort_by_rank(&mut ranked);
    ranked
}
