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

//! tonecards-core: the rehearsal engine behind tonecards.
//!
//! - Card and topic types, and decoding topics from JSON
//! - Exact and tone-insensitive answer matching
//! - Random ordering of cards through an injectable rank source
//! - The round-based rehearsal loop and the group planner
//! - The session flow, driven through the `Console` trait

pub mod console;
pub mod error;
pub mod matcher;
pub mod planner;
pub mod rehearsal;
pub mod rng;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use console::{Console, Event, Feedback, Verdict};
pub use error::{ErrorReport, Fallible, fail};
pub use matcher::{Match, MatchPolicy, match_answer};
pub use planner::{Plan, plan_groups};
pub use rehearsal::Rehearser;
pub use rng::{RankSource, TinyRng};
pub use session::{SessionConfig, run_session};
pub use types::card::Card;
pub use types::counters::Counters;
pub use types::topic::Topic;
