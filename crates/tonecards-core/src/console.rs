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

use crate::error::Fallible;
use crate::matcher::Match;
use crate::matcher::MatchPolicy;
use crate::types::counters::Counters;
use crate::types::topic::Topic;

/// How an answer was scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The answer matched exactly.
    Exact,
    /// The answer matched after flattening tones.
    Close,
    /// The answer was wrong, and the card goes back into the pile.
    Mistaken,
}

impl Verdict {
    pub fn judge(m: Match, policy: MatchPolicy) -> Self {
        if m.exact {
            Verdict::Exact
        } else if policy.accepts(m) {
            Verdict::Close
        } else {
            Verdict::Mistaken
        }
    }

    pub fn is_correct(self) -> bool {
        !matches!(self, Verdict::Mistaken)
    }
}

/// What the user is told after each answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub expected: String,
    pub counters: Counters,
    /// Cards still to be asked in the current round.
    pub left: usize,
    /// Cards already queued for the next round.
    pub queued: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    TopicStarted { title: String, cards: usize },
    /// Trailing cards that do not fill a whole group.
    CardsSkipped { count: usize },
    /// Stages are numbered from one.
    StageStarted { stage: usize, stages: usize },
    Answered(Feedback),
    Finished(Counters),
}

/// The user-facing side of a session. Every call blocks until the user
/// has responded, and any error aborts the session.
pub trait Console {
    /// Pick a topic, returning its index in `topics`.
    fn select_topic(&mut self, topics: &[Topic]) -> Fallible<usize>;

    fn select_group_size(&mut self, topic: &Topic) -> Fallible<usize>;

    /// Show a question and read the typed answer.
    fn read_answer(&mut self, question: &str) -> Fallible<String>;

    fn notify(&mut self, event: &Event) -> Fallible<()>;
}
