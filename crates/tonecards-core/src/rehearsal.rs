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

//! The rehearsal loop.
//!
//! A group of cards is drilled in rounds. Each round asks every card in the
//! working set once, in a freshly shuffled order. Cards answered wrongly are
//! collected into a new pile, and that pile becomes the next round's working
//! set. The loop is done when a round ends with an empty pile.

use crate::console::Console;
use crate::console::Event;
use crate::console::Feedback;
use crate::console::Verdict;
use crate::error::Fallible;
use crate::matcher::MatchPolicy;
use crate::matcher::match_answer;
use crate::rng::RankSource;
use crate::rng::Ranked;
use crate::rng::shuffle;
use crate::rng::sort_by_rank;
use crate::types::card::Card;
use crate::types::counters::Counters;

enum Phase {
    /// A round is about to start with this working set, already in
    /// presentation order.
    Round(Vec<Ranked<Card>>),
    Done,
}

pub struct Rehearser<'a, R: RankSource, C: Console> {
    policy: MatchPolicy,
    rng: &'a mut R,
    console: &'a mut C,
}

impl<'a, R: RankSource, C: Console> Rehearser<'a, R, C> {
    pub fn new(policy: MatchPolicy, rng: &'a mut R, console: &'a mut C) -> Self {
        Self {
            policy,
            rng,
            console,
        }
    }

    pub fn console(&mut self) -> &mut C {
        &mut *self.console
    }

    /// Drill `cards` until every one has been answered correctly, adding
    /// each answer to `counters`. Returns the number of rounds played.
    pub fn rehearse(&mut self, cards: &[Card], counters: &mut Counters) -> Fallible<usize> {
        let mut phase = Phase::Round(shuffle(cards.to_vec(), &mut *self.rng));
        let mut rounds = 0;
        loop {
            phase = match phase {
                Phase::Done => return Ok(rounds),
                Phase::Round(working) if working.is_empty() => Phase::Done,
                Phase::Round(working) => {
                    rounds += 1;
                    log::debug!("Round {rounds}: {} cards", working.len());
                    Phase::Round(self.round(working, counters)?)
                }
            };
        }
    }

    /// Ask every card in `working` once. Returns the cards answered wrongly,
    /// shuffled for the next round.
    fn round(
        &mut self,
        working: Vec<Ranked<Card>>,
        counters: &mut Counters,
    ) -> Fallible<Vec<Ranked<Card>>> {
        let size = working.len();
        let mut incorrect: Vec<Ranked<Card>> = Vec::new();
        for (i, Ranked { item: card, .. }) in working.into_iter().enumerate() {
            let answer = self.console.read_answer(card.question())?;
            let verdict = Verdict::judge(match_answer(&answer, card.answer()), self.policy);
            counters.record(verdict.is_correct());
            let expected = card.answer().to_string();
            if !verdict.is_correct() {
                incorrect.push(Ranked::draw(card, &mut *self.rng));
            }
            let feedback = Feedback {
                verdict,
                expected,
                counters: *counters,
                left: size - i - 1,
                queued: incorrect.len(),
            };
            self.console.notify(&Event::Answered(feedback))?;
        }
        sort_by_rank(&mut incorrect);
        Ok(incorrect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::ScriptedConsole;
    use crate::rng::TinyRng;
    use crate::rng::tests::FixedRanks;
    use crate::types::topic::Topic;

    fn numbers() -> Vec<Card> {
        vec![Card::new("1", "yi1"), Card::new("2", "er4")]
    }

    #[test]
    fn test_exact_and_close_finish_in_one_round() -> Fallible<()> {
        let mut rng = FixedRanks::new(vec![1, 2]);
        let mut console = ScriptedConsole::with_answers(&["yi1", "er1"]);
        let mut counters = Counters::new();
        let rounds = Rehearser::new(MatchPolicy::Loose, &mut rng, &mut console)
            .rehearse(&numbers(), &mut counters)?;
        assert_eq!(rounds, 1);
        assert_eq!(counters.right(), 2);
        assert_eq!(counters.total(), 2);
        let verdicts: Vec<Verdict> = console.feedback().iter().map(|f| f.verdict).collect();
        assert_eq!(verdicts, vec![Verdict::Exact, Verdict::Close]);
        Ok(())
    }

    #[test]
    fn test_wrong_answer_is_requeued() -> Fallible<()> {
        let cards = vec![Card::new("a", "x"), Card::new("b", "y")];
        let mut rng = FixedRanks::new(vec![10, 20, 5]);
        let mut console = ScriptedConsole::with_answers(&["nope", "y", "x"]);
        let mut counters = Counters::new();
        let rounds = Rehearser::new(MatchPolicy::Loose, &mut rng, &mut console)
            .rehearse(&cards, &mut counters)?;
        assert_eq!(rounds, 2);
        assert_eq!(console.questions, vec!["a", "b", "a"]);
        assert_eq!(counters.right(), 2);
        assert_eq!(counters.total(), 3);
        let feedback = console.feedback();
        assert_eq!(feedback[0].verdict, Verdict::Mistaken);
        assert_eq!(feedback[0].expected, "x");
        assert_eq!((feedback[0].left, feedback[0].queued), (1, 1));
        assert_eq!((feedback[1].left, feedback[1].queued), (0, 1));
        assert_eq!((feedback[2].left, feedback[2].queued), (0, 0));
        Ok(())
    }

    #[test]
    fn test_requeued_cards_get_fresh_ranks() -> Fallible<()> {
        let cards = vec![Card::new("a", "x"), Card::new("b", "y")];
        // a=1, b=2 in round one; requeued as a=9, b=3, so b comes first.
        let mut rng = FixedRanks::new(vec![1, 2, 9, 3]);
        let mut console = ScriptedConsole::with_answers(&["-", "-", "y", "x"]);
        let mut counters = Counters::new();
        Rehearser::new(MatchPolicy::Loose, &mut rng, &mut console)
            .rehearse(&cards, &mut counters)?;
        assert_eq!(console.questions, vec!["a", "b", "b", "a"]);
        assert_eq!(counters.right(), 2);
        assert_eq!(counters.total(), 4);
        Ok(())
    }

    #[test]
    fn test_strict_policy_requeues_close_answers() -> Fallible<()> {
        let mut rng = FixedRanks::new(vec![1, 2, 3]);
        let mut console = ScriptedConsole::with_answers(&["yi1", "er1", "er4"]);
        let mut counters = Counters::new();
        let rounds = Rehearser::new(MatchPolicy::Exact, &mut rng, &mut console)
            .rehearse(&numbers(), &mut counters)?;
        assert_eq!(rounds, 2);
        assert_eq!(counters.right(), 2);
        assert_eq!(counters.total(), 3);
        Ok(())
    }

    #[test]
    fn test_empty_group_is_done_immediately() -> Fallible<()> {
        let mut rng = TinyRng::from_seed(0);
        let mut console = ScriptedConsole::default();
        let mut counters = Counters::new();
        let rounds = Rehearser::new(MatchPolicy::Loose, &mut rng, &mut console)
            .rehearse(&[], &mut counters)?;
        assert_eq!(rounds, 0);
        assert!(console.questions.is_empty());
        assert_eq!(counters, Counters::new());
        Ok(())
    }

    #[test]
    fn test_input_failure_aborts() {
        let mut rng = TinyRng::from_seed(3);
        let mut console = ScriptedConsole::with_answers(&["wrong"]);
        let mut counters = Counters::new();
        let result = Rehearser::new(MatchPolicy::Loose, &mut rng, &mut console)
            .rehearse(&numbers(), &mut counters);
        assert!(result.is_err());
        assert_eq!(counters.total(), 1);
    }

    /// Answers wrongly the first time it sees a question, correctly after.
    struct SecondTimeLucky {
        cards: Vec<Card>,
        asked: Vec<String>,
    }

    impl Console for SecondTimeLucky {
        fn select_topic(&mut self, _topics: &[Topic]) -> Fallible<usize> {
            Ok(0)
        }

        fn select_group_size(&mut self, _topic: &Topic) -> Fallible<usize> {
            Ok(1)
        }

        fn read_answer(&mut self, question: &str) -> Fallible<String> {
            let seen = self.asked.iter().any(|q| q == question);
            self.asked.push(question.to_string());
            if seen {
                let card = self.cards.iter().find(|c| c.question() == question);
                Ok(card.map(|c| c.answer().to_string()).unwrap_or_default())
            } else {
                Ok(String::from("?"))
            }
        }

        fn notify(&mut self, _event: &Event) -> Fallible<()> {
            Ok(())
        }
    }

    #[test]
    fn test_every_card_asked_once_per_round() -> Fallible<()> {
        let cards: Vec<Card> = (0..12)
            .map(|i| Card::new(format!("q{i}"), format!("a{i}")))
            .collect();
        let mut rng = TinyRng::from_seed(2024);
        let mut console = SecondTimeLucky {
            cards: cards.clone(),
            asked: Vec::new(),
        };
        let mut counters = Counters::new();
        let rounds = Rehearser::new(MatchPolicy::Loose, &mut rng, &mut console)
            .rehearse(&cards, &mut counters)?;
        assert_eq!(rounds, 2);
        let mut expected: Vec<String> = cards.iter().map(|c| c.question().to_string()).collect();
        expected.sort();
        let mut first: Vec<String> = console.asked[..12].to_vec();
        first.sort();
        let mut second: Vec<String> = console.asked[12..].to_vec();
        second.sort();
        assert_eq!(first, expected);
        assert_eq!(second, expected);
        assert_eq!(counters.right(), 12);
        assert_eq!(counters.total(), 24);
        Ok(())
    }
}
