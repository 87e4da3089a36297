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

//! Top-level flow of one practice run: pick a topic, pick a group size,
//! drill every group, report the final score.

use crate::console::Console;
use crate::console::Event;
use crate::error::Fallible;
use crate::error::fail;
use crate::matcher::MatchPolicy;
use crate::planner::plan_groups;
use crate::rehearsal::Rehearser;
use crate::rng::RankSource;
use crate::types::counters::Counters;
use crate::types::topic::Topic;

/// Choices that may be fixed up front instead of asked interactively.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfig {
    pub topic: Option<usize>,
    pub group_size: Option<usize>,
    pub policy: MatchPolicy,
}

/// Run a practice session over `topics`, which must already be sorted by
/// title. Returns the final score of the chosen topic.
pub fn run_session<R: RankSource, C: Console>(
    topics: &[Topic],
    config: SessionConfig,
    rng: &mut R,
    console: &mut C,
) -> Fallible<Counters> {
    let index = match config.topic {
        Some(index) => index,
        None => console.select_topic(topics)?,
    };
    let Some(topic) = topics.get(index) else {
        return fail("Invalid topic number");
    };
    log::info!("Rehearsing {:?} ({} cards)", topic.title(), topic.len());
    console.notify(&Event::TopicStarted {
        title: topic.title().to_string(),
        cards: topic.len(),
    })?;

    let group_size = match config.group_size {
        Some(size) => size,
        None => console.select_group_size(topic)?,
    };
    let plan = plan_groups(topic.cards(), group_size)?;
    if plan.skipped() > 0 {
        log::warn!(
            "{} trailing cards of {:?} do not fill a group of {group_size}",
            plan.skipped(),
            topic.title()
        );
        console.notify(&Event::CardsSkipped {
            count: plan.skipped(),
        })?;
    }

    let mut counters = Counters::new();
    let mut rehearser = Rehearser::new(config.policy, rng, console);
    plan.rehearse(&mut rehearser, &mut counters)?;
    console.notify(&Event::Finished(counters))?;
    Ok(counters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Feedback;
    use crate::console::Verdict;
    use crate::console::testing::ScriptedConsole;
    use crate::rng::TinyRng;
    use crate::rng::tests::FixedRanks;
    use crate::types::card::Card;

    fn topics() -> Vec<Topic> {
        vec![
            Topic::new(
                "T",
                vec![Card::new("1", "yi1"), Card::new("2", "er4")],
            ),
            Topic::new("U", vec![Card::new("3", "san1")]),
        ]
    }

    #[test]
    fn test_numbers_scenario() -> Fallible<()> {
        let mut rng = FixedRanks::new(vec![1, 2]);
        let mut console = ScriptedConsole::with_answers(&["yi1", "er1"]);
        console.topic = Some(0);
        console.group_size = Some(2);
        let counters = run_session(&topics(), SessionConfig::default(), &mut rng, &mut console)?;
        assert_eq!(counters.right(), 2);
        assert_eq!(counters.total(), 2);
        assert_eq!(
            console.events,
            vec![
                Event::TopicStarted {
                    title: "T".to_string(),
                    cards: 2
                },
                Event::StageStarted {
                    stage: 1,
                    stages: 1
                },
                Event::Answered(Feedback {
                    verdict: Verdict::Exact,
                    expected: "yi1".to_string(),
                    counters: {
                        let mut c = Counters::new();
                        c.record(true);
                        c
                    },
                    left: 1,
                    queued: 0,
                }),
                Event::Answered(Feedback {
                    verdict: Verdict::Close,
                    expected: "er4".to_string(),
                    counters,
                    left: 0,
                    queued: 0,
                }),
                Event::Finished(counters),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_preset_choices_skip_prompts() -> Fallible<()> {
        let mut rng = TinyRng::from_seed(5);
        // No topic or group size scripted: asking for either would fail.
        let mut console = ScriptedConsole::with_answers(&["san1"]);
        let config = SessionConfig {
            topic: Some(1),
            group_size: Some(1),
            policy: MatchPolicy::Exact,
        };
        let counters = run_session(&topics(), config, &mut rng, &mut console)?;
        assert_eq!(counters.right(), 1);
        assert_eq!(counters.total(), 1);
        Ok(())
    }

    #[test]
    fn test_invalid_topic_number() {
        let mut rng = TinyRng::from_seed(5);
        let mut console = ScriptedConsole::default();
        console.topic = Some(2);
        let result = run_session(&topics(), SessionConfig::default(), &mut rng, &mut console);
        assert_eq!(result.unwrap_err().to_string(), "error: Invalid topic number");
        assert!(console.events.is_empty());
    }

    #[test]
    fn test_invalid_group_size_aborts_before_any_question() {
        let mut rng = TinyRng::from_seed(5);
        let mut console = ScriptedConsole::with_answers(&["yi1"]);
        console.topic = Some(0);
        console.group_size = Some(0);
        let result = run_session(&topics(), SessionConfig::default(), &mut rng, &mut console);
        assert_eq!(result.unwrap_err().to_string(), "error: Invalid group size");
        assert!(console.questions.is_empty());
    }

    #[test]
    fn test_skipped_cards_are_reported() -> Fallible<()> {
        let mut rng = FixedRanks::new(vec![1, 2]);
        let mut console = ScriptedConsole::with_answers(&["yi1", "er4"]);
        let config = SessionConfig {
            topic: Some(0),
            group_size: Some(2),
            ..SessionConfig::default()
        };
        let topics = vec![Topic::new(
            "T",
            vec![
                Card::new("1", "yi1"),
                Card::new("2", "er4"),
                Card::new("3", "san1"),
            ],
        )];
        let counters = run_session(&topics, config, &mut rng, &mut console)?;
        assert_eq!(counters.total(), 2);
        assert_eq!(console.events[1], Event::CardsSkipped { count: 1 });
        assert_eq!(console.questions, vec!["1", "2"]);
        Ok(())
    }

    #[test]
    fn test_topic_smaller_than_group() -> Fallible<()> {
        let mut rng = TinyRng::from_seed(5);
        let mut console = ScriptedConsole::default();
        let config = SessionConfig {
            topic: Some(0),
            group_size: Some(8),
            ..SessionConfig::default()
        };
        let counters = run_session(&topics(), config, &mut rng, &mut console)?;
        assert_eq!(counters, Counters::new());
        assert!(console.questions.is_empty());
        assert_eq!(console.events.last(), Some(&Event::Finished(Counters::new())));
        Ok(())
    }
}
