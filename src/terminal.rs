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

use std::io::BufRead;
use std::io::Write;

use tonecards_core::Console;
use tonecards_core::Event;
use tonecards_core::Fallible;
use tonecards_core::Topic;
use tonecards_core::Verdict;
use tonecards_core::fail;

/// A line-oriented console over any reader and writer. In production this
/// wraps stdin and stdout.
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line with surrounding whitespace removed.
    fn read_line(&mut self) -> Fallible<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return fail("unexpected end of input");
        }
        Ok(line.trim().to_string())
    }

    fn read_number(&mut self, error: &str) -> Fallible<usize> {
        let line = self.read_line()?;
        match line.parse::<usize>() {
            Ok(n) => Ok(n),
            Err(_) => fail(error),
        }
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn select_topic(&mut self, topics: &[Topic]) -> Fallible<usize> {
        writeln!(self.output, "Pick a topic to practice:")?;
        for (i, topic) in topics.iter().enumerate() {
            writeln!(self.output, "{i}: {}", topic.title())?;
        }
        write!(self.output, "Type the number of the topic to practice: ")?;
        self.read_number("Invalid topic number")
    }

    fn select_group_size(&mut self, topic: &Topic) -> Fallible<usize> {
        writeln!(
            self.output,
            "Pick group size. There are {} cards. Size 8 is EASY, 32+ is HARD:",
            topic.len()
        )?;
        write!(self.output, "Group Size: ")?;
        self.read_number("Invalid group size")
    }

    fn read_answer(&mut self, question: &str) -> Fallible<String> {
        write!(self.output, "Q: {question}\nA? ")?;
        self.read_line()
    }

    fn notify(&mut self, event: &Event) -> Fallible<()> {
        match event {
            Event::TopicStarted { title, .. } => {
                writeln!(self.output, "🍿 REHEARSE: {title}")?;
            }
            Event::CardsSkipped { count } => {
                writeln!(
                    self.output,
                    "⚠️ {count} trailing cards do not fill a group and will be skipped"
                )?;
            }
            Event::StageStarted { stage, stages } => {
                writeln!(self.output, "✌️ REHEARSE STAGE {stage}/{stages}")?;
            }
            Event::Answered(feedback) => {
                let score = feedback.counters;
                let left = format!("{}+{} cards left", feedback.left, feedback.queued);
                match feedback.verdict {
                    Verdict::Exact => {
                        writeln!(self.output, "✅ {score} CORRECT {left}")?;
                    }
                    Verdict::Close => {
                        writeln!(
                            self.output,
                            "☑️  {}: CLOSE: {score} CORRECT {left}",
                            feedback.expected
                        )?;
                    }
                    Verdict::Mistaken => {
                        writeln!(
                            self.output,
                            "⾮ {}: MISTAKEN: {score} CORRECT {left}",
                            feedback.expected
                        )?;
                    }
                }
            }
            Event::Finished(_) => {
                writeln!(
                    self.output,
                    "👏👏👏 GOOD JOB PRACTICING. Hope to see you again soon!"
                )?;
            }
        }
        Ok(())
    }
}
