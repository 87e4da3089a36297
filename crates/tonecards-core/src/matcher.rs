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

//! Answer matching.
//!
//! Romanized tonal languages (pinyin, for example) mark tones with the
//! digits `1` to `4`. A loose match ignores those digits, so `ma1` and
//! `ma3` are close but `ma` and `ba` are not.

/// Result of comparing a typed answer to the expected one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// The answer is byte-for-byte equal to the expected answer.
    pub exact: bool,
    /// The answer equals the expected answer once tone digits are flattened.
    pub loose: bool,
}

/// Which kinds of match count as a correct answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Exact and loose matches are both accepted.
    #[default]
    Loose,
    /// Only exact matches are accepted.
    Exact,
}

impl MatchPolicy {
    pub fn accepts(self, m: Match) -> bool {
        match self {
            MatchPolicy::Loose => m.exact || m.loose,
            MatchPolicy::Exact => m.exact,
        }
    }
}

const TONE_PLACEHOLDER: char = '_';

/// Replace every tone digit (`1`-`4`) with `_`.
pub fn flatten(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '1' | '2' | '3' | '4' => TONE_PLACEHOLDER,
            other => other,
        })
        .collect()
}

pub fn match_answer(input: &str, expected: &str) -> Match {
    Match {
        exact: input == expected,
        loose: flatten(input) == flatten(expected),
    }
}
