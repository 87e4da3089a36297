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

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::types::card::Card;

/// A named collection of cards, loaded once and never modified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    title: String,
    cards: Vec<Card>,
}

impl Topic {
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            title: title.into(),
            cards,
        }
    }

    /// Decode a topic from its JSON representation:
    ///
    /// ```json
    /// { "title": "...", "cards": [ { "q": "...", "a": "..." } ] }
    /// ```
    pub fn from_json(text: &str) -> Fallible<Self> {
        let topic: Topic = serde_json::from_str(text)?;
        Ok(topic)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Sort topics by title. Titles compare byte-wise, so uppercase sorts
/// before lowercase.
pub fn sort_topics(topics: &mut [Topic]) {
    topics.sort_by(|a, b| a.title.cmp(&b.title));
}
