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

use std::fs::read_to_string;
use std::path::Path;

use tonecards_core::ErrorReport;
use tonecards_core::Fallible;
use tonecards_core::Topic;
use tonecards_core::fail;
use tonecards_core::types::topic::sort_topics;
use walkdir::WalkDir;

/// Topic files are recognized by this extension.
pub const TOPIC_EXTENSION: &str = "topic";

/// Load every topic file directly inside `directory`, sorted by title.
/// Files that cannot be read or parsed are skipped with a warning.
pub fn load_topics(directory: &Path) -> Fallible<Vec<Topic>> {
    if !directory.is_dir() {
        return fail("directory does not exist.");
    }
    let mut topics = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry =
            entry.map_err(|e| ErrorReport::new(format!("failed to read directory: {e}")))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == TOPIC_EXTENSION) {
            match read_topic(path) {
                Ok(topic) => {
                    log::debug!("Loaded {:?} from {}", topic.title(), path.display());
                    topics.push(topic);
                }
                Err(e) => log::warn!("Skipping {}: {e}", path.display()),
            }
        }
    }
    if topics.is_empty() {
        return fail(format!("no topics found in {}", directory.display()));
    }
    sort_topics(&mut topics);
    Ok(topics)
}

fn read_topic(path: &Path) -> Fallible<Topic> {
    let text = read_to_string(path)?;
    Topic::from_json(&text)
}
