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

use std::env::current_dir;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use tonecards_core::Fallible;
use tonecards_core::MatchPolicy;
use tonecards_core::SessionConfig;
use tonecards_core::TinyRng;
use tonecards_core::run_session;

use crate::collection::load_topics;
use crate::terminal::Terminal;

/// Drill flashcards one topic at a time, retrying mistakes until every card
/// has been answered correctly.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the directory with `.topic` files. By default, the current working directory is used.
    directory: Option<String>,
    /// Index of the topic to practice. By default, you are asked.
    #[arg(long)]
    topic: Option<usize>,
    /// Number of cards per group. By default, you are asked.
    #[arg(long)]
    group_size: Option<usize>,
    /// Only accept exact answers, even when just the tone numbers differ.
    #[arg(long)]
    strict: bool,
    /// Seed for the card order. By default, the clock is used.
    #[arg(long)]
    seed: Option<u64>,
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let directory: PathBuf = match cli.directory {
        Some(directory) => PathBuf::from(directory),
        None => current_dir()?,
    };
    let topics = load_topics(&directory)?;
    log::debug!("Found {} topics in {}", topics.len(), directory.display());
    let config = SessionConfig {
        topic: cli.topic,
        group_size: cli.group_size,
        policy: if cli.strict {
            MatchPolicy::Exact
        } else {
            MatchPolicy::Loose
        },
    };
    let mut rng = match cli.seed {
        Some(seed) => TinyRng::from_seed(seed),
        None => TinyRng::from_clock(),
    };
    let mut terminal = Terminal::new(stdin().lock(), stdout().lock());
    let counters = run_session(&topics, config, &mut rng, &mut terminal)?;
    log::info!("Session finished with {counters} correct");
    Ok(())
}
