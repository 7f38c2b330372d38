//! File-backed leaderboard: an append-only list of final scores plus the
//! name of whoever holds the best one.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

/// Location of the two leaderboard files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    scores_path: PathBuf,
    top_scorer_path: PathBuf,
}

/// Scores sorted best first, with the recorded top scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    pub scores: Vec<i64>,
    pub top_scorer: Option<String>,
}

impl Standings {
    pub fn best(&self) -> Option<i64> {
        self.scores.first().copied()
    }

    /// Heading shown above the ranked list.
    pub fn title(&self) -> String {
        format!(
            "Top score held by {}",
            self.top_scorer.as_deref().unwrap_or("nobody")
        )
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Leaderboard:")?;
        for (rank, score) in self.scores.iter().enumerate() {
            writeln!(f, "{}. {}", rank + 1, score)?;
        }
        Ok(())
    }
}

impl Leaderboard {
    pub fn new(scores_path: impl Into<PathBuf>, top_scorer_path: impl Into<PathBuf>) -> Self {
        Self {
            scores_path: scores_path.into(),
            top_scorer_path: top_scorer_path.into(),
        }
    }

    pub fn scores_path(&self) -> &Path {
        &self.scores_path
    }

    /// Append one final score, creating the file if needed.
    pub fn append_score(&self, score: i64) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.scores_path)
            .with_context(|| format!("opening {}", self.scores_path.display()))?;
        writeln!(file, "{}", score)
            .with_context(|| format!("writing {}", self.scores_path.display()))?;
        Ok(())
    }

    /// All recorded scores, best first. A missing file is an empty list and
    /// unparsable lines are skipped.
    pub fn load_scores(&self) -> anyhow::Result<Vec<i64>> {
        let text = match fs::read_to_string(&self.scores_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.scores_path.display()))
            }
        };
        let mut scores = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<i64>() {
                Ok(score) => scores.push(score),
                Err(_) => warn!(
                    "{}:{}: ignoring non-numeric score {:?}",
                    self.scores_path.display(),
                    lineno + 1,
                    line
                ),
            }
        }
        scores.sort_unstable_by(|a, b| b.cmp(a));
        Ok(scores)
    }

    /// Name of the top scorer, if one has been recorded.
    pub fn load_top_scorer(&self) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(&self.top_scorer_path) {
            Ok(text) => Ok(text
                .lines()
                .next()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.top_scorer_path.display())),
        }
    }

    /// Overwrite the top scorer name.
    pub fn save_top_scorer(&self, name: &str) -> anyhow::Result<()> {
        fs::write(&self.top_scorer_path, format!("{}\n", name))
            .with_context(|| format!("writing {}", self.top_scorer_path.display()))
    }

    /// Record a finished game and return the updated standings.
    ///
    /// `name` becomes the top scorer when `final_score` ties or beats every
    /// stored score.
    pub fn record(&self, name: &str, final_score: i64) -> anyhow::Result<Standings> {
        self.append_score(final_score)?;
        let scores = self.load_scores()?;
        if scores.first() == Some(&final_score) {
            debug!("{} holds the top score {}", name, final_score);
            self.save_top_scorer(name)?;
        }
        Ok(Standings {
            scores,
            top_scorer: self.load_top_scorer()?,
        })
    }

    /// Current standings without recording anything.
    pub fn standings(&self) -> anyhow::Result<Standings> {
        Ok(Standings {
            scores: self.load_scores()?,
            top_scorer: self.load_top_scorer()?,
        })
    }
}
