use crate::scorer::ScoreResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    LetterTracing,
    WordTracing,
    LetterMatch,
    ObjectRecognition,
    SoundGame,
    WordBuilder,
    MemoryMatch,
}

/// One completed activity, as handed to whatever stores progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub kind: ActivityKind,
    /// Letter, word or question the activity was about.
    pub item_id: String,
    pub accuracy: f32,
    pub stars: u8,
    pub time_spent_secs: u32,
    /// ISO-8601 timestamp; only its `YYYY-MM-DD` prefix is used here.
    pub completed_at: String,
}

impl ActivityRecord {
    pub fn from_score(
        kind: ActivityKind,
        item_id: impl Into<String>,
        result: ScoreResult,
        time_spent_secs: u32,
        completed_at: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            item_id: item_id.into(),
            accuracy: result.accuracy,
            stars: result.stars,
            time_spent_secs,
            completed_at: completed_at.into(),
        }
    }

    pub fn completed_on(&self, date: &str) -> bool {
        self.completed_at.starts_with(date)
    }

    /// The `YYYY-MM-DD` part of `completed_at`.
    pub fn day(&self) -> &str {
        match self.completed_at.split_once('T') {
            Some((day, _)) => day,
            None => &self.completed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    pub activities_completed: usize,
    pub stars_earned: u64,
    pub time_spent_secs: u64,
    pub average_accuracy: f32,
    pub goal_met: bool,
}

/// Rolls up the records completed on `date`. The goal is met once at least
/// `goal` activities were completed that day.
pub fn summarize_day(records: &[ActivityRecord], date: &str, goal: usize) -> DailySummary {
    let today: Vec<&ActivityRecord> = records.iter().filter(|r| r.completed_on(date)).collect();
    summarize(date, &today, goal)
}

/// Per-day summaries for the last `days` dates that have any activity,
/// oldest first.
pub fn summarize_recent(
    records: &[ActivityRecord],
    days: usize,
    goal: usize,
) -> Vec<DailySummary> {
    let mut by_day: BTreeMap<&str, Vec<&ActivityRecord>> = BTreeMap::new();
    for r in records {
        by_day.entry(r.day()).or_default().push(r);
    }

    let skip = by_day.len().saturating_sub(days);
    by_day
        .iter()
        .skip(skip)
        .map(|(date, day)| summarize(date, day, goal))
        .collect()
}

fn summarize(date: &str, day: &[&ActivityRecord], goal: usize) -> DailySummary {
    let stars_earned = day.iter().fold(0u64, |acc, r| acc + r.stars as u64);
    let time_spent_secs = day.iter().fold(0u64, |acc, r| acc + r.time_spent_secs as u64);
    let average_accuracy = if day.is_empty() {
        0.0
    } else {
        day.iter().map(|r| r.accuracy).sum::<f32>() / day.len() as f32
    };

    DailySummary {
        date: date.to_string(),
        activities_completed: day.len(),
        stars_earned,
        time_spent_secs,
        average_accuracy,
        goal_met: day.len() >= goal,
    }
}

pub fn total_stars(records: &[ActivityRecord]) -> u64 {
    records.iter().fold(0u64, |acc, r| acc + r.stars as u64)
}

/// Best attempt per item, by accuracy.
pub fn best_by_item(records: &[ActivityRecord]) -> BTreeMap<String, ScoreResult> {
    let mut best: BTreeMap<String, ScoreResult> = BTreeMap::new();
    for r in records {
        let candidate = ScoreResult {
            accuracy: r.accuracy,
            stars: r.stars,
        };
        best.entry(r.item_id.clone())
            .and_modify(|cur| {
                if candidate.accuracy > cur.accuracy {
                    *cur = candidate;
                }
            })
            .or_insert(candidate);
    }
    best
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeType {
    FirstLetterMaster,
    LetterChampion,
    AlphabetMaster,
    WordStarter,
    WordWizard,
    SentenceStar,
    DailyChampion,
    WeekWarrior,
    PerfectScore,
    SpeedDemon,
    PracticePro,
    VoiceMaster,
}

impl BadgeType {
    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstLetterMaster => "First Letter Master",
            Self::LetterChampion => "Letter Champion",
            Self::AlphabetMaster => "Alphabet Master",
            Self::WordStarter => "Word Starter",
            Self::WordWizard => "Word Wizard",
            Self::SentenceStar => "Sentence Star",
            Self::DailyChampion => "Daily Champion",
            Self::WeekWarrior => "Week Warrior",
            Self::PerfectScore => "Perfect Score",
            Self::SpeedDemon => "Speed Demon",
            Self::PracticePro => "Practice Pro",
            Self::VoiceMaster => "Voice Master",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub badge_type: BadgeType,
    pub earned_at: String,
}

/// Every badge in display order, paired with the first time it was earned.
pub fn badge_board(earned: &[Badge]) -> Vec<(BadgeType, Option<&str>)> {
    BadgeType::iter()
        .map(|kind| {
            let first = earned
                .iter()
                .filter(|b| b.badge_type == kind)
                .map(|b| b.earned_at.as_str())
                .min();
            (kind, first)
        })
        .collect()
}
