use std::str::FromStr;
use traceforge::progress::{
    badge_board, best_by_item, summarize_day, summarize_recent, total_stars, ActivityKind,
    ActivityRecord, Badge, BadgeType,
};
use traceforge::scorer::ScoreResult;

fn record(item: &str, accuracy: f32, stars: u8, secs: u32, at: &str) -> ActivityRecord {
    ActivityRecord::from_score(
        ActivityKind::LetterTracing,
        item,
        ScoreResult { accuracy, stars },
        secs,
        at,
    )
}

fn history() -> Vec<ActivityRecord> {
    vec![
        record("A", 92.0, 3, 30, "2026-10-14T09:00:00Z"),
        record("A", 55.0, 1, 40, "2026-10-15T08:00:00Z"),
        record("B", 75.0, 2, 20, "2026-10-15T08:05:00Z"),
        record("A", 80.0, 2, 25, "2026-10-15T08:10:00Z"),
    ]
}

#[test]
fn test_summarize_day_filters_by_date() {
    let summary = summarize_day(&history(), "2026-10-15", 5);
    assert_eq!(summary.date, "2026-10-15");
    assert_eq!(summary.activities_completed, 3);
    assert_eq!(summary.stars_earned, 5);
    assert_eq!(summary.time_spent_secs, 85);
    assert!((summary.average_accuracy - 70.0).abs() < 1e-4);
    assert!(!summary.goal_met);
}

#[test]
fn test_goal_met_at_threshold() {
    assert!(summarize_day(&history(), "2026-10-15", 3).goal_met);
    assert!(!summarize_day(&history(), "2026-10-15", 4).goal_met);
}

#[test]
fn test_empty_day() {
    let summary = summarize_day(&history(), "2026-10-16", 5);
    assert_eq!(summary.activities_completed, 0);
    assert_eq!(summary.average_accuracy, 0.0);
    assert!(!summary.goal_met);
}

#[test]
fn test_totals_and_bests() {
    let records = history();
    assert_eq!(total_stars(&records), 8);

    let best = best_by_item(&records);
    assert_eq!(best.len(), 2);
    assert_eq!(best["A"].accuracy, 92.0);
    assert_eq!(best["A"].stars, 3);
    assert_eq!(best["B"].stars, 2);
}

#[test]
fn test_record_json_shape() {
    let json = serde_json::to_value(&history()[0]).unwrap();
    assert_eq!(json["kind"], "LETTER_TRACING");
    assert_eq!(json["itemId"], "A");
    assert_eq!(json["timeSpentSecs"], 30);

    let back: ActivityRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, history()[0]);
}

#[test]
fn test_activity_kind_names() {
    assert_eq!(ActivityKind::MemoryMatch.to_string(), "memory_match");
    assert_eq!(
        ActivityKind::from_str("object_recognition").unwrap(),
        ActivityKind::ObjectRecognition
    );
}

#[test]
fn test_large_totals_do_not_wrap() {
    let records = vec![
        record("A", 90.0, 3, u32::MAX, "2026-10-15T08:00:00Z"),
        record("B", 90.0, 3, 1, "2026-10-15T09:00:00Z"),
    ];
    let summary = summarize_day(&records, "2026-10-15", 1);
    assert_eq!(summary.time_spent_secs, u32::MAX as u64 + 1);
    assert_eq!(summary.stars_earned, 6);

    let many = vec![record("A", 100.0, u8::MAX, 1, "2026-10-15T08:00:00Z"); 300];
    assert_eq!(total_stars(&many), 300 * u8::MAX as u64);
}

#[test]
fn test_recent_days_oldest_first() {
    let mut records = history();
    records.push(record("C", 60.0, 1, 10, "2026-10-12T10:00:00Z"));

    let days = summarize_recent(&records, 7, 2);
    let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-10-12", "2026-10-14", "2026-10-15"]);
    assert_eq!(days[2].activities_completed, 3);
    assert!(days[2].goal_met);
    assert!(!days[0].goal_met);
}

#[test]
fn test_recent_days_keeps_latest() {
    let days = summarize_recent(&history(), 1, 5);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, "2026-10-15");
    assert_eq!(days[0], summarize_day(&history(), "2026-10-15", 5));

    assert!(summarize_recent(&history(), 0, 5).is_empty());
    assert!(summarize_recent(&[], 7, 5).is_empty());
}

#[test]
fn test_badge_board_lists_every_badge() {
    let earned = vec![
        Badge {
            badge_type: BadgeType::PerfectScore,
            earned_at: "2026-10-15T08:00:00Z".to_string(),
        },
        Badge {
            badge_type: BadgeType::PerfectScore,
            earned_at: "2026-10-12T08:00:00Z".to_string(),
        },
        Badge {
            badge_type: BadgeType::FirstLetterMaster,
            earned_at: "2026-10-11T08:00:00Z".to_string(),
        },
    ];

    let board = badge_board(&earned);
    assert_eq!(board.len(), 12);
    assert_eq!(board[0], (BadgeType::FirstLetterMaster, Some("2026-10-11T08:00:00Z")));
    assert_eq!(board[11].0, BadgeType::VoiceMaster);

    let perfect = board.iter().find(|(b, _)| *b == BadgeType::PerfectScore).unwrap();
    assert_eq!(perfect.1, Some("2026-10-12T08:00:00Z"));
    assert_eq!(board.iter().filter(|(_, at)| at.is_none()).count(), 10);
}

#[test]
fn test_badge_json_shape() {
    let badge: Badge = serde_json::from_str(
        r#"{"badgeType": "WEEK_WARRIOR", "earnedAt": "2026-10-15T08:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(badge.badge_type, BadgeType::WeekWarrior);
    assert_eq!(badge.badge_type.title(), "Week Warrior");
    assert_eq!(badge.badge_type.to_string(), "week_warrior");
}
