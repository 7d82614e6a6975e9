use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::collections::BTreeMap;
use traceforge::api::EvaluationResult;
use traceforge::difficulty::DifficultyTier;
use traceforge::letters::ReferencePath;
use traceforge::progress::{BadgeType, DailySummary};
use traceforge::scorer::{ScoreDetails, ScoreResult};

pub struct LetterRow {
    pub letter: char,
    pub commands: usize,
    pub length: f32,
    pub guide_points: usize,
}

fn star_bar(stars: u8) -> String {
    (0..3)
        .map(|i| if i < stars { '★' } else { '☆' })
        .collect()
}

fn star_color(stars: u8) -> Color {
    match stars {
        3 => Color::Green,
        2 => Color::Cyan,
        1 => Color::Yellow,
        _ => Color::Red,
    }
}

fn align_right_from(table: &mut Table, first: usize, last: usize) {
    for i in first..=last {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_letter_table(rows: &[LetterRow], fallback: char) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Cmds"),
        Cell::new("Length"),
        Cell::new("Guide Pts"),
    ]);
    align_right_from(&mut table, 1, 3);

    for row in rows {
        let mut name = Cell::new(row.letter).add_attribute(Attribute::Bold);
        if row.letter == fallback {
            name = name.fg(Color::Cyan);
        }
        table.add_row(vec![
            name,
            Cell::new(row.commands),
            Cell::new(format!("{:.1}", row.length)),
            Cell::new(row.guide_points),
        ]);
    }

    println!("\n=== LETTERS ({} defined, fallback '{}') ===", rows.len(), fallback);
    println!("{table}");
}

pub fn print_guide_points(reference: &ReferencePath) {
    println!("\nLetter: {}", reference.letter);
    println!("Path:   {}", reference.path);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["#", "x", "y"]);
    align_right_from(&mut table, 0, 2);

    for (i, p) in reference.guide_points.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(format!("{:.2}", p.x)),
            Cell::new(format!("{:.2}", p.y)),
        ]);
    }
    println!("{table}");
}

pub fn print_evaluation(result: &EvaluationResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let letter = if result.fallback_used {
        format!("{} (requested {})", result.letter, result.requested)
    } else {
        result.letter.to_string()
    };

    table.add_row(vec![Cell::new("Letter").add_attribute(Attribute::Bold), Cell::new(letter)]);
    table.add_row(vec![
        Cell::new("Difficulty"),
        Cell::new(format!(
            "{} (threshold {:.0}, guide {:.0}px)",
            result.tier, result.threshold, result.guide_thickness
        )),
    ]);
    table.add_row(vec![Cell::new("Samples"), Cell::new(result.sample_count)]);
    table.add_row(vec![
        Cell::new("Match Ratio"),
        Cell::new(format!("{:.1}%", result.match_ratio * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Avg Distance"),
        Cell::new(format!("{:.2}", result.avg_distance)),
    ]);
    table.add_row(vec![
        Cell::new("Accuracy").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", result.accuracy)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Stars").add_attribute(Attribute::Bold),
        Cell::new(star_bar(result.stars)).fg(star_color(result.stars)),
    ]);

    println!("\n=== TRACE SCORE ===");
    println!("{table}");
}

pub fn print_audit_report(results: &[(char, ScoreDetails)], tier: DifficultyTier, threshold: f32) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Accuracy").fg(Color::Cyan),
        Cell::new("Match"),
        Cell::new("Avg Dist"),
        Cell::new("Max Dist"),
        Cell::new("Stars"),
    ]);
    align_right_from(&mut table, 1, 4);

    for (letter, d) in results {
        table.add_row(vec![
            Cell::new(letter).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", d.accuracy)).fg(Color::Cyan),
            Cell::new(format!("{:.0}%", d.match_ratio * 100.0)),
            Cell::new(format!("{:.2}", d.avg_distance)),
            Cell::new(format!("{:.2}", d.max_distance)),
            Cell::new(star_bar(d.stars)).fg(star_color(d.stars)),
        ]);
    }

    let mean = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|(_, d)| d.accuracy).sum::<f32>() / results.len() as f32
    };

    println!("\n=== LETTER AUDIT ({}, threshold {:.0}) ===", tier, threshold);
    println!("{table}");
    println!("Mean accuracy: {:.1}", mean);
}

pub fn print_drill(drill: &[char], seed: u64) {
    let line: Vec<String> = drill.iter().map(|c| c.to_string()).collect();
    println!("\n=== DRILL (seed {}) ===", seed);
    println!("{}", line.join(" "));
}

pub fn print_daily_summary(summary: &DailySummary, goal: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let goal_cell = if summary.goal_met {
        Cell::new(format!("met ({}/{})", summary.activities_completed, goal)).fg(Color::Green)
    } else {
        Cell::new(format!("{}/{}", summary.activities_completed, goal)).fg(Color::Yellow)
    };

    table.add_row(vec![Cell::new("Activities"), Cell::new(summary.activities_completed)]);
    table.add_row(vec![Cell::new("Stars"), Cell::new(summary.stars_earned)]);
    table.add_row(vec![
        Cell::new("Time"),
        Cell::new(format!(
            "{}m {:02}s",
            summary.time_spent_secs / 60,
            summary.time_spent_secs % 60
        )),
    ]);
    table.add_row(vec![
        Cell::new("Avg Accuracy"),
        Cell::new(format!("{:.1}", summary.average_accuracy)),
    ]);
    table.add_row(vec![Cell::new("Daily Goal").add_attribute(Attribute::Bold), goal_cell]);

    println!("\n=== PROGRESS {} ===", summary.date);
    println!("{table}");
}

pub fn print_best_attempts(best: &BTreeMap<String, ScoreResult>, lifetime_stars: u64) {
    if best.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Best", "Stars"]);
    align_right_from(&mut table, 1, 1);

    for (item, r) in best {
        table.add_row(vec![
            Cell::new(item).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", r.accuracy)),
            Cell::new(star_bar(r.stars)).fg(star_color(r.stars)),
        ]);
    }

    println!("\n=== BEST ATTEMPTS ({} stars all-time) ===", lifetime_stars);
    println!("{table}");
}

pub fn print_recent_days(days: &[DailySummary]) {
    if days.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Activities", "Stars", "Avg Accuracy", "Goal"]);
    align_right_from(&mut table, 1, 3);

    for day in days {
        let goal = if day.goal_met {
            Cell::new("met").fg(Color::Green)
        } else {
            Cell::new("-")
        };
        table.add_row(vec![
            Cell::new(&day.date),
            Cell::new(day.activities_completed),
            Cell::new(day.stars_earned),
            Cell::new(format!("{:.1}", day.average_accuracy)),
            goal,
        ]);
    }

    println!("\n=== LAST {} ACTIVE DAYS ===", days.len());
    println!("{table}");
}

pub fn print_badge_board(board: &[(BadgeType, Option<&str>)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Badge", "Earned"]);

    let mut earned = 0;
    for (badge, when) in board {
        let row = match when {
            Some(at) => {
                earned += 1;
                vec![
                    Cell::new(badge.title()).add_attribute(Attribute::Bold),
                    Cell::new(at).fg(Color::Green),
                ]
            }
            None => vec![Cell::new(badge.title()).fg(Color::DarkGrey), Cell::new("-")],
        };
        table.add_row(row);
    }

    println!("\n=== BADGES ({}/{}) ===", earned, board.len());
    println!("{table}");
}
