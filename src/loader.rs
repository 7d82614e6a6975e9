use crate::error::{TfResult, TraceForgeError};
use crate::geometry::Point;
use crate::progress::{ActivityRecord, Badge};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads `x,y` rows. A header row is optional; rows that don't hold two
/// numbers are skipped.
pub fn load_stroke_csv<R: Read>(reader: R) -> TfResult<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut skipped_count = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                skipped_count += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped_count += 1;
            continue;
        }

        match (rec[0].parse::<f32>(), rec[1].parse::<f32>()) {
            (Ok(x), Ok(y)) if x.is_finite() && y.is_finite() => points.push(Point::new(x, y)),
            _ => skipped_count += 1,
        }
    }

    if skipped_count > 0 {
        debug!("Skipped {} non-sample rows in stroke CSV.", skipped_count);
    }

    Ok(points)
}

/// Reads a JSON array of `{ "x": .., "y": .. }` objects.
pub fn load_stroke_json<R: Read>(reader: R) -> TfResult<Vec<Point>> {
    let points: Vec<Point> = serde_json::from_reader(reader)?;
    Ok(points)
}

/// Picks the format from the extension: `.json` is JSON, anything else CSV.
pub fn load_stroke_from_file<P: AsRef<Path>>(path: P) -> TfResult<Vec<Point>> {
    let path = path.as_ref();
    info!("Loading stroke from: {}", path.display());
    let file = BufReader::new(File::open(path)?);

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        load_stroke_json(file)
    } else {
        load_stroke_csv(file)
    }
}

/// Reads `{ "A": "M 50 200 L ...", ... }`. Keys must be single characters.
pub fn load_letter_definitions<R: Read>(reader: R) -> TfResult<BTreeMap<char, String>> {
    let raw: BTreeMap<String, String> = serde_json::from_reader(reader)?;
    let mut out = BTreeMap::new();

    for (key, path) in raw {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                out.insert(c, path);
            }
            _ => {
                return Err(TraceForgeError::Config(format!(
                    "Letter key '{}' must be exactly one character",
                    key
                )))
            }
        }
    }
    Ok(out)
}

pub fn load_letter_definitions_from_file<P: AsRef<Path>>(
    path: P,
) -> TfResult<BTreeMap<char, String>> {
    let path = path.as_ref();
    info!("Loading letter definitions from: {}", path.display());
    load_letter_definitions(BufReader::new(File::open(path)?))
}

/// Reads a JSON array of completed activity records.
pub fn load_activity_records<R: Read>(reader: R) -> TfResult<Vec<ActivityRecord>> {
    let records: Vec<ActivityRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

pub fn load_activity_records_from_file<P: AsRef<Path>>(
    path: P,
) -> TfResult<Vec<ActivityRecord>> {
    let path = path.as_ref();
    info!("Loading activity records from: {}", path.display());
    let records = load_activity_records(BufReader::new(File::open(path)?))?;
    debug!("{} activity records loaded", records.len());
    Ok(records)
}

/// Reads a JSON array of earned badges.
pub fn load_badges_from_file<P: AsRef<Path>>(path: P) -> TfResult<Vec<Badge>> {
    let path = path.as_ref();
    info!("Loading badges from: {}", path.display());
    let badges: Vec<Badge> = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Ok(badges)
}
