use std::io::{Cursor, Write};
use tempfile::{Builder, NamedTempFile};
use traceforge::error::TraceForgeError;
use traceforge::geometry::Point;
use traceforge::loader::{
    load_letter_definitions, load_stroke_csv, load_stroke_from_file, load_stroke_json,
};

// --- STROKE CSV ---

#[test]
fn test_csv_parses_plain_rows() {
    let data = "50,50\n50,100\n 50 , 150 \n";
    let points = load_stroke_csv(Cursor::new(data)).unwrap();
    assert_eq!(
        points,
        vec![
            Point::new(50.0, 50.0),
            Point::new(50.0, 100.0),
            Point::new(50.0, 150.0)
        ]
    );
}

#[test]
fn test_csv_skips_header_and_junk() {
    let data = "x,y\n1,2\nonly_one\n3,four\n5,6,extra\nNaN,1\n";
    let points = load_stroke_csv(Cursor::new(data)).unwrap();
    assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(5.0, 6.0)]);
}

#[test]
fn test_csv_empty_input() {
    assert!(load_stroke_csv(Cursor::new("")).unwrap().is_empty());
}

// --- STROKE JSON ---

#[test]
fn test_json_stroke() {
    let data = r#"[{"x": 1.5, "y": 2}, {"x": 3, "y": 4}]"#;
    let points = load_stroke_json(Cursor::new(data)).unwrap();
    assert_eq!(points, vec![Point::new(1.5, 2.0), Point::new(3.0, 4.0)]);
}

#[test]
fn test_json_stroke_malformed() {
    let result = load_stroke_json(Cursor::new("[{\"x\": 1}]"));
    assert!(matches!(result, Err(TraceForgeError::Json(_))));
}

// --- FILE DISPATCH ---

#[test]
fn test_file_dispatch_by_extension() {
    let mut json = Builder::new().suffix(".json").tempfile().unwrap();
    write!(json, r#"[{{"x": 10, "y": 20}}]"#).unwrap();
    assert_eq!(
        load_stroke_from_file(json.path()).unwrap(),
        vec![Point::new(10.0, 20.0)]
    );

    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "10,20").unwrap();
    writeln!(csv, "30,40").unwrap();
    assert_eq!(load_stroke_from_file(csv.path()).unwrap().len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_stroke_from_file("/definitely/not/here.csv");
    assert!(matches!(result, Err(TraceForgeError::Io(_))));
}

// --- LETTER DEFINITIONS ---

#[test]
fn test_letter_definitions() {
    let data = r#"{ "a": "M 0 0 L 10 10", "7": "M 1 1 L 2 2" }"#;
    let defs = load_letter_definitions(Cursor::new(data)).unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[&'a'], "M 0 0 L 10 10");
    assert_eq!(defs[&'7'], "M 1 1 L 2 2");
}

#[test]
fn test_letter_definitions_reject_long_keys() {
    let data = r#"{ "AB": "M 0 0 L 10 10" }"#;
    assert!(matches!(
        load_letter_definitions(Cursor::new(data)),
        Err(TraceForgeError::Config(_))
    ));
}
