use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;
use traceforge::error::TraceForgeError;
use traceforge::geometry::Point;
use traceforge::letters::{all_letters, get_reference_path, LetterCatalog, LetterLookup};

#[test]
fn test_builtin_alphabet_is_complete() {
    let letters = all_letters();
    assert_eq!(letters.len(), 26);
    assert_eq!(letters.first(), Some(&'A'));
    assert_eq!(letters.last(), Some(&'Z'));
}

#[test]
fn test_lookup_is_case_insensitive() {
    assert_eq!(get_reference_path('b'), get_reference_path('B'));
    assert_eq!(get_reference_path('b').letter, 'B');
}

#[test]
fn test_letter_a_endpoints() {
    // M 50 200 L 150 50 L 250 200 M 100 150 L 200 150
    let a = get_reference_path('A');
    assert_eq!(a.guide_points.len(), 50);
    assert_eq!(a.guide_points[0], Point::new(50.0, 200.0));
    assert_eq!(a.guide_points[49], Point::new(200.0, 150.0));
}

#[test]
fn test_guide_points_follow_arc_length() {
    // L is two 150-unit strokes; 7 samples put one every 50 units, with the
    // corner sample landing on (50, 200).
    let catalog = LetterCatalog::builtin();
    let l = catalog.try_reference_path('L', 7).unwrap();
    let expected = [
        (50.0, 50.0),
        (50.0, 100.0),
        (50.0, 150.0),
        (50.0, 200.0),
        (100.0, 200.0),
        (150.0, 200.0),
        (200.0, 200.0),
    ];
    for (p, &(x, y)) in l.guide_points.iter().zip(expected.iter()) {
        assert!(
            (p.x - x).abs() < 1e-3 && (p.y - y).abs() < 1e-3,
            "expected ({}, {}), got {:?}",
            x,
            y,
            p
        );
    }
}

#[test]
fn test_unknown_letter_falls_back() {
    let catalog = LetterCatalog::builtin();
    let lookup = catalog.reference_path('7', 50);
    assert!(lookup.is_fallback());
    match &lookup {
        LetterLookup::Fallback { served, path } => {
            assert_eq!(*served, 'A');
            assert_eq!(path.letter, '7');
        }
        LetterLookup::Exact(_) => panic!("expected a fallback"),
    }
    assert_eq!(lookup.served_letter(), 'A');
}

#[test]
fn test_fallback_keeps_requested_key() {
    let a = get_reference_path('A');
    let unknown = get_reference_path('?');

    assert_eq!(unknown.letter, '?');
    assert_eq!(unknown.path, a.path);
    assert_eq!(unknown.guide_points, a.guide_points);
    assert_eq!(get_reference_path('7').letter, '7');
    assert_eq!(get_reference_path('b').letter, 'B');
}

#[test]
fn test_strict_lookup_rejects_unknown() {
    let catalog = LetterCatalog::builtin();
    match catalog.try_reference_path('#', 50) {
        Err(TraceForgeError::UnknownLetter(c)) => assert_eq!(c, '#'),
        other => panic!("expected UnknownLetter, got {:?}", other),
    }
}

#[test]
fn test_custom_definitions_extend_and_override() {
    let mut defs = BTreeMap::new();
    defs.insert('7', "M 50 50 L 200 50 L 100 200".to_string());
    defs.insert('i', "M 125 50 L 125 200".to_string());

    let catalog = LetterCatalog::with_definitions(&defs, '7').unwrap();
    assert_eq!(catalog.letters().len(), 27);
    assert_eq!(catalog.fallback_letter(), '7');
    assert!(catalog.contains('7'));

    let i = catalog.try_reference_path('I', 2).unwrap();
    assert_eq!(i.path, "M 125 50 L 125 200");
    assert_eq!(
        i.guide_points,
        vec![Point::new(125.0, 50.0), Point::new(125.0, 200.0)]
    );

    let fallback = catalog.reference_path('%', 10);
    assert_eq!(fallback.served_letter(), '7');
    assert_eq!(fallback.path().letter, '%');
}

#[test]
fn test_bad_custom_path_is_rejected() {
    let mut defs = BTreeMap::new();
    defs.insert('7', "M 50 50 C 1 2 3 4 5 6".to_string());
    assert!(matches!(
        LetterCatalog::with_definitions(&defs, 'A'),
        Err(TraceForgeError::PathParse { .. })
    ));
}

#[test]
fn test_missing_fallback_is_config_error() {
    let defs = BTreeMap::new();
    assert!(matches!(
        LetterCatalog::with_definitions(&defs, '9'),
        Err(TraceForgeError::Config(_))
    ));
}

#[test]
fn test_definitions_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "1": "M 125 50 L 125 200" }}"#).unwrap();

    let catalog = LetterCatalog::from_definitions_file(file.path(), 'A').unwrap();
    assert!(catalog.contains('1'));
    assert_eq!(catalog.try_reference_path('1', 50).unwrap().guide_points.len(), 50);
}
