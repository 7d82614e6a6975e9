use crate::consts::{DEFAULT_FALLBACK_LETTER, DEFAULT_SAMPLE_COUNT};
use crate::error::{TfResult, TraceForgeError};
use crate::geometry::{parse_path, resample, PathCommand, Point};
use crate::loader;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{OnceLock, RwLock};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum KnownLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl KnownLetter {
    /// Stroke description on the 300x300 logical canvas, in writing order.
    pub fn path_str(&self) -> &'static str {
        match self {
            Self::A => "M 50 200 L 150 50 L 250 200 M 100 150 L 200 150",
            Self::B => "M 50 50 L 50 200 M 50 50 Q 150 50 150 100 Q 150 150 50 150 M 50 150 Q 150 150 150 200 Q 150 200 50 200",
            Self::C => "M 200 50 Q 50 50 50 125 Q 50 200 200 200",
            Self::D => "M 50 50 L 50 200 M 50 50 Q 150 50 150 125 Q 150 200 50 200",
            Self::E => "M 50 50 L 50 200 M 50 50 L 200 50 M 50 125 L 150 125 M 50 200 L 200 200",
            Self::F => "M 50 50 L 50 200 M 50 50 L 200 50 M 50 125 L 150 125",
            Self::G => "M 200 50 Q 50 50 50 125 Q 50 200 200 200 M 150 125 L 200 125",
            Self::H => "M 50 50 L 50 200 M 200 50 L 200 200 M 50 125 L 200 125",
            Self::I => "M 125 50 L 125 200 M 50 50 L 200 50 M 50 200 L 200 200",
            Self::J => "M 150 50 L 150 175 Q 150 200 100 200 Q 50 200 50 175",
            Self::K => "M 50 50 L 50 200 M 50 125 L 200 50 M 50 125 L 200 200",
            Self::L => "M 50 50 L 50 200 M 50 200 L 200 200",
            Self::M => "M 50 200 L 50 50 L 125 125 L 200 50 L 200 200",
            Self::N => "M 50 200 L 50 50 L 200 200 L 200 50",
            Self::O => "M 125 50 Q 50 50 50 125 Q 50 200 125 200 Q 200 200 200 125 Q 200 50 125 50",
            Self::P => "M 50 50 L 50 200 M 50 50 Q 150 50 150 100 Q 150 150 50 150",
            Self::Q => "M 125 50 Q 50 50 50 125 Q 50 200 125 200 Q 200 200 200 125 Q 200 50 125 50 M 150 150 L 200 200",
            Self::R => "M 50 50 L 50 200 M 50 50 Q 150 50 150 100 Q 150 150 50 150 M 50 150 L 200 200",
            Self::S => "M 200 50 Q 50 50 50 125 Q 200 125 200 200 Q 50 200 50 175",
            Self::T => "M 125 50 L 125 200 M 50 50 L 200 50",
            Self::U => "M 50 50 L 50 175 Q 50 200 125 200 Q 200 200 200 175 L 200 50",
            Self::V => "M 50 50 L 125 200 L 200 50",
            Self::W => "M 50 50 L 50 200 L 125 100 L 200 200 L 200 50",
            Self::X => "M 50 50 L 200 200 M 200 50 L 50 200",
            Self::Y => "M 125 50 L 125 125 M 50 50 L 125 125 M 200 50 L 125 125 M 125 125 L 125 200",
            Self::Z => "M 50 50 L 200 50 M 200 50 L 50 200 M 50 200 L 200 200",
        }
    }

    pub fn as_char(&self) -> char {
        match self.to_string().chars().next() {
            Some(c) => c,
            None => DEFAULT_FALLBACK_LETTER,
        }
    }
}

/// A letter's canonical geometry: its path description and the guide points
/// resampled along it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePath {
    pub letter: char,
    pub path: String,
    pub guide_points: Vec<Point>,
}

/// Outcome of a lenient lookup.
///
/// Missing letters are served the fallback letter's geometry instead of
/// failing. The returned path keeps the requested key in `letter`; `served`
/// names the letter whose geometry was used.
#[derive(Debug, Clone, PartialEq)]
pub enum LetterLookup {
    Exact(ReferencePath),
    Fallback { served: char, path: ReferencePath },
}

impl LetterLookup {
    pub fn path(&self) -> &ReferencePath {
        match self {
            Self::Exact(p) => p,
            Self::Fallback { path, .. } => path,
        }
    }

    pub fn into_path(self) -> ReferencePath {
        match self {
            Self::Exact(p) => p,
            Self::Fallback { path, .. } => path,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Letter whose geometry the path carries.
    pub fn served_letter(&self) -> char {
        match self {
            Self::Exact(p) => p.letter,
            Self::Fallback { served, .. } => *served,
        }
    }
}

#[derive(Debug, Clone)]
struct LetterEntry {
    path: String,
    commands: Vec<PathCommand>,
}

/// Letter path definitions plus a memo of their resampled guide points.
#[derive(Debug)]
pub struct LetterCatalog {
    entries: BTreeMap<char, LetterEntry>,
    fallback: char,
    cache: RwLock<HashMap<(char, usize), Vec<Point>>>,
}

impl LetterCatalog {
    /// The built-in A-Z alphabet with `'A'` as fallback.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for letter in KnownLetter::iter() {
            match parse_path(letter.path_str()) {
                Ok(commands) => {
                    entries.insert(
                        letter.as_char(),
                        LetterEntry {
                            path: letter.path_str().to_string(),
                            commands,
                        },
                    );
                }
                Err(e) => error!("Built-in path for '{}' rejected: {}", letter, e),
            }
        }

        Self {
            entries,
            fallback: DEFAULT_FALLBACK_LETTER,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Built-ins overlaid with custom definitions. Every custom path must parse
    /// and the fallback letter must end up defined.
    pub fn with_definitions(
        definitions: &BTreeMap<char, String>,
        fallback: char,
    ) -> TfResult<Self> {
        let mut catalog = Self::builtin();
        for (&letter, path) in definitions {
            let key = normalize_letter(letter);
            let commands = parse_path(path)?;
            debug!("Custom path registered for '{}'", key);
            catalog.entries.insert(
                key,
                LetterEntry {
                    path: path.clone(),
                    commands,
                },
            );
        }

        let fallback = normalize_letter(fallback);
        if !catalog.entries.contains_key(&fallback) {
            return Err(TraceForgeError::Config(format!(
                "Fallback letter '{}' has no path definition",
                fallback
            )));
        }
        catalog.fallback = fallback;
        Ok(catalog)
    }

    /// Loads a JSON object of `{ "letter": "path" }` definitions.
    pub fn from_definitions_file<P: AsRef<Path>>(path: P, fallback: char) -> TfResult<Self> {
        let definitions = loader::load_letter_definitions_from_file(path)?;
        Self::with_definitions(&definitions, fallback)
    }

    pub fn fallback_letter(&self) -> char {
        self.fallback
    }

    pub fn contains(&self, letter: char) -> bool {
        self.entries.contains_key(&normalize_letter(letter))
    }

    /// Defined letters in sorted order.
    pub fn letters(&self) -> Vec<char> {
        self.entries.keys().copied().collect()
    }

    /// Strict lookup: unknown letters are an error.
    pub fn try_reference_path(&self, letter: char, samples: usize) -> TfResult<ReferencePath> {
        let key = normalize_letter(letter);
        let entry = self
            .entries
            .get(&key)
            .ok_or(TraceForgeError::UnknownLetter(key))?;
        Ok(self.build(key, entry, samples))
    }

    /// Lenient lookup: unknown letters get the fallback letter's path, and the
    /// substitution is logged.
    pub fn reference_path(&self, letter: char, samples: usize) -> LetterLookup {
        let key = normalize_letter(letter);
        if let Some(entry) = self.entries.get(&key) {
            return LetterLookup::Exact(self.build(key, entry, samples));
        }

        let mut path = match self.entries.get_key_value(&self.fallback) {
            Some((&k, entry)) => self.build(k, entry, samples),
            None => match self.entries.iter().next() {
                Some((&k, entry)) => self.build(k, entry, samples),
                None => ReferencePath {
                    letter: self.fallback,
                    path: String::new(),
                    guide_points: Vec::new(),
                },
            },
        };
        let served = path.letter;
        warn!("No path defined for '{}'; serving '{}' instead", key, served);

        path.letter = key;
        LetterLookup::Fallback { served, path }
    }

    fn build(&self, key: char, entry: &LetterEntry, samples: usize) -> ReferencePath {
        ReferencePath {
            letter: key,
            path: entry.path.clone(),
            guide_points: self.guide_points(key, entry, samples),
        }
    }

    fn guide_points(&self, key: char, entry: &LetterEntry, samples: usize) -> Vec<Point> {
        if let Ok(cache) = self.cache.read() {
            if let Some(points) = cache.get(&(key, samples)) {
                return points.clone();
            }
        }

        let points = resample(&entry.commands, samples);
        if let Ok(mut cache) = self.cache.write() {
            cache.insert((key, samples), points.clone());
        }
        points
    }
}

impl Default for LetterCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Uppercases a letter key. Characters whose uppercase form is more than one
/// character (e.g. 'ß') are kept as-is.
pub fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => letter,
    }
}

static BUILTIN: OnceLock<LetterCatalog> = OnceLock::new();

/// Process-wide built-in catalog.
pub fn builtin_catalog() -> &'static LetterCatalog {
    BUILTIN.get_or_init(LetterCatalog::builtin)
}

/// Reference path for `letter` with the default sample count. Undefined
/// letters get `'A'`'s geometry under their own (uppercased) key.
pub fn get_reference_path(letter: char) -> ReferencePath {
    builtin_catalog()
        .reference_path(letter, DEFAULT_SAMPLE_COUNT)
        .into_path()
}

pub fn all_letters() -> Vec<char> {
    builtin_catalog().letters()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_path_parses() {
        for letter in KnownLetter::iter() {
            assert!(
                parse_path(letter.path_str()).is_ok(),
                "path for {} failed to parse",
                letter
            );
        }
        assert_eq!(LetterCatalog::builtin().letters().len(), 26);
    }

    #[test]
    fn test_known_letter_from_str() {
        use std::str::FromStr;
        assert_eq!(KnownLetter::from_str("q").unwrap(), KnownLetter::Q);
        assert_eq!(KnownLetter::W.as_char(), 'W');
    }

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('a'), 'A');
        assert_eq!(normalize_letter('Z'), 'Z');
        assert_eq!(normalize_letter('7'), '7');
        assert_eq!(normalize_letter('ß'), 'ß');
    }

    #[test]
    fn test_cache_returns_identical_points() {
        let catalog = LetterCatalog::builtin();
        let first = catalog.try_reference_path('S', 50).unwrap();
        let second = catalog.try_reference_path('s', 50).unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog.cache.read().unwrap().len(), 1);
    }
}
