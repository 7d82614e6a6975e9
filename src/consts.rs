/// Number of guide points generated per reference path.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Letter whose path is served when a lookup misses.
pub const DEFAULT_FALLBACK_LETTER: char = 'A';

/// Chords used to approximate one quadratic segment when measuring arc length.
pub const QUAD_FLATTEN_STEPS: usize = 16;

/// Side length of the logical canvas that letter paths are authored in.
pub const LOGICAL_CANVAS_SIZE: f32 = 300.0;

/// Completed activities per day needed to meet the daily goal.
pub const DEFAULT_DAILY_GOAL: usize = 5;
