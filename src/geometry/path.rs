use super::{quad_point, Point};
use crate::consts::QUAD_FLATTEN_STEPS;
use crate::error::{TfResult, TraceForgeError};

/// One drawing command of a letter's path description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`: lift the pen and move.
    MoveTo(Point),
    /// `L x y`
    LineTo(Point),
    /// `Q cx cy x y`
    QuadTo { control: Point, to: Point },
}

/// Parses a path description made of absolute `M`, `L` and `Q` commands.
///
/// Operands may be separated by whitespace or commas and a command letter may
/// be glued to its first operand (`M50 200`). As in SVG, extra coordinate
/// pairs after a command repeat it, and pairs following a move-to are
/// line-tos.
pub fn parse_path(description: &str) -> TfResult<Vec<PathCommand>> {
    let tokens = tokenize(description);
    if tokens.is_empty() {
        return Err(TraceForgeError::path_parse("", "empty path description"));
    }

    let mut commands = Vec::new();
    let mut pos = 0;
    let mut current: Option<char> = None;

    while pos < tokens.len() {
        let tok = tokens[pos];
        let cmd = match command_letter(tok) {
            Some(c) => {
                pos += 1;
                c
            }
            None => match current {
                Some('M') => 'L',
                Some(c) => c,
                None => {
                    return Err(TraceForgeError::path_parse(
                        tok,
                        "coordinates before any command",
                    ))
                }
            },
        };

        if commands.is_empty() && cmd != 'M' {
            return Err(TraceForgeError::path_parse(
                tok,
                "path must begin with a move-to",
            ));
        }

        match cmd {
            'M' => {
                let p = read_point(&tokens, &mut pos, tok)?;
                commands.push(PathCommand::MoveTo(p));
            }
            'L' => {
                let p = read_point(&tokens, &mut pos, tok)?;
                commands.push(PathCommand::LineTo(p));
            }
            'Q' => {
                let control = read_point(&tokens, &mut pos, tok)?;
                let to = read_point(&tokens, &mut pos, tok)?;
                commands.push(PathCommand::QuadTo { control, to });
            }
            c if c.is_ascii_lowercase() => {
                return Err(TraceForgeError::path_parse(
                    tok,
                    "relative commands are not supported",
                ))
            }
            _ => return Err(TraceForgeError::path_parse(tok, "unsupported command")),
        }
        current = Some(cmd);
    }

    Ok(commands)
}

fn tokenize(description: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in description.char_indices() {
        if c.is_whitespace() || c == ',' {
            if let Some(s) = start.take() {
                tokens.push(&description[s..i]);
            }
        } else if c.is_alphabetic() && c != 'e' && c != 'E' {
            // 'e' stays inside numbers for exponents.
            if let Some(s) = start.take() {
                tokens.push(&description[s..i]);
            }
            tokens.push(&description[i..i + c.len_utf8()]);
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&description[s..]);
    }
    tokens
}

fn command_letter(tok: &str) -> Option<char> {
    let mut chars = tok.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() && c != 'e' && c != 'E' => Some(c),
        _ => None,
    }
}

fn read_point(tokens: &[&str], pos: &mut usize, cmd: &str) -> TfResult<Point> {
    let x = read_number(tokens, pos, cmd)?;
    let y = read_number(tokens, pos, cmd)?;
    Ok(Point::new(x, y))
}

fn read_number(tokens: &[&str], pos: &mut usize, cmd: &str) -> TfResult<f32> {
    let tok = match tokens.get(*pos) {
        Some(t) if command_letter(t).is_none() => *t,
        _ => return Err(TraceForgeError::path_parse(cmd, "missing operand")),
    };
    let value: f32 = tok
        .parse()
        .map_err(|_| TraceForgeError::path_parse(tok, "invalid number"))?;
    if !value.is_finite() {
        return Err(TraceForgeError::path_parse(tok, "non-finite coordinate"));
    }
    *pos += 1;
    Ok(value)
}

#[derive(Debug, Clone, Copy)]
struct Chord {
    from: Point,
    to: Point,
    len: f32,
}

/// Flattens commands into pen-down chords. Move-tos break the chain and add
/// no length.
fn chords(commands: &[PathCommand]) -> Vec<Chord> {
    let mut out = Vec::new();
    let mut cursor = Point::default();

    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => cursor = p,
            PathCommand::LineTo(p) => {
                out.push(Chord {
                    from: cursor,
                    to: p,
                    len: cursor.distance(&p),
                });
                cursor = p;
            }
            PathCommand::QuadTo { control, to } => {
                let mut prev = cursor;
                for step in 1..=QUAD_FLATTEN_STEPS {
                    let next = if step == QUAD_FLATTEN_STEPS {
                        to
                    } else {
                        quad_point(cursor, control, to, step as f32 / QUAD_FLATTEN_STEPS as f32)
                    };
                    out.push(Chord {
                        from: prev,
                        to: next,
                        len: prev.distance(&next),
                    });
                    prev = next;
                }
                cursor = to;
            }
        }
    }
    out
}

/// Total pen-down length of the path.
pub fn path_length(commands: &[PathCommand]) -> f32 {
    chords(commands).iter().map(|c| c.len).sum()
}

/// Emits `count` points at equal arc-length intervals from the start of the
/// path to its end.
///
/// The first point is the start of the first drawn segment and the last point
/// is the end of the last one. A path with no drawn length yields `count`
/// copies of its first move-to; an empty command list yields nothing.
pub fn resample(commands: &[PathCommand], count: usize) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let chords = chords(commands);
    let total: f32 = chords.iter().map(|c| c.len).sum();

    let (start, end) = match (chords.first(), chords.last()) {
        (Some(first), Some(last)) if total > 0.0 => (first.from, last.to),
        _ => {
            return match commands.first() {
                Some(PathCommand::MoveTo(p)) => vec![*p; count],
                Some(PathCommand::LineTo(p)) => vec![*p; count],
                Some(PathCommand::QuadTo { to, .. }) => vec![*to; count],
                None => Vec::new(),
            };
        }
    };

    if count == 1 {
        return vec![start];
    }

    let mut out = Vec::with_capacity(count);
    out.push(start);

    let step = total / (count - 1) as f32;
    let mut idx = 0;
    let mut walked = 0.0f32;

    for i in 1..count - 1 {
        let target = step * i as f32;
        while idx + 1 < chords.len() && walked + chords[idx].len < target {
            walked += chords[idx].len;
            idx += 1;
        }
        let chord = chords[idx];
        let t = if chord.len > 0.0 {
            ((target - walked) / chord.len).clamp(0.0, 1.0)
        } else {
            1.0
        };
        out.push(chord.from.lerp(chord.to, t));
    }

    out.push(end);
    out
}
