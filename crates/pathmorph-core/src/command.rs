//! SVG path command model and codec
//!
//! Converts between `d`-attribute command tokens and a tagged command
//! representation. Only the absolute command alphabet {M, L, H, V, C, S, Q,
//! T, A} is modeled; input paths are expected to be pre-normalized to
//! absolute coordinates, so letter case is folded away during parsing.

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};

/// One absolute SVG path instruction.
///
/// Each variant carries the named parameters the SVG path grammar defines
/// for its command letter. The two arc flags are numeric 0/1, kept as `f64`
/// so tokens round-trip without loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// M — move the pen to (x, y)
    Move { x: f64, y: f64 },
    /// L — straight line to (x, y)
    Line { x: f64, y: f64 },
    /// H — horizontal line to x
    Horizontal { x: f64 },
    /// V — vertical line to y
    Vertical { y: f64 },
    /// C — cubic Bezier with two control points
    Cubic {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// S — cubic Bezier with reflected first control point
    Smooth { x2: f64, y2: f64, x: f64, y: f64 },
    /// Q — quadratic Bezier with one control point
    Quadratic { x1: f64, y1: f64, x: f64, y: f64 },
    /// T — quadratic Bezier with reflected control point
    SmoothQuadratic { x: f64, y: f64 },
    /// A — elliptical arc
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: f64,
        sweep: f64,
        x: f64,
        y: f64,
    },
}

/// Parameter count for each recognized command letter.
fn schema_arity(letter: char) -> Option<usize> {
    match letter {
        'M' | 'L' | 'T' => Some(2),
        'H' | 'V' => Some(1),
        'S' | 'Q' => Some(4),
        'C' => Some(6),
        'A' => Some(7),
        _ => None,
    }
}

impl Command {
    /// Parse one command token: a letter followed by comma- or
    /// space-separated numeric arguments.
    ///
    /// Validation is strict: an unknown letter, a wrong argument count or
    /// an unparseable number all fault immediately instead of deferring a
    /// half-built command downstream.
    pub fn parse(token: &str) -> Result<Command> {
        let token = token.trim();
        let letter = token.chars().next().ok_or(MorphError::EmptyToken)?;
        let kind = letter.to_ascii_uppercase();
        let expected =
            schema_arity(kind).ok_or(MorphError::UnrecognizedCommand(letter))?;

        let mut args = Vec::with_capacity(expected);
        for raw in token[letter.len_utf8()..]
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
        {
            let value = raw.parse::<f64>().map_err(|_| MorphError::InvalidNumber {
                command: kind,
                argument: raw.to_string(),
            })?;
            args.push(value);
        }
        if args.len() != expected {
            return Err(MorphError::WrongArgumentCount {
                command: kind,
                expected,
                got: args.len(),
            });
        }

        let command = match kind {
            'M' => Command::Move {
                x: args[0],
                y: args[1],
            },
            'L' => Command::Line {
                x: args[0],
                y: args[1],
            },
            'H' => Command::Horizontal { x: args[0] },
            'V' => Command::Vertical { y: args[0] },
            'C' => Command::Cubic {
                x1: args[0],
                y1: args[1],
                x2: args[2],
                y2: args[3],
                x: args[4],
                y: args[5],
            },
            'S' => Command::Smooth {
                x2: args[0],
                y2: args[1],
                x: args[2],
                y: args[3],
            },
            'Q' => Command::Quadratic {
                x1: args[0],
                y1: args[1],
                x: args[2],
                y: args[3],
            },
            'T' => Command::SmoothQuadratic {
                x: args[0],
                y: args[1],
            },
            'A' => Command::Arc {
                rx: args[0],
                ry: args[1],
                x_axis_rotation: args[2],
                large_arc: args[3],
                sweep: args[4],
                x: args[5],
                y: args[6],
            },
            _ => unreachable!("schema lookup admitted unknown command {kind}"),
        };
        Ok(command)
    }

    /// Serialize back to a token: the letter followed by its parameters in
    /// schema order, comma-joined. Left inverse of [`Command::parse`] for
    /// canonical tokens.
    pub fn to_token(&self) -> String {
        let mut token = String::new();
        token.push(self.letter());
        for (i, value) in self.params().into_iter().enumerate() {
            if i > 0 {
                token.push(',');
            }
            token.push_str(&value.to_string());
        }
        token
    }

    /// The command letter of this variant.
    pub fn letter(&self) -> char {
        match self {
            Command::Move { .. } => 'M',
            Command::Line { .. } => 'L',
            Command::Horizontal { .. } => 'H',
            Command::Vertical { .. } => 'V',
            Command::Cubic { .. } => 'C',
            Command::Smooth { .. } => 'S',
            Command::Quadratic { .. } => 'Q',
            Command::SmoothQuadratic { .. } => 'T',
            Command::Arc { .. } => 'A',
        }
    }

    /// Parameters in schema order.
    fn params(&self) -> Vec<f64> {
        match *self {
            Command::Move { x, y }
            | Command::Line { x, y }
            | Command::SmoothQuadratic { x, y } => vec![x, y],
            Command::Horizontal { x } => vec![x],
            Command::Vertical { y } => vec![y],
            Command::Cubic {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => vec![x1, y1, x2, y2, x, y],
            Command::Smooth { x2, y2, x, y } => vec![x2, y2, x, y],
            Command::Quadratic { x1, y1, x, y } => vec![x1, y1, x, y],
            Command::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => vec![rx, ry, x_axis_rotation, large_arc, sweep, x, y],
        }
    }

    /// Terminal anchor x. Present on every command except the degenerate V.
    pub fn x(&self) -> Option<f64> {
        match *self {
            Command::Move { x, .. }
            | Command::Line { x, .. }
            | Command::Horizontal { x }
            | Command::Cubic { x, .. }
            | Command::Smooth { x, .. }
            | Command::Quadratic { x, .. }
            | Command::SmoothQuadratic { x, .. }
            | Command::Arc { x, .. } => Some(x),
            Command::Vertical { .. } => None,
        }
    }

    /// Terminal anchor y. Present on every command except the degenerate H.
    pub fn y(&self) -> Option<f64> {
        match *self {
            Command::Move { y, .. }
            | Command::Line { y, .. }
            | Command::Vertical { y }
            | Command::Cubic { y, .. }
            | Command::Smooth { y, .. }
            | Command::Quadratic { y, .. }
            | Command::SmoothQuadratic { y, .. }
            | Command::Arc { y, .. } => Some(y),
            Command::Horizontal { .. } => None,
        }
    }

    /// First control point x, for commands that carry one.
    pub fn x1(&self) -> Option<f64> {
        match *self {
            Command::Cubic { x1, .. } | Command::Quadratic { x1, .. } => Some(x1),
            _ => None,
        }
    }

    /// First control point y, for commands that carry one.
    pub fn y1(&self) -> Option<f64> {
        match *self {
            Command::Cubic { y1, .. } | Command::Quadratic { y1, .. } => Some(y1),
            _ => None,
        }
    }

    /// Second control point x, for commands that carry one.
    pub fn x2(&self) -> Option<f64> {
        match *self {
            Command::Cubic { x2, .. } | Command::Smooth { x2, .. } => Some(x2),
            _ => None,
        }
    }

    /// Second control point y, for commands that carry one.
    pub fn y2(&self) -> Option<f64> {
        match *self {
            Command::Cubic { y2, .. } | Command::Smooth { y2, .. } => Some(y2),
            _ => None,
        }
    }

    /// Full anchor point, when both coordinates are present.
    pub fn anchor(&self) -> Option<(f64, f64)> {
        Some((self.x()?, self.y()?))
    }
}

/// Split a path `d` string into per-command tokens.
///
/// A new token starts at every command letter; exponent markers inside
/// numbers (`1e3`) do not split. Close markers are expected to be stripped
/// by the caller, so a stray letter surfaces as a parse error on its token
/// rather than disappearing silently.
pub fn tokenize(path: &str) -> Vec<&str> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, c) in trimmed.char_indices() {
        if i > 0 && c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E') {
            tokens.push(trimmed[start..i].trim());
            start = i;
        }
    }
    tokens.push(trimmed[start..].trim());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_token() {
        assert_eq!(
            Command::parse("L10,10"),
            Ok(Command::Line { x: 10.0, y: 10.0 })
        );
    }

    #[test]
    fn parse_normalizes_spaces_to_separators() {
        assert_eq!(Command::parse("M 5 7"), Ok(Command::Move { x: 5.0, y: 7.0 }));
        assert_eq!(
            Command::parse("Q1, 2, 3, 4"),
            Ok(Command::Quadratic {
                x1: 1.0,
                y1: 2.0,
                x: 3.0,
                y: 4.0
            })
        );
    }

    #[test]
    fn parse_folds_letter_case() {
        assert_eq!(
            Command::parse("l10,10"),
            Ok(Command::Line { x: 10.0, y: 10.0 })
        );
    }

    #[test]
    fn parse_arc_token() {
        assert_eq!(
            Command::parse("A30,50,0,0,1,162.55,162.45"),
            Ok(Command::Arc {
                rx: 30.0,
                ry: 50.0,
                x_axis_rotation: 0.0,
                large_arc: 0.0,
                sweep: 1.0,
                x: 162.55,
                y: 162.45
            })
        );
    }

    #[test]
    fn token_round_trip() {
        let tokens = [
            "M0,0",
            "L10,10",
            "H5",
            "V-2.5",
            "C1,2,3,4,5,6",
            "S1,2,3,4",
            "Q1,2,3,4",
            "T9,9",
            "A30,50,0,0,1,162.55,162.45",
        ];
        for token in tokens {
            let parsed = Command::parse(token).unwrap();
            assert_eq!(parsed.to_token(), token);
        }
    }

    #[test]
    fn unrecognized_letter_faults() {
        assert_eq!(
            Command::parse("X5,5"),
            Err(MorphError::UnrecognizedCommand('X'))
        );
    }

    #[test]
    fn wrong_argument_count_faults() {
        assert_eq!(
            Command::parse("L10"),
            Err(MorphError::WrongArgumentCount {
                command: 'L',
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            Command::parse("H1,2"),
            Err(MorphError::WrongArgumentCount {
                command: 'H',
                expected: 1,
                got: 2
            })
        );
    }

    #[test]
    fn invalid_number_faults() {
        assert!(matches!(
            Command::parse("L10,nope"),
            Err(MorphError::InvalidNumber { command: 'L', .. })
        ));
    }

    #[test]
    fn tokenize_splits_at_command_letters() {
        assert_eq!(
            tokenize("M0,0L10,10C1,2,3,4,5,6"),
            vec!["M0,0", "L10,10", "C1,2,3,4,5,6"]
        );
    }

    #[test]
    fn tokenize_keeps_exponents_whole() {
        assert_eq!(tokenize("M1e3,0L2,2"), vec!["M1e3,0", "L2,2"]);
    }

    #[test]
    fn tokenize_blank_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn anchor_accessors() {
        let line = Command::parse("L3,4").unwrap();
        assert_eq!(line.anchor(), Some((3.0, 4.0)));

        let horizontal = Command::parse("H3").unwrap();
        assert_eq!(horizontal.x(), Some(3.0));
        assert_eq!(horizontal.y(), None);
        assert_eq!(horizontal.anchor(), None);

        let vertical = Command::parse("V4").unwrap();
        assert_eq!(vertical.x(), None);
        assert_eq!(vertical.anchor(), None);
    }
}
