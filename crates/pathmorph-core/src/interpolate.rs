//! Interpolator construction — the top-level path morphing entry point
//!
//! Normalizes two path strings into equal-length, type-matched command
//! sequences and compiles them into a [`PathInterpolator`] evaluable at any
//! interpolation parameter.

use pathmorph_interpolate::StringInterpolator;

use crate::command::{tokenize, Command};
use crate::error::Result;
use crate::extend::extend;
use crate::reconcile::reconcile;

/// A prepared interpolation between two path strings.
///
/// Built once by [`interpolate_path`]; evaluation is pure and closes only
/// over finalized strings, so one interpolator can serve any number of
/// frames and threads.
#[derive(Debug, Clone)]
pub struct PathInterpolator {
    blend: Option<StringInterpolator>,
    b_original: Option<String>,
}

impl PathInterpolator {
    /// Path string at interpolation parameter `t`.
    ///
    /// Exactly at `t = 1` the verbatim second input comes back, without the
    /// synthetic commands used while blending. `None` means geometry was
    /// absent on both sides (or on the target side at `t = 1`). Values of
    /// `t` outside [0, 1] extrapolate; there is no clamping.
    pub fn eval(&self, t: f64) -> Option<String> {
        let blend = self.blend.as_ref()?;
        if t == 1.0 {
            return self.b_original.clone();
        }
        Some(blend.eval(t))
    }
}

/// Build an interpolator morphing path `a` into path `b`.
///
/// Both inputs are `d`-attribute strings of absolute commands with an
/// optional trailing close marker. `None` stands for absent geometry: the
/// morph then grows out of, or retracts into, the other path's first point.
/// The output carries a close marker only when every present input was
/// closed.
pub fn interpolate_path(a: Option<&str>, b: Option<&str>) -> Result<PathInterpolator> {
    let a_tokens = a.map(strip_close).map(tokenize).unwrap_or_default();
    let b_tokens = b.map(strip_close).map(tokenize).unwrap_or_default();

    // absent geometry on both sides interpolates to absent geometry
    if a_tokens.is_empty() && b_tokens.is_empty() {
        return Ok(PathInterpolator {
            blend: None,
            b_original: None,
        });
    }

    let mut a_commands = parse_all(&a_tokens)?;
    let mut b_commands = parse_all(&b_tokens)?;

    // an empty side becomes the other side's first point, so the shape
    // grows from or shrinks to that point instead of blending with nothing
    if a_commands.is_empty() {
        a_commands.push(b_commands[0]);
    } else if b_commands.is_empty() {
        b_commands.push(a_commands[0]);
    }

    if a_commands.len() < b_commands.len() {
        a_commands = extend(&a_commands, &b_commands);
    } else if b_commands.len() < a_commands.len() {
        b_commands = extend(&b_commands, &a_commands);
    }

    // A is upgraded toward B's types; B is never altered
    let a_commands: Vec<Command> = a_commands
        .iter()
        .zip(&b_commands)
        .map(|(ac, bc)| reconcile(ac, bc))
        .collect();

    let mut a_processed: String = a_commands.iter().map(Command::to_token).collect();
    let mut b_processed: String = b_commands.iter().map(Command::to_token).collect();

    let closed = a.map_or(true, ends_closed) && b.map_or(true, ends_closed);
    if closed {
        a_processed.push('Z');
        b_processed.push('Z');
    }

    Ok(PathInterpolator {
        blend: Some(StringInterpolator::new(&a_processed, &b_processed)),
        b_original: b.map(str::to_owned),
    })
}

fn parse_all(tokens: &[&str]) -> Result<Vec<Command>> {
    tokens.iter().map(|token| Command::parse(token)).collect()
}

/// Drop a trailing close marker and surrounding whitespace.
fn strip_close(path: &str) -> &str {
    path.trim_end().trim_end_matches(['Z', 'z']).trim_end()
}

fn ends_closed(path: &str) -> bool {
    matches!(path.trim_end().chars().last(), Some('Z' | 'z'))
}
