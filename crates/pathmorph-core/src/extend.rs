//! Sequence extension — grow the shorter command sequence to match the longer
//!
//! Insertion counts are allocated per segment by proportional index
//! accumulation, so the synthetic points spread across the whole path
//! instead of clustering at one end. Bezier-splittable segments are
//! subdivided geometry-preserving; everything else is padded with
//! zero-length duplicates.

use crate::command::Command;
use crate::split::split_curve;

/// Extend `to_extend` with synthetic commands until it is
/// `reference.len()` long, without changing its rendered geometry.
///
/// The allocation walks `floor(increment * i)` with
/// `increment = num_segments / (reference.len() - 1)`; the monotonic floor
/// spreads insertions evenly and never assigns any to the final vertex.
/// Sequences already at least as long as the reference come back unchanged.
pub fn extend(to_extend: &[Command], reference: &[Command]) -> Vec<Command> {
    if to_extend.is_empty() || to_extend.len() >= reference.len() {
        return to_extend.to_vec();
    }

    // a lone command has no segments; pad with duplicates of itself so the
    // shape grows out of a single point
    if to_extend.len() == 1 {
        let seed = to_extend[0];
        let mut extended = vec![seed];
        extended.resize(reference.len(), duplicate(&seed));
        return extended;
    }

    let num_segments = to_extend.len() - 1;
    let num_reference_points = reference.len() - 1;
    let increment = num_segments as f64 / num_reference_points as f64;

    // how many output commands each segment must produce
    let mut counts = vec![0usize; num_segments];
    for i in 0..num_reference_points {
        let index = ((increment * i as f64).floor() as usize).min(num_segments - 1);
        counts[index] += 1;
    }

    let mut extended = vec![to_extend[0]];
    for (i, &count) in counts.iter().enumerate() {
        extended.extend(segment_commands(&to_extend[i], &to_extend[i + 1], count));
    }
    extended
}

/// Produce `count` commands covering the segment from `start` to `end`.
///
/// Line/quadratic/cubic ends split into true sub-curves; any other end
/// type gets `count - 1` duplicates of `start` immediately before `end`.
fn segment_commands(start: &Command, end: &Command, count: usize) -> Vec<Command> {
    if count <= 1 {
        return vec![*end];
    }
    match split_curve(start, end, count) {
        Some(commands) => commands,
        None => {
            let mut commands = vec![duplicate(start); count - 1];
            commands.push(*end);
            commands
        }
    }
}

/// Duplicate a command as a zero-length continuation. A path holds at most
/// one M, so duplicated moves downgrade to lines.
fn duplicate(command: &Command) -> Command {
    match *command {
        Command::Move { x, y } => Command::Line { x, y },
        other => other,
    }
}
