//! Pairwise command type reconciliation
//!
//! Upgrades a command into another command's schema so the two can be
//! numerically blended, without moving where the original renders.

use crate::command::Command;

/// Rebuild `a` in `b`'s command schema.
///
/// Matching kinds pass through untouched, as does any `a` paired with a
/// Move. Otherwise the rebuilt command keeps every parameter `a` already
/// has, derives missing control points from `a`'s anchor (collapsing them
/// into degenerate straight geometry), copies the arc orientation hints
/// from `b` since they have no derivation from `a`, and zeroes whatever is
/// left. The result renders exactly where `a` did.
pub fn reconcile(a: &Command, b: &Command) -> Command {
    if a.letter() == b.letter() || matches!(b, Command::Move { .. }) {
        return *a;
    }

    let ax = a.x().unwrap_or(0.0);
    let ay = a.y().unwrap_or(0.0);

    match *b {
        Command::Move { .. } => *a,
        Command::Line { .. } => Command::Line { x: ax, y: ay },
        Command::Horizontal { .. } => Command::Horizontal { x: ax },
        Command::Vertical { .. } => Command::Vertical { y: ay },
        Command::Cubic { .. } => Command::Cubic {
            x1: a.x1().unwrap_or(ax),
            y1: a.y1().unwrap_or(ay),
            x2: a.x2().unwrap_or(ax),
            y2: a.y2().unwrap_or(ay),
            x: ax,
            y: ay,
        },
        Command::Smooth { .. } => Command::Smooth {
            x2: a.x2().unwrap_or(ax),
            y2: a.y2().unwrap_or(ay),
            x: ax,
            y: ay,
        },
        Command::Quadratic { .. } => Command::Quadratic {
            x1: a.x1().unwrap_or(ax),
            y1: a.y1().unwrap_or(ay),
            x: ax,
            y: ay,
        },
        Command::SmoothQuadratic { .. } => Command::SmoothQuadratic { x: ax, y: ay },
        Command::Arc {
            x_axis_rotation,
            large_arc,
            sweep,
            ..
        } => Command::Arc {
            rx: 0.0,
            ry: 0.0,
            x_axis_rotation,
            large_arc,
            sweep,
            x: ax,
            y: ay,
        },
    }
}
