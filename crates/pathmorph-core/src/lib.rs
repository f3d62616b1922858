//! Pathmorph Core - SVG path morphing
//!
//! Interpolates between two SVG path `d` strings whose command sequences
//! may differ in length and in command types (a triangle morphing into a
//! pentagon, a line into a cubic). The entry point is [`interpolate_path`],
//! which normalizes both paths into equal-length, type-matched command
//! sequences and returns a [`PathInterpolator`] evaluable at any `t`:
//!
//! - paths are parsed into [`Command`] sequences,
//! - the shorter sequence is extended with geometry-preserving Bezier
//!   subdivisions (de Casteljau) or zero-length duplicates,
//! - command types are reconciled pairwise toward the target path,
//! - the serialized pair is compiled into a numeric-token blend.

mod command;
mod error;
mod extend;
mod interpolate;
mod reconcile;
mod split;

pub use command::{tokenize, Command};
pub use error::{MorphError, Result};
pub use extend::extend;
pub use interpolate::{interpolate_path, PathInterpolator};
pub use reconcile::reconcile;
pub use split::{decasteljau, segments_to_commands, split_curve, split_segment, Point};
