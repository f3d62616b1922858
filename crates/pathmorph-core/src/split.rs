//! Bezier segment subdivision via de Casteljau's algorithm
//!
//! Splits line, quadratic and cubic segments into sub-curves that
//! concatenate back to the original geometry exactly.

use crate::command::Command;

/// A 2D control point, used only while splitting segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Split a Bezier control polygon at parameter `t`.
///
/// Returns the control polygons of the two sub-curves covering [0, t] and
/// [t, 1], both of the same order as the input. A single point splits into
/// itself on both sides; empty input yields empty halves.
pub fn decasteljau(points: &[Point], t: f64) -> (Vec<Point>, Vec<Point>) {
    if points.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());
    let mut level = points.to_vec();
    loop {
        left.push(level[0]);
        right.push(level[level.len() - 1]);
        if level.len() == 1 {
            break;
        }
        let next: Vec<Point> = level.windows(2).map(|pair| pair[0].lerp(pair[1], t)).collect();
        level = next;
    }
    right.reverse();
    (left, right)
}

/// Subdivide a control polygon into `segment_count` sub-curves covering
/// uniform parameter ranges of the original curve.
///
/// Each split fraction is re-normalized against the shrinking remainder
/// (`r = inc / (1 - inc * i)`) so the cuts land at `i / segment_count` on
/// the original curve even though every split operates on the right-hand
/// leftover of the previous one.
pub fn split_segment(points: &[Point], segment_count: usize) -> Vec<Vec<Point>> {
    debug_assert!(segment_count >= 1, "segment_count must be at least 1");
    let mut segments = Vec::with_capacity(segment_count);
    let mut remaining = points.to_vec();
    let t_increment = 1.0 / segment_count as f64;

    for i in 0..segment_count.saturating_sub(1) {
        let t_relative = t_increment / (1.0 - t_increment * i as f64);
        let (head, tail) = decasteljau(&remaining, t_relative);
        segments.push(head);
        remaining = tail;
    }
    segments.push(remaining);
    segments
}

/// Map sub-curve control polygons back to the commands that draw them.
pub fn segments_to_commands(segments: &[Vec<Point>]) -> Vec<Command> {
    segments.iter().map(|points| points_to_command(points)).collect()
}

/// The command drawing a control polygon. Closed dispatch over the
/// supported orders; any other point count is an internal bug.
fn points_to_command(points: &[Point]) -> Command {
    match points {
        [_, end] => Command::Line { x: end.x, y: end.y },
        [_, ctrl, end] => Command::Quadratic {
            x1: ctrl.x,
            y1: ctrl.y,
            x: end.x,
            y: end.y,
        },
        [_, ctrl1, ctrl2, end] => Command::Cubic {
            x1: ctrl1.x,
            y1: ctrl1.y,
            x2: ctrl2.x,
            y2: ctrl2.y,
            x: end.x,
            y: end.y,
        },
        _ => unreachable!("sub-curve with {} control points", points.len()),
    }
}

/// Split the segment drawn by `end`, starting at `start`'s anchor, into
/// `segment_count` commands tracing the same geometry.
///
/// Returns `None` when the segment has no Bezier control polygon: `end` is
/// not a line/quadratic/cubic, or `start` lacks a full anchor (degenerate
/// H/V start).
pub fn split_curve(start: &Command, end: &Command, segment_count: usize) -> Option<Vec<Command>> {
    let (sx, sy) = start.anchor()?;
    let mut points = vec![Point::new(sx, sy)];
    match *end {
        Command::Line { x, y } => points.push(Point::new(x, y)),
        Command::Quadratic { x1, y1, x, y } => {
            points.push(Point::new(x1, y1));
            points.push(Point::new(x, y));
        }
        Command::Cubic {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => {
            points.push(Point::new(x1, y1));
            points.push(Point::new(x2, y2));
            points.push(Point::new(x, y));
        }
        _ => return None,
    }
    Some(segments_to_commands(&split_segment(&points, segment_count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluate a Bezier control polygon at `t` by repeated interpolation.
    fn eval(points: &[Point], t: f64) -> Point {
        let mut level = points.to_vec();
        while level.len() > 1 {
            let next: Vec<Point> = level.windows(2).map(|p| p[0].lerp(p[1], t)).collect();
            level = next;
        }
        level[0]
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn decasteljau_single_point() {
        let p = Point::new(3.0, 4.0);
        let (left, right) = decasteljau(&[p], 0.5);
        assert_eq!(left, vec![p]);
        assert_eq!(right, vec![p]);
    }

    #[test]
    fn decasteljau_halves_share_split_point() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(6.0, 4.0),
            Point::new(8.0, 0.0),
        ];
        let (left, right) = decasteljau(&points, 0.3);
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        assert_eq!(left[0], points[0]);
        assert_eq!(right[3], points[3]);
        assert_eq!(left[3], right[0]);
        assert!(close(left[3], eval(&points, 0.3)));
    }

    #[test]
    fn split_junctions_match_direct_evaluation() {
        let points = [
            Point::new(0.0, 1.77),
            Point::new(2.9, 0.0),
            Point::new(4.3, 3.0),
            Point::new(3.2, -4.0),
        ];
        let n = 4;
        let segments = split_segment(&points, n);
        assert_eq!(segments.len(), n);

        // endpoints survive exactly
        assert_eq!(segments[0][0], points[0]);
        assert_eq!(*segments[n - 1].last().unwrap(), points[3]);

        // every junction sits at t = i/n on the original curve
        for i in 0..n - 1 {
            let junction = *segments[i].last().unwrap();
            assert_eq!(junction, segments[i + 1][0]);
            let expected = eval(&points, (i + 1) as f64 / n as f64);
            assert!(close(junction, expected));
        }
    }

    #[test]
    fn split_line_into_halves() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let segments = split_segment(&points, 2);
        assert_eq!(
            segments,
            vec![
                vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)],
                vec![Point::new(5.0, 0.0), Point::new(10.0, 0.0)],
            ]
        );
    }

    #[test]
    fn single_segment_is_identity() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 0.0),
        ];
        let segments = split_segment(&points, 1);
        assert_eq!(segments, vec![points.to_vec()]);
    }

    #[test]
    fn segments_map_to_matching_command_kinds() {
        let line = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let quad = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 0.0),
        ];
        let cubic = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 0.0),
        ];
        let commands = segments_to_commands(&[line, quad, cubic]);
        assert_eq!(commands[0].letter(), 'L');
        assert_eq!(commands[1].letter(), 'Q');
        assert_eq!(commands[2].letter(), 'C');
    }

    #[test]
    fn split_curve_line_quarters() {
        let start = Command::Move { x: 0.0, y: 0.0 };
        let end = Command::Line { x: 10.0, y: 10.0 };
        let commands = split_curve(&start, &end, 4).unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], Command::Line { x: 2.5, y: 2.5 });
        assert_eq!(commands[3], end);
        let (mid_x, mid_y) = commands[1].anchor().unwrap();
        assert!((mid_x - 5.0).abs() < 1e-9);
        assert!((mid_y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn split_curve_rejects_non_bezier_segments() {
        let start = Command::Move { x: 0.0, y: 0.0 };
        let arc = Command::parse("A30,50,0,0,1,10,10").unwrap();
        assert!(split_curve(&start, &arc, 2).is_none());

        // a start without a full anchor cannot seed the control polygon
        let horizontal = Command::Horizontal { x: 5.0 };
        let line = Command::Line { x: 10.0, y: 0.0 };
        assert!(split_curve(&horizontal, &line, 2).is_none());
    }
}
