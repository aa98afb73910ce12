// File: crates/chart-core/src/path.rs
// Summary: Smoothed curve paths as renderer-agnostic drawing commands.
// Notes:
// - Each segment is a cubic Bezier whose control points sit at 1/3 and 2/3 of
//   the horizontal span, each holding the y of its nearer endpoint. This is a
//   fixed smoothing rule, not a spline fit, and never overshoots vertically.
// - `Display` emits SVG path data (`M x y C x1 y1, x2 y2, x y ...`).

use std::fmt;

use serde::Serialize;

use crate::types::Point2D;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point2D),
    CubicTo { c1: Point2D, c2: Point2D, to: Point2D },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SmoothPath {
    commands: Vec<PathCommand>,
}

impl SmoothPath {
    /// Build the smoothed path through `points`. Fewer than two points yield an empty path.
    pub fn through(points: &[Point2D]) -> Self {
        if points.len() < 2 {
            return Self::default();
        }
        let mut commands = Vec::with_capacity(points.len());
        commands.push(PathCommand::MoveTo(points[0]));
        for w in points.windows(2) {
            let (p1, p2) = (w[0], w[1]);
            let third = (p2.x - p1.x) / 3.0;
            commands.push(PathCommand::CubicTo {
                c1: Point2D::new(p1.x + third, p1.y),
                c2: Point2D::new(p2.x - third, p2.y),
                to: p2,
            });
        }
        tracing::trace!(segments = commands.len() - 1, "built smooth path");
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Number of cubic segments.
    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::CubicTo { .. })).count()
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::CubicTo { c1, c2, to } => {
                write!(f, "C {} {}, {} {}, {} {}", c1.x, c1.y, c2.x, c2.y, to.x, to.y)
            }
        }
    }
}

impl fmt::Display for SmoothPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}
