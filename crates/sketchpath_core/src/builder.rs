//! Path assembly from a ring of curve points
//!
//! Handles are stored per vertex but a cubic segment needs one handle from
//! each end. The segment ending at vertex `i` uses the outgoing handle of
//! vertex `i - 1` and the incoming handle of vertex `i`. The outgoing handle
//! is carried forward as the pending state of the pass; when the last vertex
//! still has one pending, a final segment wraps back to vertex 0.

use tracing::{debug, trace};

use crate::error::PathError;
use crate::geometry::{CoordinateFrame, Point};
use crate::point::CurvePoint;

/// One drawing instruction in absolute coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathToken {
    /// Start the outline at a point
    MoveTo(Point),
    /// Straight segment to a point
    LineTo(Point),
    /// Cubic Bézier segment
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl PathToken {
    /// The point the pen rests at after this token
    pub fn end(&self) -> Point {
        match *self {
            PathToken::MoveTo(p) | PathToken::LineTo(p) => p,
            PathToken::CurveTo { end, .. } => end,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, PathToken::CurveTo { .. })
    }
}

/// Which vertex a segment ends at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SegmentEnd {
    /// A vertex visited by the main pass
    Vertex(usize),
    /// Vertex 0 reached again after the last vertex
    Wraparound,
}

impl SegmentEnd {
    fn vertex(self) -> usize {
        match self {
            SegmentEnd::Vertex(index) => index,
            SegmentEnd::Wraparound => 0,
        }
    }
}

/// Turns a ring of [`CurvePoint`]s into [`PathToken`]s
#[derive(Clone, Copy, Debug, Default)]
pub struct PathBuilder {
    frame: CoordinateFrame,
}

impl PathBuilder {
    pub fn new(frame: CoordinateFrame) -> Self {
        Self { frame }
    }

    /// Build the drawing tokens for `points`
    ///
    /// The result starts with a single `MoveTo` followed by one segment per
    /// vertex after the first, plus the wraparound curve when the last
    /// vertex has an outgoing handle. No close command is produced.
    pub fn build(&self, points: &[CurvePoint]) -> Result<Vec<PathToken>, PathError> {
        let Some(first) = points.first() else {
            return Err(PathError::EmptyRing);
        };

        let mut tokens = Vec::with_capacity(points.len() + 1);
        tokens.push(PathToken::MoveTo(self.frame.map(first.anchor)));

        let mut pending = first.control_out;
        for (index, point) in points.iter().enumerate().skip(1) {
            trace!(
                index,
                mode = ?point.mode,
                has_out = point.has_control_out(),
                has_in = point.has_control_in(),
                "curve point"
            );
            tokens.push(self.segment(pending, point, SegmentEnd::Vertex(index)));
            pending = point.control_out;
        }

        // A lone vertex has nothing to wrap back to
        if points.len() > 1 && pending.is_some() {
            tokens.push(self.segment(pending, first, SegmentEnd::Wraparound));
        }

        debug!(
            points = points.len(),
            tokens = tokens.len(),
            curves = tokens.iter().filter(|t| t.is_curve()).count(),
            "built path"
        );

        Ok(tokens)
    }

    /// Segment from the previous vertex to `target`
    ///
    /// `pending` is the previous vertex's outgoing handle. Without it the
    /// segment is a straight line. With it the segment is a cubic whose
    /// second control is the target's incoming handle, falling back to the
    /// target anchor itself when that handle is inactive.
    fn segment(&self, pending: Option<Point>, target: &CurvePoint, end: SegmentEnd) -> PathToken {
        let anchor = self.frame.map(target.anchor);
        match pending {
            None => PathToken::LineTo(anchor),
            Some(control_out) => {
                if target.control_in.is_none() {
                    trace!(
                        vertex = end.vertex(),
                        wraparound = end == SegmentEnd::Wraparound,
                        "incoming handle inactive, using anchor as second control"
                    );
                }
                PathToken::CurveTo {
                    control1: self.frame.map(control_out),
                    control2: self.frame.map(target.control_in.unwrap_or(target.anchor)),
                    end: anchor,
                }
            }
        }
    }
}

/// Build tokens for `points` under `frame`
pub fn build_path(points: &[CurvePoint], frame: CoordinateFrame) -> Result<Vec<PathToken>, PathError> {
    PathBuilder::new(frame).build(points)
}
