//! Points and the normalized-to-absolute coordinate mapping

use serde::{Deserialize, Serialize};

/// 2D point, either normalized to a frame or in absolute output units
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear mapping from normalized `[0, 1]` coordinates to absolute ones
///
/// Mirrors the layer `frame` of a design document: the origin is the
/// offset and the size is the per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for CoordinateFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl CoordinateFrame {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero offset, unit scale
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Map a normalized point into absolute coordinates
    #[inline]
    pub fn map(&self, p: Point) -> Point {
        Point::new(self.x + p.x * self.width, self.y + p.y * self.height)
    }

    /// Map an absolute point back into normalized coordinates
    ///
    /// Returns `None` for a degenerate frame with a zero scale on either axis.
    pub fn unmap(&self, p: Point) -> Option<Point> {
        if self.width == 0.0 || self.height == 0.0 {
            return None;
        }
        Some(Point::new(
            (p.x - self.x) / self.width,
            (p.y - self.y) / self.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_identity_map() {
        let frame = CoordinateFrame::identity();
        assert_eq!(frame.map(Point::new(0.25, 0.75)), Point::new(0.25, 0.75));
    }

    #[test]
    fn test_map_applies_offset_and_scale() {
        let frame = CoordinateFrame::new(5.0, 5.5, 14.625, 13.5);
        let p = frame.map(Point::new(1.0, 0.5));
        assert!((p.x - 19.625).abs() < EPSILON);
        assert!((p.y - 12.25).abs() < EPSILON);
    }

    #[test]
    fn test_map_unmap_round_trip() {
        let frame = CoordinateFrame::new(5.049038461538462, 5.5, 14.625, 13.5);
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.91826923076923073, 0.083333333333333329),
            Point::new(0.3936636328125, 0.21831553385416669),
        ];

        for p in samples {
            let back = frame.unmap(frame.map(p)).unwrap();
            assert!((back.x - p.x).abs() < EPSILON, "{:?} -> {:?}", p, back);
            assert!((back.y - p.y).abs() < EPSILON, "{:?} -> {:?}", p, back);
        }
    }

    #[test]
    fn test_unmap_degenerate_frame() {
        let frame = CoordinateFrame::new(1.0, 1.0, 0.0, 10.0);
        assert_eq!(frame.unmap(Point::new(1.0, 2.0)), None);
    }

    #[test]
    fn test_frame_from_layer_json() {
        let json = r#"{"_class":"rect","constrainProportions":false,"height":13.5,"width":14.625,"x":5.05,"y":5.5}"#;
        let frame: CoordinateFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame, CoordinateFrame::new(5.05, 5.5, 14.625, 13.5));
    }
}
