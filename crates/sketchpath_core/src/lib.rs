//! Curve-point rings to SVG path data
//!
//! Vector design tools store a shape outline as a closed ring of curve
//! points. Each point has a normalized anchor plus optional incoming and
//! outgoing Bézier handles. This crate decodes those records, pairs the
//! handles into cubic segments and writes the result as an SVG path string
//! in absolute coordinates.
//!
//! # Example
//!
//! ```
//! use sketchpath_core::{build_path, CoordinateFrame, CurvePoint, PathWriter, Point};
//!
//! let ring = [
//!     CurvePoint::corner(Point::new(0.0, 0.0)),
//!     CurvePoint::corner(Point::new(1.0, 0.0)),
//!     CurvePoint::corner(Point::new(1.0, 1.0)),
//! ];
//! let tokens = build_path(&ring, CoordinateFrame::new(10.0, 10.0, 20.0, 20.0)).unwrap();
//! let data = PathWriter::new().close(true).write(&tokens);
//! assert_eq!(data, "M10,10 L30,10 L30,30 Z");
//! ```

mod builder;
mod error;
mod geometry;
mod point;
mod record;
mod writer;

pub use builder::{build_path, PathBuilder, PathToken};
pub use error::{PairError, PathError};
pub use geometry::{CoordinateFrame, Point};
pub use point::{parse_pair, CurveMode, CurvePoint};
pub use record::{parse_points, CurvePointRecord, ShapePath};
pub use writer::{to_path_data, PathWriter, MAX_PRECISION};
