//! JSON records for curve points and shape-path layers
//!
//! The upstream document stores each vertex as
//!
//! ```json
//! {"point": "{u, v}", "curveFrom": "{u, v}", "curveTo": "{u, v}",
//!  "hasCurveFrom": true, "hasCurveTo": false, "curveMode": 1}
//! ```
//!
//! `curveFrom` is the outgoing handle and `curveTo` the incoming one. Fields
//! are kept as raw JSON values so that a bad value is reported against its
//! ring index instead of failing the whole document.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::PathError;
use crate::geometry::{CoordinateFrame, Point};
use crate::point::{parse_pair, CurveMode, CurvePoint};

/// Raw view of one curve point record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePointRecord {
    #[serde(default)]
    pub point: Option<Value>,
    #[serde(default)]
    pub curve_from: Option<Value>,
    #[serde(default)]
    pub curve_to: Option<Value>,
    #[serde(default)]
    pub has_curve_from: Option<Value>,
    #[serde(default)]
    pub has_curve_to: Option<Value>,
    #[serde(default)]
    pub curve_mode: Option<Value>,
}

impl CurvePointRecord {
    /// Decode into a [`CurvePoint`], tagging failures with `index`
    ///
    /// A handle is only read when its `has*` flag is true; inactive handles
    /// may be absent or hold anything.
    pub fn decode(&self, index: usize) -> Result<CurvePoint, PathError> {
        let anchor = pair_field(index, "point", self.point.as_ref())?;

        let control_out = if flag_field(index, "hasCurveFrom", self.has_curve_from.as_ref())? {
            Some(pair_field(index, "curveFrom", self.curve_from.as_ref())?)
        } else {
            None
        };

        let control_in = if flag_field(index, "hasCurveTo", self.has_curve_to.as_ref())? {
            Some(pair_field(index, "curveTo", self.curve_to.as_ref())?)
        } else {
            None
        };

        let mode = match &self.curve_mode {
            None | Some(Value::Null) => CurveMode::None,
            Some(value) => value
                .as_i64()
                .map(CurveMode::from)
                .ok_or_else(|| invalid(index, "curveMode", "is not an integer"))?,
        };

        Ok(CurvePoint {
            anchor,
            control_out,
            control_in,
            mode,
        })
    }
}

/// A shape-path layer: the ring plus its frame and closed flag
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePath {
    #[serde(default)]
    pub frame: Option<CoordinateFrame>,
    #[serde(default)]
    pub is_closed: Option<bool>,
    pub points: Vec<CurvePointRecord>,
}

impl ShapePath {
    /// Decode every record, stopping at the first invalid one
    pub fn curve_points(&self) -> Result<Vec<CurvePoint>, PathError> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, record)| record.decode(index))
            .collect()
    }
}

/// Parse either a bare array of curve point records or a shape-path object
pub fn parse_points(json: &str) -> Result<ShapePath, PathError> {
    let value: Value = serde_json::from_str(json)?;
    let shape = if value.is_array() {
        ShapePath {
            points: serde_json::from_value(value)?,
            ..ShapePath::default()
        }
    } else {
        serde_json::from_value(value)?
    };

    debug!(
        points = shape.points.len(),
        has_frame = shape.frame.is_some(),
        "parsed shape path document"
    );

    Ok(shape)
}

fn invalid(index: usize, field: &'static str, reason: &str) -> PathError {
    PathError::InvalidRecord {
        index,
        field,
        reason: reason.to_string(),
    }
}

fn pair_field(index: usize, field: &'static str, value: Option<&Value>) -> Result<Point, PathError> {
    match value {
        None | Some(Value::Null) => Err(PathError::missing(index, field)),
        Some(Value::String(text)) => {
            parse_pair(text).map_err(|err| PathError::malformed(index, field, err))
        }
        Some(_) => Err(invalid(index, field, "is not a \"{u, v}\" string")),
    }
}

fn flag_field(index: usize, field: &'static str, value: Option<&Value>) -> Result<bool, PathError> {
    match value {
        None | Some(Value::Null) => Err(PathError::missing(index, field)),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(invalid(index, field, "is not a boolean")),
    }
}
