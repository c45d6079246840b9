//! Curve points and their textual coordinate pairs

use crate::error::PairError;
use crate::geometry::Point;

/// Handle style recorded by the design tool
///
/// Only carried as provenance; path assembly never looks at it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurveMode {
    #[default]
    None,
    Straight,
    Mirrored,
    Asymmetric,
    Disconnected,
    /// A mode number this crate does not know about
    Unknown(i64),
}

impl From<i64> for CurveMode {
    fn from(value: i64) -> Self {
        match value {
            0 => CurveMode::None,
            1 => CurveMode::Straight,
            2 => CurveMode::Mirrored,
            3 => CurveMode::Asymmetric,
            4 => CurveMode::Disconnected,
            other => CurveMode::Unknown(other),
        }
    }
}

impl From<CurveMode> for i64 {
    fn from(mode: CurveMode) -> Self {
        match mode {
            CurveMode::None => 0,
            CurveMode::Straight => 1,
            CurveMode::Mirrored => 2,
            CurveMode::Asymmetric => 3,
            CurveMode::Disconnected => 4,
            CurveMode::Unknown(other) => other,
        }
    }
}

/// One vertex of a shape ring, in normalized coordinates
///
/// A handle is `Some` exactly when the source record flagged it active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurvePoint {
    pub anchor: Point,
    /// Handle leaving this vertex toward the next one
    pub control_out: Option<Point>,
    /// Handle arriving at this vertex from the previous one
    pub control_in: Option<Point>,
    pub mode: CurveMode,
}

impl CurvePoint {
    /// A vertex with no active handles
    pub const fn corner(anchor: Point) -> Self {
        Self {
            anchor,
            control_out: None,
            control_in: None,
            mode: CurveMode::None,
        }
    }

    pub fn with_control_out(mut self, control: Point) -> Self {
        self.control_out = Some(control);
        self
    }

    pub fn with_control_in(mut self, control: Point) -> Self {
        self.control_in = Some(control);
        self
    }

    pub fn with_mode(mut self, mode: CurveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn has_control_out(&self) -> bool {
        self.control_out.is_some()
    }

    pub fn has_control_in(&self) -> bool {
        self.control_in.is_some()
    }
}

/// Parse a `"{u, v}"` pair as written by the design tool
///
/// Whitespace around the braces and the components is ignored. Exactly two
/// finite numbers are required.
pub fn parse_pair(text: &str) -> Result<Point, PairError> {
    let inner = text
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| PairError::MissingBraces(text.to_string()))?;

    let mut parts = inner.split(',');
    let (Some(u), Some(v), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PairError::ComponentCount {
            found: inner.split(',').count(),
            text: text.to_string(),
        });
    };

    Ok(Point::new(parse_component(u)?, parse_component(v)?))
}

fn parse_component(raw: &str) -> Result<f64, PairError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PairError::InvalidNumber(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let p = parse_pair("{0.91826923076923073, 0.083333333333333329}").unwrap();
        assert_eq!(p, Point::new(0.91826923076923073, 0.083333333333333329));

        assert_eq!(parse_pair("{1, 0}").unwrap(), Point::new(1.0, 0.0));
        assert_eq!(parse_pair("  { -0.5 ,1e-3 } ").unwrap(), Point::new(-0.5, 0.001));
    }

    #[test]
    fn test_parse_pair_missing_component() {
        assert_eq!(
            parse_pair("{0.5}"),
            Err(PairError::ComponentCount {
                found: 1,
                text: "{0.5}".to_string()
            })
        );
    }

    #[test]
    fn test_parse_pair_rejects_malformed() {
        assert!(matches!(
            parse_pair("{1, 2, 3}"),
            Err(PairError::ComponentCount { found: 3, .. })
        ));
        assert!(matches!(parse_pair("0.5, 0.5"), Err(PairError::MissingBraces(_))));
        assert!(matches!(parse_pair("{0.5, 0.5"), Err(PairError::MissingBraces(_))));
        assert!(matches!(parse_pair("{, 0.5}"), Err(PairError::InvalidNumber(_))));
        assert!(matches!(parse_pair("{a, 0.5}"), Err(PairError::InvalidNumber(_))));
        assert!(matches!(parse_pair("{NaN, 0.5}"), Err(PairError::InvalidNumber(_))));
        assert!(matches!(parse_pair("{inf, 0.5}"), Err(PairError::InvalidNumber(_))));
        assert!(matches!(parse_pair(""), Err(PairError::MissingBraces(_))));
    }

    #[test]
    fn test_curve_mode_numbers() {
        assert_eq!(CurveMode::from(2), CurveMode::Mirrored);
        assert_eq!(CurveMode::from(4), CurveMode::Disconnected);
        assert_eq!(CurveMode::from(9), CurveMode::Unknown(9));
        assert_eq!(i64::from(CurveMode::Asymmetric), 3);
        assert_eq!(i64::from(CurveMode::Unknown(-1)), -1);
    }

    #[test]
    fn test_curve_point_builders() {
        let p = CurvePoint::corner(Point::new(1.0, 0.0))
            .with_control_out(Point::new(0.5, 0.0))
            .with_mode(CurveMode::Straight);

        assert!(p.has_control_out());
        assert!(!p.has_control_in());
        assert_eq!(p.mode, CurveMode::Straight);
    }
}
