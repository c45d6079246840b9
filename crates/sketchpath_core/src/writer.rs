//! Serialization of path tokens to SVG path data

use std::fmt::Write;

use crate::builder::PathToken;
use crate::geometry::Point;

/// Most decimals worth writing for an `f64` coordinate
pub const MAX_PRECISION: usize = 17;

/// Writes [`PathToken`]s as an SVG `d` attribute string
///
/// Produces `Mx,y`, `Lx,y` and `Cc1x,c1y c2x,c2y x,y` separated by single
/// spaces, with an optional trailing `Z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathWriter {
    close: bool,
    implicit_commands: bool,
    precision: Option<usize>,
}

impl PathWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `Z` close command
    pub fn close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }

    /// Leave out command letters that SVG infers from the previous command
    pub fn implicit_commands(mut self, implicit: bool) -> Self {
        self.implicit_commands = implicit;
        self
    }

    /// Round coordinates to a fixed number of decimals, at most [`MAX_PRECISION`]
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision.map(|digits| digits.min(MAX_PRECISION));
        self
    }

    pub fn write(&self, tokens: &[PathToken]) -> String {
        let mut out = String::new();
        // Command a bare coordinate list would continue
        let mut current: Option<char> = None;

        for token in tokens {
            if !out.is_empty() {
                out.push(' ');
            }

            let letter = match token {
                PathToken::MoveTo(_) => 'M',
                PathToken::LineTo(_) => 'L',
                PathToken::CurveTo { .. } => 'C',
            };
            if !(self.implicit_commands && current == Some(letter)) {
                out.push(letter);
            }
            // Pairs after a moveto are implicit linetos
            current = Some(if letter == 'M' { 'L' } else { letter });

            match token {
                PathToken::MoveTo(p) | PathToken::LineTo(p) => self.push_point(&mut out, *p),
                PathToken::CurveTo {
                    control1,
                    control2,
                    end,
                } => {
                    self.push_point(&mut out, *control1);
                    out.push(' ');
                    self.push_point(&mut out, *control2);
                    out.push(' ');
                    self.push_point(&mut out, *end);
                }
            }
        }

        if self.close && !tokens.is_empty() {
            out.push_str(" Z");
        }

        out
    }

    fn push_point(&self, out: &mut String, p: Point) {
        let _ = write!(
            out,
            "{},{}",
            format_number(p.x, self.precision),
            format_number(p.y, self.precision)
        );
    }
}

/// Default serialization: explicit commands, shortest float form, no close
pub fn to_path_data(tokens: &[PathToken]) -> String {
    PathWriter::new().write(tokens)
}

fn format_number(value: f64, precision: Option<usize>) -> String {
    let text = match precision {
        None => format!("{}", value),
        Some(digits) => {
            let fixed = format!("{:.*}", digits, value);
            if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                fixed
            }
        }
    };

    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
