//! sketchpath CLI
//!
//! Convert curve-point rings from design documents into SVG path data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sketchpath_core::{
    parse_points, CoordinateFrame, PathBuilder, PathToken, PathWriter, Point, ShapePath,
};

mod config;

use config::SketchpathConfig;

#[derive(Parser)]
#[command(name = "sketchpath")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert curve-point rings to SVG path data", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./sketchpath.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to path data
    Convert {
        /// JSON document, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Frame as `x,y,width,height`
        #[arg(short, long, value_parser = parse_frame)]
        frame: Option<CoordinateFrame>,

        /// Append a `Z` close command
        #[arg(long, conflicts_with = "no_close")]
        close: bool,

        /// Never append a close command
        #[arg(long)]
        no_close: bool,

        /// Decimal places for coordinates
        #[arg(short, long)]
        precision: Option<usize>,

        /// Omit command letters SVG can infer
        #[arg(long)]
        implicit: bool,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Log every decoded point and the resulting tokens
    Inspect {
        /// JSON document, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Frame as `x,y,width,height`
        #[arg(short, long, value_parser = parse_frame)]
        frame: Option<CoordinateFrame>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => SketchpathConfig::load(path)?,
        None => SketchpathConfig::load_from_dir(&std::env::current_dir()?)?,
    };

    match cli.command {
        Commands::Convert {
            input,
            frame,
            close,
            no_close,
            precision,
            implicit,
            output,
        } => {
            let close = if close {
                Some(true)
            } else if no_close {
                Some(false)
            } else {
                None
            };
            let options = ConvertOptions {
                frame,
                close,
                precision,
                implicit,
            };
            cmd_convert(&config, &input, &options, output.as_deref())
        }

        Commands::Inspect { input, frame } => cmd_inspect(&config, &input, frame),
    }
}

/// Command-line overrides for a conversion
struct ConvertOptions {
    frame: Option<CoordinateFrame>,
    close: Option<bool>,
    precision: Option<usize>,
    implicit: bool,
}

fn cmd_convert(
    config: &SketchpathConfig,
    input: &str,
    options: &ConvertOptions,
    output: Option<&Path>,
) -> Result<()> {
    let shape = read_shape(input)?;
    let frame = resolve_frame(options.frame, &shape, config);
    let tokens = build_tokens(&shape, frame)?;

    let close = options
        .close
        .or(shape.is_closed)
        .unwrap_or(config.output.close);

    let data = PathWriter::new()
        .close(close)
        .implicit_commands(options.implicit || config.output.implicit_commands)
        .precision(options.precision.or(config.output.precision))
        .write(&tokens);

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", data))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} tokens to {}", tokens.len(), path.display());
        }
        None => println!("{}", data),
    }

    Ok(())
}

fn cmd_inspect(config: &SketchpathConfig, input: &str, frame: Option<CoordinateFrame>) -> Result<()> {
    let shape = read_shape(input)?;
    let frame = resolve_frame(frame, &shape, config);
    let points = shape.curve_points()?;

    info!(
        "{} points, frame ({}, {}) {}x{}, closed: {:?}",
        points.len(),
        frame.x,
        frame.y,
        frame.width,
        frame.height,
        shape.is_closed
    );

    for (index, point) in points.iter().enumerate() {
        info!(
            "#{} mode {:?}, from: {}, to: {}",
            index,
            point.mode,
            point.has_control_out(),
            point.has_control_in()
        );
        info!("  point: {}", describe(frame, Some(point.anchor)));
        info!("  from:  {}", describe(frame, point.control_out));
        info!("  to:    {}", describe(frame, point.control_in));
    }

    let tokens = PathBuilder::new(frame).build(&points)?;
    for token in &tokens {
        match token {
            PathToken::MoveTo(p) => info!("M {},{}", p.x, p.y),
            PathToken::LineTo(p) => info!("L {},{}", p.x, p.y),
            PathToken::CurveTo {
                control1,
                control2,
                end,
            } => info!(
                "C {},{} {},{} {},{}",
                control1.x, control1.y, control2.x, control2.y, end.x, end.y
            ),
        }
    }

    Ok(())
}

fn read_shape(input: &str) -> Result<ShapePath> {
    let content = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    let shape = parse_points(&content).with_context(|| format!("Failed to parse {}", input))?;
    debug!("Read {} records from {}", shape.points.len(), input);
    Ok(shape)
}

fn build_tokens(shape: &ShapePath, frame: CoordinateFrame) -> Result<Vec<PathToken>> {
    let points = shape.curve_points()?;
    let tokens = PathBuilder::new(frame).build(&points)?;
    Ok(tokens)
}

/// Command line beats document beats config
fn resolve_frame(
    explicit: Option<CoordinateFrame>,
    shape: &ShapePath,
    config: &SketchpathConfig,
) -> CoordinateFrame {
    explicit
        .or(shape.frame)
        .or_else(|| config.frame())
        .unwrap_or_default()
}

fn describe(frame: CoordinateFrame, point: Option<Point>) -> String {
    match point {
        Some(p) => {
            let mapped = frame.map(p);
            format!("({}, {}) -> ({}, {})", p.x, p.y, mapped.x, mapped.y)
        }
        None => "-".to_string(),
    }
}

fn parse_frame(text: &str) -> Result<CoordinateFrame, String> {
    let values = text
        .split(',')
        .map(|part| match part.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(format!("invalid frame value {:?}", part.trim())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [x, y, width, height] => Ok(CoordinateFrame::new(*x, *y, *width, *height)),
        _ => Err(format!(
            "expected x,y,width,height, got {} values",
            values.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame() {
        assert_eq!(
            parse_frame("5.5, 5.5,14.625,13.5").unwrap(),
            CoordinateFrame::new(5.5, 5.5, 14.625, 13.5)
        );
        assert!(parse_frame("1,2,3").is_err());
        assert!(parse_frame("1,2,three,4").is_err());
        assert!(parse_frame("NaN,0,1,1").is_err());
        assert!(parse_frame("0,0,inf,1").is_err());
    }

    #[test]
    fn test_frame_precedence() {
        let config = SketchpathConfig::from_toml("[frame]\nwidth = 24.0\nheight = 24.0\n").unwrap();
        let mut shape = ShapePath::default();

        assert_eq!(
            resolve_frame(None, &shape, &config),
            CoordinateFrame::new(0.0, 0.0, 24.0, 24.0)
        );

        shape.frame = Some(CoordinateFrame::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(
            resolve_frame(None, &shape, &config),
            CoordinateFrame::new(1.0, 1.0, 2.0, 2.0)
        );

        let explicit = CoordinateFrame::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(resolve_frame(Some(explicit), &shape, &config), explicit);

        assert_eq!(
            resolve_frame(None, &ShapePath::default(), &SketchpathConfig::default()),
            CoordinateFrame::identity()
        );
    }

    #[test]
    fn test_build_tokens_rejects_empty_ring() {
        let shape = ShapePath::default();
        assert!(build_tokens(&shape, CoordinateFrame::identity()).is_err());
    }

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from([
            "sketchpath",
            "convert",
            "shape.json",
            "--frame",
            "0,0,24,24",
            "--close",
            "-p",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Convert {
                input,
                frame,
                close,
                precision,
                ..
            } => {
                assert_eq!(input, "shape.json");
                assert_eq!(frame, Some(CoordinateFrame::new(0.0, 0.0, 24.0, 24.0)));
                assert!(close);
                assert_eq!(precision, Some(2));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_cli_rejects_conflicting_close_flags() {
        assert!(Cli::try_parse_from(["sketchpath", "convert", "--close", "--no-close"]).is_err());
    }
}
