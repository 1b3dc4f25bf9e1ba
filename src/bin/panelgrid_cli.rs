//! CLI tool for panelgrid - computes a panel grid and outputs JSON
//!
//! Usage:
//!   panelgrid_cli --width 300 --height 200 --rows 5 --density 50
//!   panelgrid_cli --width 300 --height 200 --svg grid.svg --surface 1200x800
//!
//! Logging follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use panelgrid::render::{paint_frame, SvgSurface};
use panelgrid::{ControlReadout, Frame, Parameters, PanelGridError, VisualizerConfig, ViewerState};

/// Compute and render an annotated panel grid
#[derive(Parser, Debug)]
#[command(name = "panelgrid_cli")]
#[command(version)]
#[command(about = "Divide a physical panel into a grid of cells and report or render it")]
struct Args {
    /// Panel width in centimeters
    #[arg(long, default_value_t = 240.0)]
    width: f64,

    /// Panel height in centimeters
    #[arg(long, default_value_t = 180.0)]
    height: f64,

    /// Requested row count (clamped to the feasible range)
    #[arg(long, default_value_t = 4)]
    rows: u32,

    /// Column density, 0 (widest cells) to 100 (narrowest cells)
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(0..=100))]
    density: u32,

    /// Drawing surface size in pixels, as WIDTHxHEIGHT
    #[arg(long, default_value = "1200x800", value_parser = parse_surface)]
    surface: (f64, f64),

    /// JSON config file (constraints and style; every field optional)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write an SVG rendering to this path
    #[arg(long)]
    svg: Option<PathBuf>,
}

/// JSON document printed to stdout
#[derive(Serialize)]
struct Report {
    readout: ControlReadout,
    frame: Frame,
}

fn parse_surface(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let parse = |v: &str| -> Result<f64, String> {
        let n: f64 = v
            .trim()
            .parse()
            .map_err(|e| format!("bad surface dimension {v:?}: {e}"))?;
        if n.is_finite() && n > 0.0 {
            Ok(n)
        } else {
            Err(format!("surface dimension must be positive, got {n}"))
        }
    };
    Ok((parse(w)?, parse(h)?))
}

fn load_config(path: Option<&PathBuf>) -> panelgrid::Result<VisualizerConfig> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            log::info!("loaded config from {}", path.display());
            VisualizerConfig::from_json(&json)
        }
        None => Ok(VisualizerConfig::default()),
    }
}

fn run(args: &Args) -> Result<(), PanelGridError> {
    let config = load_config(args.config.as_ref())?;
    let params = Parameters::new(args.width, args.height, args.rows, args.density)?;
    let (surface_width, surface_height) = args.surface;
    let state = ViewerState::new(params, config, surface_width, surface_height);

    let frame = state.frame();
    let report = Report {
        readout: state.readout(),
        frame,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = &args.svg {
        let mut surface = SvgSurface::new(surface_width, surface_height);
        paint_frame(&mut surface, &frame, &state.config().style);
        fs::write(path, surface.to_svg())?;
        eprintln!("Written: {}", path.display());
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["panelgrid_cli"]);
        assert_eq!(args.width, 240.0);
        assert_eq!(args.height, 180.0);
        assert_eq!(args.rows, 4);
        assert_eq!(args.density, 50);
        assert_eq!(args.surface, (1200.0, 800.0));
        assert!(args.svg.is_none());
    }

    #[test]
    fn test_density_out_of_range_rejected() {
        let err = Args::try_parse_from(["panelgrid_cli", "--density", "101"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_surface_parsing() {
        assert_eq!(parse_surface("640x480").unwrap(), (640.0, 480.0));
        assert_eq!(parse_surface("800X600").unwrap(), (800.0, 600.0));
        assert!(parse_surface("640").is_err());
        assert!(parse_surface("0x480").is_err());
    }

    #[test]
    fn test_invalid_width_is_an_error() {
        let args = Args::parse_from(["panelgrid_cli", "--width=-5"]);
        assert!(matches!(
            run(&args),
            Err(PanelGridError::InvalidParameter { name: "widthCm", .. })
        ));
    }
}
