//! Application entry point for the fractal tree viewer.
//!
//! Parses the command line, installs logging, and hands the window over to
//! [`Viewer`] from the `viewer` module.

mod viewer;

use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use fractal_core::config::{FractalParameters, SceneConfig};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt};
use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(author, version, about = "Animated fractal tree viewer", long_about = None)]
struct Cli {
    /// Shift angle in degrees
    #[arg(long, default_value_t = 30.0)]
    angle: f32,

    /// Depth the tree grows to on start-up
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(0..=20))]
    depth: i32,

    /// Length decay applied to each new branch
    #[arg(long, default_value_t = 0.9)]
    length_decay: f32,

    /// Extra decay compounded on left turns
    #[arg(long, default_value_t = 0.91)]
    left_decay: f32,

    /// Extra decay compounded on right turns
    #[arg(long, default_value_t = 1.0)]
    right_decay: f32,

    /// Milliseconds between two depth steps of the growth animation
    #[arg(long, default_value_t = 80)]
    tick_ms: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl Cli {
    fn parameters(&self) -> anyhow::Result<FractalParameters> {
        let params = FractalParameters {
            angle: self.angle,
            depth: self.depth,
            length_decay: self.length_decay,
            left_decay_multiplier: self.left_decay,
            right_decay_multiplier: self.right_decay,
        };
        params
            .validate()
            .context("invalid fractal parameters on the command line")?;
        Ok(params)
    }

    fn scene(&self) -> SceneConfig {
        SceneConfig {
            tick_interval: Duration::from_millis(self.tick_ms),
            ..SceneConfig::default()
        }
    }
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the window runs to completion.
/// - `Err` for invalid arguments or if eframe cannot create the window.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(cli.log_level).into())
        .from_env_lossy();
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let params = cli.parameters()?;
    let scene = cli.scene();
    info!(?params, tick_ms = cli.tick_ms, "starting fractal tree viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1500.0, 960.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fractal Tree",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(params, scene)))),
    )
    .map_err(|e| anyhow!("failed to run the viewer window: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_parameters() {
        let cli = Cli::parse_from(["fractal-view"]);
        assert_eq!(cli.parameters().unwrap(), FractalParameters::default());
        assert_eq!(cli.scene(), SceneConfig::default());
    }

    #[test]
    fn depth_outside_range_is_rejected() {
        assert!(Cli::try_parse_from(["fractal-view", "--depth", "21"]).is_err());
        assert!(Cli::try_parse_from(["fractal-view", "--depth", "-1"]).is_err());
        assert!(Cli::try_parse_from(["fractal-view", "--depth", "20"]).is_ok());
    }

    #[test]
    fn non_finite_parameters_fail_validation() {
        let cli = Cli::parse_from(["fractal-view", "--length-decay", "NaN"]);
        assert!(cli.parameters().is_err());
    }

    #[test]
    fn tick_interval_comes_from_flag() {
        let cli = Cli::parse_from(["fractal-view", "--tick-ms", "25"]);
        assert_eq!(cli.scene().tick_interval, Duration::from_millis(25));
    }
}
