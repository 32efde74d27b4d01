//! Orbita CLI
//!
//! Offline inspection of scroll choreographies: sweep a timeline across the
//! full progress range, sample a single frame, or validate a
//! `choreography.toml` before shipping it.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use orbita_choreo::{load_timeline, sample, SampleInput, Timeline, TimelinePreset};
use orbita_core::{Pose, ViewportMetrics};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orbita", version, about = "Inspect scroll choreographies offline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample poses across the full progress range
    Sweep(SweepArgs),
    /// Sample the pose at a single progress value
    Sample(SampleArgs),
    /// Validate a choreography config file
    Check {
        /// Path to a choreography.toml
        config: PathBuf,
    },
}

#[derive(Args)]
struct SweepArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of progress steps to sample
    #[arg(long, default_value_t = 20)]
    steps: u32,
}

#[derive(Args)]
struct SampleArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Global progress in [0, 1]
    #[arg(long)]
    progress: f32,
}

#[derive(Args)]
struct SourceArgs {
    /// Choreography config file; defaults to the built-in hero preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "1280x720", value_parser = parse_viewport)]
    viewport: ViewportMetrics,

    /// Clock value in seconds fed to time-driven channels
    #[arg(long, default_value_t = 0.0)]
    elapsed: f32,

    /// Fit-to-viewport base scale
    #[arg(long, default_value_t = 1.0)]
    base_scale: f32,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct SweepRow {
    progress: f32,
    pose: Pose,
}

fn parse_viewport(value: &str) -> Result<ViewportMetrics, String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let width: f32 = width
        .parse()
        .map_err(|_| format!("invalid viewport width {width:?}"))?;
    let height: f32 = height
        .parse()
        .map_err(|_| format!("invalid viewport height {height:?}"))?;
    Ok(ViewportMetrics::new(width, height))
}

impl SourceArgs {
    fn timeline(&self) -> Result<Timeline> {
        match &self.config {
            Some(path) => load_timeline(path)
                .with_context(|| format!("failed to load choreography from {}", path.display())),
            None => {
                debug!("no config given, using built-in hero preset");
                Ok(TimelinePreset::hero_logo())
            }
        }
    }

    fn sample_at(&self, timeline: &Timeline, progress: f32) -> Pose {
        sample(
            timeline,
            &SampleInput {
                progress,
                elapsed: self.elapsed,
                viewport: self.viewport,
                base_scale: self.base_scale,
                spin_handoff: None,
            },
        )
    }
}

fn emit(rows: &[SweepRow], format: Format) -> Result<()> {
    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        Format::Text => {
            for row in rows {
                let p = &row.pose;
                println!(
                    "{:>6.3}  pos ({:+8.3}, {:+8.3}, {:+8.3})  yaw {:+7.3}  pitch {:+7.3}  scale {:6.3}",
                    row.progress,
                    p.position.x,
                    p.position.y,
                    p.position.z,
                    p.rotation_y,
                    p.rotation_x,
                    p.scale
                );
            }
        }
    }
    Ok(())
}

fn run_sweep(args: &SweepArgs) -> Result<()> {
    let timeline = args.source.timeline()?;
    let steps = args.steps.max(1);
    let rows: Vec<SweepRow> = (0..=steps)
        .map(|step| {
            let progress = step as f32 / steps as f32;
            SweepRow {
                progress,
                pose: args.source.sample_at(&timeline, progress),
            }
        })
        .collect();
    emit(&rows, args.source.format)
}

fn run_sample(args: &SampleArgs) -> Result<()> {
    let timeline = args.source.timeline()?;
    let rows = [SweepRow {
        progress: args.progress,
        pose: args.source.sample_at(&timeline, args.progress),
    }];
    emit(&rows, args.source.format)
}

fn run_check(config: &PathBuf) -> Result<()> {
    let timeline = load_timeline(config)
        .with_context(|| format!("invalid choreography in {}", config.display()))?;
    println!(
        "{}: ok ({} segments)",
        config.display(),
        timeline.segments().len()
    );
    for (index, segment) in timeline.segments().iter().enumerate() {
        println!("  segment {index}: until {:.3}, {:?}", segment.until, segment.easing);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Sweep(args) => run_sweep(args),
        Command::Sample(args) => run_sample(args),
        Command::Check { config } => run_check(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_parses_width_and_height() {
        let v = parse_viewport("1280x720").unwrap();
        assert_eq!(v.width, 1280.0);
        assert_eq!(v.height, 720.0);
    }

    #[test]
    fn viewport_rejects_malformed_values() {
        assert!(parse_viewport("1280").is_err());
        assert!(parse_viewport("widex720").is_err());
    }

    #[test]
    fn default_source_uses_hero_preset() {
        let source = SourceArgs {
            config: None,
            viewport: ViewportMetrics::new(10.0, 10.0),
            elapsed: 0.0,
            base_scale: 1.0,
            format: Format::Text,
        };
        let timeline = source.timeline().unwrap();
        assert_eq!(timeline.segments().len(), 3);
        let pose = source.sample_at(&timeline, 1.0);
        assert_eq!(pose.scale, 0.4);
    }
}
