//! Spacing CLI
//!
//! Run the dust-mote field headlessly against a recording surface and report
//! how the population evolved.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use spacing_core::{Point, Size};
use spacing_particles::{
    EffectKind, FieldContext, FieldSettings, HeadlessHost, Intensity, MountOutcome,
    ParticleField,
};
use spacing_platform::{Event, InputEvent, MouseButton, MouseEvent};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::Overrides;

#[derive(Parser)]
#[command(name = "spacing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ambient dust-mote field, headless", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the field for a number of frames
    Run {
        /// Settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Effect kind (particles, waves, gradient)
        #[arg(short, long)]
        effect: Option<EffectKind>,

        /// Intensity (low, medium, high)
        #[arg(short, long)]
        intensity: Option<Intensity>,

        /// Honour the reduced-motion preference
        #[arg(long)]
        reduced_motion: bool,

        /// Frames to run
        #[arg(short, long, default_value = "600")]
        frames: usize,

        /// Surface width
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Surface height
        #[arg(long, default_value = "720")]
        height: f32,

        /// Click at X,Y (repeatable); clicks are spread evenly over the run
        #[arg(long, value_parser = parse_point)]
        click: Vec<Point>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved settings
    Settings {
        /// Settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
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
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            config,
            effect,
            intensity,
            reduced_motion,
            frames,
            width,
            height,
            click,
            seed,
            json,
        } => {
            let overrides = Overrides {
                effect,
                intensity,
                reduced_motion,
            };
            let settings = overrides.apply(config::load_settings(config.as_deref())?);
            let options = RunOptions {
                frames,
                viewport: Size::new(width, height),
                clicks: click,
                seed,
            };
            cmd_run(settings, &options, json)
        }

        Commands::Settings { config, json } => cmd_settings(config.as_deref(), json),
    }
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

struct RunOptions {
    frames: usize,
    viewport: Size,
    clicks: Vec<Point>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    effect: String,
    intensity: String,
    reduced_motion: bool,
    frames: u64,
    draws: u64,
    initial_population: usize,
    final_population: usize,
    peak_population: usize,
    merges: usize,
    clicks: usize,
    dropped: usize,
}

fn cmd_run(settings: FieldSettings, options: &RunOptions, json: bool) -> Result<()> {
    if options.viewport.is_empty() {
        anyhow::bail!(
            "Surface must have a positive size, got {}x{}",
            options.viewport.width,
            options.viewport.height
        );
    }

    let context = FieldContext::from(settings);
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut host = HeadlessHost::new(options.viewport);
    let mut field = ParticleField::with_rng(context, rng);

    info!(
        "Running {} / {} on {}x{} for {} frames",
        context.config.effect_kind,
        context.config.intensity,
        options.viewport.width,
        options.viewport.height,
        options.frames
    );

    if let MountOutcome::Skipped(err) = field.mount(&mut host) {
        anyhow::bail!("Field could not be mounted: {}", err);
    }

    let mut report = RunReport {
        effect: context.config.effect_kind.to_string(),
        intensity: context.config.intensity.to_string(),
        reduced_motion: context.reduced_motion,
        initial_population: field.particles().len(),
        peak_population: field.particles().len(),
        ..RunReport::default()
    };

    let click_every = options.frames / (options.clicks.len() + 1);
    let mut clicks = options.clicks.iter();

    for frame in 1..=options.frames {
        if click_every > 0 && frame % click_every == 0 {
            if let Some(&point) = clicks.next() {
                let event = Event::Input(InputEvent::Mouse(MouseEvent::ButtonPressed {
                    button: MouseButton::Left,
                    x: point.x,
                    y: point.y,
                }));
                let before = field.particles().len();
                field.handle_event(&mut host, &event);
                debug!(
                    "Click at ({}, {}): {} -> {} particles",
                    point.x,
                    point.y,
                    before,
                    field.particles().len()
                );
                report.peak_population = report.peak_population.max(field.particles().len());
            }
        }

        // Deliver the frame directly rather than through `pump` to see its stats
        if host.take_pending_frame().is_none() {
            continue;
        }
        if let Some(stats) = field.frame(&mut host) {
            report.merges += stats.merges;
            report.dropped += stats.dropped;
            report.peak_population = report.peak_population.max(stats.population);
        }
    }

    report.clicks = options.clicks.len() - clicks.len();
    report.frames = field.frames();
    report.draws = field.draws();
    report.final_population = field.particles().len();
    field.unmount(&mut host);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    println!();
    println!("Spacing field run");
    println!("=================");
    println!();
    println!(
        "  Effect:            {} / {}{}",
        report.effect,
        report.intensity,
        if report.reduced_motion {
            " (reduced motion)"
        } else {
            ""
        }
    );
    println!("  Frames stepped:    {}", report.frames);
    println!("  Surface draws:     {}", report.draws);
    println!("  Population:        {} -> {}", report.initial_population, report.final_population);
    println!("  Peak population:   {}", report.peak_population);
    println!("  Merges:            {}", report.merges);
    println!("  Clicks delivered:  {}", report.clicks);
    if report.dropped > 0 {
        println!("  Dropped at cap:    {}", report.dropped);
    }
    println!();
}

fn cmd_settings(path: Option<&std::path::Path>, json: bool) -> Result<()> {
    let settings = config::load_settings(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        print!("{}", config::to_toml(&settings)?);
    }

    Ok(())
}
