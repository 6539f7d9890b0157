//! # Field Report
//!
//! Headless renderer: runs N animation frames per composition mode and
//! prints field statistics and frame timings.
//!
//! Usage: `field_report [config.toml] [--frames N] [--noise lattice|simplex] [--both]`
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use noisefield::procedural::{CompositionMode, NoiseKind};
use noisefield::{EngineConfig, FrameRenderer, NoisefieldResult};
use tracing_subscriber::EnvFilter;

const DEFAULT_FRAMES: u32 = 8;

struct Options {
    config_path: Option<String>,
    frames: u32,
    noise: Option<NoiseKind>,
    both_kinds: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config_path: None,
        frames: DEFAULT_FRAMES,
        noise: None,
        both_kinds: false,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                options.frames = value
                    .parse()
                    .map_err(|_| format!("invalid frame count: {value}"))?;
            }
            "--noise" => {
                let value = iter.next().ok_or("--noise needs a value")?;
                options.noise = Some(value.parse().map_err(|e| format!("{e}"))?);
            }
            "--both" => options.both_kinds = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option: {flag}")),
            path => options.config_path = Some(path.to_string()),
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("Usage: field_report [config.toml] [options]");
    println!();
    println!("Options:");
    println!("  --frames <n>       Frames per mode (default {DEFAULT_FRAMES})");
    println!("  --noise <kind>     lattice | simplex (overrides config)");
    println!("  --both             Report both noise kinds");
}

fn report(config: &EngineConfig, kinds: &[NoiseKind], frames: u32) -> NoisefieldResult<()> {
    let mut renderer = FrameRenderer::new(config)?;
    let dims = renderer.dimensions();

    println!(
        "Field: {}x{}  bins: {}  stretch: {}",
        dims.width(),
        dims.height(),
        config.bins(),
        config.field.stretch
    );
    println!();

    for &kind in kinds {
        println!(
            "┌─ {:<10} ───────────────────────────────────────────────────────────────┐",
            kind.name().to_uppercase()
        );
        println!(
            "│ {:<24} {:>9} {:>9} {:>9} {:>9} {:>9} │",
            "mode", "min", "max", "mean", "hist max", "avg ms"
        );

        for mode in CompositionMode::ALL {
            let (mut min, mut max, mut mean_sum) = (f32::INFINITY, f32::NEG_INFINITY, 0.0f64);
            let mut hist_max = 0u32;
            let mut elapsed_ms = 0.0f64;

            for frame_index in 0..frames {
                let z = noisefield::time_coordinate(frame_index);
                let frame = renderer.render(kind, mode, z)?;
                min = min.min(frame.field.min());
                max = max.max(frame.field.max());
                mean_sum += f64::from(frame.field.mean());
                hist_max = hist_max.max(frame.histogram.max());
                elapsed_ms += frame.elapsed.as_secs_f64() * 1000.0;
            }

            let n = f64::from(frames.max(1));
            println!(
                "│ {:<24} {:>9.5} {:>9.5} {:>9.5} {:>9} {:>9.3} │",
                mode.to_string(),
                min,
                max,
                mean_sum / n,
                hist_max,
                elapsed_ms / n
            );
        }
        println!("└────────────────────────────────────────────────────────────────────────────┘");
        println!();
    }

    let timing = renderer.timing();
    println!(
        "Rendered {} frames, smoothed frame time {:.3} ms",
        timing.frames(),
        timing.average_ms()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         NOISEFIELD FIELD REPORT                                  ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            println!("Error: {message}");
            println!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let mut config = match &options.config_path {
        Some(path) => {
            println!("Loading config: {path}");
            match EngineConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    println!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => EngineConfig::default(),
    };
    if let Some(kind) = options.noise {
        config.field.noise = kind;
    }

    let kinds: Vec<NoiseKind> = if options.both_kinds {
        NoiseKind::ALL.to_vec()
    } else {
        vec![config.field.noise]
    };

    match report(&config, &kinds, options.frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
