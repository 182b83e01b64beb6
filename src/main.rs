// SPDX-License-Identifier: MIT
//
// tonal: derive a whole palette from a single color.
//
// This is the command-line front end that wires the crates together:
//
//   tonal-color  → color model, conversions, CSS parsing
//   tonal-engine → scale, harmonies, semantics, accessibility, gradients
//
// One run flows straight through:
//
//   args → options::parse_args → base color (given or random)
//        → generate_complete_palette → swatch or export → stdout
//
// Diagnostics go to stderr through `tracing`, filtered by `TONAL_LOG`.

mod ansi;
mod export;
mod options;
mod random;
mod swatch;
mod terminal;

use std::env;
use std::io::{self, Write};
use std::process;

use tonal_color::Color;
use tonal_engine::scale::DEFAULT_STEPS;
use tonal_engine::{closest_named_color, generate_complete_palette, generate_scale_with_steps};
use tracing_subscriber::EnvFilter;

use crate::options::{BaseSource, CliError, CliOptions, Command, Format, USAGE};

/// Send log events to stderr so they never mix with exported text.
fn init_logging() {
    let filter = EnvFilter::try_from_env("TONAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the base color, seeding from the clock when `--random` has no seed.
fn base_color(source: BaseSource) -> Color {
    match source {
        BaseSource::Given(c) => c,
        BaseSource::Random(seed) => {
            let seed = seed.unwrap_or_else(random::clock_seed);
            let c = random::random_color(seed);
            tracing::info!(seed, color = %c, "random base color");
            c
        }
    }
}

/// Generate and print one palette.
fn run(opts: &CliOptions, out: &mut impl Write, color: bool) -> Result<(), CliError> {
    let base = base_color(opts.base);
    let mut palette = generate_complete_palette(base, opts.secondary);
    if opts.steps != DEFAULT_STEPS {
        palette.scale = generate_scale_with_steps(base, opts.steps);
    }

    if opts.format == Format::Swatch {
        swatch::render(out, &palette, color)?;
        return Ok(());
    }

    let name = opts
        .name
        .as_deref()
        .map_or_else(|| export::export_name(closest_named_color(base).0), export::export_name);
    let text = export::render(opts.format, &palette, &name)?;
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn main() {
    init_logging();

    let result = options::parse_args(env::args().skip(1)).and_then(|command| {
        let mut stdout = io::stdout().lock();
        match command {
            Command::Help => stdout.write_all(USAGE.as_bytes()).map_err(CliError::from),
            Command::Version => {
                writeln!(stdout, "tonal {}", env!("CARGO_PKG_VERSION")).map_err(CliError::from)
            }
            Command::Run(opts) => {
                let color = terminal::color_enabled(opts.no_color);
                run(&opts, &mut stdout, color)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("tonal: {e}");
        process::exit(e.exit_code());
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
