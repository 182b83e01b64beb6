// SPDX-License-Identifier: MIT
//
// Command-line options.
//
// A hand-rolled parser over `std::env::args`: the surface is small enough
// that a walk over the argument list reads better than a framework.
//
//   tonal [OPTIONS] <COLOR>
//
//   -s, --secondary <COLOR>   secondary color (gradients, exports)
//   -f, --format <FMT>        swatch | css | css-rgb | scss | tailwind |
//                             tailwind-hsl | tailwind-oklch | svg | json
//   -n, --name <NAME>         variable prefix for exports
//       --steps <N>           gradient samples for the scale (default 9)
//       --random [SEED]       use a pseudo-random base color
//       --no-color            plain swatch output
//   -h, --help                print usage
//   -V, --version             print version
//
// Long options also accept the `--name=value` form.

use std::fmt;
use std::io;
use std::str::FromStr;

use thiserror::Error;
use tonal_color::{Color, ParseColorError, parse_color};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Colored terminal swatches of the complete palette.
    #[default]
    Swatch,
    CssHex,
    CssRgb,
    Scss,
    TailwindHex,
    TailwindHsl,
    TailwindOklch,
    Svg,
    Json,
}

impl Format {
    pub const ALL: [Self; 9] = [
        Self::Swatch,
        Self::CssHex,
        Self::CssRgb,
        Self::Scss,
        Self::TailwindHex,
        Self::TailwindHsl,
        Self::TailwindOklch,
        Self::Svg,
        Self::Json,
    ];

    /// The name accepted by `--format`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Swatch => "swatch",
            Self::CssHex => "css",
            Self::CssRgb => "css-rgb",
            Self::Scss => "scss",
            Self::TailwindHex => "tailwind",
            Self::TailwindHsl => "tailwind-hsl",
            Self::TailwindOklch => "tailwind-oklch",
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| CliError::UnknownFormat(s.to_owned()))
    }
}

/// Where the base color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    Given(Color),
    /// `--random`, optionally with a fixed seed.
    Random(Option<u32>),
}

/// Fully parsed options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub base: BaseSource,
    pub secondary: Option<Color>,
    pub format: Format,
    pub name: Option<String>,
    pub steps: usize,
    pub no_color: bool,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliOptions),
    Help,
    Version,
}

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing <COLOR> argument (try --help)")]
    MissingColor,
    #[error("option {0} requires a value")]
    MissingValue(String),
    #[error("unknown option {0}")]
    UnknownOption(String),
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
    #[error("unknown format {0:?} (expected one of: {list})", list = format_list())]
    UnknownFormat(String),
    #[error("invalid value {value:?} for {option}: expected {expected}")]
    InvalidNumber {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize palette: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status: 2 for command-line misuse, 1 for everything else.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingColor
            | Self::MissingValue(_)
            | Self::UnknownOption(_)
            | Self::UnexpectedArgument(_)
            | Self::UnknownFormat(_)
            | Self::InvalidNumber { .. } => 2,
            Self::InvalidColor(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

fn format_list() -> String {
    Format::ALL.map(Format::name).join(", ")
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: tonal [OPTIONS] <COLOR>

Derive a tonal scale, harmonies, semantic roles and accessibility metrics
from one color. COLOR may be hex (#f6f0c2), rgb(), hsl() or a CSS name.

Options:
  -s, --secondary <COLOR>  Secondary color for gradients and exports
  -f, --format <FMT>       swatch, css, css-rgb, scss, tailwind, tailwind-hsl,
                           tailwind-oklch, svg or json [default: swatch]
  -n, --name <NAME>        Variable prefix for exports [default: nearest CSS name]
      --steps <N>          Gradient samples for the scale [default: 9]
      --random [SEED]      Use a pseudo-random base color
      --no-color           Print swatches without ANSI colors
  -h, --help               Print help
  -V, --version            Print version

Environment:
  TONAL_LOG   log filter (e.g. debug, tonal_engine=trace) [default: warn]
  NO_COLOR    same as --no-color when set
";

/// Parse arguments (without the program name).
///
/// # Errors
///
/// Returns a usage error for unknown or malformed options and
/// [`CliError::InvalidColor`] when a color does not parse.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).peekable();

    let mut color: Option<String> = None;
    let mut secondary: Option<String> = None;
    let mut format = Format::default();
    let mut name = None;
    let mut steps = tonal_engine::scale::DEFAULT_STEPS;
    let mut random: Option<Option<u32>> = None;
    let mut no_color = false;

    while let Some(arg) = args.next() {
        let (flag, inline) = split_inline(&arg);
        let inline = inline.map(str::to_owned);
        let flag = flag.to_owned();

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-s" | "--secondary" => secondary = Some(take_value(&flag, inline, &mut args)?),
            "-f" | "--format" => format = take_value(&flag, inline, &mut args)?.parse()?,
            "-n" | "--name" => name = Some(take_value(&flag, inline, &mut args)?),
            "--steps" => {
                let raw = take_value(&flag, inline, &mut args)?;
                steps = raw.parse().map_err(|_| CliError::InvalidNumber {
                    option: "--steps",
                    value: raw,
                    expected: "a non-negative integer",
                })?;
            }
            "--random" => {
                // The seed is optional: only consume the next argument when
                // it is a number.
                let raw = inline.or_else(|| args.next_if(|next| next.parse::<u32>().is_ok()));
                random = Some(raw.as_deref().map(parse_seed).transpose()?);
            }
            "--no-color" => no_color = true,
            "--" => {
                if let Some(rest) = args.next() {
                    set_positional(&mut color, rest)?;
                }
            }
            f if f.starts_with('-') && f.len() > 1 && !looks_numeric(f) => {
                return Err(CliError::UnknownOption(f.to_owned()));
            }
            _ => set_positional(&mut color, arg)?,
        }
    }

    let base = match (random, color) {
        (Some(seed), None) => BaseSource::Random(seed),
        (Some(_), Some(extra)) => return Err(CliError::UnexpectedArgument(extra)),
        (None, Some(input)) => BaseSource::Given(parse_color(&input)?),
        (None, None) => return Err(CliError::MissingColor),
    };
    let secondary = secondary.as_deref().map(parse_color).transpose()?;

    Ok(Command::Run(CliOptions {
        base,
        secondary,
        format,
        name,
        steps,
        no_color,
    }))
}

/// Split `--flag=value` into its parts. Short flags never carry inline values.
fn split_inline(arg: &str) -> (&str, Option<&str>) {
    if arg.starts_with("--") {
        if let Some((flag, value)) = arg.split_once('=') {
            return (flag, Some(value));
        }
    }
    (arg, None)
}

fn take_value(
    flag: &str,
    inline: Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, CliError> {
    inline
        .or_else(|| args.next())
        .ok_or_else(|| CliError::MissingValue(flag.to_owned()))
}

fn parse_seed(raw: &str) -> Result<u32, CliError> {
    raw.parse().map_err(|_| CliError::InvalidNumber {
        option: "--random",
        value: raw.to_owned(),
        expected: "a 32-bit unsigned seed",
    })
}

fn looks_numeric(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

fn set_positional(slot: &mut Option<String>, arg: String) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(CliError::UnexpectedArgument(arg));
    }
    *slot = Some(arg);
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
