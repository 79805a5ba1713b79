// SPDX-License-Identifier: MIT
//
// tinter — convert, validate and theme colors from the command line.
//
// This is the binary that wires the two library crates together:
//
//   tinter-color → model registry, validation, conversion
//   tinter-theme → contrast, gradient ramp, theme derivation, Surface
//
// Each subcommand follows the same path:
//
//   args → RawInput → validate → ColorValue → library call → text | JSON
//
// The `theme` subcommand additionally applies the derived theme to a
// TerminalSurface, which renders the declarations with color swatches.

mod config;
mod terminal;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tinter_color::{
    ColorError, ColorModel, ColorValue, RawInput, convert, is_hex, parse_rgb, validate,
};
use tinter_theme::{ContrastInput, calculate_color, calculate_contrast};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, OutputFormat};
use crate::terminal::TerminalSurface;

/// Convert, validate and theme colors across hex, RGB, HSL and CMYK.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file.
    #[arg(long, env = "TINTER_CONFIG", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a color in all four models.
    Convert {
        #[arg(value_parser = parse_model)]
        model: ColorModel,
        /// Hex digits, or one number per channel (commas allowed).
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Check a value against a model's domain. Exits 1 when invalid.
    Validate {
        #[arg(value_parser = parse_model)]
        model: ColorModel,
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Grade a foreground/background pair against WCAG thresholds.
    Contrast {
        /// Hex digits or `rgb(r, g, b)`.
        foreground: String,
        /// Hex digits or `rgb(r, g, b)`.
        background: String,
    },

    /// Derive a theme and print its style variables.
    Theme {
        #[arg(value_parser = parse_model)]
        model: ColorModel,
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<String>,
        /// Transition directive to tag the theme with.
        #[arg(long)]
        transition: Option<String>,
        /// Don't draw color swatches.
        #[arg(long)]
        no_preview: bool,
    },
}

fn parse_model(s: &str) -> Result<ColorModel, ColorError> {
    s.parse()
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    debug!(?config, "loaded configuration");

    match cli.command {
        Command::Convert { model, values } => {
            let value = parse_value(model, &values)?;
            let set = convert(&value);
            match config.format {
                OutputFormat::Json => print_json(&set)?,
                OutputFormat::Text => {
                    for model in ColorModel::ALL {
                        println!("{:<5} {}", model, set.value(model));
                    }
                }
            }
        }

        Command::Validate { model, values } => {
            let raw = raw_input(model, &values);
            let valid = validate(model, &raw);
            info!(%model, %raw, valid, "validated input");
            match config.format {
                OutputFormat::Json => print_json(&ValidateReport { model, valid })?,
                OutputFormat::Text => println!("{}", if valid { "valid" } else { "invalid" }),
            }
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Contrast {
            foreground,
            background,
        } => {
            let levels = calculate_contrast(contrast_side(&foreground)?, contrast_side(&background)?);
            match config.format {
                OutputFormat::Json => print_json(&levels)?,
                OutputFormat::Text => {
                    println!("ratio       {:.2}:1", levels.conventional_ratio());
                    println!("aa_lvl_lg   {}", levels.aa_lvl_lg);
                    println!("aa_lvl_sm   {}", levels.aa_lvl_sm);
                    println!("aaa_lvl_lg  {}", levels.aaa_lvl_lg);
                    println!("aaa_lvl_sm  {}", levels.aaa_lvl_sm);
                }
            }
        }

        Command::Theme {
            model,
            values,
            transition,
            no_preview,
        } => {
            let value = parse_value(model, &values)?;
            let transition = transition.or(config.transition);
            let mut surface = TerminalSurface::new(config.preview && !no_preview);
            let theme = calculate_color(&mut surface, &value, transition.as_deref());
            match config.format {
                OutputFormat::Json => print_json(&theme)?,
                OutputFormat::Text => surface
                    .render(&mut io::stdout().lock())
                    .context("Failed to write theme to stdout")?,
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct ValidateReport {
    model: ColorModel,
    valid: bool,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Turn CLI words into raw input for `model`.
///
/// Words may be split further on commas, so `51,102,153` and `51 102 153`
/// are the same. A single hex word may carry a leading `#`.
fn raw_input(model: ColorModel, values: &[String]) -> RawInput {
    let words: Vec<&str> = values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    match (model, words.as_slice()) {
        (ColorModel::Hex, [word]) => RawInput::from(word.strip_prefix('#').unwrap_or(word)),
        _ => RawInput::from_words(&words),
    }
}

fn parse_value(model: ColorModel, values: &[String]) -> Result<ColorValue> {
    let raw = raw_input(model, values);
    Ok(ColorValue::from_raw(model, &raw)?)
}

fn contrast_side(arg: &str) -> Result<ContrastInput> {
    let digits = arg.strip_prefix('#').unwrap_or(arg);
    if is_hex(digits) {
        return Ok(ContrastInput::Hex(digits.to_string()));
    }
    match parse_rgb(arg) {
        Some(rgb) if validate(ColorModel::Rgb, &RawInput::from(rgb)) => Ok(ContrastInput::Rgb(rgb)),
        _ => bail!("expected six hex digits or rgb(r, g, b), got {arg:?}"),
    }
}
