//! XForm Maker (Kommandozeile).
//!
//! Liest Transformationen aus einer JSON-Lines-Datei und gibt je Transformation
//! den interpolierten Pfad als SVG-Pfaddaten, CSS-Keyframes oder Punktliste aus.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use xform_maker::jsonl::parse_xforms_jsonl;
use xform_maker::{InterpolationMode, XformOptions, try_build_preview};

const USAGE: &str = "USAGE:
  xform-maker <datei.jsonl> [--mode linear|passthrough|gravity|approx]
              [--format svg|css|points] [--config <optionen.toml>]";

/// Ausgabeformat der Kommandozeile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Css,
    Points,
}

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    mode: Option<InterpolationMode>,
    format: OutputFormat,
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        eprintln!("xform-maker: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    log::info!("XForm Maker v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.clone().unwrap_or_else(XformOptions::config_path);
    let options = XformOptions::load_from_file(&config_path);

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Datei '{}' konnte nicht gelesen werden", args.input.display()))?;
    let xforms = parse_xforms_jsonl(&content)?;
    log::info!("{} Transformationen geladen", xforms.len());

    for xform in &xforms {
        let Some(preview) = try_build_preview(xform, &options, args.mode) else {
            continue;
        };
        match args.format {
            OutputFormat::Svg => println!("{}\t{}", xform.id, preview.svg_path),
            OutputFormat::Css => print!("{}", preview.css),
            OutputFormat::Points => {
                println!("# {} ({}, {})", xform.name, xform.id, preview.mode);
                for p in &preview.path {
                    println!("{}\t{}", p.x, p.y);
                }
            }
        }
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut input = None;
    let mut mode = None;
    let mut format = OutputFormat::Svg;
    let mut config = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" => {
                let tag = args.next().context("--mode erwartet einen Wert")?;
                mode = Some(InterpolationMode::from_tag_lenient(&tag));
            }
            "--format" => {
                format = match args.next().context("--format erwartet einen Wert")?.as_str() {
                    "svg" => OutputFormat::Svg,
                    "css" => OutputFormat::Css,
                    "points" => OutputFormat::Points,
                    other => bail!("Unbekanntes Format '{}'\n{}", other, USAGE),
                };
            }
            "--config" => {
                config = Some(PathBuf::from(
                    args.next().context("--config erwartet einen Pfad")?,
                ));
            }
            "-h" | "--help" => bail!("{}", USAGE),
            other if other.starts_with("--") => bail!("Unbekannte Option '{}'\n{}", other, USAGE),
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    bail!("Nur eine Eingabedatei erlaubt\n{}", USAGE);
                }
            }
        }
    }

    let input = input.with_context(|| format!("Eingabedatei fehlt\n{}", USAGE))?;
    Ok(CliArgs {
        input,
        mode,
        format,
        config,
    })
}
