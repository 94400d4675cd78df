use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use args::parse_args;
use clap::builder::styling::AnsiColor;
use env_logger::Builder;
use gradix_core::{build_profile, Profile};
use log::{debug, info, warn};
use logging_timer::time;

mod args;
mod track_reader;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

#[time]
fn main() -> Result<()> {
    configure_logging();
    info!("Starting {PROGRAM_NAME}");

    let args = parse_args();
    debug!("{:?}", &args);

    if args.files.is_empty() {
        warn!("No track files specified, exiting");
        return Ok(());
    }

    let params = args.parameters();

    // Each file is an independent pipeline run; nothing is shared between
    // iterations.
    for f in &args.files {
        let track = track_reader::read_track_from_file(f)?;
        let profile = build_profile(&track, &params);
        print_stats(f, &profile);

        if args.chart {
            write_chart_file(&make_chart_filename(f), &profile)?;
        }
    }

    Ok(())
}

fn print_stats(file: &Path, profile: &Profile) {
    let stats = &profile.stats;
    println!("{:?}", file);
    println!("  Distance       {} km", stats.distance);
    println!("  Ascent         {} m", stats.elevation_gain);
    println!("  Descent        {} m", stats.elevation_loss);
    println!("  Max elevation  {} m", stats.max_elevation);
    println!("  Min elevation  {} m", stats.min_elevation);
    println!("  Chart points   {}", profile.chart_data.len());
}

fn make_chart_filename(p: &Path) -> PathBuf {
    let mut p = p.to_owned();
    p.set_extension("chart.json");
    p
}

fn write_chart_file(output_file: &Path, profile: &Profile) -> Result<()> {
    let file =
        File::create(output_file).with_context(|| format!("Could not create {:?}", output_file))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer(&mut w, &profile.chart_data)?;
    w.flush()?;
    info!(
        "Wrote {} chart points to {:?}",
        profile.chart_data.len(),
        output_file
    );
    Ok(())
}

/// Colourised env_logger output including the source location of the
/// logging statement.
fn configure_logging() {
    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let level_style = buf.default_level_style(record.level());
        let level_style = match record.level() {
            log::Level::Error => level_style.fg_color(Some(AnsiColor::Red.into())),
            log::Level::Warn => level_style.fg_color(Some(AnsiColor::Yellow.into())),
            log::Level::Info => level_style.fg_color(Some(AnsiColor::Green.into())),
            log::Level::Debug => level_style.fg_color(Some(AnsiColor::Blue.into())),
            log::Level::Trace => level_style.fg_color(Some(AnsiColor::Magenta.into())),
        };

        match (record.file(), record.line()) {
            (Some(file), Some(line)) => writeln!(
                buf,
                "[{} {level_style}{}{level_style:#} {}/{}] {}",
                buf.timestamp(),
                record.level(),
                file,
                line,
                record.args()
            ),
            _ => writeln!(
                buf,
                "[{} {level_style}{}{level_style:#}] {}",
                buf.timestamp(),
                record.level(),
                record.args()
            ),
        }
    });

    builder.init();
}
