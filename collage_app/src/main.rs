// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `collage`: builds a venue, loads media descriptions, replays a key script
//! and prints the resulting arrangement as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use collage_app::{CollageSession, Command, Config, MediaArg};
use collage_layout::LayoutKind;
use collage_scene::VenuePreset;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "collage", version, about = "Lay out media on a multi-display collage venue")]
struct Args {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Venue preset, overriding the configuration.
    #[arg(long, value_parser = parse_venue, value_name = "single|scr|tele_immersion|custom")]
    venue: Option<VenuePreset>,
    /// Startup layout strategy, overriding the configuration.
    #[arg(long, value_name = "STRATEGY")]
    layout: Option<LayoutKind>,
    /// Media to load, as WIDTHxHEIGHT[:PATH]. Repeatable.
    #[arg(long = "item", value_name = "WxH[:PATH]")]
    items: Vec<MediaArg>,
    /// Key script to replay after loading, e.g. `5a<left>s`.
    #[arg(long, value_name = "SCRIPT")]
    keys: Option<String>,
    /// Seed for the random strategy.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the default configuration and exit.
    #[arg(long)]
    print_default_config: bool,
}

fn parse_venue(value: &str) -> Result<VenuePreset, String> {
    match value.to_ascii_lowercase().replace('-', "_").as_str() {
        "single" => Ok(VenuePreset::Single),
        "scr" => Ok(VenuePreset::Scr),
        "tele_immersion" => Ok(VenuePreset::TeleImmersion),
        "custom" => Ok(VenuePreset::Custom),
        other => Err(format!(
            "unknown venue `{other}`, expected single, scr, tele_immersion or custom"
        )),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::default().to_toml()?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(preset) = args.venue {
        config.venue.preset = preset;
    }
    if let Some(kind) = args.layout {
        config.layout.strategy = kind;
    }
    if args.seed.is_some() {
        config.layout.random_seed = args.seed;
    }

    let mut session = CollageSession::from_config(&config).context("Failed to build the venue")?;
    session
        .load(args.items.into_iter().map(|MediaArg(spec)| spec))
        .context("Failed to lay out the loaded items")?;

    if let Some(script) = &args.keys {
        let commands = Command::parse_keys(script).context("Invalid key script")?;
        info!(count = commands.len(), "replaying key script");
        for command in commands {
            if let Err(err) = session.handle(command) {
                warn!(?command, error = %err, "command failed");
            }
        }
    }

    let report = serde_json::to_string_pretty(&session.report())
        .context("Failed to serialize the report")?;
    println!("{report}");
    Ok(())
}
