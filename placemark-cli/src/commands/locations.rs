//! `placemark locations` - summarize an exported locations file.

use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use placemark::extract::{CoordinateExtractor, Extraction};
use placemark::location::{load_locations_from_path, ProcessedLocation};
use placemark::resource::ResourceKind;

use super::common::{Context, PolicyArg};
use crate::error::CliError;

/// Arguments for the locations command.
#[derive(Debug, Args)]
pub struct LocationsArgs {
    /// JSON file holding an array of location rows
    pub file: PathBuf,

    /// Override the configured match policy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
}

/// Run the locations command.
pub fn run(args: LocationsArgs, ctx: &Context) -> Result<(), CliError> {
    let config = ctx.load_config()?;
    let extractor = ctx.extractor(&config, args.policy);

    let locations: Vec<ProcessedLocation> = load_locations_from_path(&args.file)
        .map_err(|error| CliError::Locations {
            path: args.file.clone(),
            error,
        })?
        .into_iter()
        .map(ProcessedLocation::from)
        .collect();

    tracing::debug!(count = locations.len(), file = %args.file.display(), "loaded locations");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_locations(&mut out, &locations, &extractor).map_err(CliError::Output)
}

fn write_locations<W: Write>(
    out: &mut W,
    locations: &[ProcessedLocation],
    extractor: &CoordinateExtractor,
) -> io::Result<()> {
    let extractions: Vec<Extraction> = locations
        .iter()
        .map(|l| l.coordinates(extractor))
        .collect();
    let pinned = extractions.iter().filter(|e| e.is_match()).count();
    writeln!(
        out,
        "{} locations, {} with coordinates",
        locations.len(),
        pinned
    )?;

    for (location, extraction) in locations.iter().zip(extractions) {
        writeln!(out)?;
        writeln!(out, "{}", location.name)?;
        writeln!(out, "  {}: {}", ResourceKind::Location.title(), location.location)?;
        if !location.category_name.is_empty() {
            writeln!(out, "  Category: {}", location.category_name)?;
        }
        if location.visited {
            writeln!(out, "  {}", ResourceKind::Visited.title())?;
        }

        match extraction {
            Extraction::Match {
                coordinate,
                dialect,
            } => writeln!(out, "  Coordinates: {} ({})", coordinate, dialect.service())?,
            Extraction::NoMatch => writeln!(out, "  Coordinates: (none)")?,
        }

        for (kind, url) in location.resources() {
            writeln!(out, "  {}: {}", kind.title(), url)?;
        }
    }
    Ok(())
}
