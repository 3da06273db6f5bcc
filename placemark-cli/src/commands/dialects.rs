//! `placemark dialects` - list supported map link formats.

use std::io::{self, Write};

use placemark::extract::Dialect;

use crate::error::CliError;

/// Run the dialects command.
pub fn run() -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out).map_err(CliError::Output)
}

fn write_table<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Supported Map Links (checked in this order)")?;
    writeln!(out, "===========================================")?;
    writeln!(out)?;
    writeln!(out, "  #  {:<12} {:<12} {}", "NAME", "SERVICE", "FORMAT")?;

    for (i, dialect) in Dialect::ALL.iter().enumerate() {
        writeln!(
            out,
            "  {}  {:<12} {:<12} {}",
            i + 1,
            dialect.name(),
            dialect.service(),
            dialect.format()
        )?;
    }
    Ok(())
}
