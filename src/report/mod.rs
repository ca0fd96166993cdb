//! Family report output

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

use crate::cluster::Family;

/// Write the family report: each family contributes its label line, one line
/// per member genome, then a blank separator line.
pub fn write_families(path: &str, families: &[Family]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create report {}", path))?;
    let mut out = BufWriter::new(file);
    render(&mut out, families)?;
    out.flush()?;

    log::info!("Wrote {} families to {}", families.len(), path);
    Ok(())
}

/// Render the report into any writer.
pub fn render(out: &mut impl Write, families: &[Family]) -> Result<()> {
    for family in families {
        writeln!(out, "{}", family.label())?;
        for member in &family.members {
            writeln!(out, "{}", member)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
