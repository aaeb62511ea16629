use crate::detail::CountrySummary;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn neutralize(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(['=', '+', '-', '@']) {
        Cow::Owned(format!("'{}", cell))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Save country cards as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[CountrySummary], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.write_record(["code", "name", "population", "region", "capital", "flag_url"])?;
    for r in rows {
        wtr.write_record([
            neutralize(&r.code).as_ref(),
            neutralize(&r.name).as_ref(),
            neutralize(&r.population).as_ref(),
            neutralize(&r.region).as_ref(),
            neutralize(&r.capital).as_ref(),
            neutralize(&r.flag_url).as_ref(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save country cards as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[CountrySummary], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
