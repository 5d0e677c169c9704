//! JSON export

use std::io::Write;

use super::GuideExport;
use crate::error::GuideResult;
use crate::models::Catalog;

/// Write the guide as JSON
pub fn export_guide_json<W: Write>(
    catalog: &Catalog,
    writer: &mut W,
    pretty: bool,
) -> GuideResult<()> {
    let export = GuideExport::from_catalog(catalog);
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer)?;
    Ok(())
}
