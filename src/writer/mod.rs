//! Filesystem side of a conversion.
pub mod links;
pub mod unit;

use crate::error::Result;
use crate::model::EmitReport;
use crate::processor::ProcessedUnit;

/// Write the unit file, then its symlinks. Only the unit file can fail;
/// link problems end up in the report.
pub fn emit(processed: &ProcessedUnit) -> Result<EmitReport> {
    unit::emit(&processed.unit_path, &processed.text)?;
    let links = links::emit(&processed.name, &processed.links);

    Ok(EmitReport {
        service: processed.name.clone(),
        unit_path: processed.unit_path.clone(),
        links,
    })
}
