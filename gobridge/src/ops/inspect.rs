//! Inspect operation: extraction without generation.

use gobridge_parser::{Extractor, extract_package};

use super::{PackageError, package_dir};
use crate::{config::PackageSource, reports::InspectReport};

/// Execute the inspect operation.
pub fn inspect(source: &PackageSource) -> Result<InspectReport, PackageError> {
    let dir = package_dir(source)?;
    let declarations = extract_package(&dir, &Extractor::go())?;

    Ok(InspectReport {
        label: source.label(),
        declarations,
    })
}
