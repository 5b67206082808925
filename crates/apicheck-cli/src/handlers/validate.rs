//! Validation handler: load, check, report

use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use apicheck_schemas::{load_document, StructuralValidator};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Validate `document` and write the report
///
/// Loader failures propagate to the caller before anything is written.
/// Missing expectations are part of a successful report.
#[instrument(skip_all, fields(document = %document.display()))]
pub fn handle_validate(document: &Path, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", document.display()));
    info!("Starting validation process");

    let tree = {
        let _load_timer = Timer::new("document_loading");
        load_document(document)?
    };
    debug!("Document loaded");

    let validator = StructuralValidator::default();
    let report = {
        let _validation_timer = Timer::new("structural_validation");
        validator.validate(&tree)
    };

    info!(
        present = report.present_count(),
        missing = report.missing_count(),
        "Validation completed"
    );

    output.report(document, &report)
}
