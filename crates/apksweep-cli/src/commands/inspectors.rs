//! Inspectors command implementation.

use crate::output::OutputFormatter;
use anyhow::Result;
use apksweep_core::InspectorRegistry;

pub fn execute(formatter: &dyn OutputFormatter) -> Result<()> {
    let registry = InspectorRegistry::with_builtins();
    formatter.format_inspector_list(&registry.descriptions())?;
    Ok(())
}
