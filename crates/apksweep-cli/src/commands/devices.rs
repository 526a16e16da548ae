//! Devices command implementation.

use crate::cli::DevicesArgs;
use crate::error::add_sweep_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use apksweep_core::AdbTransport;

pub fn execute(args: &DevicesArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let adb = AdbTransport::new(&args.adb_path);
    add_sweep_context(adb.probe())?;
    let devices = add_sweep_context(adb.devices())?;
    formatter.format_device_list(&devices)?;
    Ok(())
}
