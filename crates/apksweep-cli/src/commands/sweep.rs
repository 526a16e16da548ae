//! Sweep command implementation.

use crate::cli::SweepArgs;
use crate::error::add_sweep_context;
use crate::output::OutputFormatter;
use crate::progress::SweepProgress;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use apksweep_core::AdbTransport;
use apksweep_core::ExclusionList;
use apksweep_core::InspectorRegistry;
use apksweep_core::NoopObserver;
use apksweep_core::Pipeline;
use apksweep_core::StagingArea;
use apksweep_core::SweepConfig;
use apksweep_core::transport::DeviceTransport;
use console::Term;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn execute(
    args: &SweepArgs,
    formatter: &dyn OutputFormatter,
    quiet: bool,
    json: bool,
) -> Result<()> {
    // Resolve the inspector chain before any device interaction so a typo
    // in the selector cannot cost a round of staging.
    let registry = InspectorRegistry::with_builtins();
    let chain = add_sweep_context(registry.resolve(&args.inspectors))?;

    let exclusions = match &args.gracelist {
        Some(path) => ExclusionList::load(Some(path))
            .with_context(|| format!("failed to read gracelist {}", path.display()))?,
        None => ExclusionList::empty(),
    };

    let mut adb = AdbTransport::new(&args.adb_path);
    add_sweep_context(adb.probe())?;
    select_device(&mut adb, args.device.as_deref(), quiet)?;

    let (staging_root, _staging_guard) = prepare_staging(args)?;

    let packages = add_sweep_context(adb.list_packages())?;

    let config = SweepConfig {
        analyze_only: args.analyze_only,
        accessible_prefix: args.accessible_prefix.clone(),
    };
    let mut pipeline = Pipeline::new(
        &adb,
        chain,
        exclusions,
        StagingArea::new(staging_root),
        config,
    );

    let report = if SweepProgress::should_show(quiet, json) {
        let mut progress = SweepProgress::new(packages.len());
        let report = add_sweep_context(pipeline.run(&packages, &mut progress))?;
        progress.finish();
        report
    } else {
        add_sweep_context(pipeline.run(&packages, &mut NoopObserver))?
    };

    formatter.format_sweep_report(&report)?;

    Ok(())
}

/// Picks the target device: explicit serial, the only connected device, or
/// an interactive choice when several are attached.
fn select_device(adb: &mut AdbTransport, requested: Option<&str>, quiet: bool) -> Result<()> {
    if let Some(serial) = requested {
        adb.set_serial(serial);
        return Ok(());
    }

    let devices = add_sweep_context(adb.devices())?;
    match devices.as_slice() {
        [] => bail!(
            "No devices found.\n\
             HINT: Check the cable and that USB debugging is authorized (`adb devices`)."
        ),
        [serial] => {
            adb.set_serial(serial.clone());
            Ok(())
        }
        _ => {
            if !console::user_attended() {
                bail!(
                    "Multiple devices connected: {}\n\
                     HINT: Pass --device <SERIAL> to pick one.",
                    devices.join(", ")
                );
            }
            let serial = prompt_device_choice(&devices, quiet)?;
            adb.set_serial(serial);
            Ok(())
        }
    }
}

fn prompt_device_choice(devices: &[String], quiet: bool) -> Result<String> {
    let term = Term::stderr();
    if !quiet {
        term.write_line("Please select the target device (default = [0]):")?;
        for (index, serial) in devices.iter().enumerate() {
            term.write_line(&format!("[{index}]: {serial}"))?;
        }
    }
    loop {
        let line = term.read_line()?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(devices[0].clone());
        }
        match trimmed.parse::<usize>() {
            Ok(index) if index < devices.len() => return Ok(devices[index].clone()),
            Ok(_) => term.write_line("Invalid index!")?,
            Err(_) => term.write_line("Not a valid number!")?,
        }
    }
}

/// Sets up the staging directory.
///
/// Returns the root plus an optional guard whose drop removes a temporary
/// directory at exit. A user-supplied directory is created if missing and
/// never deleted; `--keep-staging` detaches the temporary one.
fn prepare_staging(args: &SweepArgs) -> Result<(PathBuf, Option<TempDir>)> {
    if let Some(dir) = &args.staging_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create staging directory {}", dir.display()))?;
        return Ok((dir.clone(), None));
    }

    let temp = TempDir::new().context("failed to create temporary staging directory")?;
    if args.keep_staging {
        Ok((temp.keep(), None))
    } else {
        Ok((temp.path().to_path_buf(), Some(temp)))
    }
}
