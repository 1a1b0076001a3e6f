use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;

use crate::client::default_preference_file_path;
use crate::client::params::{ParameterRecord, SystemChoice, resolve};
use crate::client::script::build_job_script;
use crate::common::cli::JobCreateOpts;
use crate::common::env::Environment;
use crate::common::error::JobGenError;
use crate::common::manager::info::ManagerType;
use crate::common::utils::fs::{confirm_overwrite, ensure_directory};

/// A single script that should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTarget {
    pub manager: ManagerType,
    pub path: PathBuf,
}

/// Resolves the parameters of the invocation and writes the requested job script(s).
pub fn command_create<R: BufRead, W: Write>(
    opts: JobCreateOpts,
    environment: &Environment,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let preference_path = opts.preferences.clone().or_else(default_preference_file_path);
    let record = resolve(
        preference_path.as_deref(),
        opts.into_overrides(),
        environment,
    )
    .context("Cannot resolve job parameters")?;
    create_job_scripts(&record, input, output)?;
    Ok(())
}

/// Returns the paths that will be created for the given parameters.
///
/// A single system produces `<outdir>/<job>`, generating scripts for both systems
/// produces `<outdir>/<job>.slurm` and `<outdir>/<job>.pbs`.
pub fn job_targets(record: &ParameterRecord) -> Vec<JobTarget> {
    let managers = record.system().managers();
    managers
        .iter()
        .map(|&manager| {
            let filename = match record.system() {
                SystemChoice::Both => format!("{}.{}", record.job(), manager.extension()),
                SystemChoice::Slurm | SystemChoice::Pbs => record.job().to_string(),
            };
            JobTarget {
                manager,
                path: record.outdir().join(filename),
            }
        })
        .collect()
}

/// Writes one job script per requested manager into the output directory.
///
/// Existing files are only replaced if overwriting was forced or confirmed by the user.
/// All confirmations are gathered before anything is written, so declining leaves
/// every file untouched.
pub fn create_job_scripts<R: BufRead, W: Write>(
    record: &ParameterRecord,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Vec<JobTarget>> {
    let outdir = record.outdir();
    if ensure_directory(outdir)
        .with_context(|| format!("Cannot create output directory {}", outdir.display()))?
    {
        writeln!(output, "Output directory has been created: {}", outdir.display())?;
    }

    let targets = job_targets(record);
    if !record.overwrite() {
        for target in targets.iter().filter(|target| target.path.is_file()) {
            if !confirm_overwrite(&target.path, input, output)? {
                return Err(JobGenError::OverwriteDeclined.into());
            }
        }
    }

    for target in &targets {
        let script = build_job_script(target.manager, record);
        std::fs::write(&target.path, script)
            .with_context(|| format!("Cannot write job script into {}", target.path.display()))?;
        log::debug!(
            "{} job script written into {}",
            target.manager,
            target.path.display()
        );
        writeln!(output, "{} job has been created!", target.manager)?;
    }
    Ok(targets)
}
