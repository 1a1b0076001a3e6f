use std::path::PathBuf;

use clap::Parser;

use crate::client::params::{
    JobName, MailType, ParameterOverrides, Partition, SystemChoice,
};

/// Validates the job name already during argument parsing, so that an invalid
/// name is reported together with the usage.
fn parse_job_name(value: &str) -> crate::Result<String> {
    JobName::new(value)?;
    Ok(value.to_string())
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ColorPolicy {
    /// Use colors if the stderr is detected to be a terminal.
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

// Common CLI options
#[derive(Parser)]
pub struct CommonOpts {
    /// Sets console color policy
    #[arg(
        long,
        default_value_t = ColorPolicy::Auto,
        value_enum,
        help_heading("GLOBAL OPTIONS"),
        hide_short_help(true)
    )]
    pub colors: ColorPolicy,

    /// Enables more detailed log output
    #[arg(
        long,
        env = "NEW_JOB_DEBUG",
        help_heading("GLOBAL OPTIONS"),
        hide_short_help(true)
    )]
    pub debug: bool,
}

#[derive(Parser)]
pub struct JobCreateOpts {
    /// Name of the created job file (hyphens are replaced with underscores)
    #[arg(value_parser = parse_job_name)]
    pub job: String,

    /// The system you would like to create the job for [default: slurm]
    #[arg(short, long, value_enum)]
    pub system: Option<SystemChoice>,

    /// Name of the job and of its output file [default: new_job]
    #[arg(short, long)]
    pub name: Option<String>,

    /// The group (account) to assign the job to [default: barberan]
    #[arg(short, long)]
    pub group: Option<String>,

    /// Events that trigger a notification e-mail [default: ALL]
    ///
    /// The short form is `-r` (older versions used `-re`).
    #[arg(
        short = 'r',
        long = "request_email",
        visible_alias = "request-email",
        value_enum
    )]
    pub request_email: Option<MailType>,

    /// E-mail address for notifications [default: $USER@$HOSTNAME]
    #[arg(short, long)]
    pub email: Option<String>,

    /// The partition to submit the job into [default: standard]
    #[arg(short, long, value_enum)]
    pub partition: Option<Partition>,

    /// The number of tasks (cores) used by the job [default: 1]
    ///
    /// There is no short form (older versions used `-nt`).
    #[arg(long)]
    pub ntasks: Option<String>,

    /// The number of nodes used by the job [default: 1]
    ///
    /// There is no short form (older versions used `-nn`).
    #[arg(long)]
    pub nodes: Option<String>,

    /// Memory required by the job [default: 1gb]
    #[arg(short, long)]
    pub memory: Option<String>,

    /// Wall-clock time required by the job (hhh:mm:ss) [default: 1:00:00]
    #[arg(short, long)]
    pub time: Option<String>,

    /// Directory where the job file will be created [default: jobs]
    #[arg(short = 'd', long, value_hint = clap::ValueHint::DirPath)]
    pub outdir: Option<PathBuf>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub force: bool,

    /// File with default values of the options above, one `key=value` per line
    /// [default: ~/.new_job, or ~/.new_job.py if only that one exists]
    #[arg(long, value_hint = clap::ValueHint::FilePath, env = "NEW_JOB_PREFERENCES")]
    pub preferences: Option<PathBuf>,
}

impl JobCreateOpts {
    pub fn into_overrides(self) -> ParameterOverrides {
        ParameterOverrides {
            job: self.job,
            system: self.system,
            name: self.name,
            group: self.group,
            mail_type: self.request_email,
            email: self.email,
            partition: self.partition,
            ntasks: self.ntasks,
            nodes: self.nodes,
            memory: self.memory,
            time: self.time,
            outdir: self.outdir,
            force: self.force,
        }
    }
}

// Root CLI options
#[derive(Parser)]
#[command(author, about, version(crate::JOBGEN_VERSION), help_expected(true))]
pub struct RootOptions {
    #[clap(flatten)]
    pub common: CommonOpts,

    #[clap(flatten)]
    pub job: JobCreateOpts,
}
