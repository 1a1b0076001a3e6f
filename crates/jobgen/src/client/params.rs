use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::common::env::Environment;
use crate::common::error::JobGenError;
use crate::common::manager::info::ManagerType;
use crate::common::preferences::PreferenceMap;

pub const DEFAULT_JOB_DISPLAY_NAME: &str = "new_job";
pub const DEFAULT_GROUP: &str = "barberan";
pub const DEFAULT_NTASKS: &str = "1";
pub const DEFAULT_NODES: &str = "1";
pub const DEFAULT_MEMORY: &str = "1gb";
pub const DEFAULT_TIME: &str = "1:00:00";
pub const DEFAULT_OUTPUT_DIR: &str = "jobs";

const DEFAULT_USER: &str = "Anonymous";
const DEFAULT_MAIL_DOMAIN: &str = "email.arizona.edu";

/// Preference keys that are understood by the resolver.
const PREFERENCE_KEYS: &[&str] = &[
    "system",
    "name",
    "group",
    "request_email",
    "email",
    "partition",
    "ntasks",
    "nodes",
    "memory",
    "time",
    "outdir",
];

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SystemChoice {
    /// Slurm (`#SBATCH` directives)
    #[default]
    Slurm,
    /// PBS (`#PBS` directives)
    Pbs,
    /// Create one script for each supported system
    Both,
}

impl SystemChoice {
    pub fn managers(&self) -> &'static [ManagerType] {
        match self {
            SystemChoice::Slurm => &[ManagerType::Slurm],
            SystemChoice::Pbs => &[ManagerType::Pbs],
            SystemChoice::Both => &[ManagerType::Slurm, ManagerType::Pbs],
        }
    }
}

/// Events that trigger an e-mail notification from the scheduler.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MailType {
    /// Mail when the job starts
    #[value(name = "BEGIN")]
    Begin,
    /// Mail when the job ends
    #[value(name = "END")]
    End,
    /// Mail when the job fails
    #[value(name = "FAIL")]
    Fail,
    /// Mail on every event
    #[default]
    #[value(name = "ALL")]
    All,
}

impl Display for MailType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MailType::Begin => "BEGIN",
            MailType::End => "END",
            MailType::Fail => "FAIL",
            MailType::All => "ALL",
        })
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Partition {
    /// Consumes the allocation of the group
    #[default]
    Standard,
    /// Free, but jobs can be preempted
    Windfall,
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Partition::Standard => "standard",
            Partition::Windfall => "windfall",
        })
    }
}

/// Name of the generated file.
///
/// Surrounding whitespace is removed and hyphens are replaced with underscores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobName(String);

impl JobName {
    pub fn new(value: &str) -> crate::Result<Self> {
        let trimmed = value.trim();
        if trimmed.chars().all(|c| c == '-') {
            return Err(JobGenError::InvalidJobName(value.to_string()));
        }
        Ok(Self(trimmed.replace('-', "_")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for JobName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values explicitly passed by the user. `None` means "not specified".
#[derive(Clone, Debug, Default)]
pub struct ParameterOverrides {
    pub job: String,
    pub system: Option<SystemChoice>,
    pub name: Option<String>,
    pub group: Option<String>,
    pub mail_type: Option<MailType>,
    pub email: Option<String>,
    pub partition: Option<Partition>,
    pub ntasks: Option<String>,
    pub nodes: Option<String>,
    pub memory: Option<String>,
    pub time: Option<String>,
    pub outdir: Option<PathBuf>,
    pub force: bool,
}

/// Fully resolved parameters of a single invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterRecord {
    job: JobName,
    system: SystemChoice,
    name: String,
    group: String,
    mail_type: MailType,
    email: String,
    partition: Partition,
    ntasks: String,
    nodes: String,
    memory: String,
    time: String,
    outdir: PathBuf,
    overwrite: bool,
}

impl ParameterRecord {
    pub fn job(&self) -> &JobName {
        &self.job
    }
    pub fn system(&self) -> SystemChoice {
        self.system
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn group(&self) -> &str {
        &self.group
    }
    pub fn mail_type(&self) -> MailType {
        self.mail_type
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn partition(&self) -> Partition {
        self.partition
    }
    pub fn ntasks(&self) -> &str {
        &self.ntasks
    }
    pub fn nodes(&self) -> &str {
        &self.nodes
    }
    pub fn memory(&self) -> &str {
        &self.memory
    }
    pub fn time(&self) -> &str {
        &self.time
    }
    pub fn outdir(&self) -> &Path {
        &self.outdir
    }
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

/// Loads the preference file (if there is one) and merges it with the user overrides.
pub fn resolve(
    preference_path: Option<&Path>,
    overrides: ParameterOverrides,
    environment: &Environment,
) -> crate::Result<ParameterRecord> {
    let preferences = match preference_path {
        Some(path) => PreferenceMap::load(path)?,
        None => PreferenceMap::default(),
    };
    resolve_with_preferences(&preferences, overrides, environment)
}

/// Resolves every parameter with the precedence
/// command line > preference file > built-in default.
pub fn resolve_with_preferences(
    preferences: &PreferenceMap,
    overrides: ParameterOverrides,
    environment: &Environment,
) -> crate::Result<ParameterRecord> {
    let job = JobName::new(&overrides.job)?;

    for key in preferences.keys() {
        if !PREFERENCE_KEYS.iter().any(|known| *known == key) {
            log::debug!("Ignoring unknown preference `{key}`");
        }
    }

    let record = ParameterRecord {
        job,
        system: pick("system", overrides.system, preferences, parse_choice)
            .unwrap_or_default(),
        name: pick("name", overrides.name, preferences, parse_string)
            .unwrap_or_else(|| DEFAULT_JOB_DISPLAY_NAME.to_string()),
        group: pick("group", overrides.group, preferences, parse_string)
            .unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        mail_type: pick("request_email", overrides.mail_type, preferences, parse_choice)
            .unwrap_or_default(),
        email: pick("email", overrides.email, preferences, parse_string)
            .unwrap_or_else(|| default_email(environment)),
        partition: pick("partition", overrides.partition, preferences, parse_choice)
            .unwrap_or_default(),
        ntasks: pick("ntasks", overrides.ntasks, preferences, parse_string)
            .unwrap_or_else(|| DEFAULT_NTASKS.to_string()),
        nodes: pick("nodes", overrides.nodes, preferences, parse_string)
            .unwrap_or_else(|| DEFAULT_NODES.to_string()),
        memory: pick("memory", overrides.memory, preferences, parse_string)
            .unwrap_or_else(|| DEFAULT_MEMORY.to_string()),
        time: pick("time", overrides.time, preferences, parse_string)
            .unwrap_or_else(|| DEFAULT_TIME.to_string()),
        outdir: pick("outdir", overrides.outdir, preferences, |v| {
            Ok(PathBuf::from(v))
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        overwrite: overrides.force,
    };
    log::debug!("Resolved parameters: {record:?}");
    Ok(record)
}

/// Returns the user value if present, otherwise a valid value from the preferences.
/// Invalid preference values are reported and skipped.
fn pick<T, F>(key: &str, value: Option<T>, preferences: &PreferenceMap, parse: F) -> Option<T>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    if value.is_some() {
        log::debug!("Parameter `{key}` set on the command line");
        return value;
    }
    let raw = preferences.get(key)?;
    match parse(raw) {
        Ok(value) => {
            log::debug!("Parameter `{key}` loaded from preferences");
            Some(value)
        }
        Err(error) => {
            log::warn!("Ignoring invalid preference `{key}={raw}`: {error}");
            None
        }
    }
}

fn parse_string(value: &str) -> Result<String, String> {
    Ok(value.to_string())
}

fn parse_choice<T: ValueEnum>(value: &str) -> Result<T, String> {
    T::from_str(value, false)
}

fn default_email(environment: &Environment) -> String {
    format!(
        "{}@{}",
        environment.user.as_deref().unwrap_or(DEFAULT_USER),
        environment.hostname.as_deref().unwrap_or(DEFAULT_MAIL_DOMAIN)
    )
}
