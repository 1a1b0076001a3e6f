use std::fmt::{Display, Formatter};

/// Scheduler dialect of a generated job script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManagerType {
    Pbs,
    Slurm,
}

impl ManagerType {
    /// Token that follows `#` on every resource request line.
    pub fn directive_prefix(&self) -> &'static str {
        match self {
            ManagerType::Pbs => "PBS",
            ManagerType::Slurm => "SBATCH",
        }
    }

    /// File extension used when scripts for several managers are generated at once.
    pub fn extension(&self) -> &'static str {
        match self {
            ManagerType::Pbs => "pbs",
            ManagerType::Slurm => "slurm",
        }
    }
}

impl Display for ManagerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerType::Pbs => f.write_str("PBS"),
            ManagerType::Slurm => f.write_str("SLURM"),
        }
    }
}
