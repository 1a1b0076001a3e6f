use std::fmt::Write;

use crate::client::params::ParameterRecord;
use crate::common::manager::info::ManagerType;

const SECTION_SEPARATOR: &str = "# --------------------------------------------------";

/// Renders a job script with resource requests for the given `manager`.
///
/// The directives are the same for every manager, only their prefix differs.
/// The module and command sections are left empty for the user to fill in.
pub fn build_job_script(manager: ManagerType, record: &ParameterRecord) -> String {
    let mut script = String::from("#!/usr/bin/bash\n");
    write_section_header(&mut script, "Request resources here");

    let prefix = manager.directive_prefix();
    for (option, value) in directives(record) {
        writeln!(script, "#{prefix} --{option}={value}").unwrap();
    }

    script.push('\n');
    write_section_header(&mut script, "Load modules here");
    script.push('\n');
    write_section_header(&mut script, "Execute commands here");
    script.push('\n');
    script
}

fn directives(record: &ParameterRecord) -> [(&'static str, String); 10] {
    [
        ("job-name", record.name().to_string()),
        ("output", format!("{}.out", record.name())),
        ("account", record.group().to_string()),
        ("mail-type", record.mail_type().to_string()),
        ("mail-user", record.email().to_string()),
        ("partition", record.partition().to_string()),
        ("ntasks", record.ntasks().to_string()),
        ("nodes", record.nodes().to_string()),
        ("mem", record.memory().to_string()),
        ("time", record.time().to_string()),
    ]
}

fn write_section_header(script: &mut String, title: &str) {
    writeln!(script, "{SECTION_SEPARATOR}\n# {title}\n{SECTION_SEPARATOR}").unwrap();
}

#[cfg(test)]
mod tests {
    use crate::client::params::{
        MailType, ParameterOverrides, ParameterRecord, Partition, resolve_with_preferences,
    };
    use crate::client::script::build_job_script;
    use crate::common::env::Environment;
    use crate::common::manager::info::ManagerType;
    use crate::common::preferences::PreferenceMap;

    fn record(overrides: ParameterOverrides) -> ParameterRecord {
        let env = Environment::new(Some("alice".to_string()), Some("example.com".to_string()));
        resolve_with_preferences(&PreferenceMap::default(), overrides, &env).unwrap()
    }

    fn default_record() -> ParameterRecord {
        record(ParameterOverrides {
            job: "foo".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_slurm_script() {
        let script = build_job_script(ManagerType::Slurm, &default_record());
        assert_eq!(
            script,
            "#!/usr/bin/bash
# --------------------------------------------------
# Request resources here
# --------------------------------------------------
#SBATCH --job-name=new_job
#SBATCH --output=new_job.out
#SBATCH --account=barberan
#SBATCH --mail-type=ALL
#SBATCH --mail-user=alice@example.com
#SBATCH --partition=standard
#SBATCH --ntasks=1
#SBATCH --nodes=1
#SBATCH --mem=1gb
#SBATCH --time=1:00:00

# --------------------------------------------------
# Load modules here
# --------------------------------------------------

# --------------------------------------------------
# Execute commands here
# --------------------------------------------------

"
        );
    }

    #[test]
    fn test_pbs_script() {
        let record = record(ParameterOverrides {
            job: "foo".to_string(),
            name: Some("sim".to_string()),
            group: Some("physics".to_string()),
            mail_type: Some(MailType::End),
            email: Some("bob@example.com".to_string()),
            partition: Some(Partition::Windfall),
            ntasks: Some("28".to_string()),
            nodes: Some("2".to_string()),
            memory: Some("168gb".to_string()),
            time: Some("240:00:00".to_string()),
            ..Default::default()
        });
        let script = build_job_script(ManagerType::Pbs, &record);
        assert_eq!(
            script,
            "#!/usr/bin/bash
# --------------------------------------------------
# Request resources here
# --------------------------------------------------
#PBS --job-name=sim
#PBS --output=sim.out
#PBS --account=physics
#PBS --mail-type=END
#PBS --mail-user=bob@example.com
#PBS --partition=windfall
#PBS --ntasks=28
#PBS --nodes=2
#PBS --mem=168gb
#PBS --time=240:00:00

# --------------------------------------------------
# Load modules here
# --------------------------------------------------

# --------------------------------------------------
# Execute commands here
# --------------------------------------------------

"
        );
    }

    #[test]
    fn test_directive_order_is_same_for_all_managers() {
        let record = default_record();
        let options = |manager: ManagerType| -> Vec<String> {
            let prefix = format!("#{} --", manager.directive_prefix());
            build_job_script(manager, &record)
                .lines()
                .filter_map(|line| line.strip_prefix(&prefix))
                .map(|line| line.to_string())
                .collect()
        };
        let slurm = options(ManagerType::Slurm);
        assert_eq!(slurm.len(), 10);
        assert_eq!(slurm, options(ManagerType::Pbs));
    }

    #[test]
    fn test_script_is_deterministic() {
        let record = default_record();
        assert_eq!(
            build_job_script(ManagerType::Slurm, &record),
            build_job_script(ManagerType::Slurm, &record.clone())
        );
    }

    #[test]
    fn test_values_are_not_validated() {
        let record = record(ParameterOverrides {
            job: "foo".to_string(),
            memory: Some("lots".to_string()),
            time: Some("".to_string()),
            ..Default::default()
        });
        let script = build_job_script(ManagerType::Slurm, &record);
        assert!(script.contains("#SBATCH --mem=lots\n"));
        assert!(script.contains("#SBATCH --time=\n"));
    }
}
