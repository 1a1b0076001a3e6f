use std::path::{Path, PathBuf};

pub mod commands;
pub mod params;
pub mod script;

/// Names of the preference file in the home directory of the user, in the order
/// in which they are looked up. `.new_job.py` is the name used by older versions.
const PREFERENCE_FILE_NAMES: [&str; 2] = [".new_job", ".new_job.py"];

pub fn default_preference_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| preference_file_in(&home))
}

/// Returns the first existing preference file in `home`, or the preferred name
/// if there is none.
fn preference_file_in(home: &Path) -> PathBuf {
    PREFERENCE_FILE_NAMES
        .iter()
        .map(|name| home.join(name))
        .find(|path| path.is_file())
        .unwrap_or_else(|| home.join(PREFERENCE_FILE_NAMES[0]))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::client::preference_file_in;

    #[test]
    fn test_preference_file_missing() {
        let home = TempDir::with_prefix("jobgen").unwrap();
        assert_eq!(preference_file_in(home.path()), home.path().join(".new_job"));
    }

    #[test]
    fn test_preference_file_legacy_name() {
        let home = TempDir::with_prefix("jobgen").unwrap();
        std::fs::write(home.path().join(".new_job.py"), "email=alice@example.com\n").unwrap();
        assert_eq!(
            preference_file_in(home.path()),
            home.path().join(".new_job.py")
        );
    }

    #[test]
    fn test_preference_file_prefers_new_name() {
        let home = TempDir::with_prefix("jobgen").unwrap();
        std::fs::write(home.path().join(".new_job"), "").unwrap();
        std::fs::write(home.path().join(".new_job.py"), "").unwrap();
        assert_eq!(preference_file_in(home.path()), home.path().join(".new_job"));
    }
}
