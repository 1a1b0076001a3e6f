use bstr::ByteSlice;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

/// Default values stored by the user in a `key=value` file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreferenceMap {
    items: HashMap<String, String>,
}

impl PreferenceMap {
    /// Parses the content of a preference file.
    ///
    /// Every line is split at its first `=` and both sides are trimmed.
    /// Lines without `=`, with an empty key or value and `#` comments are skipped.
    /// Lines that are not valid UTF-8 are skipped as well.
    /// If a key is repeated, the last occurrence is used.
    pub fn parse<T: AsRef<[u8]>>(content: T) -> Self {
        let mut items = HashMap::new();
        for (index, line) in content.as_ref().lines().enumerate() {
            let Ok(line) = line.to_str() else {
                log::debug!("Skipping preference line {} with invalid UTF-8", index + 1);
                continue;
            };
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                continue;
            }
            items.insert(key.to_string(), value.to_string());
        }
        Self { items }
    }

    /// Loads preferences from `path`. A missing file results in an empty map.
    pub fn load(path: &Path) -> crate::Result<Self> {
        match std::fs::read(path) {
            Ok(content) => {
                let preferences = Self::parse(content);
                log::debug!(
                    "Loaded {} preference(s) from {}",
                    preferences.len(),
                    path.display()
                );
                Ok(preferences)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                log::debug!("Preference file {} does not exist", path.display());
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|v| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
