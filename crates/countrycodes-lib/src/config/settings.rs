use std::path::PathBuf;

use crate::errors::Result;
use crate::resource::{BundledResources, DirectoryResources, LayeredResources, DEFAULT_RESOURCE};
use crate::table::{CodeTable, DuplicatePolicy, ParseOptions};

pub const RESOURCE_VAR: &str = "COUNTRYCODES_RESOURCE";
pub const RESOURCE_DIR_VAR: &str = "COUNTRYCODES_RESOURCE_DIR";
pub const DUPLICATES_VAR: &str = "COUNTRYCODES_DUPLICATES";
pub const DEBUG_VAR: &str = "COUNTRYCODES_DEBUG";

/// Application settings, read once at startup from environment variables.
///
/// Command-line flags are applied on top by the binary before the table is
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub resource: String,
    pub resource_dir: Option<PathBuf>,
    pub duplicates: DuplicatePolicy,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource: DEFAULT_RESOURCE.to_string(),
            resource_dir: None,
            duplicates: DuplicatePolicy::default(),
            debug: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            resource: get(RESOURCE_VAR)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.resource),
            resource_dir: get(RESOURCE_DIR_VAR).map(PathBuf::from),
            duplicates: match get(DUPLICATES_VAR) {
                Some(v) => v.parse()?,
                None => defaults.duplicates,
            },
            debug: get(DEBUG_VAR).map(|v| is_truthy(&v)).unwrap_or(defaults.debug),
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            duplicates: self.duplicates,
        }
    }

    /// Resource lookup order: the configured directory, then the bundled data.
    pub fn loader(&self) -> LayeredResources {
        let mut loader = LayeredResources::new();
        if let Some(dir) = &self.resource_dir {
            loader = loader.with(DirectoryResources::new(dir));
        }
        loader.with(BundledResources)
    }

    pub fn load_table(&self) -> Result<CodeTable> {
        CodeTable::load(&self.loader(), &self.resource, self.parse_options())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use tempfile::TempDir;

    use crate::errors::CountryCodeError;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_vars(vars(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.resource, DEFAULT_RESOURCE);
    }

    #[test]
    fn test_reads_all_variables() {
        let settings = Settings::from_vars(vars(&[
            (RESOURCE_VAR, "codes.txt"),
            (RESOURCE_DIR_VAR, "/srv/data"),
            (DUPLICATES_VAR, "reject"),
            (DEBUG_VAR, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(settings.resource, "codes.txt");
        assert_eq!(settings.resource_dir, Some(PathBuf::from("/srv/data")));
        assert_eq!(settings.duplicates, DuplicatePolicy::Reject);
        assert!(settings.debug);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let settings =
            Settings::from_vars(vars(&[(RESOURCE_VAR, "  "), (RESOURCE_DIR_VAR, "")])).unwrap();
        assert_eq!(settings.resource, DEFAULT_RESOURCE);
        assert_eq!(settings.resource_dir, None);
    }

    #[test]
    fn test_bad_duplicate_policy() {
        let err = Settings::from_vars(vars(&[(DUPLICATES_VAR, "sometimes")])).unwrap_err();
        assert!(matches!(err, CountryCodeError::Config(_)));
    }

    #[test]
    fn test_debug_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" on "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
    }

    #[test]
    fn test_loader_without_dir_is_bundled_only() {
        let settings = Settings::default();
        assert_eq!(settings.loader().len(), 1);
        assert_eq!(settings.load_table().unwrap().num_countries(), 249);
    }

    #[test]
    fn test_load_table_from_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("mini.txt"),
            "Country\tA2\tA3\nMalta\tMT\tMLT\nMalta\tMT\tMLT\n",
        )
        .unwrap();

        let mut settings = Settings {
            resource: "mini.txt".to_string(),
            resource_dir: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };
        assert_eq!(settings.load_table().unwrap().num_countries(), 1);

        settings.duplicates = DuplicatePolicy::Reject;
        assert!(matches!(
            settings.load_table().unwrap_err(),
            CountryCodeError::DuplicateName { line: 3, .. }
        ));
    }

    #[test]
    fn test_missing_resource_everywhere() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            resource: "absent.txt".to_string(),
            resource_dir: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };
        assert!(matches!(
            settings.load_table().unwrap_err(),
            CountryCodeError::ResourceNotFound(_)
        ));
    }
}
