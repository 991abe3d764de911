use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SynVcfError};
use crate::models::config::{GeneratorConfig, GeneratorConfigBuilder, SampleIdStyle};

///
/// Loosely-typed generator settings, as read from a YAML file or collected
/// from command line flags. Every field is optional; [GeneratorSettings::overlay]
/// lets a higher-priority source win field by field, and
/// [GeneratorSettings::into_config] fills the rest with defaults and validates.
///
/// ```yaml
/// num_rows: 1000
/// num_samples: 50
/// chromosomes: [chr1, chr2]
/// seed: 42
/// id_type: count
/// phased: false
/// ```
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    pub num_rows: Option<usize>,
    pub num_samples: Option<usize>,
    pub chromosomes: Option<Vec<String>>,
    pub sample_prefix: Option<String>,
    pub id_type: Option<String>,
    pub phased: Option<bool>,
    pub large_format: Option<bool>,
    pub reference_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl GeneratorSettings {
    ///
    /// Read settings from a YAML file.
    ///
    /// # Arguments:
    /// - path: path to the YAML settings file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            SynVcfError::configuration("config", format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&raw).map_err(|e| match e {
            SynVcfError::Configuration { message, .. } => SynVcfError::configuration(
                "config",
                format!("{}: {message}", path.display()),
            ),
            other => other,
        })
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).map_err(|e| SynVcfError::configuration("config", e.to_string()))
    }

    ///
    /// Layer `other` over `self`: any field set in `other` replaces the one here.
    ///
    pub fn overlay(self, other: GeneratorSettings) -> GeneratorSettings {
        GeneratorSettings {
            num_rows: other.num_rows.or(self.num_rows),
            num_samples: other.num_samples.or(self.num_samples),
            chromosomes: other.chromosomes.or(self.chromosomes),
            sample_prefix: other.sample_prefix.or(self.sample_prefix),
            id_type: other.id_type.or(self.id_type),
            phased: other.phased.or(self.phased),
            large_format: other.large_format.or(self.large_format),
            reference_dir: other.reference_dir.or(self.reference_dir),
            seed: other.seed.or(self.seed),
        }
    }

    pub fn into_builder(self) -> Result<GeneratorConfigBuilder> {
        let mut builder = GeneratorConfig::builder()
            .reference_dir(self.reference_dir)
            .seed(self.seed);

        if let Some(num_rows) = self.num_rows {
            builder = builder.num_rows(num_rows);
        }
        if let Some(num_samples) = self.num_samples {
            builder = builder.num_samples(num_samples);
        }
        if let Some(chromosomes) = self.chromosomes {
            builder = builder.chromosomes(chromosomes);
        }
        if let Some(prefix) = self.sample_prefix {
            builder = builder.sample_prefix(prefix);
        }
        if let Some(id_type) = self.id_type {
            builder = builder.id_style(id_type.parse::<SampleIdStyle>()?);
        }
        if let Some(phased) = self.phased {
            builder = builder.phased(phased);
        }
        if let Some(large_format) = self.large_format {
            builder = builder.large_format(large_format);
        }

        Ok(builder)
    }

    pub fn into_config(self) -> Result<GeneratorConfig> {
        self.into_builder()?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;

    #[rstest]
    fn test_parse_yaml() {
        let settings = GeneratorSettings::from_yaml_str(
            "num_rows: 25\nchromosomes: [chr2, chr3]\nid_type: count\nphased: false\n",
        )
        .unwrap();
        assert_eq!(settings.num_rows, Some(25));
        assert_eq!(
            settings.chromosomes,
            Some(vec!["chr2".to_string(), "chr3".to_string()])
        );

        let config = settings.into_config().unwrap();
        assert_eq!(config.num_rows(), 25);
        assert_eq!(config.num_samples(), 10);
        assert_eq!(config.id_style(), SampleIdStyle::Count);
        assert!(!config.phased());
        assert!(config.large_format());
    }

    #[rstest]
    fn test_unknown_field_is_rejected() {
        let err = GeneratorSettings::from_yaml_str("num_rowz: 3\n").unwrap_err();
        assert!(matches!(err, SynVcfError::Configuration { field: "config", .. }));
    }

    #[rstest]
    fn test_bad_id_type_names_the_field() {
        let settings = GeneratorSettings {
            id_type: Some("serial".to_string()),
            ..Default::default()
        };
        match settings.into_config().unwrap_err() {
            SynVcfError::Configuration { field, .. } => assert_eq!(field, "id_type"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_overlay_prefers_the_upper_layer() {
        let file = GeneratorSettings {
            num_rows: Some(5),
            num_samples: Some(8),
            seed: Some(1),
            ..Default::default()
        };
        let flags = GeneratorSettings {
            num_rows: Some(9),
            ..Default::default()
        };
        let merged = file.overlay(flags);
        assert_eq!(merged.num_rows, Some(9));
        assert_eq!(merged.num_samples, Some(8));
        assert_eq!(merged.seed, Some(1));
    }

    #[rstest]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "num_samples: 3\nseed: 11").unwrap();

        let config = GeneratorSettings::from_yaml_file(&path)
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.num_samples(), 3);
        assert_eq!(config.seed(), 11);
    }

    #[rstest]
    fn test_missing_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorSettings::from_yaml_file(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("config"));
    }
}
