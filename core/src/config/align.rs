use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, io::RecordLabels};

/// Everything a full alignment run needs to know.
///
/// Every field has a default, so a config file only has to name what differs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignConfig {
    /// `[reference, moving]` structure files
    pub input_paths: [PathBuf; 2],
    /// Where the aligned moving axis is written
    pub output_path: PathBuf,
    /// Residue name written on every output record
    pub output_residue_label: String,
    /// Chain identifier written on every output record
    pub output_chain_id: char,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            input_paths: [
                PathBuf::from("helix1-axis.pdb"),
                PathBuf::from("helix2-axis.pdb"),
            ],
            output_path: PathBuf::from("aligned_helix2.pdb"),
            output_residue_label: RecordLabels::DEFAULT_RESIDUE_LABEL.to_string(),
            output_chain_id: RecordLabels::DEFAULT_CHAIN_ID,
        }
    }
}

impl AlignConfig {
    /// Reads a json config file. The result is validated before it is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        config.validate()?;
        Ok(config)
    }

    pub fn reference_path(&self) -> &Path {
        &self.input_paths[0]
    }

    pub fn moving_path(&self) -> &Path {
        &self.input_paths[1]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.record_labels().map(|_| ())
    }

    /// The labels the point sink stamps on each record.
    pub fn record_labels(&self) -> Result<RecordLabels, ConfigError> {
        RecordLabels::new(&self.output_residue_label, self.output_chain_id)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::ConfigError;

    use super::AlignConfig;

    #[test]
    fn missing_fields_take_defaults() {
        let config: AlignConfig =
            serde_json::from_str(r#"{"output_path": "out/aligned.pdb", "output_chain_id": "X"}"#)
                .unwrap();

        assert_eq!(config.output_path, PathBuf::from("out/aligned.pdb"));
        assert_eq!(config.output_chain_id, 'X');
        assert_eq!(config.output_residue_label, "ASN");
        assert_eq!(config.reference_path(), PathBuf::from("helix1-axis.pdb"));
        assert_eq!(config.moving_path(), PathBuf::from("helix2-axis.pdb"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<AlignConfig>(r#"{"output": "x.pdb"}"#).is_err());
    }

    #[test]
    fn input_paths_need_two_entries() {
        assert!(
            serde_json::from_str::<AlignConfig>(r#"{"input_paths": ["only-one.pdb"]}"#).is_err()
        );
    }

    #[test]
    fn labels_are_validated() {
        let config = AlignConfig {
            output_residue_label: "LONG".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidResidueLabel(label)) if label == "LONG"
        ));

        let config = AlignConfig {
            output_chain_id: '-',
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidChainId('-'))
        ));
    }
}
