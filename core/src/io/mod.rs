//! Structure sources and the axis point sink.
//!
//! The core only ever sees a [`Structure`]; this module turns PDB, mmCIF and json hierarchy
//! files into one, and writes point sequences back out as fixed-column coordinate records.
mod pdb;
mod writer;

use std::path::Path;

pub use pdb::parse_structure;
pub use writer::{save_axis_points, write_axis_points, RecordLabels};

use crate::{error::StructureError, structure::Structure};

/// The structure file formats a [`Structure`] can be read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StructureFormat {
    Pdb,
    Mmcif,
    /// The json hierarchy understood by [`crate::config::ConfigStructure`]
    Json,
}

impl StructureFormat {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "pdb" | "ent" => Some(Self::Pdb),
            "cif" | "mmcif" => Some(Self::Mmcif),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Loads a structure, picking the reader from the file extension.
pub fn read_structure(path: impl AsRef<Path>) -> Result<Structure, StructureError> {
    let path = path.as_ref();
    let format = StructureFormat::from_path(path)
        .ok_or_else(|| StructureError::UnknownFormat(path.to_path_buf()))?;

    log::info!("reading {format:?} structure from {}", path.display());

    let structure = parse_structure(&std::fs::read_to_string(path)?, format)?;

    log::debug!(
        "{} contains {} residues",
        path.display(),
        structure.residue_count()
    );
    Ok(structure)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use approx::assert_relative_eq;

    use crate::{align::align_axes, axis::extract_axis_points, config::AlignConfig};

    use super::{read_structure, write_axis_points, StructureFormat};

    #[test]
    fn format_from_extension() {
        assert_eq!(
            StructureFormat::from_path(Path::new("helix1-axis.pdb")),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("data/1abc.ENT")),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("model.cif")),
            Some(StructureFormat::Mmcif)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("model.json")),
            Some(StructureFormat::Json)
        );
        assert_eq!(StructureFormat::from_path(Path::new("model.xyz")), None);
        assert_eq!(StructureFormat::from_path(Path::new("model")), None);
    }

    #[test]
    fn aligns_sample_helices() {
        let config = AlignConfig::load("../data/align.json").unwrap();
        let input = |path: &Path| read_structure(Path::new("..").join(path)).unwrap();

        let reference = extract_axis_points(&input(config.reference_path())).unwrap();
        let moving = extract_axis_points(&input(config.moving_path())).unwrap();
        let aligned = align_axes(&reference, &moving).unwrap();

        assert_eq!(reference.len(), 12);
        assert_eq!(aligned.len(), moving.len());
        assert_relative_eq!(aligned[0], reference[0], epsilon = 1e-9);

        let mut out = Vec::new();
        write_axis_points(&aligned, &config.record_labels().unwrap(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 12);
        assert!(text.starts_with("ATOM      1  CA  ASN A   1       2.300   0.000   0.000"));
    }

    #[test]
    fn unknown_extension_is_an_error() {
        assert!(matches!(
            super::read_structure("notes.txt"),
            Err(crate::error::StructureError::UnknownFormat(_))
        ));
    }
}
