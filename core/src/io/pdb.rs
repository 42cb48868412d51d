use std::io::BufReader;

use itertools::Itertools;
use nalgebra::Vector3;
use pdbtbx::{Format, ReadOptions, StrictnessLevel, PDB};

use crate::{
    atom::Atom,
    config::ConfigStructure,
    error::StructureError,
    structure::{Chain, Model, Residue, Structure},
};

use super::StructureFormat;

/// Parses structure text in the given format.
pub fn parse_structure(
    input: &str,
    format: StructureFormat,
) -> Result<Structure, StructureError> {
    let format = match format {
        StructureFormat::Pdb => Format::Pdb,
        StructureFormat::Mmcif => Format::Mmcif,
        StructureFormat::Json => {
            let config: ConfigStructure = serde_json::from_str(input)?;
            return Structure::try_from(config);
        }
    };

    let (pdb, warnings) = ReadOptions::new()
        .set_format(format)
        .set_level(StrictnessLevel::Loose)
        .read_raw(BufReader::new(input.as_bytes()))
        .map_err(|errors| StructureError::Parse(errors.iter().join("; ")))?;

    for warning in &warnings {
        log::warn!("{warning}");
    }

    Ok(convert(&pdb))
}

/// Copies the pdbtbx hierarchy, keeping the order pdbtbx read it in. Atoms of alternate
/// conformers follow each other in conformer order.
fn convert(pdb: &PDB) -> Structure {
    let models = pdb
        .models()
        .map(|model| {
            let chains = model
                .chains()
                .map(|chain| {
                    let residues = chain
                        .residues()
                        .map(|residue| {
                            let name = residue
                                .conformers()
                                .next()
                                .map_or("", |conformer| conformer.name());
                            let atoms = residue.atoms().map(|atom| {
                                Atom::new(atom.name(), Vector3::new(atom.x(), atom.y(), atom.z()))
                            });

                            Residue::new(residue.serial_number(), name, atoms)
                        })
                        .collect();

                    Chain::new(chain.id(), residues)
                })
                .collect();

            Model::new(model.serial_number(), chains)
        })
        .collect();

    Structure::new(models)
}
