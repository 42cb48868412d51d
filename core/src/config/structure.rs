use nalgebra::Vector3;
use serde::Deserialize;

use crate::{
    atom::Atom,
    error::StructureError,
    structure::{Chain, Model, Residue, Structure},
};

/// Represents a full structure in a json file.
/// A structure is a list of models, each a list of chains of residues of positioned atoms.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigStructure {
    models: Vec<ConfigModel>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigModel {
    #[serde(default = "first_model")]
    serial: usize,
    chains: Vec<ConfigChain>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigChain {
    id: String,
    residues: Vec<ConfigResidue>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigResidue {
    serial: isize,
    #[serde(default)]
    name: String,
    atoms: Vec<ConfigAtom>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigAtom {
    name: String,
    position: Vec<f64>,
}

fn first_model() -> usize {
    1
}

impl TryFrom<ConfigStructure> for Structure {
    type Error = StructureError;

    fn try_from(value: ConfigStructure) -> Result<Self, Self::Error> {
        let mut models = Vec::with_capacity(value.models.len());

        for model in value.models {
            let mut chains = Vec::with_capacity(model.chains.len());

            for chain in model.chains {
                let residues = chain
                    .residues
                    .into_iter()
                    .map(ConfigResidue::into_residue)
                    .collect::<Result<Vec<_>, _>>()?;
                chains.push(Chain::new(chain.id, residues));
            }

            models.push(Model::new(model.serial, chains));
        }

        Ok(Structure::new(models))
    }
}

impl ConfigResidue {
    fn into_residue(self) -> Result<Residue, StructureError> {
        let mut atoms = Vec::with_capacity(self.atoms.len());

        for atom in self.atoms {
            let &[x, y, z] = atom.position.as_slice() else {
                return Err(StructureError::InvalidPosition {
                    residue: self.serial,
                    found: atom.position.len(),
                    atom: atom.name,
                });
            };

            atoms.push(Atom::new(atom.name, Vector3::new(x, y, z)));
        }

        Ok(Residue::new(self.serial, self.name, atoms))
    }
}
