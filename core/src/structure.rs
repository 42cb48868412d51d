use smallvec::SmallVec;

use crate::atom::Atom;

/// A parsed structure: an ordered list of models.
///
/// Every level of the hierarchy keeps the order its source produced, which for the file
/// readers in [`crate::io`] is the order records appear in the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Structure {
    pub(crate) models: Vec<Model>,
}

impl Structure {
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Every residue in traversal order, across all models and chains
    pub fn residues(&self) -> impl Iterator<Item = &Residue> {
        self.models
            .iter()
            .flat_map(|model| &model.chains)
            .flat_map(|chain| &chain.residues)
    }

    pub fn residue_count(&self) -> usize {
        self.residues().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues().next().is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub(crate) serial: usize,
    pub(crate) chains: Vec<Chain>,
}

impl Model {
    pub fn new(serial: usize, chains: Vec<Chain>) -> Self {
        Self { serial, chains }
    }

    pub fn serial(&self) -> usize {
        self.serial
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    pub(crate) id: String,
    pub(crate) residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: impl Into<String>, residues: Vec<Residue>) -> Self {
        Self {
            id: id.into(),
            residues,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
}

/// A residue and its atoms, in insertion order.
///
/// Lookups by name return the first matching atom, so alternate locations resolve to
/// whichever conformer was read first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Residue {
    pub(crate) serial: isize,
    pub(crate) name: String,
    pub(crate) atoms: SmallVec<[Atom; 16]>,
}

impl Residue {
    pub fn new(
        serial: isize,
        name: impl Into<String>,
        atoms: impl IntoIterator<Item = Atom>,
    ) -> Self {
        Self {
            serial,
            name: name.into(),
            atoms: atoms.into_iter().collect(),
        }
    }

    pub fn serial(&self) -> isize {
        self.serial
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Returns the first atom with the given name, if any.
    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.name == name)
    }
}
