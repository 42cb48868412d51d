//! Per-residue axis point extraction.
use crate::{
    error::AxisError,
    point::{Point3, PointSequence},
    structure::{Chain, Residue, Structure},
};

/// Name of the atom preferred as a residue's representative point.
pub const ALPHA_CARBON: &str = "CA";

impl Residue {
    /// The representative point of this residue: its alpha carbon if present, otherwise the
    /// first atom in iteration order. `None` only for a residue without atoms.
    pub fn axis_point(&self) -> Option<Point3> {
        self.atom(ALPHA_CARBON)
            .or_else(|| self.atoms.first())
            .map(|atom| atom.position)
    }
}

/// Extract one axis point per residue, visiting models, chains and residues in order.
///
/// An empty structure gives an empty sequence. A residue without atoms aborts the whole
/// extraction, since skipping it would shift every later index.
pub fn extract_axis_points(structure: &Structure) -> Result<PointSequence, AxisError> {
    let chains = structure
        .models
        .iter()
        .flat_map(|model| model.chains.iter().map(move |chain| (model.serial, chain)))
        .collect::<Vec<_>>();

    #[cfg(feature = "rayon")]
    let points = {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

        chains
            .par_iter()
            .map(|&(model, chain)| chain_axis_points(model, chain))
            .collect::<Result<Vec<_>, _>>()? // indexed collect keeps chain order
            .into_iter()
            .flatten()
            .collect::<PointSequence>()
    };

    #[cfg(not(feature = "rayon"))]
    let points = {
        let mut points = Vec::with_capacity(structure.residue_count());
        for (model, chain) in chains {
            points.extend(chain_axis_points(model, chain)?);
        }
        PointSequence::new(points)
    };

    log::debug!(
        "extracted {} axis points from {} models",
        points.len(),
        structure.models.len()
    );
    Ok(points)
}

fn chain_axis_points(model: usize, chain: &Chain) -> Result<Vec<Point3>, AxisError> {
    chain
        .residues
        .iter()
        .map(|residue| -> Result<Point3, AxisError> {
            let point = residue.axis_point().ok_or_else(|| AxisError::EmptyResidue {
                model,
                chain: chain.id.clone(),
                residue: residue.serial,
            })?;
            log::trace!(
                "model {model} chain {} residue {} ({}): {point:?}",
                chain.id,
                residue.serial,
                residue.name
            );
            Ok(point)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use crate::{
        atom::Atom,
        error::AxisError,
        structure::{Chain, Model, Residue, Structure},
        testing,
    };

    use super::extract_axis_points;

    #[test]
    fn alpha_carbons_in_traversal_order() {
        let structure = structure! {
            "A" => [
                (1, "ALA") { "N" => (0.0, 0.0, 0.0), "CA" => (1.0, 2.0, 3.0), "C" => (2.0, 0.0, 0.0) },
                (2, "GLY") { "N" => (3.0, 0.0, 0.0), "CA" => (4.0, 5.0, 6.0) },
            ],
            "B" => [
                (1, "SER") { "CA" => (7.0, 8.0, 9.0), "CB" => (9.0, 9.0, 9.0) },
            ],
        };

        let points = extract_axis_points(&structure).unwrap();

        assert_eq!(points.len(), structure.residue_count());
        assert_eq!(points[0], Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(points[1], Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(points[2], Vector3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn falls_back_to_first_atom_without_alpha_carbon() {
        let structure = structure! {
            "A" => [
                (1, "HOH") { "O" => (0.5, 0.25, 0.125), "H1" => (1.0, 1.0, 1.0) },
                (2, "ALA") { "CA" => (2.0, 2.0, 2.0) },
            ],
        };

        let points = extract_axis_points(&structure).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Vector3::new(0.5, 0.25, 0.125));
        assert_eq!(points[1], Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn alpha_carbon_wins_regardless_of_position() {
        let structure = structure! {
            "A" => [
                (1, "LYS") { "N" => (0.0, 0.0, 0.0), "C" => (1.0, 0.0, 0.0), "CA" => (9.0, 9.0, 9.0) },
            ],
        };

        let points = extract_axis_points(&structure).unwrap();
        assert_eq!(points[0], Vector3::new(9.0, 9.0, 9.0));
    }

    #[test]
    fn first_alternate_location_is_used() {
        let residue = Residue::new(
            7,
            "VAL",
            [
                Atom::new("CA", Vector3::new(1.0, 1.0, 1.0)),
                Atom::new("CA", Vector3::new(1.5, 1.5, 1.5)),
            ],
        );

        assert_eq!(residue.axis_point(), Some(Vector3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn empty_structure_gives_empty_sequence() {
        assert!(extract_axis_points(&Structure::default())
            .unwrap()
            .is_empty());

        let no_residues = Structure::new(vec![Model::new(1, vec![Chain::new("A", vec![])])]);
        assert!(extract_axis_points(&no_residues).unwrap().is_empty());
    }

    #[test]
    fn empty_residue_aborts_extraction() {
        let structure = structure! {
            "A" => [
                (1, "ALA") { "CA" => (0.0, 0.0, 0.0) },
            ],
            "C" => [
                (1, "ALA") { "CA" => (0.0, 0.0, 0.0) },
                (12, "UNK") {},
                (13, "ALA") { "CA" => (1.0, 0.0, 0.0) },
            ],
        };

        assert_eq!(
            extract_axis_points(&structure),
            Err(AxisError::EmptyResidue {
                model: 1,
                chain: "C".to_string(),
                residue: 12,
            })
        );
    }

    #[test]
    fn all_models_are_visited() {
        let first = Model::new(1, vec![testing::helix("A", 4, 0.0)]);
        let second = Model::new(2, vec![testing::helix("A", 3, 10.0)]);
        let structure = Structure::new(vec![first, second]);

        let points = extract_axis_points(&structure).unwrap();

        assert_eq!(points.len(), 7);
        let expected = structure
            .residues()
            .map(|residue| *residue.atom("CA").unwrap().position())
            .collect::<Vec<_>>();
        assert_eq!(points.points(), expected.as_slice());
    }

    #[test]
    fn points_are_copies() {
        let mut structure = structure! {
            "A" => [
                (1, "ALA") { "CA" => (1.0, 1.0, 1.0) },
            ],
        };
        let points = extract_axis_points(&structure).unwrap();

        structure.models[0].chains[0].residues[0].atoms[0].position = Vector3::zeros();

        assert_eq!(points[0], Vector3::new(1.0, 1.0, 1.0));
    }
}
