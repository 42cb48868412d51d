//! Fixtures shared by the unit tests and the benchmarks.
use nalgebra::Vector3;

use crate::{
    atom::Atom,
    structure::{Chain, Residue},
};

/// Builds a single-model [`crate::structure::Structure`] from chains of residues.
#[cfg(test)]
macro_rules! structure {
    ($(
        $chain:literal => [$(
            ($serial:expr, $name:literal) {
                $($atom:literal => ($x:expr, $y:expr, $z:expr)),* $(,)?
            }
        ),* $(,)?]
    ),* $(,)?) => {
        $crate::structure::Structure::new(vec![$crate::structure::Model::new(1, vec![
            $($crate::structure::Chain::new($chain, vec![
                $({
                    let atoms: ::std::vec::Vec<$crate::atom::Atom> = vec![
                        $($crate::atom::Atom::new($atom, ::nalgebra::Vector3::new($x, $y, $z))),*
                    ];
                    $crate::structure::Residue::new($serial, $name, atoms)
                }),*
            ])),*
        ])])
    };
}

/// Rise per residue along the axis of an ideal alpha helix, in ångström
const HELIX_RISE: f64 = 1.5;
/// Radius of the alpha carbon trace of an ideal alpha helix, in ångström
const HELIX_RADIUS: f64 = 2.3;
/// 3.6 residues per turn
const HELIX_TWIST: f64 = 100.0 * std::f64::consts::PI / 180.0;

/// An ideal alpha helix along the z axis with backbone `N`, `CA` and `C` atoms per residue.
///
/// `offset` shifts the whole helix along x, which is handy for building a second copy that
/// needs to be moved back onto the first.
pub fn helix(chain_id: &str, n_residues: usize, offset: f64) -> Chain {
    let residues = (0..n_residues)
        .map(|i| {
            let position = |radius: f64, angle: f64, rise: f64| {
                let theta = i as f64 * HELIX_TWIST + angle;
                Vector3::new(
                    offset + radius * theta.cos(),
                    radius * theta.sin(),
                    i as f64 * HELIX_RISE + rise,
                )
            };

            Residue::new(
                i as isize + 1,
                "ALA",
                [
                    Atom::new("N", position(1.55, -0.49, -0.64)),
                    Atom::new("CA", position(HELIX_RADIUS, 0.0, 0.0)),
                    Atom::new("C", position(1.63, 0.50, 0.60)),
                ],
            )
        })
        .collect();

    Chain::new(chain_id, residues)
}
