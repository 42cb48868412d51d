use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{ConfigError, StructureError},
    point::PointSequence,
};

/// Largest sequence number the 4-character residue sequence column holds
const MAX_RECORDS: usize = 9999;

/// Labels stamped on every output record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLabels {
    residue_label: String,
    chain_id: char,
}

impl RecordLabels {
    pub const ATOM_NAME: &'static str = "CA";
    pub const ELEMENT: &'static str = "C";
    pub const DEFAULT_RESIDUE_LABEL: &'static str = "ASN";
    pub const DEFAULT_CHAIN_ID: char = 'A';

    pub fn new(residue_label: &str, chain_id: char) -> Result<Self, ConfigError> {
        if residue_label.is_empty()
            || residue_label.len() > 3
            || !residue_label.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::InvalidResidueLabel(residue_label.to_string()));
        }

        if !chain_id.is_ascii_alphanumeric() {
            return Err(ConfigError::InvalidChainId(chain_id));
        }

        Ok(Self {
            residue_label: residue_label.to_string(),
            chain_id,
        })
    }

    pub fn residue_label(&self) -> &str {
        &self.residue_label
    }

    pub fn chain_id(&self) -> char {
        self.chain_id
    }
}

impl Default for RecordLabels {
    fn default() -> Self {
        Self {
            residue_label: Self::DEFAULT_RESIDUE_LABEL.to_string(),
            chain_id: Self::DEFAULT_CHAIN_ID,
        }
    }
}

/// Writes one `ATOM` record per point in standard PDB columns.
///
/// Point `i` gets serial and residue sequence number `i + 1`. Occupancy, B-factor and element
/// are filled in so the records are complete enough for [`super::parse_structure`]. Everything is checked before
/// the first byte is written, so a failing sequence leaves `out` untouched.
pub fn write_axis_points(
    points: &PointSequence,
    labels: &RecordLabels,
    mut out: impl Write,
) -> Result<(), StructureError> {
    if points.len() > MAX_RECORDS {
        return Err(StructureError::TooManyRecords(points.len()));
    }

    for (index, point) in points.iter().enumerate() {
        if let Some(&value) = point.iter().find(|value| !fits_coordinate_column(**value)) {
            return Err(StructureError::CoordinateOverflow { index, value });
        }
    }

    let RecordLabels {
        residue_label,
        chain_id,
    } = labels;
    let atom_name = RecordLabels::ATOM_NAME;
    let element = RecordLabels::ELEMENT;

    for (index, point) in points.iter().enumerate() {
        let serial = index + 1;
        writeln!(
            out,
            "ATOM  {serial:>5}  {atom_name:<3} {residue_label:>3} {chain_id}{serial:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {element:>2}",
            point.x, point.y, point.z, 1.0, 0.0
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Writes the records of [`write_axis_points`] to a file, replacing it if it exists.
pub fn save_axis_points(
    points: &PointSequence,
    labels: &RecordLabels,
    path: impl AsRef<Path>,
) -> Result<(), StructureError> {
    let path = path.as_ref();
    let file = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    write_axis_points(points, labels, BufWriter::new(file))?;
    log::info!("wrote {} axis points to {}", points.len(), path.display());
    Ok(())
}

/// Whether `value` prints into 8 characters with 3 decimals
fn fits_coordinate_column(value: f64) -> bool {
    value.is_finite() && value > -999.9995 && value < 9999.9995
}
