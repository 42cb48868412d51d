use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Which side of an alignment a point sequence plays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequenceRole {
    Reference,
    Moving,
}

impl fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceRole::Reference => write!(f, "reference"),
            SequenceRole::Moving => write!(f, "moving"),
        }
    }
}

/// Errors raised while extracting or aligning axis points.
#[derive(Debug, Error, PartialEq)]
pub enum AxisError {
    /// A residue without any atom, so neither a CA nor a fallback point exists.
    #[error("residue {residue} of chain {chain:?} in model {model} has no atoms")]
    EmptyResidue {
        model: usize,
        chain: String,
        residue: isize,
    },

    /// Alignment needs the first point of both sequences.
    #[error("the {0} point sequence is empty")]
    EmptyPointSequence(SequenceRole),
}

/// Errors raised by the structure sources and the point sink.
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse structure: {0}")]
    Parse(String),

    #[error("invalid json structure: {0}")]
    Json(#[from] serde_json::Error),

    /// An atom position in a json structure that is not an `[x, y, z]` triple.
    #[error("atom {atom:?} of residue {residue} has {found} coordinates, expected 3")]
    InvalidPosition {
        residue: isize,
        atom: String,
        found: usize,
    },

    #[error("unrecognized structure format for {0:?}")]
    UnknownFormat(PathBuf),

    /// The residue sequence column only has room for four digits.
    #[error("{0} points do not fit the fixed-width sequence number column")]
    TooManyRecords(usize),

    #[error("coordinate {value} of point {index} does not fit an 8.3 column")]
    CoordinateOverflow { index: usize, value: f64 },
}

/// Errors raised while loading or validating an [`crate::config::AlignConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("residue label {0:?} must be 1 to 3 ascii alphanumeric characters")]
    InvalidResidueLabel(String),

    #[error("chain id {0:?} must be a single ascii alphanumeric character")]
    InvalidChainId(char),
}
