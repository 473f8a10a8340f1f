// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use thiserror::Error;

use crate::pipeline::Stage;

pub type MineResult<T> = Result<T, MineError>;

/// Which input sequence of a problem an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::X => write!(f, "x"),
            Side::Y => write!(f, "y"),
        }
    }
}

/// Coarse classification of a [`MineError`], matching how the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The parameter set or a setting is invalid.
    Configuration,
    /// The input sequences do not have a usable shape.
    DataShape,
    /// The scoring engine could not produce a usable score.
    Computation,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MineError {
    //------ Configuration ------
    #[error("not valid MINE params: {0}")]
    InvalidParameters(String),

    #[error("unrecognized configuration parameter \"{0}\"")]
    UnknownParameter(String),

    #[error("invalid value for parameter \"{name}\": \"{value}\" ({reason})")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("permission denied to set parameter \"{0}\"")]
    PermissionDenied(String),

    //------ Data shape ------
    #[error("different number of elements in arrays {0} and {1}")]
    LengthMismatch(usize, usize),

    #[error("problem has no {0} sequence")]
    AbsentSequence(Side),

    #[error("problem declares n = {declared} but carries {actual} observations")]
    CountMismatch { declared: usize, actual: usize },

    #[error("table has no columns")]
    EmptyTable,

    #[error("expected {expected} column labels, got {got}")]
    ColumnCount { expected: usize, got: usize },

    //------ Computation ------
    #[error("mine_compute_score() failed to produce a score")]
    ScoreUnavailable,

    #[error("malformed characteristic matrix: non-finite entry at ({row}, {col})")]
    MalformedScore { row: usize, col: usize },

    #[error("failed to render plot: {0}")]
    Plot(String),
}

impl MineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MineError::InvalidParameters(_)
            | MineError::UnknownParameter(_)
            | MineError::InvalidValue { .. }
            | MineError::PermissionDenied(_) => ErrorKind::Configuration,
            MineError::LengthMismatch(..)
            | MineError::AbsentSequence(_)
            | MineError::CountMismatch { .. }
            | MineError::EmptyTable
            | MineError::ColumnCount { .. } => ErrorKind::DataShape,
            MineError::ScoreUnavailable | MineError::MalformedScore { .. } | MineError::Plot(_) => {
                ErrorKind::Computation
            }
        }
    }

    /// The pipeline stage whose entry condition this error violated.
    pub fn failed_at(&self) -> Stage {
        match self.kind() {
            ErrorKind::Configuration => Stage::ParametersValidated,
            ErrorKind::DataShape => Stage::ProblemBuilt,
            ErrorKind::Computation => Stage::Scored,
        }
    }

    pub(crate) fn invalid_value(name: &str, value: &str, reason: impl Into<String>) -> Self {
        MineError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
