// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::errors::{MineError, MineResult, Side};

/// Paired observations handed to the scoring engine.
///
/// Both sequences are owned copies of the caller's data and always have
/// length `n`. Degenerate sizes (0 or 1) are not special-cased here.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    n: usize,
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Problem {
    pub fn new(x: Array1<f64>, y: Array1<f64>) -> MineResult<Self> {
        if x.len() != y.len() {
            return Err(MineError::LengthMismatch(x.len(), y.len()));
        }
        Ok(Self { n: x.len(), x, y })
    }

    pub fn from_slices(x: &[f64], y: &[f64]) -> MineResult<Self> {
        Self::new(Array1::from(x.to_vec()), Array1::from(y.to_vec()))
    }

    pub fn n(&self) -> usize { self.n }
    pub fn x(&self) -> ArrayView1<'_, f64> { self.x.view() }
    pub fn y(&self) -> ArrayView1<'_, f64> { self.y.view() }
}

/// Composite value returned by `build_problem`.
///
/// Mirrors the host tuple `(n, x, y)`: an absent input array leaves its side
/// empty, and `n` is only present when both sides are. The bundle can be
/// stored and passed back to `compute_statistics` later.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProblemBundle {
    pub n: Option<usize>,
    pub x: Option<Array1<f64>>,
    pub y: Option<Array1<f64>>,
}

impl ProblemBundle {
    /// Bundle two nullable sequences, copying their contents.
    ///
    /// Fails only when both sides are present with different lengths.
    pub fn build(a: Option<ArrayView1<'_, f64>>, b: Option<ArrayView1<'_, f64>>) -> MineResult<Self> {
        if let (Some(a), Some(b)) = (&a, &b) {
            if a.len() != b.len() {
                return Err(MineError::LengthMismatch(a.len(), b.len()));
            }
        }
        let n = match (&a, &b) {
            (Some(a), Some(_)) => Some(a.len()),
            _ => None,
        };
        Ok(Self {
            n,
            x: a.map(|v| v.to_owned()),
            y: b.map(|v| v.to_owned()),
        })
    }

    /// True when either input array was absent.
    pub fn is_null(&self) -> bool {
        self.x.is_none() || self.y.is_none()
    }

    pub fn x_is_null(&self) -> bool { self.x.is_none() }
    pub fn y_is_null(&self) -> bool { self.y.is_none() }
}

impl TryFrom<&ProblemBundle> for Problem {
    type Error = MineError;

    fn try_from(bundle: &ProblemBundle) -> MineResult<Problem> {
        let x = bundle.x.as_ref().ok_or(MineError::AbsentSequence(Side::X))?;
        let y = bundle.y.as_ref().ok_or(MineError::AbsentSequence(Side::Y))?;
        if x.len() != y.len() {
            return Err(MineError::LengthMismatch(x.len(), y.len()));
        }
        if let Some(declared) = bundle.n {
            if declared != x.len() {
                return Err(MineError::CountMismatch { declared, actual: x.len() });
            }
        }
        Problem::new(x.clone(), y.clone())
    }
}

impl TryFrom<ProblemBundle> for Problem {
    type Error = MineError;

    fn try_from(bundle: ProblemBundle) -> MineResult<Problem> {
        Problem::try_from(&bundle)
    }
}
