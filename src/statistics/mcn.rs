// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::score::Score;
use super::characteristic::mic;

/// Tolerance added to each cell so grids scoring within rounding of the
/// threshold still count.
const MCN_DELTA: f64 = 1e-4;

/// log2 of the cell count of grid `(i, j)`.
fn log2_cells(i: usize, j: usize) -> f64 {
    (((i + 2) * (j + 2)) as f64).log2()
}

fn min_cells_above(score: &Score, threshold: f64) -> f64 {
    score
        .cells()
        .filter(|&(_, _, v)| v + MCN_DELTA >= threshold)
        .map(|(i, j, _)| log2_cells(i, j))
        .fold(f64::MAX, f64::min)
}

/// Minimum cell number: log2 of the smallest grid reaching `(1 - eps) * MIC`.
///
/// `f64::MAX` when no cell qualifies, which only happens for an empty matrix.
pub fn mcn(score: &Score, eps: f64) -> f64 {
    min_cells_above(score, (1.0 - eps) * mic(score))
}

/// Minimum cell number with the threshold set to `MIC^2`.
pub fn mcn_general(score: &Score) -> f64 {
    let m = mic(score);
    min_cells_above(score, m * m)
}
