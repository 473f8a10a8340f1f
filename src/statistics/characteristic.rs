// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::score::Score;

/// Maximal information coefficient: the largest entry of the matrix.
///
/// Returns 0 for a matrix without cells.
pub fn mic(score: &Score) -> f64 {
    score.cells().fold(0.0_f64, |acc, (_, _, v)| acc.max(v))
}

/// Maximum asymmetry score: `max |M[i][j] - M[j][i]|`.
///
/// Cells whose transposed position falls outside the ragged matrix are
/// skipped.
pub fn mas(score: &Score) -> f64 {
    let mut best = 0.0_f64;
    for (i, j, v) in score.cells() {
        if let Some(t) = score.get(j, i) {
            best = best.max((v - t).abs());
        }
    }
    best
}

/// Maximum edge value: the largest entry with two bins on either axis.
pub fn mev(score: &Score) -> f64 {
    score
        .cells()
        .filter(|&(i, j, _)| i == 0 || j == 0)
        .fold(0.0_f64, |acc, (_, _, v)| acc.max(v))
}
