// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::score::Score;

/// Total information coefficient: the sum of all matrix entries.
///
/// With `norm` the sum is divided by the number of cells, which keeps TIC in
/// `[0, 1]`. An empty matrix yields 0 either way.
pub fn tic(score: &Score, norm: bool) -> f64 {
    let total: f64 = score.cells().map(|(_, _, v)| v).sum();
    let k = score.num_cells();
    if norm && k > 0 { total / k as f64 } else { total }
}
