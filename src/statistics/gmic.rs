// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::score::Score;

/// Equicharacteristic matrix `C*` with the same shape as `score`.
///
/// `C*[i][j]` is the best score among all grids with at most
/// `(i + 2) * (j + 2)` cells. Built from per-row running maxima so each cell
/// costs one lookup per row.
pub fn equicharacteristic(score: &Score) -> Vec<Vec<f64>> {
    let prefix_max: Vec<Vec<f64>> = score
        .rows()
        .iter()
        .map(|row| {
            let mut acc = 0.0_f64;
            row.iter()
                .map(|&v| {
                    acc = acc.max(v);
                    acc
                })
                .collect()
        })
        .collect();

    score
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            (0..row.len())
                .map(|j| {
                    let budget = (i + 2) * (j + 2);
                    let mut best = 0.0_f64;
                    for (u, pm) in prefix_max.iter().enumerate() {
                        let max_y_bins = budget / (u + 2);
                        if max_y_bins < 2 || pm.is_empty() {
                            continue;
                        }
                        let v = (max_y_bins - 2).min(pm.len() - 1);
                        best = best.max(pm[v]);
                    }
                    best
                })
                .collect()
        })
        .collect()
}

/// Generalized mean of order `p` over positive or zero values.
///
/// `p = 0` is the geometric mean. Empty input yields 0.
fn generalized_mean(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let k = values.len() as f64;
    if p == 0.0 {
        if values.iter().any(|&v| v <= 0.0) {
            return 0.0;
        }
        let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
        (log_sum / k).exp()
    } else {
        let s: f64 = values.iter().map(|v| v.powf(p)).sum();
        (s / k).powf(1.0 / p)
    }
}

/// Generalized MIC: the order-`p` mean of the equicharacteristic matrix.
pub fn gmic(score: &Score, p: f64) -> f64 {
    let c_star: Vec<f64> = equicharacteristic(score).into_iter().flatten().collect();
    generalized_mean(&c_star, p)
}
