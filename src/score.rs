// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::errors::{MineError, MineResult};

/// Characteristic matrix produced by the scoring engine.
///
/// Row `i` holds the scores of grids with `i + 2` bins on x; entry `j` of that
/// row is the grid with `j + 2` bins on y. Rows may differ in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    rows: Vec<Array1<f64>>,
}

impl Score {
    /// Wrap engine output, rejecting NaN or infinite entries.
    pub fn new(rows: Vec<Array1<f64>>) -> MineResult<Self> {
        for (i, row) in rows.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(MineError::MalformedScore { row: i, col: j });
            }
        }
        Ok(Self { rows })
    }

    pub fn from_vecs(rows: Vec<Vec<f64>>) -> MineResult<Self> {
        Self::new(rows.into_iter().map(Array1::from).collect())
    }

    /// Number of rows.
    pub fn n(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `i`.
    pub fn m(&self, i: usize) -> usize {
        self.rows.get(i).map_or(0, |r| r.len())
    }

    pub fn rows(&self) -> &[Array1<f64>] {
        &self.rows
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|r| r.get(j)).copied()
    }

    pub fn num_cells(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// Iterate `(i, j, value)` over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &v)| (i, j, v)))
    }
}
