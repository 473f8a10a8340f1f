// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One statistic over every pair of columns of a table.
//!
//! The result is the square matrix a correlation heatmap is drawn from
//! (see [`crate::plot::heatmap`]).

use std::fmt::Write;

use ndarray::{Array2, ArrayView2, Axis};

use crate::errors::{MineError, MineResult};
use crate::parameters::MineParameters;
use crate::pipeline;
use crate::problem::Problem;
use crate::statistics::StatisticKind;
use crate::traits::ScoreComputer;

/// Square matrix of one statistic, indexed by column label.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticMatrix {
    pub kind: StatisticKind,
    pub labels: Vec<String>,
    pub values: Array2<f64>,
}

impl StatisticMatrix {
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == col)?;
        Some(self.values[(i, j)])
    }

    /// CSV with a leading `col` index column, rows and columns sorted by label.
    pub fn to_csv(&self) -> String {
        let mut order: Vec<usize> = (0..self.labels.len()).collect();
        order.sort_by(|&a, &b| self.labels[a].cmp(&self.labels[b]));

        let mut out = String::from("col");
        for &j in &order {
            out.push(',');
            out.push_str(&self.labels[j]);
        }
        out.push('\n');
        for &i in &order {
            out.push_str(&self.labels[i]);
            for &j in &order {
                let _ = write!(out, ",{}", self.values[(i, j)]);
            }
            out.push('\n');
        }
        out
    }
}

/// Compute `kind` for every ordered pair of columns of `table`.
///
/// Rows of `table` are observations, columns are variables. Column `i`
/// is scored as x against column `j` as y, so asymmetric engines produce an
/// asymmetric matrix. Any pair the engine cannot score fails the whole call.
pub fn statistic_matrix<E>(
    table: ArrayView2<'_, f64>,
    labels: &[&str],
    kind: StatisticKind,
    params: &MineParameters,
    engine: &E,
) -> MineResult<StatisticMatrix>
where
    E: ScoreComputer + ?Sized,
{
    let k = table.ncols();
    if k == 0 {
        return Err(MineError::EmptyTable);
    }
    if labels.len() != k {
        return Err(MineError::ColumnCount { expected: k, got: labels.len() });
    }
    params.validate()?;

    let mut values = Array2::<f64>::zeros((k, k));
    for (i, xi) in table.axis_iter(Axis(1)).enumerate() {
        for (j, yj) in table.axis_iter(Axis(1)).enumerate() {
            let problem = Problem::new(xi.to_owned(), yj.to_owned())?;
            let stats = pipeline::score_problem(problem, params, engine)
                .inspect_err(|e| log::warn!("{} vs {}: {e}", labels[i], labels[j]))?;
            values[(i, j)] = stats.get(kind);
        }
    }
    log::debug!("computed {k}x{k} {kind} matrix");

    Ok(StatisticMatrix {
        kind,
        labels: labels.iter().map(|s| s.to_string()).collect(),
        values,
    })
}
