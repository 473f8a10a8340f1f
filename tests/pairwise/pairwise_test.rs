// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{Array2, Axis, array, stack};
use vasco::pairwise::{StatisticMatrix, statistic_matrix};
use vasco::plot::heatmap;
use vasco::{MineError, MineParameters, StatisticKind};

use crate::test_helpers::{RankEngine, generate_gaussian};

fn table() -> Array2<f64> {
    let x = generate_gaussian(200, 0.0, 1.0, 1);
    let cubed = x.mapv(|v| v * v * v);
    let noise = generate_gaussian(200, 0.0, 1.0, 2);
    stack(Axis(1), &[x.view(), cubed.view(), noise.view()]).unwrap()
}

#[test]
fn mic_matrix_over_columns() {
    let t = table();
    let m = statistic_matrix(
        t.view(),
        &["x", "x3", "noise"],
        StatisticKind::Mic,
        &MineParameters::default(),
        &RankEngine,
    )
    .unwrap();

    for i in 0..3 {
        assert_abs_diff_eq!(m.values[(i, i)], 1.0, epsilon = 1e-9);
        for j in 0..3 {
            assert_abs_diff_eq!(m.values[(i, j)], m.values[(j, i)], epsilon = 1e-12);
        }
    }
    assert_abs_diff_eq!(m.get("x", "x3").unwrap(), 1.0, epsilon = 1e-9);
    assert!(m.get("x", "noise").unwrap() < 0.5);
}

#[test]
fn constant_column_fails_the_whole_matrix() {
    let t = array![[1.0, 3.0], [2.0, 3.0], [3.0, 3.0]];
    let err = statistic_matrix(
        t.view(),
        &["a", "flat"],
        StatisticKind::Tic,
        &MineParameters::default(),
        &RankEngine,
    )
    .unwrap_err();
    assert_eq!(err, MineError::ScoreUnavailable);
}

#[test]
fn empty_table_is_rejected() {
    let t = Array2::<f64>::zeros((5, 0));
    let err = statistic_matrix(t.view(), &[], StatisticKind::Mic, &MineParameters::default(), &RankEngine)
        .unwrap_err();
    assert_eq!(err, MineError::EmptyTable);
}

#[test]
fn heatmap_renders_png() {
    let t = table();
    let m = statistic_matrix(
        t.view(),
        &["x", "x3", "noise"],
        StatisticKind::Mic,
        &MineParameters::default(),
        &RankEngine,
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mic.png");
    match heatmap(&m, "MIC", &path) {
        Ok(()) => assert!(path.exists()),
        // Text rendering needs a system font; headless machines may lack one.
        Err(MineError::Plot(msg)) => eprintln!("heatmap not rendered: {msg}"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn heatmap_of_empty_matrix_is_rejected() {
    let m = StatisticMatrix {
        kind: StatisticKind::Mic,
        labels: vec![],
        values: Array2::zeros((0, 0)),
    };
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(heatmap(&m, "empty", dir.path().join("e.png")), Err(MineError::EmptyTable));
}
