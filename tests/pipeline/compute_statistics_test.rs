// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};
use rstest::rstest;
use vasco::{
    ErrorKind, MineError, MineParameters, ProblemBundle, Side, Stage, build_problem,
    compute_statistics,
};

use crate::test_helpers::{FixtureEngine, RankEngine, RecordingEngine, generate_gaussian, init_logging};

fn bundle(a: &Array1<f64>, b: &Array1<f64>) -> ProblemBundle {
    build_problem(Some(a.view()), Some(b.view())).unwrap()
}

#[test]
fn monotone_nonlinear_relation_scores_high() {
    init_logging();
    let a = array![1.0, 2.0, 3.0, 4.0, 5.0];
    let b = array![1.0, 4.0, 9.0, 16.0, 25.0];
    let stats = compute_statistics(&bundle(&a, &b), &MineParameters::default(), &RankEngine).unwrap();
    assert_abs_diff_eq!(stats.mic, 1.0, epsilon = 1e-9);
    assert!(stats.mas.abs() < 1e-9);
}

#[test]
fn constant_sequence_hits_null_score() {
    let a = array![1.0, 2.0, 3.0];
    let b = array![5.0, 5.0, 5.0];
    let engine = RecordingEngine::new(RankEngine);
    let err = compute_statistics(&bundle(&a, &b), &MineParameters::default(), &engine).unwrap_err();
    assert_eq!(err, MineError::ScoreUnavailable);
    assert_eq!(err.kind(), ErrorKind::Computation);
    assert_eq!(err.failed_at(), Stage::Scored);
    assert_eq!(engine.calls(), 1);
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![2.0], vec![3.0])]
fn degenerate_sizes_reach_the_engine_unmodified(#[case] a: Vec<f64>, #[case] b: Vec<f64>) {
    let (a, b) = (Array1::from(a), Array1::from(b));
    let engine = RecordingEngine::new(RankEngine);
    let err = compute_statistics(&bundle(&a, &b), &MineParameters::default(), &engine).unwrap_err();
    assert_eq!(err, MineError::ScoreUnavailable);

    let seen = engine.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].n(), a.len());
    assert_eq!(seen[0].x().to_owned(), a);
    assert_eq!(seen[0].y().to_owned(), b);
}

#[test]
fn degenerate_sizes_succeed_when_engine_scores_them() {
    let engine = FixtureEngine(vec![vec![0.0]]);
    let a = array![1.0];
    let stats = compute_statistics(&bundle(&a, &a), &MineParameters::default(), &engine).unwrap();
    assert_eq!(stats.mic, 0.0);
    assert_eq!(stats.to_array().len(), 7);
}

#[test]
fn seven_finite_values_on_random_data() {
    let x = generate_gaussian(300, 0.0, 1.0, 42);
    let noise = generate_gaussian(300, 0.0, 0.3, 43);
    let y = x.mapv(|v| v * v) + &noise;
    let stats = compute_statistics(&bundle(&x, &y), &MineParameters::default(), &RankEngine).unwrap();
    for v in stats.to_array() {
        assert!(v.is_finite());
    }
    assert!(stats.mic >= stats.mev);
    assert!(stats.tic <= stats.mic + 1e-12); // normalised TIC is a mean of entries
    assert!(stats.gmic <= stats.mic + 1e-12);
}

#[test]
fn repeated_calls_are_identical() {
    let x = generate_gaussian(150, 1.0, 2.0, 7);
    let y = generate_gaussian(150, -1.0, 0.5, 8);
    let b = bundle(&x, &y);
    let params = MineParameters::default().with_mcn_eps(0.05).with_gmic_p(2.0);
    let first = compute_statistics(&b, &params, &RankEngine).unwrap();
    let second = compute_statistics(&b, &params, &RankEngine).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_parameters_fail_before_the_engine_runs() {
    let engine = RecordingEngine::new(RankEngine);
    let a = array![1.0, 2.0, 3.0];
    let params = MineParameters::default().with_alpha(2.0);
    let err = compute_statistics(&bundle(&a, &a), &params, &engine).unwrap_err();
    assert_eq!(err, MineError::InvalidParameters("alpha must be in (0, 1.0] or >= 4.0".into()));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(engine.calls(), 0);
}

#[test]
fn null_bundle_cannot_be_scored() {
    let a = array![1.0, 2.0, 3.0];
    let b = build_problem(None, Some(a.view())).unwrap();
    let engine = RecordingEngine::new(RankEngine);
    let err = compute_statistics(&b, &MineParameters::default(), &engine).unwrap_err();
    assert_eq!(err, MineError::AbsentSequence(Side::X));
    assert_eq!(engine.calls(), 0);
}

#[test]
fn extraction_parameters_change_only_their_statistic() {
    let engine = FixtureEngine(vec![vec![0.2, 0.4, 0.6], vec![0.5, 0.9], vec![0.3]]);
    let a = array![1.0, 2.0, 3.0, 4.0];
    let b = bundle(&a, &a);
    let base = compute_statistics(&b, &MineParameters::default(), &engine).unwrap();
    let raw_tic = compute_statistics(&b, &MineParameters::default().with_tic_norm(false), &engine).unwrap();

    assert_abs_diff_eq!(base.tic, 2.9 / 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(raw_tic.tic, 2.9, epsilon = 1e-12);
    assert_eq!(base.mic, raw_tic.mic);
    assert_eq!(base.mcn, raw_tic.mcn);
    assert_eq!(base.gmic, raw_tic.gmic);

    let loose = compute_statistics(&b, &MineParameters::default().with_mcn_eps(0.5), &engine).unwrap();
    assert!(loose.mcn < base.mcn);
    assert_eq!(loose.tic, base.tic);
}

#[test]
fn malformed_engine_output_is_a_computation_failure() {
    let engine = FixtureEngine(vec![vec![0.1, f64::INFINITY]]);
    let a = array![1.0, 2.0];
    // The fixture drops the malformed matrix, so the pipeline sees no score at all.
    let err = compute_statistics(&bundle(&a, &a), &MineParameters::default(), &engine).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Computation);
}
