// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use vasco::{ErrorKind, MineError, Problem, build_problem};

#[rstest]
#[case(vec![], vec![])] // empty
#[case(vec![7.5], vec![-1.0])] // single observation
#[case(vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![1.0, 4.0, 9.0, 16.0, 25.0])]
#[case(vec![3.0, 3.0, 1.0], vec![0.0, -0.0, 2.0])] // ties and signed zero
fn equal_lengths_are_copied_in_order(#[case] a: Vec<f64>, #[case] b: Vec<f64>) {
    let (xa, yb) = (Array1::from(a.clone()), Array1::from(b.clone()));
    let bundle = build_problem(Some(xa.view()), Some(yb.view())).unwrap();
    assert_eq!(bundle.n, Some(a.len()));
    assert_eq!(bundle.x.as_ref().unwrap().to_vec(), a);
    assert_eq!(bundle.y.as_ref().unwrap().to_vec(), b);
    assert!(!bundle.is_null());

    let problem = Problem::try_from(&bundle).unwrap();
    assert_eq!(problem.n(), a.len());
    assert_eq!(problem.x().to_vec(), a);
    assert_eq!(problem.y().to_vec(), b);
}

#[test]
fn mismatched_lengths_report_both() {
    let a = array![1.0, 2.0, 3.0];
    let b = array![1.0, 2.0];
    let err = build_problem(Some(a.view()), Some(b.view())).unwrap_err();
    assert_eq!(err, MineError::LengthMismatch(3, 2));
    assert_eq!(err.kind(), ErrorKind::DataShape);
    assert_eq!(err.to_string(), "different number of elements in arrays 3 and 2");
}

#[test]
fn random_length_pairs() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let la = rng.gen_range(0..40usize);
        let lb = rng.gen_range(0..40usize);
        let a: Array1<f64> = (0..la).map(|_| rng.gen_range(-5.0..5.0)).collect();
        let b: Array1<f64> = (0..lb).map(|_| rng.gen_range(-5.0..5.0)).collect();
        match build_problem(Some(a.view()), Some(b.view())) {
            Ok(bundle) => {
                assert_eq!(la, lb);
                assert_eq!(bundle.n, Some(la));
                assert_eq!(bundle.x.unwrap(), a);
                assert_eq!(bundle.y.unwrap(), b);
            }
            Err(e) => {
                assert_ne!(la, lb);
                assert_eq!(e, MineError::LengthMismatch(la, lb));
            }
        }
    }
}

#[rstest]
#[case(true, false)]
#[case(false, true)]
#[case(true, true)]
fn absent_inputs_are_flagged(#[case] a_null: bool, #[case] b_null: bool) {
    let a = array![1.0, 2.0, 3.0];
    // Different length on purpose: the check only applies when both are present.
    let b = array![4.0, 5.0];
    let bundle = build_problem(
        (!a_null).then(|| a.view()),
        (!b_null).then(|| b.view()),
    )
    .unwrap();
    assert!(bundle.is_null());
    assert_eq!(bundle.n, None);
    assert_eq!(bundle.x_is_null(), a_null);
    assert_eq!(bundle.y_is_null(), b_null);
    if !a_null {
        assert_eq!(bundle.x.unwrap(), a);
    }
}
