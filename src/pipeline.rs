// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two entry points: bundling a problem and computing its statistics.
//!
//! A statistics computation walks
//! `Start -> ParametersValidated -> ProblemBuilt -> Scored -> Extracted -> Composed`
//! and stops at the first failing step. The problem and the score are owned
//! by the call and dropped as soon as the statistics have been read.

use std::fmt;

use ndarray::ArrayView1;

use crate::errors::{MineError, MineResult};
use crate::parameters::MineParameters;
use crate::problem::{Problem, ProblemBundle};
use crate::score::Score;
use crate::statistics::{Statistics, render};
use crate::traits::ScoreComputer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    ParametersValidated,
    ProblemBuilt,
    Scored,
    Extracted,
    Composed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Start => "start",
            Stage::ParametersValidated => "parameters validated",
            Stage::ProblemBuilt => "problem built",
            Stage::Scored => "scored",
            Stage::Extracted => "extracted",
            Stage::Composed => "composed",
        };
        f.write_str(s)
    }
}

/// Bundle two nullable arrays into a problem value.
///
/// Fails with [`MineError::LengthMismatch`] when both arrays are present
/// with different lengths; an absent array is recorded, not rejected.
pub fn build_problem(
    a: Option<ArrayView1<'_, f64>>,
    b: Option<ArrayView1<'_, f64>>,
) -> MineResult<ProblemBundle> {
    ProblemBundle::build(a, b)
}

/// Score a bundled problem and extract all seven statistics.
///
/// The parameters are validated before anything else. A `None` from the
/// engine becomes [`MineError::ScoreUnavailable`]; no partial result is ever
/// returned.
pub fn compute_statistics<E>(
    bundle: &ProblemBundle,
    params: &MineParameters,
    engine: &E,
) -> MineResult<Statistics>
where
    E: ScoreComputer + ?Sized,
{
    log::trace!("mine pipeline: {}", Stage::Start);
    params.validate()?;
    log::trace!("mine pipeline: {}", Stage::ParametersValidated);

    let problem = Problem::try_from(bundle)?;
    log::trace!("mine pipeline: {} (n = {})", Stage::ProblemBuilt, problem.n());

    let stats = score_problem(problem, params, engine)?;
    log::trace!("mine pipeline: {}", Stage::Composed);
    Ok(stats)
}

/// Run the engine on an already validated problem and read the statistics.
///
/// Takes the problem by value so it is released together with the score.
pub fn score_problem<E>(problem: Problem, params: &MineParameters, engine: &E) -> MineResult<Statistics>
where
    E: ScoreComputer + ?Sized,
{
    let score: Score = engine
        .compute_score(&problem, params)
        .ok_or(MineError::ScoreUnavailable)?;
    log::trace!("mine pipeline: {} ({} rows)", Stage::Scored, score.n());

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("{}", render::characteristic_matrix(&score));
    }

    let stats = Statistics::extract(&score, params);
    drop(score);
    drop(problem);
    log::trace!("mine pipeline: {}", Stage::Extracted);
    Ok(stats)
}
