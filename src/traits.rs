// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::parameters::MineParameters;
use crate::problem::Problem;
use crate::score::Score;

/// Scoring engine computing the characteristic matrix of a problem.
///
/// Returning `None` means the engine could not produce a score for these
/// inputs (for instance a sequence without variance). Callers treat that as
/// a failed computation, never as an empty result.
pub trait ScoreComputer {
    fn compute_score(&self, problem: &Problem, parameters: &MineParameters) -> Option<Score>;
}

impl<F> ScoreComputer for F
where
    F: Fn(&Problem, &MineParameters) -> Option<Score>,
{
    fn compute_score(&self, problem: &Problem, parameters: &MineParameters) -> Option<Score> {
        self(problem, parameters)
    }
}
