// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # vasco
//!
//! Maximal-information-based nonparametric exploration (MINE) statistics over
//! paired numeric sequences: MIC, MAS, MEV, MCN, MCN_general, TIC and GMIC.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use vasco::{MineParameters, Problem, Score, Vasco};
//!
//! // Any `Fn(&Problem, &MineParameters) -> Option<Score>` is a scoring engine.
//! let engine = |_: &Problem, _: &MineParameters| -> Option<Score> {
//!     Score::from_vecs(vec![vec![0.4, 0.9], vec![0.8]]).ok()
//! };
//! let vasco = Vasco::load(engine);
//!
//! let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = array![1.0, 4.0, 9.0, 16.0, 25.0];
//! let problem = vasco.build_problem(Some(x.view()), Some(y.view())).unwrap();
//! let stats = vasco.compute_statistics(&problem).unwrap();
//! assert_eq!(stats.mic, 0.9);
//! ```
//!
//! ## Pipeline
//!
//! | Step | Module | Fails with |
//! |------|--------|------------|
//! | Validate parameters | [`parameters`] | configuration error |
//! | Build problem | [`problem`] | data-shape error |
//! | Score | [`traits::ScoreComputer`] | computation error |
//! | Extract statistics | [`statistics`] | never |
//!
//! The characteristic-matrix estimator itself is not part of this crate; it
//! is injected through [`ScoreComputer`].
//!
//! ## Settings
//!
//! [`ParameterStore`] exposes the estimator parameters under the names
//! `vasco.mine_alpha`, `vasco.mine_c`, `vasco.mic_estimator`,
//! `vasco.mine_mcn_eps`, `vasco.mine_tic_norm` and `vasco.mine_gmic_p`.
//! Only superusers may change them.

pub mod errors;
pub mod extension;
pub mod pairwise;
pub mod parameters;
pub mod pipeline;
pub mod plot;
pub mod problem;
pub mod score;
pub mod statistics;
pub mod traits;

pub use errors::{ErrorKind, MineError, MineResult, Side};
pub use extension::{VERSION, Vasco};
pub use parameters::{Estimator, MineParameters, ParameterStore, Role};
pub use pipeline::{Stage, build_problem, compute_statistics};
pub use problem::{Problem, ProblemBundle};
pub use score::Score;
pub use statistics::{StatisticKind, Statistics};
pub use traits::ScoreComputer;
