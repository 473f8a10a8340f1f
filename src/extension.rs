// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::ArrayView1;

use crate::errors::MineResult;
use crate::parameters::{ParameterStore, Role};
use crate::pipeline;
use crate::problem::ProblemBundle;
use crate::statistics::Statistics;
use crate::traits::ScoreComputer;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A loaded instance of the extension.
///
/// Owns the settings registry and the scoring engine. Reconfiguration needs
/// `&mut self`, so it can never overlap a computation borrowing `&self`.
/// Dropping the handle is the unload.
pub struct Vasco<E: ScoreComputer> {
    store: ParameterStore,
    engine: E,
}

impl<E: ScoreComputer> Vasco<E> {
    pub fn load(engine: E) -> Self {
        Self::load_with(engine, ParameterStore::new())
    }

    pub fn load_with(engine: E, store: ParameterStore) -> Self {
        log::info!("vasco {VERSION} loaded");
        Self { store, engine }
    }

    pub fn settings(&self) -> &ParameterStore {
        &self.store
    }

    pub fn set(&mut self, name: &str, value: &str, role: Role) -> MineResult<()> {
        self.store.set(name, value, role)
    }

    pub fn show(&self, name: &str) -> MineResult<String> {
        self.store.show(name)
    }

    pub fn reset(&mut self, name: &str, role: Role) -> MineResult<()> {
        self.store.reset(name, role)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// `build_problem(a, b)`.
    pub fn build_problem(
        &self,
        a: Option<ArrayView1<'_, f64>>,
        b: Option<ArrayView1<'_, f64>>,
    ) -> MineResult<ProblemBundle> {
        pipeline::build_problem(a, b)
    }

    /// `compute_statistics(problem)` under the current settings.
    pub fn compute_statistics(&self, problem: &ProblemBundle) -> MineResult<Statistics> {
        let params = self.store.validated()?;
        pipeline::compute_statistics(problem, &params, &self.engine)
    }
}

impl<E: ScoreComputer> Drop for Vasco<E> {
    fn drop(&mut self) {
        log::info!("Goodbye from vasco {VERSION}");
    }
}
