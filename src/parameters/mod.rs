// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Estimator parameters and the process-wide settings registry.
//!
//! [`MineParameters`] is the plain value handed to the scoring engine and the
//! statistics extractor. [`ParameterStore`] holds the current value behind the
//! `vasco.*` setting names and hands out validated snapshots.

pub mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{MineError, MineResult};

pub use store::{ParameterStore, Role, SettingInfo, SettingType};

pub const DEFAULT_ALPHA: f64 = 0.6;
pub const DEFAULT_C: f64 = 15.0;
pub const DEFAULT_MCN_EPS: f64 = 0.0;
pub const DEFAULT_TIC_NORM: bool = true;
pub const DEFAULT_GMIC_P: f64 = 0.0;

/// Characteristic-matrix estimator used by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Estimator {
    #[default]
    #[serde(rename = "ApproxMIC")]
    ApproxMic,
    #[serde(rename = "MIC_e")]
    MicE,
}

impl Estimator {
    pub const ALL: [Estimator; 2] = [Estimator::ApproxMic, Estimator::MicE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Estimator::ApproxMic => "ApproxMIC",
            Estimator::MicE => "MIC_e",
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Estimator {
    type Err = String;

    /// Enum settings match case-insensitively, as the host does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Estimator::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Estimator::ALL.iter().map(Estimator::as_str).collect();
                format!("available values: {}", names.join(", "))
            })
    }
}

/// Parameter set for one MINE computation.
///
/// `alpha`, `c` and `estimator` drive the scoring engine; `mcn_eps`,
/// `tic_norm` and `gmic_p` are only read when extracting MCN, TIC and GMIC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MineParameters {
    pub alpha: f64,
    pub c: f64,
    pub estimator: Estimator,
    pub mcn_eps: f64,
    pub tic_norm: bool,
    pub gmic_p: f64,
}

impl Default for MineParameters {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            c: DEFAULT_C,
            estimator: Estimator::default(),
            mcn_eps: DEFAULT_MCN_EPS,
            tic_norm: DEFAULT_TIC_NORM,
            gmic_p: DEFAULT_GMIC_P,
        }
    }
}

impl MineParameters {
    pub fn with_alpha(mut self, alpha: f64) -> Self { self.alpha = alpha; self }
    pub fn with_c(mut self, c: f64) -> Self { self.c = c; self }
    pub fn with_estimator(mut self, estimator: Estimator) -> Self { self.estimator = estimator; self }
    pub fn with_mcn_eps(mut self, mcn_eps: f64) -> Self { self.mcn_eps = mcn_eps; self }
    pub fn with_tic_norm(mut self, tic_norm: bool) -> Self { self.tic_norm = tic_norm; self }
    pub fn with_gmic_p(mut self, gmic_p: f64) -> Self { self.gmic_p = gmic_p; self }

    /// Check the parameter set, returning a diagnostic when it is unusable.
    ///
    /// `alpha` must lie in `(0, 1]` (exponent on `n` for the grid-size bound)
    /// or be at least 4 (taken as the bound itself). `c` must be positive.
    /// Every real must be finite and the extraction knobs non-negative.
    pub fn check_parameters(&self) -> Option<String> {
        let reals = [
            ("alpha", self.alpha),
            ("c", self.c),
            ("mcn_eps", self.mcn_eps),
            ("gmic_p", self.gmic_p),
        ];
        if let Some((name, value)) = reals.iter().find(|(_, v)| !v.is_finite()) {
            return Some(format!("{name} must be finite, got {value}"));
        }
        if self.alpha <= 0.0 || (self.alpha > 1.0 && self.alpha < 4.0) {
            return Some("alpha must be in (0, 1.0] or >= 4.0".to_string());
        }
        if self.c <= 0.0 {
            return Some("c must be > 0.0".to_string());
        }
        if self.mcn_eps < 0.0 {
            return Some("mcn_eps must be >= 0.0".to_string());
        }
        if self.gmic_p < 0.0 {
            return Some("gmic_p must be >= 0.0".to_string());
        }
        None
    }

    /// [`check_parameters`](Self::check_parameters) as a configuration error.
    pub fn validate(&self) -> MineResult<()> {
        match self.check_parameters() {
            Some(msg) => Err(MineError::InvalidParameters(msg)),
            None => Ok(()),
        }
    }
}
