// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Statistics derived from a characteristic matrix.
//!
//! Each function is a pure read over a [`Score`]. [`Statistics::extract`]
//! computes all seven in one pass over the active parameters.

pub mod characteristic;
pub mod gmic;
pub mod mcn;
pub mod render;
pub mod tic;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parameters::MineParameters;
use crate::score::Score;

pub use characteristic::{mas, mev, mic};
pub use gmic::gmic;
pub use mcn::{mcn, mcn_general};
pub use tic::tic;

/// Names of the seven MINE statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticKind {
    Mic,
    Mas,
    Mev,
    Mcn,
    McnGeneral,
    Tic,
    Gmic,
}

impl StatisticKind {
    pub const ALL: [StatisticKind; 7] = [
        StatisticKind::Mic,
        StatisticKind::Mas,
        StatisticKind::Mev,
        StatisticKind::Mcn,
        StatisticKind::McnGeneral,
        StatisticKind::Tic,
        StatisticKind::Gmic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticKind::Mic => "mic",
            StatisticKind::Mas => "mas",
            StatisticKind::Mev => "mev",
            StatisticKind::Mcn => "mcn",
            StatisticKind::McnGeneral => "mcn_general",
            StatisticKind::Tic => "tic",
            StatisticKind::Gmic => "gmic",
        }
    }

    /// Compute just this statistic from a score.
    pub fn compute(&self, score: &Score, params: &MineParameters) -> f64 {
        match self {
            StatisticKind::Mic => mic(score),
            StatisticKind::Mas => mas(score),
            StatisticKind::Mev => mev(score),
            StatisticKind::Mcn => mcn(score, params.mcn_eps),
            StatisticKind::McnGeneral => mcn_general(score),
            StatisticKind::Tic => tic(score, params.tic_norm),
            StatisticKind::Gmic => gmic(score, params.gmic_p),
        }
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatisticKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatisticKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown statistic \"{s}\""))
    }
}

/// The composite result of `compute_statistics`; every field is always set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mic: f64,
    pub mas: f64,
    pub mev: f64,
    pub mcn: f64,
    pub mcn_general: f64,
    pub tic: f64,
    pub gmic: f64,
}

impl Statistics {
    pub fn extract(score: &Score, params: &MineParameters) -> Self {
        Self {
            mic: mic(score),
            mas: mas(score),
            mev: mev(score),
            mcn: mcn(score, params.mcn_eps),
            mcn_general: mcn_general(score),
            tic: tic(score, params.tic_norm),
            gmic: gmic(score, params.gmic_p),
        }
    }

    pub fn get(&self, kind: StatisticKind) -> f64 {
        match kind {
            StatisticKind::Mic => self.mic,
            StatisticKind::Mas => self.mas,
            StatisticKind::Mev => self.mev,
            StatisticKind::Mcn => self.mcn,
            StatisticKind::McnGeneral => self.mcn_general,
            StatisticKind::Tic => self.tic,
            StatisticKind::Gmic => self.gmic,
        }
    }

    /// Values in column order `(mic, mas, mev, mcn, mcn_general, tic, gmic)`.
    pub fn to_array(&self) -> [f64; 7] {
        StatisticKind::ALL.map(|k| self.get(k))
    }
}
