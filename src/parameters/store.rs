// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use serde_json::Value;

use super::{
    DEFAULT_ALPHA, DEFAULT_C, DEFAULT_GMIC_P, DEFAULT_MCN_EPS, DEFAULT_TIC_NORM, Estimator,
    MineParameters,
};
use crate::errors::{MineError, MineResult};

/// Privilege of the session changing a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Superuser,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingType {
    /// Real with inclusive bounds.
    Real { min: f64, max: f64 },
    Bool,
    Enum(&'static [&'static str]),
}

/// Static description of one registered setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: SettingType,
    pub default: &'static str,
}

const REAL_NON_NEGATIVE: SettingType = SettingType::Real { min: 0.0, max: f64::INFINITY };

static SETTINGS: [SettingInfo; 6] = [
    SettingInfo {
        name: "vasco.mine_c",
        description: "MINE c variable",
        kind: REAL_NON_NEGATIVE,
        default: "15",
    },
    SettingInfo {
        name: "vasco.mine_alpha",
        description: "MINE alpha variable",
        kind: REAL_NON_NEGATIVE,
        default: "0.6",
    },
    SettingInfo {
        name: "vasco.mic_estimator",
        description: "Algo to use for the estimator. Available are: ApproxMIC or MIC_e",
        kind: SettingType::Enum(&["ApproxMIC", "MIC_e"]),
        default: "ApproxMIC",
    },
    SettingInfo {
        name: "vasco.mine_mcn_eps",
        description: "MINE eps used for mcn",
        kind: REAL_NON_NEGATIVE,
        default: "0",
    },
    SettingInfo {
        name: "vasco.mine_tic_norm",
        description: "MINE normalize for TIC",
        kind: SettingType::Bool,
        default: "on",
    },
    SettingInfo {
        name: "vasco.mine_gmic_p",
        description: "MINE p used for gmic",
        kind: REAL_NON_NEGATIVE,
        default: "0",
    },
];

/// Registry of the `vasco.*` settings backing the active [`MineParameters`].
///
/// Every setting is superuser-only. Values are range-checked on assignment;
/// the cross-field estimator check runs when a snapshot is taken with
/// [`validated`](Self::validated), so a store may temporarily hold a
/// combination the engine would refuse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    current: MineParameters,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: MineParameters) -> Self {
        Self { current: parameters }
    }

    /// Load startup configuration from a JSON object keyed by setting name.
    ///
    /// Keys may be given with or without the `vasco.` prefix. Values may be
    /// JSON numbers, booleans or strings; they go through the same parsing
    /// and range checks as [`set`](Self::set).
    pub fn from_json(config: &str) -> MineResult<Self> {
        let parsed: BTreeMap<String, Value> = serde_json::from_str(config)
            .map_err(|e| MineError::invalid_value("configuration", config, e.to_string()))?;
        let mut store = Self::new();
        for (key, value) in parsed {
            let raw = match value {
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(MineError::invalid_value(
                        &key,
                        &other.to_string(),
                        "expected a number, boolean or string",
                    ));
                }
            };
            store.set(&key, &raw, Role::Superuser)?;
        }
        log::debug!("loaded MINE parameters from configuration: {:?}", store.current);
        Ok(store)
    }

    pub fn settings() -> &'static [SettingInfo] {
        &SETTINGS
    }

    /// Current parameter set, without validation.
    pub fn parameters(&self) -> MineParameters {
        self.current
    }

    /// Current parameter set, checked the way the scoring engine checks it.
    pub fn validated(&self) -> MineResult<MineParameters> {
        self.current.validate()?;
        Ok(self.current)
    }

    pub fn set(&mut self, name: &str, value: &str, role: Role) -> MineResult<()> {
        let info = lookup(name)?;
        if role != Role::Superuser {
            return Err(MineError::PermissionDenied(info.name.to_string()));
        }
        let mut next = self.current;
        match info.name {
            "vasco.mine_c" => next.c = parse_real(info, value)?,
            "vasco.mine_alpha" => next.alpha = parse_real(info, value)?,
            "vasco.mic_estimator" => {
                next.estimator = value
                    .parse::<Estimator>()
                    .map_err(|reason| MineError::invalid_value(info.name, value, reason))?
            }
            "vasco.mine_mcn_eps" => next.mcn_eps = parse_real(info, value)?,
            "vasco.mine_tic_norm" => next.tic_norm = parse_bool(info, value)?,
            "vasco.mine_gmic_p" => next.gmic_p = parse_real(info, value)?,
            _ => unreachable!("setting table and assignment arms out of sync"),
        }
        log::debug!("{} = {}", info.name, value);
        self.current = next;
        Ok(())
    }

    /// Render the current value of a setting the way the host's `SHOW` does.
    pub fn show(&self, name: &str) -> MineResult<String> {
        let info = lookup(name)?;
        let p = &self.current;
        Ok(match info.name {
            "vasco.mine_c" => p.c.to_string(),
            "vasco.mine_alpha" => p.alpha.to_string(),
            "vasco.mic_estimator" => p.estimator.to_string(),
            "vasco.mine_mcn_eps" => p.mcn_eps.to_string(),
            "vasco.mine_tic_norm" => (if p.tic_norm { "on" } else { "off" }).to_string(),
            "vasco.mine_gmic_p" => p.gmic_p.to_string(),
            _ => unreachable!("setting table and show arms out of sync"),
        })
    }

    pub fn reset(&mut self, name: &str, role: Role) -> MineResult<()> {
        let info = lookup(name)?;
        if role != Role::Superuser {
            return Err(MineError::PermissionDenied(info.name.to_string()));
        }
        let d = MineParameters::default();
        let p = &mut self.current;
        match info.name {
            "vasco.mine_c" => p.c = DEFAULT_C,
            "vasco.mine_alpha" => p.alpha = DEFAULT_ALPHA,
            "vasco.mic_estimator" => p.estimator = d.estimator,
            "vasco.mine_mcn_eps" => p.mcn_eps = DEFAULT_MCN_EPS,
            "vasco.mine_tic_norm" => p.tic_norm = DEFAULT_TIC_NORM,
            "vasco.mine_gmic_p" => p.gmic_p = DEFAULT_GMIC_P,
            _ => unreachable!("setting table and reset arms out of sync"),
        }
        Ok(())
    }

    pub fn reset_all(&mut self, role: Role) -> MineResult<()> {
        if role != Role::Superuser {
            return Err(MineError::PermissionDenied("all".to_string()));
        }
        self.current = MineParameters::default();
        Ok(())
    }
}

/// Resolve a setting by name; the `vasco.` prefix is optional and case is ignored.
fn lookup(name: &str) -> MineResult<&'static SettingInfo> {
    let name = name.trim();
    SETTINGS
        .iter()
        .find(|s| {
            s.name.eq_ignore_ascii_case(name)
                || s.name
                    .strip_prefix("vasco.")
                    .is_some_and(|short| short.eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| MineError::UnknownParameter(name.to_string()))
}

fn parse_real(info: &SettingInfo, value: &str) -> MineResult<f64> {
    let SettingType::Real { min, max } = info.kind else {
        return Err(MineError::invalid_value(info.name, value, "not a real-valued setting"));
    };
    let v: f64 = value
        .trim()
        .parse()
        .map_err(|_| MineError::invalid_value(info.name, value, "requires a numeric value"))?;
    if v.is_nan() || v < min || v > max {
        return Err(MineError::invalid_value(
            info.name,
            value,
            format!("valid range is [{min} .. {max}]"),
        ));
    }
    Ok(v)
}

fn parse_bool(info: &SettingInfo, value: &str) -> MineResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "t" | "y" | "1" => Ok(true),
        "off" | "false" | "no" | "f" | "n" | "0" => Ok(false),
        _ => Err(MineError::invalid_value(info.name, value, "requires a Boolean value")),
    }
}
