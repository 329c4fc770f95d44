use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Central configuration for the solvers in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SolverConfig {
    pub method: Method,
    pub conjugate_gradient: ConjugateGradientConfig,
    pub stationary: StationaryConfig,
    pub elimination: EliminationConfig,
}

impl SolverConfig {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}

/// Supported solution methods.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    ConjugateGradient,
    GaussJordan,
    GaussSeidel,
    Jacobi,
    #[default]
    Lu,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "cg" | "conjugate_gradient" => Ok(Method::ConjugateGradient),
            "gj" | "gauss_jordan" => Ok(Method::GaussJordan),
            "gs" | "gauss_seidel" => Ok(Method::GaussSeidel),
            "jacobi" => Ok(Method::Jacobi),
            "lu" => Ok(Method::Lu),
            _ => Err(format!(
                "Unknown solver method: {}. Expected one of: conjugate_gradient (cg), gauss_jordan (gj), gauss_seidel (gs), jacobi, lu",
                s
            )),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ConjugateGradientConfig {
    /// Iteration stops once the residual norm is no longer above this value.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for ConjugateGradientConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 30_000,
        }
    }
}

/// Thresholds shared by the Jacobi and Gauss-Seidel sweeps.
///
/// Both thresholds apply to the sum of absolute per-component changes
/// between two consecutive iterates.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct StationaryConfig {
    pub tolerance: f64,
    pub divergence_threshold: f64,
    pub max_iterations: usize,
}

impl Default for StationaryConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            divergence_threshold: 100.0,
            max_iterations: 10_000,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct EliminationConfig {
    /// Entries with an absolute value at or below this are flushed to zero.
    pub zero_tolerance: f64,
    pub zero_row_scan: ZeroRowScan,
    pub pivot_rule: PivotRule,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            zero_tolerance: 1e-12,
            zero_row_scan: ZeroRowScan::FullRow,
            pivot_rule: PivotRule::MaxAbs,
        }
    }
}

/// How Gauss-Jordan finds all-zero rows before pivoting.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRowScan {
    /// Every row is scanned in full.
    #[default]
    FullRow,
    /// Only rows whose second column is zero are candidates. Matrices with a
    /// single column are never scanned.
    CheckColumn,
}

/// How Gauss-Jordan picks the pivot row among the remaining candidates.
///
/// Both rules resolve ties toward the later row.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PivotRule {
    /// Largest magnitude in the pivot column.
    #[default]
    MaxAbs,
    /// Largest signed value in the pivot column. A zero entry beats negative
    /// candidates, so some nonsingular matrices stop on a zero pivot.
    SignedMax,
}

/// Load a solver configuration from a JSON file.
pub fn load_solver_config<P: AsRef<Path>>(path: P) -> Result<SolverConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: SolverConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
