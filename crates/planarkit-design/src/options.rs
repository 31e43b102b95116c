//! Renderer options.

use crate::error::DesignError;
use planarkit_core::parse_units;
use serde::{Deserialize, Serialize};

fn default_lj() -> f64 {
    10.0
}

fn default_max_mesh_length() -> String {
    "7um".to_string()
}

fn default_precision() -> i32 {
    9
}

/// Options controlling how a design is rendered into the modeler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererOptions {
    /// Default Josephson inductance for junction rows, in nanohenries.
    #[serde(default = "default_lj")]
    pub lj_nh: f64,
    /// Default junction capacitance in femtofarads. Must stay 0 for
    /// energy-participation analysis.
    #[serde(default)]
    pub cj_ff: f64,
    /// Default junction resistance in ohms. Must stay 0 for
    /// energy-participation analysis.
    #[serde(default)]
    pub rj_ohms: f64,
    /// Maximum mesh length over junction elements, as a unit string.
    #[serde(default = "default_max_mesh_length")]
    pub max_mesh_length_jj: String,
    /// Decimal digits used by fillet-eligibility comparisons.
    #[serde(default = "default_precision")]
    pub precision: i32,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            lj_nh: default_lj(),
            cj_ff: 0.0,
            rj_ohms: 0.0,
            max_mesh_length_jj: default_max_mesh_length(),
            precision: default_precision(),
        }
    }
}

impl RendererOptions {
    /// Validate option values before a render pass.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.cj_ff != 0.0 {
            return Err(DesignError::InvalidOptions {
                reason: format!("cj_ff must be 0 for analysis, got {}", self.cj_ff),
            });
        }
        if self.rj_ohms != 0.0 {
            return Err(DesignError::InvalidOptions {
                reason: format!("rj_ohms must be 0 for analysis, got {}", self.rj_ohms),
            });
        }
        if !(0..=15).contains(&self.precision) {
            return Err(DesignError::InvalidOptions {
                reason: format!("precision must be within 0..=15, got {}", self.precision),
            });
        }
        parse_units(&self.max_mesh_length_jj).map_err(|source| DesignError::InvalidDimension {
            field: "options.max_mesh_length_jj".to_string(),
            source,
        })?;
        Ok(())
    }
}
