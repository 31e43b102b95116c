//! Chip stack description.
//!
//! Dimensions are stored as unit strings exactly as authored in the
//! design file and parsed to millimeters on access.

use planarkit_core::{parse_units, UnitsError};
use serde::{Deserialize, Serialize};

fn default_center() -> String {
    "0.0mm".to_string()
}

fn default_size_x() -> String {
    "9mm".to_string()
}

fn default_size_y() -> String {
    "6mm".to_string()
}

fn default_size_z() -> String {
    "-750um".to_string()
}

fn default_holder_top() -> String {
    "890um".to_string()
}

fn default_holder_bottom() -> String {
    "1650um".to_string()
}

fn default_material() -> String {
    "silicon".to_string()
}

/// Wafer description for one chip in the design.
///
/// `size_z` is negative: the wafer extends downward from the chip
/// surface. The sample-holder heights describe the vacuum volume above
/// and below the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipSpec {
    #[serde(default = "default_center")]
    pub center_x: String,
    #[serde(default = "default_center")]
    pub center_y: String,
    #[serde(default = "default_center")]
    pub center_z: String,
    #[serde(default = "default_size_x")]
    pub size_x: String,
    #[serde(default = "default_size_y")]
    pub size_y: String,
    #[serde(default = "default_size_z")]
    pub size_z: String,
    #[serde(default = "default_holder_top")]
    pub sample_holder_top: String,
    #[serde(default = "default_holder_bottom")]
    pub sample_holder_bottom: String,
    #[serde(default = "default_material")]
    pub material: String,
}

impl Default for ChipSpec {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            center_z: default_center(),
            size_x: default_size_x(),
            size_y: default_size_y(),
            size_z: default_size_z(),
            sample_holder_top: default_holder_top(),
            sample_holder_bottom: default_holder_bottom(),
            material: default_material(),
        }
    }
}

impl ChipSpec {
    /// Chip center in millimeters: [x, y, z].
    pub fn center_mm(&self) -> Result<[f64; 3], UnitsError> {
        Ok([
            parse_units(&self.center_x)?,
            parse_units(&self.center_y)?,
            parse_units(&self.center_z)?,
        ])
    }

    /// Wafer extents in millimeters: [x, y, z].
    pub fn size_mm(&self) -> Result<[f64; 3], UnitsError> {
        Ok([
            parse_units(&self.size_x)?,
            parse_units(&self.size_y)?,
            parse_units(&self.size_z)?,
        ])
    }

    /// Chip surface elevation in millimeters.
    pub fn z_mm(&self) -> Result<f64, UnitsError> {
        parse_units(&self.center_z)
    }

    /// Sample-holder heights above and below the surface, in millimeters.
    pub fn sample_holder_mm(&self) -> Result<(f64, f64), UnitsError> {
        Ok((
            parse_units(&self.sample_holder_top)?,
            parse_units(&self.sample_holder_bottom)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wafer() {
        let chip = ChipSpec::default();
        assert_eq!(chip.center_mm().unwrap(), [0.0, 0.0, 0.0]);
        assert_eq!(chip.size_mm().unwrap(), [9.0, 6.0, -0.75]);
        assert_eq!(chip.sample_holder_mm().unwrap(), (0.89, 1.65));
        assert_eq!(chip.material, "silicon");
    }

    #[test]
    fn test_serde_fills_defaults() {
        let chip: ChipSpec = serde_json::from_str(r#"{"center_z": "1mm"}"#).unwrap();
        assert_eq!(chip.z_mm().unwrap(), 1.0);
        assert_eq!(chip.size_mm().unwrap(), [9.0, 6.0, -0.75]);
    }

    #[test]
    fn test_bad_dimension_surfaces_units_error() {
        let chip = ChipSpec {
            size_x: "wide".to_string(),
            ..ChipSpec::default()
        };
        assert!(chip.size_mm().is_err());
    }
}
