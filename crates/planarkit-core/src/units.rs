//! Length-unit parsing and formatting.
//!
//! Design files carry lengths as strings with a unit suffix ("9mm",
//! "-750um"). The modeler works in millimeters, so everything parses
//! down to an f64 in mm.

use crate::error::UnitsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit accepted in design files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Nanometers
    Nm,
    /// Micrometers
    Um,
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Meters
    M,
    /// Mils (thousandths of an inch)
    Mil,
    /// Inches
    In,
}

impl Unit {
    /// Conversion factor from this unit to millimeters.
    pub fn factor_mm(self) -> f64 {
        match self {
            Self::Nm => 1e-6,
            Self::Um => 1e-3,
            Self::Mm => 1.0,
            Self::Cm => 10.0,
            Self::M => 1000.0,
            Self::Mil => 0.0254,
            Self::In => 25.4,
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Mm
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nm => write!(f, "nm"),
            Self::Um => write!(f, "um"),
            Self::Mm => write!(f, "mm"),
            Self::Cm => write!(f, "cm"),
            Self::M => write!(f, "m"),
            Self::Mil => write!(f, "mil"),
            Self::In => write!(f, "in"),
        }
    }
}

impl FromStr for Unit {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nm" => Ok(Self::Nm),
            "um" | "\u{b5}m" => Ok(Self::Um),
            "mm" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "m" => Ok(Self::M),
            "mil" => Ok(Self::Mil),
            "in" | "inch" => Ok(Self::In),
            _ => Err(UnitsError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// Parse a length string to millimeters
///
/// Accepts a magnitude with an optional unit suffix: "7um", "-750um",
/// "9 mm", "0.001m". Bare numbers are taken as millimeters.
///
/// * `input` - String to parse
pub fn parse_units(input: &str) -> Result<f64, UnitsError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UnitsError::Empty);
    }

    let split = input
        .char_indices()
        .find(|(_, c)| c.is_alphabetic() || *c == '\u{b5}')
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    let (number, suffix) = input.split_at(split);
    let number = number.trim();

    let magnitude = number
        .parse::<f64>()
        .map_err(|_| UnitsError::InvalidNumber {
            input: input.to_string(),
        })?;

    if suffix.is_empty() {
        return Ok(magnitude);
    }
    let unit = Unit::from_str(suffix)?;
    Ok(magnitude * unit.factor_mm())
}

/// Format a length in millimeters for display
///
/// * `value_mm` - Value in millimeters
pub fn format_length(value_mm: f64) -> String {
    format!("{:.3}mm", value_mm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffixed() {
        assert_eq!(parse_units("9mm").unwrap(), 9.0);
        assert_eq!(parse_units("7um").unwrap(), 0.007);
        assert_eq!(parse_units("-750um").unwrap(), -0.75);
        assert_eq!(parse_units("0.001m").unwrap(), 1.0);
        assert_eq!(parse_units("1in").unwrap(), 25.4);
        assert_eq!(parse_units("10mil").unwrap(), 0.254);
    }

    #[test]
    fn test_parse_bare_number_is_mm() {
        assert_eq!(parse_units("2.5").unwrap(), 2.5);
        assert_eq!(parse_units("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_units(" 890 um ").unwrap(), 0.89);
    }

    #[test]
    fn test_parse_micro_sign() {
        assert_eq!(parse_units("5\u{b5}m").unwrap(), 0.005);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_units("").unwrap_err(), UnitsError::Empty);
        assert!(matches!(
            parse_units("abc"),
            Err(UnitsError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_units("10furlongs"),
            Err(UnitsError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_unit_roundtrip() {
        for unit in [Unit::Nm, Unit::Um, Unit::Mm, Unit::Cm, Unit::M, Unit::Mil, Unit::In] {
            assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_unit_serde() {
        assert_eq!(serde_json::from_str::<Unit>("\"um\"").unwrap(), Unit::Um);
        assert_eq!(serde_json::to_string(&Unit::Mil).unwrap(), "\"mil\"");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(9.0), "9.000mm");
        assert_eq!(format_length(0.0254), "0.025mm");
    }
}
