//! Ice sheet constants and time periods.
//!
//! The physical constants are fixed at process start and never change. Both
//! enumerators are closed sets and parse case-insensitively from request strings.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{IceSheetError, Result, VALID_PERIODS};

/// Supported ice sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IceSheetType {
    Greenland,
    Antarctica,
}

impl IceSheetType {
    /// Every ice sheet, in declaration order
    pub const ALL: [IceSheetType; 2] = [IceSheetType::Greenland, IceSheetType::Antarctica];

    /// Enumerator name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            IceSheetType::Greenland => "GREENLAND",
            IceSheetType::Antarctica => "ANTARCTICA",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            IceSheetType::Greenland => "Greenland",
            IceSheetType::Antarctica => "Antarctica",
        }
    }
}

impl fmt::Display for IceSheetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IceSheetType {
    type Err = IceSheetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GREENLAND" => Ok(IceSheetType::Greenland),
            "ANTARCTICA" => Ok(IceSheetType::Antarctica),
            _ => Err(IceSheetError::InvalidIceSheet {
                value: s.to_string(),
            }),
        }
    }
}

/// Projection horizons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimePeriod {
    Annual,
    Decade,
    Century,
}

impl TimePeriod {
    /// Every period, shortest first
    pub const ALL: [TimePeriod; 3] = [TimePeriod::Annual, TimePeriod::Decade, TimePeriod::Century];

    /// Length of the period in seconds, using 365-day years
    pub fn seconds(&self) -> u64 {
        match self {
            TimePeriod::Annual => 31_536_000,
            TimePeriod::Decade => 315_360_000,
            TimePeriod::Century => 3_153_600_000,
        }
    }

    /// Enumerator name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Annual => "ANNUAL",
            TimePeriod::Decade => "DECADE",
            TimePeriod::Century => "CENTURY",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            TimePeriod::Annual => "Annual",
            TimePeriod::Decade => "Decade",
            TimePeriod::Century => "Century",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = IceSheetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ANNUAL" => Ok(TimePeriod::Annual),
            "DECADE" => Ok(TimePeriod::Decade),
            "CENTURY" => Ok(TimePeriod::Century),
            _ => Err(IceSheetError::InvalidParameter {
                param: "period".to_string(),
                message: format!("Invalid time period: '{}'. Valid values: {}", s, VALID_PERIODS),
            }),
        }
    }
}

/// Physical constants for one ice sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IceSheetConstants {
    /// Total area in km²
    pub size_km2: f64,
    /// Signed melting rate in kg/s (negative means loss)
    pub melting_rate_kg_per_second: f64,
    /// Ambient temperature in °C
    pub ambient_temperature_c: f64,
    /// Display name
    pub name: &'static str,
}

static BASE_DATA: Lazy<HashMap<IceSheetType, IceSheetConstants>> = Lazy::new(|| {
    HashMap::from([
        (
            IceSheetType::Antarctica,
            IceSheetConstants {
                size_km2: 14_000_000.0,
                melting_rate_kg_per_second: -26.9982036,
                ambient_temperature_c: -57.0,
                name: "Antarctica",
            },
        ),
        (
            IceSheetType::Greenland,
            IceSheetConstants {
                size_km2: 4_380_000.0,
                melting_rate_kg_per_second: -4.364067,
                ambient_temperature_c: -29.45,
                name: "Greenland",
            },
        ),
    ])
});

/// Look up the constants for an ice sheet
pub fn get_base_data(ice_sheet: IceSheetType) -> Result<&'static IceSheetConstants> {
    BASE_DATA
        .get(&ice_sheet)
        .ok_or_else(|| IceSheetError::UnknownIceSheetType(ice_sheet.to_string()))
}

/// Convert a period to seconds for the mass-loss formula
pub fn period_to_seconds(period: TimePeriod) -> f64 {
    period.seconds() as f64
}
