//! Mass-loss projections and detail statistics.
//!
//! The projection is linear: `mass_loss = seconds_in_period * |melting_rate|` and
//! `final_size = initial_size - mass_loss`. Values are returned as raw `f64`s.

use serde::Serialize;
use tracing::{error, info};

use crate::error::Result;
use crate::metrics::RequestMetrics;
use crate::model::{get_base_data, period_to_seconds, IceSheetType, TimePeriod};

/// Result of a mass-loss projection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MassLossResult {
    /// Signed melting rate in kg/s, as stored in the constants
    pub melting_rate: f64,
    /// Mass lost over the period in kg (seconds × |melting rate|)
    pub mass_loss: f64,
    /// Size at the start of the period in km²
    pub initial_size: f64,
    /// `initial_size - mass_loss`
    pub final_size: f64,
    /// Display name, e.g. "Greenland"
    pub ice_sheet_name: String,
    pub period: TimePeriod,
}

/// Current state of an ice sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailStatistics {
    pub current_size: f64,
    pub ambient_temperature: f64,
    pub melting_rate: f64,
}

/// Project the mass loss of `ice_sheet` over `period`.
///
/// Inputs are trusted to be validated by the caller. The request is counted in
/// `metrics` for its whole duration.
pub fn calculate_mass_loss(
    metrics: &RequestMetrics,
    ice_sheet: IceSheetType,
    period: TimePeriod,
) -> Result<MassLossResult> {
    let guard = metrics.begin();
    let sequence = guard.sequence();

    info!(sequence = sequence, "Starting calculation request");

    let result = project(ice_sheet, period);

    match &result {
        Ok(_) => info!(sequence = sequence, "Completed calculation request"),
        Err(e) => error!(sequence = sequence, error = %e, "Calculation failed"),
    }

    result
}

fn project(ice_sheet: IceSheetType, period: TimePeriod) -> Result<MassLossResult> {
    let base_data = get_base_data(ice_sheet)?;
    let seconds = period_to_seconds(period);

    let mass_loss = seconds * base_data.melting_rate_kg_per_second.abs();
    let initial_size = base_data.size_km2;

    Ok(MassLossResult {
        melting_rate: base_data.melting_rate_kg_per_second,
        mass_loss,
        initial_size,
        final_size: calculate_final_mass(initial_size, mass_loss),
        ice_sheet_name: base_data.name.to_string(),
        period,
    })
}

/// Size left after `mass_loss` is removed
pub fn calculate_final_mass(initial_size: f64, mass_loss: f64) -> f64 {
    initial_size - mass_loss
}

/// Current size, ambient temperature and melting rate of `ice_sheet`
pub fn detail_statistics(ice_sheet: IceSheetType) -> Result<DetailStatistics> {
    let base_data = get_base_data(ice_sheet)?;
    Ok(DetailStatistics {
        current_size: base_data.size_km2,
        ambient_temperature: base_data.ambient_temperature_c,
        melting_rate: base_data.melting_rate_kg_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_holds_for_all_pairs() {
        let metrics = RequestMetrics::new();

        for ice_sheet in IceSheetType::ALL {
            for period in TimePeriod::ALL {
                let base = get_base_data(ice_sheet).unwrap();
                let result = calculate_mass_loss(&metrics, ice_sheet, period).unwrap();

                let expected_loss = period.seconds() as f64 * base.melting_rate_kg_per_second.abs();
                assert_eq!(result.mass_loss, expected_loss);
                assert_eq!(result.initial_size, base.size_km2);
                assert_eq!(result.final_size, base.size_km2 - expected_loss);
                assert_eq!(result.ice_sheet_name, base.name);
                assert_eq!(result.period, period);
            }
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 6);
        assert_eq!(snapshot.in_flight, 0);
    }

    #[test]
    fn test_melting_rate_keeps_sign() {
        let metrics = RequestMetrics::new();
        let result =
            calculate_mass_loss(&metrics, IceSheetType::Greenland, TimePeriod::Annual).unwrap();

        assert_eq!(result.melting_rate, -4.364067);
        assert_eq!(result.mass_loss, 31_536_000.0 * 4.364067);
        assert!(result.mass_loss > 0.0);
        assert_eq!(result.ice_sheet_name, "Greenland");
    }

    #[test]
    fn test_result_serialization() {
        let metrics = RequestMetrics::new();
        let result =
            calculate_mass_loss(&metrics, IceSheetType::Antarctica, TimePeriod::Century).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["period"], "CENTURY");
        assert_eq!(json["iceSheetName"], "Antarctica");
        assert_eq!(json["meltingRate"], -26.9982036);
        assert!(json.get("massLoss").is_some());
        assert!(json.get("initialSize").is_some());
        assert!(json.get("finalSize").is_some());
    }

    #[test]
    fn test_detail_statistics() {
        let details = detail_statistics(IceSheetType::Antarctica).unwrap();
        assert_eq!(
            details,
            DetailStatistics {
                current_size: 14_000_000.0,
                ambient_temperature: -57.0,
                melting_rate: -26.9982036,
            }
        );

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["currentSize"], 14_000_000.0);
        assert_eq!(json["ambientTemperature"], -57.0);
    }

    #[test]
    fn test_calculate_final_mass() {
        assert_eq!(calculate_final_mass(100.0, 40.0), 60.0);
        assert_eq!(calculate_final_mass(100.0, 150.0), -50.0);
    }
}
