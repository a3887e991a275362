//! Print the ice sheet constants and every mass-loss projection as a table.

use std::error::Error;

use icesheet::{calculate_mass_loss, get_base_data, IceSheetType, RequestMetrics, TimePeriod};

fn main() -> Result<(), Box<dyn Error>> {
    let metrics = RequestMetrics::new();

    println!("=== ICE SHEETS ===");
    for ice_sheet in IceSheetType::ALL {
        let data = get_base_data(ice_sheet)?;
        println!(
            "  {:<12} size = {:>14.1} km², melting rate = {:>12.7} kg/s, ambient = {:>7.2} °C",
            data.name, data.size_km2, data.melting_rate_kg_per_second, data.ambient_temperature_c
        );
    }

    println!("\n=== PROJECTIONS ===");
    println!(
        "  {:<12} {:<8} {:>22} {:>22}",
        "ice sheet", "period", "mass loss", "final size"
    );
    for ice_sheet in IceSheetType::ALL {
        for period in TimePeriod::ALL {
            let result = calculate_mass_loss(&metrics, ice_sheet, period)?;
            println!(
                "  {:<12} {:<8} {:>22.3} {:>22.3}",
                result.ice_sheet_name,
                period.display_name(),
                result.mass_loss,
                result.final_size
            );
        }
    }

    Ok(())
}
