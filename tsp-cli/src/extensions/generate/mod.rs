//! Generate command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use tsp_core::models::City;
use tsp_core::utils::{Float, GenericError, Random};

/// Default side size of the square area where cities are placed.
pub const DEFAULT_AREA_SIZE: Float = 100.;

/// Generates cities with coordinates uniformly distributed inside the square with given side size.
/// Coordinates are rounded to two decimals, cities are named `c0`, `c1`, etc.
pub fn generate_cities(size: usize, area_size: Option<Float>, random: &dyn Random) -> Result<Vec<City>, GenericError> {
    if size < 2 {
        return Err(format!("at least 2 cities are required, got: {size}").into());
    }

    let area_size = area_size.unwrap_or(DEFAULT_AREA_SIZE);
    if !area_size.is_finite() || area_size <= 0. {
        return Err(format!("area size must be positive finite number, got: '{area_size}'").into());
    }

    let get_coordinate = || (random.uniform_real(0., area_size) * 100.).round() / 100.;

    Ok((0..size)
        .map(|idx| {
            let x = get_coordinate();
            let y = get_coordinate();

            City::new(format!("c{idx}").as_str(), x, y)
        })
        .collect())
}
