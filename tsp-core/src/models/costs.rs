#[cfg(test)]
#[path = "../../tests/unit/models/costs_test.rs"]
mod costs_test;

use crate::models::{City, Location};
use crate::utils::{Float, GenericError, GenericResult};

/// Keeps travel costs between every pair of cities as a flattened square matrix.
#[derive(Clone, Debug)]
pub struct EdgeCostTable {
    size: usize,
    values: Vec<Float>,
}

impl EdgeCostTable {
    /// Creates a new instance of `EdgeCostTable` from a flattened square matrix given in
    /// row-major order.
    pub fn new(values: Vec<Float>) -> GenericResult<Self> {
        let size = (values.len() as Float).sqrt() as usize;

        if size * size != values.len() {
            return Err(GenericError::from(format!("non-square flatten matrix: {} items", values.len())));
        }

        if let Some(value) = values.iter().find(|value| !value.is_finite() || **value < 0.) {
            return Err(GenericError::from(format!("edge cost must be non-negative finite number, got: '{value}'")));
        }

        Ok(Self { size, values })
    }

    /// Returns a cost of travel between two locations.
    #[inline]
    pub fn cost(&self, from: Location, to: Location) -> Float {
        self.values[from * self.size + to]
    }

    /// Returns amount of locations in the table.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Builds edge costs as euclidean distances between all pairs of cities, including self-pairs
/// which have zero cost.
pub fn build_edge_costs(cities: &[City]) -> EdgeCostTable {
    let mut values = cities
        .iter()
        .flat_map(|from| cities.iter().map(move |to| from.distance_to(to)))
        .collect::<Vec<Float>>();

    values.shrink_to_fit();

    EdgeCostTable { size: cities.len(), values }
}
