#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::{City, EdgeCostTable, Location, SolveError, build_edge_costs};
use rustc_hash::FxHashSet;
use std::ops::Range;

/// Defines a validated TSP problem: a list of cities, costs between them and a tour origin.
#[derive(Clone, Debug)]
pub struct Problem {
    /// Cities to visit, a city location is its index in the list.
    pub cities: Vec<City>,

    /// Travel costs between every pair of cities.
    pub costs: EdgeCostTable,

    /// A location where tour starts and ends.
    pub origin: Location,
}

impl Problem {
    /// Creates a new problem using the first city as the tour origin.
    pub fn new(cities: Vec<City>) -> Result<Self, SolveError> {
        Self::validate(&cities)?;

        let costs = build_edge_costs(&cities);

        Ok(Self { cities, costs, origin: 0 })
    }

    /// Creates a new problem with the origin specified by city name.
    pub fn with_origin(cities: Vec<City>, origin: &str) -> Result<Self, SolveError> {
        let mut problem = Self::new(cities)?;

        problem.origin = problem
            .location_of(origin)
            .ok_or_else(|| SolveError::InvalidInput(format!("unknown origin city: '{origin}'")))?;

        Ok(problem)
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    /// Returns all locations of the problem.
    pub fn locations(&self) -> Range<Location> {
        0..self.cities.len()
    }

    /// Returns a city at given location.
    pub fn city(&self, location: Location) -> &City {
        &self.cities[location]
    }

    /// Returns location of the city with given name.
    pub fn location_of(&self, name: &str) -> Option<Location> {
        self.cities.iter().position(|city| city.name == name)
    }

    fn validate(cities: &[City]) -> Result<(), SolveError> {
        if cities.len() < 2 {
            return Err(SolveError::InvalidInput(format!("at least 2 cities are required, got: {}", cities.len())));
        }

        let mut names = FxHashSet::default();
        for city in cities {
            if !names.insert(city.name.as_str()) {
                return Err(SolveError::InvalidInput(format!("duplicate city name: '{}'", city.name)));
            }

            if !city.x.is_finite() || !city.y.is_finite() {
                return Err(SolveError::InvalidInput(format!(
                    "city '{}' has non-finite coordinates: ({}, {})",
                    city.name, city.x, city.y
                )));
            }
        }

        Ok(())
    }
}
