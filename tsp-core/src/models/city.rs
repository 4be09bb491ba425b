use crate::utils::Float;

/// An index of the city in the problem's city list. All costs and search states refer to cities
/// by their location instead of copying city records around.
pub type Location = usize;

/// Represents a named point in 2D plane.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    /// A unique name of the city.
    pub name: String,
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
}

impl City {
    /// Creates a new instance of `City`.
    pub fn new(name: &str, x: Float, y: Float) -> Self {
        Self { name: name.to_string(), x, y }
    }

    /// Computes euclidean distance from this city to the `other`.
    pub fn distance_to(&self, other: &City) -> Float {
        let delta_x = self.x - other.x;
        let delta_y = self.y - other.y;

        (delta_x * delta_x + delta_y * delta_y).sqrt()
    }
}
