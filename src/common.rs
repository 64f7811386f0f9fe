//! Common types for the battlefield: coordinates, shot results and errors.

use core::fmt;

use crate::config::GRID_SIZE;

/// A cell address on a field, 0-indexed. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` when the coordinate lies inside a `GRID_SIZE` grid.
    pub const fn in_bounds(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// The target cell belongs to a ship.
    Hit,
    /// The target cell holds no ship.
    Miss,
}

impl ShotResult {
    pub fn is_hit(self) -> bool {
        self == ShotResult::Hit
    }
}

/// Errors returned by BattleField and placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// Ship placement leaves the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// The fleet already holds `FLEET_SIZE` ships.
    FleetFull,
    /// A ship was built with no cells.
    InvalidShipLength,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// Grid and fleet dimensions make legal placement impossible.
    InvalidLayout,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Target {} is outside the grid", c),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::FleetFull => write!(f, "Fleet is already complete"),
            BoardError::InvalidShipLength => write!(f, "Ship must occupy at least one cell"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::InvalidLayout => {
                write!(f, "Grid and fleet dimensions leave no legal placement")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_bounds() {
        assert!(Coordinate::new(0, 0).in_bounds());
        assert!(Coordinate::new(GRID_SIZE - 1, GRID_SIZE - 1).in_bounds());
        assert!(!Coordinate::new(GRID_SIZE, 0).in_bounds());
        assert!(!Coordinate::new(0, GRID_SIZE).in_bounds());
    }

    #[test]
    fn error_display() {
        let err = BoardError::OutOfBounds(Coordinate::new(11, 2));
        assert_eq!(std::format!("{}", err), "Target (11, 2) is outside the grid");
    }
}
