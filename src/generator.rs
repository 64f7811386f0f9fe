//! Random ship generation and the bounded generate/check/place protocol.

use rand::Rng;

use crate::board::BattleField;
use crate::common::{BoardError, Coordinate};
use crate::config::{FLEET_SIZE, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, SHIP_SIZE};
use crate::ship::{Orientation, Ship};

/// Produces random candidate ships, independent of any field.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShipGenerator;

impl ShipGenerator {
    pub fn new() -> Self {
        Self
    }

    /// A uniformly random coordinate inside the grid.
    pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
        Coordinate::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE))
    }

    /// A ship of `length` cells from a random anchor in a random orientation.
    ///
    /// The result may leave the grid or overlap existing ships; use
    /// [`BattleField::can_place`] before placing it.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Result<Ship, BoardError> {
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let anchor = Self::random_coordinate(rng);
        Ship::line(anchor, orientation, length)
    }
}

/// Generate candidates until one fits on `field`, then place it.
///
/// Gives up with [`BoardError::UnableToPlaceShip`] after `max_attempts`.
pub fn place_random_ship<R: Rng + ?Sized>(
    field: &mut BattleField,
    rng: &mut R,
    length: usize,
    max_attempts: usize,
) -> Result<(), BoardError> {
    if field.is_full() {
        return Err(BoardError::FleetFull);
    }
    let generator = ShipGenerator::new();
    for attempt in 1..=max_attempts {
        let ship = generator.generate(rng, length)?;
        if field.can_place(ship.cells()) {
            log::debug!("ship placed after {} attempt(s)", attempt);
            return field.place(ship);
        }
    }
    log::warn!("no legal placement found in {} attempts", max_attempts);
    Err(BoardError::UnableToPlaceShip)
}

/// Fill an empty field with `FLEET_SIZE` ships of `SHIP_SIZE` cells.
pub fn populate_fleet<R: Rng + ?Sized>(field: &mut BattleField, rng: &mut R) -> Result<(), BoardError> {
    crate::config::validate_layout(GRID_SIZE, SHIP_SIZE, FLEET_SIZE)?;
    while !field.is_full() {
        place_random_ship(field, rng, SHIP_SIZE, MAX_PLACEMENT_ATTEMPTS)?;
    }
    Ok(())
}
