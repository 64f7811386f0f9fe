//! Battlefield state: the cell grid, the fleet, placement and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate, ShotResult};
use crate::config::{FLEET_SIZE, GRID_SIZE, SHIP_SIZE};
use crate::ship::Ship;

/// Contents of a single grid cell.
///
/// Cells only move forward: `Water -> Ship -> Hit` or `Water -> Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Character used by the console display.
    pub fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

pub type Grid = [[Cell; GRID_SIZE]; GRID_SIZE];

/// One player's grid and fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct BattleField {
    // indexed [y][x]
    grid: Grid,
    ships: Vec<Ship>,
}

impl Default for BattleField {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleField {
    /// Create an empty field: all water, no ships.
    pub fn new() -> Self {
        BattleField {
            grid: [[Cell::Water; GRID_SIZE]; GRID_SIZE],
            ships: Vec::with_capacity(FLEET_SIZE),
        }
    }

    /// Returns `true` if every cell is on the grid, still untouched water,
    /// and listed only once.
    pub fn can_place(&self, cells: &[Coordinate]) -> bool {
        cells.iter().enumerate().all(|(i, c)| {
            c.in_bounds() && self.grid[c.y][c.x] == Cell::Water && !cells[..i].contains(c)
        })
    }

    /// Add a ship to the fleet and mark its cells.
    ///
    /// Callers are expected to have checked [`BattleField::can_place`]; the
    /// check is repeated so a bad placement surfaces as an error instead of
    /// a corrupted grid. Ships must be exactly `SHIP_SIZE` cells long.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.is_full() {
            return Err(BoardError::FleetFull);
        }
        if ship.len() != SHIP_SIZE {
            return Err(BoardError::InvalidShipLength);
        }
        if let Some(c) = ship.cells().iter().find(|c| !c.in_bounds()) {
            log::debug!("rejecting ship leaving the grid at {}", c);
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.can_place(ship.cells()) {
            return Err(BoardError::ShipOverlaps);
        }
        for c in ship.cells() {
            self.grid[c.y][c.x] = Cell::Ship;
        }
        log::debug!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `target`, marking the cell and updating the owning ship.
    ///
    /// Firing twice at the same cell reports the same result again.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotResult, BoardError> {
        if !target.in_bounds() {
            return Err(BoardError::OutOfBounds(target));
        }
        let Some(idx) = self.ships.iter().position(|s| s.contains(target)) else {
            self.grid[target.y][target.x] = Cell::Miss;
            log::debug!("shot at {} missed", target);
            return Ok(ShotResult::Miss);
        };
        self.grid[target.y][target.x] = Cell::Hit;
        let grid = &self.grid;
        let ship = &mut self.ships[idx];
        if !ship.is_sunk() && ship.cells().iter().all(|c| grid[c.y][c.x] == Cell::Hit) {
            ship.mark_sunk();
            log::debug!("shot at {} sank {:?}", target, ship);
        } else {
            log::debug!("shot at {} hit", target);
        }
        Ok(ShotResult::Hit)
    }

    /// Returns `true` while at least one ship is afloat.
    pub fn has_ships_remaining(&self) -> bool {
        self.ships.iter().any(|s| !s.is_sunk())
    }

    /// Number of ships not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` once the fleet holds `FLEET_SIZE` ships.
    pub fn is_full(&self) -> bool {
        self.ships.len() >= FLEET_SIZE
    }

    /// Immutable view of the fleet, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying `at`, if any.
    pub fn ship_at(&self, at: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(at))
    }

    /// Contents of a single cell, `None` when off the grid.
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        at.in_bounds().then(|| self.grid[at.y][at.x])
    }

    /// Rendering projection indexed `[y][x]`. Unless `reveal_ships` is set,
    /// unhit ship cells read as water.
    pub fn projection(&self, reveal_ships: bool) -> Grid {
        let mut view = self.grid;
        if !reveal_ships {
            for cell in view.iter_mut().flatten() {
                if *cell == Cell::Ship {
                    *cell = Cell::Water;
                }
            }
        }
        view
    }
}

impl fmt::Debug for BattleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BattleField {{")?;
        for row in &self.grid {
            write!(f, "  ")?;
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "  ships: {:?}\n}}", self.ships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;

    fn ship(x: usize, y: usize, orientation: Orientation) -> Ship {
        Ship::line(Coordinate::new(x, y), orientation, 3).unwrap()
    }

    #[test]
    fn new_field_is_all_water() {
        let field = BattleField::new();
        assert!(field.projection(true).iter().flatten().all(|c| *c == Cell::Water));
        assert!(!field.has_ships_remaining());
        assert_eq!(field.ships_remaining(), 0);
    }

    #[test]
    fn can_place_rejects_overlap_and_edges() {
        let mut field = BattleField::new();
        field.place(ship(2, 2, Orientation::Horizontal)).unwrap();
        assert!(!field.can_place(ship(3, 1, Orientation::Vertical).cells()));
        assert!(!field.can_place(ship(8, 0, Orientation::Horizontal).cells()));
        assert!(field.can_place(ship(7, 0, Orientation::Horizontal).cells()));
        assert!(field.can_place(ship(5, 2, Orientation::Horizontal).cells()));
    }

    #[test]
    fn place_reports_bad_placements() {
        let mut field = BattleField::new();
        field.place(ship(0, 0, Orientation::Horizontal)).unwrap();
        assert_eq!(
            field.place(ship(1, 0, Orientation::Vertical)),
            Err(BoardError::ShipOverlaps)
        );
        assert_eq!(
            field.place(ship(0, 9, Orientation::Vertical)),
            Err(BoardError::ShipOutOfBounds)
        );
        assert_eq!(field.ships().len(), 1);
    }

    #[test]
    fn place_rejects_fired_upon_cells() {
        let mut field = BattleField::new();
        field.place(ship(2, 2, Orientation::Horizontal)).unwrap();
        field.resolve_shot(Coordinate::new(3, 2)).unwrap();
        field.resolve_shot(Coordinate::new(0, 0)).unwrap();
        let before = field.clone();

        let over_hit = ship(3, 1, Orientation::Vertical);
        assert!(!field.can_place(over_hit.cells()));
        assert_eq!(field.place(over_hit), Err(BoardError::ShipOverlaps));

        let over_miss = ship(0, 0, Orientation::Vertical);
        assert!(!field.can_place(over_miss.cells()));
        assert_eq!(field.place(over_miss), Err(BoardError::ShipOverlaps));

        assert_eq!(field, before);
        assert_eq!(field.cell(Coordinate::new(3, 2)), Some(Cell::Hit));
        assert_eq!(field.cell(Coordinate::new(0, 0)), Some(Cell::Miss));
    }

    #[test]
    fn place_rejects_malformed_ships() {
        let mut field = BattleField::new();
        let c = Coordinate::new(4, 4);
        let stacked = Ship::new(alloc::vec![c, c, c]).unwrap();
        assert!(!field.can_place(stacked.cells()));
        assert_eq!(field.place(stacked), Err(BoardError::ShipOverlaps));

        let short = Ship::line(Coordinate::new(0, 0), Orientation::Horizontal, SHIP_SIZE - 1).unwrap();
        assert_eq!(field.place(short), Err(BoardError::InvalidShipLength));
        let long = Ship::line(Coordinate::new(0, 0), Orientation::Horizontal, SHIP_SIZE + 1).unwrap();
        assert_eq!(field.place(long), Err(BoardError::InvalidShipLength));

        assert!(field.ships().is_empty());
        assert!(field.projection(true).iter().flatten().all(|c| *c == Cell::Water));
    }

    #[test]
    fn place_enforces_fleet_size() {
        let mut field = BattleField::new();
        for y in 0..FLEET_SIZE {
            field.place(ship(0, y, Orientation::Horizontal)).unwrap();
        }
        assert!(field.is_full());
        assert_eq!(
            field.place(ship(5, 5, Orientation::Horizontal)),
            Err(BoardError::FleetFull)
        );
    }

    #[test]
    fn shot_outside_grid_is_rejected_without_side_effects() {
        let mut field = BattleField::new();
        let before = field.clone();
        let target = Coordinate::new(GRID_SIZE, 0);
        assert_eq!(field.resolve_shot(target), Err(BoardError::OutOfBounds(target)));
        assert_eq!(field, before);
    }

    #[test]
    fn cell_is_none_off_grid() {
        let field = BattleField::new();
        assert_eq!(field.cell(Coordinate::new(0, GRID_SIZE)), None);
        assert_eq!(field.cell(Coordinate::new(0, 0)), Some(Cell::Water));
    }

    #[test]
    fn sinking_one_ship_leaves_the_other() {
        let mut field = BattleField::new();
        field.place(ship(0, 0, Orientation::Horizontal)).unwrap();
        field.place(ship(0, 5, Orientation::Horizontal)).unwrap();
        for x in 0..3 {
            field.resolve_shot(Coordinate::new(x, 0)).unwrap();
        }
        assert!(field.ships()[0].is_sunk());
        assert!(!field.ships()[1].is_sunk());
        assert_eq!(field.ships_remaining(), 1);
        assert!(field.has_ships_remaining());
    }
}
