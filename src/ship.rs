//! Ship definitions: the cells a ship occupies and its sunk flag.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells run along increasing `x`.
    Horizontal,
    /// Cells run along increasing `y`.
    Vertical,
}

/// A ship as an ordered list of occupied cells.
///
/// The cells never change after construction. Only the sunk flag moves, and
/// only from `false` to `true`, when the owning field observes every cell hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coordinate>,
    sunk: bool,
}

impl Ship {
    /// Build a ship from explicit cells. Bounds are not checked here; that is
    /// the field's job.
    pub fn new(cells: Vec<Coordinate>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::InvalidShipLength);
        }
        Ok(Ship { cells, sunk: false })
    }

    /// Lay out `length` consecutive cells from `anchor`, without wraparound.
    ///
    /// Cells past the grid edge are kept as-is so the field rejects them.
    /// A layout that would overflow `usize` is reported as out of bounds.
    pub fn line(
        anchor: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, BoardError> {
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => anchor.x.checked_add(i).map(|x| Coordinate::new(x, anchor.y)),
                Orientation::Vertical => anchor.y.checked_add(i).map(|y| Coordinate::new(anchor.x, y)),
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(BoardError::ShipOutOfBounds)?;
        Ship::new(cells)
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the ship occupies `at`.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells.contains(&at)
    }

    /// Whether every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub(crate) fn mark_sunk(&mut self) {
        self.sunk = true;
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ cells: [")?;
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "], sunk: {} }}", self.sunk)
    }
}
