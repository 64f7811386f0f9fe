use crate::common::BoardError;

pub const GRID_SIZE: usize = 10;
pub const SHIP_SIZE: usize = 3;
pub const FLEET_SIZE: usize = 3;

/// Upper bound on generate/check rounds spent placing a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Reject a grid/fleet layout on which legal placement can never succeed.
///
/// This only catches layouts that are impossible outright; a crowded but
/// feasible layout is left to the bounded retry in the generator.
pub fn validate_layout(grid_size: usize, ship_size: usize, fleet_size: usize) -> Result<(), BoardError> {
    if grid_size == 0 || ship_size == 0 || ship_size > grid_size {
        return Err(BoardError::InvalidLayout);
    }
    let needed = fleet_size.checked_mul(ship_size).ok_or(BoardError::InvalidLayout)?;
    if needed > grid_size * grid_size {
        return Err(BoardError::InvalidLayout);
    }
    Ok(())
}
