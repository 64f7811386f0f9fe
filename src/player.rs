use crate::{
    board::BattleField,
    common::{Coordinate, ShotResult},
};
use rand::rngs::SmallRng;

/// Interface implemented by the human and computer players.
pub trait Player {
    /// Choose the next target on `opponent`. The field is only used for what
    /// the player is allowed to see. `None` means the player has left the game.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &BattleField) -> Option<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult, _sunk: bool) {}

    /// Inform the player of an opponent shot against its field.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _result: ShotResult, _sunk: bool) {}
}
