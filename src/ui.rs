#![cfg(feature = "std")]

use std::string::String;

use crate::{board::BattleField, config::GRID_SIZE, game::Game};

/// Render a field as text: a header of column indices, then one line per row
/// with the row index and each cell's symbol, space separated.
///
/// With `reveal_ships` unset, unhit ship cells are drawn as water.
pub fn render_field(field: &BattleField, reveal_ships: bool) -> String {
    let mut out = String::from(" ");
    for x in 0..GRID_SIZE {
        out.push_str(&std::format!(" {}", x));
    }
    out.push('\n');
    for (y, row) in field.projection(reveal_ships).iter().enumerate() {
        out.push_str(&std::format!("{}", y));
        for cell in row {
            out.push(' ');
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// Print a single field to stdout.
pub fn print_field(field: &BattleField, reveal_ships: bool) {
    std::print!("{}", render_field(field, reveal_ships));
}

/// Display the player's own field (ships shown) above the computer's field
/// (ships hidden).
pub fn print_player_view(game: &Game) {
    std::println!("\nYour field:");
    print_field(game.player_field(), true);
    std::println!("\nComputer's field:");
    print_field(game.computer_field(), false);
}
