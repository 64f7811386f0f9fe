use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{Game, GameStatus, RandomPlayer};
use serde::Serialize;

#[derive(Serialize)]
struct SideReport {
    shots: usize,
    ships_remaining: usize,
}

#[derive(Serialize)]
struct SimReport {
    seed: u64,
    status: GameStatus,
    rounds: usize,
    player1: SideReport,
    player2: SideReport,
    winner: Option<&'static str>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Game::setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut p1 = RandomPlayer::new();
    let mut p2 = RandomPlayer::new();
    while game.status() == GameStatus::InProgress {
        game.play_round(&mut p1, &mut p2, &mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let winner = match game.status() {
        GameStatus::PlayerWon => Some("player1"),
        GameStatus::ComputerWon => Some("player2"),
        _ => None,
    };
    let report = SimReport {
        seed,
        status: game.status(),
        rounds: game.rounds(),
        player1: SideReport {
            shots: p1.shots_fired(),
            ships_remaining: game.player_field().ships_remaining(),
        },
        player2: SideReport {
            shots: p2.shots_fired(),
            ships_remaining: game.computer_field().ships_remaining(),
        },
        winner,
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
