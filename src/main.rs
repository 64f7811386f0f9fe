#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, print_player_view, CliPlayer, Game, GameStatus, RandomPlayer,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print both fields after every round")]
        show: bool,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let mut game = Game::setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut human = CliPlayer::stdio();
            let mut computer = RandomPlayer::new();

            println!("Welcome to Battleship!");
            log::info!("game started");
            while game.status() == GameStatus::InProgress {
                print_player_view(&game);
                game.play_round(&mut human, &mut computer, &mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
            }

            print_player_view(&game);
            match game.status() {
                GameStatus::PlayerWon => println!("\nYou win!"),
                GameStatus::ComputerWon => println!("\nThe computer wins!"),
                GameStatus::Abandoned => println!("\nGame abandoned."),
                GameStatus::InProgress => {}
            }
            log::info!("game over after {} round(s): {:?}", game.rounds(), game.status());
        }
        Commands::Auto { seed, show } => {
            let mut rng = make_rng(seed);
            let mut game = Game::setup(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut first = RandomPlayer::new();
            let mut second = RandomPlayer::new();

            while game.status() == GameStatus::InProgress {
                if show {
                    print_player_view(&game);
                }
                for report in game
                    .play_round(&mut first, &mut second, &mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?
                {
                    println!(
                        "{:?} fires at {}: {:?}{}",
                        report.shooter,
                        report.target,
                        report.result,
                        if report.sunk { " (sunk)" } else { "" }
                    );
                }
            }

            print_player_view(&game);
            let winner = match game.status() {
                GameStatus::PlayerWon => "The first computer",
                GameStatus::ComputerWon => "The second computer",
                _ => "Nobody",
            };
            println!(
                "\n{} wins after {} round(s) ({} and {} shots).",
                winner,
                game.rounds(),
                first.shots_fired(),
                second.shots_fired()
            );
        }
    }
    Ok(())
}
