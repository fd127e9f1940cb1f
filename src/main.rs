use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

use minimax_games::EngineConfig;

mod frontend;
use frontend::*;

/// Play tic-tac-toe or connect four against a minimax opponent
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// TOML file with search depths and AI strength
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play this game directly instead of showing the menu
    #[arg(long, value_enum)]
    game: Option<GameChoice>,

    /// Seed for the AI's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer play both sides
    #[arg(long)]
    ai_only: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum GameChoice {
    TicTacToe,
    ConnectFour,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load_or_default(path)?,
        None => EngineConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(choice) = args.game {
        return play(choice, &config, args.ai_only, &mut rng);
    }

    println!("Welcome to the game menu\n");
    loop {
        println!("1) Tic Tac Toe");
        println!("2) Connect Four");
        println!("3) Quit");
        let choice = match prompt("Choice > ")? {
            Some(choice) => choice,
            None => break,
        };
        match choice.as_str() {
            "1" => play(GameChoice::TicTacToe, &config, args.ai_only, &mut rng)?,
            "2" => play(GameChoice::ConnectFour, &config, args.ai_only, &mut rng)?,
            "3" | "q" => {
                println!("Bye!");
                break;
            }
            _ => println!("Unknown choice: {}", choice),
        }
        println!("-------------------");
    }
    Ok(())
}

fn play(choice: GameChoice, config: &EngineConfig, ai_only: bool, rng: &mut StdRng) -> Result<()> {
    let controllers = if ai_only {
        Controllers {
            max_is_ai: true,
            min_is_ai: true,
        }
    } else {
        Controllers {
            max_is_ai: ask_yes_no("Is player X (Max) AI controlled?")?,
            min_is_ai: ask_yes_no("Is player O (Min) AI controlled?")?,
        }
    };

    match choice {
        GameChoice::TicTacToe => {
            let settings = &config.tic_tac_toe;
            let mut game = TicTacToeCli::new_game(settings.depth);
            run(&TicTacToeCli, &mut game, controllers, settings.optimal_probability, rng)?;
        }
        GameChoice::ConnectFour => {
            let settings = &config.connect_four;
            let mut game = ConnectFourCli::new_game(settings.depth);
            run(&ConnectFourCli, &mut game, controllers, settings.optimal_probability, rng)?;
        }
    }
    Ok(())
}
