#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, print_match_view, AiPlayer, CliPlayer, FleetGenerator, Game, Player, TurnState,
    BOARD_SIZE, MAX_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, value_parser = clap::value_parser!(u32).range(6..=MAX_BOARD_SIZE as i64))]
        size: u32,
    },
    /// Watch two computer players battle it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, value_parser = clap::value_parser!(u32).range(6..=MAX_BOARD_SIZE as i64))]
        size: u32,
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
fn run_game(
    mut rng: SmallRng,
    size: u32,
    user: Box<dyn Player>,
    opponent: Box<dyn Player>,
    verbose: bool,
) -> anyhow::Result<TurnState> {
    let generator = FleetGenerator::standard(size);
    let user_board = generator
        .generate(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut opponent_board = generator
        .generate(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    opponent_board.set_hidden(true);

    let mut game = Game::new(user_board, user, opponent_board, opponent);
    let mut moves = 0usize;
    while !game.state().is_terminal() {
        if verbose {
            println!("{}", "-".repeat(20));
            print_match_view(game.user_board(), game.opponent_board());
            match game.state() {
                TurnState::UserTurn => println!("Your move!"),
                TurnState::OpponentTurn => println!("Opponent moves!"),
                _ => {}
            }
        }
        game.step(&mut rng);
        moves += 1;
    }

    if verbose {
        println!("{}", "-".repeat(20));
        print_match_view(game.user_board(), game.opponent_board());
    }
    println!("{}", "-".repeat(20));
    match (game.state(), verbose) {
        (TurnState::UserWon, true) => println!("You won!"),
        (TurnState::OpponentWon, true) => println!("The computer won."),
        (TurnState::UserWon, false) => println!("Player one wins after {} moves.", moves),
        (TurnState::OpponentWon, false) => println!("Player two wins after {} moves.", moves),
        _ => {}
    }
    Ok(game.state())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            println!(" -> SEA BATTLE <-");
            let rng = make_rng(seed);
            run_game(
                rng,
                size,
                Box::new(CliPlayer::new()),
                Box::new(AiPlayer::new()),
                true,
            )?;
        }
        Commands::Auto { seed, size } => {
            println!("Starting computer vs computer game...");
            let rng = make_rng(seed);
            run_game(
                rng,
                size,
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
                false,
            )?;
        }
    }
    Ok(())
}
