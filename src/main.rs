#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use sea_battle::{
    cli::{coord_label, Command, HELP},
    init_logging, render_board, start_new_game, EngineError, GameEvent, GameSession, Phase,
    ShipKind, Side, Strategist,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let a second strategist play the human side and print a JSON summary.
    Autoplay {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, help = "Number of games to play")]
        games: u32,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let session = start_new_game(seed)?;
            play(session)?;
        }
        Commands::Autoplay { seed, games } => {
            for game in 0..games {
                let seed = seed.map(|s| s.wrapping_add(game as u64));
                let summary = autoplay(start_new_game(seed)?, seed)?;
                println!("{}", serde_json::to_string(&summary)?);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_boards(session: &GameSession) {
    println!("Enemy board:");
    print!("{}", render_board(session.computer_board(), false));
    println!("\nYour board:");
    print!("{}", render_board(session.human_board(), true));
}

#[cfg(feature = "std")]
fn print_fleet(session: &GameSession) {
    let tally = session.remaining_to_place();
    for kind in ShipKind::ALL {
        println!("  {}: {} left", kind, tally.remaining(kind));
    }
}

#[cfg(feature = "std")]
fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ComputerShot { target, .. } => {
                println!("  [{}] {}", coord_label(*target), event)
            }
            _ => println!("{}", event),
        }
    }
}

#[cfg(feature = "std")]
fn play(mut session: GameSession) -> anyhow::Result<()> {
    println!("{}", HELP);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_boards(&session);
        match session.phase() {
            Phase::Placing => {
                if let Some(kind) = session.current_kind() {
                    println!("Place your {} ({:?}):", kind, session.orientation());
                }
            }
            Phase::Ended => println!("Game over. Type 'restart' or 'quit'."),
            _ => println!("{}", session.status()),
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let Some(command) = Command::parse(&line?) else {
            println!("Unrecognised input. Type 'help' for commands.");
            continue;
        };

        let result = match command {
            Command::Quit => return Ok(()),
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Fleet => {
                print_fleet(&session);
                continue;
            }
            Command::Rotate => {
                println!("Orientation: {:?}", session.toggle_orientation());
                continue;
            }
            Command::Restart => session.restart().map(|()| vec![GameEvent::Restarted]),
            Command::Auto => session.auto_place_human_fleet(),
            Command::Cell(coord) if session.phase() == Phase::Placing => {
                session.place_current(coord)
            }
            Command::Cell((row, col)) => session.shoot_at(row, col).map(|turn| turn.events),
        };

        match result {
            Ok(events) => print_events(&events),
            Err(EngineError::PlacementExhausted { .. }) => {
                println!("Could not place the fleet automatically. Try again or place ships by hand.")
            }
            Err(err) => println!("Rejected: {}", err),
        }
    }
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct Summary {
    seed: Option<u64>,
    winner: Option<Side>,
    player_shots: usize,
    computer_shots: usize,
}

#[cfg(feature = "std")]
fn autoplay(mut session: GameSession, seed: Option<u64>) -> anyhow::Result<Summary> {
    use rand::{rngs::SmallRng, SeedableRng};

    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut shooter = Strategist::new();
    let mut player_shots = 0;
    let mut computer_shots = 0;

    session.auto_place_human_fleet()?;
    while session.phase() == Phase::PlayerTurn {
        let Some((row, col)) = shooter.next_target(&session.computer_board().shots(), &mut rng)
        else {
            break;
        };
        let turn = session.shoot_at(row, col)?;
        shooter.record(turn.shot.target, turn.shot.outcome);
        player_shots += 1;
        computer_shots += turn.volley.len();
    }

    Ok(Summary {
        seed,
        winner: session.winner(),
        player_shots,
        computer_shots,
    })
}
