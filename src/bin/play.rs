use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snakes_ladders::board::Link;
use snakes_ladders::core::{GameConfig, GameState, TurnOutcome};
use snakes_ladders::session::Session;

/// Play a seeded game of snakes and ladders and print every turn.
#[derive(Parser)]
#[command(name = "play", about = "Play a seeded snakes and ladders game")]
struct Cli {
    /// Path to a TOML game configuration (defaults to the classic board)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of players
    #[arg(long)]
    players: Option<usize>,

    /// Override the dice seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many turns if nobody has won
    #[arg(long, default_value_t = 10_000)]
    max_turns: u32,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json);

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(players) = cli.players {
        config.player_count = players;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let mut session = Session::from_config(&config).context("invalid game configuration")?;
    info!(players = config.player_count, seed = config.seed, "starting game");

    while !session.is_over() {
        if session.state().turn_number() >= cli.max_turns {
            bail!("no winner after {} turns", cli.max_turns);
        }
        let outcome = session.roll()?;
        println!("{}", describe(&outcome));
    }

    println!();
    println!("{}", standings(session.state()));
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn describe(outcome: &TurnOutcome) -> String {
    let events: Vec<String> = outcome.events.iter().map(ToString::to_string).collect();
    let mut line = format!(
        "turn {:>4}  {} rolls {}: {}",
        outcome.turn,
        outcome.player,
        outcome.roll,
        events.join(", ")
    );
    if let Some((_, from, to)) = outcome.redirect() {
        line.push_str(&format!(" ({:+})", Link::new(from, to).delta()));
    } else if !outcome.moved() {
        line.push_str(" (stays put)");
    }
    line
}

fn standings(state: &GameState) -> String {
    let mut lines = vec!["Player positions:".to_string()];
    for player in state.players() {
        let marker = if state.status().is_winner(player.id) { "  <- winner" } else { "" };
        let place = if player.on_board() {
            player.position.to_string()
        } else {
            "not entered".to_string()
        };
        lines.push(format!("  {}: {}{}", player.id, place, marker));
    }
    lines.join("\n")
}
