use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_odds::hand::{Board, HoleCards, MAX_PLAYERS};
use poker_odds::probability::ProbabilityEstimator;
use poker_odds::simulation::{category_frequencies, EvSimulator, SimulationConfig, Wager};
use poker_odds::tui::{app::AppState, controller};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(version, about = "Texas Hold'em hand odds and call EV")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive calculator (default).
    Tui {
        /// Fixed simulation seed.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Print category estimates and simulate the EV of calling.
    Calc {
        /// Hole cards, e.g. "AH KD".
        #[clap(long)]
        hole: String,
        /// Revealed community cards, e.g. "10H JH QH".
        #[clap(long, default_value = "")]
        board: String,
        /// Players at the table, including you.
        #[clap(long, short, default_value_t = 2)]
        players: usize,
        /// Monte Carlo trials; 0 skips the simulation.
        #[clap(long, short, default_value_t = 10_000)]
        trials: usize,
        /// Fixed simulation seed.
        #[clap(long)]
        seed: Option<u64>,
        /// Worker threads.
        #[clap(long, short, default_value_t = 1)]
        workers: usize,
        /// Stop simulating after this many milliseconds.
        #[clap(long)]
        deadline_ms: Option<u64>,
        #[clap(long, default_value_t = 0)]
        pot: u64,
        #[clap(long, default_value_t = 0)]
        call: u64,
        #[clap(long, default_value_t = 0)]
        raise: u64,
    },
    /// Frequency of each hand category over random 7-card deals.
    Freq {
        #[clap(long, short, default_value_t = 100_000)]
        trials: usize,
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn init_logging(level: log::LevelFilter) {
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Tui { seed: None }) {
        Command::Tui { seed } => {
            // Log lines would corrupt the alternate screen.
            init_logging(log::LevelFilter::Off);
            run_tui(seed)
        }
        Command::Calc { hole, board, players, trials, seed, workers, deadline_ms, pot, call, raise } => {
            init_logging(log::LevelFilter::Info);
            if players == 0 || players > MAX_PLAYERS {
                bail!("players must be between 1 and {MAX_PLAYERS}");
            }
            let hole: HoleCards = hole.parse().context("invalid --hole")?;
            let board: Board = board.parse().context("invalid --board")?;

            let estimator = ProbabilityEstimator::new(hole, players)?;
            let report = estimator.report(&board)?;
            println!("{hole} | {} ({}), {players} players", board_text(&board), report.street.label());
            for (category, p) in report.sorted() {
                println!("  {:<16}{:>7.2}%", category.name(), p * 100.0);
            }

            if trials > 0 {
                let mut config =
                    SimulationConfig::default().with_trials(trials).with_workers(workers);
                if let Some(seed) = seed {
                    config = config.with_seed(seed);
                }
                if let Some(ms) = deadline_ms {
                    config = config.with_deadline(Duration::from_millis(ms));
                }
                let wager = Wager::new(pot, call, raise);
                let res = EvSimulator::new(config).run(&hole, &board, wager, players)?;
                println!(
                    "win {:.2}%  tie {:.2}%  EV ${:.2}  ({} trials)",
                    res.win_probability * 100.0,
                    res.tie_probability * 100.0,
                    res.expected_value,
                    res.trials
                );
            }
            Ok(())
        }
        Command::Freq { trials, seed } => {
            init_logging(log::LevelFilter::Info);
            let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random));
            for (category, freq) in category_frequencies(trials, &mut rng)?.into_iter().rev() {
                println!("{:<16}{:>8.4}%", category.name(), freq * 100.0);
            }
            Ok(())
        }
    }
}

fn board_text(board: &Board) -> String {
    if board.is_empty() {
        return "-".to_string();
    }
    board.as_slice().iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(seed: Option<u64>) -> Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-odds TUI requires a real terminal (TTY); try the `calc` subcommand. Version: {}",
            poker_odds::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::default();
    if let Some(seed) = seed {
        app = app.with_seed(seed);
    }

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}
