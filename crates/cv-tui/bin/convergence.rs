//! Convergence game viewer
//!
//! Main entry point for the terminal viewer.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use cv_core::{GameRecord, Playback, RecordError, sample, wordlist};
use cv_tui::{App, Theme};

/// Step through a recorded Convergence word game
#[derive(Parser, Debug)]
#[command(name = "convergence")]
#[command(author, version, about = "Convergence - replay a recorded word game", long_about = None)]
struct Args {
    /// Game record JSON file (the built-in sample game when omitted)
    record: Option<PathBuf>,

    /// Force the light-background theme
    #[arg(long = "light")]
    light: bool,

    /// Skip outcome re-verification of the loaded record
    #[arg(long = "no-verify")]
    no_verify: bool,

    /// Print a random seed-word pair for a new game and exit
    #[arg(long = "seeds")]
    seeds: bool,

    /// RNG seed for --seeds (random when omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Print version info and exit
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    // Handle side modes that don't require the TUI

    if args.verbose {
        println!("convergence {}", env!("CARGO_PKG_VERSION"));
        println!("Terminal viewer for recorded Convergence word games");
        return Ok(());
    }

    if args.seeds {
        print_seed_pair(args.seed);
        return Ok(());
    }

    let record = match load_record(&args) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Failed to load game record: {}", e);
            std::process::exit(1);
        }
    };

    let playback = match Playback::new(record) {
        Ok(playback) => playback,
        Err(e) => {
            eprintln!("Invalid game record: {}", e);
            std::process::exit(1);
        }
    };

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(playback, theme);

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event);

            if app.should_quit() {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Load the record named on the command line, or the built-in sample
fn load_record(args: &Args) -> Result<GameRecord, RecordError> {
    let record = match &args.record {
        Some(path) => GameRecord::load(path)?,
        None => sample::sample_game(),
    };
    if !args.no_verify {
        record.verify()?;
    }
    Ok(record)
}

/// Print a seed-word pair for starting a new benchmark game
fn print_seed_pair(seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (word1, word2) = wordlist::seed_pair(&mut rng);
    println!("{} {}", word1, word2);
}
