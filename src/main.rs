mod ui;

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use arcade::app::App;
use arcade::best_scores::BestScores;
use arcade::constants::{FRAME_POLL_MS, LOG_FILE};
use arcade::games::GameKind;
use arcade::{input, utils};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

/// Log to ~/.arcade/arcade.log; the terminal itself belongs to the UI.
/// Filter from `RUST_LOG`, defaulting to `info`. Logging is skipped if the
/// file cannot be opened.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let file = match utils::persistence::arcade_dir().and_then(|dir| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
    }) {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
}

fn print_help() {
    println!("Arcade - Terminal Grid Games\n");
    println!("Usage: arcade [game]\n");
    println!("Games:");
    for kind in GameKind::ALL {
        println!("  {:<10} {}", kind.id(), kind.description());
    }
    println!("\nOptions:");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut start_game = None;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", utils::build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => match GameKind::from_arg(other) {
                Some(kind) => start_game = Some(kind),
                None => {
                    eprintln!("Unknown game: {}", other);
                    eprintln!("Run 'arcade --help' for usage.");
                    std::process::exit(1);
                }
            },
        }
    }

    init_tracing();
    info!(version = %utils::build_info::version_line(), "starting");

    let best = BestScores::load().unwrap_or_else(|e| {
        warn!(error = %e, "best scores unavailable, keeping them in memory");
        BestScores::in_memory()
    });
    let mut app = App::new(best, rand::thread_rng());

    if let Some(kind) = start_game {
        if let Err(e) = app.open(kind) {
            eprintln!("Could not start {}: {}", kind.name(), e);
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

/// Draw, read at most one key, then advance timers by the real elapsed time.
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<rand::rngs::ThreadRng>) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                app.handle_input(input::map_key(key));
            }
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        app.tick(elapsed_ms);

        if app.should_quit() {
            return Ok(());
        }
    }
}
