use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use rust_dice::catalog::StaticCatalog;
use rust_dice::core::constants::LOG_FILE_NAME;
use rust_dice::core::{data_dir, GameConfig, GameContext};
use rust_dice::persistence::JsonStore;
use rust_dice::screens::App;
use rust_dice::ui;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "RUST_DICE_LOG";

/// Logs go to a file; the terminal belongs to the game.
fn init_logging(config: &GameConfig) -> io::Result<()> {
    let path = data_dir()?.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut input = String::new();

    while app.is_running() {
        terminal.draw(|f| ui::draw(f, app, &input))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut input);
                app.handle_input(&line);
            }
            KeyCode::Esc => {
                input.clear();
                app.handle_input("b");
            }
            _ => {}
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-V" => {
                println!("rust-dice {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Rust & Dice - Terminal Role-Playing Game\n");
                println!("Usage: rust-dice [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Environment:");
                println!("  {}  Log filter (default from config.json)", LOG_ENV_VAR);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'rust-dice --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = GameConfig::load()?;
    init_logging(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let store = match &config.save_dir {
        Some(dir) => JsonStore::new(dir.clone())?,
        None => JsonStore::default_location()?,
    };
    let ctx = GameContext::new(
        Box::new(StaticCatalog::new()),
        Box::new(store),
        Box::new(StdRng::from_entropy()),
        config,
    );
    let mut app = App::new(ctx).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    tracing::info!("exiting");
    result
}
