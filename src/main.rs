//! Abaco - a four-function terminal calculator.

use abaco::app::{App, Theme};
use abaco::calc::{Calculator, EngineConfig, Locale, OperatorRepeat, PercentMode};
use abaco::{keymap, ui};
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "abaco")]
#[command(about = "A four-function terminal calculator", long_about = None)]
struct Args {
    /// Number grouping profile (es-CO, es-ES, en-US)
    #[arg(long, default_value = "es-CO")]
    locale: String,

    /// What the % key does
    #[arg(long, value_enum, default_value_t = PercentMode::Unary)]
    percent_mode: PercentMode,

    /// What selecting an operator right after another one does
    #[arg(long, value_enum, default_value_t = OperatorRepeat::Substitute)]
    operator_repeat: OperatorRepeat,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    /// Replay keys without opening the UI and print the result, e.g. "5+3="
    #[arg(long)]
    keys: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
        tracing::info!("Starting Abaco");
    }

    let locale = Locale::from_tag(&args.locale)?;
    let config = EngineConfig {
        percent_mode: args.percent_mode,
        operator_repeat: args.operator_repeat,
    };

    if let Some(keys) = &args.keys {
        let mut calculator = Calculator::new(config, locale);
        let mut output = calculator.display().output;
        for command in keymap::parse_sequence(keys)? {
            output = calculator.dispatch(command).output;
        }
        println!("{}", output);
        tracing::info!("Replayed {} keys", keys.chars().count());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config, locale, args.theme);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Abaco exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {},
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
