//! Kalkulator terminal binary.
//!
//! Shows the loading screen, then reads whitespace-separated tokens from
//! stdin and redraws the calculator after every line. `skip` (or `s`,
//! `esc`) typed during loading skips the screen; other input typed then is
//! applied once the calculator is shown.
//!
//! Set `KALKULATOR_LOG=debug` to trace every action on stderr.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use kalkulator::app::{self, FRAME_TIME};
use kalkulator::{command, logging, AppConfig, AppResult, Command, Overrides, Page};
use kalkulator_core::{CalcMode, Precision};
use kalkulator_ui::{Action, CalculatorWidget, InputState, MemoryClipboard};

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Terminal calculator with history, precision and scientific mode.
#[derive(Parser, Debug)]
#[command(name = "kalkulator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Decimal places for results (0, 2, 4 or 6)
    #[arg(short, long)]
    precision: Option<Precision>,

    /// Starting mode (standard, scientific, programmer)
    #[arg(short, long)]
    mode: Option<CalcMode>,

    /// Shortest time the loading screen stays up
    #[arg(long, value_name = "MS")]
    min_duration_ms: Option<u64>,

    /// Start directly on the calculator
    #[arg(long)]
    no_preloader: bool,

    /// Static caption on the loading screen
    #[arg(long)]
    reduced_motion: bool,

    /// Emit ANSI colors
    #[arg(long)]
    color: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            precision: self.precision,
            mode: self.mode,
            min_duration_ms: self.min_duration_ms,
            no_preloader: self.no_preloader,
            reduced_motion: self.reduced_motion,
            color: self.color,
        }
    }

    fn resolve_config(&self) -> AppResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        config.apply(&self.overrides());
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("kalkulator: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    logging::init()?;
    let config = cli.resolve_config()?;
    tracing::debug!(?config, "starting");

    let clipboard = MemoryClipboard::new();
    let loader = {
        let config = config.clone();
        let clipboard = clipboard.clone();
        app::spawn_loader(move || app::build_calculator(&config, clipboard))?
    };

    let lines = app::spawn_line_reader(io::BufReader::new(io::stdin()))?;

    let interactive = io::stdout().is_terminal();
    let color = config.display.color;
    let mut page = Page::new(app::build_preloader(&config));

    if show_preloader(&mut page, &loader, &lines, interactive, color)? == Flow::Quit {
        return Ok(());
    }
    repl(&mut page, &lines, &clipboard, interactive, color)
}

/// Whether the session goes on after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the frame loop until the calculator is shown.
///
/// Lines typed meanwhile are routed to the page.
fn show_preloader(
    page: &mut Page,
    loader: &Receiver<CalculatorWidget>,
    lines: &Receiver<io::Result<String>>,
    interactive: bool,
    color: bool,
) -> AppResult<Flow> {
    let mut stdout = io::stdout().lock();
    let mut last = Instant::now();
    let mut input_open = true;

    while !page.is_ready() {
        page.poll_loader(loader)?;

        while input_open {
            match lines.try_recv() {
                Ok(line) => {
                    if run_line(page, &line?).0 == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => input_open = false,
            }
        }

        let now = Instant::now();
        page.advance(now - last);
        last = now;

        if interactive && !page.is_ready() {
            write!(stdout, "{CLEAR_SCREEN}{}", page.render(color))?;
            stdout.flush()?;
        }
        std::thread::sleep(FRAME_TIME);
    }
    Ok(Flow::Continue)
}

/// Handles input lines until EOF or `quit`.
fn repl(
    page: &mut Page,
    lines: &Receiver<io::Result<String>>,
    clipboard: &MemoryClipboard,
    interactive: bool,
    color: bool,
) -> AppResult<()> {
    let mut last = Instant::now();
    draw(page, interactive, color)?;

    for line in lines {
        let line = line?;

        // Notice timers run on wall time between lines.
        let now = Instant::now();
        page.update(&InputState::new(), (now - last).as_secs_f32());
        last = now;

        let (flow, copied) = run_line(page, &line);
        if flow == Flow::Quit {
            return Ok(());
        }

        draw(page, interactive, color)?;
        if let Some(text) = clipboard.contents().filter(|_| copied) {
            println!("copied {text}");
        }
    }
    Ok(())
}

/// Parses one line and dispatches it. Also reports whether a copy landed.
fn run_line(page: &mut Page, line: &str) -> (Flow, bool) {
    let parsed = command::parse_line(line);
    for error in &parsed.errors {
        tracing::warn!(%error, "skipped token");
        eprintln!("kalkulator: {error}");
    }

    let mut copied = false;
    for command in parsed.commands {
        match command {
            Command::Quit => return (Flow::Quit, copied),
            Command::Action(action) => {
                let applied = page.dispatch(action);
                copied |= applied && action == Action::CopyResult;
            }
        }
    }
    (Flow::Continue, copied)
}

fn draw(page: &Page, interactive: bool, color: bool) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    if interactive {
        write!(stdout, "{CLEAR_SCREEN}")?;
    }
    write!(stdout, "{}", page.render(color))?;
    stdout.flush()?;
    Ok(())
}
