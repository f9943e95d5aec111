//! realmterm - interactive driver for the portfolio terminal
//!
//! Reads command lines from stdin (or replays a JSON-lines event script) and
//! prints the transcript as it grows, along with realm transitions and
//! locked-realm notices.

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use realmterm::config::Config;
use realmterm::error::{Error, Result};
use realmterm::events::{self, UiEvent};
use realmterm::session::TickReport;
use realmterm::{EntryKind, Portfolio, RealmView, Viewport};

/// Interval of the timer tick driving transitions and notices
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Event script to replay instead of reading stdin
    events_path: Option<PathBuf>,
    /// Size of the simulated viewport
    viewport: Option<Viewport>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    app_args.config_path = Some(PathBuf::from(required_value(&arg, args.next())?));
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--events" | "-e" => {
                    app_args.events_path = Some(PathBuf::from(required_value(&arg, args.next())?));
                }
                "--viewport" => {
                    let value = required_value(&arg, args.next())?;
                    app_args.viewport = Some(parse_viewport(&value)?);
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("realmterm v{}", realmterm::VERSION);
                    process::exit(0);
                }
                other if other.starts_with('-') => {
                    return Err(Error::InvalidArgument {
                        argument: other.to_string(),
                        reason: "Unknown option".to_string(),
                    });
                }
                other => {
                    warn!("Ignoring positional argument: {}", other);
                }
            }
        }

        Ok(app_args)
    }
}

fn required_value(option: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::InvalidArgument {
        argument: option.to_string(),
        reason: "Missing value".to_string(),
    })
}

/// Parse `<W>x<H>`, e.g. `1280x800`
fn parse_viewport(value: &str) -> Result<Viewport> {
    let invalid = || Error::InvalidArgument {
        argument: value.to_string(),
        reason: "Expected <WIDTH>x<HEIGHT> with positive numbers".to_string(),
    };
    let (width, height) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: f32 = width.trim().parse().map_err(|_| invalid())?;
    let height: f32 = height.trim().parse().map_err(|_| invalid())?;
    if !(width > 0.0 && height > 0.0) {
        return Err(invalid());
    }
    Ok(Viewport::new(width, height))
}

/// Print help information
fn print_help() {
    println!("realmterm - terminal core of a realm-gated portfolio site");
    println!();
    println!("USAGE:");
    println!("    realmterm [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -e, --events <PATH>    Replay a JSON-lines event script instead of reading stdin");
    println!("        --viewport <WxH>   Simulated viewport size (default 1280x800)");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    realmterm looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $REALMTERM_CONFIG");
    println!("    3. <config dir>/realmterm/config.toml (or .json)");
    println!("    4. ~/.realmterm/config.toml (or .json)");
    println!("    5. ./realmterm.toml (or .json)");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    REALMTERM_CONFIG       Path to configuration file");
    println!("    REALMTERM_DEBUG        Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn init_logging(args: &AppArgs) {
    let debug_env = env::var("REALMTERM_DEBUG")
        .map_or(false, |v| v == "1" || v.eq_ignore_ascii_case("true"));
    let log_level = if args.debug || debug_env { "debug" } else { "warn" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Load configuration from `--config` or the default locations
fn load_configuration(args: &AppArgs) -> Result<Config> {
    match &args.config_path {
        Some(path) => realmterm::init_with_config(path),
        None => realmterm::init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse(env::args()).unwrap_or_else(|e| {
        eprintln!("{}", realmterm::handle_startup_error(&e));
        process::exit(2);
    });

    init_logging(&args);
    info!("Starting realmterm v{}", realmterm::VERSION);
    debug!("Arguments: {:?}", args);

    let config = match load_configuration(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration failed: {}", e);
            eprintln!("{}", realmterm::handle_startup_error(&e));
            process::exit(1);
        }
    };

    let viewport = args.viewport.unwrap_or_default();
    let mut app = Portfolio::new(config, viewport);
    let mut screen = Screen::default();

    match &args.events_path {
        Some(path) => replay(&mut app, &mut screen, path).await?,
        None => repl(&mut app, &mut screen).await?,
    }

    info!("realmterm shutdown complete");
    Ok(())
}

/// Replay an event script on a simulated clock
async fn replay(app: &mut Portfolio, screen: &mut Screen, path: &Path) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read event script {}", path.display()))?;
    let script = events::parse_script(&text)
        .with_context(|| format!("Failed to parse event script {}", path.display()))?;
    info!("Replaying {} event(s) from {}", script.len(), path.display());

    let mut now = Instant::now();
    for event in script {
        if let UiEvent::Wait { ms } = event {
            now += Duration::from_millis(ms);
        }
        let report = app.handle_event(event, now);
        screen.render(app, &report);
    }

    screen.summary(app);
    Ok(())
}

/// Interactive loop: one stdin line per submitted command
async fn repl(app: &mut Portfolio, screen: &mut Screen) -> anyhow::Result<()> {
    app.open_terminal();
    screen.render(app, &TickReport::default());
    screen.prompt(app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    debug!("stdin closed");
                    break;
                };
                let report = app.handle_event(UiEvent::Submit { line }, Instant::now());
                screen.render(app, &report);
                if !app.session().is_terminal_open() {
                    break;
                }
                screen.prompt(app);
            }
            _ = ticker.tick() => {
                let report = app.handle_event(UiEvent::Tick, Instant::now());
                if !report.is_empty() {
                    screen.render(app, &report);
                    screen.prompt(app);
                }
            }
        }
    }

    Ok(())
}

/// Incremental stdout renderer
#[derive(Debug, Default)]
struct Screen {
    /// Id of the last transcript entry printed
    last_entry: Option<String>,
    /// Ids of the notices already announced
    announced: Vec<String>,
}

impl Screen {
    fn render(&mut self, app: &Portfolio, report: &TickReport) {
        let transcript = app.terminal().transcript();
        for entry in transcript.after(self.last_entry.as_deref()) {
            let color = match entry.kind() {
                EntryKind::Command => "\x1b[36m",
                EntryKind::Output => "",
                EntryKind::Error => "\x1b[31m",
                EntryKind::System => "\x1b[33m",
            };
            let reset = if color.is_empty() { "" } else { "\x1b[0m" };
            println!("{}{}{}", color, entry.content(), reset);
        }
        self.last_entry = transcript.last().map(|entry| entry.id().to_string());

        for notice in app.session().notices() {
            if !self.announced.iter().any(|id| id == notice.id()) {
                println!("\x1b[35m{}  ({})\x1b[0m", notice.message(), notice.hint());
                self.announced.push(notice.id().to_string());
            }
        }
        self.announced
            .retain(|id| app.session().notices().iter().any(|notice| notice.id() == id));

        for section in &report.arrived {
            println!("\x1b[32m{} {} ready\x1b[0m", section.icon(), section.title());
        }
    }

    fn prompt(&self, app: &Portfolio) {
        use std::io::Write;
        print!("{} ", app.prompt());
        let _ = std::io::stdout().flush();
    }

    fn summary(&self, app: &Portfolio) {
        let view = match app.view() {
            RealmView::Hidden => "transitioning".to_string(),
            RealmView::Content(section) => section.path(),
            RealmView::Locked(realm) => format!("{} (locked)", realm.section().path()),
        };
        let geometry = app.terminal().window().geometry();
        println!();
        println!("view:     {}", view);
        println!(
            "window:   {:.0}x{:.0} at ({:.0}, {:.0}){}",
            geometry.width,
            geometry.height,
            geometry.x,
            geometry.y,
            if app.terminal().window().is_maximized() { " maximized" } else { "" }
        );
        println!(
            "terminal: {}",
            if app.session().is_terminal_open() { "open" } else { "closed" }
        );
        println!("notices:  {}", app.session().notices().len());
    }
}
