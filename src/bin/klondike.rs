//! Line-oriented driver: one JSON `Command` per stdin line, one JSON
//! `Report` per stdout line.
//!
//! ```text
//! $ echo '{"command":"new_game","draw":3}' | klondike --seed 7 --board
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser};
use log::{LevelFilter, Log, Metadata, Record};

use klondike_engine::{Command, DrawMode, GameConfig, GameSession};

#[derive(Parser, Debug)]
#[command(name = "klondike", version, about = "Play Klondike over JSON lines")]
struct Args {
    /// Draw mode for games dealt without an explicit one (1 or 3)
    #[arg(long, default_value = "1", value_parser = parse_draw)]
    draw: DrawMode,

    /// Fixed seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board to stderr after every command
    #[arg(long)]
    board: bool,

    /// Log verbosity; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_draw(s: &str) -> Result<DrawMode, String> {
    let n: u8 = s.parse().map_err(|e| format!("{}", e))?;
    DrawMode::try_from(n)
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow!("installing logger: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let mut config = GameConfig::default().with_draw(args.draw);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = GameSession::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("line {}: {}", n + 1, err);
                serde_json::to_writer(&mut out, &serde_json::json!({ "error": err.to_string() }))?;
                writeln!(out)?;
                continue;
            }
        };

        let report = session.execute(&command);
        serde_json::to_writer(&mut out, &report).context("writing report")?;
        writeln!(out)?;
        out.flush()?;

        if args.board {
            eprintln!("{}", report.state);
        }
    }

    Ok(())
}
