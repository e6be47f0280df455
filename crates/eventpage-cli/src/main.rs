//! Event Page CLI
//!
//! Terminal front end for eventpage-core.
//!
//! ## Usage
//!
//! ```bash
//! # Live countdown to the configured event
//! eventpage countdown
//!
//! # Print a single frame
//! eventpage countdown --once
//!
//! # Count down to a specific moment, pretending it is another time now
//! eventpage countdown --target 2026-01-11T09:00:00+07:00 --now 2026-01-11T08:59:55+07:00
//!
//! # Show the payment QR code in the terminal
//! eventpage qr
//!
//! # Show the resolved configuration
//! eventpage info
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use eventpage_core::countdown::{
    ticker, Clock, CountdownEngine, CountdownFrame, DisplaySurface, ManualClock, SystemClock,
};
use eventpage_core::{gift, EventConfig, TargetMoment};

/// Event Page - countdown and gift details
#[derive(Parser)]
#[command(name = "eventpage")]
#[command(version = "0.1.0")]
#[command(about = "Event Page - countdown and gift details")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Event config file (default: <config dir>/eventpage/event.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count down to the event
    Countdown {
        /// Target date/time (overrides the config)
        #[arg(short, long)]
        target: Option<String>,

        /// Pretend the current time is this instant
        #[arg(long)]
        now: Option<String>,

        /// Print one frame and exit
        #[arg(long)]
        once: bool,
    },

    /// Print the payment QR code
    Qr {
        /// Account to encode (overrides the config)
        #[arg(short, long)]
        account: Option<String>,
    },

    /// Show the resolved configuration
    Info,
}

/// Paints frames to stdout, in place when live.
struct TerminalSurface {
    live: bool,
}

impl DisplaySurface for TerminalSurface {
    fn replace(&mut self, frame: &CountdownFrame) {
        let mut out = std::io::stdout().lock();
        let _ = if self.live {
            write!(out, "\r{}", frame).and_then(|_| out.flush())
        } else {
            writeln!(out, "{}", frame)
        };
    }
}

/// Wall clock shifted so that it started at a chosen instant.
struct ShiftedClock {
    start: DateTime<Utc>,
    origin: Instant,
}

impl Clock for ShiftedClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = chrono::Duration::from_std(self.origin.elapsed()).unwrap_or_default();
        self.start + elapsed
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a user-supplied `--now` value.
fn parse_now(s: &str) -> Result<DateTime<Utc>> {
    TargetMoment::parse(s)
        .map(|t| t.instant())
        .map_err(|e| anyhow::anyhow!("Invalid --now '{}': {}", s, e))
}

async fn run_countdown<C: Clock>(config: &EventConfig, clock: C, once: bool) {
    let surface = TerminalSurface { live: !once };
    let Some(mut engine) = CountdownEngine::init(config, Some(surface), clock) else {
        return;
    };

    if once {
        engine.tick();
        return;
    }

    let engine = ticker::run(engine).await;
    println!();
    println!("Countdown finished ({})", engine.target().instant().to_rfc3339());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = EventConfig::load_or_default(cli.config.as_deref());
    tracing::debug!(?config, "Resolved event config");

    match cli.command {
        Commands::Countdown { target, now, once } => {
            let config = match target {
                Some(target) => config.with_date_iso(target),
                None => config,
            };

            match now.as_deref().map(parse_now).transpose()? {
                // A single frame should show exactly the requested moment.
                Some(start) if once => run_countdown(&config, ManualClock::new(start), once).await,
                Some(start) => {
                    let clock = ShiftedClock {
                        start,
                        origin: Instant::now(),
                    };
                    run_countdown(&config, clock, once).await;
                }
                None => run_countdown(&config, SystemClock, once).await,
            }
        }

        Commands::Qr { account } => {
            let account = account.unwrap_or_else(|| config.bank.account.clone());
            let Some(account) = gift::resolve_account(None, &account) else {
                anyhow::bail!(gift::MISSING_ACCOUNT_MESSAGE);
            };
            println!("{}", gift::account_qr_text(&account)?);
            println!("{}", account);
        }

        Commands::Info => {
            let target = TargetMoment::from_config(&config.date_iso);

            println!("Event Page v0.1.0");
            println!();
            println!("Event:");
            println!("  Date: {}", config.date_iso);
            println!("  Target: {}", target.instant().to_rfc3339());
            println!("  Fallback: {}", if target.is_fallback() { "Yes" } else { "No" });
            println!();
            println!("Gift:");
            if config.bank.account.trim().is_empty() {
                println!("  Account: (not set)");
            } else {
                println!("  Account: {}", config.bank.account);
            }
            println!();
            match cli.config.or_else(eventpage_core::default_config_path) {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: (none)"),
            }
        }
    }

    Ok(())
}
