use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::{NaiveDate, Utc};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::InviteConfig;
use crate::countdown::{self, DDay};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "invite",
    version,
    about = "Wedding invitation helpers: D-day countdown and page configuration"
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Config file; defaults to $INVITE_CONFIG or the user config directory.
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the countdown to the wedding date.
    Dday {
        /// Date to count from (YYYY-MM-DD); defaults to today.
        #[arg(long = "today")]
        today: Option<NaiveDate>,

        #[arg(long = "json")]
        json: bool,
    },
    /// Print the resolved configuration as TOML.
    Config,
}

#[derive(Debug, Serialize)]
struct DdayReport<'a> {
    wedding: NaiveDate,
    today: NaiveDate,
    countdown: DDay,
    text: &'a str,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 2 {
        "trace"
    } else if verbose == 1 {
        "debug"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[tracing::instrument(skip(cfg, out))]
pub fn execute<W: Write>(cfg: &InviteConfig, command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Dday { today, json } => {
            let today = today.unwrap_or_else(|| countdown::today_in(Utc::now(), cfg.timezone()));
            let dday = DDay::between(cfg.wedding.date, today);
            let text = dday.render(&cfg.messages.dday_today).to_string();
            info!(wedding = %cfg.wedding.date, %today, days = dday.days_remaining(), "computed countdown");

            if json {
                let report = DdayReport {
                    wedding: cfg.wedding.date,
                    today,
                    countdown: dday,
                    text: &text,
                };
                serde_json::to_writer(&mut *out, &report).context("failed to encode countdown")?;
                writeln!(out)?;
            } else {
                writeln!(out, "{text}")?;
            }
        }
        Command::Config => {
            write!(out, "{}", cfg.to_toml_string()?)?;
        }
    }
    Ok(())
}
