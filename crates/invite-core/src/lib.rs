#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod countdown;
pub mod lightbox;
pub mod platform;
pub mod tabs;
pub mod toast;

#[cfg(feature = "cli")]
use std::ffi::OsString;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  use anyhow::Context;
  use tracing::{
    debug,
    info
  };

  let cli =
    cli::GlobalCli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting invite CLI"
  );
  debug!(command = ?cli.command, "parsed command");

  let cfg = config::InviteConfig::load(
    cli.config.as_deref()
  )
  .context(
    "failed to load invitation config"
  )?;

  let stdout = std::io::stdout();
  cli::execute(
    &cfg,
    cli.command,
    &mut stdout.lock()
  )?;

  debug!("done");
  Ok(())
}
