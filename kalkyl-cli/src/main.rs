use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use kalkyl_cli::cli::{Cli, Command};
use kalkyl_cli::clipboard::SystemClipboard;
use kalkyl_cli::commands;
use kalkyl_cli::config::SiteConfig;
use kalkyl_cli::logging;
use kalkyl_cli::ticker::{self, TickerOutcome};
use kalkyl_core::calculations::fasting::format_clock;
use kalkyl_core::calculations::FastingInput;
use kalkyl_core::utils::format_swedish;
use kalkyl_core::{Clipboard, Registry};

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let registry = Registry::builtin();
    registry.validate().context("built-in calculator catalog is inconsistent")?;

    let config = SiteConfig::resolve(cli.config.as_deref(), cli.host.as_deref(), &registry)
        .context("failed to load configuration")?;
    debug!(host = %config.host, "configuration resolved");

    let mut session = config.session(registry);
    if cli.premium {
        commands::subscribe(&mut session);
    }

    match cli.command {
        Command::List { category } => {
            let category = category.as_deref().map(commands::parse_category).transpose()?;
            println!("{}", commands::list(&session.flags, category));
        }
        Command::Gate { id } => {
            println!("{}", commands::gate(&session, &id)?);
        }
        Command::Share { no_copy, target } => {
            let mut system = SystemClipboard::new();
            let clipboard: Option<&mut dyn Clipboard> = if no_copy { None } else { Some(&mut system) };
            println!("{}", commands::share(&session, &config.host, target, clipboard)?);
        }
        Command::Open { url } => {
            println!("{}", commands::open(&session, &url, chrono::Utc::now())?);
        }
        Command::Fasta(args) => {
            fasta(args.into()).await?;
        }
    }

    Ok(())
}

// ─── fasting countdown ───────────────────────────────────────────────────────

/// Redraws one status line per second until the goal or Ctrl-C. Console
/// logging is muted meanwhile so records do not break the line.
async fn fasta(input: FastingInput) -> anyhow::Result<()> {
    logging::set_console_enabled(false)?;

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler; run until the goal instead.
            std::future::pending::<()>().await;
        }
    };

    let outcome = ticker::run_fasting(
        input,
        chrono::Utc::now,
        |status| {
            let mut out = std::io::stdout().lock();
            let _ = write!(
                out,
                "\r{} kvar  {:>5} %  {:<20}",
                format_clock(status.remaining),
                format_swedish(status.progress_percent, 1),
                status.phase.label()
            );
            let _ = out.flush();
        },
        shutdown,
    )
    .await;

    println!();
    logging::set_console_enabled(true)?;

    match outcome? {
        TickerOutcome::Completed { ticks } => {
            info!(ticks, "fast completed");
            println!("Fastan är klar!");
        }
        TickerOutcome::Cancelled { ticks } => {
            info!(ticks, "fast interrupted");
            println!("Avbruten.");
        }
    }
    Ok(())
}
