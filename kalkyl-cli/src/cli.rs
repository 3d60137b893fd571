use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use kalkyl_core::calculations::{BmiInput, CompoundInput, FastingInput, LoanInput};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Svenska kalkylatorer från kommandoraden.
///
/// Lists the calculators the current feature flags expose, builds and opens
/// share links, and checks premium gating.
#[derive(Debug, Parser)]
#[command(name = "kalkyl", version, about, long_about = None)]
pub struct Cli {
    /// TOML file with the site host and feature flag overrides.
    /// Without it the launch visibility set is used.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Site base URL used for share links. Overrides the config file.
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Log filter, e.g. `debug` or `kalkyl_core=trace`. Defaults to
    /// `RUST_LOG`, then `warn`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Treat the session as a premium subscriber.
    #[arg(long, global = true, default_value_t = false)]
    pub premium: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the calculators visible with the current flags.
    List {
        /// Only this category (Ekonomi, Hälsa, Tid, Matematik, Vardag).
        #[arg(long)]
        category: Option<String>,
    },

    /// Show whether a calculator opens or asks for an upgrade.
    Gate {
        /// Calculator id, e.g. `mortgage`.
        id: String,
    },

    /// Build a share link for a calculator and copy it to the clipboard.
    Share {
        /// Print the link without touching the clipboard.
        #[arg(long, default_value_t = false)]
        no_copy: bool,

        #[command(subcommand)]
        target: ShareTarget,
    },

    /// Restore a shared link and run its calculation.
    Open {
        /// Full share URL.
        url: String,
    },

    /// Live fasting countdown, updated every second until done or Ctrl-C.
    Fasta(FastingArgs),
}

#[derive(Debug, Subcommand)]
pub enum ShareTarget {
    /// Lånekalkylator
    Loan(LoanArgs),
    /// BMI-kalkylator
    Bmi(BmiArgs),
    /// Ränta på ränta
    Ranta(CompoundArgs),
    /// Fastekalkylator
    Fasta(FastingArgs),
}

#[derive(Debug, Clone, Args)]
pub struct LoanArgs {
    #[arg(long, default_value_t = 130_000)]
    pub loan_amount: i64,
    #[arg(long, default_value_t = 9)]
    pub years: u32,
    #[arg(long, default_value = "8.44")]
    pub interest_rate: Decimal,
    #[arg(long, default_value_t = 0)]
    pub setup_fee: i64,
    #[arg(long, default_value_t = 0)]
    pub annual_fee: i64,
}

impl From<LoanArgs> for LoanInput {
    fn from(args: LoanArgs) -> Self {
        Self {
            loan_amount: args.loan_amount,
            years: args.years,
            interest_rate: args.interest_rate,
            setup_fee: args.setup_fee,
            annual_fee: args.annual_fee,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct BmiArgs {
    /// Kilograms.
    #[arg(long, default_value = "70")]
    pub weight: Decimal,
    /// Centimetres.
    #[arg(long, default_value = "175")]
    pub height: Decimal,
}

impl From<BmiArgs> for BmiInput {
    fn from(args: BmiArgs) -> Self {
        Self {
            weight: args.weight,
            height: args.height,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CompoundArgs {
    #[arg(long, default_value_t = 10_000)]
    pub start_amount: i64,
    #[arg(long, default_value_t = 1_000)]
    pub monthly_saving: i64,
    #[arg(long, default_value_t = 10)]
    pub years: u32,
    #[arg(long, default_value = "7")]
    pub rate: Decimal,
}

impl From<CompoundArgs> for CompoundInput {
    fn from(args: CompoundArgs) -> Self {
        Self {
            start_amount: args.start_amount,
            monthly_saving: args.monthly_saving,
            years: args.years,
            rate: args.rate,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct FastingArgs {
    /// Fasting goal in hours.
    #[arg(long, default_value_t = 16)]
    pub hours: u32,
    /// Start time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,
}

impl From<FastingArgs> for FastingInput {
    fn from(args: FastingArgs) -> Self {
        Self {
            hours: args.hours,
            start: args.start,
        }
    }
}
