//! Subcommand implementations. Each returns the text report `main` prints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;
use url::Url;

use kalkyl_core::calculations::{
    BmiInput, CalculationError, CompoundInput, FastingInput, LoanInput, fasting::format_clock,
};
use kalkyl_core::gate::confirm_upgrade;
use kalkyl_core::share::{decode_or_default, share_link, share_url};
use kalkyl_core::utils::{format_kronor, format_swedish};
use kalkyl_core::{
    AccessGate, CalculatorInfo, Category, Clipboard, FeatureFlags, GateView, Session,
    ShareError, ShareState, ShareStatus, UpsellPrompt,
};

use crate::cli::ShareTarget;

/// Errors surfaced to the user by a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown calculator '{0}'")]
    UnknownCalculator(String),

    #[error("unknown category '{0}' (expected one of: Ekonomi, Hälsa, Tid, Matematik, Vardag)")]
    UnknownCategory(String),

    #[error("no calculator at '{0}'")]
    UnknownRoute(String),

    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    Share(#[from] ShareError),
}

// ─── list ────────────────────────────────────────────────────────────────────

/// Parses a `--category` value.
pub fn parse_category(raw: &str) -> Result<Category, CommandError> {
    Category::parse(raw).ok_or_else(|| CommandError::UnknownCategory(raw.to_string()))
}

/// Listed calculators grouped by category, optionally just one category.
pub fn list(
    flags: &FeatureFlags,
    category: Option<Category>,
) -> String {
    let listed = flags.listed_calculators();
    if listed.is_empty() && !flags.show_calculators() {
        return "Kalkylatorlistan är dold.".to_string();
    }

    let categories = match category {
        Some(category) => vec![category],
        None => Category::all().to_vec(),
    };

    let mut lines = Vec::new();
    for category in categories {
        let mut in_category = listed.iter().filter(|c| c.category == category).peekable();
        if in_category.peek().is_none() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(category.label().to_string());
        lines.extend(in_category.map(|c| list_line(c)));
    }

    if lines.is_empty() {
        return "Inga synliga kalkylatorer.".to_string();
    }
    lines.join("\n")
}

fn list_line(calculator: &CalculatorInfo) -> String {
    let marker = if calculator.premium { "  [Premium]" } else { "" };
    format!("  {:<28} {}{marker}", calculator.title, calculator.path)
}

// ─── gate ────────────────────────────────────────────────────────────────────

/// Whether `id` opens for the session or shows the upsell.
pub fn gate(
    session: &Session,
    id: &str,
) -> Result<String, CommandError> {
    let calculator = session
        .registry
        .get(id)
        .ok_or_else(|| CommandError::UnknownCalculator(id.to_string()))?;

    Ok(match AccessGate::new(&session.premium).render(id, || format!("{}: öppen", calculator.title)) {
        GateView::Content(text) => text,
        GateView::Upsell(prompt) => format_upsell(&prompt),
    })
}

fn format_upsell(prompt: &UpsellPrompt) -> String {
    format!(
        "{}: låst\n{}\n{}\n[{}]",
        prompt.title, prompt.heading, prompt.message, prompt.action_label
    )
}

/// `--premium`: walks the upsell flow the way the site does, opening the
/// upgrade modal and confirming it.
pub fn subscribe(session: &mut Session) {
    session.premium.open_upgrade_modal();
    confirm_upgrade(&mut session.premium);
}

// ─── share ───────────────────────────────────────────────────────────────────

/// Builds the share link and, when a clipboard is given, copies it. A
/// clipboard failure is reported in the output, not as an error.
pub fn share(
    session: &Session,
    host: &Url,
    target: ShareTarget,
    clipboard: Option<&mut dyn Clipboard>,
) -> Result<String, CommandError> {
    let url = match target {
        ShareTarget::Loan(args) => share_url(host, &session.registry, &LoanInput::from(args))?,
        ShareTarget::Bmi(args) => share_url(host, &session.registry, &BmiInput::from(args))?,
        ShareTarget::Ranta(args) => share_url(host, &session.registry, &CompoundInput::from(args))?,
        ShareTarget::Fasta(args) => share_url(host, &session.registry, &FastingInput::from(args))?,
    };

    let Some(clipboard) = clipboard else {
        return Ok(url.to_string());
    };

    let result = share_link(clipboard, &url);
    let status = ShareStatus::from_result(&result);
    Ok(match result {
        Ok(()) => format!("{url}\n{}", status.label()),
        Err(error) => format!("{url}\n{} ({error})", status.label()),
    })
}

// ─── open ────────────────────────────────────────────────────────────────────

/// Restores a share link, passes it through the premium gate and runs the
/// calculator. `now` is the fasting timer's reference time.
pub fn open(
    session: &Session,
    raw_url: &str,
    now: DateTime<Utc>,
) -> Result<String, CommandError> {
    let url = Url::parse(raw_url).map_err(|source| CommandError::InvalidUrl {
        url: raw_url.to_string(),
        source,
    })?;
    let calculator = session
        .registry
        .get_by_path(url.path())
        .ok_or_else(|| CommandError::UnknownRoute(url.path().to_string()))?;
    debug!(id = calculator.id, "opening shared link");

    let query = url.query().unwrap_or_default();
    let view = AccessGate::new(&session.premium).render(calculator.id, || run(calculator, query, now));
    match view {
        GateView::Content(report) => report,
        GateView::Upsell(prompt) => Ok(format_upsell(&prompt)),
    }
}

fn run(
    calculator: &CalculatorInfo,
    query: &str,
    now: DateTime<Utc>,
) -> Result<String, CommandError> {
    let id = calculator.id;
    let body = if id == LoanInput::CALCULATOR_ID {
        restore(query, report_loan)?
    } else if id == BmiInput::CALCULATOR_ID {
        restore(query, report_bmi)?
    } else if id == CompoundInput::CALCULATOR_ID {
        restore(query, report_compound)?
    } else if id == FastingInput::CALCULATOR_ID {
        restore(query, |input: &FastingInput| report_fasting(input, now))?
    } else {
        "Den här kalkylatorn har inga delbara värden.".to_string()
    };
    Ok(format!("{}\n{body}", calculator.title))
}

fn restore<T: ShareState>(
    query: &str,
    report: impl FnOnce(&T) -> Result<String, CalculationError>,
) -> Result<String, CommandError> {
    let restored = decode_or_default::<T>(query);
    let origin = if restored.shared {
        "Värden från delad länk"
    } else {
        "Standardvärden"
    };
    Ok(format!("({origin})\n{}", report(&restored.state)?))
}

fn kronor(amount: i64) -> String {
    format_kronor(Decimal::from(amount))
}

fn report_loan(input: &LoanInput) -> Result<String, CalculationError> {
    let result = input.calculate()?;
    Ok([
        format!("  Lånebelopp:         {}", kronor(input.loan_amount)),
        format!("  Återbetalningstid:  {} år", input.years),
        format!("  Ränta:              {} %", format_swedish(input.interest_rate, 2)),
        format!("  Månadsbetalning:    {}", format_kronor(result.monthly_payment)),
        format!("  Månadskostnad:      {}", format_kronor(result.monthly_cost)),
        format!("  Total ränta:        {}", format_kronor(result.total_interest)),
        format!("  Totala avgifter:    {}", format_kronor(result.total_fees)),
        format!("  Total kostnad:      {}", format_kronor(result.total_cost)),
        format!("  Att återbetala:     {}", format_kronor(result.total_repayment)),
    ]
    .join("\n"))
}

fn report_bmi(input: &BmiInput) -> Result<String, CalculationError> {
    let result = input.calculate()?;
    Ok([
        format!("  BMI:                {}", format_swedish(result.bmi, 1)),
        format!("  Klassning:          {}", result.class.label()),
        format!(
            "  Normalvikt:         {}–{} kg",
            format_swedish(result.normal_weight_min, 1),
            format_swedish(result.normal_weight_max, 1)
        ),
    ]
    .join("\n"))
}

fn report_compound(input: &CompoundInput) -> Result<String, CalculationError> {
    let result = input.calculate()?;
    let mut lines = vec![
        format!("  Startbelopp:        {}", kronor(input.start_amount)),
        format!("  Månadssparande:     {}", kronor(input.monthly_saving)),
        format!("  Årlig avkastning:   {} %", format_swedish(input.rate, 2)),
        format!("  Slutvärde:          {}", format_kronor(result.final_balance)),
        format!("  Insatt:             {}", format_kronor(result.total_deposits)),
        format!("  Avkastning:         {}", format_kronor(result.total_return)),
    ];
    lines.extend(
        result
            .yearly
            .iter()
            .map(|y| format!("    År {:>2}: {}", y.year, format_kronor(y.balance))),
    );
    Ok(lines.join("\n"))
}

/// One status block; the live countdown redraws its first line.
pub fn report_fasting(
    input: &FastingInput,
    now: DateTime<Utc>,
) -> Result<String, CalculationError> {
    let status = input.clone().started_at(now).status(now)?;
    Ok([
        format!("  Mål:                {} h", input.hours),
        format!("  Förflutet:          {}", format_clock(status.elapsed)),
        format!("  Kvar:               {}", format_clock(status.remaining)),
        format!("  Framsteg:           {} %", format_swedish(status.progress_percent, 1)),
        format!("  Fas:                {}", status.phase.label()),
    ]
    .join("\n"))
}
