use agecalc::{age_at_date, age_from_today, date_from_age, CalcError, CalendarDate};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::Level;

#[derive(thiserror::Error, Debug)]
pub enum AgeCalcCliError {
    #[error("{0}")]
    LibraryError(#[from] CalcError),

    #[error("{0}")]
    UnparseableDate(#[from] chrono::ParseError),
}

/// Which date counts as "today". Defaults to the local date.
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct TodayArg {
    /// [DATE PROVIDER] Use the current UTC date as today. Exclusive with other date providers.
    #[arg(long)]
    utc: bool,

    /// [DATE PROVIDER] Use the current local date as today. This is the default. Exclusive with
    /// other date providers.
    #[arg(long)]
    local: bool,

    /// [DATE PROVIDER] Use a date in format `YYYY-MM-DD` as today. Exclusive with other date
    /// providers.
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<String>,
}

impl TodayArg {
    fn to_date(&self) -> Result<CalendarDate, AgeCalcCliError> {
        // multiple is false, so at most one of these is set
        if self.utc {
            return Ok(CalendarDate::utc_today());
        }
        if self.local {
            return Ok(CalendarDate::local_today());
        }
        if let Some(today) = &self.today {
            return Ok(NaiveDate::parse_from_str(today, "%Y-%m-%d").map(CalendarDate::from)?);
        }
        Ok(CalendarDate::local_today())
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more. Repeat for even more (`-vvv`).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Calculates an age from a date of birth up to today
    ///
    /// Dates are `DD/MM/YYYY`. Separators are optional: `31/01/1990` and `31011990` are the same.
    Age {
        /// The date of birth
        dob: String,

        #[command(flatten)]
        today: TodayArg,
    },

    /// Calculates an age at a specific date
    At {
        /// The date of birth
        dob: String,

        /// The date to calculate the age at
        target: String,
    },

    /// Finds the date on which an age is reached
    ///
    /// Omitted amounts count as zero.
    From {
        /// The date of birth
        dob: String,

        /// Years of age
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        years: String,

        /// Months of age, on top of the years
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        months: String,

        /// Days of age, on top of the years and months
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        days: String,
    },
}

/// Drops the `DD/MM/YYYY` display mask, keeping only the digits.
fn strip_mask(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("agecalc v{}", env!("CARGO_PKG_VERSION"));

    match do_work(cli) {
        Ok(output) => {
            println!("{output}");
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: Cli) -> Result<String, AgeCalcCliError> {
    match cli.command {
        Commands::Age { dob, today } => {
            let today = today.to_date()?;
            Ok(age_from_today(&strip_mask(&dob), &today)?.to_string())
        }
        Commands::At { dob, target } => {
            Ok(age_at_date(&strip_mask(&dob), &strip_mask(&target))?.to_string())
        }
        Commands::From {
            dob,
            years,
            months,
            days,
        } => Ok(date_from_age(&strip_mask(&dob), &years, &months, &days)?.to_string()),
    }
}
