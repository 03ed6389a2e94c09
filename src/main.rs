mod app;
mod dropdown;
mod entry;
mod help;
use crate::app::App;
use anyhow::Context;
use datepick::picker::{CancelReports, CommitMode, Mode, PickerConfig};
use datepick::{Outcome, Picker};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::{
    format_description::FormatItem, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, UtcOffset, Weekday,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

static YMD_HM_FMT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

static SHOW_DATE_FMT: &[FormatItem<'_>] = format_description!("[year]/[month]/[day]");

static SHOW_DATE_TIME_FMT: &[FormatItem<'_>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    with_time: bool,
    week_start: Option<Weekday>,
    commit_mode: Option<CommitMode>,
    cancel_reports: CancelReports,
    log_file: Option<PathBuf>,
    start: Option<Start>,
}

/// Initial value given on the command line
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Start {
    Date(Date),
    DateTime(PrimitiveDateTime),
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('t') | Arg::Long("time") => opts.with_time = true,
                Arg::Short('w') | Arg::Long("week-start") => {
                    opts.week_start = Some(parser.value()?.parse_with(parse_weekday)?);
                }
                Arg::Long("live") => opts.commit_mode = Some(CommitMode::Live),
                Arg::Long("confirm") => opts.commit_mode = Some(CommitMode::Confirm),
                Arg::Long("cancel-reports") => {
                    opts.cancel_reports = parser.value()?.parse_with(parse_cancel_reports)?;
                }
                Arg::Long("log-file") => opts.log_file = Some(parser.value()?.into()),
                Arg::Value(value) if opts.start.is_none() => {
                    let value = value.string()?;
                    match parse_start(&value) {
                        Ok(start) => opts.start = Some(start),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                if let Some(ref path) = opts.log_file {
                    init_logging(path)?;
                }
                let value = opts.initial_value()?;
                let picker = Picker::new(value, opts.config(), |outcome| {
                    if let Outcome::Updated(value) = outcome {
                        log::info!("Value updated to {value}");
                    }
                });
                let outcome = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(picker).run(terminal).context("failed to run picker")
                })?;
                println!("{}", show_outcome(outcome, opts.mode())?);
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepick [<options>] [YYYY-MM-DD | YYYY-MM-DDTHH:MM]");
                println!();
                println!("Pick a date (or date & time) from a calendar in the terminal");
                println!();
                println!("Options:");
                println!("  -t, --time                Also pick a time of day");
                println!("  -w, --week-start DAY      Day of the week shown first [default: monday]");
                println!("      --live                Report every edit as it happens");
                println!("      --confirm             Only report the value once accepted");
                println!("      --cancel-reports initial|current");
                println!("                            Value reported when cancelling [default: initial]");
                println!("      --log-file PATH       Write log messages to PATH");
                println!("  -h, --help                Display this help message and exit");
                println!("  -V, --version             Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl RunOptions {
    fn mode(&self) -> Mode {
        if self.with_time || matches!(self.start, Some(Start::DateTime(_))) {
            Mode::DateAndTime
        } else {
            Mode::DateOnly
        }
    }

    fn config(&self) -> PickerConfig {
        let mut config = match self.mode() {
            Mode::DateOnly => PickerConfig::date(),
            Mode::DateAndTime => PickerConfig::date_time(),
        };
        if let Some(weekday) = self.week_start {
            config = config.week_start(weekday);
        }
        if let Some(commit_mode) = self.commit_mode {
            config = config.commit_mode(commit_mode);
        }
        config.cancel_reports(self.cancel_reports)
    }

    fn initial_value(&self) -> anyhow::Result<OffsetDateTime> {
        let Some(start) = self.start else {
            return OffsetDateTime::now_local().context("failed to determine local time");
        };
        let offset = UtcOffset::current_local_offset()
            .context("failed to determine local time zone offset")?;
        Ok(match start {
            Start::Date(date) => date.midnight().assume_offset(offset),
            Start::DateTime(dt) => dt.assume_offset(offset),
        })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid weekday name: {0:?}")]
struct ParseWeekdayError(String);

fn parse_weekday(s: &str) -> Result<Weekday, ParseWeekdayError> {
    let mut weekday = Weekday::Monday;
    for _ in 0..7 {
        let name = weekday.to_string();
        if s.eq_ignore_ascii_case(&name) || s.eq_ignore_ascii_case(&name[..3]) {
            return Ok(weekday);
        }
        weekday = weekday.next();
    }
    Err(ParseWeekdayError(s.to_owned()))
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("expected \"initial\" or \"current\", got {0:?}")]
struct ParseCancelReportsError(String);

fn parse_cancel_reports(s: &str) -> Result<CancelReports, ParseCancelReportsError> {
    match s {
        "initial" => Ok(CancelReports::Initial),
        "current" => Ok(CancelReports::Current),
        _ => Err(ParseCancelReportsError(s.to_owned())),
    }
}

fn parse_start(s: &str) -> Result<Start, time::error::Parse> {
    if s.contains('T') {
        PrimitiveDateTime::parse(s, &YMD_HM_FMT).map(Start::DateTime)
    } else {
        Date::parse(s, &YMD_FMT).map(Start::Date)
    }
}

fn show_outcome(outcome: Outcome, mode: Mode) -> anyhow::Result<String> {
    let age = if outcome.is_ok() { "new" } else { "old" };
    let (kind, fmt) = match mode {
        Mode::DateOnly => ("Date", SHOW_DATE_FMT),
        Mode::DateAndTime => ("DateTime", SHOW_DATE_TIME_FMT),
    };
    let shown = outcome
        .value()
        .format(&fmt)
        .context("failed to format picked value")?;
    Ok(format!("{age} {kind}: {shown}"))
}

/// Sends log records to `path`; the terminal is taken over by the picker
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
