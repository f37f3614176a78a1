//! Command-line front end for the `nopol` binary.
//!
//! Parsing lives here rather than in `main.rs` so integration tests can drive
//! [`execute`] with in-memory input and output.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nopol_core::config::Config;
use nopol_core::{Locale, PlateNormalizer, RecognitionError, RecognitionResult, Trace};
use nopol_voice::{SearchKey, SearchKind};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "nopol", about = "Normalise spoken Indonesian licence plates")]
pub struct Cli {
    /// Write debug logs to $TMPDIR/nopol-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/nopol/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Clean each TEXT into a canonical plate; reads stdin lines when none given.
    Clean {
        texts: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Pick the best plate among alternative hypotheses.
    Best {
        #[arg(
            short = 'H',
            long = "hypothesis",
            value_name = "TEXT[@CONF]",
            required = true,
            value_parser = parse_hypothesis
        )]
        hypotheses: Vec<RecognitionResult>,
        #[arg(long)]
        json: bool,
    },
    /// List every valid regional prefix.
    Prefixes,
    /// Exit 0 if PREFIX is a valid regional prefix.
    Check { prefix: String },
    /// Show each normalisation step for TEXT.
    Explain {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the user-facing message for a recogniser status code.
    Error {
        #[arg(allow_negative_numbers = true)]
        code: i32,
        /// id | en (defaults to voice.locale from the config).
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Build a lookup key from TEXT.
    Key {
        /// plate | chassis | engine
        #[arg(long, default_value = "plate")]
        kind: SearchKind,
        text: String,
    },
}

/// Outcome of a command, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Found,
    NotFound,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Found => ExitCode::SUCCESS,
            Status::NotFound => ExitCode::from(1),
        }
    }
}

/// `TEXT@CONF` → scored hypothesis; a bare `TEXT` (or an unparsable tail)
/// is unscored.
pub fn parse_hypothesis(arg: &str) -> Result<RecognitionResult, String> {
    if let Some((text, tail)) = arg.rsplit_once('@') {
        if let Ok(confidence) = tail.trim().parse::<f32>() {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(format!("confidence {confidence} is outside 0..=1"));
            }
            return Ok(RecognitionResult::new(text, confidence));
        }
    }
    Ok(RecognitionResult::unscored(arg))
}

/// Load configuration, build the normalizer, and run against stdio.
pub fn run(cli: &Cli) -> anyhow::Result<Status> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in config");
            Config::defaults()
        }),
    };
    let normalizer = config.normalizer.build()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(
        &cli.command,
        &config,
        &normalizer,
        stdin.lock(),
        &mut stdout.lock(),
    )
}

#[derive(Serialize)]
struct CleanLine<'a> {
    heard: &'a str,
    plate: &'a str,
}

pub fn execute(
    command: &Command,
    config: &Config,
    normalizer: &PlateNormalizer,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Status> {
    match command {
        Command::Clean { texts, json } => {
            let lines: Vec<String> = if texts.is_empty() {
                input.lines().collect::<Result<_, _>>()?
            } else {
                texts.clone()
            };

            let mut found = false;
            for heard in &lines {
                let plate = normalizer.clean_plate(heard);
                found |= !plate.is_empty();
                if *json {
                    serde_json::to_writer(&mut *out, &CleanLine { heard, plate: &plate })?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{plate}")?;
                }
            }
            Ok(if found { Status::Found } else { Status::NotFound })
        }

        Command::Best { hypotheses, json } => {
            let best = normalizer.select_best_candidate(hypotheses);
            if *json {
                serde_json::to_writer(&mut *out, &best)?;
                writeln!(out)?;
            } else if let Some(best) = &best {
                writeln!(out, "{} → {}", best.raw_text, best.cleaned_plate)?;
            }
            Ok(if best.is_some() { Status::Found } else { Status::NotFound })
        }

        Command::Prefixes => {
            for prefix in nopol_core::list_valid_prefixes() {
                writeln!(out, "{prefix}")?;
            }
            Ok(Status::Found)
        }

        Command::Check { prefix } => {
            if nopol_core::is_valid_prefix(prefix) {
                writeln!(out, "valid")?;
                Ok(Status::Found)
            } else {
                writeln!(out, "invalid")?;
                Ok(Status::NotFound)
            }
        }

        Command::Explain { text, json } => {
            let trace = normalizer.explain(text);
            if *json {
                serde_json::to_writer_pretty(&mut *out, &trace)?;
                writeln!(out)?;
            } else {
                write_trace(out, &trace)?;
            }
            Ok(if trace.plate.is_some() { Status::Found } else { Status::NotFound })
        }

        Command::Error { code, locale } => {
            let error = RecognitionError::from_code(*code);
            writeln!(out, "{}", error.message(locale.unwrap_or(config.voice.locale)))?;
            Ok(Status::Found)
        }

        Command::Key { kind, text } => match SearchKey::parse(*kind, text, normalizer) {
            Ok(key) => {
                writeln!(out, "{} {}", key.kind(), key.value())?;
                Ok(Status::Found)
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                Ok(Status::NotFound)
            }
        },
    }
}

fn write_trace(out: &mut impl Write, trace: &Trace) -> std::io::Result<()> {
    writeln!(out, "raw:        {}", trace.raw)?;
    writeln!(out, "corrected:  {}", trace.corrected)?;
    writeln!(out, "normalized: {}", trace.normalized)?;
    for attempt in &trace.attempts {
        writeln!(
            out,
            "  {:<13} {:<14} {:?}",
            attempt.strategy.name(),
            attempt.candidate,
            attempt.verdict
        )?;
    }
    match &trace.plate {
        Some(plate) => writeln!(out, "plate:      {plate}"),
        None => writeln!(out, "plate:      (none)"),
    }
}
