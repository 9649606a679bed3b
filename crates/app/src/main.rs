use std::fmt;
use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use services::{QuizSession, load_questions, shuffle_questions, spawn_line_reader};
use storage::FileScoreSink;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLimit { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLimit { raw } => write!(f, "invalid --limit value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug)]
struct Args {
    filename: String,
    limit: Duration,
    shuffle: bool,
    output: Option<String>,
    retry: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  quiz [--filename <path>] [--limit <seconds>] [--shuffle] [--output <path>] [--retry]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --filename problems.csv");
    eprintln!("  --limit 30        whole-quiz deadline in seconds");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_FILE, QUIZ_LIMIT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut filename = std::env::var("QUIZ_FILE")
            .ok()
            .unwrap_or_else(|| "problems.csv".into());
        let mut limit_secs = std::env::var("QUIZ_LIMIT")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30);
        let mut shuffle = false;
        let mut output = None;
        let mut retry = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--filename" => filename = require_value(args, "--filename")?,
                "--limit" => {
                    let value = require_value(args, "--limit")?;
                    limit_secs = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLimit { raw: value.clone() })?;
                    if limit_secs == 0 {
                        return Err(ArgsError::InvalidLimit { raw: value });
                    }
                }
                "--shuffle" => shuffle = true,
                "--output" => output = Some(require_value(args, "--output")?),
                "--retry" => retry = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            filename,
            limit: Duration::from_secs(limit_secs),
            shuffle,
            output,
            retry,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    // `main` prints the error itself; only add the usage text here.
    let args = Args::parse(&mut argv).map_err(|e| {
        print_usage();
        e
    })?;

    let file = File::open(&args.filename)
        .map_err(|e| format!("could not open {}: {e}", args.filename))?;
    let mut questions = load_questions(file)?;
    if args.shuffle {
        questions = shuffle_questions(questions, &mut rand::rng());
    }

    let mut session = QuizSession::new(args.limit).with_retry(args.retry);
    // An empty --output value disables persistence.
    if let Some(path) = args.output.as_deref().filter(|p| !p.is_empty()) {
        session = session.with_score_sink(Arc::new(FileScoreSink::new(path)));
    }

    let mut answers = spawn_line_reader();
    let mut stdout = std::io::stdout();
    let report = session.run(questions, &mut answers, &mut stdout).await?;
    info!("session ended with {}", report.result);

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_owned());
        Args::parse(&mut iter)
    }

    #[test]
    fn all_flags_parse() {
        let args = parse(&[
            "--filename", "capitals.csv",
            "--limit", "10",
            "--shuffle",
            "--output", "scores.txt",
            "--retry",
        ])
        .unwrap();

        assert_eq!(args.filename, "capitals.csv");
        assert_eq!(args.limit, Duration::from_secs(10));
        assert!(args.shuffle);
        assert_eq!(args.output.as_deref(), Some("scores.txt"));
        assert!(args.retry);
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let err = parse(&["--nope"]).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(_)));
    }

    #[test]
    fn flag_without_value_is_rejected() {
        let err = parse(&["--filename"]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--filename" }));
    }

    #[test]
    fn zero_or_garbage_limit_is_rejected() {
        assert!(matches!(
            parse(&["--limit", "0"]).unwrap_err(),
            ArgsError::InvalidLimit { .. }
        ));
        assert!(matches!(
            parse(&["--limit", "soon"]).unwrap_err(),
            ArgsError::InvalidLimit { .. }
        ));
    }

    #[test]
    fn each_args_error_renders_one_line() {
        let rendered = ArgsError::UnknownArg("--nope".into()).to_string();
        assert_eq!(rendered, "unknown argument: --nope");
        assert_eq!(rendered.lines().count(), 1);
    }
}
