use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use drill_core::model::{DrillSettings, QuestionBank};
use services::assistant::{API_KEY_ENV, AssistantConfig};
use services::{AssistService, Clock};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const TIME_LIMIT_ENV: &str = "SQL_DRILL_TIME_LIMIT";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidTimeLimit { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidTimeLimit { raw } => {
                write!(f, "invalid time limit (expected whole seconds): {raw}")
            }
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

fn parse_time_limit(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ArgsError::InvalidTimeLimit { raw }),
    }
}

struct DesktopApp {
    bank: Arc<QuestionBank>,
    assistant: Arc<AssistService>,
    settings: DrillSettings,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn assistant(&self) -> Arc<AssistService> {
        Arc::clone(&self.assistant)
    }

    fn drill_settings(&self) -> DrillSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  sqldrill [ui]      [--time-limit <secs>] [--model <id>] [--base-url <url>]");
    eprintln!("  sqldrill questions [--time-limit <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --time-limit 240");
    eprintln!("  --model gpt-4o-mini");
    eprintln!("  --base-url https://api.openai.com/v1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SQL_DRILL_AI_API_KEY, SQL_DRILL_AI_BASE_URL, SQL_DRILL_AI_MODEL,");
    eprintln!("  SQL_DRILL_TIME_LIMIT, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Questions,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "questions" => Some(Self::Questions),
            _ => None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    time_limit_secs: Option<u32>,
    model: Option<String>,
    base_url: Option<String>,
}

impl Args {
    /// Flags win over the environment value.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_time_limit: Option<String>,
    ) -> Result<(Self, bool), ArgsError> {
        let mut parsed = Self {
            time_limit_secs: env_time_limit.map(parse_time_limit).transpose()?,
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--time-limit" => {
                    let value = require_value(args, "--time-limit")?;
                    parsed.time_limit_secs = Some(parse_time_limit(value)?);
                }
                "--model" => parsed.model = Some(require_value(args, "--model")?),
                "--base-url" => parsed.base_url = Some(require_value(args, "--base-url")?),
                "--help" | "-h" => return Ok((parsed, true)),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok((parsed, false))
    }

    fn drill_settings(&self) -> Result<DrillSettings, drill_core::model::SettingsError> {
        match self.time_limit_secs {
            Some(secs) => DrillSettings::with_time_limit(secs),
            None => Ok(DrillSettings::default()),
        }
    }

    fn assistant(&self) -> AssistService {
        let config = AssistantConfig::from_env().map(|mut config| {
            if let Some(model) = &self.model {
                config = config.with_model(model.clone());
            }
            if let Some(base_url) = &self.base_url {
                config = config.with_base_url(base_url.clone());
            }
            config
        });
        match &config {
            Some(config) => tracing::info!(model = %config.model, "AI assistant enabled"),
            None => tracing::info!("AI assistant disabled; set {API_KEY_ENV} to enable it"),
        }
        AssistService::new(config)
    }
}

fn parse_command(argv: &mut Vec<String>) -> Result<Command, ArgsError> {
    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => Command::Help,
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?
        }
    };
    if matches!(cmd, Command::Ui | Command::Questions)
        && argv.first().is_some_and(|first| !first.starts_with("--"))
    {
        argv.remove(0);
    }
    Ok(cmd)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}

fn print_questions(bank: &QuestionBank, settings: DrillSettings) {
    println!(
        "{} questions, target {} minutes per query",
        bank.len(),
        settings.target_minutes()
    );
    for (idx, question) in bank.questions().iter().enumerate() {
        println!();
        println!(
            "{}. [{}] {}",
            idx + 1,
            question.difficulty.label(),
            question.title
        );
        println!("   {}", question.plain_description());
        println!("   tables: {}", bank.schema_tables(question).join(", "));
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = parse_command(&mut argv).inspect_err(|_| print_usage())?;
    if cmd == Command::Help {
        print_usage();
        return Ok(());
    }

    let mut iter = argv.into_iter();
    let (parsed, help) = Args::parse(&mut iter, std::env::var(TIME_LIMIT_ENV).ok())
        .inspect_err(|_| print_usage())?;
    if help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let settings = parsed.drill_settings()?;
    let bank = Arc::new(QuestionBank::builtin());

    match cmd {
        Command::Questions => {
            print_questions(&bank, settings);
            Ok(())
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                bank,
                assistant: Arc::new(parsed.assistant()),
                settings,
            });
            let context = build_app_context(&app);

            tracing::info!(
                time_limit_secs = settings.time_limit_secs(),
                "launching desktop drill"
            );

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Marketplace SQL Drill")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn bare_flags_default_to_ui() {
        let mut argv = args(&["--time-limit", "90"]);
        assert_eq!(parse_command(&mut argv), Ok(Command::Ui));
        assert_eq!(argv.len(), 2);

        let mut argv = args(&["questions"]);
        assert_eq!(parse_command(&mut argv), Ok(Command::Questions));
        assert!(argv.is_empty());

        let mut argv = args(&["grade"]);
        assert_eq!(
            parse_command(&mut argv),
            Err(ArgsError::UnknownCommand("grade".into()))
        );
    }

    #[test]
    fn flags_override_environment() {
        let mut iter = args(&["--time-limit", "90", "--model", "gpt-4o"]).into_iter();
        let (parsed, help) = Args::parse(&mut iter, Some("300".into())).unwrap();
        assert!(!help);
        assert_eq!(parsed.time_limit_secs, Some(90));
        assert_eq!(parsed.model.as_deref(), Some("gpt-4o"));

        let settings = parsed.drill_settings().unwrap();
        assert_eq!(settings.time_limit_secs(), 90);
        assert_eq!(settings.target_minutes(), 2);
    }

    #[test]
    fn rejects_bad_values() {
        let mut iter = args(&["--time-limit", "0"]).into_iter();
        assert_eq!(
            Args::parse(&mut iter, None),
            Err(ArgsError::InvalidTimeLimit { raw: "0".into() })
        );

        let mut iter = args(&["--model"]).into_iter();
        assert_eq!(
            Args::parse(&mut iter, None),
            Err(ArgsError::MissingValue { flag: "--model" })
        );

        assert_eq!(
            Args::parse(&mut std::iter::empty(), Some("soon".into())),
            Err(ArgsError::InvalidTimeLimit { raw: "soon".into() })
        );
    }
}
