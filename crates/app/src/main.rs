use std::future::Future;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::SessionKey;
use services::{AppServices, Clock, QuestionSource, QuizLoopService, SessionOptions};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const WINDOW_TITLE: &str = "Quiz Interactivo Pro";

#[derive(Parser)]
#[command(name = "quiz", version, about = "Interactive multiple-choice quiz")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON question file; the built-in questions are used when it cannot be loaded
    #[arg(
        long,
        global = true,
        env = "QUIZ_QUESTIONS_FILE",
        default_value = "questions.json"
    )]
    questions: PathBuf,

    /// Shuffle the question order once at startup
    #[arg(long, global = true, env = "QUIZ_SHUFFLE")]
    shuffle: bool,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Commands {
    /// Launch the quiz window (default)
    Ui,
    /// Load the question file strictly and report what was found
    Validate,
}

struct DesktopApp {
    session_key: SessionKey,
    source: QuestionSource,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn session_key(&self) -> SessionKey {
        self.session_key
    }

    fn question_source(&self) -> QuestionSource {
        self.source.clone()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// Loading happens on a short-lived runtime; the desktop launcher owns its own event loop.
fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

fn validate(storage: &Storage) -> anyhow::Result<()> {
    let source = storage.questions.describe();
    let questions = block_on(storage.questions.load_questions())?
        .with_context(|| format!("cannot load questions from {source}"))?;
    println!("{source}: {} questions OK", questions.len());
    Ok(())
}

fn launch_ui(storage: &Storage, options: SessionOptions) -> anyhow::Result<()> {
    let services = block_on(AppServices::load(storage, Clock::default_clock(), options))?
        .context("failed to assemble quiz services")?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session_key: SessionKey::generate(),
        source: services.question_source().clone(),
        quiz_loop: services.quiz_loop(),
    });
    let context = build_app_context(&app);
    tracing::info!(
        source = %services.question_source().label(),
        questions = services.quiz_loop().bank().len(),
        "launching quiz window"
    );

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let storage = Storage::with_questions_file(cli.questions);
    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => launch_ui(
            &storage,
            SessionOptions {
                shuffle_questions: cli.shuffle,
            },
        ),
        Commands::Validate => validate(&storage),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err:#}");
        process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_ui_with_questions_json() {
        let cli = Cli::try_parse_from(["quiz"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.questions, PathBuf::from("questions.json"));
    }

    #[test]
    fn validate_accepts_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["quiz", "validate", "--questions", "bank.json", "--shuffle"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Validate));
        assert_eq!(cli.questions, PathBuf::from("bank.json"));
        assert!(cli.shuffle);
    }
}
