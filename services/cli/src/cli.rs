use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mindscope::assessment::{AssessmentReport, DimensionKey, Submission};
use mindscope::config::AppConfig;
use mindscope::error::AppError;
use mindscope::telemetry;
use tracing::info;

use crate::infra::{build_service, load_answers, DemoProfile, FileService};
use crate::render::{render_completion, render_history, render_questions, render_report};

#[derive(Parser, Debug)]
#[command(
    name = "mindscope",
    about = "Score the six-dimension wellbeing self-assessment and review saved results",
    version
)]
struct Cli {
    /// Override the configured data directory for saved results
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the questionnaire items and answer scale
    Questions(QuestionsArgs),
    /// Score an answer set and save the result
    Score(ScoreArgs),
    /// Show the most recent saved result
    Latest(LatestArgs),
    /// List saved results, newest first
    History,
    /// Delete every saved result
    Clear,
    /// Score a canned respondent without saving
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct QuestionsArgs {
    /// Only list one dimension (e.g. selfEsteem)
    #[arg(long)]
    dimension: Option<String>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON object mapping question id to answer value
    #[arg(long)]
    answers: Option<PathBuf>,
    /// Single answer as ID=VALUE; repeatable and applied after --answers.
    /// ID must be a non-negative integer; ids outside the catalog are kept but not scored
    #[arg(long = "answer", value_name = "ID=VALUE")]
    pairs: Vec<String>,
    /// Score without saving to history
    #[arg(long)]
    dry_run: bool,
    /// Print the result and report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LatestArgs {
    /// Print the stored result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Respondent to simulate
    #[arg(long, value_enum, default_value_t = DemoProfile::Steady)]
    profile: DemoProfile,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        data_dir = %config.storage.data_dir.display(),
        "mindscope starting"
    );

    let service = build_service(&config.storage);

    match cli.command {
        Command::Questions(args) => {
            let filter = args
                .dimension
                .map(|raw| raw.parse::<DimensionKey>())
                .transpose()?;
            render_questions(filter);
            Ok(())
        }
        Command::Score(args) => score(&service, args),
        Command::Latest(args) => latest(&service, args),
        Command::History => {
            render_history(&service.history());
            Ok(())
        }
        Command::Clear => {
            if service.clear() {
                println!("Assessment history cleared.");
            } else {
                println!("Assessment history could not be cleared; see logs for details.");
            }
            Ok(())
        }
        Command::Demo(args) => {
            println!("Demo respondent: {:?}\n", args.profile);
            let submission = service.preview(args.profile.answers());
            render_report(&submission.report);
            Ok(())
        }
    }
}

fn score(service: &FileService, args: ScoreArgs) -> Result<(), AppError> {
    let answers = load_answers(args.answers.as_deref(), &args.pairs)?;
    let completion = answers.completion();

    let submission = if args.dry_run {
        service.preview(answers)
    } else {
        service.submit(answers)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
        return Ok(());
    }

    render_completion(&completion);
    render_report(&submission.report);
    render_save_status(&submission, args.dry_run);
    Ok(())
}

fn render_save_status(submission: &Submission, dry_run: bool) {
    if dry_run {
        println!("\nDry run: result not saved.");
    } else if submission.saved {
        println!("\nSaved as {}.", submission.result.id);
    } else {
        println!("\nThe result could not be saved, but the report above is complete.");
    }
}

fn latest(service: &FileService, args: LatestArgs) -> Result<(), AppError> {
    let Some(result) = service.latest() else {
        println!("No saved assessments.");
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_report(&AssessmentReport::from_result(&result));
    }
    Ok(())
}
