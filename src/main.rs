use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use credit_card_applications::applications::{
    ApplicationDecision, BoxedFraudStrategy, CreditCardApplication, CreditCardApplicationEvaluator,
    FraudLookup, PatternValidator,
};
use credit_card_applications::config::AppConfig;
use credit_card_applications::error::AppError;
use credit_card_applications::telemetry;
use serde::Serialize;
use tracing::info;

type Evaluator = CreditCardApplicationEvaluator<PatternValidator, FraudLookup<BoxedFraudStrategy>>;

#[derive(Parser, Debug)]
#[command(
    name = "credit-card-applications",
    about = "Evaluate credit card applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single application described by flags
    Evaluate(EvaluateArgs),
    /// Evaluate a JSON array of applications in order on one evaluator
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Gross annual income in whole currency units
    #[arg(long)]
    income: u64,
    /// Applicant age in years
    #[arg(long)]
    age: u32,
    /// Frequent flyer number to verify
    #[arg(long, default_value = "")]
    frequent_flyer_number: String,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Path to a JSON array of applications
    path: PathBuf,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct EvaluationResponse {
    application: CreditCardApplication,
    decision: ApplicationDecision,
    summary: String,
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    results: Vec<EvaluationResponse>,
    validator_lookup_count: u64,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(?config.environment, "credit card evaluator starting");

    let mut evaluator = build_evaluator(&config)?;

    match cli.command {
        Command::Evaluate(args) => {
            let application =
                CreditCardApplication::new(args.income, args.age, args.frequent_flyer_number);
            let response = evaluate_one(&mut evaluator, application);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", render_response(&response));
            }
        }
        Command::Batch(args) => {
            let applications = read_batch(&args.path)?;
            let response = evaluate_batch(&mut evaluator, applications);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for result in &response.results {
                    println!("{}", render_response(result));
                }
                println!(
                    "Validator lookups performed: {}",
                    response.validator_lookup_count
                );
            }
        }
    }

    Ok(())
}

fn build_evaluator(config: &AppConfig) -> Result<Evaluator, AppError> {
    let mut validator = PatternValidator::new(
        &config.validator.number_pattern,
        config.validator.license_key.clone(),
    )?
    .with_expired_license_key(config.evaluation.expired_license_key.clone());
    validator.subscribe(|lookup| {
        info!(
            frequent_flyer_number = %lookup.frequent_flyer_number,
            mode = ?lookup.mode,
            valid = lookup.valid,
            "frequent flyer lookup performed"
        );
    });

    let fraud = FraudLookup::blocklist(config.fraud.blocked_numbers.iter().cloned());

    Ok(CreditCardApplicationEvaluator::with_config(
        validator,
        fraud,
        config.evaluation.clone(),
    ))
}

fn read_batch(path: &Path) -> Result<Vec<CreditCardApplication>, AppError> {
    let raw = fs::read_to_string(path)?;
    let applications = serde_json::from_str(&raw)?;
    Ok(applications)
}

fn evaluate_one(
    evaluator: &mut Evaluator,
    application: CreditCardApplication,
) -> EvaluationResponse {
    let decision = evaluator.evaluate(&application);
    EvaluationResponse {
        application,
        decision,
        summary: decision.summary(),
    }
}

fn evaluate_batch(
    evaluator: &mut Evaluator,
    applications: Vec<CreditCardApplication>,
) -> BatchResponse {
    let results = applications
        .into_iter()
        .map(|application| evaluate_one(evaluator, application))
        .collect();

    BatchResponse {
        results,
        validator_lookup_count: evaluator.validator_lookup_count(),
    }
}

fn render_response(response: &EvaluationResponse) -> String {
    let number = if response.application.frequent_flyer_number.is_empty() {
        "-"
    } else {
        response.application.frequent_flyer_number.as_str()
    };
    let review = if response.decision.requires_human() {
        " [needs review]"
    } else {
        ""
    };
    format!(
        "income {} | age {} | frequent flyer {} | {} ({}){}",
        response.application.gross_annual_income,
        response.application.age,
        number,
        response.decision.label(),
        response.summary,
        review
    )
}
