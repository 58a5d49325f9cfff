use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use readiness_ai::assessment::{
    assessment_router, AssessmentService, AssessmentSubmission, QuestionCatalog, ResponseLog,
    ScoredAttempt, ScoringEngine,
};
use readiness_ai::config::{AppConfig, CatalogConfig};
use readiness_ai::error::AppError;
use readiness_ai::telemetry;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Edge AI Readiness Assessor",
    about = "Serve and score the Edge AI career readiness self-assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a recorded response log and render the readiness report
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Score a response log against the question battery
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Response log to score (.csv columns or a JSON array)
    #[arg(long)]
    responses: PathBuf,
    /// Optional JSON question battery replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Include the full question battery listing in the output
    #[arg(long)]
    list_questions: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_assessment_score(args),
    }
}

fn load_catalog(config: &CatalogConfig) -> Result<QuestionCatalog, AppError> {
    match &config.path {
        Some(path) => Ok(QuestionCatalog::from_path(path)?),
        None => Ok(QuestionCatalog::standard()),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(&config.catalog)?);
    let service = Arc::new(AssessmentService::new(catalog, ScoringEngine::default()));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "readiness assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assessment_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        responses,
        catalog,
        list_questions,
    } = args;

    let catalog = match catalog {
        Some(path) => QuestionCatalog::from_path(path)?,
        None => QuestionCatalog::standard(),
    };
    let responses = ResponseLog::from_path(responses)?;

    let service = AssessmentService::new(Arc::new(catalog), ScoringEngine::default());
    let attempt = service.score(AssessmentSubmission::new(responses))?;

    render_assessment_report(&attempt, service.catalog(), list_questions);

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_assessment_report(
    attempt: &ScoredAttempt,
    catalog: &QuestionCatalog,
    list_questions: bool,
) {
    let result = &attempt.result;
    let today = Local::now().date_naive();

    println!("Edge AI readiness assessment");
    println!(
        "Attempt {} ({} answered, evaluated {})",
        attempt.attempt_id.0, attempt.answered, today
    );
    if attempt.skipped > 0 {
        println!(
            "Note: {} response(s) named unknown question ids and were ignored",
            attempt.skipped
        );
    }

    println!("\nSection scores");
    println!("- Psychological Fit: {}%", result.psychometric_score);
    println!("- Technical Readiness: {}%", result.technical_score);

    println!("\nWISCAR breakdown");
    for (dimension, score) in result.wiscar_scores.entries() {
        println!("- {}: {}%", dimension.label(), score);
    }

    println!(
        "\nOverall confidence: {}% -> {}",
        result.overall_confidence,
        result.recommendation.headline()
    );
    println!("{}", result.recommendation.subtitle());

    println!("\nInsights");
    for insight in &result.insights {
        println!("- {insight}");
    }

    println!("\nRecommended next steps");
    for step in &result.next_steps {
        println!("- {step}");
    }

    println!("\nRecommended career paths");
    for path in &result.career_paths {
        println!(
            "- {} (fit {:.0}): {} | {}",
            path.title, path.fit_score, path.description, path.salary_range
        );
    }

    if list_questions {
        println!("\nQuestion battery");
        for question in catalog.questions() {
            println!(
                "- {} | {} | {}",
                question.id.0,
                question.section.label(),
                question.prompt
            );
        }
    }
}
