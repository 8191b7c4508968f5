//! Cadran command line: compute workflow KPIs and training analytics from
//! local JSON files.
//!
//! The workflow file holds one workflow object (`{ id, name, categoryCode,
//! active, ownerId }`); record files hold a JSON array of raw domain
//! records in whatever shape the store returned them.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use cadran_core::{Prediction, ScalarStats, TrainingStats, Workflow, WorkflowKpis};
use cadran_source::{AuthContext, StaticRecordSource};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Cadran workflow KPI toolchain.
#[derive(Parser)]
#[command(name = "cadran", version, about = "Cadran workflow KPI toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute KPIs for one workflow
    Kpi {
        /// Path to the workflow JSON file
        #[arg(long)]
        workflow: PathBuf,
        /// Path to the workflow's raw records (JSON array)
        #[arg(long)]
        records: PathBuf,
    },

    /// Aggregate all training records system-wide
    TrainingAnalysis {
        /// Path to the training records (JSON array)
        #[arg(long)]
        records: PathBuf,
    },

    /// Predict the expected participation ratio from training history
    TrainingPrediction {
        /// Path to the training records (JSON array)
        #[arg(long)]
        records: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli).await {
        eprintln!("error: {}", message);
        process::exit(2);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let ctx = AuthContext::new("local");
    match cli.command {
        Commands::Kpi { workflow, records } => {
            let workflow: Workflow = read_json(&workflow)?;
            let records: Vec<serde_json::Value> = read_json(&records)?;
            let source = StaticRecordSource::new()
                .with_workflow(workflow.clone())
                .with_records(workflow.id.clone(), records);
            let kpis = cadran_engine::workflow_kpis(&source, &ctx, &workflow.id)
                .await
                .map_err(|e| e.to_string())?;
            match cli.output {
                OutputFormat::Json => print_json(&kpis)?,
                OutputFormat::Text => print_kpis(&kpis),
            }
        }
        Commands::TrainingAnalysis { records } => {
            let records: Vec<serde_json::Value> = read_json(&records)?;
            let source = StaticRecordSource::new().with_training_records(records);
            let stats = cadran_engine::training_analysis(&source, &ctx)
                .await
                .map_err(|e| e.to_string())?;
            match cli.output {
                OutputFormat::Json => print_json(&stats)?,
                OutputFormat::Text => print_training(&stats),
            }
        }
        Commands::TrainingPrediction { records } => {
            let records: Vec<serde_json::Value> = read_json(&records)?;
            let source = StaticRecordSource::new().with_training_records(records);
            let prediction = cadran_engine::training_prediction(&source, &ctx)
                .await
                .map_err(|e| e.to_string())?;
            match cli.output {
                OutputFormat::Json => print_json(&prediction)?,
                OutputFormat::Text => print_prediction(&prediction),
            }
        }
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents).map_err(|e| format!("invalid JSON in {}: {}", path.display(), e))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let pretty = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", pretty);
    Ok(())
}

fn print_kpis(kpis: &WorkflowKpis) {
    println!("category: {}", kpis.category.code());
    match &kpis.scalar_stats {
        ScalarStats::Sales(stats) => {
            println!("total revenue:  {}", stats.total_revenue);
            println!("total quantity: {}", stats.total_quantity);
            println!("records:        {}", stats.count);
        }
        ScalarStats::Performance(stats) => {
            println!("average score:  {}", stats.average_score);
            println!("top performers: {}", stats.top_performer_count);
        }
        ScalarStats::Training(stats) => print_training(stats),
        ScalarStats::Unsupported { message } => {
            println!("{}", message);
            return;
        }
    }
    if !kpis.trend_series.is_empty() {
        println!("trend:");
        for point in &kpis.trend_series {
            println!("  {:<10} {}", point.label, point.value);
        }
        println!("trend delta: {}", kpis.trend_delta);
    }
}

fn print_training(stats: &TrainingStats) {
    println!("formations:          {}", stats.total_formations);
    println!("planned total:       {}", stats.participants_prevus_total);
    println!("actual total:        {}", stats.participants_reels_total);
    println!("avg success rate:    {}", stats.taux_reussite_moyen);
    println!("participation rate:  {}%", stats.taux_participation);
}

fn print_prediction(prediction: &Prediction) {
    match prediction {
        Prediction::Forecast {
            taux_participation_prevu,
            interpretation,
        } => {
            println!("expected participation: {}%", taux_participation_prevu);
            println!("interpretation:         {}", interpretation);
        }
        Prediction::InsufficientData { message } => println!("{}", message),
    }
}
