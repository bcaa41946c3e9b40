use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

use fuzzmatch_engine::{
    dataset::{load_snapshot, FileDatasetProvider, HttpDatasetProvider},
    distance::{kernel_by_name, similarity_with},
    DatasetSnapshot, QueryOutcome, QueryScheduler, RankingPipeline, DEFAULT_TOP_K,
};

#[derive(Parser)]
#[command(name = "fuzzmatch-cli")]
#[command(about = "FuzzMatch Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset file path (one candidate per line)
    #[arg(short, long)]
    file: Option<String>,

    /// Dataset URL (JSON array of strings, or one candidate per line)
    #[arg(short, long)]
    url: Option<String>,

    /// Distance kernel: full-table, rolling or rapidfuzz
    #[arg(long, default_value = "rolling")]
    kernel: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank dataset candidates against a query
    Search {
        /// Search query
        query: String,

        /// Maximum results
        #[arg(short = 'k', long, default_value = "10")]
        top_k: usize,
    },

    /// Compute edit distance and similarity between two strings
    Distance {
        a: String,
        b: String,
    },

    /// Interactive mode: every entered line supersedes the previous query
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let kernel = kernel_by_name(&cli.kernel)
        .ok_or_else(|| anyhow::anyhow!("Unknown kernel: {}", cli.kernel))?;

    match cli.command {
        Commands::Distance { a, b } => {
            let dist = kernel.distance(&a, &b)?;
            let score = similarity_with(kernel.as_ref(), &a, &b)?;

            println!("Distance:   {}", dist);
            println!("Similarity: {:.1}%", score);
        }

        Commands::Search { query, top_k } => {
            let dataset = load_dataset(cli.file.as_deref(), cli.url.as_deref()).await;
            println!("🔍 Searching {} candidates for: {}", dataset.len(), query);

            let pipeline = RankingPipeline::new(kernel);
            let result = pipeline.rank(&query, &dataset.candidates, top_k)?;

            for (i, m) in result.matches.iter().enumerate() {
                println!("   {}. {} ({:.1}%)", i + 1, m.text, m.score);
            }
            println!("   Latency: {:.2}ms", result.elapsed_ms);
        }

        Commands::Repl => {
            let dataset = load_dataset(cli.file.as_deref(), cli.url.as_deref()).await;
            println!(
                "📚 {} candidates from {} — type a query, Ctrl-D to quit",
                dataset.len(),
                dataset.source
            );

            let pipeline = Arc::new(RankingPipeline::new(kernel));
            let (scheduler, mut outcomes) = QueryScheduler::new(pipeline, DEFAULT_TOP_K);

            // Superseded queries never reach this task
            let printer = tokio::spawn(async move {
                while let Some(outcome) = outcomes.recv().await {
                    match outcome {
                        QueryOutcome::Success { query, result } => {
                            println!("✅ {} ({:.2}ms)", query, result.elapsed_ms);
                            for m in &result.matches {
                                println!("   {} ({:.1}%)", m.text, m.score);
                            }
                        }
                        QueryOutcome::Failure { query, error, .. } => {
                            println!("❌ {}: {}", query, error);
                        }
                    }
                }
            });

            let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let query = line.trim().to_string();
                if query.is_empty() {
                    continue;
                }
                scheduler.submit(query, Arc::clone(&dataset));
            }

            // Closing the scheduler closes the channel and ends the printer
            drop(scheduler);
            printer.await?;
        }
    }

    Ok(())
}

async fn load_dataset(file: Option<&str>, url: Option<&str>) -> Arc<DatasetSnapshot> {
    if let Some(path) = file {
        return load_snapshot(&FileDatasetProvider::new(path)).await;
    }

    if let Some(url) = url {
        match HttpDatasetProvider::new(url) {
            Ok(provider) => return load_snapshot(&provider).await,
            Err(e) => tracing::warn!("HTTP provider setup failed: {}", e),
        }
    }

    Arc::new(DatasetSnapshot::empty("none"))
}
