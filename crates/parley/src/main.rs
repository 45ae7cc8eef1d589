//! Parley launcher.
//!
//! Startup order: logging, response table, classifier client, HTTP server.
//! The table is built once before any traffic and the classifier client is a
//! single long-lived instance shared across concurrent requests.

use anyhow::{Context, Result};
use clap::Parser;
use parley_chat::{ChatMediator, ResponseTable};
use parley_classifier::http::HttpClassifier;
use parley_protocol::defaults;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod server;

#[derive(Parser, Debug)]
#[command(name = "parley", about = "Intent-routed chat responder")]
struct Cli {
    /// Address to serve the chat API on
    #[arg(long, env = "PARLEY_BIND", default_value = defaults::DEFAULT_BIND_ADDR)]
    bind: String,

    /// Intent classifier endpoint
    #[arg(
        long,
        env = "PARLEY_CLASSIFIER_URL",
        default_value = defaults::DEFAULT_CLASSIFIER_URL
    )]
    classifier_url: String,

    /// Chat dataset mapping intents to ideal responses
    #[arg(long, env = "PARLEY_DATASET", default_value = defaults::DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Classifier request timeout in seconds
    #[arg(
        long,
        env = "PARLEY_CLASSIFY_TIMEOUT_SECS",
        default_value_t = defaults::DEFAULT_CLASSIFY_TIMEOUT_SECS
    )]
    classify_timeout_secs: u64,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    parley_logging::init_logging(cli.verbose)?;

    let responses = ResponseTable::load(&cli.dataset);
    let classifier = HttpClassifier::new(
        cli.classifier_url.clone(),
        Duration::from_secs(cli.classify_timeout_secs),
    )
    .context("failed to construct classifier client")?;
    let mediator = Arc::new(ChatMediator::new(Arc::new(classifier), responses));

    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    info!(
        addr = %cli.bind,
        classifier = %cli.classifier_url,
        intents = mediator.responses().len(),
        "parley listening"
    );

    axum::serve(listener, server::router(mediator))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
