//! Catalog command-line driver
//!
//! Stands in for the presentation layer: builds one controller per run,
//! forwards the requested intent and renders the resulting snapshot.
//!
//! ```bash
//! catalog list
//! catalog create --name "Compost Bin" --cost-price 50 --selling-price 80 --image bin.png
//! catalog delete 64f1c0
//! CATALOG_URL=https://catalog.example catalog diagnose
//! ```

mod config;
mod logger;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use catalog_client::NetworkCatalogClient;
use catalog_core::{CatalogView, ListingController};
use config::{Cli, Command};
use shared::{ImageAttachment, ListingDraft, ListingIntent, MutationRequest};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(&cli.log_level, cli.json_logs) {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let client = cli
        .client_config()
        .build_client()
        .context("failed to build catalog client")?;
    tracing::info!(url = %client.base_url(), "Using catalog service");

    let client = Arc::new(client);
    let controller = ListingController::new(client.clone());

    let intent = match cli.command {
        Command::Diagnose => return Ok(diagnose(&client).await),
        Command::List { json } => {
            controller.load_all().await.ok();
            let view = controller.snapshot();
            print_view(&view, json)?;
            return Ok(exit_code(&view));
        }
        Command::Create {
            name,
            description,
            category,
            cost_price,
            selling_price,
            stock,
            recycled,
            inactive,
            images,
        } => {
            let draft = ListingDraft {
                name,
                description,
                category,
                images: Vec::new(),
                cost_price,
                selling_price,
                current_stock: stock,
                recycled_material_percentage: recycled,
                is_active: !inactive,
            };
            let mut request = MutationRequest::new(draft);
            for path in images {
                let bytes = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("failed to read image {}", path.display()))?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "image".to_string());
                request = request.with_image(ImageAttachment::new(file_name, bytes));
            }
            controller.begin_create();
            controller.stage_draft(request.draft.clone());
            ListingIntent::Create(request)
        }
        Command::Delete { id } => ListingIntent::Delete { id },
    };

    // Mutations resynchronize on success; the snapshot reflects server truth
    let result = controller.dispatch(intent).await;
    let view = controller.snapshot();
    print_view(&view, false)?;
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "Operation failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn diagnose(client: &NetworkCatalogClient) -> ExitCode {
    let log = client.diagnose().await;
    for entry in &log {
        let mark = if entry.ok { "ok " } else { "ERR" };
        println!(
            "[{}] {:<8} {:>6}ms  {}",
            mark, entry.step, entry.elapsed_ms, entry.detail
        );
    }
    if log.iter().all(|e| e.ok) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_view(view: &CatalogView, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&*view.listings)?);
        return Ok(());
    }

    if view.listings.is_empty() {
        println!("(no listings)");
    }
    for listing in view.listings.iter() {
        println!(
            "{:<26} {:<32} {:>9.2} {:>6} {:>5.1}% {}",
            listing.id,
            listing.name(),
            listing.pricing.selling_price,
            listing.inventory.current_stock,
            listing.sustainability.recycled_material_percentage,
            if listing.is_active() { "active" } else { "inactive" },
        );
    }
    if let Some(error) = &view.error {
        eprintln!("error: {}", error);
    }
    Ok(())
}

fn exit_code(view: &CatalogView) -> ExitCode {
    if view.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
