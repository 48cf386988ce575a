mod cli;

use crate::cli::{Command, LogFormatArg, CLI};
use anyhow::Context;
use clap::Parser;
use linkvault_core::Strength;
use linkvault_service::LinkService;
use linkvault_storage::{RedbLinkStore, StoreConfig};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        db_path = %config.db_path.display(),
        bucket = %config.bucket,
        lock_timeout_ms = config.lock_timeout_ms,
        "opening link store"
    );

    let store = RedbLinkStore::open(
        StoreConfig::builder()
            .path(config.db_path)
            .bucket(config.bucket)
            .lock_timeout(Duration::from_millis(config.lock_timeout_ms))
            .build(),
    )
    .await
    .context("failed to open link store")?;

    run(LinkService::new(store), config.command).await
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormatArg::Text => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}

async fn run(service: LinkService<RedbLinkStore>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Create {
            url,
            secure,
            custom_id,
        } => {
            let strength = if secure {
                Strength::Secure
            } else {
                Strength::Standard
            };
            let code = service
                .create_link(&url, strength, custom_id.as_deref())
                .await?;
            println!("{code}");
        }
        Command::Resolve { id } => {
            let destination = service.resolve_link(&id).await?;
            service
                .record_click(&id)
                .await
                .context("click task did not complete")?;
            println!("{destination}");
        }
        Command::Show { id } => {
            let record = service.link_details(&id).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::List { json } => {
            let records = service.list_links().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in records {
                    println!(
                        "{}\t{}\t{}\t{}",
                        record.code, record.clicks, record.created_at, record.destination
                    );
                }
            }
        }
        Command::Remove { id } => {
            service.remove_link(&id).await?;
            info!(id = %id, "link removed");
        }
    }

    Ok(())
}
