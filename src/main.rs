use std::sync::Arc;

use clap::{Parser, Subcommand};
use intranet_categories::core::config::Config;
use intranet_categories::core::http::ApiClient;
use intranet_categories::core::session::Session;
use intranet_categories::features::categories::dtos::CategoryActionKind;
use intranet_categories::features::categories::models::{Category, FlatCategory};
use intranet_categories::features::categories::services::LogScope;
use intranet_categories::features::categories::tree;
use intranet_categories::features::categories::{CategoryService, DropResolver, HttpCategoryClient};
use intranet_categories::features::context::FilterContext;
use intranet_categories::shared::types::{Pagination, TracingNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "intranet-categories",
    about = "Inspect the intranet category tree",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the admin outline, inactive categories included
    Tree,
    /// Print only what the public content browser shows
    Public,
    /// Show how many contents a category holds and where they could go
    Count { id: i64 },
    /// Show the audit log
    Logs {
        /// Only entries for this category
        #[arg(long)]
        category: Option<i64>,
        #[arg(long, default_value_t = 1)]
        page: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    let session = Arc::new(Session::new(config.session.access_token.clone()));
    let api = ApiClient::new(&config.backend, Arc::clone(&session))?;
    let mut service = CategoryService::new(
        Arc::new(HttpCategoryClient::new(api)),
        Arc::new(TracingNotifier),
        DropResolver::from_config(&config.editor),
        FilterContext::from_config(&config.filter),
    );

    if !service.context().is_ready() {
        anyhow::bail!("Set INTRANET_GROUP_IDS or INTRANET_UNIT_IDS to scope the category tree");
    }

    match cli.command {
        Commands::Tree => {
            service.refresh().await?;
            print_outline(service.flat());
        }
        Commands::Public => {
            service.refresh().await?;
            let public: Vec<Category> = service.public_tree();
            print_outline(&tree::flatten(&public));
        }
        Commands::Count { id } => {
            service.refresh().await?;
            let prompt = service.prepare_action(id, CategoryActionKind::Delete).await?;
            println!(
                "{} {}: {} contents",
                prompt.category.position, prompt.category.name, prompt.contents_count
            );
            if prompt.requires_choice() {
                println!("Contents could move to:");
                print_outline(&prompt.move_targets);
            }
        }
        Commands::Logs { category, page } => {
            let scope = category.map_or(LogScope::All, LogScope::Category);
            let logs = service
                .logs(scope, Pagination::new(page, config.logs.page_size))
                .await?;

            for log in &logs.logs {
                let user = log.user.as_ref().map(|u| u.name.as_str()).unwrap_or("-");
                println!(
                    "{}  {}  {}",
                    log.created_at.format("%Y-%m-%d %H:%M"),
                    user,
                    log.action_label()
                );
                for change in log.field_changes() {
                    println!("    {}: {} -> {}", change.label, change.before, change.after);
                }
            }
            println!("page {}/{} ({} entries)", logs.page, logs.total_pages, logs.total);
        }
    }

    Ok(())
}

fn print_outline(flat: &[FlatCategory]) {
    for category in flat {
        println!(
            "{}{} {} [{}]",
            "  ".repeat(category.level),
            category.position,
            category.name,
            category.status.as_str()
        );
    }
}
