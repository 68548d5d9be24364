use anyhow::Result;
use clap::{Parser, Subcommand};
use slide300_catalog::{find_item, list_audiences, list_categories, query_catalog, CatalogItem, CategoryFilter};
use slide300_common::{logger, AppConfig, Slide300Error};
use slide300_prompt::{render_auto_prompt, render_guide, LocalConsultant, StrategyConsultant};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "slide300")]
#[command(about = "Slide300 - presentation template catalog and prompt generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// List categories
    Categories,

    /// List audience personas
    Audiences,

    /// Search templates
    Search {
        /// Category name ("전체" or "all" for every category)
        #[arg(long, short)]
        category: Option<String>,

        /// Search term
        query: Option<String>,
    },

    /// Print the AUTO prompt for a template
    Prompt {
        id: u32,
    },

    /// Print a strategic variant prompt for a template and audience
    Variant {
        id: u32,

        /// Target audience (e.g. "CEO/임원진")
        #[arg(long, short, default_value = "")]
        audience: String,

        /// Skip the simulated strategy delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Print the workflow guide
    Guide,
}

fn lookup(id: u32) -> Result<&'static CatalogItem> {
    find_item(id).ok_or_else(|| Slide300Error::not_found(format!("템플릿 #{}", id)).into())
}

fn print_item_line(item: &CatalogItem) {
    println!(
        "{:>3}  [{}] {}  - {}",
        item.id, item.category, item.style_label, item.mood
    );
}

async fn serve(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config.validate()?;

    logger::init_from_config(&config)?;

    tracing::info!("Slide300 starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Strategy delay: {:?}", config.strategy_delay());
    match logger::parse_log_level(&config.log_level) {
        Some(level) => tracing::info!("  Log level: {}", level),
        None => tracing::info!("  Log filter: {}", config.log_level),
    }
    tracing::info!("  Log to file: {}", config.log_to_file);

    println!("Server listening on http://{}", config.server_bind_address());

    slide300_server::start_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();
    let config = AppConfig::from_env()?;

    let command = cli.command.unwrap_or(Commands::Serve { host: None, port: None });

    // one-shot commands log to stderr only, stdout carries the output
    if !matches!(command, Commands::Serve { .. }) {
        logger::setup_console_logging(&config.log_level)?;
    }

    match command {
        Commands::Serve { host, port } => {
            serve(config, host, port).await?;
        }
        Commands::Categories => {
            for category in list_categories() {
                println!("{} {} ({})", category.icon, category.name, category.item_count);
            }
        }
        Commands::Audiences => {
            for audience in list_audiences() {
                println!("{}", audience);
            }
        }
        Commands::Search { category, query } => {
            let filter = CategoryFilter::parse(category.as_deref().unwrap_or_default());
            let results = query_catalog(&filter, query.as_deref().unwrap_or_default());
            for item in &results {
                print_item_line(item);
            }
            println!("{}개 템플릿", results.len());
        }
        Commands::Prompt { id } => {
            let item = lookup(id)?;
            println!("{}", render_auto_prompt(Some(item)));
        }
        Commands::Variant { id, audience, no_delay } => {
            let item = lookup(id)?;
            let consultant = if no_delay {
                LocalConsultant::instant()
            } else {
                LocalConsultant::new(config.strategy_delay())
            };

            let variant = consultant.consult(item, &audience).await?;
            if variant.is_fallback() {
                tracing::warn!(
                    "Unknown audience '{}', using the standard strategy",
                    variant.plan.audience
                );
            }
            println!("{}", variant.prompt);
        }
        Commands::Guide => {
            println!("{}", render_guide());
        }
    }

    Ok(())
}
