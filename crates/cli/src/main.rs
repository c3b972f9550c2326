use anyhow::Context;
use clap::{Parser, Subcommand};
use content_core::config::media_base_url_from_env_value;
use content_core::constants::MEDIA_BASE_URL_ENV;
use content_core::people::load_person;
use content_core::{FieldRenderConfig, FieldRenderService, PeopleService};
use content_schema::ComponentRegistry;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "content")]
#[command(about = "Content service tooling")]
struct Cli {
    /// Public base url for uploaded media (overrides CONTENT_MEDIA_BASE_URL)
    #[arg(long, global = true)]
    media_base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalise a JSON array of person entries
    People {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Normalise a single JSON person entry
    Person {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// List registered content components
    Components,
    /// Print the schema of one content component
    Component {
        /// Component uid, e.g. dynamic.standard-text
        uid: String,
    },
}

/// Entry point for the content CLI.
///
/// # Environment Variables
/// - `CONTENT_MEDIA_BASE_URL`: public origin joined onto site-relative upload urls
/// - `RUST_LOG`: tracing filter (logs go to stderr)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let raw_base_url = cli
        .media_base_url
        .or_else(|| std::env::var(MEDIA_BASE_URL_ENV).ok());
    let config = FieldRenderConfig::new(media_base_url_from_env_value(raw_base_url)?)?;

    match cli.command {
        Some(Commands::People { file }) => {
            let render = FieldRenderService::new(config);
            let service = PeopleService::new(&render, &render);

            let json_text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let rendered = service.normalise_people_json(&json_text)?;
            tracing::info!("normalised people from {}", file.display());
            println!("{rendered}");
        }
        Some(Commands::Person { file }) => {
            let render = FieldRenderService::new(config);
            let service = PeopleService::new(&render, &render);

            let person = service.get_item(load_person(&file)?)?;
            println!("{}", serde_json::to_string_pretty(&person)?);
        }
        Some(Commands::Components) => {
            let registry = ComponentRegistry::builtin()?;
            for uid in registry.uids() {
                println!("{uid}");
            }
        }
        Some(Commands::Component { uid }) => {
            let registry = ComponentRegistry::builtin()?;
            println!("{}", registry.get(&uid)?.render()?);
        }
        None => {
            println!("Use 'content --help' for commands");
        }
    }

    Ok(())
}
