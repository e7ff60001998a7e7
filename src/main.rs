use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use laptopstore::{
    Confirm, DeleteOutcome, FileKeyValueStore, InventoryRepository, LaptopPatch, ListRenderer,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "laptopstore")]
#[command(about = "Local laptop inventory", long_about = None)]
struct Cli {
    /// JSON file backing the key-value store
    #[arg(long, env = "LAPTOPSTORE_DATA", default_value = "laptopstore.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the rendered card list
    List,
    /// Print one laptop as JSON
    Show { id: u64 },
    /// Create a laptop
    Add(LaptopArgs),
    /// Change fields of an existing laptop
    Update {
        id: u64,
        #[command(flatten)]
        fields: LaptopArgs,
    },
    /// Delete a laptop through its card, then print the refreshed list
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Serve the list as a local page (needs the `http` feature)
    Serve {
        #[arg(long, env = "LAPTOPSTORE_BIND", default_value = "127.0.0.1:3000")]
        bind: String,
    },
}

#[derive(Args, Debug)]
struct LaptopArgs {
    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    price: Option<i64>,
    #[arg(long)]
    cpu: Option<String>,
    #[arg(long)]
    ram: Option<String>,
    #[arg(long)]
    storage: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    image: Option<String>,
}

impl From<LaptopArgs> for LaptopPatch {
    fn from(args: LaptopArgs) -> Self {
        LaptopPatch {
            id: None,
            brand: args.brand,
            model: args.model,
            price: args.price,
            cpu: args.cpu,
            ram: args.ram,
            storage: args.storage,
            description: args.description,
            image: args.image,
        }
    }
}

/// Reads a y/N answer from stdin.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

#[cfg(feature = "http")]
fn serve(repo: InventoryRepository<FileKeyValueStore>, bind: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    tracing::info!(%bind, data = %repo.storage().store().path().display(), "serving laptop list");
    runtime
        .block_on(laptopstore::http::serve(std::sync::Arc::new(repo), bind))
        .with_context(|| format!("serving on {}", bind))
}

#[cfg(not(feature = "http"))]
fn serve(_repo: InventoryRepository<FileKeyValueStore>, _bind: &str) -> Result<()> {
    anyhow::bail!("laptopstore was built without the `http` feature")
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("laptopstore=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let repo = InventoryRepository::new(FileKeyValueStore::open(&cli.data));

    match cli.command {
        Commands::List => {
            let list = ListRenderer::new(&repo)
                .render_list()
                .with_context(|| format!("reading {}", cli.data.display()))?;
            println!("{}", list.to_html());
        }
        Commands::Show { id } => match repo.get_item(id)? {
            Some(item) => println!("{}", serde_json::to_string_pretty(&item)?),
            None => {
                eprintln!("laptop {} not found", id);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Add(fields) => {
            let item = repo.create_item(fields.into())?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        Commands::Update { id, fields } => match repo.update_item(id, fields.into())? {
            Some(item) => println!("{}", serde_json::to_string_pretty(&item)?),
            None => {
                eprintln!("laptop {} not found", id);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Delete { id, yes } => {
            let renderer = ListRenderer::new(&repo);
            let list = renderer.render_list()?;
            let outcome = if yes {
                renderer.activate_delete(&list, id, &|_: &str| true)?
            } else {
                renderer.activate_delete(&list, id, &StdinConfirm)?
            };

            match outcome {
                DeleteOutcome::Deleted(refreshed) => println!("{}", refreshed.to_html()),
                DeleteOutcome::Declined => eprintln!("cancelled"),
                DeleteOutcome::Unbound => {
                    eprintln!("laptop {} not found", id);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Serve { bind } => serve(repo, &bind)?,
    }

    Ok(ExitCode::SUCCESS)
}
