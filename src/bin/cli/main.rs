//! Terminal client for the Noteboard API
//!
//! Thin HTTP facade plus a handful of "pages": list, detail, create,
//! edit and delete, mirroring what the web client offers

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use clap::Parser;
use clap::Subcommand;

use crate::api::ApiClient;

mod api;
mod pages;

#[derive(Debug, Parser)]
#[command(name = "noteboard-cli", version, about = "Manage your Noteboard notes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all notes, newest first
    List,

    /// Show a single note
    Show {
        /// ID of the note
        id: String,
    },

    /// Create a new note
    Create {
        /// Title of the note
        #[arg(long)]
        title: String,

        /// Content of the note
        #[arg(long)]
        content: String,
    },

    /// Replace title and content of a note
    Edit {
        /// ID of the note
        id: String,

        /// New title of the note
        #[arg(long)]
        title: String,

        /// New content of the note
        #[arg(long)]
        content: String,
    },

    /// Delete a note
    Delete {
        /// ID of the note
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ApiClient::from_env();

    let result = match cli.command {
        Command::List => pages::list(&client).await,
        Command::Show { id } => pages::show(&client, &id).await,
        Command::Create { title, content } => pages::create(&client, &title, &content).await,
        Command::Edit { id, title, content } => pages::edit(&client, &id, &title, &content).await,
        Command::Delete { id, yes } => pages::delete(&client, &id, yes).await,
    };

    // failures surface as a message, never a panic
    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
