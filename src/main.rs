//! securenus - CLI secret manager
//!
//! Stores typed personal secrets in string-named folders and lists them
//! with sensitive fields masked.
//!
//! Commands:
//! - add <KIND> <NAME> ...: Store a secret (prompts for omitted values)
//! - list [--folder F]: Numbered, masked listing (all or one folder)
//! - show <NAME>: One secret through the masked renderer
//! - remove <NAME>: Delete a secret
//! - folders: List folder names

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use securenus::render::describe;
use securenus::{storage, Secret, SecretStore, StoreError};

#[derive(Parser)]
#[command(name = "securenus")]
#[command(about = "CLI secret manager - typed secrets in folders, masked display")]
#[command(version)]
#[command(after_help = r#"SECRET KINDS:
    password    Website or service login (username, URL, password)
    card        Credit card (full name, number, CVC, expiry)
    wallet      Crypto wallet (username, private key, seed phrase)
    nusnet      NUSNet account (NUSNet ID, password)
    student     Student ID (matriculation number)
    wifi        Wifi credentials (username, password)

FOLDERS:
    Folders are just a string attribute on secrets. Omitting --folder
    files the secret under "unnamed". Listing without --folder shows
    everything; --folder unnamed shows only that folder."#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a new secret
    Add {
        #[command(subcommand)]
        kind: AddCommands,
    },

    /// List secrets with sensitive fields masked
    List {
        /// Only secrets in this folder (omit to list everything)
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Show a single secret (masked)
    Show {
        /// Secret name
        name: String,
    },

    /// Delete a secret permanently
    Remove {
        /// Secret name
        name: String,
    },

    /// List folder names
    Folders,
}

#[derive(Subcommand)]
enum AddCommands {
    /// Website or service login
    Password {
        /// Secret name (unique)
        name: String,
        /// Folder to file the secret under
        #[arg(short, long)]
        folder: Option<String>,
        #[arg(short, long)]
        username: String,
        /// Site URL (bare hosts like google.com are accepted)
        #[arg(long)]
        url: String,
        /// Password (omit for secure hidden prompt)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Credit card details
    Card {
        name: String,
        #[arg(short, long)]
        folder: Option<String>,
        /// Name on the card
        #[arg(long)]
        full_name: String,
        /// Card number (omit for secure hidden prompt)
        #[arg(long)]
        number: Option<String>,
        /// CVC (omit for secure hidden prompt)
        #[arg(long)]
        cvc: Option<String>,
        /// Expiry date, e.g. 12/27 (omit for secure hidden prompt)
        #[arg(long)]
        expiry: Option<String>,
    },

    /// Cryptocurrency wallet credentials
    Wallet {
        name: String,
        #[arg(short, long)]
        folder: Option<String>,
        #[arg(short, long)]
        username: String,
        /// Private key (omit for secure hidden prompt)
        #[arg(long)]
        private_key: Option<String>,
        /// Seed phrase (omit for secure hidden prompt)
        #[arg(long)]
        seed_phrase: Option<String>,
    },

    /// NUSNet institutional account
    Nusnet {
        name: String,
        #[arg(short, long)]
        folder: Option<String>,
        /// NUSNet ID, e.g. e0123456@u.nus.edu
        #[arg(long)]
        id: String,
        /// Password (omit for secure hidden prompt)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Student matriculation number
    Student {
        name: String,
        #[arg(short, long)]
        folder: Option<String>,
        /// Student ID, e.g. A021313G
        #[arg(long)]
        id: String,
    },

    /// Wifi network credentials
    Wifi {
        name: String,
        #[arg(short, long)]
        folder: Option<String>,
        #[arg(short, long)]
        username: String,
        /// Password (omit for secure hidden prompt)
        #[arg(short, long)]
        password: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = storage::default_store_path();
    let mut store = storage::load(&path)?;

    match cli.command {
        Commands::Add { kind } => cmd_add(&mut store, &path, kind),
        Commands::List { folder } => cmd_list(&store, folder.as_deref()),
        Commands::Show { name } => cmd_show(&store, &name),
        Commands::Remove { name } => cmd_remove(&mut store, &path, &name),
        Commands::Folders => cmd_folders(&store),
    }
}

/// Resolve a sensitive value: use the flag if given, otherwise prompt
/// with hidden input.
fn secret_value(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => {
            let entered = rpassword::prompt_password(format!("{}: ", prompt))
                .context("Failed to read secret value")?;
            if entered.is_empty() {
                bail!("Empty value not allowed");
            }
            Ok(entered)
        }
    }
}

/// Build the secret for an add subcommand, prompting where needed
fn build_secret(kind: AddCommands) -> Result<Secret> {
    let secret = match kind {
        AddCommands::Password {
            name,
            folder,
            username,
            url,
            password,
        } => {
            let password = secret_value(password, "Enter password")?;
            Secret::basic_password(&name, folder.as_deref(), &username, &password, &url)?
        }
        AddCommands::Card {
            name,
            folder,
            full_name,
            number,
            cvc,
            expiry,
        } => {
            let number = secret_value(number, "Enter card number")?;
            let cvc = secret_value(cvc, "Enter CVC")?;
            let expiry = secret_value(expiry, "Enter expiry date")?;
            Secret::credit_card(&name, folder.as_deref(), &full_name, &number, &cvc, &expiry)?
        }
        AddCommands::Wallet {
            name,
            folder,
            username,
            private_key,
            seed_phrase,
        } => {
            let private_key = secret_value(private_key, "Enter private key")?;
            let seed_phrase = secret_value(seed_phrase, "Enter seed phrase")?;
            Secret::crypto_wallet(
                &name,
                folder.as_deref(),
                &username,
                &private_key,
                &seed_phrase,
            )?
        }
        AddCommands::Nusnet {
            name,
            folder,
            id,
            password,
        } => {
            let password = secret_value(password, "Enter password")?;
            Secret::nusnet(&name, folder.as_deref(), &id, &password)?
        }
        AddCommands::Student { name, folder, id } => {
            Secret::student_id(&name, folder.as_deref(), &id)?
        }
        AddCommands::Wifi {
            name,
            folder,
            username,
            password,
        } => {
            let password = secret_value(password, "Enter password")?;
            Secret::wifi_password(&name, folder.as_deref(), &username, &password)?
        }
    };
    Ok(secret)
}

/// Store a new secret
fn cmd_add(store: &mut SecretStore, path: &PathBuf, kind: AddCommands) -> Result<()> {
    let secret = build_secret(kind)?;
    let name = secret.name().to_string();
    let folder = secret.folder().to_string();

    store.add(secret)?;
    storage::save(path, store)?;

    println!("success: Secret stored: {} (folder: {})", name, folder);
    Ok(())
}

/// Numbered, masked listing of all secrets or one folder
fn cmd_list(store: &SecretStore, folder: Option<&str>) -> Result<()> {
    let secrets: Vec<&Secret> = match folder {
        None => store.list_all().iter().collect(),
        Some(f) => match store.list_by_folder(f) {
            Ok(secrets) => secrets,
            Err(StoreError::NonExistentFolder(name)) => {
                println!("Folder {} does not exist.", name);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        },
    };

    if secrets.is_empty() {
        println!("There are no secrets in this folder.");
        return Ok(());
    }

    println!("List of secrets:");
    for (counter, secret) in secrets.into_iter().enumerate() {
        // Each block ends with a newline, so entries are blank-line separated
        println!("{}. {}", counter + 1, describe(secret));
    }

    Ok(())
}

/// Show one secret through the masked renderer
fn cmd_show(store: &SecretStore, name: &str) -> Result<()> {
    let secret = store.get_by_name(name)?;
    print!("{}", describe(secret));
    Ok(())
}

/// Delete a secret
fn cmd_remove(store: &mut SecretStore, path: &PathBuf, name: &str) -> Result<()> {
    store.remove(name)?;
    storage::save(path, store)?;
    println!("success: Secret removed: {}", name);
    Ok(())
}

/// List distinct folder names
fn cmd_folders(store: &SecretStore) -> Result<()> {
    let folders = store.folder_names();

    if folders.is_empty() {
        println!("No folders. Add a secret with: securenus add <kind> <name>");
        return Ok(());
    }

    for folder in folders {
        println!("  {}", folder);
    }
    Ok(())
}
