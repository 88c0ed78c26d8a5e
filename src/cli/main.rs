//! Passguard CLI
//!
//! Command-line front end for the policy analysis engine, the password
//! generator, and the local vault.

use passguard::policy::{normal_form, PolicyFlags, ProofSketch, TruthTable};
use passguard::{Config, PasswordEntry, PasswordGenerator, PasswordStore, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

/// Passguard CLI
#[derive(Parser, Debug)]
#[command(name = "passguard")]
#[command(about = "Password generator, local vault, and boolean policy analysis toolkit")]
#[command(version)]
struct Args {
    /// Vault file path
    #[arg(long, env = "PASSGUARD_VAULT_PATH")]
    vault_path: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "PASSGUARD_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the policy truth table with its DNF and CNF forms
    Analyze {
        /// Emit the analysis as JSON instead of a rendered table
        #[arg(long)]
        json: bool,
    },

    /// Generate a password
    Generate {
        /// Password length (defaults to the configured length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Check a password against required character classes
    Validate {
        /// The password to check
        password: String,

        /// Require lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Require uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Require digits
        #[arg(long)]
        digits: bool,

        /// Require special characters
        #[arg(long)]
        special: bool,
    },

    /// Render the Hoare-triple proof sketch for the generator contract
    Prove {
        /// Password length (defaults to the configured length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include digits
        #[arg(long)]
        digits: bool,

        /// Include special characters
        #[arg(long)]
        special: bool,

        /// Already-generated password for the example check
        #[arg(long)]
        password: Option<String>,
    },

    /// Manage the password vault
    Vault {
        #[command(subcommand)]
        command: VaultCommand,
    },
}

#[derive(Subcommand, Debug)]
enum VaultCommand {
    /// Store a credential (generates a password when none is given)
    Add {
        /// Service or site name
        service: String,

        /// Login/username
        login: String,

        /// Password to store; omit to generate one
        #[arg(long)]
        password: Option<String>,
    },

    /// List stored credentials
    List {
        /// Emit entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a credential by id
    Remove {
        /// Entry id
        id: Uuid,
    },

    /// Update fields of a stored credential
    Update {
        /// Entry id
        id: Uuid,

        /// New service name
        #[arg(long)]
        service: Option<String>,

        /// New login
        #[arg(long)]
        login: Option<String>,

        /// New password
        #[arg(long)]
        password: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    let mut config = Config::from_env()?;
    if let Some(path) = &args.vault_path {
        config.storage.path = path.clone();
    }
    config.validate()?;

    match args.command {
        Command::Analyze { json } => analyze(json)?,
        Command::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_special,
        } => {
            let flags = PolicyFlags::new(!no_lowercase, !no_uppercase, !no_digits, !no_special);
            let length = length.unwrap_or(config.generator.default_length);
            let password = PasswordGenerator::new().generate(length, flags);
            if password.is_empty() {
                eprintln!("nothing to generate: empty length or no character class selected");
            } else {
                println!("{}", password);
            }
        }
        Command::Validate {
            password,
            lowercase,
            uppercase,
            digits,
            special,
        } => {
            let required = PolicyFlags::new(lowercase, uppercase, digits, special);
            let valid = PasswordGenerator::new().validate(&password, required);
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Prove {
            length,
            lowercase,
            uppercase,
            digits,
            special,
            password,
        } => {
            let flags = PolicyFlags::new(lowercase, uppercase, digits, special);
            let length = length.unwrap_or(config.generator.default_length);
            let sketch = ProofSketch::build(flags, length, password.as_deref());
            println!("{}\n", sketch.precondition);
            println!("{}\n", sketch.code_fragment);
            println!("{}\n", sketch.postcondition);
            println!("{}\n", sketch.triple);
            println!("{}", sketch.verdict_text);
        }
        Command::Vault { command } => vault(&config, command)?,
    }

    Ok(())
}

fn analyze(json: bool) -> Result<()> {
    let table = TruthTable::build();
    if json {
        let report = serde_json::json!({
            "rows": table.rows(),
            "dnf": normal_form::dnf(&table),
            "cnf": normal_form::cnf(&table),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", table.report());
    }
    Ok(())
}

fn vault(config: &Config, command: VaultCommand) -> Result<()> {
    let store = PasswordStore::open(&config.storage.path)?;

    match command {
        VaultCommand::Add {
            service,
            login,
            password,
        } => {
            let password = password.unwrap_or_else(|| {
                PasswordGenerator::new()
                    .generate(config.generator.default_length, PolicyFlags::all())
            });
            let entry = PasswordEntry::new(service, login, password);
            let id = entry.id;
            info!(%id, service = %entry.service, "adding vault entry");
            store.add(entry)?;
            println!("{}", id);
        }
        VaultCommand::List { json } => {
            let entries = store.list();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!(
                        "{}  {}  {}  (created {})",
                        entry.id,
                        entry.service,
                        entry.login,
                        entry.created_at.format("%Y-%m-%d %H:%M:%S")
                    );
                }
            }
        }
        VaultCommand::Remove { id } => {
            if store.remove(&id)? {
                println!("removed {}", id);
            } else {
                eprintln!("no entry with id {}", id);
                std::process::exit(1);
            }
        }
        VaultCommand::Update {
            id,
            service,
            login,
            password,
        } => {
            let existing = store.list().into_iter().find(|e| e.id == id);
            let mut entry = match existing {
                Some(entry) => entry,
                None => {
                    eprintln!("no entry with id {}", id);
                    std::process::exit(1);
                }
            };

            if let Some(service) = service {
                entry.service = service;
            }
            if let Some(login) = login {
                entry.login = login;
            }
            if let Some(password) = password {
                entry.password = password;
            }

            store.update(entry)?;
            println!("updated {}", id);
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(level: &str) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        passguard::Error::internal(format!("Failed to set logging subscriber: {}", e))
    })?;

    Ok(())
}
