use anyhow::Result;
/// Candidate Scout - terminal review of candidate profiles
///
/// Provides the interactive TUI plus non-interactive export and remove
/// commands over the shared saved-candidate store.
use clap::{Parser, Subcommand, ValueEnum};
use scout_cli::ui;
use scout_core::store::{JsonFileStore, SavedSet};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scout-cli")]
#[command(about = "Candidate Scout - review and save GitHub candidate profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive candidate review TUI
    Tui {
        /// Path to the saved-candidate store file
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Export saved candidates (non-interactive)
    Export {
        /// Path to the saved-candidate store file
        #[arg(short, long)]
        store: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
    /// Remove a saved candidate by login (non-interactive)
    Remove {
        /// Path to the saved-candidate store file
        #[arg(short, long)]
        store: Option<PathBuf>,
        /// Login of the candidate to remove
        #[arg(short, long)]
        login: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { store } => {
            ui::run_tui(store_path(store))?;
        }
        Commands::Export {
            store,
            output,
            format,
        } => {
            run_export(store_path(store), output, format)?;
        }
        Commands::Remove { store, login, yes } => {
            run_remove(store_path(store), &login, yes)?;
        }
    }

    Ok(())
}

fn store_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(JsonFileStore::default_path)
}

fn run_export(store: PathBuf, output: Option<PathBuf>, format: ExportFormat) -> Result<()> {
    let saved = SavedSet::load(&JsonFileStore::new(store));

    if saved.is_empty() {
        println!("No potential candidates have been accepted yet.");
        return Ok(());
    }

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for candidate in saved.candidates() {
                writer.serialize(candidate)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, saved.candidates())?;
            writeln!(out)?;
        }
    }

    if let Some(path) = output {
        println!(
            "Exported {} candidates to {} at {}",
            saved.len(),
            path.display(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}

fn run_remove(store: PathBuf, login: &str, skip_confirm: bool) -> Result<()> {
    let store = JsonFileStore::new(store);
    let mut saved = SavedSet::load(&store);

    if !saved.contains(login) {
        return Err(anyhow::anyhow!("Candidate {} is not in the saved set", login));
    }

    if !skip_confirm {
        println!("Remove saved candidate: {}", login);
        println!("\nProceed? (y/N): ");

        use std::io::BufRead;
        let stdin = io::stdin();
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;

        if !line.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    saved.remove(login);
    saved.persist(&store)?;
    println!("Removed {}. {} candidates remain saved.", login, saved.len());

    Ok(())
}
