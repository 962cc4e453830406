use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use droplet::configuration::{Args, Command, Config};
use droplet::error_handling::types::{ConfigError, StorageError};
use droplet::presentation::{praise, render_day, render_history, render_records};
use droplet::records::{RecordStore, SystemClock};
use droplet::storage::FileStorage;
use droplet::summary::{daily_summary, daily_totals, today};

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        error!("Unable to load configuration: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = run(args.command, &config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let config = match &args.config {
        Some(path) => {
            info!("Importing configuration from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    Ok(config.with_overrides(args.storage_dir.clone()))
}

fn open_store(config: &Config) -> Result<RecordStore, StorageError> {
    let storage = match &config.storage_dir {
        Some(dir) => FileStorage::new(dir)?,
        None => FileStorage::new_default()?,
    };
    Ok(RecordStore::new(Box::new(storage)).with_key(config.storage_key.clone()))
}

fn run(command: Command, config: &Config) -> Result<(), Box<dyn Error>> {
    let store = open_store(config)?;

    match command {
        Command::Drink { volume } => {
            let volume = volume.unwrap_or(config.default_volume);
            store.add(volume)?;
            println!("{}\n", praise(volume));
            println!("{}", render_records(&store.list_all()?, &today(&SystemClock)));
        }
        Command::List => {
            println!("{}", render_records(&store.list_all()?, &today(&SystemClock)));
        }
        Command::Delete { id } => {
            store.delete_by_id(id)?;
            println!("{}", render_records(&store.list_all()?, &today(&SystemClock)));
        }
        Command::Clear { yes } => {
            if !yes && !confirm("Delete all records? [y/N] ")? {
                println!("Nothing deleted");
                return Ok(());
            }
            store.clear_all()?;
            println!("{}", render_records(&store.list_all()?, &today(&SystemClock)));
        }
        Command::Summary { date } => {
            let date = date.unwrap_or_else(|| today(&SystemClock));
            let summary = daily_summary(&store.list_all()?, &date);
            println!("{}", render_day(&date, &summary));
        }
        Command::History => {
            println!("{}", render_history(&daily_totals(&store.list_all()?)));
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
