//! Tablebook CLI
//!
//! Interactive reservation book for restaurants.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tablebook::menu::{Painter, Prompter, Session};
use tablebook::model::{Reservation, Restaurant};
use tablebook::storage::JsonFileCollection;
use tablebook::{BookingError, Config, ReservationStore, RestaurantStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Tablebook
#[derive(Parser, Debug)]
#[command(name = "tablebook")]
#[command(about = "Interactive restaurant reservation book")]
#[command(version)]
struct Args {
    /// Directory holding reservations.json and restaurants.json
    #[arg(short, long, default_value = "./tablebook_data")]
    data_dir: String,

    /// Create empty backing files if they are missing
    #[arg(long)]
    init: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .color(!args.no_color)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("Tablebook v{}", tablebook::VERSION);
    tracing::info!("Data directory: {}", config.data_dir.display());

    let (reservations, restaurants) = match open_collections(&config, args.init) {
        Ok(collections) => collections,
        Err(e) => {
            tracing::error!("Failed to prepare storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout(), Painter::new(config.color));
    let mut session = Session::new(
        prompter,
        ReservationStore::new(reservations),
        RestaurantStore::new(restaurants),
    );

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Session ended: {}", e);
            ExitCode::FAILURE
        }
    }
}

type Collections = (JsonFileCollection<Reservation>, JsonFileCollection<Restaurant>);

/// Create or attach the backing files
///
/// Missing files without `--init` are only warned about here; each menu
/// action then reports the setup instruction.
fn open_collections(config: &Config, init: bool) -> Result<Collections, BookingError> {
    if init {
        return Ok((
            JsonFileCollection::create(config.reservations_path())?,
            JsonFileCollection::create(config.restaurants_path())?,
        ));
    }

    Ok((
        open_or_attach(config.reservations_path()),
        open_or_attach(config.restaurants_path()),
    ))
}

fn open_or_attach<T>(path: std::path::PathBuf) -> JsonFileCollection<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    match JsonFileCollection::open(&path) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!("{}", e);
            JsonFileCollection::attach(path)
        }
    }
}
