use cdp_console::configuration::config::Config;
use cdp_console::configuration::types::Locale;
use cdp_console::console::console_handler::Console;
use cdp_console::mission_management::mission_store::MissionStore;
use cdp_console::seed;
use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cdp-console")]
#[command(version = "0.1.0")]
#[command(about = "Console de gestion des missions de contrôle de la CDP")]
struct Args {
    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file replacing the embedded seed dataset
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// Display locale (fr or en), overrides the configuration file
    #[arg(long)]
    locale: Option<String>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    println!(
        "
==============================================================================
          CDP Control — gestion des missions de contrôle  v0.1.0
==============================================================================
"
    );

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Unable to import configuration from file: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Some(locale) = &args.locale {
        match Locale::parse(locale) {
            Some(parsed) => config.locale = parsed,
            None => {
                error!("Unknown locale: {}", locale);
                std::process::exit(1);
            }
        }
    }
    if let Some(seed_file) = args.seed_file {
        config.seed_file = Some(seed_file);
    }

    info!("Importing seed dataset");
    let missions = match &config.seed_file {
        Some(path) => seed::missions_from_file(path),
        None => seed::builtin_missions(),
    };
    let missions = match missions {
        Ok(missions) => missions,
        Err(e) => {
            error!("Unable to load the seed dataset: {}", e);
            std::process::exit(1);
        }
    };
    info!("Seeded {} mission(s)", missions.len());

    // Session state lives here and is discarded on exit
    let store = MissionStore::with_missions(missions);
    let mut console = Console::new(store, config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Err(e) = console.run(&mut input, &mut output) {
        error!("Console session failed: {}", e);
        std::process::exit(1);
    }
}
