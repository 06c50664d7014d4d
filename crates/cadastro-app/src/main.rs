//! # Cadastro
//!
//! Loads configuration, seeds the in-memory user store, and prints the
//! user report to stdout.

use cadastro_app::app::App;
use cadastro_app::startup::{bootstrap_subscriber, init_logging, print_startup_info};
use cadastro_config::ConfigLoader;
use cadastro_core::CadastroResult;
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!("Application error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> CadastroResult<()> {
    let config = tracing::subscriber::with_default(
        bootstrap_subscriber(),
        ConfigLoader::from_default_location,
    )?
    .get();

    init_logging(&config.observability);
    print_startup_info(&config);

    let app = App::new(config);
    let report = app.run()?;
    print!("{}", report);

    info!("Done");
    Ok(())
}
