use clap::Parser;
use tagrelay::config::Args;
use tagrelay::server::Server;
use tagrelay::utils::logging;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let settings = match args.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("error");
            error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };
    logging::init(logging::level_for(settings.server.debug));

    let server = Server::new(settings);
    tokio::select! {
        res = server.run() => {
            if let Err(e) = res {
                error!("Relay stopped: {e}");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }
}
