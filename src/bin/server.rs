//! Synopsis HTTP server binary.
//!
//! Usage: `manga-synopsis-server [--config <path>] [--print-config]`

use anyhow::Context;
use manga_synopsis::{ServiceConfig, ServiceError, SynopsisServer};
use std::path::PathBuf;

struct Args {
    config: Option<PathBuf>,
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServiceConfig::default(),
    };

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    manga_synopsis::init_tracing(&config.logging.filter);
    tracing::info!("manga-synopsis-server v{} starting", env!("CARGO_PKG_VERSION"));

    let server = SynopsisServer::start(&config).await?;
    println!("listening on http://{}", server.addr());

    tokio::signal::ctrl_c()
        .await
        .context("waiting for ctrl-c")?;
    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, ServiceError> {
    let mut parsed = Args {
        config: None,
        print_config: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or_else(|| {
                    ServiceError::Config("--config requires a file path".to_owned())
                })?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--print-config" => parsed.print_config = true,
            "help" | "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                return Err(ServiceError::Config(format!(
                    "unknown argument `{other}`"
                )));
            }
        }
    }
    Ok(parsed)
}

fn print_usage() {
    println!("usage: manga-synopsis-server [--config <path>] [--print-config]");
}
