//! Resolve a single title from the command line and print its synopsis.
//!
//! Usage: `manga-synopsis-resolve [--config <path>] <title...>`
//!
//! Exits with status 1 when the title or its synopsis cannot be found.

use manga_synopsis::{ServiceConfig, ServiceError, SynopsisOutcome};
use synopsis_resolver::Resolver;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("manga-synopsis-resolve failed: {e}");
            std::process::exit(2);
        }
    }
}

fn run() -> manga_synopsis::Result<bool> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;
    let mut words = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                config_path = Some(args.next().ok_or_else(|| {
                    ServiceError::Config("--config requires a file path".to_owned())
                })?);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(true);
            }
            _ => words.push(arg),
        }
    }
    if words.is_empty() {
        print_usage();
        return Err(ServiceError::Config("missing title".to_owned()));
    }

    let config = match config_path {
        Some(path) => ServiceConfig::from_file(std::path::Path::new(&path))?,
        None => ServiceConfig::default(),
    };
    manga_synopsis::init_tracing(&config.logging.filter);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let resolver = Resolver::duckduckgo(config.resolver.clone())?;
    let title = words.join(" ");
    let outcome = runtime.block_on(resolver.resolve_synopsis(&title))?;

    let base = &config.resolver.catalog_base_url;
    match outcome {
        SynopsisOutcome::Found {
            resolution,
            summary,
        } => {
            println!("{}", resolution.page_url(base));
            println!();
            println!("{summary}");
            Ok(true)
        }
        SynopsisOutcome::SynopsisNotFound { resolution } => {
            println!("{}", resolution.page_url(base));
            eprintln!("no synopsis found on the catalog page");
            Ok(false)
        }
        SynopsisOutcome::TitleNotFound => {
            eprintln!("no catalog page found for \"{title}\"");
            Ok(false)
        }
    }
}

fn print_usage() {
    println!("usage: manga-synopsis-resolve [--config <path>] <title...>");
}
