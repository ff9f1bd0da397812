use anyhow::anyhow;
use clap::Parser;
use coursera_dump::cli::Cli;
use coursera_dump::core::coursera::Coursera;
use coursera_dump::core::spreadsheet;
use coursera_dump::utils::logging::init_logger;
use log::error;

const SITEMAP_FAILURE: &str =
    "!!! Something went wrong: check your internet connection; also coursera xml feed url may changed";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let config = Cli::parse().into_config();

    let coursera = Coursera::new(&config).map_err(|err| anyhow!(err.message))?;

    println!("---Getting course list...");
    let urls = match coursera.get_courses_list(config.amount).await {
        Ok(urls) => urls,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", SITEMAP_FAILURE);
            std::process::exit(1);
        }
    };

    println!("---Parsing courses info. This can take a while (a few seconds for every course).");
    let courses = coursera.parse_courses(&urls).await;

    if config.print_json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
    }

    spreadsheet::write_courses(&config.output, &courses, &config.layout)
        .map_err(|err| anyhow!("failed to write {}: {}", config.output.display(), err.message))?;
    println!("---Success: {} is ready!", config.output.display());
    Ok(())
}
