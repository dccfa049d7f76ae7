use anyhow::{Context, Result};
use clap::Parser;
use grape_init::cli::Cli;
use grape_init::config::Config;
use grape_init::loader::load_grapes;
use grape_init::mongo::MongoStore;
use grape_init::seed::replace_and_close;
use log::{error, info};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = Config::resolve(&args)?;

    let grapes = load_grapes(&config.file_db).context("error loading initial data")?;

    if config.dry_run {
        println!("{}", serde_json::to_string_pretty(&grapes)?);
        info!("Dry run: {} grapes parsed, database untouched", grapes.len());
        return Ok(());
    }

    let store = MongoStore::connect(&config.db)
        .await
        .with_context(|| format!("error opening collection {}", config.db.collection))?;

    let summary = replace_and_close(store, &grapes).await?;

    println!(
        "✅ Replaced {} grapes with {} from {}.",
        summary.removed,
        summary.inserted,
        config.file_db.display()
    );
    Ok(())
}
