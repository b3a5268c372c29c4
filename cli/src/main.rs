use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zsnap::library::{
    cli::{Cli, Commands},
    command,
    config::Config,
    zfs::Zfs,
};

fn init_tracing(verbose: bool) {
    let default_level = match verbose {
        true => "debug",
        false => "info",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_tracing(args.verbose);

    if args.dry_run {
        info!("Dry Run enabled. Not making changes.");
    }

    let zfs = Zfs::default();
    let now = Local::now();

    match args.command {
        Commands::Snapshot {
            dataset,
            no_recursive,
        } => {
            let config = Config::from_args(&dataset, args.dry_run).with_recursive(!no_recursive);
            command::snapshot(&zfs, &config, now).await?;
        }
        Commands::Cleanup { dataset, retention } => {
            let config = Config::from_args(&dataset, args.dry_run).with_retention(&retention);
            command::cleanup(&zfs, &config, now).await?;
        }
        Commands::List { dataset, json } => {
            let config = Config::from_args(&dataset, args.dry_run);
            command::list(&zfs, &config, now, json).await?;
        }
        Commands::Rotate {
            dataset,
            retention,
            no_recursive,
            skip_snapshot,
            skip_cleanup,
        } => {
            let config = Config::from_args(&dataset, args.dry_run)
                .with_retention(&retention)
                .with_recursive(!no_recursive);
            command::rotate(&zfs, &config, now, !skip_snapshot, !skip_cleanup).await?;
        }
    }

    Ok(())
}
