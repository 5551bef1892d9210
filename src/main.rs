//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use tml_data::{
    cli::{Commands, Tml},
    commands::{
        fetch_data::{handle_fetch_data, FetchDataParams},
        merge_data::handle_merge_data,
        resolve_base_url, resolve_data_dir, resolve_dest_dir,
        update_data::handle_update_data,
    },
    core::init_tracing,
    merge::MergeConfig,
    Encoding, YearRange,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Tml::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Fetch { dirs, args, json } => {
            let data_dir = resolve_data_dir(dirs.data_dir);
            let params = FetchDataParams {
                base_url: resolve_base_url(args.base_url),
                data_dir: data_dir.clone(),
                years: YearRange::new(args.start, args.end)?,
                as_json: json,
            };
            handle_fetch_data(params)
                .await
                .with_context(|| format!("fetching into {}", data_dir.display()))?;
        }

        Commands::Merge { dirs, args, json } => {
            let data_dir = resolve_data_dir(dirs.data_dir);
            let config = MergeConfig {
                dest_dir: resolve_dest_dir(args.dest_dir, &data_dir),
                source_dir: data_dir,
                output_name: args.output,
                years: YearRange::new(args.start, args.end)?,
                encodings: args
                    .encodings
                    .unwrap_or_else(Encoding::default_candidates),
            };
            handle_merge_data(&config, json)
                .with_context(|| format!("merging {}", config.source_dir.display()))?;
        }

        Commands::Update {
            dirs,
            base_url,
            dest_dir,
        } => {
            let data_dir = resolve_data_dir(dirs.data_dir);
            let dest_dir = resolve_dest_dir(dest_dir, &data_dir);
            handle_update_data(resolve_base_url(base_url), data_dir, dest_dir)
                .await
                .context("updating merged file")?;
        }
    }

    Ok(())
}
