use clap::{Parser, Subcommand};
use log::error;
use neotcg_dataprep::{pipeline, PrepSettings};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "dataprep",
    version,
    about = "Offline data preparation for the NeoTCG card asset database"
)]
struct Cli {
    /// Path to a run configuration file (defaults to `dataprep.*` in the
    /// working directory, if present).
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assign global card IDs and strip unused fields in every set file.
    UpdateIds,
    /// Rewrite deck IDs and card references in every deck file.
    RewriteDecks,
    /// Strip unused fields from every set file without touching IDs.
    Strip,
    /// Rebuild the master catalog from the per-set files.
    Merge,
    /// Download card artwork into the image tree.
    FetchImages,
    /// Full pipeline: update-ids, rewrite-decks, merge.
    All,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let settings = match PrepSettings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::UpdateIds => pipeline::process_card_dir(&settings.cards_dir, &settings.sets),
        Command::RewriteDecks => {
            pipeline::process_deck_dir(&settings.decks_dir, &settings.sets, settings.deck_offset)
        }
        Command::Strip => pipeline::strip_card_dir(&settings.cards_dir),
        Command::Merge => {
            pipeline::write_master_catalog(&settings.cards_dir, &settings.master_catalog)
        }
        Command::FetchImages => pipeline::fetch_images(&settings.cards_dir, &settings.images_dir),
        Command::All => pipeline::process_card_dir(&settings.cards_dir, &settings.sets)
            .and_then(|()| {
                pipeline::process_deck_dir(
                    &settings.decks_dir,
                    &settings.sets,
                    settings.deck_offset,
                )
            })
            .and_then(|()| {
                pipeline::write_master_catalog(&settings.cards_dir, &settings.master_catalog)
            }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
