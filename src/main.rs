//! Cinelog CLI
//!
//! A command-line log of the films and series you watch.

use cinelog::cli::{
    args::{Cli, Commands, SceneAction},
    commands::{
        catalog, export_import,
        movie::{self, AddArgs, EditArgs},
        open_store, scene,
    },
};
use cinelog::core::query::MovieFilter;
use cinelog::models::config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let mut config = config::load_config();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let mut store = open_store(&config);

    // Run the appropriate command
    match cli.command {
        Commands::Add {
            title,
            media_type,
            rating,
            genres,
            tags,
            review,
            cover_image,
            scenes,
        } => {
            movie::add_movie(
                &mut store,
                AddArgs {
                    title,
                    media_type,
                    rating,
                    genres,
                    tags,
                    review,
                    cover_image,
                    scenes,
                },
            )?;
        }

        Commands::List {
            search,
            genre,
            tag,
            media_type,
            format,
        } => {
            let filter = MovieFilter {
                search,
                genre,
                tag,
                media_type,
            };
            movie::list_movies(&store, &filter, &format)?;
        }

        Commands::Show { id } => {
            movie::show_movie(&store, &id)?;
        }

        Commands::Edit {
            id,
            title,
            media_type,
            rating,
            genres,
            clear_genres,
            tags,
            clear_tags,
            review,
            cover_image,
        } => {
            movie::edit_movie(
                &mut store,
                &id,
                EditArgs {
                    title,
                    media_type,
                    rating,
                    genres,
                    clear_genres,
                    tags,
                    clear_tags,
                    review,
                    cover_image,
                },
            )?;
        }

        Commands::Delete { id, confirm } => {
            movie::delete_movie(&mut store, &id, confirm)?;
        }

        Commands::Scene { action } => match action {
            SceneAction::Add {
                movie_id,
                comment,
                image,
            } => {
                scene::add_scene(&mut store, &movie_id, comment, image)?;
            }
            SceneAction::Remove { movie_id, scene_id } => {
                scene::remove_scene(&mut store, &movie_id, &scene_id)?;
            }
        },

        Commands::Stats => {
            catalog::show_stats(&store)?;
        }

        Commands::Vocabulary => {
            catalog::show_vocabulary()?;
        }

        Commands::Export { output } => {
            export_import::execute_export(&store, &output)?;
        }

        Commands::Import {
            backup_file,
            merge,
            dry_run,
        } => {
            export_import::execute_import(&mut store, &backup_file, merge, dry_run)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("cinelog=debug")
    } else {
        EnvFilter::new("cinelog=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
