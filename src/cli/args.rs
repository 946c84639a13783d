//! Command line argument definitions.

use crate::models::movie::{MAX_RATING, MIN_RATING, RATING_STEP};
use crate::models::MediaType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cinelog - Keep a personal log of the films and series you watch
#[derive(Parser, Debug)]
#[command(name = "cinelog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the collection (overrides config and CINELOG_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a film or series to the log
    Add {
        /// Title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Media type: film or series
        #[arg(short = 't', long = "type", default_value = "film")]
        media_type: MediaType,

        /// Rating from 1 to 10 in steps of 0.5
        #[arg(short, long, default_value = "5", value_parser = parse_rating)]
        rating: f32,

        /// Genre (repeatable)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// General review
        #[arg(long)]
        review: Option<String>,

        /// Encoded cover image
        #[arg(long)]
        cover_image: Option<String>,

        /// Scene comment to attach right away (repeatable)
        #[arg(long = "scene", value_name = "COMMENT")]
        scenes: Vec<String>,
    },

    /// List the log, highest rated first
    List {
        /// Filter by title
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by genre
        #[arg(short, long)]
        genre: Option<String>,

        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,

        /// Filter by media type: film or series
        #[arg(short = 't', long = "type")]
        media_type: Option<MediaType>,

        /// Output format: table, simple, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show one entry with its scenes
    Show {
        /// Movie ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Edit an entry
    Edit {
        /// Movie ID
        #[arg(value_name = "ID")]
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New media type: film or series
        #[arg(short = 't', long = "type")]
        media_type: Option<MediaType>,

        /// New rating from 1 to 10 in steps of 0.5
        #[arg(short, long, value_parser = parse_rating)]
        rating: Option<f32>,

        /// Replace genres (repeatable)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Remove all genres
        #[arg(long, conflicts_with = "genres")]
        clear_genres: bool,

        /// Replace tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,

        /// New general review
        #[arg(long)]
        review: Option<String>,

        /// New encoded cover image
        #[arg(long)]
        cover_image: Option<String>,
    },

    /// Delete an entry and all of its scenes
    Delete {
        /// Movie ID
        #[arg(value_name = "ID")]
        id: String,

        /// Confirm deletion
        #[arg(long)]
        confirm: bool,
    },

    /// Manage the memorable scenes of an entry
    Scene {
        #[command(subcommand)]
        action: SceneAction,
    },

    /// Show collection statistics
    Stats,

    /// List the suggested genres and tags
    Vocabulary,

    /// Export the collection to a JSON file
    Export {
        /// Output file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Import a collection from a JSON file
    Import {
        /// Backup file path
        #[arg(value_name = "BACKUP_FILE")]
        backup_file: PathBuf,

        /// Merge with existing data (don't overwrite)
        #[arg(long)]
        merge: bool,

        /// Dry run - preview without importing
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SceneAction {
    /// Add a scene to an entry
    Add {
        /// Movie ID
        #[arg(value_name = "ID")]
        movie_id: String,

        /// Scene comment
        #[arg(short, long)]
        comment: Option<String>,

        /// Encoded scene image
        #[arg(short, long)]
        image: Option<String>,
    },

    /// Remove a scene from an entry
    Remove {
        /// Movie ID
        #[arg(value_name = "ID")]
        movie_id: String,

        /// Scene ID
        #[arg(value_name = "SCENE_ID")]
        scene_id: String,
    },
}

/// Parse a rating, accepting 1 to 10 in steps of 0.5.
pub fn parse_rating(s: &str) -> Result<f32, String> {
    let rating: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        ));
    }
    if (rating / RATING_STEP).fract() != 0.0 {
        return Err(format!("rating must be a multiple of {}", RATING_STEP));
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("8").unwrap(), 8.0);
        assert_eq!(parse_rating("7.5").unwrap(), 7.5);
        assert_eq!(parse_rating(" 10 ").unwrap(), 10.0);
        assert!(parse_rating("0.5").is_err());
        assert!(parse_rating("10.5").is_err());
        assert!(parse_rating("7.3").is_err());
        assert!(parse_rating("great").is_err());
    }

    #[test]
    fn test_parse_add_command() {
        let cli = Cli::try_parse_from([
            "cinelog", "add", "Dune", "--rating", "9", "-g", "Bilim Kurgu", "--scene", "Opening",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                title,
                rating,
                genres,
                scenes,
                media_type,
                ..
            } => {
                assert_eq!(title, "Dune");
                assert_eq!(rating, 9.0);
                assert_eq!(genres, vec!["Bilim Kurgu"]);
                assert_eq!(scenes, vec!["Opening"]);
                assert_eq!(media_type, MediaType::Film);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_with_type_filter() {
        let cli = Cli::try_parse_from(["cinelog", "list", "--type", "dizi"]).unwrap();
        match cli.command {
            Commands::List { media_type, .. } => assert_eq!(media_type, Some(MediaType::Series)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_edit_rejects_conflicting_genre_flags() {
        let result = Cli::try_parse_from(["cinelog", "edit", "id", "-g", "Dram", "--clear-genres"]);
        assert!(result.is_err());
    }
}
