//! Movie command implementations: add, list, show, edit, delete.

use super::{resolve_movie_id, short_id, truncate};
use crate::core::query::{filter_movies, MovieFilter};
use crate::core::MovieStore;
use crate::models::vocabulary::{is_known_genre, push_unique};
use crate::models::{MediaType, Movie, MovieInput, MovieUpdate, SceneInput};
use crate::storage::Slot;
use anyhow::{bail, Result};
use colored::Colorize;

/// Arguments of the add command.
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub title: String,
    pub media_type: MediaType,
    pub rating: f32,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub review: Option<String>,
    pub cover_image: Option<String>,
    pub scenes: Vec<String>,
}

/// Arguments of the edit command.
#[derive(Debug, Clone, Default)]
pub struct EditArgs {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    pub rating: Option<f32>,
    pub genres: Vec<String>,
    pub clear_genres: bool,
    pub tags: Vec<String>,
    pub clear_tags: bool,
    pub review: Option<String>,
    pub cover_image: Option<String>,
}

/// Add a movie to the log.
pub fn add_movie<S: Slot>(store: &mut MovieStore<S>, args: AddArgs) -> Result<Movie> {
    let title = args.title.trim().to_string();
    if title.is_empty() {
        bail!("Please enter a title");
    }
    warn_unknown_genres(&args.genres);

    let mut input = MovieInput {
        title,
        media_type: args.media_type,
        rating: args.rating,
        general_review: args.review.unwrap_or_default(),
        cover_image: args.cover_image.unwrap_or_default(),
        ..MovieInput::default()
    };
    push_unique(&mut input.genres, args.genres);
    push_unique(&mut input.tags, args.tags);
    input.scenes = args
        .scenes
        .into_iter()
        .map(SceneInput::comment)
        .filter(|s| !s.is_blank())
        .collect();

    let movie = store.add_movie(input);

    println!("{}", "[OK] Added to the log".bold().green());
    println!("  {} {}", "ID:".bold(), movie.id);
    println!("  {} {} ({})", "Title:".bold(), movie.title, movie.media_type);
    println!("  {} {}", "Rating:".bold(), movie.rating);
    if !movie.scenes.is_empty() {
        println!("  {} {}", "Scenes:".bold(), movie.scenes.len());
    }

    Ok(movie)
}

/// List the log, applying filters.
pub fn list_movies<S: Slot>(store: &MovieStore<S>, filter: &MovieFilter, format: &str) -> Result<()> {
    let movies = filter_movies(store.movies(), filter);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&movies)?),
        "simple" => print_simple(&movies),
        _ => print_table(&movies, store.len(), filter),
    }

    Ok(())
}

/// Print results in simple format.
fn print_simple(movies: &[&Movie]) {
    if movies.is_empty() {
        println!("No results found.");
        return;
    }

    for movie in movies {
        println!(
            "{} [{}] {} - {}",
            movie.id, movie.media_type, movie.title, movie.rating
        );
    }
}

/// Print results as table.
fn print_table(movies: &[&Movie], total: usize, filter: &MovieFilter) {
    if total == 0 {
        println!("{}", "Your log is empty. Add something with `cinelog add`.".yellow());
        return;
    }
    if movies.is_empty() {
        println!("{}", "No results found.".yellow());
        return;
    }

    if filter.is_empty() {
        println!("{}", format!("{} entries in the log:", total).bold().cyan());
    } else {
        println!(
            "{}",
            format!("Found {} of {} entries:", movies.len(), total)
                .bold()
                .cyan()
        );
    }
    println!();
    println!(
        " {:<8} | {:>4} | {:<6} | {:<40} | {}",
        "ID", "Rate", "Type", "Title", "Genres"
    );
    println!("{}", "-".repeat(90));

    for movie in movies {
        println!(
            " {:<8} | {:>4} | {:<6} | {:<40} | {}",
            short_id(&movie.id),
            movie.rating,
            movie.media_type,
            truncate(&movie.title, 40),
            truncate(&movie.genres.join(", "), 30)
        );
    }
}

/// Show one movie in detail.
pub fn show_movie<S: Slot>(store: &MovieStore<S>, id: &str) -> Result<()> {
    let id = resolve_movie_id(store, id)?;
    let Some(movie) = store.get_movie(&id) else {
        bail!(crate::Error::MovieNotFound(id));
    };

    let icon = match movie.media_type {
        MediaType::Film => "🎬",
        MediaType::Series => "📺",
    };
    println!("{} {}", icon, movie.title.bold().cyan());
    println!();
    println!("  {} {}", "ID:".bold(), movie.id);
    println!("  {} {}", "Type:".bold(), movie.media_type);
    println!("  {} {}/10", "Rating:".bold(), movie.rating);
    println!("  {} {}", "Added:".bold(), movie.created_at);
    if !movie.genres.is_empty() {
        println!("  {} {}", "Genres:".bold(), movie.genres.join(", "));
    }
    if !movie.tags.is_empty() {
        println!("  {} {}", "Tags:".bold(), movie.tags.join(", "));
    }
    if !movie.cover_image.is_empty() {
        println!(
            "  {} {} characters",
            "Cover image:".bold(),
            movie.cover_image.chars().count()
        );
    }
    if !movie.general_review.is_empty() {
        println!();
        println!("{}", "Review:".bold());
        println!("  {}", movie.general_review);
    }

    println!();
    if movie.scenes.is_empty() {
        println!("{}", "No scenes yet.".yellow());
    } else {
        println!("{}", format!("Scenes ({}):", movie.scenes.len()).bold());
        for (i, scene) in movie.scenes.iter().enumerate() {
            let image = if scene.image.is_empty() { "" } else { " [image]" };
            println!("  {}. {}{} ({})", i + 1, scene.comment, image, scene.id);
        }
    }

    Ok(())
}

/// Edit a movie.
pub fn edit_movie<S: Slot>(store: &mut MovieStore<S>, id: &str, args: EditArgs) -> Result<()> {
    let id = resolve_movie_id(store, id)?;

    let title = match args.title {
        Some(title) if title.trim().is_empty() => bail!("Please enter a title"),
        Some(title) => Some(title.trim().to_string()),
        None => None,
    };

    let genres = if args.clear_genres {
        Some(Vec::new())
    } else if args.genres.is_empty() {
        None
    } else {
        warn_unknown_genres(&args.genres);
        let mut genres = Vec::new();
        push_unique(&mut genres, args.genres);
        Some(genres)
    };

    let tags = if args.clear_tags {
        Some(Vec::new())
    } else if args.tags.is_empty() {
        None
    } else {
        let mut tags = Vec::new();
        push_unique(&mut tags, args.tags);
        Some(tags)
    };

    let update = MovieUpdate {
        title,
        media_type: args.media_type,
        cover_image: args.cover_image,
        rating: args.rating,
        genres,
        tags,
        general_review: args.review,
    };

    if update.is_empty() {
        println!("{}", "Nothing to change.".yellow());
        return Ok(());
    }

    if !store.update_movie(&id, update) {
        bail!(crate::Error::MovieNotFound(id));
    }

    println!("{} {}", "[OK] Updated".bold().green(), id);
    Ok(())
}

/// Delete a movie and its scenes.
pub fn delete_movie<S: Slot>(store: &mut MovieStore<S>, id: &str, confirm: bool) -> Result<()> {
    let id = resolve_movie_id(store, id)?;
    let Some(movie) = store.get_movie(&id) else {
        bail!(crate::Error::MovieNotFound(id));
    };

    if !confirm {
        println!(
            "{}",
            format!(
                "[WARN] This deletes '{}' and its {} scenes.",
                movie.title,
                movie.scenes.len()
            )
            .yellow()
        );
        println!("  Use --confirm to delete");
        return Ok(());
    }

    store.delete_movie(&id);
    println!("{} {}", "[OK] Deleted".bold().green(), movie.title);
    Ok(())
}

fn warn_unknown_genres(genres: &[String]) {
    for genre in genres.iter().filter(|g| !is_known_genre(g.trim())) {
        tracing::warn!("Genre '{}' is not in the suggested list", genre.trim());
    }
}
