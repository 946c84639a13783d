//! Scene command implementations.

use super::resolve_movie_id;
use crate::core::MovieStore;
use crate::models::{Scene, SceneInput};
use crate::storage::Slot;
use crate::Error;
use anyhow::{bail, Result};
use colored::Colorize;

/// Add a scene to a movie.
pub fn add_scene<S: Slot>(
    store: &mut MovieStore<S>,
    movie_id: &str,
    comment: Option<String>,
    image: Option<String>,
) -> Result<Scene> {
    let input = SceneInput {
        image: image.unwrap_or_default(),
        comment: comment.map(|c| c.trim().to_string()).unwrap_or_default(),
    };
    if input.is_blank() {
        bail!(Error::validation("a scene needs a comment or an image"));
    }

    let movie_id = resolve_movie_id(store, movie_id)?;
    let Some(scene) = store.add_scene(&movie_id, input) else {
        bail!(Error::MovieNotFound(movie_id));
    };

    println!("{} {}", "[OK] Scene added:".bold().green(), scene.id);
    Ok(scene)
}

/// Remove a scene from a movie.
pub fn remove_scene<S: Slot>(store: &mut MovieStore<S>, movie_id: &str, scene_id: &str) -> Result<()> {
    let movie_id = resolve_movie_id(store, movie_id)?;

    if !store.delete_scene(&movie_id, scene_id) {
        bail!(Error::SceneNotFound(scene_id.to_string()));
    }

    println!("{} {}", "[OK] Scene removed:".bold().green(), scene_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieInput;
    use crate::storage::MemorySlot;

    #[test]
    fn test_add_and_remove_scene() {
        let mut store = MovieStore::open(MemorySlot::new());
        let movie = store.add_movie(MovieInput::titled("Dune"));

        let scene = add_scene(&mut store, &movie.id, Some(" Opening ".into()), None).unwrap();
        assert_eq!(scene.comment, "Opening");
        assert_eq!(store.get_movie(&movie.id).unwrap().scenes, vec![scene.clone()]);

        remove_scene(&mut store, &movie.id, &scene.id).unwrap();
        assert!(store.get_movie(&movie.id).unwrap().scenes.is_empty());
    }

    #[test]
    fn test_blank_scene_is_rejected() {
        let mut store = MovieStore::open(MemorySlot::new());
        let movie = store.add_movie(MovieInput::titled("Dune"));

        assert!(add_scene(&mut store, &movie.id, Some("  ".into()), None).is_err());
        assert_eq!(store.slot().write_count(), 1);
    }

    #[test]
    fn test_scene_commands_report_misses() {
        let mut store = MovieStore::open(MemorySlot::new());
        let movie = store.add_movie(MovieInput::titled("Dune"));

        assert!(add_scene(&mut store, "missing", Some("x".into()), None).is_err());
        assert!(remove_scene(&mut store, &movie.id, "missing").is_err());
    }
}
