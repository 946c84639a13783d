//! Movie and scene data models.

use serde::{Deserialize, Deserializer, Serialize};

/// Rating given to a movie when none is supplied.
pub const DEFAULT_RATING: f32 = 5.0;

/// Lowest rating the rating slider allows.
pub const MIN_RATING: f32 = 1.0;

/// Highest rating the rating slider allows.
pub const MAX_RATING: f32 = 10.0;

/// Rating slider step.
pub const RATING_STEP: f32 = 0.5;

/// Media type enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[default]
    Film,
    #[serde(rename = "Dizi", alias = "Series")]
    Series,
}

impl MediaType {
    /// Every media type, in display order.
    pub const ALL: [MediaType; 2] = [MediaType::Film, MediaType::Series];
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Film => f.pad("Film"),
            MediaType::Series => f.pad("Series"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "film" | "movie" => Ok(MediaType::Film),
            "series" | "dizi" | "tv" | "tvshow" => Ok(MediaType::Series),
            other => Err(format!("unknown media type '{}' (expected film or series)", other)),
        }
    }
}

/// A memorable scene captured for a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier within the parent movie
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Opaque encoded image, empty when absent
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Free-text comment
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
}

impl Scene {
    /// Build a scene from caller input, assigning a fresh id.
    pub fn new(input: SceneInput) -> Self {
        Self {
            id: new_id(),
            image: input.image,
            comment: input.comment,
        }
    }
}

/// A cataloged film or series entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier, assigned at creation
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Film or series
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: MediaType,
    /// Opaque encoded cover image, empty when absent
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover_image: String,
    /// Rating (1-10, step 0.5)
    #[serde(default = "default_rating", deserialize_with = "null_as_default_rating")]
    pub rating: f32,
    /// Genres
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    /// Tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Review text
    #[serde(default, deserialize_with = "null_as_default")]
    pub general_review: String,
    /// Memorable scenes, in insertion order
    #[serde(default, deserialize_with = "null_as_default")]
    pub scenes: Vec<Scene>,
    /// Creation timestamp (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Movie {
    /// Build a full record from caller input, assigning a fresh id and
    /// the current timestamp.
    pub fn new(input: MovieInput) -> Self {
        Self {
            id: new_id(),
            title: input.title,
            media_type: input.media_type,
            cover_image: input.cover_image,
            rating: input.rating,
            genres: input.genres,
            tags: input.tags,
            general_review: input.general_review,
            scenes: input.scenes.into_iter().map(Scene::new).collect(),
            created_at: now_timestamp(),
        }
    }

    /// Fill in identifiers missing from a record read back from storage.
    ///
    /// Returns true if anything was changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;
        if self.id.is_empty() {
            self.id = new_id();
            changed = true;
        }
        for scene in self.scenes.iter_mut().filter(|s| s.id.is_empty()) {
            scene.id = new_id();
            changed = true;
        }
        changed
    }

    /// Find a scene by id.
    pub fn scene(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == scene_id)
    }
}

/// Caller-supplied fields for a new movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieInput {
    pub title: String,
    pub media_type: MediaType,
    pub cover_image: String,
    pub rating: f32,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub general_review: String,
    pub scenes: Vec<SceneInput>,
}

impl Default for MovieInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            media_type: MediaType::Film,
            cover_image: String::new(),
            rating: DEFAULT_RATING,
            genres: Vec::new(),
            tags: Vec::new(),
            general_review: String::new(),
            scenes: Vec::new(),
        }
    }
}

impl MovieInput {
    /// Input with only a title set.
    pub fn titled<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Caller-supplied fields for a new scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneInput {
    pub image: String,
    pub comment: String,
}

impl SceneInput {
    /// Scene input with only a comment.
    pub fn comment<S: Into<String>>(comment: S) -> Self {
        Self {
            image: String::new(),
            comment: comment.into(),
        }
    }

    /// Whether the scene carries neither an image nor a comment.
    pub fn is_blank(&self) -> bool {
        self.image.is_empty() && self.comment.is_empty()
    }
}

/// Field-level changes for an existing movie. `None` leaves a field as is.
///
/// Identity (`id`) and `created_at` are not part of the update and can
/// never be overwritten. Scenes are changed through the scene operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    pub cover_image: Option<String>,
    pub rating: Option<f32>,
    pub genres: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub general_review: Option<String>,
}

impl MovieUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge these changes over a movie.
    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(media_type) = self.media_type {
            movie.media_type = media_type;
        }
        if let Some(cover_image) = self.cover_image {
            movie.cover_image = cover_image;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(genres) = self.genres {
            movie.genres = genres;
        }
        if let Some(tags) = self.tags {
            movie.tags = tags;
        }
        if let Some(general_review) = self.general_review {
            movie.general_review = general_review;
        }
    }
}

/// Generate a fresh unique identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time as an ISO 8601 UTC timestamp with millisecond precision.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn default_rating() -> f32 {
    DEFAULT_RATING
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_rating<'de, D>(deserializer: D) -> std::result::Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(DEFAULT_RATING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_serializes_like_browser_app() {
        assert_eq!(serde_json::to_string(&MediaType::Film).unwrap(), "\"Film\"");
        assert_eq!(serde_json::to_string(&MediaType::Series).unwrap(), "\"Dizi\"");

        let parsed: MediaType = serde_json::from_str("\"Series\"").unwrap();
        assert_eq!(parsed, MediaType::Series);
    }

    #[test]
    fn test_media_type_display_pads() {
        assert_eq!(format!("{:<6}|", MediaType::Film), "Film  |");
        assert_eq!(MediaType::Series.to_string(), "Series");
    }

    #[test]
    fn test_media_type_from_str() {
        assert_eq!("film".parse::<MediaType>().unwrap(), MediaType::Film);
        assert_eq!("Dizi".parse::<MediaType>().unwrap(), MediaType::Series);
        assert_eq!(" SERIES ".parse::<MediaType>().unwrap(), MediaType::Series);
        assert!("documentary".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_movie_input_defaults() {
        let input = MovieInput::default();
        assert_eq!(input.media_type, MediaType::Film);
        assert_eq!(input.rating, 5.0);
        assert!(input.genres.is_empty());
        assert!(input.scenes.is_empty());
    }

    #[test]
    fn test_new_movie_assigns_identity() {
        let mut input = MovieInput::titled("Dune");
        input.scenes.push(SceneInput::comment("Spice harvester"));

        let movie = Movie::new(input);
        assert!(!movie.id.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&movie.created_at).is_ok());
        assert!(movie.created_at.ends_with('Z'));
        assert_eq!(movie.scenes.len(), 1);
        assert!(!movie.scenes[0].id.is_empty());
    }

    #[test]
    fn test_deserialize_partial_record() {
        let json = r#"{"id":"m1","title":"Solaris","createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();

        assert_eq!(movie.title, "Solaris");
        assert_eq!(movie.media_type, MediaType::Film);
        assert_eq!(movie.rating, 5.0);
        assert!(movie.scenes.is_empty());
        assert!(movie.tags.is_empty());
    }

    #[test]
    fn test_deserialize_nulls_as_defaults() {
        let json = r#"{"id":"m1","title":"Stalker","rating":null,"scenes":null,"coverImage":null}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();

        assert_eq!(movie.rating, 5.0);
        assert!(movie.scenes.is_empty());
        assert!(movie.cover_image.is_empty());
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let movie = Movie::new(MovieInput::titled("Heat"));
        let value = serde_json::to_value(&movie).unwrap();

        for key in ["mediaType", "coverImage", "generalReview", "createdAt"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_normalize_fills_missing_ids() {
        let json = r#"{"title":"Alien","scenes":[{"comment":"chestburster"},{"id":"s2"}]}"#;
        let mut movie: Movie = serde_json::from_str(json).unwrap();

        assert!(movie.normalize());
        assert!(!movie.id.is_empty());
        assert!(!movie.scenes[0].id.is_empty());
        assert_eq!(movie.scenes[1].id, "s2");
        assert!(!movie.normalize());
    }

    #[test]
    fn test_update_leaves_unset_fields() {
        let mut movie = Movie::new(MovieInput::titled("A"));
        let id = movie.id.clone();
        let created_at = movie.created_at.clone();

        MovieUpdate {
            rating: Some(8.0),
            ..Default::default()
        }
        .apply_to(&mut movie);

        assert_eq!(movie.title, "A");
        assert_eq!(movie.rating, 8.0);
        assert_eq!(movie.id, id);
        assert_eq!(movie.created_at, created_at);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(MovieUpdate::default().is_empty());
        let update = MovieUpdate {
            tags: Some(vec![]),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
