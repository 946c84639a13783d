//! Catalog views - search, filters, ordering and statistics.

use crate::models::{MediaType, Movie};
use std::collections::HashMap;

/// Criteria for narrowing the catalog. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    /// Case-insensitive title substring
    pub search: Option<String>,
    /// Exact genre the movie must carry
    pub genre: Option<String>,
    /// Exact tag the movie must carry
    pub tag: Option<String>,
    /// Media type the movie must have
    pub media_type: Option<MediaType>,
}

impl MovieFilter {
    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty)
            && self.genre.is_none()
            && self.tag.is_none()
            && self.media_type.is_none()
    }

    /// Check a single movie against the criteria.
    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(ref query) = self.search {
            if !movie.title.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref genre) = self.genre {
            if !movie.genres.contains(genre) {
                return false;
            }
        }
        if let Some(ref tag) = self.tag {
            if !movie.tags.contains(tag) {
                return false;
            }
        }
        if let Some(media_type) = self.media_type {
            if movie.media_type != media_type {
                return false;
            }
        }
        true
    }
}

/// Movies matching `filter`, highest rated first.
///
/// The sort is stable, so equally rated movies keep collection order.
pub fn filter_movies<'a>(movies: &'a [Movie], filter: &MovieFilter) -> Vec<&'a Movie> {
    let mut matched: Vec<&Movie> = movies.iter().filter(|m| filter.matches(m)).collect();
    matched.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    matched
}

/// Summary numbers for a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub films: usize,
    pub series: usize,
    pub scenes: usize,
    /// Mean rating, `None` for an empty collection
    pub average_rating: Option<f32>,
    /// Genre usage, most frequent first, ties by name
    pub genres: Vec<(String, usize)>,
    /// Tag usage, most frequent first, ties by name
    pub tags: Vec<(String, usize)>,
}

impl CatalogStats {
    /// Compute statistics over a collection.
    pub fn from_movies(movies: &[Movie]) -> Self {
        let mut stats = CatalogStats {
            total: movies.len(),
            ..Default::default()
        };

        let mut genres: HashMap<&str, usize> = HashMap::new();
        let mut tags: HashMap<&str, usize> = HashMap::new();
        let mut rating_sum = 0.0f32;

        for movie in movies {
            match movie.media_type {
                MediaType::Film => stats.films += 1,
                MediaType::Series => stats.series += 1,
            }
            stats.scenes += movie.scenes.len();
            rating_sum += movie.rating;

            for genre in &movie.genres {
                *genres.entry(genre.as_str()).or_insert(0) += 1;
            }
            for tag in &movie.tags {
                *tags.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        if !movies.is_empty() {
            stats.average_rating = Some(rating_sum / movies.len() as f32);
        }
        stats.genres = ranked(genres);
        stats.tags = ranked(tags);
        stats
    }
}

fn ranked(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
