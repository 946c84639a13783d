//! Built-in genre and tag vocabulary offered by the forms.
//!
//! Movies are not restricted to these values; they are suggestions only.

/// Genres offered when adding or editing a movie.
pub const GENRES: &[&str] = &[
    "Aksiyon",
    "Komedi",
    "Dram",
    "Korku",
    "Bilim Kurgu",
    "Romantik",
    "Gerilim",
    "Animasyon",
    "Belgesel",
    "Fantastik",
    "Macera",
    "Suç",
    "Müzikal",
    "Tarih",
];

/// Tags offered when adding or editing a movie.
pub const DEFAULT_TAGS: &[&str] = &[
    "Başyapıt",
    "Tekrar İzlenir",
    "Ağlattı 😭",
    "Güldürdü 😂",
    "Düşündürdü 🤔",
    "Hayal Kırıklığı",
    "Oscar Adayı",
    "Gizli Hazine",
    "Klasik",
    "Yeni Favorim",
];

/// Check whether a genre is part of the built-in vocabulary.
pub fn is_known_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}

/// Append values to a list, skipping blanks and values already present.
pub fn push_unique(list: &mut Vec<String>, values: impl IntoIterator<Item = String>) {
    for value in values {
        let value = value.trim().to_string();
        if !value.is_empty() && !list.contains(&value) {
            list.push(value);
        }
    }
}
