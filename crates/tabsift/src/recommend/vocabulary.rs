//! Canonical language and genre vocabularies.

/// Language returned when nothing in the table matches.
pub const OTHER_LANGUAGE: &str = "other";

/// Genre returned when nothing in the table matches.
pub const UNKNOWN_GENRE: &str = "unknown";

/// Filter value that disables a filter.
pub const ALL: &str = "all";

/// Canonical language keys with their exact-match aliases.
pub const LANGUAGES: &[(&str, &[&str])] = &[
    ("hindi", &["hindi", "hi", "hin"]),
    ("english", &["english", "en", "eng"]),
    ("telugu", &["telugu", "te"]),
    ("tamil", &["tamil", "ta"]),
    ("malayalam", &["malayalam", "ml"]),
    ("kannada", &["kannada", "kn"]),
];

/// Canonical genre keys with their exact-match aliases.
pub const GENRES: &[(&str, &[&str])] = &[
    ("action", &["action"]),
    ("adventure", &["adventure"]),
    ("comedy", &["comedy"]),
    ("drama", &["drama"]),
    ("romance", &["romance"]),
    ("horror", &["horror"]),
    ("thriller", &["thriller"]),
    ("mystery", &["mystery"]),
    ("science fiction", &["science fiction", "sci fi", "sci-fi", "scifi"]),
    ("fantasy", &["fantasy"]),
    ("animation", &["animation"]),
    ("family", &["family"]),
    ("crime", &["crime"]),
    ("biography", &["biography", "biopic"]),
    ("historical", &["historical", "history"]),
    ("war", &["war"]),
    ("musical", &["musical", "music"]),
    ("sports", &["sports", "sport"]),
    ("documentary", &["documentary"]),
    ("western", &["western"]),
    ("superhero", &["superhero"]),
    ("psychological", &["psychological"]),
    ("noir", &["noir"]),
    ("disaster", &["disaster"]),
    ("survival", &["survival"]),
];

/// First table entry whose aliases contain `text` exactly, or whose key is a
/// substring of `text`.
fn lookup(table: &'static [(&'static str, &'static [&'static str])], text: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(canonical, aliases)| aliases.contains(&text) || text.contains(canonical))
        .map(|(canonical, _)| *canonical)
}

/// Map a free-form language value to a canonical key.
pub fn canonical_language(value: &str) -> &'static str {
    let text = value.trim().to_lowercase();
    lookup(LANGUAGES, &text).unwrap_or(OTHER_LANGUAGE)
}

/// Map a free-form genre value to a canonical key.
///
/// Only the first comma-separated genre counts. The word "film" is dropped
/// and hyphens read as spaces.
pub fn canonical_genre(value: &str) -> &'static str {
    let text = value.trim();
    if text.is_empty() {
        return UNKNOWN_GENRE;
    }

    let first = text
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
        .replace("film", "")
        .replace('-', " ");
    let first = first.split_whitespace().collect::<Vec<_>>().join(" ");

    lookup(GENRES, &first).unwrap_or(UNKNOWN_GENRE)
}

/// Language filter choices: `all` followed by every canonical key.
pub fn language_options() -> Vec<String> {
    options(LANGUAGES)
}

/// Genre filter choices: `all` followed by every canonical key.
pub fn genre_options() -> Vec<String> {
    options(GENRES)
}

fn options(table: &[(&str, &[&str])]) -> Vec<String> {
    std::iter::once(ALL)
        .chain(table.iter().map(|(canonical, _)| *canonical))
        .map(str::to_string)
        .collect()
}

/// Normalize a filter argument; blank means no filter.
pub fn normalize_filter(value: &str) -> String {
    let value = value.trim().to_lowercase();
    if value.is_empty() { ALL.to_string() } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages() {
        assert_eq!(canonical_language("hi"), "hindi");
        assert_eq!(canonical_language(" EN "), "english");
        assert_eq!(canonical_language("Tamil, English"), "english");
        assert_eq!(canonical_language("malayalam dub"), "malayalam");
        assert_eq!(canonical_language("fr"), "other");
        assert_eq!(canonical_language(""), "other");
    }

    #[test]
    fn test_genres() {
        assert_eq!(canonical_genre("Sci-Fi, Thriller"), "science fiction");
        assert_eq!(canonical_genre("Drama"), "drama");
        assert_eq!(canonical_genre("Action Film"), "action");
        assert_eq!(canonical_genre("Romantic Comedy"), "comedy");
        assert_eq!(canonical_genre("History"), "historical");
        assert_eq!(canonical_genre("Musical"), "musical");
        assert_eq!(canonical_genre("  "), "unknown");
        assert_eq!(canonical_genre("Slice of life"), "unknown");
    }

    #[test]
    fn test_first_matching_entry_wins() {
        assert_eq!(canonical_genre("War Western"), "war");
        assert_eq!(canonical_genre("Family Adventure"), "adventure");
    }

    #[test]
    fn test_options() {
        let languages = language_options();
        assert_eq!(languages.len(), 7);
        assert_eq!(languages[0], "all");
        assert_eq!(languages[1], "hindi");

        let genres = genre_options();
        assert_eq!(genres.len(), 26);
        assert_eq!(genres.last().map(String::as_str), Some("survival"));
    }

    #[test]
    fn test_normalize_filter() {
        assert_eq!(normalize_filter(" Hindi "), "hindi");
        assert_eq!(normalize_filter(""), "all");
    }
}
