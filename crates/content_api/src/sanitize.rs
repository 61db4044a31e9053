//! Clean-up applied to content API payloads before they reach a render payload.

use crate::models::anime::{AnimeDetails, EpisodeEntry};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

const DESCRIPTION_LENGTH: usize = 160;

lazy_static! {
    static ref EPISODE_NUMBER: Regex =
        Regex::new(r"(?i)Episode\s+(\d+)").expect("episode number pattern is valid");
}

/// An anime with its required fields filled in and its episode labels reduced to numbers.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Anime {
    pub slug: String,
    pub title: String,
    pub synopsis: Option<String>,
    pub poster: Option<String>,
    pub episodes: Vec<NumberedEpisode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NumberedEpisode {
    /// The episode number parsed from the API label, or [None] for specials such as OVAs.
    pub episode: Option<String>,
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<EpisodeEntry> for NumberedEpisode {
    fn from(entry: EpisodeEntry) -> Self {
        NumberedEpisode {
            episode: episode_number(&entry.episode),
            slug: entry.slug,
            extra: entry.extra,
        }
    }
}

/// Default every field the pages depend on. A missing or blank title is derived from the slug.
pub fn sanitize_anime(details: AnimeDetails, slug: &str) -> Anime {
    let title = details
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| title_from_slug(slug));
    Anime {
        slug: slug.to_string(),
        title,
        synopsis: details.synopsis.filter(|s| !s.trim().is_empty()),
        poster: details.poster,
        episodes: details
            .episodes
            .into_iter()
            .map(NumberedEpisode::from)
            .collect(),
        extra: details.extra,
    }
}

/// Pull the number out of an episode label such as `"Frieren Episode 12 Subtitle Indonesia"`.
pub fn episode_number(label: &str) -> Option<String> {
    EPISODE_NUMBER
        .captures(label)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// `"sousou-no-frieren"` becomes `"Sousou No Frieren"`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split(|c| c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The page description: the start of the synopsis, or a generic line naming the title.
pub fn describe(title: &str, synopsis: Option<&str>) -> String {
    match synopsis {
        Some(s) => {
            let start: String = s.chars().take(DESCRIPTION_LENGTH).collect();
            format!("{}...", start)
        }
        None => format!("Nonton {} subtitle Indonesia", title),
    }
}

/// The last non-empty path segment of a comic or chapter slug, e.g. `"/manga/solo-leveling/"`
/// becomes `"solo-leveling"`.
pub fn extract_slug_id(slug: &str) -> &str {
    slug.split('/').filter(|p| !p.is_empty()).last().unwrap_or(slug)
}
