//! Models for the anime content API. Only the fields Animaqu reads are typed; everything else is
//! kept in `extra` and handed to the view layer untouched.

use crate::models::RawStreamMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One card in an ongoing/completed listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimeSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, alias = "thumb", alias = "image")]
    pub poster: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub previous_page: Option<u32>,
    #[serde(default)]
    pub last_visible_page: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnimeList {
    #[serde(default)]
    pub data: Vec<AnimeSummary>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// An entry in an anime's episode list. `episode` is the API's display label, e.g.
/// `"Sousou no Frieren Episode 12 Subtitle Indonesia"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EpisodeEntry {
    #[serde(default)]
    pub episode: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnimeDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default, alias = "thumb", alias = "image")]
    pub poster: Option<String>,
    #[serde(default, alias = "episode_lists")]
    pub episodes: Vec<EpisodeEntry>,
    #[serde(default, alias = "batch")]
    pub batch_links: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The per-episode payload that feeds the player page.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EpisodeDetails {
    #[serde(default, alias = "episode")]
    pub episode_title: Option<String>,
    /// The single stream URL used when the quality map lacks a usable entry.
    #[serde(default)]
    pub stream_url: Option<String>,
    /// The API spells this field `steramList`.
    #[serde(default, rename = "steramList", alias = "streamList", alias = "stream_list")]
    pub stream_list: RawStreamMap,
    #[serde(default)]
    pub download_urls: Option<Value>,
    #[serde(default)]
    pub all_episodes: Vec<Value>,
    #[serde(default)]
    pub has_next_episode: bool,
    #[serde(default)]
    pub has_previous_episode: bool,
    #[serde(default)]
    pub next_episode: Option<Value>,
    #[serde(default)]
    pub previous_episode: Option<Value>,
}
