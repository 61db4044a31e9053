//! Render payloads for the anime pages.

use animaqu_content_api::models::anime::{AnimeSummary, Pagination};
use animaqu_content_api::sanitize::{Anime, NumberedEpisode};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Marks the section of the site a page belongs to, for the view layer's navigation.
pub const CURRENT_PAGE: &str = "anime";

#[derive(Serialize, Debug)]
pub struct AnimeIndexPage {
    pub title: String,
    pub description: String,
    pub ongoing_anime: Vec<AnimeSummary>,
    pub completed_anime: Vec<AnimeSummary>,
    pub current_page: &'static str,
}

/// One page of the ongoing or completed listing.
#[derive(Serialize, Debug)]
pub struct AnimeListPage {
    pub title: String,
    pub description: String,
    pub anime_list: Vec<AnimeSummary>,
    pub pagination: Option<Pagination>,
    pub current_page: &'static str,
}

#[derive(Serialize, Debug)]
pub struct AnimeDetailPage {
    pub title: String,
    pub description: String,
    pub anime: Anime,
    pub current_page: &'static str,
}

#[derive(Serialize, Debug)]
pub struct AnimeEpisodesPage {
    pub title: String,
    pub description: String,
    pub anime: Anime,
    pub episodes: Vec<NumberedEpisode>,
    pub current_page: &'static str,
}

#[derive(Serialize, Debug)]
pub struct BatchDownloadPage {
    pub title: String,
    pub description: String,
    pub anime: Anime,
    pub batch_links: Value,
    pub current_page: &'static str,
}

#[derive(Serialize, Debug)]
pub struct EpisodePlayerPage {
    pub title: String,
    pub description: String,
    pub anime: Anime,
    pub episode: PlayerEpisode,
    pub navigation: EpisodeNavigation,
    pub current_page: &'static str,
}

/// What the player needs to start playback.
#[derive(Serialize, Debug)]
pub struct PlayerEpisode {
    pub number: String,
    pub title: String,
    pub video_source: Option<String>,
    pub available_resolutions: Vec<u32>,
    pub stream_by_resolution: BTreeMap<u32, String>,

    /// `false` when no stream URL at all could be found for the episode.
    pub playable: bool,
    pub download_links: Value,
}

/// Previous/next links exactly as the anime API reported them.
#[derive(Serialize, Debug)]
pub struct EpisodeNavigation {
    pub has_next: bool,
    pub has_previous: bool,
    pub next: Option<Value>,
    pub previous: Option<Value>,
    pub all_episodes: Vec<NumberedEpisode>,
}
