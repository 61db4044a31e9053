use crate::models::anime_pages::{
    AnimeDetailPage, AnimeEpisodesPage, AnimeIndexPage, AnimeListPage, BatchDownloadPage,
    EpisodeNavigation, EpisodePlayerPage, PlayerEpisode, CURRENT_PAGE,
};
use animaqu_content_api::models::anime::{AnimeDetails, AnimeList, EpisodeDetails};
use animaqu_content_api::sanitize::{describe, sanitize_anime};
use animaqu_content_api::stream_quality::resolve_stream_quality;
use animaqu_content_api::{AnimeApi, ContentApiError};
use serde_json::Value;
use tracing::warn;

pub async fn anime_index_page<A: AnimeApi>(api: &A) -> Result<AnimeIndexPage, ContentApiError> {
    let (ongoing, completed) = futures::try_join!(api.ongoing_anime(1), api.complete_anime(1))?;
    Ok(AnimeIndexPage {
        title: String::from("Anime - Animaqu"),
        description: String::from("Nonton anime subtitle Indonesia"),
        ongoing_anime: ongoing.data,
        completed_anime: completed.data,
        current_page: CURRENT_PAGE,
    })
}

fn list_page(list: AnimeList, title: &str, description: &str) -> AnimeListPage {
    AnimeListPage {
        title: String::from(title),
        description: String::from(description),
        anime_list: list.data,
        pagination: list.pagination,
        current_page: CURRENT_PAGE,
    }
}

pub async fn ongoing_page<A: AnimeApi>(
    api: &A,
    page: u32,
) -> Result<AnimeListPage, ContentApiError> {
    let list = api.ongoing_anime(page).await?;
    Ok(list_page(
        list,
        "Ongoing Anime - Animaqu",
        "Nonton anime ongoing subtitle Indonesia",
    ))
}

pub async fn complete_page<A: AnimeApi>(
    api: &A,
    page: u32,
) -> Result<AnimeListPage, ContentApiError> {
    let list = api.complete_anime(page).await?;
    Ok(list_page(
        list,
        "Completed Anime - Animaqu",
        "Nonton anime completed subtitle Indonesia",
    ))
}

/// [None] when the anime API doesn't know `slug`.
pub async fn anime_detail_page<A: AnimeApi>(
    api: &A,
    slug: &str,
) -> Result<Option<AnimeDetailPage>, ContentApiError> {
    let details = match api.anime_details(slug).await? {
        Some(d) => d,
        None => return Ok(None),
    };
    let anime = sanitize_anime(details, slug);
    Ok(Some(AnimeDetailPage {
        title: format!("{} - Animaqu", anime.title),
        description: describe(&anime.title, anime.synopsis.as_deref()),
        anime,
        current_page: CURRENT_PAGE,
    }))
}

pub async fn anime_episodes_page<A: AnimeApi>(
    api: &A,
    slug: &str,
) -> Result<Option<AnimeEpisodesPage>, ContentApiError> {
    let details = match api.anime_details(slug).await? {
        Some(d) => d,
        None => return Ok(None),
    };
    let anime = sanitize_anime(details, slug);
    Ok(Some(AnimeEpisodesPage {
        title: format!("Episode {} - Animaqu", anime.title),
        description: format!("Daftar episode {} subtitle Indonesia", anime.title),
        episodes: anime.episodes.clone(),
        anime,
        current_page: CURRENT_PAGE,
    }))
}

pub async fn batch_download_page<A: AnimeApi>(
    api: &A,
    slug: &str,
) -> Result<Option<BatchDownloadPage>, ContentApiError> {
    let mut details = match api.anime_details(slug).await? {
        Some(d) => d,
        None => return Ok(None),
    };
    let batch_links = details
        .batch_links
        .take()
        .unwrap_or_else(|| Value::Array(vec![]));
    let anime = sanitize_anime(details, slug);
    Ok(Some(BatchDownloadPage {
        title: format!("Download Batch {} - Animaqu", anime.title),
        description: format!("Download batch {} subtitle Indonesia", anime.title),
        anime,
        batch_links,
        current_page: CURRENT_PAGE,
    }))
}

/// Fetch the anime and the episode together, once each. [None] when either is unknown.
pub async fn episode_player_page<A: AnimeApi>(
    api: &A,
    slug: &str,
    episode: &str,
) -> Result<Option<EpisodePlayerPage>, ContentApiError> {
    let (details, episode_details) =
        futures::try_join!(api.anime_details(slug), api.episode_details(slug, episode))?;
    match (details, episode_details) {
        (Some(d), Some(e)) => Ok(Some(build_episode_player_page(d, e, slug, episode))),
        _ => Ok(None),
    }
}

fn build_episode_player_page(
    details: AnimeDetails,
    episode_details: EpisodeDetails,
    slug: &str,
    episode: &str,
) -> EpisodePlayerPage {
    let anime = sanitize_anime(details, slug);
    let quality = resolve_stream_quality(
        episode_details.stream_list.iter(),
        episode_details.stream_url.as_deref(),
    );
    let playable = quality.has_playable_source();
    if !playable {
        warn!(slug, episode, "No playable stream source for episode.");
    }

    EpisodePlayerPage {
        title: format!("{} Episode {} - Animaqu", anime.title, episode),
        description: format!(
            "Nonton {} Episode {} subtitle Indonesia",
            anime.title, episode
        ),
        episode: PlayerEpisode {
            number: String::from(episode),
            title: episode_details
                .episode_title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| format!("Episode {}", episode)),
            video_source: episode_details.stream_url,
            available_resolutions: quality.available_resolutions,
            stream_by_resolution: quality.stream_by_resolution,
            playable,
            download_links: episode_details
                .download_urls
                .unwrap_or_else(|| Value::Array(vec![])),
        },
        navigation: EpisodeNavigation {
            has_next: episode_details.has_next_episode,
            has_previous: episode_details.has_previous_episode,
            next: episode_details.next_episode,
            previous: episode_details.previous_episode,
            all_episodes: anime.episodes.clone(),
        },
        anime,
        current_page: CURRENT_PAGE,
    }
}
