use crate::http::{segment, ContentHttp};
use crate::models::anime::{AnimeDetails, AnimeList, EpisodeDetails};
use crate::{AnimeApi, ContentApiError, ContentApiSettings};
use anyhow::Result;
use async_trait::async_trait;

/// [AnimeApi] over HTTP.
#[derive(Clone)]
pub struct HttpAnimeApi {
    http: ContentHttp,
}

impl HttpAnimeApi {
    pub fn new(settings: &ContentApiSettings) -> Result<Self> {
        let client = settings.build_http_client()?;
        Ok(HttpAnimeApi {
            http: ContentHttp::new(client, &settings.anime_api_url),
        })
    }
}

#[async_trait]
impl AnimeApi for HttpAnimeApi {
    async fn ongoing_anime(&self, page: u32) -> Result<AnimeList, ContentApiError> {
        self.http
            .get(&format!("/ongoing-anime/{}", page), "ongoing anime")
            .await
    }

    async fn complete_anime(&self, page: u32) -> Result<AnimeList, ContentApiError> {
        self.http
            .get(&format!("/complete-anime/{}", page), "completed anime")
            .await
    }

    async fn anime_details(&self, slug: &str) -> Result<Option<AnimeDetails>, ContentApiError> {
        self.http
            .get_optional(&format!("/anime/{}", segment(slug)), "anime details")
            .await
    }

    async fn episode_details(
        &self,
        slug: &str,
        episode: &str,
    ) -> Result<Option<EpisodeDetails>, ContentApiError> {
        self.http
            .get_optional(
                &format!("/anime/{}/episodes/{}", segment(slug), segment(episode)),
                "episode details",
            )
            .await
    }
}
