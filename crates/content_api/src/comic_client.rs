use crate::http::{segment, ContentHttp};
use crate::models::comic::{
    ChapterData, ComicListKind, GenreListResponse, GenreSeriesResponse, HomePageResponse,
    ManhwaDetail, ManhwaListResponse, SearchResponse, TopWeeklyResponse,
};
use crate::{ComicApi, ContentApiError, ContentApiSettings};
use anyhow::Result;
use async_trait::async_trait;

/// [ComicApi] over HTTP.
#[derive(Clone)]
pub struct HttpComicApi {
    http: ContentHttp,
}

impl HttpComicApi {
    pub fn new(settings: &ContentApiSettings) -> Result<Self> {
        let client = settings.build_http_client()?;
        Ok(HttpComicApi {
            http: ContentHttp::new(client, &settings.comic_api_url),
        })
    }
}

#[async_trait]
impl ComicApi for HttpComicApi {
    async fn home(&self) -> Result<HomePageResponse, ContentApiError> {
        self.http.get("/home", "comic home page").await
    }

    async fn list(
        &self,
        kind: ComicListKind,
        page: u32,
    ) -> Result<ManhwaListResponse, ContentApiError> {
        self.http.get(&kind.path(page), "comic listing").await
    }

    async fn top_weekly(&self) -> Result<TopWeeklyResponse, ContentApiError> {
        self.http.get("/top-weekly", "weekly top comics").await
    }

    async fn recommendation(&self) -> Result<ManhwaListResponse, ContentApiError> {
        self.http.get("/recommendation", "comic recommendations").await
    }

    async fn detail(&self, manhwa_id: &str) -> Result<ManhwaDetail, ContentApiError> {
        self.http
            .get(&format!("/manga/{}", segment(manhwa_id)), "comic details")
            .await
    }

    async fn chapter(&self, chapter_id: &str) -> Result<ChapterData, ContentApiError> {
        self.http
            .get(&format!("/chapter/{}", segment(chapter_id)), "comic chapter")
            .await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ContentApiError> {
        self.http
            .get(&format!("/search/{}", segment(query)), "comic search")
            .await
    }

    async fn az_list(
        &self,
        letter: &str,
        page: u32,
    ) -> Result<ManhwaListResponse, ContentApiError> {
        self.http
            .get(
                &format!("/az-list/{}?page={}", segment(letter), page),
                "comic A-Z listing",
            )
            .await
    }

    async fn genres(&self) -> Result<GenreListResponse, ContentApiError> {
        self.http.get("/genres", "comic genres").await
    }

    async fn by_genre(&self, genre: &str) -> Result<GenreSeriesResponse, ContentApiError> {
        self.http
            .get(&format!("/genre/{}", segment(genre)), "comics by genre")
            .await
    }
}
