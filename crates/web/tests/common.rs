#![allow(dead_code)]

extern crate dotenv;

use animaqu_content_api::models::anime::{AnimeDetails, AnimeList, EpisodeDetails};
use animaqu_content_api::models::comic::{
    ChapterData, ComicListKind, GenreListResponse, GenreSeriesResponse, HomePageResponse,
    ManhwaDetail, ManhwaListResponse, SearchResponse, TopWeeklyResponse,
};
use animaqu_content_api::{AnimeApi, ComicApi, ContentApiError};
use animaqu_db::DbPool;
use async_trait::async_trait;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use std::sync::{Arc, Once};
use tokio::sync::RwLock;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        dotenv::from_filename("integrationtest.env").ok();
    });
}

/// A pool that never connects until a connection is requested. Routes rejected before they touch
/// the database work with it without a running PostgreSQL.
pub fn lazy_pool() -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new("postgres://animaqu@localhost:1/unused");
    Pool::builder()
        .max_size(1)
        .min_idle(Some(0))
        .build_unchecked(manager)
}

/// A pool against the integration test database, for the tests that need PostgreSQL.
pub fn database_pool() -> DbPool {
    setup();
    let pool = animaqu_db::build_pool().unwrap();
    animaqu_db::migrate(pool.get().unwrap()).unwrap();
    pool
}

fn unavailable(operation: &'static str) -> ContentApiError {
    ContentApiError::Status {
        operation,
        status: 503,
    }
}

/// Fake implementation of [AnimeApi] that serves canned payloads and records every call made to it.
#[derive(Clone, Default)]
pub struct FakeAnimeApi {
    details: Option<AnimeDetails>,
    episode: Option<EpisodeDetails>,
    failing: bool,
    calls: Arc<RwLock<Vec<String>>>,
}

impl FakeAnimeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        FakeAnimeApi {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_details(mut self, details: AnimeDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_episode(mut self, episode: EpisodeDetails) -> Self {
        self.episode = Some(episode);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.write().await.push(call);
    }
}

#[async_trait]
impl AnimeApi for FakeAnimeApi {
    async fn ongoing_anime(&self, page: u32) -> Result<AnimeList, ContentApiError> {
        self.record(format!("ongoing_anime {}", page)).await;
        if self.failing {
            return Err(unavailable("ongoing anime"));
        }
        Ok(AnimeList::default())
    }

    async fn complete_anime(&self, page: u32) -> Result<AnimeList, ContentApiError> {
        self.record(format!("complete_anime {}", page)).await;
        if self.failing {
            return Err(unavailable("completed anime"));
        }
        Ok(AnimeList::default())
    }

    async fn anime_details(&self, slug: &str) -> Result<Option<AnimeDetails>, ContentApiError> {
        self.record(format!("anime_details {}", slug)).await;
        if self.failing {
            return Err(unavailable("anime details"));
        }
        Ok(self.details.clone())
    }

    async fn episode_details(
        &self,
        slug: &str,
        episode: &str,
    ) -> Result<Option<EpisodeDetails>, ContentApiError> {
        self.record(format!("episode_details {} {}", slug, episode))
            .await;
        if self.failing {
            return Err(unavailable("episode details"));
        }
        Ok(self.episode.clone())
    }
}

/// Fake implementation of [ComicApi] that records every call made to it.
#[derive(Clone, Default)]
pub struct FakeComicApi {
    chapter: Option<ChapterData>,
    failing: bool,
    calls: Arc<RwLock<Vec<String>>>,
}

impl FakeComicApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        FakeComicApi {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_chapter(mut self, chapter: ChapterData) -> Self {
        self.chapter = Some(chapter);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn answer<T>(&self, call: String, operation: &'static str, value: T) -> Result<T, ContentApiError> {
        self.calls.write().await.push(call);
        if self.failing {
            return Err(unavailable(operation));
        }
        Ok(value)
    }
}

#[async_trait]
impl ComicApi for FakeComicApi {
    async fn home(&self) -> Result<HomePageResponse, ContentApiError> {
        self.answer(String::from("home"), "comic home page", HomePageResponse::default())
            .await
    }

    async fn list(
        &self,
        kind: ComicListKind,
        page: u32,
    ) -> Result<ManhwaListResponse, ContentApiError> {
        self.answer(
            format!("list {} {}", kind.as_ref(), page),
            "comic listing",
            ManhwaListResponse::default(),
        )
        .await
    }

    async fn top_weekly(&self) -> Result<TopWeeklyResponse, ContentApiError> {
        self.answer(
            String::from("top_weekly"),
            "weekly top comics",
            TopWeeklyResponse::default(),
        )
        .await
    }

    async fn recommendation(&self) -> Result<ManhwaListResponse, ContentApiError> {
        self.answer(
            String::from("recommendation"),
            "comic recommendations",
            ManhwaListResponse::default(),
        )
        .await
    }

    async fn detail(&self, manhwa_id: &str) -> Result<ManhwaDetail, ContentApiError> {
        let detail = ManhwaDetail {
            title: String::from(manhwa_id),
            alternative: None,
            image_src: None,
            rating: None,
            synopsis: None,
            status: None,
            comic_type: None,
            author: None,
            updated_on: None,
            genres: vec![],
            chapters: vec![],
        };
        self.answer(format!("detail {}", manhwa_id), "comic details", detail)
            .await
    }

    async fn chapter(&self, chapter_id: &str) -> Result<ChapterData, ContentApiError> {
        let chapter = self.chapter.clone().unwrap_or(ChapterData {
            title: String::from(chapter_id),
            images: vec![],
            prev_slug: None,
            next_slug: None,
        });
        self.answer(format!("chapter {}", chapter_id), "comic chapter", chapter)
            .await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ContentApiError> {
        self.answer(
            format!("search {}", query),
            "comic search",
            SearchResponse::default(),
        )
        .await
    }

    async fn az_list(
        &self,
        letter: &str,
        page: u32,
    ) -> Result<ManhwaListResponse, ContentApiError> {
        self.answer(
            format!("az_list {} {}", letter, page),
            "comic A-Z listing",
            ManhwaListResponse::default(),
        )
        .await
    }

    async fn genres(&self) -> Result<GenreListResponse, ContentApiError> {
        self.answer(
            String::from("genres"),
            "comic genres",
            GenreListResponse::default(),
        )
        .await
    }

    async fn by_genre(&self, genre: &str) -> Result<GenreSeriesResponse, ContentApiError> {
        self.answer(
            format!("by_genre {}", genre),
            "comics by genre",
            GenreSeriesResponse::default(),
        )
        .await
    }
}
