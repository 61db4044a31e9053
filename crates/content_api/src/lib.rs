//! Typed access to the third-party anime and comics content APIs, plus the normalisation
//! applied to their payloads before they are rendered.

mod anime_client;
mod comic_client;
mod content_api_error;
mod http;
pub mod models;
pub mod sanitize;
mod settings;
pub mod stream_quality;

use async_trait::async_trait;

pub use anime_client::HttpAnimeApi;
pub use comic_client::HttpComicApi;
pub use content_api_error::ContentApiError;
pub use settings::ContentApiSettings;

use crate::models::anime::{AnimeDetails, AnimeList, EpisodeDetails};
use crate::models::comic::{
    ChapterData, ComicListKind, GenreListResponse, GenreSeriesResponse, HomePageResponse,
    ManhwaDetail, ManhwaListResponse, SearchResponse, TopWeeklyResponse,
};

/// The anime content API. Lookups by slug answer [None] when the API doesn't know the slug.
#[async_trait]
pub trait AnimeApi {
    async fn ongoing_anime(&self, page: u32) -> Result<AnimeList, ContentApiError>;

    async fn complete_anime(&self, page: u32) -> Result<AnimeList, ContentApiError>;

    async fn anime_details(&self, slug: &str) -> Result<Option<AnimeDetails>, ContentApiError>;

    async fn episode_details(
        &self,
        slug: &str,
        episode: &str,
    ) -> Result<Option<EpisodeDetails>, ContentApiError>;
}

/// The comics content API backing the manhwa reader.
#[async_trait]
pub trait ComicApi {
    async fn home(&self) -> Result<HomePageResponse, ContentApiError>;

    async fn list(&self, kind: ComicListKind, page: u32)
        -> Result<ManhwaListResponse, ContentApiError>;

    async fn top_weekly(&self) -> Result<TopWeeklyResponse, ContentApiError>;

    async fn recommendation(&self) -> Result<ManhwaListResponse, ContentApiError>;

    async fn detail(&self, manhwa_id: &str) -> Result<ManhwaDetail, ContentApiError>;

    async fn chapter(&self, chapter_id: &str) -> Result<ChapterData, ContentApiError>;

    async fn search(&self, query: &str) -> Result<SearchResponse, ContentApiError>;

    async fn az_list(&self, letter: &str, page: u32)
        -> Result<ManhwaListResponse, ContentApiError>;

    async fn genres(&self) -> Result<GenreListResponse, ContentApiError>;

    async fn by_genre(&self, genre: &str) -> Result<GenreSeriesResponse, ContentApiError>;
}
